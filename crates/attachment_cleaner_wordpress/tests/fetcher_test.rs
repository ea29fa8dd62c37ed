use attachment_cleaner_core::{MediaItem, MediaItems};
use attachment_cleaner_wordpress::{
    ApiCall, ApiResponse, DEFAULT_MAX_PAGES, EndOfData, InMemoryMediaApi, MediaFetcher,
    PageOutcome,
};
use serde_json::{Value, json};

const FIXTURE: &str = include_str!("../../attachment_cleaner_core/tests/fixtures/media_item.json");

fn items(ids: std::ops::Range<u64>) -> MediaItems {
    ids.map(|id| {
        let mut value: Value = serde_json::from_str(FIXTURE).unwrap();
        value["id"] = json!(id);
        serde_json::from_value::<MediaItem>(value).unwrap()
    })
    .collect()
}

fn ids(items: &MediaItems) -> Vec<u64> {
    items.map(|item| *item.id())
}

#[tokio::test]
async fn loads_pages_until_wordpress_error_object() {
    let api = InMemoryMediaApi::new()
        .with_page(&items(1..4))
        .unwrap()
        .with_page(&items(4..6))
        .unwrap();

    let loaded = MediaFetcher::new(&api).load_all().await.unwrap();

    assert_eq!(ids(&loaded), vec![1, 2, 3, 4, 5]);
    assert_eq!(
        api.calls(),
        vec![
            ApiCall::List { page: 1, per_page: 100 },
            ApiCall::List { page: 2, per_page: 100 },
            ApiCall::List { page: 3, per_page: 100 },
        ]
    );
}

#[tokio::test]
async fn empty_page_ends_listing() {
    let api = InMemoryMediaApi::new()
        .with_page(&items(1..3))
        .unwrap()
        .with_page_body(200, "[]")
        .with_page(&items(3..5))
        .unwrap();

    let loaded = MediaFetcher::new(&api).load_all().await.unwrap();

    assert_eq!(ids(&loaded), vec![1, 2]);
    assert_eq!(api.list_count(), 2);
}

#[tokio::test]
async fn malformed_page_keeps_everything_before_it() {
    let mut broken: Value = serde_json::from_str(FIXTURE).unwrap();
    broken.as_object_mut().unwrap().remove("slug");
    let api = InMemoryMediaApi::new()
        .with_page(&items(1..3))
        .unwrap()
        .with_page_body(200, json!([broken]).to_string())
        .with_page(&items(3..5))
        .unwrap();

    let loaded = MediaFetcher::new(&api).load_all().await.unwrap();

    assert_eq!(ids(&loaded), vec![1, 2]);
}

#[tokio::test]
async fn fetch_page_reports_end_of_data_reason() {
    let api = InMemoryMediaApi::new()
        .with_page(&items(1..2))
        .unwrap()
        .with_page_body(200, "[]")
        .with_page_body(200, "<html>maintenance</html>");
    let fetcher = MediaFetcher::new(&api);

    assert!(matches!(fetcher.fetch_page(1).await.unwrap(), PageOutcome::Page(page) if page.len() == 1));
    assert_eq!(
        fetcher.fetch_page(2).await.unwrap(),
        PageOutcome::EndOfData(EndOfData::Empty)
    );
    assert!(matches!(
        fetcher.fetch_page(3).await.unwrap(),
        PageOutcome::EndOfData(EndOfData::Invalid(_))
    ));
}

#[tokio::test]
async fn never_requests_more_than_page_bound() {
    let api = InMemoryMediaApi::new().with_fallback(ApiResponse::new(
        200,
        serde_json::to_string(&items(1..3)).unwrap(),
    ));

    let loaded = MediaFetcher::new(&api).load_all().await.unwrap();

    assert_eq!(api.list_count(), DEFAULT_MAX_PAGES as usize);
    assert_eq!(loaded.len(), 2 * DEFAULT_MAX_PAGES as usize);
}

#[tokio::test]
async fn page_size_and_bound_are_configurable() {
    let api = InMemoryMediaApi::new().with_fallback(ApiResponse::new(
        200,
        serde_json::to_string(&items(1..2)).unwrap(),
    ));

    let loaded = MediaFetcher::new(&api)
        .with_per_page(10)
        .with_max_pages(3)
        .load_all()
        .await
        .unwrap();

    assert_eq!(loaded.len(), 3);
    assert_eq!(api.calls().last(), Some(&ApiCall::List { page: 3, per_page: 10 }));
}

#[tokio::test]
async fn transport_failure_aborts_listing() {
    let api = InMemoryMediaApi::new()
        .with_page(&items(1..3))
        .unwrap()
        .with_page(&items(3..5))
        .unwrap()
        .failing_page(2);

    let err = MediaFetcher::new(&api).load_all().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(api.list_count(), 2);
}
