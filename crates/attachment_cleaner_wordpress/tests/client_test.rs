use attachment_cleaner_error::MediaApiErrorKind;
use attachment_cleaner_wordpress::{Credentials, MediaApi, WordPressClient};
use wiremock::matchers::{basic_auth, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn list_requests_page_without_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/media"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let client = WordPressClient::new(&server.uri(), None).unwrap();
    let response = client.list_media(3, 100).await.unwrap();

    assert_eq!(*response.status(), 200);
    assert_eq!(response.body(), "[]");
    let received = server.received_requests().await.unwrap();
    assert!(received[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn list_passes_error_status_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/media"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"code":"rest_post_invalid_page_number"}"#),
        )
        .mount(&server)
        .await;

    let client = WordPressClient::new(&server.uri(), None).unwrap();
    let response = client.list_media(99, 100).await.unwrap();

    assert_eq!(*response.status(), 400);
    assert!(!response.is_success());
}

#[tokio::test]
async fn delete_is_forced_and_authenticated() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/wp-json/wp/v2/media/4812"))
        .and(query_param("force", "true"))
        .and(basic_auth("editor", "app-password"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"deleted":true}"#))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/", server.uri());
    let client =
        WordPressClient::new(&base, Some(Credentials::new("editor", "app-password"))).unwrap();
    let response = client.delete_media(4812).await.unwrap();

    assert!(response.is_success());
    assert_eq!(response.body(), r#"{"deleted":true}"#);
}

#[tokio::test]
async fn delete_without_credentials_is_refused_locally() {
    let server = MockServer::start().await;
    let client = WordPressClient::new(&server.uri(), None).unwrap();

    let err = client.delete_media(1).await.unwrap_err();

    assert_eq!(err.kind, MediaApiErrorKind::MissingCredentials);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let client = WordPressClient::new("http://127.0.0.1:1", None).unwrap();
    let err = client.list_media(1, 100).await.unwrap_err();

    assert!(err.is_transport());
}

#[test]
fn rejects_relative_base_url() {
    let err = WordPressClient::new("example.org", None).unwrap_err();

    assert!(matches!(err.kind, MediaApiErrorKind::InvalidUrl(_)));
    assert!(!err.is_transport());
}

#[test]
fn api_url_is_joined_once() {
    let client = WordPressClient::new("https://example.org/", None).unwrap();

    assert_eq!(client.api_url(), "https://example.org/wp-json/wp/v2");
}

#[test]
fn credentials_debug_hides_password() {
    let debug = format!("{:?}", Credentials::new("editor", "hunter2"));

    assert!(debug.contains("editor"));
    assert!(!debug.contains("hunter2"));
}
