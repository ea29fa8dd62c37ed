//! Media item types mirroring the WordPress `wp/v2/media` resource.
//!
//! Deserialization is strict: every field the REST API always emits is
//! required, so a page containing anything other than media objects (for
//! example the error object WordPress returns past the last page) fails as a
//! whole.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// A field the API wraps as `{ "rendered": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct Rendered {
    /// HTML as rendered by the site
    rendered: String,
}

impl Rendered {
    /// Wrap already-rendered markup.
    pub fn new(rendered: impl Into<String>) -> Self {
        Self {
            rendered: rendered.into(),
        }
    }
}

/// File-level details of an uploaded attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct MediaDetails {
    /// Size of the original upload in bytes
    filesize: u64,
    /// Generated renditions keyed by size name (empty for documents)
    sizes: Map<String, JsonValue>,
    /// Pixel width, images only
    #[serde(default)]
    width: Option<u32>,
    /// Pixel height, images only
    #[serde(default)]
    height: Option<u32>,
}

/// A single HAL-style link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Link {
    /// Target URL
    href: String,
    /// Allowed methods and similar hints for the target
    #[serde(rename = "targetHints", default)]
    target_hints: Option<Map<String, JsonValue>>,
    /// Whether the target can be embedded with `_embed`
    #[serde(default)]
    embeddable: bool,
}

/// Related resources advertised alongside a media item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Links {
    /// The item itself
    #[serde(rename = "self")]
    this: Vec<Link>,
    /// The media collection
    collection: Vec<Link>,
    /// Schema of the resource type
    about: Vec<Link>,
    /// Uploading user
    author: Vec<Link>,
    /// Comments on the attachment
    replies: Vec<Link>,
}

/// One attachment in the remote media library.
///
/// The identifier is the only key used for deletion. Orphan status is
/// decided by `post` alone: `None` means the upload is attached to nothing.
///
/// # Examples
///
/// ```
/// use attachment_cleaner_core::MediaItem;
/// use serde_json::json;
///
/// let item: MediaItem = serde_json::from_value(json!({
///     "id": 7,
///     "date": "2021-01-05T10:00:00",
///     "date_gmt": "2021-01-05T10:00:00",
///     "guid": { "rendered": "https://example.org/?attachment_id=7" },
///     "modified": "2021-01-05T10:00:00",
///     "modified_gmt": "2021-01-05T10:00:00",
///     "slug": "pew-news-2021-01",
///     "status": "inherit",
///     "type": "attachment",
///     "link": "https://example.org/pew-news-2021-01/",
///     "title": { "rendered": "Pew News" },
///     "author": 1,
///     "featured_media": 0,
///     "comment_status": "open",
///     "ping_status": "closed",
///     "template": "",
///     "meta": [],
///     "class_list": [],
///     "description": { "rendered": "" },
///     "caption": { "rendered": "" },
///     "alt_text": "",
///     "mime_type": "application/pdf",
///     "media_details": { "filesize": 1024, "sizes": {} },
///     "post": null,
///     "source_url": "https://example.org/wp-content/uploads/pew-news-2021-01.pdf"
/// })).unwrap();
///
/// assert!(item.is_orphan());
/// assert_eq!(*item.id(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct MediaItem {
    /// Unique attachment identifier
    id: u64,
    /// Upload time in the site's timezone
    date: NaiveDateTime,
    /// Upload time in UTC
    date_gmt: NaiveDateTime,
    /// Globally unique identifier
    guid: Rendered,
    /// Last modification in the site's timezone
    modified: NaiveDateTime,
    /// Last modification in UTC
    modified_gmt: NaiveDateTime,
    /// URL-safe name
    slug: String,
    /// Publication status (`inherit` for attachments)
    status: String,
    /// Post type, always `attachment`
    #[serde(rename = "type")]
    kind: String,
    /// Public attachment page
    link: String,
    /// Attachment title
    title: Rendered,
    /// Uploading user
    author: u64,
    /// Featured media of the attachment itself
    featured_media: u64,
    /// Comment status
    comment_status: String,
    /// Ping status
    ping_status: String,
    /// Theme template
    template: String,
    /// Registered meta fields
    meta: Vec<Map<String, JsonValue>>,
    /// CSS classes the theme assigns
    class_list: Vec<String>,
    /// Attachment description
    description: Rendered,
    /// Attachment caption
    caption: Rendered,
    /// Alternative text
    alt_text: String,
    /// MIME type of the upload
    mime_type: String,
    /// Size and rendition details
    media_details: MediaDetails,
    /// Post the attachment belongs to; `None` for orphans
    #[getter(skip)]
    post: Option<u64>,
    /// Direct URL of the uploaded file
    source_url: String,
    /// Related resources, carried through without validation
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    links: Option<Links>,
}

impl MediaItem {
    /// The post this attachment is attached to, if any.
    pub fn attached_to(&self) -> Option<u64> {
        self.post
    }

    /// Whether the attachment belongs to no post.
    pub fn is_orphan(&self) -> bool {
        self.post.is_none()
    }
}
