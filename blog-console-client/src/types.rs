//! Wire types for the blog module of the content-management REST API.

use serde::{Deserialize, Serialize};

/// A blog post as returned by the server.
///
/// `name` is the server-assigned identifier used in URLs; it is distinct from
/// the human-readable `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Server-assigned identifier (URL-safe short name).
    pub name: String,
    /// Display title.
    pub title: String,
    /// Post body as HTML markup.
    pub content: String,
    /// Author user name, if the server reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Whether the post is still an unpublished draft.
    #[serde(default)]
    pub is_draft: bool,
    /// Whether the post has been published to an external blog engine.
    #[serde(default)]
    pub external_published: bool,
    /// Creation timestamp (RFC 3339), if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    /// Last-modification timestamp (RFC 3339), if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<String>,
}

/// JSON payload for creating or saving a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavePostRequest {
    /// Display title. The server rejects empty titles; callers validate first.
    pub title: String,
    /// Post body as HTML markup.
    pub content: String,
    /// Keep the post as a draft instead of publishing it on the site.
    pub draft: bool,
}

/// Discriminator for the external-publishing endpoint.
///
/// Serialized lowercase into the request body: `{"action":"publish"}` etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishingAction {
    /// Publish the post to the configured external blog engine.
    Publish,
    /// Push the current content to the already-published external copy.
    Update,
    /// Remove the post from the external blog engine.
    Unpublish,
}

impl PublishingAction {
    /// Lowercase wire name, also used for logging.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Publish => "publish",
            Self::Update => "update",
            Self::Unpublish => "unpublish",
        }
    }
}

/// Body of `POST .../publishing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishingRequest {
    /// Requested external-publishing action.
    pub action: PublishingAction,
}

/// Envelope around a single post (`{"item": {...}}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ItemResponse {
    /// The affected post.
    pub item: BlogPost,
}

/// Envelope around a post listing (`{"items": [...]}`).
#[derive(Debug, Clone, Deserialize)]
pub struct PostListResponse {
    /// Posts, newest first as ordered by the server.
    pub items: Vec<BlogPost>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publishing_action_serializes_lowercase() {
        let body = PublishingRequest {
            action: PublishingAction::Publish,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"action":"publish"}"#);

        let body = PublishingRequest {
            action: PublishingAction::Unpublish,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"action":"unpublish"}"#);
    }

    #[test]
    fn publishing_action_as_str() {
        assert_eq!(PublishingAction::Publish.as_str(), "publish");
        assert_eq!(PublishingAction::Update.as_str(), "update");
        assert_eq!(PublishingAction::Unpublish.as_str(), "unpublish");
    }

    #[test]
    fn item_envelope_deserializes() {
        let json = r#"{
            "item": {
                "name": "my-post",
                "title": "My Post",
                "content": "<p>hello</p>",
                "author": "admin",
                "isDraft": false,
                "externalPublished": true,
                "modifiedOn": "2024-03-01T12:00:00Z"
            }
        }"#;
        let resp: ItemResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.item.name, "my-post");
        assert_eq!(resp.item.author.as_deref(), Some("admin"));
        assert!(resp.item.external_published);
        assert!(!resp.item.is_draft);
    }

    #[test]
    fn post_defaults_for_missing_optional_fields() {
        let json = r#"{"name":"p","title":"T","content":""}"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert!(!post.is_draft);
        assert!(!post.external_published);
        assert!(post.author.is_none());
        assert!(post.created_on.is_none());
    }

    #[test]
    fn list_envelope_deserializes() {
        let json = r#"{"items":[
            {"name":"a","title":"A","content":"","isDraft":true},
            {"name":"b","title":"B","content":""}
        ]}"#;
        let resp: PostListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.items.len(), 2);
        assert!(resp.items[0].is_draft);
    }

    #[test]
    fn save_request_round_trip() {
        let req = SavePostRequest {
            title: "Title".to_string(),
            content: "<b>body</b>".to_string(),
            draft: true,
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: SavePostRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, "Title");
        assert!(back.draft);
    }
}
