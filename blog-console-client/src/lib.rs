//! # blog-console-client
//!
//! Async REST client for the blog module of a content-management server.
//!
//! ## Endpoints
//!
//! | Operation | Method & Path |
//! |-----------|---------------|
//! | List posts | `GET /blog/site/{site}/{container}/posts` |
//! | Fetch post | `GET /blog/post/site/{site}/{container}/{postId}` |
//! | Create post | `POST /blog/site/{site}/{container}/posts` |
//! | Save post | `PUT /blog/post/site/{site}/{container}/{postId}` |
//! | Delete post | `DELETE /blog/post/site/{site}/{container}/{postId}` |
//! | External publishing | `POST /blog/post/site/{site}/{container}/{postId}/publishing` |
//!
//! The publishing endpoint takes a JSON body with an action discriminator:
//! `{"action": "publish" | "update" | "unpublish"}`.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use blog_console_client::{BlogApiClient, PublishingAction};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BlogApiClient::new("https://cms.example.com/service");
//!
//!     // List the posts of a site's blog container
//!     let posts = client.list_posts("marketing", "blog").await?;
//!     for post in &posts {
//!         println!("{} ({})", post.title, post.name);
//!     }
//!
//!     // Publish one externally
//!     client
//!         .publishing("marketing", "blog", &posts[0].name, PublishingAction::Publish)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError). Calls are
//! single-attempt: the client never retries, callers surface the failure and
//! stop. `ApiError::is_expected()` separates resource/permission conditions
//! (log at `warn`) from genuine faults (log at `error`).

mod client;
mod error;
mod http;
mod types;

// Re-export error types
pub use error::{ApiError, Result};

// Re-export the client
pub use client::BlogApiClient;

// Re-export wire types
pub use types::{
    BlogPost, ItemResponse, PostListResponse, PublishingAction, PublishingRequest, SavePostRequest,
};
