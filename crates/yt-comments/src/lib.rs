//! Minimal client for the YouTube Data API v3 `commentThreads.list` endpoint.
//!
//! Only the first page of top-level comments is fetched. Replies and
//! pagination are out of scope.

use serde::Deserialize;

/// Default REST API base address.
pub const DEFAULT_API_ADDRESS: &str = "https://www.googleapis.com";

/// Largest page size `commentThreads.list` accepts.
pub const MAX_RESULTS_CAP: u32 = 100;

/// A top-level comment on a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub author: Option<String>,
    /// RFC 3339 timestamp as returned by the API, passed through untouched
    pub published_at: Option<String>,
    pub like_count: u64,
}

impl Comment {
    /// Build a comment with only an id and text, mostly useful for tests.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            author: None,
            published_at: None,
            like_count: 0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned status {status}{}: {message}", reason_suffix(.reason))]
    Api {
        status: u16,
        reason: Option<String>,
        message: String,
    },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason.as_deref().map(|r| format!(" ({r})")).unwrap_or_default()
}

// Wire types for the commentThreads resource. Unknown fields are ignored.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadListResponse {
    #[serde(default)]
    items: Vec<CommentThread>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    #[serde(default)]
    id: String,
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    #[serde(default)]
    text_display: String,
    author_display_name: Option<String>,
    published_at: Option<String>,
    #[serde(default)]
    like_count: u64,
}

impl From<TopLevelComment> for Comment {
    fn from(comment: TopLevelComment) -> Self {
        Comment {
            id: comment.id,
            text: comment.snippet.text_display,
            author: comment.snippet.author_display_name,
            published_at: comment.snippet.published_at,
            like_count: comment.snippet.like_count,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    reason: Option<String>,
}

/// Turn a non-success response body into an [`FetchError::Api`].
fn api_error(status: u16, body: &str) -> FetchError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => FetchError::Api {
            status,
            reason: envelope.error.errors.into_iter().find_map(|e| e.reason),
            message: envelope.error.message,
        },
        Err(_) => FetchError::Api {
            status,
            reason: None,
            message: body.trim().to_string(),
        },
    }
}

pub struct YouTubeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    max_results: u32,
}

impl YouTubeClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        YouTubeClient {
            http: reqwest::Client::new(),
            base_url,
            api_key,
            max_results: MAX_RESULTS_CAP,
        }
    }

    /// Set the page size, clamped to what the API accepts.
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results.clamp(1, MAX_RESULTS_CAP);
        self
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    fn comment_threads_url(&self, video_id: &str) -> String {
        let mut url = format!(
            "{}/youtube/v3/commentThreads?part=snippet&videoId={}&textFormat=plainText&maxResults={}",
            self.base_url,
            urlencoding::encode(video_id),
            self.max_results
        );

        // Add API key as query parameter if provided
        if let Some(key) = &self.api_key {
            url.push_str(&format!("&key={}", urlencoding::encode(key)));
        }

        url
    }

    /// Fetch the first page of top-level comments for a video, in API order.
    pub async fn fetch_comments(&self, video_id: &str) -> Result<Vec<Comment>, FetchError> {
        let url = self.comment_threads_url(video_id);
        tracing::debug!(video_id, max_results = self.max_results, "requesting comment threads");

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            return Err(api_error(status, &body));
        }

        let body = response.text().await?;
        let page: CommentThreadListResponse = serde_json::from_str(&body)?;

        if let Some(token) = &page.next_page_token {
            tracing::debug!(next_page_token = %token, "more comments available, not paginating");
        }

        Ok(page
            .items
            .into_iter()
            .map(|thread| Comment::from(thread.snippet.top_level_comment))
            .collect())
    }
}
