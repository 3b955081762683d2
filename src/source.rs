use yt_comments::{Comment, YouTubeClient};

use crate::error::BoxError;

/// Something that can list the comments of a video.
#[allow(async_fn_in_trait)]
pub trait CommentSource {
    async fn fetch(&self, video_id: &str) -> Result<Vec<Comment>, BoxError>;
}

impl CommentSource for YouTubeClient {
    async fn fetch(&self, video_id: &str) -> Result<Vec<Comment>, BoxError> {
        Ok(self.fetch_comments(video_id).await?)
    }
}

impl<S: CommentSource + ?Sized> CommentSource for &S {
    async fn fetch(&self, video_id: &str) -> Result<Vec<Comment>, BoxError> {
        (**self).fetch(video_id).await
    }
}
