use std::io;
use std::path::{Path, PathBuf};

use comment_sentiment::Sentiment;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::report::ClassifiedComment;

pub const HEADER: [&str; 5] = ["comment", "sentiment", "polarity", "author", "published_at"];

/// `SentimentComments_<video id>.csv`, with anything unusual in the id replaced.
pub fn default_file_name(video_id: &str) -> String {
    let safe: String = video_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("SentimentComments_{safe}.csv")
}

/// Default output location for a video: the file name above in the working directory.
pub fn default_path(video_id: &str) -> io::Result<PathBuf> {
    Ok(std::env::current_dir()?.join(default_file_name(video_id)))
}

#[derive(Debug, Serialize)]
struct Row<'a> {
    comment: &'a str,
    sentiment: Sentiment,
    polarity: String,
    author: Option<&'a str>,
    published_at: Option<&'a str>,
}

impl<'a> From<&'a ClassifiedComment> for Row<'a> {
    fn from(c: &'a ClassifiedComment) -> Self {
        Row {
            comment: &c.comment.text,
            sentiment: c.sentiment,
            polarity: format!("{:.4}", c.polarity),
            author: c.comment.author.as_deref(),
            published_at: c.comment.published_at.as_deref(),
        }
    }
}

/// Write the header and one row per comment, in order.
pub fn write_comments<W: io::Write>(writer: W, comments: &[ClassifiedComment]) -> csv::Result<()> {
    // Header is written by hand so an empty run still gets one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(HEADER)?;

    for comment in comments {
        writer.serialize(Row::from(comment))?;
    }

    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the comments to it.
pub fn save(path: &Path, comments: &[ClassifiedComment]) -> Result<()> {
    let into_error = |source: csv::Error| Error::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::create(path).map_err(|e| into_error(e.into()))?;
    write_comments(io::BufWriter::new(file), comments).map_err(into_error)?;

    tracing::info!(path = %path.display(), rows = comments.len(), "wrote CSV");
    Ok(())
}
