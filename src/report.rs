use std::io::Write;
use std::path::Path;

use comment_sentiment::{Classification, Sentiment, SentimentClassifier};
use yt_comments::Comment;

use crate::clean;
use crate::csv_output;
use crate::error::{Error, Result};
use crate::source::CommentSource;
use crate::stats::SummaryStats;

/// A fetched comment together with its sentiment.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedComment {
    pub comment: Comment,
    pub sentiment: Sentiment,
    pub polarity: f64,
}

impl ClassifiedComment {
    pub fn new(comment: Comment, classification: Classification) -> Self {
        Self {
            comment,
            sentiment: classification.sentiment,
            polarity: classification.polarity,
        }
    }
}

/// Outcome of analyzing one video.
#[derive(Debug, Clone)]
pub struct Report {
    pub video_id: String,
    pub stats: SummaryStats,
    /// In the order the source returned them
    pub comments: Vec<ClassifiedComment>,
}

impl Report {
    /// Print the summary the way it appears on stdout.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "Summary of sentiment in {} comments for video {}:",
            self.stats.total(),
            self.video_id
        )?;
        write!(out, "{}", self.stats)?;
        out.flush()
    }
}

/// Trim the video id and reject it if nothing is left.
pub fn validate_video_id(video_id: &str) -> Result<&str> {
    let video_id = video_id.trim();
    if video_id.is_empty() {
        return Err(Error::InvalidArgument(
            "please specify a video ID using the --videoid=<ID> parameter".to_string(),
        ));
    }
    Ok(video_id)
}

/// Fetches, classifies and summarizes the comments of a video.
pub struct CommentSentimentReporter<S, C> {
    source: S,
    classifier: C,
    clean: bool,
}

impl<S: CommentSource, C: SentimentClassifier> CommentSentimentReporter<S, C> {
    pub fn new(source: S, classifier: C) -> Self {
        Self {
            source,
            classifier,
            clean: false,
        }
    }

    /// Strip emoji and drop non-English comments before classifying.
    pub fn with_cleaning(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    pub async fn analyze(&self, video_id: &str) -> Result<Report> {
        let video_id = validate_video_id(video_id)?;

        tracing::info!(video_id, "fetching comments");
        let comments =
            self.source
                .fetch(video_id)
                .await
                .map_err(|source| Error::SourceUnavailable {
                    video_id: video_id.to_string(),
                    source,
                })?;
        tracing::info!(count = comments.len(), "comments successfully accessed");

        let (comments, removed) = if self.clean {
            let (kept, removed) = clean::clean(comments);
            tracing::info!(kept = kept.len(), removed, "cleaned comments");
            (kept, removed)
        } else {
            (comments, 0)
        };

        tracing::debug!(classifier = self.classifier.name(), "classifying comments");
        let mut classified = Vec::with_capacity(comments.len());
        for comment in comments {
            let classification =
                self.classifier
                    .classify(&comment.text)
                    .map_err(|source| Error::Processing {
                        comment_id: comment.id.clone(),
                        source,
                    })?;
            classified.push(ClassifiedComment::new(comment, classification));
        }

        let stats = SummaryStats::from_comments(&classified).with_removed(removed);

        Ok(Report {
            video_id: video_id.to_string(),
            stats,
            comments: classified,
        })
    }

    /// Analyze, print the summary to `out`, then write the CSV if a path is given.
    pub async fn run<W: Write>(
        &self,
        video_id: &str,
        csv_path: Option<&Path>,
        out: &mut W,
    ) -> Result<Report> {
        let report = self.analyze(video_id).await?;

        // A closed stdout does not abort the run
        if let Err(e) = report.write_summary(out) {
            tracing::warn!("failed to print summary: {}", e);
        }

        if let Some(path) = csv_path {
            csv_output::save(path, &report.comments)?;
        }

        Ok(report)
    }
}
