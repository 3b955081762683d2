//! Fetches the comments of a YouTube video, classifies their sentiment and
//! reports per-label counts, optionally exporting the classified comments
//! as CSV.

pub mod clean;
pub mod cli;
pub mod csv_output;
pub mod error;
pub mod report;
pub mod source;
pub mod stats;

pub use error::{Error, Result};
pub use report::{ClassifiedComment, CommentSentimentReporter, Report};
pub use source::CommentSource;
pub use stats::SummaryStats;
