use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::csv_output;
use crate::error::{Error, Result};

/// YouTube Comment Sentiment - Classifies the comments of a video and reports sentiment statistics
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// ID of the video whose comments will be analyzed
    #[arg(long = "videoid", visible_alias = "video-id", value_name = "ID")]
    pub video_id: Option<String>,

    /// Export the classified comments as CSV (y/n)
    #[arg(
        long,
        value_name = "Y|N",
        default_value = "n",
        num_args = 0..=1,
        default_missing_value = "y",
        action = ArgAction::Set,
        value_parser = parse_yes_no
    )]
    pub csv: bool,

    /// Where to write the CSV (default: SentimentComments_<ID>.csv in the working directory)
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// API key for the YouTube Data API
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Path to file containing the API key, used when --api-key is not given
    #[arg(long, value_name = "PATH")]
    pub api_key_path: Option<PathBuf>,

    /// Base address of the YouTube Data API
    #[arg(long, env = "REST_API_ADDRESS", default_value = yt_comments::DEFAULT_API_ADDRESS)]
    pub api_address: String,

    /// Number of comments to request (1-100)
    #[arg(long, default_value_t = yt_comments::MAX_RESULTS_CAP)]
    pub max_results: u32,

    /// Strip emoji and drop non-English comments before classifying
    #[arg(long)]
    pub clean: bool,
}

/// Accepts the usual yes/no spellings, case-insensitively.
pub fn parse_yes_no(value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" | "on" => Ok(true),
        "n" | "no" | "false" | "0" | "off" => Ok(false),
        other => Err(format!("expected y or n, got '{other}'")),
    }
}

impl Args {
    /// API key from --api-key / YOUTUBE_API_KEY, else from --api-key-path.
    pub fn resolve_api_key(&self) -> Result<Option<String>> {
        if let Some(key) = self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
            return Ok(Some(key.to_string()));
        }

        let Some(path) = &self.api_key_path else {
            return Ok(None);
        };

        tracing::info!("reading API key from {}", path.display());
        let key = std::fs::read_to_string(path)
            .map_err(|e| {
                Error::InvalidArgument(format!(
                    "failed to read API key file '{}': {}",
                    path.display(),
                    e
                ))
            })?
            .trim()
            .to_string();

        if key.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "API key file '{}' is empty",
                path.display()
            )));
        }
        Ok(Some(key))
    }

    /// Destination of the CSV, or `None` when CSV output is off.
    pub fn csv_path(&self, video_id: &str) -> Result<Option<PathBuf>> {
        if !self.csv {
            return Ok(None);
        }
        if let Some(path) = &self.output_file {
            return Ok(Some(path.clone()));
        }

        let file_name = csv_output::default_file_name(video_id);
        csv_output::default_path(video_id)
            .map(Some)
            .map_err(|e| Error::OutputWriteFailure {
                path: PathBuf::from(file_name),
                source: e.into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("yt-comment-sentiment").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn yes_no_tokens() {
        for yes in ["y", "Y", "yes", "TRUE", "1", "on"] {
            assert_eq!(parse_yes_no(yes), Ok(true), "{yes}");
        }
        for no in ["n", "No", "false", "0", "off"] {
            assert_eq!(parse_yes_no(no), Ok(false), "{no}");
        }
        assert!(parse_yes_no("maybe").is_err());
    }

    #[test]
    fn csv_defaults_to_off() {
        let args = parse(&["--videoid=qVn2YGvIv0w"]);
        assert_eq!(args.video_id.as_deref(), Some("qVn2YGvIv0w"));
        assert!(!args.csv);
        assert!(!args.clean);
        assert_eq!(args.max_results, 100);
        assert_eq!(args.csv_path("qVn2YGvIv0w").unwrap(), None);
    }

    #[test]
    fn csv_flag_forms() {
        assert!(parse(&["--videoid=x", "--csv=y"]).csv);
        assert!(parse(&["--videoid=x", "--csv", "yes"]).csv);
        assert!(parse(&["--videoid=x", "--csv"]).csv);
        assert!(!parse(&["--videoid=x", "--csv=n"]).csv);
    }

    #[test]
    fn unknown_csv_token_is_rejected() {
        let err = Args::try_parse_from(["yt-comment-sentiment", "--videoid=x", "--csv=sometimes"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn video_id_alias() {
        let args = parse(&["--video-id", "abc"]);
        assert_eq!(args.video_id.as_deref(), Some("abc"));
    }

    #[test]
    fn missing_video_id_parses_as_none() {
        assert!(parse(&[]).video_id.is_none());
    }

    #[test]
    fn csv_path_defaults_to_working_directory() {
        let args = parse(&["--videoid=qVn2YGvIv0w", "--csv=y"]);
        let path = args.csv_path("qVn2YGvIv0w").unwrap().unwrap();
        assert_eq!(path.parent(), Some(std::env::current_dir().unwrap().as_path()));
        assert!(path.ends_with("SentimentComments_qVn2YGvIv0w.csv"));
    }

    #[test]
    fn csv_path_override() {
        let args = parse(&["--videoid=x", "--csv=y", "--output-file", "/tmp/out.csv"]);
        assert_eq!(
            args.csv_path("x").unwrap(),
            Some(PathBuf::from("/tmp/out.csv"))
        );
    }

    #[test]
    fn api_key_from_file_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.txt");
        std::fs::write(&path, "  secret-key\n").unwrap();

        let mut args = parse(&["--videoid=x"]);
        args.api_key = None;
        args.api_key_path = Some(path);
        assert_eq!(args.resolve_api_key().unwrap().as_deref(), Some("secret-key"));
    }

    #[test]
    fn api_key_flag_wins_over_file() {
        let mut args = parse(&["--videoid=x", "--api-key", "direct"]);
        args.api_key_path = Some(PathBuf::from("/does/not/exist"));
        assert_eq!(args.resolve_api_key().unwrap().as_deref(), Some("direct"));
    }

    #[test]
    fn unreadable_key_file_is_invalid_argument() {
        let mut args = parse(&["--videoid=x"]);
        args.api_key = None;
        args.api_key_path = Some(PathBuf::from("/does/not/exist/key.txt"));

        let err = args.resolve_api_key().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
