use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use comment_sentiment::LexiconClassifier;
use tracing_subscriber::EnvFilter;
use yt_comment_sentiment::cli::Args;
use yt_comment_sentiment::report::validate_video_id;
use yt_comment_sentiment::{CommentSentimentReporter, Error};
use yt_comments::YouTubeClient;

fn init_tracing() {
    // Diagnostics go to stderr so stdout carries only the summary
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<(), Error> {
    let video_id = validate_video_id(args.video_id.as_deref().unwrap_or_default())?;
    let api_key = args.resolve_api_key()?;
    if api_key.is_none() {
        tracing::warn!("no API key given, the request will be sent unauthenticated");
    }
    let csv_path = args.csv_path(video_id)?;

    tracing::info!("using API at {}", args.api_address);
    let client =
        YouTubeClient::new(args.api_address.as_str(), api_key).with_max_results(args.max_results);
    let reporter = CommentSentimentReporter::new(client, LexiconClassifier::new())
        .with_cleaning(args.clean);

    let mut stdout = std::io::stdout().lock();
    reporter
        .run(video_id, csv_path.as_deref(), &mut stdout)
        .await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if matches!(e, Error::InvalidArgument(_)) {
                eprintln!("{}", Args::command().render_usage());
            }
            ExitCode::from(e.exit_code())
        }
    }
}
