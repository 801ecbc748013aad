//! Command-line surface
//!
//! One subcommand per action, mapping flags onto a single scrape job, plus
//! `batch` for running a JSON file of jobs. Result records are printed to
//! stdout as JSON, one line per job.

use crate::models::job::{
    Action, ContentType, DEFAULT_SCREENSHOT_DELAY_MS, DEFAULT_SCREENSHOT_TIMEOUT_MS,
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, ImageType, LinkStyle, ScrapeJob,
};
use crate::models::record::ResultRecord;
use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "handinger",
    version,
    about = "Scrape data from the internet using the Handinger API"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Capture per-job failures as records instead of aborting the batch
    #[arg(long, global = true)]
    pub continue_on_fail: bool,

    /// Pretty-print result records
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a page and process it with the remote LLM
    Llm(LlmArgs),
    /// Fetch page content as markdown or HTML
    Content(ContentArgs),
    /// Fetch page metadata
    Metadata(MetadataArgs),
    /// Take a screenshot of a page
    Screenshot(ScreenshotArgs),
    /// Run a batch of jobs from a JSON file
    Batch(BatchArgs),
}

/// Flags shared by every single-job subcommand
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// The URL of the website to fetch content from
    #[arg(long)]
    pub url: String,

    /// Bypass the remote cache and fetch a fresh copy
    #[arg(long)]
    pub fresh: bool,
}

#[derive(Debug, Args)]
pub struct LlmArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// The prompt to use for the LLM
    #[arg(long)]
    pub prompt: String,

    /// The JSON schema constraining the LLM output
    #[arg(long)]
    pub json_schema: String,
}

#[derive(Debug, Args)]
pub struct ContentArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format for the fetched content
    #[arg(long, value_enum, default_value = "markdown")]
    pub content_type: ContentType,

    /// How links are rendered in the content
    #[arg(long, value_enum, default_value = "inline")]
    pub link_style: LinkStyle,

    /// Strip boilerplate from the content (pass false to disable)
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    pub clean_content: bool,

    /// Embed images inline in the content
    #[arg(long)]
    pub inline_images: bool,

    /// Use the advanced scraping engine (pass false to disable)
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    pub advanced_scraping: bool,
}

#[derive(Debug, Args)]
pub struct MetadataArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Use the advanced scraping engine (pass false to disable)
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    pub advanced_scraping: bool,
}

#[derive(Debug, Args)]
pub struct ScreenshotArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Screenshot image format
    #[arg(long, value_enum, default_value = "png")]
    pub image_type: ImageType,

    #[arg(long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    pub viewport_width: u32,

    #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    pub viewport_height: u32,

    /// Remote page-load timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_SCREENSHOT_TIMEOUT_MS)]
    pub timeout: u64,

    /// Delay before capture in milliseconds
    #[arg(long, default_value_t = DEFAULT_SCREENSHOT_DELAY_MS)]
    pub delay: u64,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Path to a JSON array of jobs, or '-' to read from stdin
    #[arg(long)]
    pub input: String,
}

impl Command {
    /// Turn the parsed subcommand into the list of jobs to run
    pub fn into_jobs(self) -> Result<Vec<ScrapeJob>> {
        let jobs = match self {
            Command::Llm(args) => vec![ScrapeJob {
                url: args.common.url,
                fresh: args.common.fresh,
                action: Action::Llm {
                    prompt: args.prompt,
                    json_schema: args.json_schema,
                },
            }],
            Command::Content(args) => vec![ScrapeJob {
                url: args.common.url,
                fresh: args.common.fresh,
                action: Action::Content {
                    content_type: args.content_type,
                    link_style: args.link_style,
                    clean_content: args.clean_content,
                    inline_images: args.inline_images,
                    advanced_scraping: args.advanced_scraping,
                },
            }],
            Command::Metadata(args) => vec![ScrapeJob {
                url: args.common.url,
                fresh: args.common.fresh,
                action: Action::Metadata {
                    advanced_scraping: args.advanced_scraping,
                },
            }],
            Command::Screenshot(args) => vec![ScrapeJob {
                url: args.common.url,
                fresh: args.common.fresh,
                action: Action::Screenshot {
                    image_type: args.image_type,
                    viewport_width: args.viewport_width,
                    viewport_height: args.viewport_height,
                    timeout: args.timeout,
                    delay: args.delay,
                },
            }],
            Command::Batch(args) => load_batch(&args.input)?,
        };

        Ok(jobs)
    }
}

/// Load a batch of jobs from a file path or stdin
fn load_batch(input: &str) -> Result<Vec<ScrapeJob>> {
    let content = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read batch input from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read batch input file {input}"))?
    };

    parse_jobs(&content)
}

/// Parse a JSON array of jobs
fn parse_jobs(content: &str) -> Result<Vec<ScrapeJob>> {
    serde_json::from_str(content).context("Failed to parse batch input as a JSON array of jobs")
}

/// Print result records to stdout, one JSON document per record
pub fn print_records(records: &[ResultRecord], pretty: bool) -> Result<()> {
    for record in records {
        let line = if pretty {
            serde_json::to_string_pretty(record)
        } else {
            serde_json::to_string(record)
        }
        .context("Failed to serialize result record")?;
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_subcommand_maps_to_job() {
        let cli = Cli::try_parse_from([
            "handinger",
            "llm",
            "--url",
            "https://example.com",
            "--prompt",
            "Summarize",
            "--json-schema",
            "{}",
        ])
        .unwrap();

        let jobs = cli.command.into_jobs().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].url, "https://example.com");
        assert_eq!(
            jobs[0].action,
            Action::Llm {
                prompt: "Summarize".to_string(),
                json_schema: "{}".to_string(),
            }
        );
    }

    #[test]
    fn test_screenshot_defaults() {
        let cli = Cli::try_parse_from([
            "handinger",
            "screenshot",
            "--url",
            "https://example.com",
        ])
        .unwrap();

        let jobs = cli.command.into_jobs().unwrap();
        assert_eq!(
            jobs[0].action,
            Action::Screenshot {
                image_type: ImageType::Png,
                viewport_width: 1280,
                viewport_height: 1024,
                timeout: 30_000,
                delay: 500,
            }
        );
    }

    #[test]
    fn test_content_boolean_overrides() {
        let cli = Cli::try_parse_from([
            "handinger",
            "content",
            "--url",
            "https://example.com",
            "--content-type",
            "html",
            "--clean-content",
            "false",
            "--inline-images",
        ])
        .unwrap();

        let jobs = cli.command.into_jobs().unwrap();
        match &jobs[0].action {
            Action::Content {
                content_type,
                clean_content,
                inline_images,
                ..
            } => {
                assert_eq!(*content_type, ContentType::Html);
                assert!(!*clean_content);
                assert!(*inline_images);
            }
            other => panic!("expected content action, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "handinger",
            "metadata",
            "--url",
            "https://example.com",
            "--continue-on-fail",
            "--pretty",
        ])
        .unwrap();

        assert!(cli.continue_on_fail);
        assert!(cli.pretty);
    }

    #[test]
    fn test_invalid_enum_value_rejected() {
        let result = Cli::try_parse_from([
            "handinger",
            "content",
            "--url",
            "https://example.com",
            "--link-style",
            "footnotes",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_jobs_from_batch_json() {
        let jobs = parse_jobs(
            r#"[
                {"action": "metadata", "url": "https://a.example"},
                {"action": "screenshot", "url": "https://b.example", "image_type": "jpeg"}
            ]"#,
        )
        .unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].url, "https://a.example");
        match &jobs[1].action {
            Action::Screenshot { image_type, .. } => assert_eq!(*image_type, ImageType::Jpeg),
            other => panic!("expected screenshot action, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_jobs_rejects_non_array() {
        assert!(parse_jobs(r#"{"action": "metadata", "url": "https://a.example"}"#).is_err());
    }
}
