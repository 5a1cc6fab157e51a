//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, ExtractorConfig};
use crate::error::{Error, Result};
use crate::pagination::{Page, Pager};
use crate::record::Record;
use crate::search::{ContentFilter, SearchExtractor, SearchQuery};
use serde_json::json;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Search {
                query,
                filter,
                pages,
            } => self.search(query, *filter, *pages as usize).await,
        }
    }

    /// Load configuration, applying command-line overrides
    fn load_config(&self) -> Result<ExtractorConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => ExtractorConfig::default(),
        };

        if let Some(language) = &self.cli.language {
            config.localization.language.clone_from(language);
        }
        if let Some(country) = &self.cli.country {
            config.localization.country.clone_from(country);
        }
        config.validate()?;
        Ok(config)
    }

    /// Search and print every page up to the limit
    async fn search(&self, text: &str, filter: ContentFilter, max_pages: usize) -> Result<()> {
        let config = self.load_config()?;
        let fetcher = Arc::new(config.fetcher()?);
        let query = SearchQuery::new(text).with_filter(filter);
        let mut extractor =
            SearchExtractor::new(fetcher, query, config.localization.clone())
                .with_base_url(&config.base_url);

        let format = self.cli.format;
        let mut out = std::io::stdout();
        let start = Instant::now();
        let mut records = 0;

        {
            let mut pager = Pager::new(&mut extractor).with_max_pages(max_pages);
            loop {
                match pager.next_page().await {
                    Ok(Some(page)) => {
                        records += page.len();
                        write_page(&mut out, format, &page)?;
                    }
                    Ok(None) => break,
                    Err(Error::NothingFound { message }) => {
                        write_nothing_found(&mut out, format, &message)?;
                        break;
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        let suggestion = extractor.search_suggestion()?;
        write_suggestion(
            &mut out,
            format,
            &suggestion,
            extractor.is_corrected_search()?,
        )?;

        info!(
            records,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search complete"
        );
        Ok(())
    }
}

/// Print a page's records followed by its per-entry errors
pub(crate) fn write_page<W: Write>(out: &mut W, format: OutputFormat, page: &Page) -> Result<()> {
    for record in page.items() {
        match format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(record)?)?,
            OutputFormat::Pretty => write_pretty_record(out, record)?,
        }
    }

    for error in page.errors() {
        match format {
            OutputFormat::Json => writeln!(
                out,
                "{}",
                json!({"type": "error", "message": error.to_string()})
            )?,
            OutputFormat::Pretty => writeln!(out, "! {error}")?,
        }
    }
    Ok(())
}

fn write_pretty_record<W: Write>(out: &mut W, record: &Record) -> Result<()> {
    match record {
        Record::Video(video) => {
            let uploader = video.uploader_name.as_deref().unwrap_or("unknown");
            writeln!(
                out,
                "[video] {} ({}) by {uploader}",
                video.name,
                format_duration(video.duration)
            )?;
        }
        Record::Channel(channel) => {
            writeln!(out, "[channel] {}", channel.name)?;
        }
        Record::Playlist(playlist) => {
            writeln!(
                out,
                "[playlist] {} ({} videos)",
                playlist.name, playlist.stream_count
            )?;
        }
    }
    writeln!(out, "    {}", record.url())?;
    Ok(())
}

pub(crate) fn write_nothing_found<W: Write>(
    out: &mut W,
    format: OutputFormat,
    message: &str,
) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(
            out,
            "{}",
            json!({"type": "nothing_found", "message": message})
        )?,
        OutputFormat::Pretty => writeln!(out, "{message}")?,
    }
    Ok(())
}

/// Print the corrected query, if the service offered one
pub(crate) fn write_suggestion<W: Write>(
    out: &mut W,
    format: OutputFormat,
    suggestion: &str,
    corrected: bool,
) -> Result<()> {
    if suggestion.is_empty() {
        return Ok(());
    }
    match format {
        OutputFormat::Json => writeln!(
            out,
            "{}",
            json!({"type": "suggestion", "query": suggestion, "corrected": corrected})
        )?,
        OutputFormat::Pretty if corrected => writeln!(out, "Showing results for: {suggestion}")?,
        OutputFormat::Pretty => writeln!(out, "Did you mean: {suggestion}")?,
    }
    Ok(())
}

/// `h:mm:ss` or `m:ss`; `--:--` when unknown
pub(crate) fn format_duration(seconds: i64) -> String {
    if seconds < 0 {
        return "--:--".to_string();
    }
    let (h, m, s) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}
