use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use ptt_extract::batch::{self, PageInput};
use ptt_extract::listing::{self, ListingEntry};
use ptt_extract::{encoding, Dictionary, Extractor, Options};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "ptt-extract",
    about = "Extract normalized records from saved PTT article pages"
)]
struct Cli {
    /// Saved HTML pages to read.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Board the pages belong to.
    #[arg(long, env = "PTT_BOARD", default_value = "")]
    board: String,

    /// Article id for a single page. Defaults to each file's name without
    /// its extension.
    #[arg(long)]
    id: Option<String>,

    /// jieba-style dictionary used to segment titles.
    #[arg(long, env = "PTT_DICT")]
    dict: Option<PathBuf>,

    /// Treat the files as board listing pages and print their entries.
    #[arg(long, default_value_t = false)]
    listing: bool,

    /// Leave the per-reaction message list out of each record.
    #[arg(long, default_value_t = false)]
    no_messages: bool,

    /// Pretty-print JSON instead of one object per line.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Serialize)]
struct ListingRow<'a> {
    article_id: &'a str,
    author: &'a str,
    title: &'a str,
    url: &'a str,
}

impl<'a> From<&'a ListingEntry> for ListingRow<'a> {
    fn from(entry: &'a ListingEntry) -> Self {
        Self {
            article_id: &entry.article_id,
            author: &entry.author,
            title: &entry.title,
            url: entry.url.as_str(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.id.is_some() && cli.files.len() > 1 {
        bail!("--id applies to a single file, got {}", cli.files.len());
    }

    let mut out = io::stdout().lock();
    if cli.listing {
        for path in &cli.files {
            let html = read_page(path)?;
            for entry in listing::parse_listing(&html) {
                emit(&mut out, &ListingRow::from(&entry), cli.pretty)?;
            }
        }
        return Ok(());
    }

    let mut extractor = Extractor::new(Options {
        include_messages: !cli.no_messages,
        ..Options::default()
    });
    if let Some(path) = &cli.dict {
        let dict = Dictionary::load(path)
            .with_context(|| format!("failed to load dictionary {}", path.display()))?;
        tracing::info!(path = %path.display(), "dictionary ready");
        extractor = extractor.with_segmenter(dict);
    }

    let mut pages = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let id = cli.id.clone().unwrap_or_else(|| file_stem(path));
        pages.push((id, read_page(path)?));
    }

    let report = batch::extract_all(
        &extractor,
        pages.iter().map(|(id, html)| PageInput {
            article_id: id,
            board: &cli.board,
            html,
        }),
    );

    for record in &report.records {
        emit(&mut out, record, cli.pretty)?;
    }
    for (id, err) in &report.failures {
        eprintln!("{id}: {err}");
    }
    if report.records.is_empty() {
        bail!("no page could be extracted");
    }
    Ok(())
}

fn read_page(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(encoding::transcode_to_utf8(&bytes))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn emit(out: &mut impl Write, value: &impl Serialize, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
