// Command line interface for syncing Markdown documents with a Halo site.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use halo_client::HaloClient;
use halo_sync::{Document, HaloService};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "halo", version, about = "Sync Markdown documents with a Halo site")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or update the remote post from a document, then publish or
    /// unpublish it per the document's `halo.publish` flag
    Publish {
        /// Markdown file to publish
        file: PathBuf,
    },
    /// Fetch a remote post by identifier into a new local document
    Pull {
        /// Remote post identifier (`halo.name`)
        name: String,
        /// Output file; defaults to `<slug>.md`
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Overwrite a local document with the remote canonical state
    Refresh {
        /// Markdown file to refresh
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,halo_sync=info,halo_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let service = HaloService::new(HaloClient::new(config.site_url, config.token));

    match cli.command {
        Commands::Publish { file } => publish(&service, &file).await,
        Commands::Pull { name, out } => pull(&service, &name, out).await,
        Commands::Refresh { file } => refresh(&service, &file).await,
    }
}

async fn publish(service: &HaloService, file: &Path) -> Result<()> {
    let source = read(file).await?;
    let mut doc = Document::parse(&source)?;

    let fallback_title = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled");

    let report = service.publish(&mut doc, fallback_title).await?;
    write(file, &doc).await?;

    if report.published {
        println!("Published \"{}\": {}", report.title, report.url);
    } else {
        println!("Synced draft \"{}\": {}", report.title, report.url);
    }
    Ok(())
}

async fn pull(service: &HaloService, name: &str, out: Option<PathBuf>) -> Result<()> {
    let doc = service.pull(name).await?;

    let out = out.unwrap_or_else(|| {
        let slug = doc
            .front_matter
            .halo
            .as_ref()
            .and_then(|h| h.slug.as_deref())
            .unwrap_or(name);
        PathBuf::from(format!("{slug}.md"))
    });
    write(&out, &doc).await?;

    println!(
        "Pulled \"{}\" into {}",
        doc.front_matter.title.as_deref().unwrap_or(name),
        out.display()
    );
    Ok(())
}

async fn refresh(service: &HaloService, file: &Path) -> Result<()> {
    let source = read(file).await?;
    let mut doc = Document::parse(&source)?;

    service.update(&mut doc).await?;
    write(file, &doc).await?;

    println!(
        "Refreshed {} from \"{}\"",
        file.display(),
        doc.front_matter.title.as_deref().unwrap_or_default()
    );
    Ok(())
}

async fn read(file: &Path) -> Result<String> {
    tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))
}

async fn write(file: &Path, doc: &Document) -> Result<()> {
    tokio::fs::write(file, doc.render()?)
        .await
        .with_context(|| format!("Failed to write {}", file.display()))
}
