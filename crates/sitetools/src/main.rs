use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sitetools::shared::config::{dist_path, load_config};
use sitetools::usecases::{favicons, images, postbuild, sitemap};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "sitetools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Site root containing the HTML pages
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,
    /// Path to sitetools.toml (defaults to <root>/sitetools.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Build output directory (overrides site.dist_dir)
    #[arg(long, global = true)]
    dist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write <dist>/sitemap.xml for every page under the root
    Sitemap,
    /// Rewrite /src/ asset references in the pages to the built bundles
    Postbuild {
        /// Pages to patch, relative to the root (defaults to postbuild.pages)
        pages: Vec<String>,
    },
    /// Generate favicon PNGs and favicon.ico from the logo into the public dir
    Favicons,
    /// Convert source images to resized WebP under <public>/images
    Images,
}

fn init_logging() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Логи пишем и в консоль, и в файл
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("sitetools.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config = load_config(&cli.root, cli.config.as_deref())?;
    let dist = dist_path(&cli.root, &config, cli.dist.as_deref());

    match cli.command {
        Commands::Sitemap => {
            let out = sitemap::generate_sitemap(&cli.root, &dist, &config)?;
            println!("Sitemap generated: {}", out.display());
        }
        Commands::Postbuild { pages } => {
            let pages = if pages.is_empty() {
                config.postbuild.pages.clone()
            } else {
                pages
            };
            let report = postbuild::run_postbuild(&cli.root, &dist, &pages)?;
            if !report.skipped.is_empty() {
                tracing::warn!("{} page(s) skipped", report.skipped.len());
            }
            println!(
                "Post-build complete: {} page(s) patched using {}",
                report.patched.len(),
                report.manifest.display()
            );
        }
        Commands::Favicons => {
            let assets = &config.assets;
            let logo = cli.root.join(&assets.images_dir).join(&assets.logo);
            let out = cli.root.join(&assets.public_dir);
            let written = favicons::generate_favicons(&logo, &out)?;
            println!("Favicons generated: {} file(s) in {}", written.len(), out.display());
        }
        Commands::Images => {
            let assets = &config.assets;
            let src = cli.root.join(&assets.images_dir);
            let out = cli.root.join(&assets.public_dir).join("images");
            let report = images::optimize_images(&src, &out, assets)?;
            if !report.failed.is_empty() {
                tracing::warn!("{} image(s) failed", report.failed.len());
            }
            println!("Image optimization complete: {} image(s)", report.optimized.len());
        }
    }

    Ok(())
}
