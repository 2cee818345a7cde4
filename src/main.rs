mod config;
mod error;
mod icon;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use config::IconConfig;

#[derive(Parser)]
#[command(
    name = "pwa-icons",
    about = "Generate PWA app icons by centering a logo on a solid background"
)]
struct Cli {
    /// Config file (defaults to ./pwa-icons.toml, then built-in icons)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the built-in config to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_default_config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(format!("pwa_icons={level}").parse()?);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = cli.write_default_config {
        return IconConfig::default().save(&path);
    }

    let config = IconConfig::load(cli.config.as_deref())?;
    let count = icon::generate_all(&config)?;
    info!("Generated {} icons", count);

    println!("\n✅ All icons created successfully");
    Ok(())
}
