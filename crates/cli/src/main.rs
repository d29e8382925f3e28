use clap::{Parser, Subcommand};
use server::{Config, SettingsService};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "marquee", version)]
#[command(about = "Popular movies and TV shows from TMDB, stored and served locally", long_about = None)]
struct Cli {
    /// Directory holding media.db and settings.toml
    #[arg(long, env = "MEDIA_DATA_PATH", default_value = "./data", global = true)]
    data_path: PathBuf,

    /// TMDB API key, overrides the settings file
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true, global = true)]
    tmdb_api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API and run the scheduled sync
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Fetch popular movies and TV shows once, then exit
    Sync,
    /// Fill in missing genres from TMDB details once, then exit
    Backfill,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::new(cli.data_path);
    let mut settings = SettingsService::new(&config).await?;
    settings.override_api_key(cli.tmdb_api_key);

    match cli.command {
        Command::Serve { port, host } => {
            let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
            server::run_server(addr, config, settings).await?;
        }
        Command::Sync => {
            let report = server::run_sync_once(config, settings).await?;
            println!("{}", report.summary());
            if report.has_failures() {
                std::process::exit(1);
            }
        }
        Command::Backfill => {
            let report = server::run_backfill_once(config, settings).await?;
            for entry in &report.updated {
                println!(
                    "{} [{}] #{}: {}",
                    entry.title, entry.media_type, entry.tmdb_id, entry.genres
                );
            }
            println!(
                "Updated {} records, skipped {}",
                report.updated.len(),
                report.skipped
            );
        }
    }

    Ok(())
}
