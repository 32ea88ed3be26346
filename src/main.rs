use anyhow::Result;
use clap::{Parser, Subcommand};
use docnav::config::Config;
use docnav::transport;
use docnav::tui::Theme;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "docnav")]
#[command(author, version, about = "docnav - documentation sidebar renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the sidebar as HTML to stdout
    Render {
        /// Sidebar file (.json or .toml); defaults to site.sidebar from config
        file: Option<PathBuf>,

        /// Wrap the fragment in a full HTML page
        #[arg(long)]
        page: bool,

        /// Mark links for client-side routing
        #[arg(long)]
        routed: bool,
    },

    /// Report duplicate titles, empty groups and other data issues
    Check {
        /// Sidebar file (.json or .toml)
        file: Option<PathBuf>,
    },

    /// Start HTTP preview server
    Serve {
        /// Sidebar file (.json or .toml)
        file: Option<PathBuf>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Preview the sidebar in the terminal
    Preview {
        /// Sidebar file (.json or .toml)
        file: Option<PathBuf>,

        /// Color theme (catppuccin, nord)
        #[arg(short, long, default_value = "catppuccin")]
        theme: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "docnav=debug"
    } else {
        "docnav=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Render { file, page, routed } => {
            let mut stdout = std::io::stdout().lock();
            transport::cli::run_render(&config, file, page, routed, &mut stdout)?;
        }
        Commands::Check { file } => {
            let mut stdout = std::io::stdout().lock();
            let issues = transport::cli::run_check(&config, file, &mut stdout)?;
            if issues > 0 {
                std::process::exit(1);
            }
        }
        Commands::Serve { file, port, host } => {
            let sidebar = transport::cli::resolve_sidebar(&config, file)?;
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let state = transport::http::AppState::new(&config, sidebar);
            transport::http::run_http_server(&host, port, state).await?;
        }
        Commands::Preview { file, theme } => {
            let sidebar = transport::cli::resolve_sidebar(&config, file)?;
            let theme = Theme::from_name(&theme)
                .ok_or_else(|| anyhow::anyhow!("Unknown theme: {}", theme))?;
            tracing::info!("Starting terminal preview of {:?}", sidebar);
            transport::preview::run_preview(&sidebar, theme)?;
        }
    }

    Ok(())
}
