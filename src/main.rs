// Main entry point
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use telugu_songs::application::query::query_songs;
use telugu_songs::infrastructure::config::{
    generate_config_sample, load_config, Logging, DEFAULT_CONFIG_FILE,
};
use telugu_songs::interfaces::cli::Cli;
use telugu_songs::interfaces::form::{run_form, spawn_line_reader};
use telugu_songs::presentation::table::render_table;
use telugu_songs::presentation::theme::Theme;
use telugu_songs::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup graceful shutdown handler
    let (shutdown_tx, mut shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for shutdown signal: {}", e);
        } else {
            let _ = shutdown_tx.send(());
        }
    });

    let cli = Cli::parse();

    if cli.generate_config {
        let path = PathBuf::from(cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_FILE));
        generate_config_sample(&path)?;
        println!("Generated config file at: {}", path.display());
        return Ok(());
    }

    if cli.name.is_none() && !cli.interactive {
        eprintln!("{}", "Please provide a word to search with --name".red());
        std::process::exit(1);
    }

    // Logging settings come from the config when it loads; a broken config
    // still gets logged with the defaults.
    let loaded = load_config(cli.config.as_deref());
    let logging = loaded
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    if logging.enable {
        init_logging(&logging)?;
    }

    let theme = Theme::from_name(&cli.theme);

    if cli.interactive {
        if let Err(e) = &loaded {
            tracing::warn!("{}", e);
        }
        // std stdin on its own thread: a pending read must not hold up shutdown
        let mut lines = spawn_line_reader(std::io::BufReader::new(std::io::stdin()));
        let mut stdout = tokio::io::stdout();
        run_form(
            &mut lines,
            &mut stdout,
            cli.config.as_deref(),
            &theme,
            &mut shutdown_rx,
        )
        .await?;
        return Ok(());
    }

    let config = loaded.inspect_err(|e| tracing::error!("{}", e))?;
    let state = AppState::new(config).inspect_err(|e| tracing::error!("{}", e))?;
    let word = cli.name.unwrap_or_default();

    let tracks = tokio::select! {
        result = query_songs(&state, &word) => result?,
        _ = &mut shutdown_rx => {
            eprintln!("Search interrupted");
            return Ok(());
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&tracks)?);
    } else {
        print!("{}", render_table(&tracks, &theme));
    }

    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
