use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tsongs")]
#[command(about = "Get Telugu songs by word")]
#[command(version)]
pub struct Cli {
    /// TOML config file (config.yaml is not read) [default: config.toml]
    #[arg(short = 'c', long)]
    pub config: Option<String>,

    /// Name (or any word) to search for
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Ask for words interactively
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose color theme
    #[arg(short = 'T', long, default_value = "temp")]
    pub theme: String,

    /// Write a sample config to the --config path
    #[arg(long)]
    pub generate_config: bool,
}
