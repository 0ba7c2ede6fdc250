use std::path::PathBuf;
use std::str::FromStr;

use clap::{
    ArgAction, CommandFactory, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spuricli::{
    cli::{self, ConvertOptions, HttpOptions},
    config,
    error::Result,
    uri::UriKind,
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Files with one URI per line; standard input when omitted
    files: Vec<PathBuf>,

    /// URI kind to expect: track, album or artist (overrides SPOTIFY_URI_TYPE)
    #[clap(long = "type", value_name = "KIND")]
    uri_type: Option<String>,

    /// Comma-separated quoted output instead of "Artist - Title"
    #[clap(long)]
    csv: bool,

    /// Seconds to pause after each batch request (overrides SPOTIFY_BATCH_DELAY)
    #[clap(long, value_name = "SECS")]
    delay: Option<u64>,

    /// Proxy URL handed through to the HTTP client
    #[clap(long, value_name = "URL")]
    proxy: Option<String>,

    /// Request timeout in seconds handed through to the HTTP client
    #[clap(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Extra request header as NAME:VALUE; may be repeated
    #[clap(long = "header", value_name = "NAME:VALUE", action = ArgAction::Append)]
    headers: Vec<String>,

    /// Print shell completions and exit
    #[clap(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = run(cli).await {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let kind = match cli.uri_type.or_else(config::uri_kind) {
        Some(raw) => Some(UriKind::from_str(&raw)?),
        None => None,
    };

    let csv = cli.csv || config::csv_mode();

    let delay = match cli.delay {
        Some(secs) => secs,
        None => config::batch_delay()?.unwrap_or(0),
    };

    let options = ConvertOptions { kind, csv, delay };
    let http = HttpOptions {
        proxy: cli.proxy,
        timeout: cli.timeout,
        headers: cli.headers,
    };

    cli::convert(cli.files, options, http).await
}
