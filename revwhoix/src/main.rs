mod config;
mod error;
mod logger;

use clap::Parser;
use config::{expand_tilde, get_default_config_toml, load_config, read_api_key, write_default_config};
use console::style;
use error::AppError;
use librevwhois::{FetchConfig, FetchError, ReverseWhoisFetcher};
use std::{
    io::{self, Write},
    process::ExitCode,
    time::Duration,
};
use tracing::{debug, info};

const BANNER: &str = r"
    ________ _   ___      __/ /_  ____  (_)  __
   / ___/ _ \ | / / | /| / / __ \/ __ \/ / |/_/
  / /  /  __/ |/ /| |/ |/ / / / / /_/ / />  <
 /_/   \___/|___/ |__/|__/_/ /_/\____/_/_/|_|
";

#[derive(Parser, Debug)]
#[command(name = "revwhoix")]
#[command(about = "Reverse whois lookup - list every domain whose registration mentions a keyword", long_about = None)]
struct Args {
    /// Keyword to search for in registration records (e.g. an organisation name)
    keyword: Option<String>,

    /// File containing the API key (overrides the config file)
    #[arg(long)]
    key_file: Option<String>,

    /// Reverse whois API endpoint (overrides the config file)
    #[arg(long)]
    endpoint: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Do not print the banner
    #[arg(long)]
    no_banner: bool,

    /// Print the default config to stdout and exit
    #[arg(long)]
    print_default_config: bool,

    /// Write the default config to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init_logger(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "Exiting with error");
            eprintln!("❌ {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    if args.print_default_config {
        println!("{}", get_default_config_toml());
        return Ok(());
    }

    if args.write_default_config {
        let path = write_default_config()?;
        println!("Default config written to: {}", path.display());
        return Ok(());
    }

    if !args.no_banner {
        print_banner();
    }

    let keyword = args.keyword.ok_or(AppError::MissingKeyword)?;

    let config = load_config();
    let key_file = expand_tilde(args.key_file.as_deref().unwrap_or(&config.api.key_file))?;
    let api_key = read_api_key(&key_file)?;

    let fetch_config = FetchConfig {
        endpoint: args.endpoint.unwrap_or(config.api.endpoint),
        timeout: args
            .timeout
            .or(config.api.timeout_secs)
            .map(Duration::from_secs),
    };

    info!("🚀 Performing reverse whois lookup on \"{}\"", keyword);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(AppError::Runtime)?;
    let domains = rt.block_on(stream_domains(fetch_config, &keyword, &api_key))?;

    info!(total = domains.len(), "✅ Lookup finished");
    Ok(())
}

/// Runs the lookup, writing each domain to stdout as it arrives.
async fn stream_domains(
    fetch_config: FetchConfig,
    keyword: &str,
    api_key: &str,
) -> Result<Vec<String>, FetchError> {
    let fetcher = ReverseWhoisFetcher::with_config(fetch_config)?;
    let mut stdout = io::stdout().lock();

    fetcher
        .lookup(keyword, api_key, |domain| {
            writeln!(stdout, "{}", domain)?;
            stdout.flush()
        })
        .await
}

fn print_banner() {
    eprintln!("{}", style(BANNER).yellow().bold());
    eprintln!(
        "{}\n",
        style(" - by Sybil Scan Research <research@sybilscan.com>").cyan().bold()
    );
}
