use clap::Parser;
use mdu::headless::{self, OutputFormat};
use mdu_client::HttpSearchClient;
use mdu_core::{config::Config, FileStore, FilterField};

#[derive(Parser)]
#[command(name = "mdu", about = "Mobile Device Usage: explore the user behaviour dataset")]
struct Cli {
    /// Write debug logs to /tmp/mdu-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Base URL of the search API, overriding `[api] base_url`.
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Run one search, print it and exit instead of starting the TUI.
    #[arg(long)]
    headless: bool,

    /// Field to filter by: model, gender, os or class (headless only).
    #[arg(long, value_name = "FIELD", requires = "headless")]
    filter: Option<FilterField>,

    /// Keyword to search for (headless only). Empty matches every record.
    #[arg(long, default_value = "", requires = "headless")]
    keyword: String,

    /// Output format (headless only).
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, requires = "headless")]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/mdu-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("mdu debug log started, tail -f /tmp/mdu-debug.log");
    }

    let mut config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config unreadable, using defaults");
        Config::defaults()
    });
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();
    let api = HttpSearchClient::new(&config.api.base_url, config.api.timeout())?;

    if cli.headless {
        let filter = cli.filter.unwrap_or(config.ui.default_filter);
        let mut stdout = std::io::stdout().lock();
        runtime.block_on(headless::run(&api, filter, &cli.keyword, cli.format, &mut stdout))?;
        return Ok(());
    }

    let store = FileStore::open(config.session.resolved_dir())?;
    mdu_tui::run(config, api, store, runtime.handle().clone())
}
