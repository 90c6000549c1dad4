use fed_routing_cli::{cli, errors};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fed_routing_cli=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> errors::AppResult<()> {
    // Single-threaded: one request completes before the next begins
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| errors::AppError::IoError(e.to_string()))?;

    rt.block_on(cli::cli())
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}
