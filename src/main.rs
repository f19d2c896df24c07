use clap::Parser;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use contact_gateway::{config::Args, router, state::AppState, sweeper::sweep_expired_entries};

fn init_tracing(json: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // parse cli arguments
    let args = Args::parse();
    init_tracing(args.log_json);

    let state = Arc::new(AppState::from_args(&args));

    // spawn the background sweeper
    let sweeper_state = Arc::clone(&state);
    let sweep_interval = args.sweep_interval();
    tokio::spawn(async move {
        sweep_expired_entries(sweeper_state, sweep_interval).await;
    });

    let app = router(state);

    let addr = args.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        addr = %addr,
        rate_limit = args.rate_limit,
        rate_window_ms = args.rate_window_ms,
        sweep_interval_secs = args.sweep_interval,
        "Contact gateway listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
