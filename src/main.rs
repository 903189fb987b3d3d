use anagram_server::config::{self, AppState};
use anagram_server::{logger, server};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = config_path_from_args(std::env::args().skip(1))?;
    let cfg = config::Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    // Tokio runtime, thread count from `server.workers` when set
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;
    let state = Arc::new(AppState::new(&cfg));

    logger::log_server_start(&addr, &cfg);

    server::start_server_loop(listener, state, server::shutdown_signal()).await;
    Ok(())
}

/// `--config <path>` (extension omitted) or the default `config`
fn config_path_from_args(
    mut args: impl Iterator<Item = String>,
) -> Result<String, Box<dyn std::error::Error>> {
    match (args.next().as_deref(), args.next(), args.next()) {
        (None, _, _) => Ok(config::DEFAULT_CONFIG_PATH.to_string()),
        (Some("--config"), Some(path), None) => Ok(path),
        _ => Err("usage: anagram_server [--config <path>]".into()),
    }
}
