use talenthub::{
    cmd,
    config::{get_config, init_config},
    storage::open_store,
    AppState,
};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        tracing::error!(error = %e, "Command failed");
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> talenthub::error::Result<()> {
    init_config()?;
    let config = get_config()?;
    init_tracing(config.log_json);

    let store = open_store(config)?;
    let app_state = AppState::new(store);

    cmd::run(&app_state, config)
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
