#![forbid(unsafe_code)]

use chamada_model::Roster;
use chamada_server::{build_router, AppConfig, AppState};
use chamada_store::LocalFsStore;
use std::fs;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn load_roster(config: &AppConfig) -> Result<Roster, String> {
    let Some(path) = &config.roster_path else {
        return Ok(Roster::default_roster());
    };
    let raw = fs::read_to_string(path).map_err(|e| format!("read roster {}: {e}", path.display()))?;
    let roster: Roster =
        serde_json::from_str(&raw).map_err(|e| format!("parse roster {}: {e}", path.display()))?;
    roster
        .validate()
        .map_err(|e| format!("invalid roster {}: {e}", path.display()))?;
    Ok(roster)
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = AppConfig::from_env();
    init_tracing(config.log_json);

    let roster = load_roster(&config)?;
    let store = LocalFsStore::open(config.records_dir.clone()).map_err(|e| e.to_string())?;
    let state = AppState::new(roster, store);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .map_err(|e| format!("bind {}: {e}", config.bind))?;
    info!(bind = %config.bind, records_dir = %config.records_dir.display(), "chamada listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("serve: {e}"))?;
    Ok(())
}
