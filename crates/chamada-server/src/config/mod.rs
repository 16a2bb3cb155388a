use std::env;
use std::path::PathBuf;

/// Startup configuration, resolved once in `main` from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub records_dir: PathBuf,
    pub roster_path: Option<PathBuf>,
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            records_dir: PathBuf::from("registos"),
            roster_path: None,
            log_json: false,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind: env::var("CHAMADA_BIND").unwrap_or(defaults.bind),
            records_dir: env::var("CHAMADA_RECORDS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.records_dir),
            roster_path: env::var("CHAMADA_ROSTER_PATH").ok().map(PathBuf::from),
            log_json: env_bool("CHAMADA_LOG_JSON", false),
        }
    }
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}
