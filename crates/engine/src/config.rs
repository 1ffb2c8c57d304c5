//! Engine configuration read from the environment.

use std::path::PathBuf;

use grimoire_domain::UserId;

pub const LOG_VAR: &str = "GRIMOIRE_LOG";
pub const ADMIN_USER_IDS_VAR: &str = "GRIMOIRE_ADMIN_USER_IDS";
pub const SEED_PATH_VAR: &str = "GRIMOIRE_SEED_PATH";

const DEFAULT_LOG_FILTER: &str = "grimoire_engine=info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} contains an invalid user id '{value}'")]
    InvalidUserId { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Users registered at start so they can manage the catalogue.
    pub admin_user_ids: Vec<UserId>,
    pub seed_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            admin_user_ids: Vec::new(),
            seed_path: None,
        }
    }
}

impl EngineConfig {
    /// Load `.env` files from the repository root, then read the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv_from_repo_root();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let log_filter = read(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let admin_user_ids = match read(ADMIN_USER_IDS_VAR) {
            Some(raw) => parse_user_ids(&raw)?,
            None => Vec::new(),
        };
        let seed_path = read(SEED_PATH_VAR).map(PathBuf::from);

        Ok(Self {
            log_filter,
            admin_user_ids,
            seed_path,
        })
    }
}

fn parse_user_ids(raw: &str) -> Result<Vec<UserId>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<UserId>()
                .map_err(|_| ConfigError::InvalidUserId {
                    var: ADMIN_USER_IDS_VAR,
                    value: part.to_string(),
                })
        })
        .collect()
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
