use std::path::PathBuf;

use log::debug;

pub const ENV_CAT_ID: &str = "UCS_CAT_ID";
pub const ENV_CREATOR_ID: &str = "UCS_CREATOR_ID";
pub const ENV_SOURCE_ID: &str = "UCS_SOURCE_ID";
pub const ENV_USER_DATA: &str = "UCS_USER_DATA";
pub const ENV_CSV_FILE: &str = "UCS_CSV_FILE";

/// Per-invocation overrides that skip prompting or swap the catalog source.
///
/// Every field is optional; an empty value is treated the same as an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub category_id_override: Option<String>,
    pub creator_id_override: Option<String>,
    pub source_id_override: Option<String>,
    pub user_data_override: Option<String>,
    pub catalog_path_override: Option<PathBuf>,
}

impl Config {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            let value = lookup(key).filter(|value| !value.is_empty());
            if value.is_some() {
                debug!("override {key} is set");
            }
            value
        };

        Self {
            category_id_override: read(ENV_CAT_ID),
            creator_id_override: read(ENV_CREATOR_ID),
            source_id_override: read(ENV_SOURCE_ID),
            user_data_override: read(ENV_USER_DATA),
            catalog_path_override: read(ENV_CSV_FILE).map(PathBuf::from),
        }
    }
}
