use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SwitchError, SwitchResult};
use crate::profile::Profile;

const CONFIG_FILE_NAME: &str = "accountswitcherconfig.json";
const MARKER_FILE_NAME: &str = "accountswitcherconfig.txt";

/// Account name to profile mapping, as stored in the config file
#[derive(Deserialize, Debug, Default)]
#[serde(transparent)]
pub struct Config {
    accounts: HashMap<String, Profile>,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> SwitchResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| SwitchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|source| SwitchError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), accounts = config.accounts.len(), "loaded config");
        Ok(config)
    }

    /// Look up a profile by account name
    pub fn profile(&self, account: &str) -> SwitchResult<&Profile> {
        self.accounts
            .get(account)
            .ok_or_else(|| SwitchError::UnknownAccount(account.to_string()))
    }

    pub fn contains(&self, account: &str) -> bool {
        self.accounts.contains_key(account)
    }

    #[cfg(test)]
    pub fn insert(&mut self, account: impl Into<String>, profile: Profile) {
        self.accounts.insert(account.into(), profile);
    }
}

/// File locations used by one invocation
#[derive(Debug, Clone)]
pub struct Paths {
    pub config: PathBuf,
    pub marker: PathBuf,
}

impl Paths {
    /// Resolve paths, falling back to ~/.ssh for anything not overridden
    pub fn resolve(config: Option<PathBuf>, marker: Option<PathBuf>) -> Result<Self> {
        let (config, marker) = match (config, marker) {
            (Some(config), Some(marker)) => (config, marker),
            (config, marker) => {
                let dir = get_ssh_dir()?;
                (
                    config.unwrap_or_else(|| dir.join(CONFIG_FILE_NAME)),
                    marker.unwrap_or_else(|| dir.join(MARKER_FILE_NAME)),
                )
            }
        };

        Ok(Self { config, marker })
    }
}

/// Get the directory holding the config and marker files (~/.ssh)
pub fn get_ssh_dir() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".ssh"))
        .context("Could not determine home directory")
}
