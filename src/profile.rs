use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{SwitchError, SwitchResult};
use crate::git::{self, GitRunner};

/// Connection prefix and identity for one account
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Host part of the clone URL, usually an SSH host alias (e.g. `git@github-work`)
    pub prefix: String,
    pub email: String,
}

/// Record the active account name in the marker file
pub fn write_marker(path: &Path, account: &str) -> SwitchResult<()> {
    fs::write(path, account.trim()).map_err(|source| SwitchError::MarkerWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "marker updated");
    Ok(())
}

/// Read the marker file verbatim
pub fn read_marker(path: &Path) -> SwitchResult<String> {
    fs::read_to_string(path).map_err(|source| SwitchError::MarkerRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Text shown by `info`: the last selected account, verbatim
pub fn info(marker: &Path) -> anyhow::Result<String> {
    read_marker(marker).context("Error reading info")
}

/// Make `account` the active identity.
///
/// The marker is written before the account is looked up, so an unknown
/// name still lands in the marker file even though activation fails.
pub fn activate(
    config: &Config,
    marker: &Path,
    git: &dyn GitRunner,
    account: &str,
) -> SwitchResult<()> {
    write_marker(marker, account)?;

    let profile = config.profile(account)?;
    git::set_global_email(git, &profile.email)
}

/// Build the per-account clone URL `<prefix>:<owner>/<repo>.git`.
///
/// `repo` must be exactly two non-empty segments separated by one slash;
/// `org/`, `/project` and `a//b` are rejected as malformed.
pub fn rewrite_url(config: &Config, account: &str, repo: &str) -> SwitchResult<String> {
    let profile = config.profile(account)?;

    let (owner, name) = match repo.split('/').collect::<Vec<_>>()[..] {
        [owner, name] if !owner.is_empty() && !name.is_empty() => (owner, name),
        _ => return Err(SwitchError::InvalidRepoFormat(repo.to_string())),
    };

    let url = format!("{}:{}/{}.git", profile.prefix, owner, name);
    println!("{}", url);
    Ok(url)
}

/// Activate `account`, then clone `repo` through that account's prefix
pub fn switch_and_clone(
    config: &Config,
    marker: &Path,
    git: &dyn GitRunner,
    account: &str,
    repo: &str,
) -> anyhow::Result<()> {
    activate(config, marker, git, account).context("Error changing account")?;
    let url = rewrite_url(config, account, repo).context("Error fixing URL")?;
    git::clone_repo(git, &url).context("Error cloning repo")?;
    Ok(())
}
