use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

pub const USAGE: &str = "Usage: accountswitcher <account> [repo]";

/// Command-line arguments for accountswitcher
#[derive(Parser, Debug)]
#[command(name = "accountswitcher")]
#[command(version)]
#[command(about = "Switch the global Git email between account profiles and clone through per-account host aliases")]
#[command(override_usage = "accountswitcher [OPTIONS] <account> [repo]")]
#[command(long_about = r#"
accountswitcher - Git account switcher

Reads account profiles from ~/.ssh/accountswitcherconfig.json:

    {"work": {"prefix": "git@github-work", "email": "me@company.com"}}

EXAMPLES:
    accountswitcher work                 Set the global git email to the work account
    accountswitcher work org/project     Switch to work and clone git@github-work:org/project.git
    accountswitcher info                 Show the last selected account
"#)]
pub struct Cli {
    /// Account name, or `info` to show the last selected account
    pub account: Option<String>,

    /// Repository to clone, as owner/repo
    pub repo: Option<String>,

    /// Path to the accounts config file
    #[arg(long, env = "ACCOUNTSWITCHER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the file recording the last selected account
    #[arg(long, env = "ACCOUNTSWITCHER_MARKER", value_name = "PATH")]
    pub marker: Option<PathBuf>,

    /// Increase diagnostic output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What a single run should do
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Usage,
    Activate(String),
    Clone { account: String, repo: String },
    Info,
    Unknown(String),
}

impl Cli {
    /// True when no positional argument was given
    pub fn is_bare(&self) -> bool {
        self.account.is_none()
    }

    /// Decide what to do given the loaded accounts
    pub fn resolve(&self, config: &Config) -> Invocation {
        match (&self.account, &self.repo) {
            (None, _) => Invocation::Usage,
            (Some(account), Some(repo)) => Invocation::Clone {
                account: account.clone(),
                repo: repo.clone(),
            },
            (Some(arg), None) if arg == "info" => Invocation::Info,
            (Some(account), None) if config.contains(account) => {
                Invocation::Activate(account.clone())
            }
            (Some(arg), None) => Invocation::Unknown(arg.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("accountswitcher").chain(args.iter().copied())).unwrap()
    }

    fn sample_config() -> Config {
        let mut config = Config::default();
        config.insert(
            "work",
            Profile {
                prefix: "git@work-host".into(),
                email: "a@b.com".into(),
            },
        );
        config
    }

    #[test]
    fn test_no_arguments_is_usage() {
        let cli = parse(&[]);
        assert!(cli.is_bare());
        assert_eq!(cli.resolve(&sample_config()), Invocation::Usage);
    }

    #[test]
    fn test_account_and_repo_is_clone() {
        let cli = parse(&["work", "org/project"]);
        assert_eq!(
            cli.resolve(&sample_config()),
            Invocation::Clone {
                account: "work".into(),
                repo: "org/project".into(),
            }
        );
    }

    #[test]
    fn test_clone_resolution_defers_account_check() {
        let cli = parse(&["school", "org/project"]);
        assert!(matches!(cli.resolve(&sample_config()), Invocation::Clone { .. }));
    }

    #[test]
    fn test_configured_account_is_activate() {
        let cli = parse(&["work"]);
        assert_eq!(cli.resolve(&sample_config()), Invocation::Activate("work".into()));
    }

    #[test]
    fn test_info() {
        let cli = parse(&["info"]);
        assert_eq!(cli.resolve(&sample_config()), Invocation::Info);
    }

    #[test]
    fn test_info_wins_over_account_named_info() {
        let mut config = sample_config();
        config.insert(
            "info",
            Profile {
                prefix: "p".into(),
                email: "e@x.io".into(),
            },
        );
        assert_eq!(parse(&["info"]).resolve(&config), Invocation::Info);
    }

    #[test]
    fn test_unconfigured_single_argument_is_unknown() {
        let cli = parse(&["personal"]);
        assert_eq!(
            cli.resolve(&sample_config()),
            Invocation::Unknown("personal".into())
        );
    }

    #[test]
    fn test_third_positional_is_rejected() {
        let result = Cli::try_parse_from(["accountswitcher", "work", "org/project", "extra"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_path_overrides() {
        let cli = parse(&["--config", "/tmp/c.json", "--marker", "/tmp/m.txt", "-vv", "info"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.json")));
        assert_eq!(cli.marker, Some(PathBuf::from("/tmp/m.txt")));
        assert_eq!(cli.verbose, 2);
    }
}
