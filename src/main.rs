//! # accountswitcher - Git account switcher
//!
//! Switches the global Git email between named account profiles and clones
//! repositories through the active account's SSH host alias.
//!
//! ## Files
//! - `~/.ssh/accountswitcherconfig.json` maps account names to `{prefix, email}`
//! - `~/.ssh/accountswitcherconfig.txt` records the last selected account

mod cli;
mod config;
mod error;
mod git;
mod logging;
mod profile;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;

use cli::{Cli, Invocation, USAGE};
use config::{Config, Paths};
use git::{GitRunner, SystemGit};

fn main() {
    std::process::exit(entry(std::env::args_os(), &SystemGit));
}

/// Parse `args`, run the invocation and return the process exit code
fn entry<I, T>(args: I, git: &dyn GitRunner) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
        }
    };
    logging::init(cli.verbose);

    if cli.is_bare() {
        println!("{}", USAGE);
        return 1;
    }

    match run(&cli, git) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn run(cli: &Cli, git: &dyn GitRunner) -> Result<()> {
    let paths = Paths::resolve(cli.config.clone(), cli.marker.clone())?;
    let config = Config::load(&paths.config).context("Error reading config file")?;

    match cli.resolve(&config) {
        Invocation::Usage => anyhow::bail!("{}", USAGE),
        Invocation::Clone { account, repo } => {
            profile::switch_and_clone(&config, &paths.marker, git, &account, &repo)
        }
        Invocation::Activate(account) => {
            profile::activate(&config, &paths.marker, git, &account)
                .context("Error changing account")?;
            Ok(())
        }
        Invocation::Info => {
            println!("{}", profile::info(&paths.marker)?);
            Ok(())
        }
        Invocation::Unknown(arg) => {
            tracing::debug!(%arg, "not a configured account");
            anyhow::bail!("Unknown command")
        }
    }
}
