use std::process::Command;

use crate::error::{CommandFailure, SwitchError, SwitchResult};

/// Boundary to the external git tool
pub trait GitRunner {
    /// Run git with the given arguments, inheriting stdout and stderr
    fn run(&self, args: &[&str]) -> SwitchResult<()>;
}

/// Runs the real `git` binary found on PATH
#[derive(Debug, Default)]
pub struct SystemGit;

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> SwitchResult<()> {
        let command = command_line(args);
        println!("running command => {}", command);
        tracing::debug!(?args, "spawning git");

        // Arguments go straight to git, never through a shell
        let status = Command::new("git")
            .args(args)
            .status()
            .map_err(|e| SwitchError::CommandExecution {
                command: command.clone(),
                reason: CommandFailure::Launch(e),
            })?;

        if !status.success() {
            return Err(SwitchError::CommandExecution {
                command,
                reason: CommandFailure::Exit(status),
            });
        }

        Ok(())
    }
}

/// Set the global user email
pub fn set_global_email(git: &dyn GitRunner, email: &str) -> SwitchResult<()> {
    let args = ["config", "--global", "user.email", email];
    println!("{}", command_line(&args));
    git.run(&args)
}

/// Clone a repository from a fully built URL into the current directory
pub fn clone_repo(git: &dyn GitRunner, url: &str) -> SwitchResult<()> {
    git.run(&["clone", url])
}

/// Human-readable form of a git invocation for echo and error messages
pub fn command_line(args: &[&str]) -> String {
    let mut line = String::from("git");
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
