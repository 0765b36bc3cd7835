//! External-command execution seam.
//!
//! Strip and dependency-fixer invocations go through the [`CommandExecutor`]
//! trait so tests can substitute a stub and verify the exact argv without
//! spawning real subprocesses.

use crate::error::{InstallError, Result};
use std::process::{Command, Output};

/// Abstraction for running external commands.
pub trait CommandExecutor {
    /// Runs a command with arguments, waits for it to exit, and returns the
    /// captured output.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::ToolSpawn`] when the command cannot be
    /// started. A non-zero exit status is not an error at this layer; the
    /// caller inspects `Output::status`.
    fn run(&self, cmd: &str, args: &[&str]) -> Result<Output>;
}

/// Executes commands on the host system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandExecutor;

impl CommandExecutor for SystemCommandExecutor {
    fn run(&self, cmd: &str, args: &[&str]) -> Result<Output> {
        Command::new(cmd)
            .args(args)
            .output()
            .map_err(|e| InstallError::ToolSpawn {
                tool: cmd.to_owned(),
                source: e,
            })
    }
}
