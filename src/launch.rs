//! Opening Logseq from the viewer.
//!
//! Every rendered line and the title carry the same tap target; the target
//! is only recorded for logging.

use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::{info, warn};

/// Where the launch was triggered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchTarget {
    /// The title row.
    Title,
    /// A journal line, by position.
    Line(usize),
}

/// Errors running the launch command.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The configured command has no program.
    #[error("Launch command is empty")]
    EmptyCommand,

    /// The program could not be started.
    #[error("Failed to start {program}: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The program ran but reported failure.
    #[error("{program} exited with {status}")]
    Failed {
        /// Program that ran.
        program: String,
        /// Its exit status.
        status: std::process::ExitStatus,
    },
}

/// Runs the configured opener command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    command: Vec<String>,
}

impl Launcher {
    /// `command` is the program followed by its arguments.
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    /// Run the command and wait for it to exit.
    ///
    /// Output is discarded so the opener cannot draw over the viewer.
    ///
    /// # Errors
    ///
    /// Returns `LaunchError` if the command is empty, cannot be started, or
    /// exits unsuccessfully.
    pub fn launch(&self, target: LaunchTarget) -> Result<(), LaunchError> {
        let (program, args) = self.command.split_first().ok_or(LaunchError::EmptyCommand)?;

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !status.success() {
            warn!(?target, %status, program = %program, "Launch command failed");
            return Err(LaunchError::Failed {
                program: program.clone(),
                status,
            });
        }

        info!(?target, program = %program, "Opened Logseq");
        Ok(())
    }
}
