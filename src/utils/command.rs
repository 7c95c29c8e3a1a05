use std::process::{Command, Output, Stdio};

use thiserror::Error;

pub const DEFAULT_SHELL: &str = "/bin/sh";

/// What to execute: a string handed to the shell, or an argument vector run directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Shell(String),
    Argv(Vec<String>),
}

impl From<&str> for ShellCommand {
    fn from(script: &str) -> Self {
        ShellCommand::Shell(script.to_string())
    }
}

impl From<String> for ShellCommand {
    fn from(script: String) -> Self {
        ShellCommand::Shell(script)
    }
}

impl From<Vec<String>> for ShellCommand {
    fn from(argv: Vec<String>) -> Self {
        ShellCommand::Argv(argv)
    }
}

impl From<&[&str]> for ShellCommand {
    fn from(argv: &[&str]) -> Self {
        ShellCommand::Argv(argv.iter().map(|arg| arg.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ShellCommand {
    fn from(argv: [&str; N]) -> Self {
        ShellCommand::from(&argv[..])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Join {
    #[default]
    Off,
    Space,
    With(String),
}

impl Join {
    fn separator(&self) -> Option<&str> {
        match self {
            Join::Off => None,
            Join::Space => Some(" "),
            Join::With(sep) => Some(sep.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Raw(Vec<u8>),
    Lines(Vec<String>),
    Joined(String),
}

#[derive(Error, Debug)]
pub enum CommandError {
    /// The child exited non-zero, was killed, or never started.
    /// The message is the captured stderr and nothing else.
    #[error("{stderr}")]
    Failed { stderr: String, status: Option<i32> },
}

impl CommandError {
    pub fn stderr(&self) -> &str {
        match self {
            CommandError::Failed { stderr, .. } => stderr,
        }
    }

    pub fn status(&self) -> Option<i32> {
        match self {
            CommandError::Failed { status, .. } => *status,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommandExecutor {
    shell: String,
}

impl CommandExecutor {
    pub fn new() -> Self {
        CommandExecutor {
            shell: DEFAULT_SHELL.to_string(),
        }
    }

    pub fn with_shell(shell: &str) -> Self {
        CommandExecutor {
            shell: shell.to_string(),
        }
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Runs `cmd` to completion and shapes its stdout.
    ///
    /// `lines` wins over `join`: when both are set the output is split
    /// and never re-joined.
    pub fn sh(&self, cmd: &ShellCommand, join: Join, lines: bool) -> Result<CommandOutput, CommandError> {
        if lines {
            return self.run_lines(cmd).map(CommandOutput::Lines);
        }

        match join.separator() {
            Some(sep) => self.run_joined(cmd, sep).map(CommandOutput::Joined),
            None => self.run_raw(cmd).map(CommandOutput::Raw),
        }
    }

    pub fn run_raw(&self, cmd: &ShellCommand) -> Result<Vec<u8>, CommandError> {
        self.capture(cmd)
    }

    pub fn run_lines(&self, cmd: &ShellCommand) -> Result<Vec<String>, CommandError> {
        let stdout = self.capture(cmd)?;
        Ok(split_lines(&stdout))
    }

    pub fn run_joined(&self, cmd: &ShellCommand, sep: &str) -> Result<String, CommandError> {
        let stdout = self.capture(cmd)?;
        Ok(join_lines(&stdout, sep))
    }

    fn build(&self, cmd: &ShellCommand) -> Result<Command, CommandError> {
        let command = match cmd {
            ShellCommand::Shell(script) => {
                let mut command = Command::new(&self.shell);
                command.arg("-c").arg(script);
                command
            }
            ShellCommand::Argv(argv) => {
                let (program, args) = argv.split_first().ok_or_else(|| CommandError::Failed {
                    stderr: "empty argument vector: no program to run".to_string(),
                    status: None,
                })?;
                let mut command = Command::new(program);
                command.args(args);
                command
            }
        };
        Ok(command)
    }

    fn capture(&self, cmd: &ShellCommand) -> Result<Vec<u8>, CommandError> {
        let mut command = self.build(cmd)?;
        tracing::debug!("Spawning {:?}", command);

        let output = command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                tracing::debug!("Failed to spawn {:?}: {}", cmd, e);
                CommandError::Failed {
                    stderr: e.to_string(),
                    status: None,
                }
            })?;

        check_status(output)
    }
}

fn check_status(output: Output) -> Result<Vec<u8>, CommandError> {
    tracing::debug!(
        "Child exited with {} ({} bytes stdout, {} bytes stderr)",
        output.status,
        output.stdout.len(),
        output.stderr.len()
    );

    if output.status.success() {
        Ok(output.stdout)
    } else {
        Err(CommandError::Failed {
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code(),
        })
    }
}

// A trailing newline produces a trailing empty line; empty output is one empty line.
fn split_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .split('\n')
        .map(str::to_string)
        .collect()
}

fn join_lines(stdout: &[u8], sep: &str) -> String {
    split_lines(stdout).join(sep).trim().to_string()
}
