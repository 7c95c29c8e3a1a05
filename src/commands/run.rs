use std::io::{self, Write};
use anyhow::Result;
use clap::{ArgGroup, Args};
use crate::utils::{CommandExecutor, CommandOutput, Join, ShellCommand};

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("target").required(true).args(["script", "argv"])))]
pub struct RunArgs {
    /// Script handed to the shell (pipes, globs and variables are expanded)
    #[arg(short = 'c', long = "shell", value_name = "SCRIPT")]
    pub script: Option<String>,

    /// Program that interprets --shell scripts
    #[arg(long, value_name = "PROGRAM", requires = "script")]
    pub shell_program: Option<String>,

    /// Split stdout into lines; takes precedence over --join
    #[arg(long)]
    pub lines: bool,

    /// Join stdout lines with SEP (a single space when given without a value)
    #[arg(long, value_name = "SEP", num_args = 0..=1)]
    pub join: Option<Option<String>>,

    /// Program and arguments, executed directly without a shell
    #[arg(last = true, value_name = "ARGV")]
    pub argv: Vec<String>,
}

impl RunArgs {
    fn command(&self) -> ShellCommand {
        match &self.script {
            Some(script) => ShellCommand::from(script.clone()),
            None => ShellCommand::from(self.argv.clone()),
        }
    }

    fn join(&self) -> Join {
        match &self.join {
            None => Join::Off,
            Some(None) => Join::Space,
            Some(Some(sep)) => Join::With(sep.clone()),
        }
    }
}

pub struct RunCommand {
    args: RunArgs,
}

impl RunCommand {
    pub fn new(args: RunArgs) -> Self {
        RunCommand { args }
    }

    fn executor(&self) -> CommandExecutor {
        match &self.args.shell_program {
            Some(shell) => CommandExecutor::with_shell(shell),
            None => CommandExecutor::new(),
        }
    }

    fn print_output(output: &CommandOutput) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();

        match output {
            CommandOutput::Raw(bytes) => handle.write_all(bytes)?,
            CommandOutput::Lines(lines) => {
                for line in lines {
                    writeln!(handle, "{}", line)?;
                }
            }
            CommandOutput::Joined(joined) => writeln!(handle, "{}", joined)?,
        }
        handle.flush()
    }

    pub fn execute(&self) -> Result<()> {
        let executor = self.executor();
        let command = self.args.command();
        tracing::info!("Running {:?} with shell {}", command, executor.shell());

        let output = executor.sh(&command, self.args.join(), self.args.lines)?;
        Self::print_output(&output)?;
        Ok(())
    }
}
