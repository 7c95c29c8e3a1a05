mod command;
mod print;
pub mod logging;

pub use command::{CommandError, CommandExecutor, CommandOutput, Join, ShellCommand};
pub use print::{eprint_values, PrintOptions};
