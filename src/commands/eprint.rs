use anyhow::Result;
use clap::Args;
use crate::utils::{eprint_values, PrintOptions};

#[derive(Args, Debug)]
pub struct EprintArgs {
    /// Separator written between values
    #[arg(long, default_value = " ", allow_hyphen_values = true)]
    pub sep: String,

    /// Terminator written after the last value
    #[arg(long, default_value = "\n", allow_hyphen_values = true)]
    pub end: String,

    /// Flush stderr after writing
    #[arg(long)]
    pub flush: bool,

    #[arg(value_name = "VALUES", allow_hyphen_values = true)]
    pub values: Vec<String>,
}

pub struct EprintCommand {
    args: EprintArgs,
}

impl EprintCommand {
    pub fn new(args: EprintArgs) -> Self {
        EprintCommand { args }
    }

    pub fn execute(&self) -> Result<()> {
        let options = PrintOptions {
            sep: self.args.sep.clone(),
            end: self.args.end.clone(),
            flush: self.args.flush,
        };
        eprint_values(&self.args.values, &options);
        Ok(())
    }
}
