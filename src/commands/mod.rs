mod eprint;
mod run;

pub use eprint::{EprintArgs, EprintCommand};
pub use run::{RunArgs, RunCommand};
