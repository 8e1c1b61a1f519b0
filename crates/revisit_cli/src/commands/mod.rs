//! Subcommand implementations

mod init;
mod list;
mod run;

pub use init::run_init;
pub use list::run_list;
pub use run::run_passes;
