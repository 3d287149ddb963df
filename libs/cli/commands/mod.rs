use clap::Subcommand;
use tally_core::Core;

pub mod add;
pub mod delete;
pub mod delete_log;
pub mod list;
pub mod log;
pub mod logs;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start tracking a new activity
    Add(add::Command),
    /// List tracked activities
    List(list::Command),
    /// Record time spent or a completion against an activity
    Log(log::Command),
    /// Show recorded time logs
    Logs(logs::Command),
    /// Remove an activity
    Delete(delete::Command),
    /// Remove a single time log entry
    DeleteLog(delete_log::Command),
}

impl Command {
    pub fn execute(self, core: &Core) -> eyre::Result<()> {
        if let Err(reason) = core.has_found_config_file() {
            tracing::debug!("no usable config file, continuing with defaults: {reason}");
        }

        match self {
            Self::Add(o) => add::handle(o, core)?,
            Self::List(o) => list::handle(o, core)?,
            Self::Log(o) => log::handle(o, core)?,
            Self::Logs(o) => logs::handle(o, core)?,
            Self::Delete(o) => delete::handle(o, core)?,
            Self::DeleteLog(o) => delete_log::handle(o, core)?,
        };

        Ok(())
    }
}
