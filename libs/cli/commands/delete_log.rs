use clap::Args;
use tally_core::Core;

#[derive(Args, Debug)]
pub struct Command {
    log_id: String,
}

pub fn handle(command: Command, core: &Core) -> eyre::Result<()> {
    core.delete_log(&command.log_id)?;
    println!("Deleted log {}", command.log_id);
    Ok(())
}
