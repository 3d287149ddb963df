use clap::Args;
use tally_core::Core;

#[derive(Args, Debug)]
pub struct Command {
    activity_id: String,
}

pub fn handle(command: Command, core: &Core) -> eyre::Result<()> {
    core.delete_activity(&command.activity_id)?;
    println!("Deleted activity {}", command.activity_id);
    Ok(())
}
