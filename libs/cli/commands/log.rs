use clap::Args;
use colored::Colorize;
use tally_core::{Core, RecordLogInput};

#[derive(Args, Debug)]
pub struct Command {
    /// Id of the activity this log belongs to
    activity_id: String,

    /// Hours spent (time activities)
    #[clap(long)]
    hours: Option<f64>,

    /// Mark the activity completed (completion activities)
    #[clap(long)]
    completed: bool,

    /// Number of completions recorded as one entry
    #[clap(long)]
    count: Option<u32>,

    /// Day of the observation, e.g. 2024-03-05 (default to today)
    #[clap(long)]
    date: Option<String>,
}

pub fn handle(command: Command, core: &Core) -> eyre::Result<()> {
    let date = command
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive().to_string());

    // Dangling references are allowed by the state layer; only mention it.
    let known = core
        .activities()
        .get()
        .iter()
        .any(|activity| activity.id == command.activity_id);
    if !known {
        println!(
            "{}",
            format!(
                "note: no activity with id '{}', recording anyway",
                command.activity_id
            )
            .dimmed()
        );
    }

    let log = core.record_log(RecordLogInput {
        activity_id: command.activity_id,
        hours_spent: command.hours,
        completed: command.completed.then_some(true),
        count: command.count,
        date,
    });

    println!("{} {}", "Recorded".green().bold(), log.date);
    println!("Id: {}", log.id);

    Ok(())
}
