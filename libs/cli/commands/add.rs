use clap::Args;
use colored::Colorize;
use tally_core::{ActivityKind, Core, CreateActivityInput};

#[derive(Args, Debug)]
pub struct Command {
    /// Name of the activity
    name: String,

    /// Track time spent ("time") or completions ("completion")
    #[clap(short, long)]
    kind: String,

    /// Hours per day aimed for (time activities)
    #[clap(long)]
    avg_hours_per_day: Option<f64>,

    /// Completions per week aimed for (completion activities)
    #[clap(long)]
    target_per_week: Option<u32>,

    /// First day of the tracking window, e.g. 2024-01-01 (default to today)
    #[clap(long)]
    start_date: Option<String>,

    /// Last day of the tracking window (default to one year after the start)
    #[clap(long)]
    end_date: Option<String>,
}

pub fn handle(command: Command, core: &Core) -> eyre::Result<()> {
    let activity_type: ActivityKind = command.kind.parse()?;

    let today = chrono::Local::now().date_naive();
    let start_date = command.start_date.unwrap_or_else(|| today.to_string());
    let end_date = command
        .end_date
        .unwrap_or_else(|| (today + chrono::Months::new(12)).to_string());

    let activity = core.create_activity(CreateActivityInput {
        name: command.name,
        activity_type,
        avg_hours_per_day: command.avg_hours_per_day,
        target_per_week: command.target_per_week,
        start_date,
        end_date,
    });

    println!("{} {}", "Now tracking".green().bold(), activity.name.cyan());
    println!("Id: {}", activity.id);

    Ok(())
}
