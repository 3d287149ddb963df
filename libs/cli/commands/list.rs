use clap::Args;
use prettytable::{row, Table};
use tally_core::{ActivityKind, Core};

#[derive(Args, Debug)]
pub struct Command {}

pub fn handle(_: Command, core: &Core) -> eyre::Result<()> {
    let activities = core.activities().get();

    if activities.is_empty() {
        println!("No tracked activities, create one with `tally add`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["ID", "NAME", "KIND", "TARGET", "FROM", "TO"]);

    for activity in activities.iter() {
        let target = match activity.activity_type {
            ActivityKind::Time => activity
                .avg_hours_per_day
                .map(|hours| format!("{hours} h/day")),
            ActivityKind::Completion => activity
                .target_per_week
                .map(|count| format!("{count} x/week")),
        }
        .unwrap_or_else(|| "-".to_owned());

        table.add_row(row![
            activity.id,
            activity.name,
            activity.activity_type,
            target,
            activity.start_date,
            activity.end_date
        ]);
    }

    table.printstd();
    Ok(())
}
