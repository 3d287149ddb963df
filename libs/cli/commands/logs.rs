use std::collections::HashMap;

use clap::Args;
use prettytable::{row, Table};
use tally_core::Core;

#[derive(Args, Debug)]
pub struct Command {}

pub fn handle(_: Command, core: &Core) -> eyre::Result<()> {
    let logs = core.logs().get();

    if logs.is_empty() {
        println!("No recorded logs, record one with `tally log`.");
        return Ok(());
    }

    let names: HashMap<String, String> = core
        .activities()
        .get()
        .into_iter()
        .map(|activity| (activity.id, activity.name))
        .collect();

    let mut table = Table::new();
    table.add_row(row!["ID", "ACTIVITY", "RECORDED", "DATE"]);

    for log in logs.iter() {
        let activity = names
            .get(&log.activity_id)
            .cloned()
            // The activity may have been deleted since, show the raw reference
            .unwrap_or_else(|| format!("({})", log.activity_id));

        let recorded = if let Some(hours) = log.hours_spent {
            format!("{hours} h")
        } else if let Some(count) = log.count {
            format!("{count} x")
        } else if log.completed == Some(true) {
            "completed".to_owned()
        } else {
            "-".to_owned()
        };

        table.add_row(row![log.id, activity, recorded, log.date]);
    }

    table.printstd();
    Ok(())
}
