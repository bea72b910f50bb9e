use crate::cli::commands::load_snapshot;
use crate::cli::parser::Cli;
use crate::errors::AppResult;
use crate::models::TimelineEvent;
use crate::ui::messages::{header, warning};
use crate::utils::Table;
use crate::utils::colors::color_for_status;

/// Handle the `events` command: timeline as a table, full descriptions.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let snapshot = load_snapshot(cli)?;

    header(format!("{} - event timeline", snapshot.summary.vessel_name));

    if snapshot.events.is_empty() {
        warning("No events in snapshot.");
        return Ok(());
    }

    print!("{}", timeline_table(&snapshot.events).render());
    Ok(())
}

/// Numbered timeline; only the Status cell is coloured.
fn timeline_table(events: &[TimelineEvent]) -> Table {
    let mut table = Table::new(&["#", "Date/Time", "Event", "Status", "Description"]);
    for (i, ev) in events.iter().enumerate() {
        table.add_colored_row(
            vec![
                (i + 1).to_string(),
                ev.timestamp.clone(),
                ev.event.clone(),
                ev.status.display_label(),
                ev.description.clone(),
            ],
            vec![None, None, None, Some(color_for_status(&ev.status)), None],
        );
    }
    table
}
