use crate::{
    cabin::build_cabin,
    config::Config,
    error::Result,
    grouping::{count_groups, count_row},
    render::{render, render_labeled},
    reservation::apply_reservations,
    seat::Marker,
};
use log::Level;

/// Destination for the human readable lines a run produces.
pub trait ReportSink {
    fn info(&mut self, message: &str);
    fn debug(&mut self, message: &str);
}

/// Forwards to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn debug(&mut self, message: &str) {
        log::debug!("{message}");
    }
}

/// Keeps every line in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub lines: Vec<(Level, String)>,
}

impl MemorySink {
    pub fn messages(&self, level: Level) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.as_str())
            .collect()
    }
}

impl ReportSink for MemorySink {
    fn info(&mut self, message: &str) {
        self.lines.push((Level::Info, message.to_string()));
    }

    fn debug(&mut self, message: &str) {
        self.lines.push((Level::Debug, message.to_string()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub seat_map: String,
    pub groups: usize,
}

pub fn grouping_summary(k: usize, count: usize) -> String {
    format!("Seat Grouping By {k}: Max Number = {count}")
}

/// Builds the cabin, applies the reservations and counts the groups,
/// reporting the seat map and the count to `sink`.
pub fn run(config: &Config, sink: &mut dyn ReportSink) -> Result<RunOutcome> {
    let mut cabin = build_cabin(config.layout, config.number_rows)?;
    if config.verbose {
        sink.debug(&format!(
            "Cabin: {} rows, {} seats ({} layout)",
            cabin.rows(),
            cabin.count(Marker::Unreserved),
            config.layout
        ));
    }

    let summary = apply_reservations(cabin.as_mut(), &config.reservations)?;
    if config.verbose {
        for seat in &summary.seats {
            if let Some(marker) = cabin.marker(*seat) {
                sink.debug(&format!(
                    "Reserved {seat}: row index {}, seat position {}, marker {marker}",
                    seat.row,
                    seat.letter.row_position()
                ));
            }
        }
        sink.debug(&format!(
            "Reservations: {} requested, {} newly reserved",
            summary.requested(),
            summary.newly_reserved
        ));
    }

    let seat_map = if config.labels {
        render_labeled(cabin.as_ref())
    } else {
        render(cabin.as_ref())
    };
    sink.info(&format!("Plane Rows Reserved: {seat_map}"));

    let groups = count_groups(cabin.as_ref(), config.grouping, config.policy)?;
    if config.verbose {
        for row in 0..cabin.rows() {
            sink.debug(&format!(
                "Row {}: {} free seats, {} groups of {} ({})",
                row + 1,
                cabin.free_seats_in_row(row),
                count_row(cabin.as_ref(), row, config.grouping, config.policy),
                config.grouping,
                config.policy
            ));
        }
    }
    sink.info(&grouping_summary(config.grouping, groups));

    Ok(RunOutcome { seat_map, groups })
}
