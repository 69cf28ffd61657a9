use crate::report::window::WeekSelection;
use clap::Parser;

/// Weekly calendar hours report
#[derive(Debug, Parser)]
#[command(
    name = "viikkoraportti",
    version,
    about = "Prints a per-event table and a per-category hours summary for one calendar week"
)]
pub struct Cli {
    /// Report on the current week instead of the previous one
    #[arg(long, conflicts_with = "weeks_ago")]
    pub this_week: bool,

    /// Report on the week this many weeks before the current one
    #[arg(long, value_name = "N")]
    pub weeks_ago: Option<u32>,

    /// Log each item's include/exclude decision
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the flags into a week selection.
    ///
    /// `--this-week` and `--weeks-ago` conflict at parse time, so at most one
    /// is set here. No flags means the previous full week.
    pub fn week_selection(&self) -> WeekSelection {
        if self.this_week {
            WeekSelection::ThisWeek
        } else {
            WeekSelection::WeeksAgo(self.weeks_ago.unwrap_or(1))
        }
    }
}
