use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_plants;
use crate::persistence::Persistence;
use crate::registry::Registry;
use crate::status::Status;
use chrono::{DateTime, TimeZone};

/// Lists plants newest-first, optionally only those with `status` at `reference`.
/// Positions always refer to the unfiltered list.
pub fn run<P: Persistence, Tz: TimeZone>(
    registry: &Registry<P>,
    status: Option<Status>,
    reference: &DateTime<Tz>,
) -> Result<CmdResult> {
    let listed: Vec<_> = index_plants(registry.list(), reference)
        .into_iter()
        .filter(|dp| status.map_or(true, |s| dp.status == s))
        .collect();

    Ok(CmdResult::default().with_listed_plants(listed))
}
