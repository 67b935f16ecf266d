use crate::commands::CmdResult;
use crate::error::Result;
use crate::library::Library;
use crate::stats::{self, CapStatus, TagCount, Totals, TrendBucket};
use chrono::NaiveDate;

/// Everything the dashboard view needs, computed in one pass over the
/// collection.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub totals: Totals,
    pub top_tag: Option<TagCount>,
    pub trend: Vec<TrendBucket>,
    pub cap: u32,
    pub cap_status: CapStatus,
}

pub fn run(library: &Library, cap: u32, today: NaiveDate) -> Result<CmdResult> {
    let records = library.records();
    let totals = stats::totals(records);

    let dashboard = Dashboard {
        top_tag: stats::top_tag(records),
        trend: stats::trend(records, today),
        cap,
        cap_status: stats::cap_status(cap, totals.total_pages),
        totals,
    };

    Ok(CmdResult::default().with_dashboard(dashboard))
}
