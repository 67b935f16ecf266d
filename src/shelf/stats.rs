//! # Statistics Engine
//!
//! Aggregate counters derived from the current collection: totals, the
//! most-used tag, a trailing 7-day trend and the page-cap read-out. All
//! pure functions; the trend takes `today` as an argument so callers (and
//! tests) control the clock.

use crate::model::Record;
use crate::query;
use chrono::{Duration, Local, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub count: usize,
    pub total_pages: f64,
}

/// Record count and page sum. Records without pages count as 0 pages.
pub fn totals(records: &[Record]) -> Totals {
    Totals {
        count: records.len(),
        total_pages: records.iter().map(|r| r.pages.unwrap_or(0.0)).sum(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// The tag with the highest count. Ties go to the tag seen first in
/// insertion order, which is why this leans on `unique_tags` keeping
/// first-seen order.
pub fn top_tag(records: &[Record]) -> Option<TagCount> {
    let mut best: Option<TagCount> = None;
    for (tag, count) in query::unique_tags(records) {
        let beats = match &best {
            Some(current) => count > current.count,
            None => true,
        };
        if beats {
            best = Some(TagCount { tag, count });
        }
    }
    best
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendBucket {
    pub date: NaiveDate,
    pub label: String,
    pub count: usize,
}

/// Seven calendar-day buckets ending at `today`, oldest first. A record
/// lands in the bucket matching its `date_added` local calendar day;
/// records outside the window are excluded, not clamped.
pub fn trend(records: &[Record], today: NaiveDate) -> Vec<TrendBucket> {
    let mut buckets: Vec<TrendBucket> = (0..7)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            TrendBucket {
                date,
                label: date.format("%b %-d").to_string(),
                count: 0,
            }
        })
        .collect();

    for record in records {
        let day = record.date_added.with_timezone(&Local).date_naive();
        if let Some(bucket) = buckets.iter_mut().find(|b| b.date == day) {
            bucket.count += 1;
        }
    }

    buckets
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CapStatus {
    /// Cap of 0 means no cap is set.
    Disabled,
    Under { remaining: f64 },
    Exceeded { over: f64 },
}

pub fn cap_status(cap: u32, total_pages: f64) -> CapStatus {
    if cap == 0 {
        return CapStatus::Disabled;
    }
    let remaining = f64::from(cap) - total_pages;
    if remaining < 0.0 {
        CapStatus::Exceeded { over: -remaining }
    } else {
        CapStatus::Under { remaining }
    }
}
