//! This module decides which report pages exist.
//!
//! Pitchers are visited in the order they first appear in the data and each
//! pitcher gets one page per batter side that has at least one event, right
//! side first. No bearing filter is applied here: a group whose events all
//! fall outside the plotted range still gets its (empty) page.

use crate::events::{BattedBall, BatterSide};
use std::collections::HashSet;

/// The events behind one report page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGroup<'a> {
    pub pitcher: &'a str,
    pub side: BatterSide,
    pub events: Vec<&'a BattedBall>,
}

/// Distinct pitcher names in order of first appearance. Rows without a
/// pitcher are ignored.
pub fn pitchers_in_order(events: &[BattedBall]) -> Vec<&str> {
    let mut seen = HashSet::new();
    events
        .iter()
        .filter_map(|e| e.pitcher.as_deref())
        .filter(|name| seen.insert(*name))
        .collect()
}

/// The events of `pitcher` faced by batters on `side`.
pub fn events_for<'a>(
    events: &'a [BattedBall],
    pitcher: &str,
    side: BatterSide,
) -> Vec<&'a BattedBall> {
    events
        .iter()
        .filter(|e| e.pitcher.as_deref() == Some(pitcher) && e.batter_side == Some(side))
        .collect()
}

/// Every (pitcher, side) pair that has events, in page order.
pub fn page_groups(events: &[BattedBall]) -> Vec<PageGroup<'_>> {
    let mut groups = Vec::new();
    for pitcher in pitchers_in_order(events) {
        for side in BatterSide::PAGE_ORDER {
            let subset = events_for(events, pitcher, side);
            if subset.is_empty() {
                log::debug!("no events for {} vs {} hitters, skipping", pitcher, side.label());
                continue;
            }
            groups.push(PageGroup {
                pitcher,
                side,
                events: subset,
            });
        }
    }
    groups
}
