//! Counting groups of `k` adjacent free seats.
//!
//! A group never spans an aisle or a row boundary: each row is split into
//! its aisle-delimited segments, and each segment into maximal runs of
//! unreserved seats. The [`GroupingPolicy`] decides how many groups a run
//! of `r` free seats holds.

use crate::{
    cabin::CabinMap,
    error::{ReservationError, Result},
    seat::Marker,
};
use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GroupingPolicy {
    /// Every window of `k` seats inside a run counts: `r - k + 1`
    #[default]
    SlidingWindow,
    /// Non-overlapping windows taken from the start of the run: `r / k`
    Partition,
}

impl GroupingPolicy {
    pub fn groups_in_run(self, run: usize, k: usize) -> usize {
        if k == 0 || run < k {
            return 0;
        }
        match self {
            GroupingPolicy::SlidingWindow => run - k + 1,
            GroupingPolicy::Partition => run / k,
        }
    }
}

impl fmt::Display for GroupingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupingPolicy::SlidingWindow => write!(f, "sliding-window"),
            GroupingPolicy::Partition => write!(f, "partition"),
        }
    }
}

/// Lengths of the maximal runs of unreserved seats in a segment.
pub fn free_runs(segment: &[Marker]) -> impl Iterator<Item = usize> + '_ {
    segment
        .split(|m| !m.is_free())
        .map(<[Marker]>::len)
        .filter(|&len| len > 0)
}

pub fn count_segment(segment: &[Marker], k: usize, policy: GroupingPolicy) -> usize {
    free_runs(segment)
        .map(|run| policy.groups_in_run(run, k))
        .sum()
}

pub fn count_row(cabin: &dyn CabinMap, row: usize, k: usize, policy: GroupingPolicy) -> usize {
    cabin
        .row_segments(row)
        .into_iter()
        .map(|segment| count_segment(segment, k, policy))
        .sum()
}

/// Total number of groups of `k` adjacent free seats in the cabin.
pub fn count_groups(cabin: &dyn CabinMap, k: usize, policy: GroupingPolicy) -> Result<usize> {
    if k == 0 {
        return Err(ReservationError::InvalidConfiguration(
            "grouping size must be at least 1".to_string(),
        ));
    }
    Ok((0..cabin.rows())
        .map(|row| count_row(cabin, row, k, policy))
        .sum())
}

/// Longest run of free seats anywhere in the cabin.
pub fn widest_free_run(cabin: &dyn CabinMap) -> usize {
    (0..cabin.rows())
        .flat_map(|row| {
            cabin
                .row_segments(row)
                .into_iter()
                .flat_map(free_runs)
                .max()
        })
        .max()
        .unwrap_or(0)
}
