//! Greedy column packing for overlapping timeline events.
//!
//! Events whose time ranges conflict are rendered side-by-side; this module
//! assigns each item the leftmost column whose previous occupant has already
//! ended. First-fit is not optimal interval-graph coloring, but it is
//! deterministic and O(n·k) for k concurrent columns, and k stays in the
//! single digits for realistic schedules.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::item::{ItemId, TimelineItem};

/// Column placement for a single item.
///
/// `total_columns` is the overall column count of the whole call, not of the
/// item's own overlap cluster. Two disjoint clusters therefore share one
/// width divisor; a sparse cluster next to a crowded one renders narrower
/// columns than it strictly needs. Intended behavior, kept for parity with
/// the existing visuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAssignment {
    pub id: ItemId,
    /// Zero-based column index.
    pub column: usize,
    /// Final column count across all packed items, never zero.
    pub total_columns: usize,
}

/// Assign non-overlapping columns to `items`.
///
/// Items are packed in order of ascending start time; ties keep their input
/// order, which makes the assignment deterministic for any input ordering.
/// The result is parallel to `items` and the input is never reordered.
///
/// Total over degenerate input: an empty slice yields an empty result, and
/// zero-duration items are placed like any other (they conflict with any
/// interval covering their instant, and with nothing else).
pub fn pack(items: &[TimelineItem]) -> Vec<ColumnAssignment> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    // Stable sort: equal start times keep input order, the documented
    // tie-break.
    order.sort_by_key(|&idx| items[idx].start);

    // Fold over the sorted items, tracking the end time of the most recently
    // placed item per column. Placements are keyed by item index, never
    // written back into the items themselves.
    let (placements, column_ends) = order.iter().fold(
        (Vec::with_capacity(items.len()), Vec::new()),
        |(mut placements, mut column_ends): (Vec<(usize, usize)>, Vec<DateTime<Local>>), &idx| {
            let item = &items[idx];
            match column_ends.iter().position(|&end| end <= item.start) {
                Some(column) => {
                    column_ends[column] = item.end;
                    placements.push((idx, column));
                }
                None => {
                    placements.push((idx, column_ends.len()));
                    column_ends.push(item.end);
                }
            }
            (placements, column_ends)
        },
    );

    let total_columns = column_ends.len().max(1);
    log::trace!(
        "packed {} items into {} columns",
        items.len(),
        column_ends.len()
    );

    let mut column_by_index = vec![0usize; items.len()];
    for (idx, column) in placements {
        column_by_index[idx] = column;
    }

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| ColumnAssignment {
            id: item.id,
            column: column_by_index[idx],
            total_columns,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone};

    fn at(h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 20, h, m, 0).unwrap()
    }

    fn item(id: u64, start: DateTime<Local>, end: DateTime<Local>) -> TimelineItem {
        TimelineItem::new(ItemId(id), format!("Item {}", id), start, end).unwrap()
    }

    fn columns(assignments: &[ColumnAssignment]) -> Vec<usize> {
        assignments.iter().map(|a| a.column).collect()
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        assert!(pack(&[]).is_empty());
    }

    #[test]
    fn test_single_item_gets_column_zero() {
        let items = vec![item(1, at(10, 0), at(11, 0))];
        let result = pack(&items);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ItemId(1));
        assert_eq!(result[0].column, 0);
        assert_eq!(result[0].total_columns, 1);
    }

    #[test]
    fn test_first_fit_reuses_freed_column() {
        // 10:00-10:30 and 10:15-10:45 conflict; 10:30-11:00 starts exactly
        // when the first ends, so it drops back into column 0.
        let items = vec![
            item(1, at(10, 0), at(10, 30)),
            item(2, at(10, 15), at(10, 45)),
            item(3, at(10, 30), at(11, 0)),
        ];
        let result = pack(&items);

        assert_eq!(columns(&result), vec![0, 1, 0]);
        assert!(result.iter().all(|a| a.total_columns == 2));
    }

    #[test]
    fn test_disjoint_items_share_column_zero() {
        let items = vec![
            item(1, at(9, 0), at(10, 0)),
            item(2, at(10, 0), at(11, 0)),
            item(3, at(12, 0), at(13, 0)),
        ];
        let result = pack(&items);

        assert_eq!(columns(&result), vec![0, 0, 0]);
        assert!(result.iter().all(|a| a.total_columns == 1));
    }

    #[test]
    fn test_three_way_overlap_opens_three_columns() {
        let items = vec![
            item(1, at(10, 0), at(12, 0)),
            item(2, at(10, 30), at(11, 30)),
            item(3, at(11, 0), at(11, 15)),
        ];
        let result = pack(&items);

        assert_eq!(columns(&result), vec![0, 1, 2]);
        assert!(result.iter().all(|a| a.total_columns == 3));
    }

    #[test]
    fn test_total_columns_is_global_not_per_cluster() {
        // Morning cluster needs two columns, the lone afternoon item needs
        // one, but every assignment reports the global count of 2.
        let items = vec![
            item(1, at(9, 0), at(10, 0)),
            item(2, at(9, 30), at(10, 30)),
            item(3, at(14, 0), at(15, 0)),
        ];
        let result = pack(&items);

        assert_eq!(columns(&result), vec![0, 1, 0]);
        assert!(result.iter().all(|a| a.total_columns == 2));
    }

    #[test]
    fn test_unsorted_input_result_stays_parallel_to_input() {
        let items = vec![
            item(2, at(10, 15), at(10, 45)),
            item(1, at(10, 0), at(10, 30)),
        ];
        let result = pack(&items);

        // Item 1 starts earlier so it is packed first and takes column 0,
        // but results come back in input order.
        assert_eq!(result[0].id, ItemId(2));
        assert_eq!(result[0].column, 1);
        assert_eq!(result[1].id, ItemId(1));
        assert_eq!(result[1].column, 0);
    }

    #[test]
    fn test_identical_start_ties_keep_input_order() {
        let items = vec![
            item(10, at(10, 0), at(11, 0)),
            item(20, at(10, 0), at(11, 0)),
            item(30, at(10, 0), at(11, 0)),
        ];
        let result = pack(&items);

        assert_eq!(columns(&result), vec![0, 1, 2]);
    }

    #[test]
    fn test_determinism_on_repeated_calls() {
        let items = vec![
            item(3, at(10, 30), at(11, 0)),
            item(1, at(10, 0), at(10, 30)),
            item(2, at(10, 0), at(10, 45)),
            item(4, at(10, 30), at(10, 30)),
        ];

        assert_eq!(pack(&items), pack(&items));
    }

    #[test]
    fn test_zero_duration_items_are_placed_normally() {
        let items = vec![
            item(1, at(10, 0), at(11, 0)),
            item(2, at(10, 30), at(10, 30)),
            item(3, at(10, 30), at(10, 30)),
        ];
        let result = pack(&items);

        // The point items conflict with the covering interval but not with
        // each other, so both land in column 1.
        assert_eq!(columns(&result), vec![0, 1, 1]);
        assert!(result.iter().all(|a| a.total_columns == 2));
    }

    #[test]
    fn test_all_identical_times_each_get_own_column() {
        let items: Vec<TimelineItem> = (0..5)
            .map(|i| item(i, at(10, 0), at(10, 45)))
            .collect();
        let result = pack(&items);

        assert_eq!(columns(&result), vec![0, 1, 2, 3, 4]);
        assert!(result.iter().all(|a| a.total_columns == 5));
    }

    #[test]
    fn test_no_overlap_within_any_column() {
        let items = vec![
            item(1, at(9, 0), at(10, 30)),
            item(2, at(9, 15), at(9, 45)),
            item(3, at(9, 45), at(11, 0)),
            item(4, at(10, 30), at(12, 0)),
            item(5, at(11, 0), at(11, 30)),
            item(6, at(11, 0), at(11, 5)),
        ];
        let result = pack(&items);

        for (i, a) in result.iter().enumerate() {
            for (j, b) in result.iter().enumerate() {
                if i != j && a.column == b.column {
                    assert!(
                        !items[i].overlaps(&items[j]),
                        "items {:?} and {:?} overlap in column {}",
                        a.id,
                        b.id,
                        a.column
                    );
                }
            }
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let items = vec![
            item(2, at(10, 15), at(10, 45)),
            item(1, at(10, 0), at(10, 30)),
        ];
        let before = items.clone();
        let _ = pack(&items);
        assert_eq!(items, before);
    }
}
