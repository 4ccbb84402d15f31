use std::collections::HashMap;

use crate::config::SortMode;
use crate::table::Value;

use super::types::Span;

/// One distinct value of a column slice, with its count and the index of the
/// row where it first appeared (the deterministic tie-breaker).
#[derive(Debug, Clone)]
pub(super) struct CategoryTally {
    pub value: Value,
    pub count: usize,
    pub first_seen: usize,
}

/// Counts distinct values in appearance order.
pub(super) fn tally<'a>(values: impl Iterator<Item = &'a Value>) -> Vec<CategoryTally> {
    let mut index: HashMap<Value, usize> = HashMap::new();
    let mut tallies: Vec<CategoryTally> = Vec::new();
    for (row, value) in values.enumerate() {
        match index.get(value) {
            Some(&slot) => tallies[slot].count += 1,
            None => {
                index.insert(value.clone(), tallies.len());
                tallies.push(CategoryTally {
                    value: value.clone(),
                    count: 1,
                    first_seen: row,
                });
            }
        }
    }
    tallies
}

/// Master ordering of the outer categories: descending by count with
/// first-appearance tie-break, or ascending by value.
pub(super) fn order_master(tallies: &mut [CategoryTally], sort: SortMode) {
    match sort {
        SortMode::ByFrequency => tallies.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        }),
        SortMode::Alphabetical => tallies.sort_by(|a, b| a.value.cmp(&b.value)),
    }
}

/// Orders one band's inner values by the master ranking, not their own
/// counts. Values that never occur in the outer column rank after every
/// master category, ordered by their first appearance in the inner column.
pub(super) fn order_band(
    tallies: &mut [CategoryTally],
    sort: SortMode,
    master_rank: &HashMap<Value, usize>,
    inner_first_seen: &HashMap<Value, usize>,
) {
    match sort {
        SortMode::ByFrequency => {
            let rank = |tally: &CategoryTally| -> (usize, usize) {
                match master_rank.get(&tally.value) {
                    Some(&rank) => (0, rank),
                    None => (1, inner_first_seen.get(&tally.value).copied().unwrap_or(usize::MAX)),
                }
            };
            tallies.sort_by(|a, b| rank(a).cmp(&rank(b)));
        }
        SortMode::Alphabetical => tallies.sort_by(|a, b| a.value.cmp(&b.value)),
    }
}

/// Allocates gap-inset spans over one axis: each category starts at the
/// running sum of its predecessors, shifted in by half a gap, and gives up a
/// full gap of extent. Slivers thinner than the gap collapse to zero.
pub(super) fn allocate_spans(percentages: &[f32], gap: f32) -> Vec<Span> {
    let mut spans = Vec::with_capacity(percentages.len());
    let mut cumulative = 0.0_f32;
    for &percentage in percentages {
        spans.push(Span::new(cumulative + gap / 2.0, (percentage - gap).max(0.0)));
        cumulative += percentage;
    }
    spans
}

/// Percentage of `count` over `total`, in 0..=100.
pub(super) fn percent_of(count: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    count as f32 / total as f32 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(tokens: &[&str]) -> Vec<Value> {
        tokens.iter().map(|t| Value::from(*t)).collect()
    }

    #[test]
    fn tally_counts_in_appearance_order() {
        let vals = values(&["b", "a", "b", "c", "a", "b"]);
        let tallies = tally(vals.iter());
        assert_eq!(tallies.len(), 3);
        assert_eq!(tallies[0].value, Value::from("b"));
        assert_eq!(tallies[0].count, 3);
        assert_eq!(tallies[1].first_seen, 1);
    }

    #[test]
    fn master_order_breaks_count_ties_by_first_appearance() {
        let vals = values(&["x", "y", "y", "x", "z"]);
        let mut tallies = tally(vals.iter());
        order_master(&mut tallies, SortMode::ByFrequency);
        // x and y both count 2; x appeared first.
        assert_eq!(tallies[0].value, Value::from("x"));
        assert_eq!(tallies[1].value, Value::from("y"));
        assert_eq!(tallies[2].value, Value::from("z"));
    }

    #[test]
    fn band_order_uses_master_rank_not_own_count() {
        // Band counts favor "rare", master rank favors "common".
        let band_vals = values(&["rare", "rare", "common"]);
        let mut tallies = tally(band_vals.iter());
        let mut master_rank = HashMap::new();
        master_rank.insert(Value::from("common"), 0);
        master_rank.insert(Value::from("rare"), 1);
        order_band(&mut tallies, SortMode::ByFrequency, &master_rank, &HashMap::new());
        assert_eq!(tallies[0].value, Value::from("common"));
    }

    #[test]
    fn band_order_puts_unknown_values_last_by_inner_first_seen() {
        let band_vals = values(&["ghost2", "known", "ghost1"]);
        let mut tallies = tally(band_vals.iter());
        let mut master_rank = HashMap::new();
        master_rank.insert(Value::from("known"), 0);
        let mut first_seen = HashMap::new();
        first_seen.insert(Value::from("ghost1"), 5);
        first_seen.insert(Value::from("ghost2"), 9);
        order_band(&mut tallies, SortMode::ByFrequency, &master_rank, &first_seen);
        assert_eq!(tallies[0].value, Value::from("known"));
        assert_eq!(tallies[1].value, Value::from("ghost1"));
        assert_eq!(tallies[2].value, Value::from("ghost2"));
    }

    #[test]
    fn allocate_spans_insets_by_half_a_gap() {
        let spans = allocate_spans(&[60.0, 40.0], 1.0);
        assert!((spans[0].offset - 0.5).abs() < 1e-4);
        assert!((spans[0].extent - 59.0).abs() < 1e-4);
        assert!((spans[1].offset - 60.5).abs() < 1e-4);
        assert!((spans[1].extent - 39.0).abs() < 1e-4);
        assert!(!spans[0].overlaps(&spans[1]));
    }

    #[test]
    fn allocate_spans_collapses_slivers_instead_of_inverting() {
        let spans = allocate_spans(&[99.5, 0.5], 1.0);
        assert!(spans[1].extent.abs() < 1e-6);
    }
}
