use std::collections::BTreeMap;
use super::rng::{shuffle, SeededRandom};
use super::types::StatsMap;

/// Picks `count` players from `candidates`, least played first.
///
/// Within one played-count bucket, players who rested more recently come
/// first so rests stay spread out; players who never rested come last.
/// Players sharing the same gap are shuffled with `rng`. Buckets are visited
/// in ascending order and the last one may be only partially used. Buckets
/// that are never reached draw nothing from `rng`.
///
/// Every candidate must have an entry in `stats`.
pub fn pick_by_least_played(
    candidates: &[String],
    count: usize,
    stats: &StatsMap,
    rng: &mut SeededRandom,
    round_index: usize,
) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }

    let played_of = |player: &String| stats.get(player).map(|s| s.played).unwrap_or(0);
    let gap_of = |player: &String| {
        stats
            .get(player)
            .map(|s| s.rest_gap(round_index))
            .unwrap_or(usize::MAX)
    };

    // played count -> players, in candidate order
    let mut buckets: BTreeMap<usize, Vec<&String>> = BTreeMap::new();
    for player in candidates {
        buckets.entry(played_of(player)).or_default().push(player);
    }

    let mut selected = Vec::with_capacity(count);
    for mut bucket in buckets.into_values() {
        if selected.len() == count {
            break;
        }

        bucket.sort_by_key(|p| gap_of(*p)); // stable

        let mut ordered: Vec<&String> = Vec::with_capacity(bucket.len());
        for tie in bucket.chunk_by(|a, b| gap_of(*a) == gap_of(*b)) {
            ordered.extend(shuffle(tie, rng));
        }

        let remaining = count - selected.len();
        selected.extend(ordered.into_iter().take(remaining).cloned());
    }

    selected
}
