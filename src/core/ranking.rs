use std::cmp::Ordering;

use crate::game::GameRecord;

/// Summary order: higher total first, then later start, then higher id.
///
/// Ids are unique, so this is a strict total order.
pub fn summary_order(a: &GameRecord, b: &GameRecord) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.started_at_ms().cmp(&a.started_at_ms()))
        .then_with(|| b.id().cmp(&a.id()))
}

/// Sorts `games` in place into summary order.
pub fn rank(games: &mut [GameRecord]) {
    games.sort_unstable_by(summary_order);
}
