//! Ranking helpers

use crate::types::Rank;

/// Default ranking: input order is finish order
pub fn positional_ranks(team_count: usize) -> Vec<Rank> {
    (0..team_count as Rank).collect()
}

/// Convert per-team scores (higher is better) into competition ranks.
///
/// A team's rank is the number of teams that scored strictly more, so equal
/// scores tie and the following rank is skipped: `[10, 30, 30, 5]` becomes
/// `[2, 0, 0, 3]`.
pub fn ranks_from_scores(scores: &[f64]) -> Vec<Rank> {
    scores
        .iter()
        .map(|score| scores.iter().filter(|other| *other > score).count() as Rank)
        .collect()
}

/// Count how many teams share each team's rank
pub(crate) fn tie_counts(ranks: &[Rank]) -> Vec<usize> {
    ranks
        .iter()
        .map(|rank| ranks.iter().filter(|other| *other == rank).count())
        .collect()
}
