//! Trust score calculation.
//!
//! The score is a pure recomputation from the accumulated counters, never an
//! incremental nudge, so that any stored value can be audited against the
//! counters it was derived from.

/// Swap activity stops contributing to the score past this many completions.
pub const ACTIVITY_CAP: i64 = 20;

/// Computes a 0..=100 trust score.
///
/// The average rating contributes up to 70 points, swap activity (shared +
/// received, capped at [`ACTIVITY_CAP`]) up to 30.
pub fn trust_score(rating_sum: i64, rating_count: i64, items_shared: i64, items_received: i64) -> i32 {
    let avg_rating = if rating_count > 0 {
        rating_sum as f64 / rating_count as f64
    } else {
        0.0
    };
    let rating_part = avg_rating / 5.0 * 70.0;

    let swap_count = items_shared + items_received;
    let activity_part = swap_count.min(ACTIVITY_CAP) as f64 / ACTIVITY_CAP as f64 * 30.0;

    (rating_part + activity_part).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_five_star_rating_no_activity() {
        assert_eq!(trust_score(5, 1, 0, 0), 70);
    }

    #[test]
    fn fresh_user_scores_zero() {
        assert_eq!(trust_score(0, 0, 0, 0), 0);
    }

    #[test]
    fn average_four_with_capped_activity() {
        // avg 4.0 -> 56 points, 20 swaps saturate the activity part at 30
        assert_eq!(trust_score(8, 2, 10, 10), 86);
    }

    #[test]
    fn activity_caps_at_twenty_swaps() {
        assert_eq!(
            trust_score(0, 0, 500, 500),
            trust_score(0, 0, ACTIVITY_CAP, 0)
        );
    }

    #[test]
    fn perfect_score() {
        assert_eq!(trust_score(25, 5, 15, 10), 100);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let a = trust_score(13, 4, 3, 2);
        let b = trust_score(13, 4, 3, 2);
        assert_eq!(a, b);
    }
}
