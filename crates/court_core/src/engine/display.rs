//! Display-score derivation.
//!
//! Maps internal point counters to the labels a scoreboard shows. Pure
//! functions with no state, queried by the presentation layer and by
//! history rendering.

use crate::models::TeamState;

/// Ordered point labels for the pre-deuce portion of a game.
pub const TENNIS_POINTS: [&str; 4] = ["0", "15", "30", "40"];

/// Label for a side holding `points` against an opponent holding
/// `opponent_points`.
///
/// Once both sides have reached 40 the game is scored relative to the
/// opponent: level is "Deuce", one ahead is "Advantage", one behind reads
/// "40". Total over every reachable pair.
pub fn display_score(points: u16, opponent_points: u16) -> &'static str {
    if points >= 3 && opponent_points >= 3 {
        if points == opponent_points {
            return "Deuce";
        }
        if points > opponent_points {
            return "Advantage";
        }
        return "40";
    }

    TENNIS_POINTS[points.min(3) as usize]
}

/// "{sets}-{games}-{label}" summary line, as rendered per team in the
/// match history view.
pub fn score_summary(team: &TeamState, opponent: &TeamState) -> String {
    format!("{}-{}-{}", team.sets, team.games, display_score(team.points, opponent.points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pre_deuce_labels() {
        assert_eq!(display_score(0, 0), "0");
        assert_eq!(display_score(1, 0), "15");
        assert_eq!(display_score(2, 1), "30");
        assert_eq!(display_score(1, 2), "15");
        assert_eq!(display_score(3, 0), "40");
        assert_eq!(display_score(3, 2), "40");
    }

    #[test]
    fn test_deuce_territory_labels() {
        assert_eq!(display_score(3, 3), "Deuce");
        assert_eq!(display_score(5, 5), "Deuce");
        assert_eq!(display_score(4, 3), "Advantage");
        assert_eq!(display_score(3, 4), "40");
        assert_eq!(display_score(6, 5), "Advantage");
        assert_eq!(display_score(5, 6), "40");
    }

    #[test]
    fn test_score_summary_line() {
        let mut home = TeamState::new("Home", "#FF0000");
        let mut away = TeamState::new("Away", "#0000FF");
        home.sets = 1;
        home.games = 3;
        home.points = 4;
        away.points = 3;

        assert_eq!(score_summary(&home, &away), "1-3-Advantage");
        assert_eq!(score_summary(&away, &home), "0-0-40");
    }
}

#[cfg(all(test, feature = "proptest"))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the derivation is total and only ever produces a known
        /// label.
        #[test]
        fn prop_labels_total(points in 0u16..500, opponent in 0u16..500) {
            let label = display_score(points, opponent);
            prop_assert!(["0", "15", "30", "40", "Deuce", "Advantage"].contains(&label));
        }

        /// Property: in deuce territory the trailing side always reads "40".
        #[test]
        fn prop_trailing_side_reads_forty(points in 3u16..300, lead in 1u16..10) {
            prop_assert_eq!(display_score(points, points + lead), "40");
        }

        /// Property: level scores at or above 40 always read "Deuce".
        #[test]
        fn prop_level_reads_deuce(points in 3u16..300) {
            prop_assert_eq!(display_score(points, points), "Deuce");
        }
    }
}
