use std::collections::HashMap;

use dots_core::keeper::{Adjustment, PlayerTotal};
use dots_core::scores::HoleScores;

/// Dots a hole gives out through its three achievements.
pub const DOTS_PER_HOLE: i32 = 3;

/// Dots awarded for holding any achievement.
pub const ACHIEVEMENT_DOTS: i32 = 1;

/// Dots applied when an adjustment mark is toggled on.
pub fn adjustment_dots(kind: Adjustment) -> i32 {
    match kind {
        Adjustment::Bonus => 1,
        Adjustment::Penalty => -1,
    }
}

/// Sum of every player's dots on one hole.
pub fn total_dots(hole: &HoleScores) -> i32 {
    hole.values().sum()
}

/// A hole counts as complete once its dot sum reaches the three
/// achievement dots.
///
/// This is a sum threshold, not a check that all three slots are
/// filled: bonuses and penalties can move a hole across the line
/// either way.
pub fn is_hole_complete(hole: &HoleScores) -> bool {
    total_dots(hole) >= DOTS_PER_HOLE
}

/// Order totals for the scoreboard: most dots first, ties broken by
/// name ascending.
pub fn rank_players(totals: &HashMap<String, i32>) -> Vec<PlayerTotal> {
    let mut board: Vec<PlayerTotal> = totals
        .iter()
        .map(|(player, &dots)| PlayerTotal {
            player: player.clone(),
            dots,
        })
        .collect();
    board.sort_by(|a, b| b.dots.cmp(&a.dots).then_with(|| a.player.cmp(&b.player)));
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole(entries: &[(&str, i32)]) -> HoleScores {
        entries
            .iter()
            .map(|(name, dots)| (name.to_string(), *dots))
            .collect()
    }

    #[test]
    fn empty_hole_is_incomplete() {
        assert_eq!(total_dots(&hole(&[])), 0);
        assert!(!is_hole_complete(&hole(&[])));
    }

    #[test]
    fn three_dots_complete_a_hole() {
        assert!(!is_hole_complete(&hole(&[("A", 2)])));
        assert!(is_hole_complete(&hole(&[("A", 2), ("B", 1)])));
    }

    #[test]
    fn penalties_count_against_completeness() {
        // All three achievements out, but a penalty pulls the sum back
        assert!(!is_hole_complete(&hole(&[("A", 3), ("B", -1)])));
    }

    #[test]
    fn bonuses_can_complete_without_all_achievements() {
        // Two achievements plus a V dot crosses the threshold even
        // though one slot is still open
        assert!(is_hole_complete(&hole(&[("A", 3), ("B", 0)])));
    }

    #[test]
    fn adjustment_dots_signs() {
        assert_eq!(adjustment_dots(Adjustment::Bonus), 1);
        assert_eq!(adjustment_dots(Adjustment::Penalty), -1);
    }

    #[test]
    fn rank_orders_by_dots_then_name() {
        let totals = HashMap::from([
            ("Cara".to_string(), 4),
            ("Alice".to_string(), 2),
            ("Bob".to_string(), 4),
        ]);
        let board = rank_players(&totals);
        let order: Vec<&str> = board.iter().map(|t| t.player.as_str()).collect();
        assert_eq!(order, ["Bob", "Cara", "Alice"]);
        assert_eq!(board[0].dots, 4);
        assert_eq!(board[2].dots, 2);
    }

    #[test]
    fn rank_handles_negative_totals() {
        let totals = HashMap::from([("A".to_string(), -2), ("B".to_string(), 0)]);
        let board = rank_players(&totals);
        assert_eq!(board[0].player, "B");
        assert_eq!(board[1].dots, -2);
    }
}
