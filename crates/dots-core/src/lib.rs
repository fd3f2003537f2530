pub mod keeper;
pub mod roster;
pub mod round;
pub mod scores;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::keeper::{Achievement, Adjustment, ScoreEvent, Scorekeeper};
    use crate::round::{RoundConfig, RoundPhase};
    use crate::roster::Roster;

    /// Create a roster of `n` test players named `Player1`..`PlayerN`.
    pub fn make_roster(n: usize) -> Roster {
        Roster::from_names((1..=n).map(|i| format!("Player{i}")))
            .expect("generated names are unique and non-blank")
    }

    /// Create a round configuration with `holes` holes and `players`
    /// test players.
    pub fn round_config(holes: usize, players: usize) -> RoundConfig {
        RoundConfig {
            holes,
            roster: make_roster(players),
        }
    }

    fn total_of(keeper: &dyn Scorekeeper, player: &str) -> i32 {
        keeper
            .scoreboard()
            .iter()
            .find(|t| t.player == player)
            .map(|t| t.dots)
            .unwrap_or_else(|| panic!("{player} missing from scoreboard"))
    }

    // ================================================================
    // Scorekeeper Contract Tests
    // ================================================================
    // A generic suite every Scorekeeper implementation must pass.
    // Implementing crates call these from their own #[cfg(test)]
    // modules with a concrete instance.

    /// start_round() must produce a zeroed sheet of the configured
    /// shape and move the session to the active phase.
    pub fn contract_start_round_zeroes_sheet(keeper: &mut dyn Scorekeeper) {
        keeper
            .start_round(&round_config(3, 2))
            .expect("valid config must start");
        assert_eq!(keeper.phase(), RoundPhase::Active);
        assert_eq!(keeper.sheet().len(), 3);
        for hole in keeper.sheet().holes() {
            assert_eq!(hole.len(), 2, "every hole must list every player");
            assert!(
                hole.values().all(|&dots| dots == 0),
                "a fresh round must start at zero"
            );
        }
    }

    /// update_round() must keep recorded scores for retained players,
    /// drop removed players, and zero added players and holes.
    pub fn contract_update_round_preserves_totals(keeper: &mut dyn Scorekeeper) {
        keeper.start_round(&round_config(2, 2)).unwrap();
        keeper.change_score(0, "Player1", 1);
        keeper.change_score(0, "Player2", 2);

        let roster = Roster::from_names(["Player1", "Player3"]).unwrap();
        keeper
            .update_round(&RoundConfig { holes: 3, roster })
            .expect("valid config must reconcile");

        assert_eq!(keeper.sheet().len(), 3);
        let hole = keeper.sheet().hole(0).unwrap();
        assert_eq!(hole.get("Player1"), Some(&1), "retained player keeps dots");
        assert_eq!(hole.get("Player3"), Some(&0), "added player starts at zero");
        assert!(
            !hole.contains_key("Player2"),
            "removed player must be dropped"
        );
        assert!(
            keeper
                .sheet()
                .hole(2)
                .unwrap()
                .values()
                .all(|&dots| dots == 0),
            "added hole starts at zero"
        );
    }

    /// Re-awarding an achievement must move exactly one dot from the
    /// previous holder to the new one.
    pub fn contract_award_reassignment_nets_one(keeper: &mut dyn Scorekeeper) {
        keeper.start_round(&round_config(2, 2)).unwrap();
        keeper.award_achievement(0, Achievement::Drive, "Player1");
        keeper.award_achievement(0, Achievement::Drive, "Player2");
        assert_eq!(total_of(keeper, "Player1"), 0, "previous holder releases the dot");
        assert_eq!(total_of(keeper, "Player2"), 1, "new holder gains the dot");
    }

    /// Awarding the same achievement to its current holder twice must
    /// not double-count.
    pub fn contract_award_idempotent(keeper: &mut dyn Scorekeeper) {
        keeper.start_round(&round_config(2, 2)).unwrap();
        keeper.award_achievement(0, Achievement::Drive, "Player1");
        keeper.award_achievement(0, Achievement::Drive, "Player1");
        assert_eq!(total_of(keeper, "Player1"), 1, "re-picking must be a no-op");
    }

    /// Toggling an adjustment twice must return the player's total to
    /// its starting value.
    pub fn contract_toggle_roundtrips(keeper: &mut dyn Scorekeeper) {
        keeper.start_round(&round_config(2, 2)).unwrap();
        keeper.toggle_adjustment(0, Adjustment::Bonus, "Player1");
        assert_eq!(total_of(keeper, "Player1"), 1);
        keeper.toggle_adjustment(0, Adjustment::Bonus, "Player1");
        assert_eq!(total_of(keeper, "Player1"), 0, "bonus toggle must round-trip");

        keeper.toggle_adjustment(0, Adjustment::Penalty, "Player1");
        assert_eq!(total_of(keeper, "Player1"), -1);
        keeper.toggle_adjustment(0, Adjustment::Penalty, "Player1");
        assert_eq!(total_of(keeper, "Player1"), 0, "penalty toggle must round-trip");
    }

    /// scoreboard() must sort by dots descending, ties by name
    /// ascending.
    pub fn contract_scoreboard_sorted(keeper: &mut dyn Scorekeeper) {
        keeper.start_round(&round_config(1, 3)).unwrap();
        keeper.change_score(0, "Player2", 2);
        keeper.change_score(0, "Player1", 2);
        keeper.change_score(0, "Player3", 1);
        let board = keeper.scoreboard();
        let order: Vec<&str> = board.iter().map(|t| t.player.as_str()).collect();
        assert_eq!(
            order,
            ["Player1", "Player2", "Player3"],
            "ties must break by name ascending"
        );
    }

    /// finish_round() must discard the sheet, return to setup, and
    /// announce the finish.
    pub fn contract_finish_round_clears(keeper: &mut dyn Scorekeeper) {
        keeper.start_round(&round_config(2, 2)).unwrap();
        keeper.change_score(0, "Player1", 3);
        let events = keeper.finish_round();
        assert!(
            events.contains(&ScoreEvent::RoundFinished),
            "finish must emit RoundFinished"
        );
        assert!(keeper.sheet().is_empty(), "finish must discard hole data");
        assert_eq!(keeper.phase(), RoundPhase::Setup);
    }
}
