pub mod resolver;
pub mod scoring;

use dots_core::keeper::{Achievement, Adjustment, PlayerTotal, ScoreEvent, Scorekeeper};
use dots_core::round::{RoundConfig, RoundPhase};
use dots_core::roster::Roster;
use dots_core::scores::{ScoreError, ScoreSheet};

use resolver::{HoleAssignments, ScoreDelta};
use scoring::{is_hole_complete, rank_players, total_dots};

/// One running round of Dots.
///
/// Composes the authoritative score sheet with one assignment record
/// per hole and a navigation cursor. UI collaborators drive it through
/// the [`Scorekeeper`] trait; the cursor helpers are for the slide
/// navigation, which treats position `sheet.len()` (one past the last
/// hole) as the scoreboard.
#[derive(Debug, Clone, Default)]
pub struct DotsRound {
    sheet: ScoreSheet,
    assignments: Vec<HoleAssignments>,
    roster: Roster,
    phase: RoundPhase,
    current_hole: usize,
}

impl DotsRound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster of the round in progress (kept after a finish so the
    /// settings form can prefill the next round).
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Whether the hole's dot sum has reached the completeness
    /// threshold. Out-of-range holes are simply not complete.
    pub fn is_complete(&self, hole: usize) -> bool {
        self.sheet.hole(hole).is_some_and(is_hole_complete)
    }

    /// Assignment record for a hole (which player holds which dot),
    /// for rendering picker state.
    pub fn assignments(&self, hole: usize) -> Option<&HoleAssignments> {
        self.assignments.get(hole)
    }

    // ----- Hole navigation -----

    pub fn current_hole(&self) -> usize {
        self.current_hole
    }

    /// Jump to a hole, clamped to the valid range. Position
    /// `sheet.len()` is the scoreboard slide.
    pub fn go_to_hole(&mut self, hole: usize) -> usize {
        self.current_hole = hole.min(self.sheet.len());
        self.current_hole
    }

    pub fn next_hole(&mut self) -> usize {
        self.go_to_hole(self.current_hole.saturating_add(1))
    }

    pub fn prev_hole(&mut self) -> usize {
        self.go_to_hole(self.current_hole.saturating_sub(1))
    }

    // ----- Internals -----

    /// Confirm the hole exists and the player has an entry on it.
    /// Logs and reports false for stale indices or names. The UI only
    /// ever passes values drawn from the current sheet, so these are
    /// contract violations to drop, not errors to recover.
    fn valid_target(&self, hole: usize, player: &str) -> bool {
        let Some(scores) = self.sheet.hole(hole) else {
            tracing::warn!(hole, player, "Dropped pick for out-of-range hole");
            return false;
        };
        if !scores.contains_key(player) {
            tracing::warn!(hole, player, "Dropped pick for player not on this round");
            return false;
        }
        true
    }

    /// Apply resolver deltas through the sheet, emitting a
    /// `ScoreChanged` per player and `HoleCompleted` when the hole
    /// first crosses the threshold.
    fn apply_deltas(&mut self, hole: usize, deltas: Vec<ScoreDelta>) -> Vec<ScoreEvent> {
        let was_complete = self.is_complete(hole);
        let mut events = Vec::new();
        for delta in deltas {
            match self.sheet.apply(hole, &delta.player, delta.dots) {
                Ok(dots) => events.push(ScoreEvent::ScoreChanged {
                    hole,
                    player: delta.player,
                    dots,
                }),
                Err(e) => {
                    // Unreachable once valid_target passed; drop
                    // rather than panic
                    tracing::warn!(hole, player = %delta.player, error = %e, "Dropped score delta");
                },
            }
        }
        if !was_complete && self.is_complete(hole) {
            events.push(ScoreEvent::HoleCompleted { hole });
        }
        events
    }
}

impl Scorekeeper for DotsRound {
    fn start_round(&mut self, config: &RoundConfig) -> Result<(), ScoreError> {
        let sheet = ScoreSheet::new(config.holes, &config.roster)?;
        self.sheet = sheet;
        self.assignments = vec![HoleAssignments::new(); config.holes];
        self.roster = config.roster.clone();
        self.phase = RoundPhase::Active;
        self.current_hole = 0;
        Ok(())
    }

    fn update_round(&mut self, config: &RoundConfig) -> Result<(), ScoreError> {
        // Reconcile first: on failure the round is left untouched.
        let sheet = self.sheet.reconciled(config.holes, &config.roster)?;
        self.sheet = sheet;
        self.roster = config.roster.clone();
        self.assignments
            .resize_with(config.holes, HoleAssignments::new);
        for (hole, record) in self.assignments.iter_mut().enumerate() {
            record.retain_players(&self.roster);
            // A hole whose dots all went away must not keep stale
            // picker state
            if self.sheet.hole(hole).is_some_and(|h| total_dots(h) == 0) {
                record.clear();
            }
        }
        self.phase = RoundPhase::Active;
        self.current_hole = self.current_hole.min(self.sheet.len());
        Ok(())
    }

    fn finish_round(&mut self) -> Vec<ScoreEvent> {
        self.sheet.reset();
        self.assignments.clear();
        self.phase = RoundPhase::Setup;
        self.current_hole = 0;
        vec![ScoreEvent::RoundFinished]
    }

    fn award_achievement(
        &mut self,
        hole: usize,
        kind: Achievement,
        player: &str,
    ) -> Vec<ScoreEvent> {
        if !self.valid_target(hole, player) {
            return Vec::new();
        }
        let deltas = self.assignments[hole].assign(kind, player);
        self.apply_deltas(hole, deltas)
    }

    fn toggle_adjustment(
        &mut self,
        hole: usize,
        kind: Adjustment,
        player: &str,
    ) -> Vec<ScoreEvent> {
        if !self.valid_target(hole, player) {
            return Vec::new();
        }
        let deltas = self.assignments[hole].toggle(kind, player);
        self.apply_deltas(hole, deltas)
    }

    fn change_score(&mut self, hole: usize, player: &str, delta: i32) -> Vec<ScoreEvent> {
        if !self.valid_target(hole, player) {
            return Vec::new();
        }
        let events = self.apply_deltas(
            hole,
            vec![ScoreDelta {
                player: player.to_string(),
                dots: delta,
            }],
        );
        // Manual edits can zero a hole out entirely; drop its picker
        // state so the next pick starts fresh
        if self.sheet.hole(hole).is_some_and(|h| total_dots(h) == 0) {
            self.assignments[hole].clear();
        }
        events
    }

    fn sheet(&self) -> &ScoreSheet {
        &self.sheet
    }

    fn phase(&self) -> RoundPhase {
        self.phase
    }

    fn scoreboard(&self) -> Vec<PlayerTotal> {
        rank_players(&self.sheet.totals(&self.roster))
    }
}
