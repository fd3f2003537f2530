use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::roster::Roster;

/// Dot totals for one hole, keyed by player name.
pub type HoleScores = HashMap<String, i32>;

/// Authoritative per-hole, per-player dot totals for one round.
///
/// This is the only source of truth for scores. Assignment bookkeeping
/// (who currently holds which dot) lives with the round engine and is
/// reconstructible; the sheet is what the scoreboard reads.
///
/// Hole indices are 0-based; display is 1-based. Per-hole values are
/// not clamped at zero: penalties can take a player negative on a
/// hole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    holes: Vec<HoleScores>,
}

/// Errors from sheet operations.
///
/// `InvalidConfiguration` is surfaced to the settings collaborator and
/// leaves the round unchanged. The other two mean a caller passed a
/// stale hole index or player name; callers on UI paths log and drop
/// those rather than recover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    InvalidConfiguration(String),
    HoleOutOfRange { hole: usize, holes: usize },
    UnknownPlayer { hole: usize, player: String },
}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(m) => write!(f, "{m}"),
            Self::HoleOutOfRange { hole, holes } => {
                write!(f, "hole index {hole} out of range for a {holes}-hole round")
            },
            Self::UnknownPlayer { hole, player } => {
                write!(f, "player {player:?} has no entry on hole {hole}")
            },
        }
    }
}

impl std::error::Error for ScoreError {}

fn check_config(holes: usize, roster: &Roster) -> Result<(), ScoreError> {
    if holes == 0 {
        return Err(ScoreError::InvalidConfiguration(
            "a round needs at least one hole".to_string(),
        ));
    }
    if roster.is_empty() {
        return Err(ScoreError::InvalidConfiguration(
            "a round needs at least one player".to_string(),
        ));
    }
    Ok(())
}

fn zeroed_hole(roster: &Roster) -> HoleScores {
    roster.iter().map(|name| (name.to_string(), 0)).collect()
}

impl ScoreSheet {
    /// An empty sheet: no holes, no round in progress.
    pub fn empty() -> Self {
        Self { holes: Vec::new() }
    }

    /// Fresh sheet for a new round: `holes` entries, every player at 0.
    ///
    /// Replaces any prior state unconditionally; use [`reconciled`] to
    /// keep recorded scores across a settings edit.
    ///
    /// [`reconciled`]: ScoreSheet::reconciled
    pub fn new(holes: usize, roster: &Roster) -> Result<Self, ScoreError> {
        check_config(holes, roster)?;
        Ok(Self {
            holes: (0..holes).map(|_| zeroed_hole(roster)).collect(),
        })
    }

    /// Rebuild the sheet for an edited hole count and roster without
    /// losing recorded progress.
    ///
    /// Players present in both rosters keep their values on holes that
    /// exist in both; added players and added holes start at 0; removed
    /// players' entries are dropped.
    pub fn reconciled(&self, holes: usize, roster: &Roster) -> Result<Self, ScoreError> {
        check_config(holes, roster)?;
        let rebuilt = (0..holes)
            .map(|i| match self.holes.get(i) {
                Some(prev) => roster
                    .iter()
                    .map(|name| (name.to_string(), prev.get(name).copied().unwrap_or(0)))
                    .collect(),
                None => zeroed_hole(roster),
            })
            .collect();
        Ok(Self { holes: rebuilt })
    }

    /// Add `delta` to one player's total on one hole, returning the new
    /// value. Not clamped: negative values are legitimate.
    pub fn apply(&mut self, hole: usize, player: &str, delta: i32) -> Result<i32, ScoreError> {
        let holes = self.holes.len();
        let scores = self
            .holes
            .get_mut(hole)
            .ok_or(ScoreError::HoleOutOfRange { hole, holes })?;
        let value = scores
            .get_mut(player)
            .ok_or_else(|| ScoreError::UnknownPlayer {
                hole,
                player: player.to_string(),
            })?;
        *value += delta;
        Ok(*value)
    }

    /// Sum each rostered player's dots across all holes. Holes where a
    /// player has no entry contribute 0.
    pub fn totals(&self, roster: &Roster) -> HashMap<String, i32> {
        roster
            .iter()
            .map(|name| {
                let total = self
                    .holes
                    .iter()
                    .map(|hole| hole.get(name).copied().unwrap_or(0))
                    .sum();
                (name.to_string(), total)
            })
            .collect()
    }

    /// Discard all hole data (the round is over).
    pub fn reset(&mut self) {
        self.holes.clear();
    }

    pub fn hole(&self, hole: usize) -> Option<&HoleScores> {
        self.holes.get(hole)
    }

    pub fn holes(&self) -> &[HoleScores] {
        &self.holes
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }
}
