use serde::{Deserialize, Serialize};

use crate::round::{RoundConfig, RoundPhase};
use crate::scores::{ScoreError, ScoreSheet};

/// The three exclusive dots on every hole.
///
/// Each has at most one holder per hole: drive closest to the pin,
/// first within one wingspan of the basket, first putt in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Achievement {
    Drive,
    On,
    In,
}

impl Achievement {
    /// All kinds in picker order.
    pub const ALL: [Achievement; 3] = [Achievement::Drive, Achievement::On, Achievement::In];
}

impl std::fmt::Display for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Drive => write!(f, "drive"),
            Self::On => write!(f, "on"),
            Self::In => write!(f, "in"),
        }
    }
}

/// Bonus ("V dot") and penalty marks.
///
/// Unlike achievements these are not exclusive: any number of players
/// can hold one on the same hole, each toggled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adjustment {
    Bonus,
    Penalty,
}

impl std::fmt::Display for Adjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bonus => write!(f, "bonus"),
            Self::Penalty => write!(f, "penalty"),
        }
    }
}

/// Events emitted by scoring operations (UI reacts: refresh a row,
/// mark a hole thumbnail complete, show the final scoreboard).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreEvent {
    /// One player's dots on one hole changed; `dots` is the new value.
    ScoreChanged {
        hole: usize,
        player: String,
        dots: i32,
    },
    /// The hole's dot sum reached the completeness threshold.
    HoleCompleted { hole: usize },
    /// The round was finished and the sheet discarded.
    RoundFinished,
}

/// Scoreboard entry for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTotal {
    pub player: String,
    pub dots: i32,
}

/// Boundary contract between the scoring core and its UI collaborators
/// (settings modal, hole navigation, round lifecycle).
///
/// The settings collaborator validates against
/// [`RoundLimits`](crate::round::RoundLimits) and calls `start_round` /
/// `update_round`; hole navigation calls the award, toggle and manual
/// score paths on user picks and reads the sheet to render; the
/// lifecycle collaborator reads `scoreboard()` and then calls
/// `finish_round`.
///
/// Every operation runs to completion before the next user action; an
/// abandoned picker simply never calls in, so no partial change exists
/// to undo.
pub trait Scorekeeper {
    /// Start a fresh round, discarding any prior state unconditionally.
    fn start_round(&mut self, config: &RoundConfig) -> Result<(), ScoreError>;

    /// Apply an edited hole count and roster to the round in progress
    /// without losing recorded scores for retained players.
    fn update_round(&mut self, config: &RoundConfig) -> Result<(), ScoreError>;

    /// Finish the round: discard all hole data and return to setup.
    /// Read `scoreboard()` first; the totals do not survive this call.
    fn finish_round(&mut self) -> Vec<ScoreEvent>;

    /// Give `player` the achievement dot for `kind` on `hole`, taking
    /// it back from the previous holder if there was one. Re-picking
    /// the current holder changes nothing.
    fn award_achievement(
        &mut self,
        hole: usize,
        kind: Achievement,
        player: &str,
    ) -> Vec<ScoreEvent>;

    /// Toggle a bonus or penalty mark for `player` on `hole`, on if it
    /// is off and off if it is on, without touching other players.
    fn toggle_adjustment(
        &mut self,
        hole: usize,
        kind: Adjustment,
        player: &str,
    ) -> Vec<ScoreEvent>;

    /// Manual +/- score adjustment, independent of achievements.
    fn change_score(&mut self, hole: usize, player: &str, delta: i32) -> Vec<ScoreEvent>;

    fn sheet(&self) -> &ScoreSheet;

    fn phase(&self) -> RoundPhase;

    /// Final totals, highest first, ties broken by name.
    fn scoreboard(&self) -> Vec<PlayerTotal>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_serialize_to_picker_names() {
        assert_eq!(serde_json::to_string(&Achievement::Drive).unwrap(), "\"drive\"");
        assert_eq!(serde_json::to_string(&Achievement::On).unwrap(), "\"on\"");
        assert_eq!(serde_json::to_string(&Achievement::In).unwrap(), "\"in\"");
        assert_eq!(serde_json::to_string(&Adjustment::Bonus).unwrap(), "\"bonus\"");
        assert_eq!(
            serde_json::to_string(&Adjustment::Penalty).unwrap(),
            "\"penalty\""
        );
    }

    #[test]
    fn kind_json_roundtrip() {
        for kind in Achievement::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            let back: Achievement = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }

    #[test]
    fn display_matches_wire_names() {
        for kind in Achievement::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }
}
