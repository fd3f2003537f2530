use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use dots_core::keeper::{Achievement, Adjustment};
use dots_core::roster::Roster;

use crate::scoring::{ACHIEVEMENT_DOTS, adjustment_dots};

/// One point change for one player, produced by assignment bookkeeping
/// and applied through the score sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreDelta {
    pub player: String,
    pub dots: i32,
}

impl ScoreDelta {
    fn new(player: &str, dots: i32) -> Self {
        Self {
            player: player.to_string(),
            dots,
        }
    }
}

/// Who currently holds each dot on one hole.
///
/// Derived bookkeeping, never the source of truth: totals live in the
/// score sheet. This record exists so that re-picking a dot releases
/// the previous holder and un-toggling a mark reverses it cleanly.
/// Adjustment maps drop entries at zero, so an all-default record means
/// "nothing assigned".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleAssignments {
    drive_dot: Option<String>,
    on_dot: Option<String>,
    in_dot: Option<String>,
    bonus_marks: HashMap<String, u32>,
    penalty_marks: HashMap<String, u32>,
}

impl HoleAssignments {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, kind: Achievement) -> &mut Option<String> {
        match kind {
            Achievement::Drive => &mut self.drive_dot,
            Achievement::On => &mut self.on_dot,
            Achievement::In => &mut self.in_dot,
        }
    }

    fn marks_mut(&mut self, kind: Adjustment) -> &mut HashMap<String, u32> {
        match kind {
            Adjustment::Bonus => &mut self.bonus_marks,
            Adjustment::Penalty => &mut self.penalty_marks,
        }
    }

    /// Current holder of an achievement dot, if any.
    pub fn holder(&self, kind: Achievement) -> Option<&str> {
        match kind {
            Achievement::Drive => self.drive_dot.as_deref(),
            Achievement::On => self.on_dot.as_deref(),
            Achievement::In => self.in_dot.as_deref(),
        }
    }

    /// How many marks of `kind` the player currently holds.
    pub fn marks(&self, kind: Adjustment, player: &str) -> u32 {
        let marks = match kind {
            Adjustment::Bonus => &self.bonus_marks,
            Adjustment::Penalty => &self.penalty_marks,
        };
        marks.get(player).copied().unwrap_or(0)
    }

    /// Move the achievement dot for `kind` to `player`.
    ///
    /// Releasing the previous holder and awarding the new one come back
    /// as separate deltas; re-picking the current holder produces none,
    /// so selecting the same player twice never double-counts.
    pub fn assign(&mut self, kind: Achievement, player: &str) -> Vec<ScoreDelta> {
        let slot = self.slot_mut(kind);
        let mut deltas = Vec::new();
        match slot.as_deref() {
            Some(previous) if previous == player => return deltas,
            Some(previous) => deltas.push(ScoreDelta::new(previous, -ACHIEVEMENT_DOTS)),
            None => {},
        }
        deltas.push(ScoreDelta::new(player, ACHIEVEMENT_DOTS));
        *slot = Some(player.to_string());
        deltas
    }

    /// Toggle a bonus or penalty mark for `player`: on if it is off,
    /// off (with the inverse delta) if it is on. Other players' marks
    /// are untouched.
    pub fn toggle(&mut self, kind: Adjustment, player: &str) -> Vec<ScoreDelta> {
        let dots = adjustment_dots(kind);
        let marks = self.marks_mut(kind);
        match marks.get(player).copied().unwrap_or(0) {
            0 => {
                marks.insert(player.to_string(), 1);
                vec![ScoreDelta::new(player, dots)]
            },
            1 => {
                marks.remove(player);
                vec![ScoreDelta::new(player, -dots)]
            },
            count => {
                marks.insert(player.to_string(), count - 1);
                vec![ScoreDelta::new(player, -dots)]
            },
        }
    }

    /// Drop every slot and mark referencing a player no longer on the
    /// roster. Totals are not touched here; the sheet reconciliation
    /// that accompanies a roster edit already drops their entries.
    pub fn retain_players(&mut self, roster: &Roster) {
        for kind in Achievement::ALL {
            let slot = self.slot_mut(kind);
            if slot.as_deref().is_some_and(|holder| !roster.contains(holder)) {
                *slot = None;
            }
        }
        self.bonus_marks.retain(|player, _| roster.contains(player));
        self.penalty_marks.retain(|player, _| roster.contains(player));
    }

    /// Forget everything assigned on this hole.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no dot or mark is assigned on this hole.
    pub fn is_empty(&self) -> bool {
        self.drive_dot.is_none()
            && self.on_dot.is_none()
            && self.in_dot.is_none()
            && self.bonus_marks.is_empty()
            && self.penalty_marks.is_empty()
    }
}
