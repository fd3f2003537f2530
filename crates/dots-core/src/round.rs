use serde::{Deserialize, Serialize};

use crate::roster::Roster;

/// Hole count shown in the settings form before the user changes it.
pub const DEFAULT_HOLES: usize = 18;
/// Most holes a round may have.
pub const MAX_HOLES: usize = 36;
/// Most players a roster may have.
pub const MAX_PLAYERS: usize = 10;

/// What the settings collaborator hands over when starting a new round
/// or editing the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub holes: usize,
    pub roster: Roster,
}

/// Session lifecycle flag: the start screen vs. a running round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundPhase {
    #[default]
    Setup,
    Active,
}

/// Bounds the settings collaborator enforces before calling into the
/// scoring core, loadable from `config/dots.toml`.
///
/// The core operations themselves only require at least one hole and a
/// non-empty roster; everything stricter lives here so the form can
/// block bad input (and disable "Add player" at the cap) up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundLimits {
    pub default_holes: usize,
    pub max_holes: usize,
    pub max_players: usize,
}

impl Default for RoundLimits {
    fn default() -> Self {
        Self {
            default_holes: DEFAULT_HOLES,
            max_holes: MAX_HOLES,
            max_players: MAX_PLAYERS,
        }
    }
}

/// A round configuration the settings form must reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    NoHoles,
    TooManyHoles { requested: usize, max: usize },
    NoPlayers,
    TooManyPlayers { requested: usize, max: usize },
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoHoles => write!(f, "a round needs at least one hole"),
            Self::TooManyHoles { requested, max } => {
                write!(f, "{requested} holes requested, at most {max} allowed")
            },
            Self::NoPlayers => write!(f, "a round needs at least one player"),
            Self::TooManyPlayers { requested, max } => {
                write!(f, "{requested} players requested, at most {max} allowed")
            },
        }
    }
}

impl std::error::Error for SettingsError {}

impl RoundLimits {
    /// Load limits from a TOML file. Falls back to defaults if the file
    /// is missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("DOTS_CONFIG").unwrap_or_else(|_| "config/dots.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<RoundLimits>(&content) {
                Ok(limits) => limits,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    RoundLimits::default()
                },
            },
            Err(_) => RoundLimits::default(),
        }
    }

    /// Validate a configuration against these limits.
    pub fn check(&self, config: &RoundConfig) -> Result<(), SettingsError> {
        if config.holes == 0 {
            return Err(SettingsError::NoHoles);
        }
        if config.holes > self.max_holes {
            return Err(SettingsError::TooManyHoles {
                requested: config.holes,
                max: self.max_holes,
            });
        }
        if config.roster.is_empty() {
            return Err(SettingsError::NoPlayers);
        }
        if config.roster.len() > self.max_players {
            return Err(SettingsError::TooManyPlayers {
                requested: config.roster.len(),
                max: self.max_players,
            });
        }
        Ok(())
    }

    /// Whether the roster has room for another player.
    pub fn can_add_player(&self, roster: &Roster) -> bool {
        roster.len() < self.max_players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(holes: usize, players: usize) -> RoundConfig {
        let names = (1..=players).map(|i| format!("Player{i}"));
        RoundConfig {
            holes,
            roster: Roster::from_names(names).unwrap(),
        }
    }

    #[test]
    fn defaults_match_settings_form() {
        let limits = RoundLimits::default();
        assert_eq!(limits.default_holes, 18);
        assert_eq!(limits.max_holes, 36);
        assert_eq!(limits.max_players, 10);
    }

    #[test]
    fn check_accepts_bounds() {
        let limits = RoundLimits::default();
        assert_eq!(limits.check(&config(1, 1)), Ok(()));
        assert_eq!(limits.check(&config(36, 10)), Ok(()));
    }

    #[test]
    fn check_rejects_hole_counts() {
        let limits = RoundLimits::default();
        assert_eq!(limits.check(&config(0, 2)), Err(SettingsError::NoHoles));
        assert_eq!(
            limits.check(&config(37, 2)),
            Err(SettingsError::TooManyHoles {
                requested: 37,
                max: 36
            })
        );
    }

    #[test]
    fn check_rejects_roster_sizes() {
        let limits = RoundLimits::default();
        let empty = RoundConfig {
            holes: 18,
            roster: Roster::new(),
        };
        assert_eq!(limits.check(&empty), Err(SettingsError::NoPlayers));
        assert_eq!(
            limits.check(&config(18, 11)),
            Err(SettingsError::TooManyPlayers {
                requested: 11,
                max: 10
            })
        );
    }

    #[test]
    fn can_add_player_stops_at_cap() {
        let limits = RoundLimits::default();
        let mut roster = Roster::new();
        for i in 1..=9 {
            roster.add(&format!("Player{i}")).unwrap();
        }
        assert!(limits.can_add_player(&roster));
        roster.add("Player10").unwrap();
        assert!(!limits.can_add_player(&roster));
    }

    #[test]
    fn partial_limits_toml_fills_defaults() {
        let limits: RoundLimits = toml::from_str("max_holes = 27").unwrap();
        assert_eq!(limits.max_holes, 27);
        assert_eq!(limits.max_players, MAX_PLAYERS);
        assert_eq!(limits.default_holes, DEFAULT_HOLES);
    }
}
