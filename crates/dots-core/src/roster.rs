use serde::{Deserialize, Serialize};

/// The ordered list of players in a round.
///
/// Names are trimmed on insert. Blank and duplicate names are rejected
/// here, at the edge, so every other component can key score maps by
/// name without further checks. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<String>,
}

/// Why a name could not be added to the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    BlankName,
    DuplicateName(String),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "player name is empty"),
            Self::DuplicateName(name) => write!(f, "player {name:?} is already in the roster"),
        }
    }
}

impl std::error::Error for RosterError {}

impl Roster {
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Build a roster from a list of names, validating each in order.
    pub fn from_names<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for name in names {
            roster.add(name.as_ref())?;
        }
        Ok(roster)
    }

    /// Add a player. The name is trimmed first.
    pub fn add(&mut self, name: &str) -> Result<(), RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::BlankName);
        }
        if self.contains(name) {
            return Err(RosterError::DuplicateName(name.to_string()));
        }
        self.names.push(name.to_string());
        Ok(())
    }

    /// Remove a player by name. Returns whether the player was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_and_keeps_order() {
        let mut roster = Roster::new();
        roster.add("  Alice ").unwrap();
        roster.add("Bob").unwrap();
        assert_eq!(roster.names(), ["Alice", "Bob"]);
    }

    #[test]
    fn blank_name_rejected() {
        let mut roster = Roster::new();
        assert_eq!(roster.add("   "), Err(RosterError::BlankName));
        assert!(roster.is_empty());
    }

    #[test]
    fn duplicate_rejected() {
        let mut roster = Roster::from_names(["Alice"]).unwrap();
        assert_eq!(
            roster.add("Alice"),
            Err(RosterError::DuplicateName("Alice".to_string()))
        );
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn duplicate_after_trim_rejected() {
        let result = Roster::from_names(["Alice", " Alice "]);
        assert_eq!(
            result,
            Err(RosterError::DuplicateName("Alice".to_string()))
        );
    }

    #[test]
    fn remove_reports_presence() {
        let mut roster = Roster::from_names(["Alice", "Bob"]).unwrap();
        assert!(roster.remove("Alice"));
        assert!(!roster.remove("Alice"));
        assert_eq!(roster.names(), ["Bob"]);
    }

    #[test]
    fn json_roundtrip() {
        let roster = Roster::from_names(["Alice", "Bob"]).unwrap();
        let json = serde_json::to_string(&roster).unwrap();
        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(roster, back);
    }
}
