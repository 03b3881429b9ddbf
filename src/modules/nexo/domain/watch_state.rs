//! Watch state enum and display methods

use serde::{Deserialize, Serialize};

/// User's viewing state for a series. Wire values are the Spanish strings
/// the REST collaborator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WatchState {
    /// Still airing, being followed week to week
    #[serde(rename = "En emision")]
    Airing,
    /// The series finished airing, the user has not caught up
    #[serde(rename = "Finalizado")]
    Finished,
    /// Every episode seen
    #[serde(rename = "Completado")]
    Completed,
}

impl WatchState {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Airing => "Airing",
            Self::Finished => "Finished",
            Self::Completed => "Completed",
        }
    }

    /// Wire value used by the REST collaborator
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Airing => "En emision",
            Self::Finished => "Finalizado",
            Self::Completed => "Completado",
        }
    }

    /// Fixed listing priority: airing first, completed last.
    pub fn sort_rank(&self) -> u8 {
        match self {
            Self::Airing => 0,
            Self::Finished => 1,
            Self::Completed => 2,
        }
    }

    /// All states in listing priority order
    pub fn all() -> [Self; 3] {
        [Self::Airing, Self::Finished, Self::Completed]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_round_trip() {
        for state in WatchState::all() {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.wire_name()));
            let back: WatchState = serde_json::from_str(&json).unwrap();
            assert_eq!(back, state);
        }
    }

    #[test]
    fn unknown_state_is_rejected() {
        assert!(serde_json::from_str::<WatchState>("\"Abandonado\"").is_err());
    }

    #[test]
    fn airing_sorts_before_finished_and_completed() {
        assert!(WatchState::Airing.sort_rank() < WatchState::Finished.sort_rank());
        assert!(WatchState::Finished.sort_rank() < WatchState::Completed.sort_rank());
    }
}
