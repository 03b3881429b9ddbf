use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::watch_state::WatchState;

/// Per-(user, series) viewing record: progress and rating against one
/// catalog entry.
///
/// The underlying store does not enforce uniqueness of the
/// (users_id, series_id) pair; at most one record per pair is meaningful
/// and lookups document which one they keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nexo {
    pub id: i64,
    pub series_id: i64,
    pub users_id: i64,
    pub state: WatchState,
    pub seen: i32,
    pub stars: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Nexo {
    pub fn belongs_to(&self, user_id: i64) -> bool {
        self.users_id == user_id
    }

    /// Nonzero star ratings are the only ones that count toward averages.
    pub fn is_rated(&self) -> bool {
        self.stars > 0
    }

    /// The record for one (user, series) pair. The store does not enforce
    /// uniqueness; when duplicates exist the first match is kept and which
    /// entry that is remains undefined product behavior.
    pub fn find_for(nexos: &[Nexo], user_id: i64, series_id: i64) -> Option<&Nexo> {
        nexos
            .iter()
            .find(|n| n.users_id == user_id && n.series_id == series_id)
    }
}

/// Creation payload: a Nexo minus identity and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNexo {
    pub series_id: i64,
    pub users_id: i64,
    pub state: WatchState,
    pub seen: i32,
    pub stars: i32,
}

/// Partial update payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NexoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<WatchState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seen: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nexo_deserializes_from_wire_json() {
        let json = r#"{
            "id": 11,
            "series_id": 3,
            "users_id": 1,
            "state": "En emision",
            "seen": 8,
            "stars": 4,
            "created_at": "2024-02-01T00:00:00Z",
            "updated_at": "2024-02-02T00:00:00Z"
        }"#;
        let nexo: Nexo = serde_json::from_str(json).unwrap();
        assert_eq!(nexo.state, WatchState::Airing);
        assert!(nexo.belongs_to(1));
        assert!(!nexo.belongs_to(2));
        assert!(nexo.is_rated());
    }

    #[test]
    fn zero_stars_means_unrated() {
        let json = r#"{
            "id": 12,
            "series_id": 3,
            "users_id": 1,
            "state": "Completado",
            "seen": 12,
            "stars": 0,
            "created_at": "2024-02-01T00:00:00Z",
            "updated_at": "2024-02-02T00:00:00Z"
        }"#;
        let nexo: Nexo = serde_json::from_str(json).unwrap();
        assert!(!nexo.is_rated());
    }
}
