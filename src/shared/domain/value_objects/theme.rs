use serde::{Deserialize, Serialize};

use crate::shared::errors::AppResult;
use crate::shared::infrastructure::storage::{KeyValueStore, KEY_THEME};

/// Display theme, persisted under the `theme` storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Reads the persisted theme; absent or unrecognized values fall back
    /// to the dark default.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        store
            .get(KEY_THEME)
            .and_then(|raw| Self::parse(&raw))
            .unwrap_or(Self::Dark)
    }

    pub fn persist(&self, store: &dyn KeyValueStore) -> AppResult<()> {
        store.set(KEY_THEME, self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::infrastructure::storage::MemoryStore;

    #[test]
    fn restore_defaults_to_dark() {
        let store = MemoryStore::new();
        assert_eq!(Theme::restore(&store), Theme::Dark);

        store.set(KEY_THEME, "nonsense").unwrap();
        assert_eq!(Theme::restore(&store), Theme::Dark);
    }

    #[test]
    fn toggle_round_trips_through_the_store() {
        let store = MemoryStore::new();
        let theme = Theme::restore(&store).toggled();
        theme.persist(&store).unwrap();
        assert_eq!(Theme::restore(&store), Theme::Light);
    }
}
