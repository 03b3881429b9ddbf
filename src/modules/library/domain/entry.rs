use serde::{Deserialize, Serialize};

use crate::modules::nexo::domain::{Nexo, WatchState};
use crate::modules::series::domain::{Season, Series};

/// One row of the user's collection: a catalog entry merged with the
/// user's viewing record for it. Derived for display only, recomputed
/// whenever the source collections, the search filter or the user change;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub series: Series,
    pub nexo: Nexo,
}

impl LibraryEntry {
    pub fn state(&self) -> WatchState {
        self.nexo.state
    }

    pub fn year(&self) -> i32 {
        self.series.year
    }

    pub fn season(&self) -> Season {
        self.series.season
    }

    pub fn stars(&self) -> i32 {
        self.nexo.stars
    }
}
