use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::season::Season;

/// A catalog entry describing one anime title and its static metadata.
/// Identity is server-assigned and immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: i64,
    pub name: String,
    pub episodes: i32,
    pub studio: String,
    pub genre: String,
    pub genre2: String,
    pub genre3: String,
    pub year: i32,
    pub season: Season,
    pub img: String,
    pub img2: String,
    pub splash: String,
    pub status: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Series {
    /// The up-to-three non-empty genre tags.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        [
            self.genre.as_str(),
            self.genre2.as_str(),
            self.genre3.as_str(),
        ]
        .into_iter()
        .filter(|g| !g.is_empty())
    }
}

/// Creation payload: a Series minus identity, status and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSeries {
    pub name: String,
    pub episodes: i32,
    pub studio: String,
    pub genre: String,
    pub genre2: String,
    pub genre3: String,
    pub year: i32,
    pub season: Season,
    pub img: String,
    pub img2: String,
    pub splash: String,
}

/// Partial update payload. Absent fields are left untouched by the
/// collaborator; `status` is always forced to 1 on the wire by the update
/// call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl From<NewSeries> for SeriesPatch {
    fn from(new: NewSeries) -> Self {
        Self {
            name: Some(new.name),
            episodes: Some(new.episodes),
            studio: Some(new.studio),
            genre: Some(new.genre),
            genre2: Some(new.genre2),
            genre3: Some(new.genre3),
            year: Some(new.year),
            season: Some(new.season),
            img: Some(new.img),
            img2: Some(new.img2),
            splash: Some(new.splash),
            status: None,
        }
    }
}
