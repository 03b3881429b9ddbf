use serde::{Deserialize, Serialize};

/// Release season of a series.
///
/// The REST collaborator speaks Spanish on the wire; the serde renames
/// keep that contract while the code stays on the English variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    #[serde(rename = "Invierno")]
    Winter,
    #[serde(rename = "Primavera")]
    Spring,
    #[serde(rename = "Verano")]
    Summer,
    #[serde(rename = "Otoño")]
    Fall,
}

impl Season {
    /// Get season from string (case insensitive, wire or English form)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "invierno" | "winter" => Some(Self::Winter),
            "primavera" | "spring" => Some(Self::Spring),
            "verano" | "summer" => Some(Self::Summer),
            "otoño" | "fall" | "autumn" => Some(Self::Fall),
            _ => None,
        }
    }

    /// Wire value used by the REST collaborator
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Winter => "Invierno",
            Self::Spring => "Primavera",
            Self::Summer => "Verano",
            Self::Fall => "Otoño",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
        }
    }

    /// Chronological position, also the listing sort rank.
    pub fn sort_rank(&self) -> u8 {
        match self {
            Self::Winter => 0,
            Self::Spring => 1,
            Self::Summer => 2,
            Self::Fall => 3,
        }
    }

    /// Get all seasons in chronological order
    pub fn all() -> [Self; 4] {
        [Self::Winter, Self::Spring, Self::Summer, Self::Fall]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_round_trip() {
        for season in Season::all() {
            let json = serde_json::to_string(&season).unwrap();
            assert_eq!(json, format!("\"{}\"", season.wire_name()));
            let back: Season = serde_json::from_str(&json).unwrap();
            assert_eq!(back, season);
        }
    }

    #[test]
    fn unknown_wire_value_is_rejected() {
        assert!(serde_json::from_str::<Season>("\"Monsoon\"").is_err());
    }

    #[test]
    fn parse_accepts_both_languages() {
        assert_eq!(Season::parse("Invierno"), Some(Season::Winter));
        assert_eq!(Season::parse("otoño"), Some(Season::Fall));
        assert_eq!(Season::parse("autumn"), Some(Season::Fall));
        assert_eq!(Season::parse("monsoon"), None);
    }

    #[test]
    fn ranks_are_chronological() {
        let ranks: Vec<u8> = Season::all().iter().map(Season::sort_rank).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }
}
