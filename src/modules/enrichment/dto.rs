use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanSearchResponse {
    pub data: Vec<JikanAnime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanAnime {
    pub mal_id: i32,
    pub title: String,
    pub synopsis: Option<String>,
    pub trailer: Option<JikanTrailer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanTrailer {
    pub youtube_id: Option<String>,
    pub url: Option<String>,
    pub embed_url: Option<String>,
}

/// Best-effort catalog enrichment for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrichment {
    pub mal_id: i32,
    pub synopsis: Option<String>,
    pub trailer_embed_url: Option<String>,
}

impl From<JikanAnime> for Enrichment {
    fn from(anime: JikanAnime) -> Self {
        // The embed host variant with -nocookie refuses to load outside
        // youtube.com embeds; the plain host works everywhere.
        let trailer_embed_url = anime
            .trailer
            .and_then(|t| t.embed_url)
            .map(|url| url.replace("-nocookie", ""));

        Self {
            mal_id: anime.mal_id,
            synopsis: anime.synopsis,
            trailer_embed_url,
        }
    }
}
