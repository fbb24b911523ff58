//! Board-game record types shared by the loader, fetcher, and mutation builder.
//!
//! `InputRecord` mirrors one row of the spreadsheet export; `RemoteRecord`
//! mirrors a `BoardGameDatabase` entity as the CMS returns it.
use serde::{Deserialize, Deserializer};

/// One CSV row, matched to remote records by `title`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct InputRecord {
    #[serde(rename = "Display", deserialize_with = "flag_from_csv")]
    pub display: bool,
    #[serde(rename = "Game Title")]
    pub title: String,
    #[serde(rename = "Game Type 1")]
    pub game_type_1: String,
    #[serde(rename = "Game Type 2")]
    pub game_type_2: String,
    #[serde(rename = "Game Type 3")]
    pub game_type_3: String,
    #[serde(rename = "Number of Player (Min)")]
    pub min_players: String,
    #[serde(rename = "Number of Player (Max)")]
    pub max_players: String,
    #[serde(rename = "Playing Time (Min)")]
    pub min_play_time: String,
    #[serde(rename = "Playing Time (Max)")]
    pub max_play_time: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Complexity Rating (Out of 5)", deserialize_with = "rating_from_csv")]
    pub complexity: Option<f32>,
    #[serde(rename = "Average BGG Rating (Out of 10)", deserialize_with = "rating_from_csv")]
    pub average_rating: Option<f32>,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Link to BBG")]
    pub link: String,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl InputRecord {
    /// True when the row carries a usable title.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Remove `"` from the two long free-text columns.
    ///
    /// Spreadsheet exports quote freely inside these cells; other columns are
    /// left untouched and rely on document escaping alone.
    pub fn strip_free_text_quotes(&mut self) {
        self.description = strip_quotes(&self.description);
        self.notes = strip_quotes(&self.notes);
    }
}

/// A `BoardGameDatabase` entity returned by the list query.
///
/// `id`, `title`, and `stage` drive the sync; the rest mirror the selection set.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoteRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stage: String,
    #[serde(rename = "gameTitle", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    #[allow(dead_code)]
    pub display: bool,
    #[serde(rename = "gameType1", deserialize_with = "null_as_default")]
    #[allow(dead_code)]
    pub game_type_1: Vec<String>,
    #[serde(rename = "gameType2", deserialize_with = "null_as_default")]
    #[allow(dead_code)]
    pub game_type_2: Vec<String>,
    #[serde(rename = "gameType3", deserialize_with = "null_as_default")]
    #[allow(dead_code)]
    pub game_type_3: Vec<String>,
    #[serde(rename = "numberOfPlayers", deserialize_with = "null_as_default")]
    #[allow(dead_code)]
    pub min_players: String,
    #[serde(rename = "numberOfPlayersMax", deserialize_with = "null_as_default")]
    #[allow(dead_code)]
    pub max_players: String,
    #[serde(rename = "playingTimeMin", deserialize_with = "null_as_default")]
    #[allow(dead_code)]
    pub min_play_time: String,
    #[serde(rename = "playingTimeMax", deserialize_with = "null_as_default")]
    #[allow(dead_code)]
    pub max_play_time: String,
    #[serde(deserialize_with = "null_as_default")]
    #[allow(dead_code)]
    pub age: String,
    #[serde(rename = "complexityRatingOutOf5", deserialize_with = "null_as_default")]
    #[allow(dead_code)]
    pub complexity: String,
    #[serde(rename = "averageBbgRatingOutOf10", deserialize_with = "null_as_default")]
    #[allow(dead_code)]
    pub average_rating: String,
    #[serde(deserialize_with = "null_as_default")]
    #[allow(dead_code)]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    #[allow(dead_code)]
    pub description: String,
    #[serde(rename = "linkToBbg", deserialize_with = "null_as_default")]
    #[allow(dead_code)]
    pub link: String,
    #[serde(deserialize_with = "null_as_default")]
    #[allow(dead_code)]
    pub notes: String,
}

/// GraphQL field names selected by the list query, in request order.
pub const REMOTE_FIELDS: [&str; 18] = [
    "id",
    "stage",
    "gameTitle",
    "display",
    "gameType1",
    "gameType2",
    "gameType3",
    "numberOfPlayers",
    "numberOfPlayersMax",
    "playingTimeMin",
    "playingTimeMax",
    "age",
    "complexityRatingOutOf5",
    "averageBbgRatingOutOf10",
    "location",
    "description",
    "linkToBbg",
    "notes",
];

fn strip_quotes(text: &str) -> String {
    text.replace('"', "")
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Spreadsheets export booleans in several spellings; blank means hidden.
fn flag_from_csv<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "f" | "false" | "n" | "no" => Ok(false),
        "1" | "t" | "true" | "y" | "yes" => Ok(true),
        _ => Err(serde::de::Error::custom(format!(
            "invalid Display value {:?}",
            raw.trim()
        ))),
    }
}

// Padded cells and decimal commas are common in hand-edited sheets.
fn rating_from_csv<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    let text = raw.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.replace(',', ".")
        .parse::<f32>()
        .map(Some)
        .map_err(|err| serde::de::Error::custom(format!("invalid rating {text:?}: {err}")))
}
