//! Create/update mutations for `BoardGameDatabase` entries and their confirmations.
//!
//! Both mutations carry the full field set from the input row and select only
//! `id` back, which is what confirms the write.
use crate::graphql::{Operation, Response, Value};
use crate::records::InputRecord;
use serde::Deserialize;
use std::fmt;

const CREATE_FIELD: &str = "createBoardGameDatabase";
const UPDATE_FIELD: &str = "updateBoardGameDatabase";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    Create,
    Update,
}

impl WriteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteKind::Create => "create",
            WriteKind::Update => "update",
        }
    }
}

impl fmt::Display for WriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single create or update, as far as the response lets us tell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Confirmed { id: String },
    Unconfirmed { reason: String },
}

/// `data:` input object for a record, in the field order the CMS schema lists.
pub fn record_data(record: &InputRecord) -> Value {
    Value::object([
        ("display", Value::Bool(record.display)),
        ("gameTitle", Value::string(&record.title)),
        ("gameType1", tag_list(&record.game_type_1)),
        ("gameType2", tag_list(&record.game_type_2)),
        ("gameType3", tag_list(&record.game_type_3)),
        ("numberOfPlayers", Value::string(&record.min_players)),
        ("numberOfPlayersMax", Value::string(&record.max_players)),
        ("playingTimeMin", Value::string(&record.min_play_time)),
        ("playingTimeMax", Value::string(&record.max_play_time)),
        ("age", Value::string(&record.age)),
        ("complexityRatingOutOf5", Value::string(float_text(record.complexity))),
        (
            "averageBbgRatingOutOf10",
            Value::string(float_text(record.average_rating)),
        ),
        ("location", Value::string(&record.location)),
        ("description", Value::string(&record.description)),
        ("linkToBbg", Value::string(&record.link)),
        ("notes", Value::string(&record.notes)),
    ])
}

// The CMS models each game type as a multi-select; the sheet holds one value per column.
fn tag_list(tag: &str) -> Value {
    Value::List(vec![Value::string(tag)])
}

/// Shortest decimal form; a blank cell is sent as `""`.
///
/// The Go importer sent `"0"` for blank ratings, so re-running over data it
/// wrote clears those fields rather than zeroing them.
fn float_text(value: Option<f32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn build_create(record: &InputRecord) -> String {
    Operation::mutation(CREATE_FIELD)
        .arg("data", record_data(record))
        .select(["id"])
        .render()
}

pub fn build_update(id: &str, record: &InputRecord) -> String {
    Operation::mutation(UPDATE_FIELD)
        .arg("where", Value::object([("id", Value::string(id))]))
        .arg("data", record_data(record))
        .select(["id"])
        .render()
}

/// Update when the record already exists remotely, create otherwise.
pub fn build_mutation(existing_id: Option<&str>, record: &InputRecord) -> (WriteKind, String) {
    match existing_id {
        Some(id) => (WriteKind::Update, build_update(id, record)),
        None => (WriteKind::Create, build_create(record)),
    }
}

#[derive(Debug, Deserialize)]
struct Written {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WriteData {
    #[serde(rename = "createBoardGameDatabase")]
    created: Option<Written>,
    #[serde(rename = "updateBoardGameDatabase")]
    updated: Option<Written>,
}

/// Interpret a create/update response body. Never fails: anything short of a
/// returned id is reported as unconfirmed.
pub fn parse_confirmation(kind: WriteKind, body: &[u8]) -> WriteOutcome {
    let response: Response<WriteData> = match Response::from_slice(body) {
        Ok(response) => response,
        Err(err) => {
            return WriteOutcome::Unconfirmed {
                reason: format!("{err:#}"),
            }
        }
    };
    let errors = response.error_summary();
    let written = response.data.and_then(|data| match kind {
        WriteKind::Create => data.created,
        WriteKind::Update => data.updated,
    });

    match written.and_then(|w| w.id).filter(|id| !id.is_empty()) {
        Some(id) => WriteOutcome::Confirmed { id },
        None => WriteOutcome::Unconfirmed {
            reason: errors.unwrap_or_else(|| "response carried no id".to_string()),
        },
    }
}

#[cfg(test)]
#[path = "mutation_tests.rs"]
mod tests;
