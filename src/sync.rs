//! Sync orchestration: fetch existing games, then create or update one row at a time.
//!
//! Transport failures abort the run. A row without a title, or a write whose
//! response cannot confirm an id, is logged and counted but does not stop the
//! loop.
use crate::graphql::GraphqlTransport;
use crate::mutation::{build_mutation, parse_confirmation, WriteKind, WriteOutcome};
use crate::prompt::Prompter;
use crate::records::{InputRecord, RemoteRecord};
use crate::remote::{fetch_all, find_existing};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const EMPTY_REMOTE_QUESTION: &str =
    "No existing games found in the CMS. Would you like to continue? (y/n)";

/// Per-run tallies.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub created: usize,
    pub updated: usize,
    /// Rows without a game title.
    pub skipped: usize,
    /// Writes sent whose response did not return an id.
    pub unconfirmed: usize,
}

impl SyncReport {
    pub fn sent(&self) -> usize {
        self.created + self.updated + self.unconfirmed
    }
}

/// Fetch the existing collection, gate on confirmation, and push every row.
///
/// Returns `None` when the user declines to continue against an empty CMS.
pub fn run<T, R, W>(
    transport: &T,
    records: Vec<InputRecord>,
    assume_yes: bool,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<SyncReport>>
where
    T: GraphqlTransport,
    R: BufRead,
    W: Write,
{
    let existing = fetch_all(transport)?;
    if !should_proceed(&existing, assume_yes, prompter)? {
        tracing::info!("exiting without changes");
        return Ok(None);
    }

    let report = push_records(transport, records, &existing)?;
    tracing::info!(
        sent = report.sent(),
        created = report.created,
        updated = report.updated,
        skipped = report.skipped,
        unconfirmed = report.unconfirmed,
        "sync complete"
    );
    Ok(Some(report))
}

/// An empty CMS usually means a wrong endpoint, so ask before writing to it.
pub fn should_proceed<R: BufRead, W: Write>(
    existing: &[RemoteRecord],
    assume_yes: bool,
    prompter: &mut Prompter<R, W>,
) -> Result<bool> {
    if !existing.is_empty() || assume_yes {
        return Ok(true);
    }
    prompter.confirm(EMPTY_REMOTE_QUESTION)
}

/// Create or update each titled row in file order.
pub fn push_records<T: GraphqlTransport>(
    transport: &T,
    records: Vec<InputRecord>,
    existing: &[RemoteRecord],
) -> Result<SyncReport> {
    let mut report = SyncReport::default();

    for (idx, mut record) in records.into_iter().enumerate() {
        if !record.has_title() {
            tracing::warn!(line = idx + 2, "skipping row without a game title");
            report.skipped += 1;
            continue;
        }
        record.strip_free_text_quotes();

        let matched = find_existing(existing, &record.title);
        match matched {
            Some(game) => tracing::info!(
                id = %game.id,
                stage = %game.stage,
                title = %record.title,
                "updating game"
            ),
            None => tracing::info!(title = %record.title, "creating game"),
        }
        let existing_id = matched.map(|game| game.id.as_str());

        let (kind, document) = build_mutation(existing_id, &record);
        let body = transport
            .execute(&document)
            .with_context(|| format!("{kind} game {:?}", record.title))?;

        match parse_confirmation(kind, &body) {
            WriteOutcome::Confirmed { id } => {
                match kind {
                    WriteKind::Create => {
                        tracing::info!(%id, title = %record.title, "game created");
                        report.created += 1;
                    }
                    WriteKind::Update => {
                        tracing::info!(%id, title = %record.title, "game updated");
                        report.updated += 1;
                    }
                }
            }
            WriteOutcome::Unconfirmed { reason } => {
                tracing::warn!(
                    title = %record.title,
                    %kind,
                    %reason,
                    "could not confirm write"
                );
                report.unconfirmed += 1;
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
