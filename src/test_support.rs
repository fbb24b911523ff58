//! In-memory GraphQL transport for unit tests.
use crate::graphql::GraphqlTransport;
use crate::records::RemoteRecord;
use anyhow::{anyhow, Result};
use serde_json::json;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Serves list queries from an in-memory collection and answers everything
/// else from a queue of canned bodies. Every document sent is recorded.
pub struct StubTransport {
    existing: Option<(Vec<RemoteRecord>, usize)>,
    replies: RefCell<VecDeque<String>>,
    documents: RefCell<Vec<String>>,
}

impl StubTransport {
    /// Collection of records with the given ids, titled `Game <id>`.
    pub fn paged(ids: Vec<String>, page_size: usize) -> Self {
        let records = ids
            .into_iter()
            .map(|id| RemoteRecord {
                title: format!("Game {id}"),
                id,
                ..RemoteRecord::default()
            })
            .collect();
        Self::with_existing(records, page_size)
    }

    pub fn with_existing(records: Vec<RemoteRecord>, page_size: usize) -> Self {
        Self {
            existing: Some((records, page_size)),
            replies: RefCell::new(VecDeque::new()),
            documents: RefCell::new(Vec::new()),
        }
    }

    /// No collection; every request pops the next canned body.
    pub fn replay<'a>(replies: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            existing: None,
            replies: RefCell::new(replies.into_iter().map(str::to_string).collect()),
            documents: RefCell::new(Vec::new()),
        }
    }

    pub fn then_reply(self, body: &str) -> Self {
        self.replies.borrow_mut().push_back(body.to_string());
        self
    }

    pub fn documents(&self) -> Vec<String> {
        self.documents.borrow().clone()
    }

    pub fn mutations(&self) -> Vec<String> {
        self.documents()
            .into_iter()
            .filter(|doc| doc.starts_with("mutation"))
            .collect()
    }

    fn serve_page(records: &[RemoteRecord], page_size: usize, document: &str) -> Vec<u8> {
        let start = match after_cursor(document) {
            Some(cursor) => records
                .iter()
                .position(|r| r.id == cursor)
                .map_or(records.len(), |idx| idx + 1),
            None => 0,
        };
        let page: Vec<_> = records
            .iter()
            .skip(start)
            .take(page_size)
            .map(|r| json!({ "id": r.id, "gameTitle": r.title }))
            .collect();
        json!({ "data": { "boardGameDatabases": page } })
            .to_string()
            .into_bytes()
    }
}

fn after_cursor(document: &str) -> Option<&str> {
    let rest = &document[document.find("after: \"")? + "after: \"".len()..];
    rest.split('"').next()
}

impl GraphqlTransport for StubTransport {
    fn execute(&self, document: &str) -> Result<Vec<u8>> {
        self.documents.borrow_mut().push(document.to_string());
        if let Some((records, page_size)) = &self.existing {
            if document.starts_with("query") {
                return Ok(Self::serve_page(records, *page_size, document));
            }
        }
        self.replies
            .borrow_mut()
            .pop_front()
            .map(String::into_bytes)
            .ok_or_else(|| anyhow!("no stub reply queued"))
    }
}
