//! Existing CMS records: cursor pagination and title matching.
use crate::graphql::{GraphqlTransport, Operation, Response, Value};
use crate::records::{RemoteRecord, REMOTE_FIELDS};
use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Largest page the CMS serves for a list query.
pub const PAGE_SIZE: i64 = 100;

#[derive(Debug, Deserialize)]
struct PageData {
    #[serde(rename = "boardGameDatabases", default)]
    games: Vec<RemoteRecord>,
}

/// Render the list query for the page following `after`.
pub fn page_query(after: Option<&str>) -> String {
    let mut op = Operation::query("boardGameDatabases").arg("first", Value::Int(PAGE_SIZE));
    if let Some(cursor) = after {
        op = op.arg("after", Value::string(cursor));
    }
    op.select(REMOTE_FIELDS).render()
}

/// Fetch one page of records after `after` (from the start when `None`).
pub fn fetch_page<T: GraphqlTransport>(
    transport: &T,
    after: Option<&str>,
) -> Result<Vec<RemoteRecord>> {
    let body = transport.execute(&page_query(after))?;
    let response: Response<PageData> = Response::from_slice(&body)?;
    if let Some(summary) = response.error_summary() {
        tracing::warn!(errors = %summary, "list query returned errors");
    }
    Ok(response.into_data()?.games)
}

/// Page through the whole collection, stopping at the first empty page.
pub fn fetch_all<T: GraphqlTransport>(transport: &T) -> Result<Vec<RemoteRecord>> {
    let mut games: Vec<RemoteRecord> = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = fetch_page(transport, cursor.as_deref()).with_context(|| match &cursor {
            Some(after) => format!("fetch existing games after {after}"),
            None => "fetch first page of existing games".to_string(),
        })?;
        let Some(last) = page.last() else {
            break;
        };
        if cursor.as_deref() == Some(last.id.as_str()) {
            bail!("pagination cursor did not advance past {}", last.id);
        }
        cursor = Some(last.id.clone());
        tracing::debug!(page_len = page.len(), total = games.len() + page.len(), "fetched page");
        games.extend(page);
    }

    tracing::info!(count = games.len(), "found existing games in the CMS");
    Ok(games)
}

/// First record whose title equals `title` exactly (case-sensitive).
pub fn find_existing<'a>(games: &'a [RemoteRecord], title: &str) -> Option<&'a RemoteRecord> {
    games.iter().find(|game| game.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubTransport;

    fn game(id: &str, title: &str) -> RemoteRecord {
        RemoteRecord {
            id: id.to_string(),
            title: title.to_string(),
            ..RemoteRecord::default()
        }
    }

    #[test]
    fn first_page_has_no_cursor() {
        let query = page_query(None);
        assert!(query.contains("boardGameDatabases(first: 100) {"));
        assert!(!query.contains("after"));
        for field in REMOTE_FIELDS {
            assert!(query.contains(&format!("    {field}\n")), "missing {field}");
        }
    }

    #[test]
    fn later_pages_pass_the_cursor() {
        let query = page_query(Some("ck9"));
        assert!(query.contains(r#"boardGameDatabases(first: 100, after: "ck9") {"#));
    }

    #[test]
    fn pagination_walks_cursor_until_empty_page() {
        let dataset: Vec<String> = (0..250).map(|n| format!("id{n:03}")).collect();
        let transport = StubTransport::paged(dataset.clone(), 100);

        let games = fetch_all(&transport).expect("fetch all");

        let ids: Vec<String> = games.iter().map(|g| g.id.clone()).collect();
        assert_eq!(ids, dataset);
        let documents = transport.documents();
        assert_eq!(documents.len(), 4);
        assert!(!documents[0].contains("after"));
        assert!(documents[1].contains(r#"after: "id099""#));
        assert!(documents[3].contains(r#"after: "id249""#));
    }

    #[test]
    fn empty_collection_is_one_request() {
        let transport = StubTransport::paged(Vec::new(), 100);
        let games = fetch_all(&transport).expect("fetch all");
        assert!(games.is_empty());
        assert_eq!(transport.documents().len(), 1);
    }

    #[test]
    fn stalled_cursor_is_an_error() {
        let page = r#"{"data":{"boardGameDatabases":[{"id":"a","gameTitle":"Azul"}]}}"#;
        let transport = StubTransport::replay([page, page]);
        let err = fetch_all(&transport).expect_err("stalled");
        assert_eq!(err.to_string(), "pagination cursor did not advance past a");
    }

    #[test]
    fn undecodable_page_is_an_error() {
        let transport = StubTransport::replay(["not json"]);
        let err = fetch_all(&transport).expect_err("bad page");
        assert_eq!(err.to_string(), "fetch first page of existing games");
        assert!(format!("{err:#}").contains("decode GraphQL response"));
    }

    #[test]
    fn page_with_errors_and_no_data_is_an_error() {
        let transport =
            StubTransport::replay([r#"{"data":null,"errors":[{"message":"unauthorized"}]}"#]);
        let err = fetch_all(&transport).expect_err("errors");
        assert!(format!("{err:#}").contains("GraphQL errors: unauthorized"));
    }

    #[test]
    fn matching_is_exact_and_first_wins() {
        let games = vec![game("1", "Catan"), game("2", "catan"), game("3", "Catan")];

        assert_eq!(find_existing(&games, "Catan").map(|g| g.id.as_str()), Some("1"));
        assert_eq!(find_existing(&games, "catan").map(|g| g.id.as_str()), Some("2"));
        assert!(find_existing(&games, "Catan ").is_none());
        assert!(find_existing(&games, "CATAN").is_none());
    }

    #[test]
    fn matching_is_deterministic_across_call_order() {
        let games = vec![game("1", "Azul"), game("2", "Root"), game("3", "Azul")];
        let forward: Vec<_> = ["Azul", "Root", "Wingspan"]
            .iter()
            .map(|t| find_existing(&games, t).map(|g| g.id.clone()))
            .collect();
        let mut backward: Vec<_> = ["Wingspan", "Root", "Azul"]
            .iter()
            .map(|t| find_existing(&games, t).map(|g| g.id.clone()))
            .collect();
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward[0].as_deref(), Some("1"));
    }
}
