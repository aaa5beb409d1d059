use clueboard_core::{CategoryData, CategoryId, ClueSource};
use std::future::Future;
use thiserror::Error;

use crate::*;

pub const CATEGORIES_PATH: &str = "categories";
pub const CLUES_PATH: &str = "clues";

/// Failure reported by a [`Transport`], kept opaque.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Minimal HTTP-like GET, implemented by whatever client the host has at hand.
pub trait Transport {
    /// Body of `path` relative to the service root, with `query` appended.
    fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> impl Future<Output = std::result::Result<String, TransportError>>;
}

/// [`ClueSource`] backed by the trivia service's JSON listings.
#[derive(Clone, Debug)]
pub struct ServiceSource<T> {
    transport: T,
}

impl<T: Transport> ServiceSource<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn category_ids(&self, pool_size: u32, offset: u32) -> Result<Vec<CategoryId>> {
        let query = [("count", pool_size.to_string()), ("offset", offset.to_string())];
        log::debug!("GET {} {:?}", CATEGORIES_PATH, query);
        let body = self.transport.get(CATEGORIES_PATH, &query).await?;
        parse_category_ids(&body)
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryData> {
        let query = [("category", id.to_string())];
        log::debug!("GET {} {:?}", CLUES_PATH, query);
        let body = self.transport.get(CLUES_PATH, &query).await?;
        parse_category(id, &body)
    }
}

impl<T: Transport> ClueSource for ServiceSource<T> {
    async fn fetch_category_ids(
        &self,
        pool_size: u32,
        offset: u32,
    ) -> clueboard_core::Result<Vec<CategoryId>> {
        Ok(self.category_ids(pool_size, offset).await?)
    }

    async fn fetch_category(&self, id: CategoryId) -> clueboard_core::Result<CategoryData> {
        Ok(self.category(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clueboard_core::{GameConfig, GameError, GameSession, RevealState};
    use std::cell::RefCell;
    use std::collections::HashMap;

    type Request = (String, Vec<(String, String)>);

    /// Serves canned bodies keyed by path and first query value.
    #[derive(Default)]
    struct CannedTransport {
        bodies: HashMap<(String, String), String>,
        requests: RefCell<Vec<Request>>,
    }

    impl CannedTransport {
        fn with_body(mut self, path: &str, key: &str, body: impl Into<String>) -> Self {
            self.bodies.insert((path.into(), key.into()), body.into());
            self
        }

        fn trivia(categories: u64, clues: u64) -> Self {
            let listing: Vec<_> = (0..categories)
                .map(|id| format!(r#"{{"id": {id}, "title": "category {id}"}}"#))
                .collect();
            let mut transport =
                Self::default().with_body(CATEGORIES_PATH, "*", format!("[{}]", listing.join(",")));
            for id in 0..categories {
                let records: Vec<_> = (0..clues)
                    .map(|n| {
                        format!(
                            r#"{{"id": {n}, "question": "question {id}.{n}", "answer": "<i>answer {id}.{n}</i>", "category": {{"id": {id}, "title": "category {id}"}}}}"#
                        )
                    })
                    .collect();
                transport = transport.with_body(
                    CLUES_PATH,
                    &id.to_string(),
                    format!("[{}]", records.join(",")),
                );
            }
            transport
        }
    }

    impl Transport for CannedTransport {
        async fn get(
            &self,
            path: &str,
            query: &[(&str, String)],
        ) -> std::result::Result<String, TransportError> {
            self.requests.borrow_mut().push((
                path.into(),
                query
                    .iter()
                    .map(|(key, value)| ((*key).into(), value.clone()))
                    .collect(),
            ));
            let key = if path == CATEGORIES_PATH {
                "*".into()
            } else {
                query.first().map(|(_, value)| value.clone()).unwrap_or_default()
            };
            self.bodies
                .get(&(path.to_string(), key))
                .cloned()
                .ok_or_else(|| TransportError(format!("404 for {path}")))
        }
    }

    #[tokio::test]
    async fn category_ids_request_uses_count_and_offset() {
        let source = ServiceSource::new(CannedTransport::trivia(3, 1));

        let ids = source.fetch_category_ids(100, 42).await.unwrap();

        assert_eq!(ids, vec![0, 1, 2]);
        let requests = source.transport().requests.borrow();
        assert_eq!(
            requests[0],
            (
                "categories".to_string(),
                vec![
                    ("count".to_string(), "100".to_string()),
                    ("offset".to_string(), "42".to_string())
                ]
            )
        );
    }

    #[tokio::test]
    async fn category_request_uses_category_id() {
        let source = ServiceSource::new(CannedTransport::trivia(3, 2));

        let data = source.fetch_category(2).await.unwrap();

        assert_eq!(data.title, "category 2");
        assert_eq!(data.clues.len(), 2);
        let requests = source.transport().requests.borrow();
        assert_eq!(
            requests[0],
            (
                "clues".to_string(),
                vec![("category".to_string(), "2".to_string())]
            )
        );
    }

    #[tokio::test]
    async fn failures_surface_as_source_unavailable() {
        let source = ServiceSource::new(CannedTransport::default());
        assert!(matches!(
            source.fetch_category_ids(100, 1).await,
            Err(GameError::SourceUnavailable(_))
        ));

        let source = ServiceSource::new(
            CannedTransport::default().with_body(CLUES_PATH, "9", "not json"),
        );
        assert!(matches!(
            source.fetch_category(9).await,
            Err(GameError::SourceUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn full_game_over_service_source() {
        let source = ServiceSource::new(CannedTransport::trivia(6, 5));
        let mut session = GameSession::new(GameConfig::default());

        let board = session.new_game(&source, 4).await.unwrap();
        let cell = board.resolve("2-4").unwrap();
        let question = board[cell].question().to_string();
        let answer = board[cell].answer().to_string();
        assert!(!answer.contains("<i>"));

        assert_eq!(session.reveal("2-4").unwrap().display, Some(question.as_str()));
        assert_eq!(session.reveal("2-4").unwrap().display, Some(answer.as_str()));
        assert_eq!(session.reveal("2-4").unwrap().display, None);
        assert_eq!(session.state_at(cell), Ok(RevealState::Answer));

        // one listing request, then one request per category
        assert_eq!(source.transport().requests.borrow().len(), 7);
    }

    #[tokio::test]
    async fn short_category_aborts_game() {
        let transport = CannedTransport::trivia(6, 5).with_body(
            CLUES_PATH,
            "3",
            r#"[
                {"id": 1, "question": "q1", "answer": "a1", "category": {"id": 3, "title": "short"}},
                {"id": 2, "question": "q2", "answer": "a2"},
                {"id": 3, "question": "q3", "answer": "a3"},
                {"id": 4, "question": "q4", "answer": "a4"}
            ]"#,
        );
        let source = ServiceSource::new(transport);
        let mut session = GameSession::default();

        let result = session.new_game(&source, 4).await;

        assert_eq!(
            result.err(),
            Some(GameError::InsufficientCandidates {
                requested: 5,
                available: 4
            })
        );
        assert!(!session.is_ready());
    }
}
