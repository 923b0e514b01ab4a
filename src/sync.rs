//! Posting to the data endpoints and deciding whether a response may be shown.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use log::debug;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

use crate::config;
use crate::models::ResultSet;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Endpoint {
    LiveData,
    Filter,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::LiveData => config::LIVE_DATA_PATH,
            Endpoint::Filter => config::FILTER_PATH,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Endpoint::LiveData => "live data",
            Endpoint::Filter => "filtered data",
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Monotonic ticket source for one table. Only the response holding the
/// latest ticket is allowed to reach the view.
#[derive(Clone, Default, Debug)]
pub struct RequestGeneration(Rc<Cell<u64>>);

impl RequestGeneration {
    pub fn begin(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

#[derive(Debug)]
pub enum Settled {
    Commit(ResultSet),
    Superseded,
    Failed(FetchError),
}

pub fn settle(generation: &RequestGeneration, ticket: u64, outcome: Result<ResultSet, FetchError>) -> Settled {
    match outcome {
        Err(err) => Settled::Failed(err),
        Ok(_) if !generation.is_current(ticket) => Settled::Superseded,
        Ok(results) => Settled::Commit(results),
    }
}

pub async fn fetch_results(endpoint: Endpoint, body: Option<String>) -> Result<ResultSet, FetchError> {
    let url = format!("{}{}", config::get_backend_url(), endpoint.path());
    let request = match body {
        Some(body) => Request::post(&url)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(body),
        None => Request::post(&url),
    };

    let response = request.send().await?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<ResultSet>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Posts `body` to `endpoint` and hands the decoded result to `on_commit`,
/// unless a newer submission on the same generation started meanwhile.
/// Failures are logged once and leave the view untouched.
pub fn submit_and_render(
    endpoint: Endpoint,
    body: Option<String>,
    generation: RequestGeneration,
    on_commit: Callback<ResultSet>,
) {
    let ticket = generation.begin();
    spawn_local(async move {
        let outcome = fetch_results(endpoint, body).await;
        match settle(&generation, ticket, outcome) {
            Settled::Commit(results) => on_commit.emit(results),
            Settled::Superseded => {
                debug!("Dropping {} response #{}, a newer request is in flight", endpoint.label(), ticket);
            }
            Settled::Failed(err) => {
                gloo_console::error!(format!("Error fetching {}: {}", endpoint.label(), err));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonRecord;

    fn results_with(ids: &[&str]) -> ResultSet {
        ResultSet {
            records: ids
                .iter()
                .map(|id| PersonRecord {
                    entity_id: id.to_string(),
                    name: None,
                    forename: None,
                    nationalities: None,
                    date_of_birth: None,
                })
                .collect(),
            total_people: Some(ids.len() as u64),
        }
    }

    #[test]
    fn tickets_increase_per_submission() {
        let generation = RequestGeneration::default();
        let first = generation.begin();
        let second = generation.begin();
        assert!(second > first);
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn clones_share_one_counter() {
        let generation = RequestGeneration::default();
        let handle = generation.clone();
        let ticket = generation.begin();
        assert!(handle.is_current(ticket));
        assert!(!RequestGeneration::default().is_current(ticket));
    }

    #[test]
    fn only_latest_response_commits() {
        let generation = RequestGeneration::default();
        let slow = generation.begin();
        let fast = generation.begin();

        match settle(&generation, fast, Ok(results_with(&["new"]))) {
            Settled::Commit(results) => assert_eq!(results.records[0].entity_id, "new"),
            other => panic!("expected commit, got {:?}", other),
        }
        assert!(matches!(
            settle(&generation, slow, Ok(results_with(&["old"]))),
            Settled::Superseded
        ));
    }

    #[test]
    fn failure_is_reported_not_committed() {
        let generation = RequestGeneration::default();
        let ticket = generation.begin();
        let settled = settle(&generation, ticket, Err(FetchError::Status(500)));
        match settled {
            Settled::Failed(err) => assert_eq!(err.to_string(), "server responded with status 500"),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn endpoints_map_to_server_paths() {
        assert_eq!(Endpoint::LiveData.path(), "/live_data");
        assert_eq!(Endpoint::Filter.path(), "/filter");
    }
}
