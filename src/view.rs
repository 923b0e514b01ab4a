use std::rc::Rc;

use yew::functional::Reducible;

use crate::models::{PersonRecord, ResultSet};
use crate::sync::Endpoint;

/// Everything on the page that mirrors a server response.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LookupView {
    pub live_rows: Vec<PersonRecord>,
    pub filtered_rows: Vec<PersonRecord>,
    pub total_people: Option<u64>,
    pub filtered_count: Option<usize>,
}

pub enum LookupAction {
    Commit(Endpoint, ResultSet),
}

impl Reducible for LookupView {
    type Action = LookupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LookupAction::Commit(Endpoint::LiveData, results) => {
                next.total_people = results.total_people.or(next.total_people);
                next.live_rows = results.records;
            }
            LookupAction::Commit(Endpoint::Filter, results) => {
                next.total_people = results.total_people.or(next.total_people);
                next.filtered_count = Some(results.filtered_count());
                next.filtered_rows = results.records;
            }
        }
        Rc::new(next)
    }
}

/// Text for a counter element; blank until the first response arrives.
pub fn count_label<T: ToString>(count: Option<T>) -> String {
    count.map(|c| c.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: &str) -> PersonRecord {
        PersonRecord {
            entity_id: id.to_string(),
            name: Some("DOE".to_string()),
            forename: None,
            nationalities: None,
            date_of_birth: None,
        }
    }

    fn commit(view: LookupView, endpoint: Endpoint, results: ResultSet) -> LookupView {
        (*Rc::new(view).reduce(LookupAction::Commit(endpoint, results))).clone()
    }

    #[test]
    fn live_commit_replaces_rows_and_total() {
        let before = LookupView {
            live_rows: vec![person("old-1"), person("old-2")],
            total_people: Some(2),
            ..Default::default()
        };
        let after = commit(
            before,
            Endpoint::LiveData,
            ResultSet { records: vec![person("new")], total_people: Some(7321) },
        );

        assert_eq!(after.live_rows, vec![person("new")]);
        assert_eq!(count_label(after.total_people), "7321");
        assert_eq!(after.filtered_count, None);
    }

    #[test]
    fn filter_commit_counts_returned_rows() {
        let after = commit(
            LookupView { total_people: Some(9), ..Default::default() },
            Endpoint::Filter,
            ResultSet { records: vec![person("a"), person("b"), person("c")], total_people: Some(9) },
        );

        assert_eq!(after.filtered_rows.len(), 3);
        assert_eq!(count_label(after.filtered_count), "3");
        assert_eq!(count_label(after.total_people), "9");
        assert!(after.live_rows.is_empty());
    }

    #[test]
    fn empty_results_render_zero_counts() {
        let before = LookupView {
            filtered_rows: vec![person("stale")],
            filtered_count: Some(1),
            ..Default::default()
        };
        let after = commit(
            before,
            Endpoint::Filter,
            ResultSet { records: vec![], total_people: Some(0) },
        );

        assert!(after.filtered_rows.is_empty());
        assert_eq!(count_label(after.total_people), "0");
        assert_eq!(count_label(after.filtered_count), "0");
    }

    #[test]
    fn missing_total_keeps_previous_total() {
        let after = commit(
            LookupView { total_people: Some(12), ..Default::default() },
            Endpoint::Filter,
            ResultSet { records: vec![person("a")], total_people: None },
        );
        assert_eq!(after.total_people, Some(12));
    }

    #[test]
    fn failed_fetch_leaves_view_as_it_was() {
        use crate::sync::{settle, FetchError, RequestGeneration, Settled};

        let before = LookupView {
            live_rows: vec![person("kept")],
            total_people: Some(1),
            ..Default::default()
        };
        let generation = RequestGeneration::default();
        let ticket = generation.begin();

        let mut view = before.clone();
        match settle(&generation, ticket, Err(FetchError::Decode("expected value".to_string()))) {
            Settled::Commit(results) => view = commit(view, Endpoint::LiveData, results),
            Settled::Superseded => {}
            Settled::Failed(err) => assert!(err.to_string().contains("expected value")),
        }
        assert_eq!(view, before);
    }

    #[test]
    fn blank_before_first_response() {
        assert_eq!(count_label::<u64>(None), "");
    }
}
