use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

use crate::sync::Endpoint;

pub const HEADER_ID: &str = "header";
pub const MAIN_BODY_ID: &str = "mainBody";
pub const FILTERED_RESULTS_ID: &str = "filteredResults";

const DISABLE_SCROLLING_CLASS: &str = "disable-scrolling";

/// What the page does once a response has been committed to a table.
#[derive(Debug, PartialEq, Eq)]
pub struct AfterCommit {
    pub scroll_target: Option<&'static str>,
    pub release_scrolling: bool,
}

/// Only the live-data form freezes the page, and only a request the user
/// triggered through it pulls the page down to the live table. Filter
/// results always come into view.
pub fn after_commit(endpoint: Endpoint, clicked: bool) -> AfterCommit {
    match endpoint {
        Endpoint::LiveData if clicked => AfterCommit {
            scroll_target: Some(MAIN_BODY_ID),
            release_scrolling: true,
        },
        Endpoint::LiveData => AfterCommit {
            scroll_target: None,
            release_scrolling: false,
        },
        Endpoint::Filter => AfterCommit {
            scroll_target: Some(FILTERED_RESULTS_ID),
            release_scrolling: false,
        },
    }
}

/// Whether submitting to `endpoint` freezes page scrolling until a response commits.
pub fn freezes_on_submit(endpoint: Endpoint) -> bool {
    endpoint == Endpoint::LiveData
}

pub fn apply(plan: &AfterCommit) {
    if let Some(target) = plan.scroll_target {
        scroll_to(target);
    }
    if plan.release_scrolling {
        set_page_scrolling(true);
    }
}

/// Smooth-scrolls the element with `id` into view. No-op if it is not mounted.
pub fn scroll_to(id: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Toggles the body class that freezes the page while live data is loading.
pub fn set_page_scrolling(enabled: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let classes = body.class_list();
        let _ = if enabled {
            classes.remove_1(DISABLE_SCROLLING_CLASS)
        } else {
            classes.add_1(DISABLE_SCROLLING_CLASS)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_on_mount_stays_put() {
        assert_eq!(
            after_commit(Endpoint::LiveData, false),
            AfterCommit { scroll_target: None, release_scrolling: false }
        );
    }

    #[test]
    fn clicked_live_load_scrolls_and_unfreezes() {
        assert_eq!(
            after_commit(Endpoint::LiveData, true),
            AfterCommit { scroll_target: Some("mainBody"), release_scrolling: true }
        );
    }

    #[test]
    fn filter_results_scroll_into_view() {
        for clicked in [false, true] {
            let plan = after_commit(Endpoint::Filter, clicked);
            assert_eq!(plan.scroll_target, Some("filteredResults"));
        }
    }

    #[test]
    fn filter_never_touches_the_scroll_lock() {
        // A filter request neither freezes the page nor releases a freeze
        // held by a pending live-data request, so a failed filter can't
        // leave the page locked.
        assert!(!freezes_on_submit(Endpoint::Filter));
        assert!(!after_commit(Endpoint::Filter, true).release_scrolling);
        assert!(!after_commit(Endpoint::Filter, false).release_scrolling);
    }

    #[test]
    fn live_submit_freezes_the_page() {
        assert!(freezes_on_submit(Endpoint::LiveData));
    }
}
