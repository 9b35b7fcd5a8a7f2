//! Integration tests for the paged content loader
//!
//! Drives `PagedLoader` against a scripted record source and checks the
//! pagination contract: contiguous windows, replace-on-reset,
//! append-in-order, and failure isolation.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use vitalsense::content::{
    Feature, FetchError, FetchResult, Page, PageWindow, PagedLoader, RecordSource,
};

fn feature(id: &str) -> Feature {
    serde_json::from_str(&format!(r#"{{"_id":"{id}"}}"#)).expect("valid record json")
}

fn page(ids: &[&str], has_next: bool) -> Page<Feature> {
    Page {
        items: ids.iter().map(|id| feature(id)).collect(),
        has_next,
    }
}

fn fetch_error() -> FetchError {
    serde_json::from_str::<serde_json::Value>("not json")
        .expect_err("invalid json")
        .into()
}

/// Replays a fixed list of responses and records every requested window.
struct ScriptedSource {
    responses: Mutex<VecDeque<FetchResult<Page<Feature>>>>,
    windows: Mutex<Vec<PageWindow>>,
}

impl ScriptedSource {
    fn new(responses: Vec<FetchResult<Page<Feature>>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            windows: Mutex::new(Vec::new()),
        })
    }

    fn requested_windows(&self) -> Vec<PageWindow> {
        self.windows.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordSource<Feature> for ScriptedSource {
    async fn fetch_page(&self, window: PageWindow) -> FetchResult<Page<Feature>> {
        self.windows.lock().unwrap().push(window);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(fetch_error()))
    }
}

fn ids(loader: &PagedLoader<Feature>) -> Vec<String> {
    loader.items().iter().map(|f| f.id.clone()).collect()
}

mod pagination_tests {
    use super::*;

    #[tokio::test]
    async fn accumulates_pages_in_fetch_order() {
        let source = ScriptedSource::new(vec![
            Ok(page(&["f1", "f2"], true)),
            Ok(page(&["f3", "f4"], true)),
            Ok(page(&["f5"], false)),
        ]);
        let mut loader = PagedLoader::new(source.clone(), 2);

        loader.reset().await;
        loader.load_more().await;
        loader.load_more().await;

        assert_eq!(ids(&loader), ["f1", "f2", "f3", "f4", "f5"]);
        assert!(!loader.has_next());
        assert!(!loader.is_loading());

        // Windows are requested at strictly contiguous offsets.
        let windows = source.requested_windows();
        assert_eq!(
            windows,
            vec![
                PageWindow { skip: 0, limit: 2 },
                PageWindow { skip: 2, limit: 2 },
                PageWindow { skip: 4, limit: 2 },
            ]
        );
    }

    #[tokio::test]
    async fn double_reset_yields_single_first_page() {
        let source = ScriptedSource::new(vec![
            Ok(page(&["f1", "f2"], true)),
            Ok(page(&["f1", "f2"], true)),
        ]);
        let mut loader = PagedLoader::new(source.clone(), 2);

        loader.reset().await;
        loader.reset().await;

        assert_eq!(ids(&loader), ["f1", "f2"]);
        let windows = source.requested_windows();
        assert_eq!(windows[0].skip, 0);
        assert_eq!(windows[1].skip, 0);
    }

    #[tokio::test]
    async fn reset_after_load_more_replaces_accumulated_list() {
        let source = ScriptedSource::new(vec![
            Ok(page(&["f1"], true)),
            Ok(page(&["f2"], true)),
            Ok(page(&["f1"], true)),
        ]);
        let mut loader = PagedLoader::new(source, 1);

        loader.reset().await;
        loader.load_more().await;
        assert_eq!(ids(&loader), ["f1", "f2"]);

        loader.reset().await;
        assert_eq!(ids(&loader), ["f1"]);
    }

    #[tokio::test]
    async fn load_more_refused_once_exhausted() {
        let source = ScriptedSource::new(vec![Ok(page(&["f1"], false))]);
        let mut loader = PagedLoader::new(source.clone(), 6);

        loader.reset().await;
        loader.load_more().await;
        loader.load_more().await;

        assert_eq!(ids(&loader), ["f1"]);
        assert_eq!(source.requested_windows().len(), 1);
    }

    #[tokio::test]
    async fn empty_first_page_yields_empty_list() {
        let source = ScriptedSource::new(vec![Ok(page(&[], false))]);
        let mut loader = PagedLoader::new(source, 6);

        loader.reset().await;

        assert!(loader.items().is_empty());
        assert!(!loader.has_next());
        assert!(!loader.is_loading());
    }

    #[tokio::test]
    async fn short_page_trusts_reported_flag() {
        // One record against a window of three: the collaborator's flag,
        // not the returned length, decides whether more pages exist.
        let source = ScriptedSource::new(vec![Ok(page(&["f1"], true)), Ok(page(&["f2"], false))]);
        let mut loader = PagedLoader::new(source, 3);

        loader.reset().await;
        assert!(loader.has_next());

        loader.load_more().await;
        assert_eq!(ids(&loader), ["f1", "f2"]);
        assert!(!loader.has_next());
    }
}

mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn failed_fetch_leaves_state_unchanged() {
        let source = ScriptedSource::new(vec![
            Ok(page(&["f1", "f2"], true)),
            Err(fetch_error()),
            Ok(page(&["f3"], false)),
        ]);
        let mut loader = PagedLoader::new(source, 2);

        loader.reset().await;
        loader.load_more().await; // fails

        assert_eq!(ids(&loader), ["f1", "f2"]);
        assert!(loader.has_next());
        assert!(!loader.is_loading());

        // The cleared loading flag allows a retry, which resumes at the
        // same offset.
        loader.load_more().await;
        assert_eq!(ids(&loader), ["f1", "f2", "f3"]);
    }

    #[tokio::test]
    async fn failed_first_fetch_keeps_list_empty() {
        let source = ScriptedSource::new(vec![Err(fetch_error())]);
        let mut loader = PagedLoader::new(source, 6);

        loader.reset().await;

        assert!(loader.items().is_empty());
        assert!(!loader.has_next());
        assert!(!loader.is_loading());
    }
}

mod reentrancy_tests {
    use super::*;

    #[tokio::test]
    async fn load_more_refused_while_fetch_in_flight() {
        let source = ScriptedSource::new(vec![]);
        let mut loader = PagedLoader::new(source, 2);

        let ticket = loader.begin_reset();
        assert!(loader.is_loading());
        assert!(loader.begin_load_more().is_none());

        loader.complete(ticket, page(&["f1"], true));
        assert!(!loader.is_loading());
        assert!(loader.begin_load_more().is_some());
    }

    #[tokio::test]
    async fn superseded_completion_is_dropped() {
        let source = ScriptedSource::new(vec![]);
        let mut loader = PagedLoader::new(source, 2);

        let stale = loader.begin_reset();
        let fresh = loader.begin_reset();

        loader.complete(stale, page(&["old"], true));
        assert!(loader.items().is_empty());
        assert!(loader.is_loading());

        loader.complete(fresh, page(&["new"], false));
        assert_eq!(ids(&loader), ["new"]);
        assert!(!loader.is_loading());
    }

    #[tokio::test]
    async fn superseded_failure_is_dropped() {
        let source = ScriptedSource::new(vec![]);
        let mut loader = PagedLoader::new(source, 2);

        let stale = loader.begin_reset();
        let fresh = loader.begin_reset();

        loader.fail(stale);
        assert!(loader.is_loading());

        loader.complete(fresh, page(&["f1"], false));
        assert_eq!(ids(&loader), ["f1"]);
    }
}
