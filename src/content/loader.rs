use super::client::{Page, PageWindow, RecordSource};
use super::records::Collection;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FetchKind {
    Replace,
    Append,
}

/// Permit for one in-flight window fetch, handed out by
/// [`PagedLoader::begin_reset`] / [`PagedLoader::begin_load_more`] and
/// redeemed with [`PagedLoader::complete`] or [`PagedLoader::fail`].
///
/// A ticket is consumed on redemption, so an outcome cannot be applied
/// twice. Tickets from a superseded generation (a reset was issued while
/// the fetch was in flight) are dropped on redemption.
#[derive(Debug)]
pub struct FetchTicket {
    window: PageWindow,
    generation: u64,
    kind: FetchKind,
}

impl FetchTicket {
    pub fn window(&self) -> PageWindow {
        self.window
    }
}

/// Incrementally fetches and accumulates collection records with
/// load-more semantics and end-of-collection detection.
///
/// The split-phase `begin_*` / `complete` / `fail` API lets event-driven
/// callers run the fetch outside any borrow of the loader; the async
/// `reset` / `load_more` methods compose the two phases for everyone else.
pub struct PagedLoader<R> {
    source: Arc<dyn RecordSource<R>>,
    page_size: usize,
    items: Vec<R>,
    next_skip: usize,
    has_next: bool,
    is_loading: bool,
    generation: u64,
}

impl<R: Collection> PagedLoader<R> {
    pub fn new(source: Arc<dyn RecordSource<R>>, page_size: usize) -> Self {
        Self {
            source,
            page_size,
            items: Vec::new(),
            next_skip: 0,
            has_next: false,
            is_loading: false,
            generation: 0,
        }
    }

    /// Records accumulated so far, in fetch order.
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// True from `begin_*` until the fetch settles.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The collaborator's end-of-collection flag from the last merged page.
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn source(&self) -> Arc<dyn RecordSource<R>> {
        Arc::clone(&self.source)
    }

    /// Start a fresh load sequence at offset 0. Always permitted; any fetch
    /// still in flight is superseded and its outcome will be dropped.
    pub fn begin_reset(&mut self) -> FetchTicket {
        self.generation += 1;
        self.is_loading = true;
        FetchTicket {
            window: PageWindow {
                skip: 0,
                limit: self.page_size,
            },
            generation: self.generation,
            kind: FetchKind::Replace,
        }
    }

    /// Start fetching the next contiguous window. Refused while a fetch is
    /// outstanding or once the collaborator reported no further window.
    pub fn begin_load_more(&mut self) -> Option<FetchTicket> {
        if self.is_loading || !self.has_next {
            return None;
        }
        self.generation += 1;
        self.is_loading = true;
        Some(FetchTicket {
            window: PageWindow {
                skip: self.next_skip,
                limit: self.page_size,
            },
            generation: self.generation,
            kind: FetchKind::Append,
        })
    }

    /// Merge a fetched page. A replace ticket swaps the accumulated list;
    /// an append ticket extends it in fetch order. Stale tickets are
    /// dropped without touching state.
    pub fn complete(&mut self, ticket: FetchTicket, page: Page<R>) {
        if ticket.generation != self.generation {
            tracing::debug!(collection = R::ID, "dropping stale page response");
            return;
        }
        match ticket.kind {
            FetchKind::Replace => self.items = page.items,
            FetchKind::Append => self.items.extend(page.items),
        }
        self.has_next = page.has_next;
        self.next_skip = ticket.window.skip + self.page_size;
        self.is_loading = false;
    }

    /// Settle a failed fetch: accumulated list, offset, and `has_next` stay
    /// at their pre-call values so the caller can retry.
    pub fn fail(&mut self, ticket: FetchTicket) {
        if ticket.generation != self.generation {
            tracing::debug!(collection = R::ID, "dropping stale fetch failure");
            return;
        }
        self.is_loading = false;
    }

    /// Reset and fetch the first window, replacing the accumulated list.
    pub async fn reset(&mut self) {
        let ticket = self.begin_reset();
        self.run(ticket).await;
    }

    /// Fetch and append the next window. No-op when exhausted or loading.
    pub async fn load_more(&mut self) {
        let Some(ticket) = self.begin_load_more() else {
            return;
        };
        self.run(ticket).await;
    }

    async fn run(&mut self, ticket: FetchTicket) {
        let source = Arc::clone(&self.source);
        match source.fetch_page(ticket.window()).await {
            Ok(page) => self.complete(ticket, page),
            Err(err) => {
                tracing::error!(collection = R::ID, error = %err, "page fetch failed");
                self.fail(ticket);
            }
        }
    }
}
