//! Fetch Orchestrator
//!
//! "Load next page" over a `CatalogSource`. A page is admitted whole or not at
//! all: any failed detail lookup aborts it, so retrying is always safe.

use futures::future::try_join_all;
use log::{debug, info, warn};

use crate::catalog::Catalog;
use crate::detail::{load_detail, DetailKey, DetailState};
use crate::domain::{CatalogResult, Item};
use crate::remote::CatalogSource;
use crate::state::CatalogEvent;

/// Why a load request did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    InFlight,
    Exhausted,
}

/// Result of a successful (or skipped) load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Appended { added: usize, has_more: bool },
    Skipped(SkipReason),
    /// A reset happened while the page was in flight; the page was dropped
    Superseded,
}

pub struct FetchOrchestrator<S> {
    source: S,
    page_size: usize,
}

impl<S: CatalogSource> FetchOrchestrator<S> {
    pub fn new(source: S, page_size: usize) -> Self {
        Self { source, page_size: page_size.max(1) }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Fetch the page at the current offset and merge it into `catalog`
    pub async fn load_next_page(&self, catalog: &Catalog) -> CatalogResult<LoadOutcome> {
        let guard = catalog.with_state(|s| {
            if s.is_loading() {
                Err(SkipReason::InFlight)
            } else if !s.has_more() {
                Err(SkipReason::Exhausted)
            } else {
                Ok((s.offset(), s.generation()))
            }
        });
        let (offset, generation) = match guard {
            Ok(cursor) => cursor,
            Err(reason) => {
                debug!("load skipped: {:?}", reason);
                return Ok(LoadOutcome::Skipped(reason));
            }
        };

        catalog.dispatch(CatalogEvent::BeginFetch);

        match self.fetch_page(offset).await {
            Ok((items, has_more)) => {
                let (before, current) = catalog.with_state(|s| (s.items().len(), s.generation()));
                catalog.dispatch(CatalogEvent::FetchSucceeded { generation, items, has_more });
                if current != generation {
                    debug!("page at offset {} superseded by reset", offset);
                    return Ok(LoadOutcome::Superseded);
                }
                let added = catalog.with_state(|s| s.items().len()) - before;
                info!("loaded page at offset {}: {} new, has_more={}", offset, added, has_more);
                Ok(LoadOutcome::Appended { added, has_more })
            }
            Err(e) => {
                if catalog.with_state(|s| s.generation()) != generation {
                    debug!("failure at offset {} superseded by reset: {}", offset, e);
                    return Ok(LoadOutcome::Superseded);
                }
                warn!("page at offset {} failed: {}", offset, e);
                catalog.dispatch(CatalogEvent::FetchFailed { generation, message: e.to_string() });
                Err(e)
            }
        }
    }

    /// User-initiated retry. With nothing loaded it starts over; otherwise it
    /// re-requests the failed page at the unchanged offset, keeping items and filters.
    pub async fn retry(&self, catalog: &Catalog) -> CatalogResult<LoadOutcome> {
        if catalog.with_state(|s| s.items().is_empty()) {
            catalog.reset();
        }
        self.load_next_page(catalog).await
    }

    pub async fn categories(&self) -> CatalogResult<Vec<String>> {
        self.source.list_categories().await
    }

    pub async fn detail(&self, key: &DetailKey) -> DetailState {
        load_detail(&self.source, key).await
    }

    /// One page of summaries, each resolved concurrently
    async fn fetch_page(&self, offset: usize) -> CatalogResult<(Vec<Item>, bool)> {
        let page = self.source.list_page(offset, self.page_size).await?;
        let items = try_join_all(
            page.summaries.iter().map(|summary| self.source.get_by_locator(&summary.locator)),
        )
        .await?;
        Ok((items, page.has_more))
    }
}
