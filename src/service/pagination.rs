//! Sequential pagination over the characters endpoint.
//!
//! [`Phase`] is a pure state machine; [`PaginationDriver`] runs it against the Marvel
//! API, one awaited page at a time in increasing offset order.

use sea_orm::DatabaseConnection;

use crate::{
    config::{pagination, Config},
    error::Error,
    marvel::MarvelClient,
    service::hero::HeroService,
};

/// Whether the one-time load has already happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Set once a run reaches [`Phase::Stopped`], for any reason.
    pub already_loaded: bool,
}

/// Page size and offset bound of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Characters requested per page.
    pub limit: u32,
    /// Loading stops once the next offset reaches this value.
    pub max_offset: u32,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            limit: pagination::PAGE_LIMIT,
            max_offset: pagination::MAX_OFFSET,
        }
    }
}

impl From<&Config> for PageWindow {
    fn from(config: &Config) -> Self {
        Self {
            limit: config.page_limit,
            max_offset: config.max_offset,
        }
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The server returned an empty page.
    EndOfData,
    /// A page could not be fetched or decoded, or carried a non-200 code.
    FetchFailed,
    /// The next offset reached the configured bound.
    OffsetLimit,
}

/// Pagination phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// No fetch was issued because the load already happened.
    #[default]
    NotStarted,
    /// The page at `offset` is next.
    Loading {
        /// Offset of the next request.
        offset: u32,
    },
    /// The run is over.
    Stopped(StopReason),
}

/// Result of fetching one page, as seen by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page was fetched and reported `count` rows.
    Fetched {
        /// Rows on the page, `0` at end of data.
        count: u32,
    },
    /// The page could not be fetched.
    Failed,
}

impl Phase {
    /// Initial phase for `state`.
    ///
    /// A zero offset bound stops before the first request.
    pub fn start(state: PaginationState, window: PageWindow) -> Self {
        if state.already_loaded {
            Phase::NotStarted
        } else if window.max_offset == 0 {
            Phase::Stopped(StopReason::OffsetLimit)
        } else {
            Phase::Loading { offset: 0 }
        }
    }

    /// Next phase after a page at the current offset produced `outcome`.
    ///
    /// Only `Loading` moves; any other phase is returned unchanged.
    pub fn advance(self, outcome: PageOutcome, window: PageWindow) -> Self {
        let Phase::Loading { offset } = self else {
            return self;
        };

        match outcome {
            PageOutcome::Failed => Phase::Stopped(StopReason::FetchFailed),
            PageOutcome::Fetched { count: 0 } => Phase::Stopped(StopReason::EndOfData),
            PageOutcome::Fetched { .. } => {
                let next = offset.saturating_add(window.limit);

                if next >= window.max_offset {
                    Phase::Stopped(StopReason::OffsetLimit)
                } else {
                    Phase::Loading { offset: next }
                }
            }
        }
    }

    /// Stop reason, if the run has stopped.
    pub fn stop_reason(&self) -> Option<StopReason> {
        match self {
            Phase::Stopped(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Summary of a pagination run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationReport {
    /// Final phase, `NotStarted` or `Stopped`.
    pub phase: Phase,
    /// Pages successfully fetched, including the final empty one.
    pub pages_fetched: u32,
    /// Heroes stored during the run.
    pub heroes_created: usize,
}

/// Fetches and stores pages until the state machine stops.
pub struct PaginationDriver<'a> {
    db: &'a DatabaseConnection,
    marvel_client: &'a MarvelClient,
    window: PageWindow,
}

impl<'a> PaginationDriver<'a> {
    /// Creates a new instance of [`PaginationDriver`]
    pub fn new(
        db: &'a DatabaseConnection,
        marvel_client: &'a MarvelClient,
        window: PageWindow,
    ) -> Self {
        Self {
            db,
            marvel_client,
            window,
        }
    }

    /// Runs pagination from `state`.
    ///
    /// Fetch failures stop the run and still mark it loaded. Storage failures abort the
    /// run with the current page rolled back and no new state returned.
    ///
    /// # Returns
    /// - `Ok((PaginationState, PaginationReport))` - The state to persist and a run summary
    /// - `Err(Error::DbErr)` - Storing a page failed
    pub async fn run(
        &self,
        state: PaginationState,
    ) -> Result<(PaginationState, PaginationReport), Error> {
        let hero_service = HeroService::new(self.db, self.marvel_client);

        let mut phase = Phase::start(state, self.window);
        let mut report = PaginationReport::default();

        if phase == Phase::NotStarted {
            tracing::info!("Heroes already loaded, skipping fetch");

            return Ok((state, report));
        }

        while let Phase::Loading { offset } = phase {
            let outcome = match self
                .marvel_client
                .get_characters(self.window.limit, offset)
                .await
            {
                Ok(response) => {
                    report.pages_fetched += 1;

                    let page = response.data;
                    if page.is_end_of_data() {
                        PageOutcome::Fetched { count: 0 }
                    } else {
                        let heroes = hero_service.store_page(&page.results).await?;
                        report.heroes_created += heroes.len();

                        PageOutcome::Fetched { count: page.count }
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch characters at offset {}: {}", offset, e);

                    PageOutcome::Failed
                }
            };

            phase = phase.advance(outcome, self.window);
        }

        tracing::info!(
            "Stopped loading heroes ({:?}) after {} pages, {} heroes stored",
            phase.stop_reason(),
            report.pages_fetched,
            report.heroes_created
        );

        report.phase = phase;

        Ok((
            PaginationState {
                already_loaded: true,
            },
            report,
        ))
    }
}
