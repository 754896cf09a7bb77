//! Project status cache store
//! 项目状态缓存
//!
//! Owns the per-status buckets, the aggregate counts, the shared loading and
//! error fields, and the in-flight guard that collapses concurrent fetches of
//! one bucket into a single request.
//!
//! The mutex is only ever held between awaits, never across one.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use cn_core::ids::ProjectId;
use cn_core::ports::{LocalDraftStorePort, RemoteProjectError, RemoteProjectPort};
use cn_core::project::{
    normalize_record, AssetUrlResolver, ProjectStatusItem, RemoteProjectRecord, StatusCountSummary,
    StatusFilter, UnifiedStatus,
};

/// Options for [`ProjectStatusStore::fetch_by_status`].
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Refetch even when the bucket already holds items.
    pub force: bool,
    /// Cancelled by the initiating view on teardown; a response arriving after
    /// cancellation is dropped instead of written.
    pub cancel: Option<CancellationToken>,
}

impl FetchOptions {
    pub fn forced() -> Self {
        Self {
            force: true,
            cancel: None,
        }
    }

    pub fn with_cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

/// What a fetch call ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Served from cache, no request issued.
    Cached,
    /// A request was issued and its result written.
    Fetched { count: usize },
    /// Another caller's request for the same bucket was awaited and its
    /// result written.
    Joined,
    /// The response was dropped: the bucket was invalidated meanwhile or the
    /// initiator cancelled.
    Discarded,
    /// The request failed; the shared error field holds the message.
    Failed,
}

impl FetchOutcome {
    /// Whether the cache reflects a completed read after this call.
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            FetchOutcome::Cached | FetchOutcome::Fetched { .. } | FetchOutcome::Joined
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Freshness {
    #[default]
    Unfetched,
    Fresh,
    /// Fetched once, then invalidated. Items stay visible until replaced.
    Stale,
}

#[derive(Debug, Default)]
struct Bucket {
    items: Vec<ProjectStatusItem>,
    generation: u64,
    freshness: Freshness,
}

struct InFlight {
    generation: u64,
    done: watch::Receiver<Option<FetchOutcome>>,
}

#[derive(Default)]
struct StoreState {
    buckets: HashMap<UnifiedStatus, Bucket>,
    counts: StatusCountSummary,
    overview_loaded: bool,
    overview_requests: usize,
    in_flight: HashMap<UnifiedStatus, InFlight>,
    error: Option<String>,
}

/// Removes the in-flight entry and publishes the initiator's outcome to
/// joined callers. A fetching future dropped mid-request publishes
/// `Discarded`.
struct InFlightGuard<'a> {
    store: &'a ProjectStatusStore,
    status: UnifiedStatus,
    done: watch::Sender<Option<FetchOutcome>>,
    outcome: Option<FetchOutcome>,
}

impl InFlightGuard<'_> {
    fn finish(&mut self, outcome: FetchOutcome) -> FetchOutcome {
        self.outcome = Some(outcome);
        outcome
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.store.state().in_flight.remove(&self.status);
        let outcome = self.outcome.unwrap_or(FetchOutcome::Discarded);
        self.done.send_replace(Some(outcome));
    }
}

struct OverviewRequest<'a> {
    store: &'a ProjectStatusStore,
}

impl Drop for OverviewRequest<'_> {
    fn drop(&mut self) {
        let mut state = self.store.state();
        state.overview_requests = state.overview_requests.saturating_sub(1);
    }
}

/// Process-wide cache of maker projects grouped by unified status.
pub struct ProjectStatusStore {
    remote: Arc<dyn RemoteProjectPort>,
    drafts: Arc<dyn LocalDraftStorePort>,
    assets: AssetUrlResolver,
    state: Mutex<StoreState>,
}

impl ProjectStatusStore {
    pub fn new(
        remote: Arc<dyn RemoteProjectPort>,
        drafts: Arc<dyn LocalDraftStorePort>,
        assets: AssetUrlResolver,
    ) -> Self {
        Self {
            remote,
            drafts,
            assets,
            state: Mutex::new(StoreState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load the aggregate per-status counts.
    ///
    /// No-op once loaded unless `force` is set. On failure the previous counts
    /// are kept and the shared error is set.
    #[tracing::instrument(name = "store.fetch_overview", skip(self))]
    pub async fn fetch_overview(&self, force: bool) -> FetchOutcome {
        {
            let mut state = self.state();
            if state.overview_loaded && !force {
                debug!("Overview already loaded, skipping fetch");
                return FetchOutcome::Cached;
            }
            state.overview_requests += 1;
            state.error = None;
        }

        let request = OverviewRequest { store: self };
        let result = self.remote.get_status_counts().await;
        drop(request);

        let mut state = self.state();
        match result {
            Ok(counts) => {
                let statuses = counts.len();
                state.counts = counts;
                state.overview_loaded = true;
                info!(statuses, "Overview counts refreshed");
                FetchOutcome::Fetched { count: statuses }
            }
            Err(err) => {
                warn!(error = %err, "Failed to fetch overview counts");
                state.error = Some(err.user_message());
                FetchOutcome::Failed
            }
        }
    }

    /// Load the bucket for `status`.
    ///
    /// - Populated bucket and no `force`: served from cache.
    /// - Same bucket already being fetched: waits for that request and returns
    ///   [`FetchOutcome::Joined`] (or `Failed`) without issuing another. When
    ///   that request was discarded, a caller that is not itself cancelled
    ///   issues its own.
    /// - Otherwise queries the remote service with the bucket's filter and
    ///   replaces the bucket wholesale. An empty remote result falls back to
    ///   local drafts of the same status.
    #[tracing::instrument(
        name = "store.fetch_by_status",
        skip(self, options),
        fields(status = %status, force = options.force)
    )]
    pub async fn fetch_by_status(&self, status: UnifiedStatus, options: FetchOptions) -> FetchOutcome {
        if options.is_cancelled() {
            debug!("Fetch cancelled before start");
            return FetchOutcome::Discarded;
        }

        let (generation, done) = loop {
            let (joinable, mut done) = {
                let mut guard = self.state();
                let state = &mut *guard;
                let bucket = state.buckets.entry(status).or_default();
                if !options.force && bucket.freshness == Freshness::Fresh && !bucket.items.is_empty() {
                    debug!("Bucket already populated, skipping fetch");
                    return FetchOutcome::Cached;
                }
                let generation = bucket.generation;

                match state.in_flight.get(&status) {
                    Some(in_flight) => (in_flight.generation == generation, in_flight.done.clone()),
                    None => {
                        let (tx, rx) = watch::channel(None);
                        state.in_flight.insert(status, InFlight { generation, done: rx });
                        state.error = None;
                        break (generation, tx);
                    }
                }
            };

            debug!(joinable, "Fetch already in flight, waiting for it");
            let settled = match done.wait_for(Option::is_some).await {
                Ok(outcome) => *outcome,
                Err(_) => None,
            };
            if options.is_cancelled() {
                return FetchOutcome::Discarded;
            }
            // A request that predates an invalidation never counts as joined.
            if !joinable {
                continue;
            }
            match settled {
                Some(FetchOutcome::Failed) => return FetchOutcome::Failed,
                Some(FetchOutcome::Discarded) | None => {
                    debug!("Joined fetch was discarded, fetching again");
                }
                Some(_) => return FetchOutcome::Joined,
            }
        };

        let mut in_flight = InFlightGuard {
            store: self,
            status,
            done,
            outcome: None,
        };

        let outcome = match self
            .remote
            .get_projects_by_filter(StatusFilter::for_status(status))
            .await
        {
            Ok(records) => self.apply_records(status, generation, &options, records).await,
            Err(err) => self.record_fetch_failure(status, generation, &options, &err),
        };
        in_flight.finish(outcome)
    }

    async fn apply_records(
        &self,
        status: UnifiedStatus,
        generation: u64,
        options: &FetchOptions,
        records: Vec<RemoteProjectRecord>,
    ) -> FetchOutcome {
        let items: Vec<ProjectStatusItem> = records
            .into_iter()
            .map(|record| normalize_record(record, &self.assets))
            .collect();

        if items.is_empty() {
            let drafts = self.local_fallback(status).await;
            return self.commit_bucket(status, generation, options, drafts);
        }

        let remote_ids: HashSet<ProjectId> = items.iter().map(|item| item.id.clone()).collect();
        let outcome = self.commit_bucket(status, generation, options, items);
        // Only a response the cache accepted may remove local drafts.
        if matches!(outcome, FetchOutcome::Fetched { .. }) {
            self.prune_promoted_drafts(&remote_ids).await;
        }
        outcome
    }

    async fn local_fallback(&self, status: UnifiedStatus) -> Vec<ProjectStatusItem> {
        match self.drafts.list_drafts_by_status(status).await {
            Ok(drafts) => {
                if !drafts.is_empty() {
                    debug!(count = drafts.len(), "Remote bucket empty, showing local drafts");
                }
                drafts
                    .iter()
                    .map(|draft| ProjectStatusItem::from_draft(draft, &self.assets))
                    .collect()
            }
            Err(err) => {
                warn!(error = %err, "Failed to read local drafts");
                Vec::new()
            }
        }
    }

    /// Local drafts whose id now exists remotely were promoted server-side.
    async fn prune_promoted_drafts(&self, remote_ids: &HashSet<ProjectId>) {
        let drafts = match self.drafts.list_drafts().await {
            Ok(drafts) => drafts,
            Err(err) => {
                warn!(error = %err, "Failed to read local drafts");
                return;
            }
        };

        for draft in drafts.iter().filter(|draft| remote_ids.contains(&draft.id)) {
            match self.drafts.remove_draft(&draft.id).await {
                Ok(()) => info!(draft_id = %draft.id, "Removed local draft promoted to remote project"),
                Err(err) => warn!(draft_id = %draft.id, error = %err, "Failed to remove promoted draft"),
            }
        }
    }

    fn commit_bucket(
        &self,
        status: UnifiedStatus,
        generation: u64,
        options: &FetchOptions,
        items: Vec<ProjectStatusItem>,
    ) -> FetchOutcome {
        if options.is_cancelled() {
            debug!("Initiator cancelled, dropping response");
            return FetchOutcome::Discarded;
        }

        let mut state = self.state();
        let bucket = state.buckets.entry(status).or_default();
        if bucket.generation != generation {
            debug!(
                started = generation,
                current = bucket.generation,
                "Bucket invalidated during fetch, dropping response"
            );
            return FetchOutcome::Discarded;
        }

        let count = items.len();
        bucket.items = items;
        bucket.freshness = Freshness::Fresh;
        info!(count, "Bucket refreshed");
        FetchOutcome::Fetched { count }
    }

    fn record_fetch_failure(
        &self,
        status: UnifiedStatus,
        generation: u64,
        options: &FetchOptions,
        err: &RemoteProjectError,
    ) -> FetchOutcome {
        warn!(error = %err, "Failed to fetch projects");
        if options.is_cancelled() {
            return FetchOutcome::Discarded;
        }

        let mut state = self.state();
        let superseded = state
            .buckets
            .get(&status)
            .is_some_and(|bucket| bucket.generation != generation);
        if superseded {
            return FetchOutcome::Discarded;
        }
        state.error = Some(err.user_message());
        FetchOutcome::Failed
    }

    /// Mark a bucket stale so the next fetch goes to the network and any
    /// request already in flight for it is discarded on arrival.
    pub fn invalidate(&self, status: UnifiedStatus) {
        let mut state = self.state();
        let bucket = state.buckets.entry(status).or_default();
        bucket.generation += 1;
        if bucket.freshness == Freshness::Fresh {
            bucket.freshness = Freshness::Stale;
        }
        debug!(status = %status, generation = bucket.generation, "Bucket invalidated");
    }

    pub fn get_projects_by_status(&self, status: UnifiedStatus) -> Vec<ProjectStatusItem> {
        self.state()
            .buckets
            .get(&status)
            .map(|bucket| bucket.items.clone())
            .unwrap_or_default()
    }

    /// Raw count from the overview summary.
    pub fn get_count_by_status(&self, status: UnifiedStatus) -> u32 {
        self.state().counts.get(&status).copied().unwrap_or(0)
    }

    /// Count to display: the bucket length once that bucket has been fetched,
    /// the overview summary otherwise.
    pub fn count_by_status(&self, status: UnifiedStatus) -> u32 {
        let state = self.state();
        Self::effective_count(&state, status)
    }

    fn effective_count(state: &StoreState, status: UnifiedStatus) -> u32 {
        match state.buckets.get(&status) {
            Some(bucket) if bucket.freshness == Freshness::Fresh => {
                u32::try_from(bucket.items.len()).unwrap_or(u32::MAX)
            }
            _ => state.counts.get(&status).copied().unwrap_or(0),
        }
    }

    pub fn find_item(&self, status: UnifiedStatus, id: &ProjectId) -> Option<ProjectStatusItem> {
        self.state()
            .buckets
            .get(&status)
            .and_then(|bucket| bucket.items.iter().find(|item| &item.id == id).cloned())
    }

    pub fn loading(&self) -> bool {
        let state = self.state();
        state.overview_requests > 0 || !state.in_flight.is_empty()
    }

    /// Last error of any fetch. Shared across all buckets.
    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    pub fn reset_error(&self) {
        self.state().error = None;
    }

    pub(crate) fn record_error(&self, message: String) {
        self.state().error = Some(message);
    }

    pub fn snapshot(&self) -> StatusBoardSnapshot {
        let state = self.state();
        let tabs = UnifiedStatus::ALL
            .into_iter()
            .map(|status| StatusTab {
                status,
                route: status.route_segment(),
                label: status.label(),
                count: Self::effective_count(&state, status),
                items: state
                    .buckets
                    .get(&status)
                    .map(|bucket| bucket.items.clone())
                    .unwrap_or_default(),
            })
            .collect();

        StatusBoardSnapshot {
            tabs,
            loading: state.overview_requests > 0 || !state.in_flight.is_empty(),
            error: state.error.clone(),
        }
    }
}

/// Read-only view of the store for a dashboard render.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StatusBoardSnapshot {
    pub tabs: Vec<StatusTab>,
    pub loading: bool,
    pub error: Option<String>,
}

impl StatusBoardSnapshot {
    pub fn tab(&self, status: UnifiedStatus) -> Option<&StatusTab> {
        self.tabs.iter().find(|tab| tab.status == status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StatusTab {
    pub status: UnifiedStatus,
    pub route: &'static str,
    pub label: &'static str,
    pub count: u32,
    pub items: Vec<ProjectStatusItem>,
}
