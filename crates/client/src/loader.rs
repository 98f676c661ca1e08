//! View loaders: one in-flight fetch per view, scoped to the view's lifetime.
//!
//! A [`ViewLoader`] owns the [`ViewState`] of one view and publishes it on a
//! `watch` channel. Each [`ViewLoader::load`] bumps a generation counter;
//! a fetch result is only written if its generation is still current and
//! the view has not been unmounted. Unmounting (or dropping the loader)
//! cancels the in-flight fetch.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tokio_util::sync::CancellationToken;

use raildash_core::report::TrainReport;
use raildash_core::view::ViewState;

use crate::api::TrainDataApi;

/// Why a view could not be brought to a settled state.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The fetch task panicked or was aborted.
    #[error("Fetch task failed: {0}")]
    Task(#[from] JoinError),

    /// The fetch finished without settling the view (unmounted or superseded).
    #[error("View did not settle")]
    Unsettled,
}

/// State holder for a single data-backed view.
pub struct ViewLoader<T> {
    state: Arc<watch::Sender<ViewState<T>>>,
    generation: Arc<AtomicU64>,
    cancel: CancellationToken,
}

impl<T: Send + Sync + 'static> ViewLoader<T> {
    /// A mounted view in the `Loading` state.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ViewState::Loading);
        Self {
            state: Arc::new(tx),
            generation: Arc::new(AtomicU64::new(0)),
            cancel: CancellationToken::new(),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState<T>
    where
        T: Clone,
    {
        self.state.borrow().clone()
    }

    pub fn is_mounted(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// Start a fetch and settle the view with its result.
    ///
    /// Resets the view to `Loading` first. The returned handle resolves to
    /// `true` if the result was written, `false` if it was discarded
    /// (superseded by a newer load, or the view was unmounted).
    pub fn load<F>(&self, fetch: F) -> JoinHandle<bool>
    where
        F: Future<Output = ViewState<T>> + Send + 'static,
    {
        if !self.is_mounted() {
            return tokio::spawn(async { false });
        }

        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(ViewState::Loading);

        let state = Arc::clone(&self.state);
        let generation = Arc::clone(&self.generation);
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!(generation = my_generation, "View unmounted, fetch abandoned");
                    false
                }
                next = fetch => {
                    if cancel.is_cancelled() {
                        return false;
                    }
                    state.send_if_modified(|current| {
                        generation.load(Ordering::SeqCst) == my_generation && current.settle(next)
                    })
                }
            }
        })
    }

    /// Run `fetch` to completion and return the settled state.
    pub async fn load_settled<F>(&self, fetch: F) -> Result<ViewState<T>, LoadError>
    where
        F: Future<Output = ViewState<T>> + Send + 'static,
        T: Clone,
    {
        self.load(fetch).await?;
        let state = self.state();
        if state.is_loading() {
            return Err(LoadError::Unsettled);
        }
        Ok(state)
    }

    /// Tear the view down. In-flight results are discarded from now on.
    pub fn unmount(&self) {
        self.cancel.cancel();
    }
}

impl<T: Send + Sync + 'static> Default for ViewLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ViewLoader<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

// ---------------------------------------------------------------------------
// Dashboard fetches
// ---------------------------------------------------------------------------

/// Fetch the list view's data. Failures are logged and become `Error`.
pub async fn fetch_list_state(api: TrainDataApi) -> ViewState<Vec<TrainReport>> {
    let result = api.list_trains().await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Error fetching train data");
    }
    ViewState::from_collection(result)
}

/// Fetch the detail view's data. A missing train becomes `Empty`.
pub async fn fetch_detail_state(api: TrainDataApi, train_id: String) -> ViewState<TrainReport> {
    ViewState::from_lookup(api.get_train(&train_id).await)
}
