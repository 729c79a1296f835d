//! Page data loader. Each load takes a ticket from a monotonically increasing
//! fence; only the completion holding the newest ticket may write. Unmounting
//! advances the fence so late responses are dropped.

use crate::api::ApiError;
use leptos::*;
use std::{future::Future, rc::Rc};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading { previous: Option<T> },
    Ready(T),
    Failed { error: ApiError, previous: Option<T> },
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    /// Latest successful payload, including the one kept through a reload.
    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            LoadState::Loading { previous } | LoadState::Failed { previous, .. } => {
                previous.as_ref()
            }
            LoadState::Idle => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            LoadState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    fn into_data(self) -> Option<T> {
        match self {
            LoadState::Ready(data) => Some(data),
            LoadState::Loading { previous } | LoadState::Failed { previous, .. } => previous,
            LoadState::Idle => None,
        }
    }
}

type RetryFn = Rc<dyn Fn()>;

pub struct Loader<T: 'static> {
    state: RwSignal<LoadState<T>>,
    fence: StoredValue<u64>,
    retry: StoredValue<Option<RetryFn>>,
}

impl<T> Clone for Loader<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Loader<T> {}

impl<T: Clone + 'static> Default for Loader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> Loader<T> {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(LoadState::Idle),
            fence: store_value(0),
            retry: store_value(None),
        }
    }

    pub fn state(&self) -> LoadState<T> {
        self.state.get()
    }

    pub fn data(&self) -> Option<T> {
        self.state.with(|state| state.data().cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(LoadState::is_loading)
    }

    pub fn error(&self) -> Option<ApiError> {
        self.state.with(|state| state.error().cloned())
    }

    /// Opens a new load and returns its ticket. Data already on screen is
    /// carried into `Loading` so it stays visible.
    pub fn begin(&self) -> u64 {
        let ticket = self
            .fence
            .try_update_value(|fence| {
                *fence += 1;
                *fence
            })
            .unwrap_or_default();
        self.state.try_update(|state| {
            let previous = std::mem::take(state).into_data();
            *state = LoadState::Loading { previous };
        });
        ticket
    }

    /// Applies a completion. Returns `false` when the ticket is stale or the
    /// owning page is gone.
    pub fn finish(&self, ticket: u64, result: Result<T, ApiError>) -> bool {
        if self.fence.try_get_value() != Some(ticket) {
            log::debug!("discarding stale load #{}", ticket);
            return false;
        }
        self.state
            .try_update(|state| {
                let previous = std::mem::take(state).into_data();
                *state = match result {
                    Ok(data) => LoadState::Ready(data),
                    Err(error) => LoadState::Failed { error, previous },
                };
            })
            .is_some()
    }

    /// Advances the fence without starting a load.
    pub fn invalidate(&self) {
        self.fence.try_update_value(|fence| *fence += 1);
    }

    pub fn load<F>(&self, fut: F)
    where
        F: Future<Output = Result<T, ApiError>> + 'static,
    {
        let ticket = self.begin();
        let loader = *self;
        spawn_local(async move {
            let result = fut.await;
            loader.finish(ticket, result);
        });
    }

    pub fn retry(&self) {
        if let Some(Some(retry)) = self.retry.try_get_value() {
            retry();
        }
    }

    fn set_retry(&self, retry: RetryFn) {
        self.retry.set_value(Some(retry));
    }

    /// Local edit of the loaded data, e.g. dropping a deleted row.
    pub fn update_data(&self, f: impl FnOnce(&mut T)) {
        self.state.update(|state| match state {
            LoadState::Ready(data) => f(data),
            LoadState::Loading {
                previous: Some(data),
            }
            | LoadState::Failed {
                previous: Some(data),
                ..
            } => f(data),
            _ => {}
        });
    }

    pub fn set_ready(&self, data: T) {
        self.invalidate();
        self.state.set(LoadState::Ready(data));
    }
}

/// Loads on mount and again whenever `source` changes. The returned loader's
/// `retry` re-runs `fetch` with the current source value.
pub fn create_loader<S, T, Fu>(
    source: impl Fn() -> S + 'static,
    fetch: impl Fn(S) -> Fu + 'static,
) -> Loader<T>
where
    S: 'static,
    T: Clone + 'static,
    Fu: Future<Output = Result<T, ApiError>> + 'static,
{
    let loader = Loader::new();
    let source = Rc::new(source);
    let fetch = Rc::new(fetch);

    {
        let source = Rc::clone(&source);
        let fetch = Rc::clone(&fetch);
        loader.set_retry(Rc::new(move || {
            let value = untrack(|| source());
            loader.load(fetch(value));
        }));
    }

    create_effect(move |_| {
        let value = source();
        loader.load(fetch(value));
    });
    on_cleanup(move || loader.invalidate());

    loader
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn stale_completion_is_discarded() {
        with_runtime(|| {
            let loader = Loader::<Vec<u32>>::new();
            let first = loader.begin();
            let second = loader.begin();

            assert!(loader.finish(second, Ok(vec![2])));
            assert!(!loader.finish(first, Ok(vec![1])));
            assert_eq!(loader.data(), Some(vec![2]));
        });
    }

    #[test]
    fn previous_data_stays_visible_while_reloading() {
        with_runtime(|| {
            let loader = Loader::<&'static str>::new();
            let ticket = loader.begin();
            loader.finish(ticket, Ok("first"));

            loader.begin();
            assert!(loader.is_loading());
            assert_eq!(loader.data(), Some("first"));
        });
    }

    #[test]
    fn failure_keeps_previous_data_and_exposes_error() {
        with_runtime(|| {
            let loader = Loader::<u8>::new();
            let ticket = loader.begin();
            loader.finish(ticket, Ok(7));

            let ticket = loader.begin();
            loader.finish(ticket, Err(ApiError::unknown("boom")));
            assert_eq!(loader.error().map(|e| e.message), Some("boom".to_string()));
            assert_eq!(loader.data(), Some(7));
        });
    }

    #[test]
    fn invalidate_drops_in_flight_load() {
        with_runtime(|| {
            let loader = Loader::<u8>::new();
            let ticket = loader.begin();
            loader.invalidate();
            assert!(!loader.finish(ticket, Ok(1)));
            assert_eq!(loader.data(), None);
        });
    }

    #[test]
    fn update_data_edits_ready_payload() {
        with_runtime(|| {
            let loader = Loader::<Vec<i64>>::new();
            loader.set_ready(vec![1, 2, 3]);
            loader.update_data(|items| items.retain(|id| *id != 2));
            assert_eq!(loader.data(), Some(vec![1, 3]));
        });
    }
}
