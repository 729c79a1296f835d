use crate::api::{ApiClient, ApiError, ClockStatus, TimeEntry};
use leptos::*;

pub const RECENT_ACTIVITY_LIMIT: u32 = 10;

/// Clock card plus "Recent Activity", shared by the attendance page and the
/// employee dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceState {
    pub status: ClockStatus,
    pub recent: Vec<TimeEntry>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

/// Attendance state plus the fence its refreshes take tickets from. Only the
/// newest refresh may write; unmounting advances the fence.
#[derive(Clone, Copy)]
pub struct AttendanceStore {
    pub state: RwSignal<AttendanceState>,
    fence: StoredValue<u64>,
}

impl AttendanceStore {
    fn new() -> Self {
        Self {
            state: create_rw_signal(AttendanceState::default()),
            fence: store_value(0),
        }
    }

    fn begin(&self) -> u64 {
        let ticket = self
            .fence
            .try_update_value(|fence| {
                *fence += 1;
                *fence
            })
            .unwrap_or_default();
        self.state.try_update(|state| state.loading = true);
        ticket
    }

    /// Writes a refresh outcome unless a newer refresh started since
    /// `ticket` was taken. Returns whether it was applied.
    fn finish(
        &self,
        ticket: u64,
        outcome: &Result<(ClockStatus, Vec<TimeEntry>), ApiError>,
    ) -> bool {
        if self.fence.try_get_value() != Some(ticket) {
            log::debug!("discarding stale attendance refresh #{}", ticket);
            return false;
        }
        self.state
            .try_update(|state| {
                state.loading = false;
                match outcome {
                    Ok((status, recent)) => {
                        state.status = status.clone();
                        state.recent = recent.clone();
                        state.error = None;
                    }
                    Err(error) => state.error = Some(error.clone()),
                }
            })
            .is_some()
    }

    pub fn invalidate(&self) {
        self.fence.try_update_value(|fence| *fence += 1);
    }

    fn fail(&self, error: &ApiError) {
        self.state.try_update(|state| {
            state.loading = false;
            state.error = Some(error.clone());
        });
    }
}

pub fn use_attendance() -> AttendanceStore {
    let store = AttendanceStore::new();
    on_cleanup(move || store.invalidate());
    store
}

pub async fn refresh(api: &ApiClient, store: AttendanceStore) -> Result<(), ApiError> {
    let ticket = store.begin();
    let (status, recent) = futures::join!(
        api.get_clock_status(),
        api.get_recent_entries(RECENT_ACTIVITY_LIMIT)
    );
    let outcome = status.and_then(|status| recent.map(|recent| (status, recent)));
    store.finish(ticket, &outcome);
    outcome.map(|_| ())
}

async fn after_clock_change(
    api: &ApiClient,
    store: AttendanceStore,
    result: Result<TimeEntry, ApiError>,
) -> Result<(), ApiError> {
    match result {
        Ok(entry) => {
            log::info!("time entry {} updated", entry.id);
            refresh(api, store).await
        }
        Err(error) => {
            store.fail(&error);
            Err(error)
        }
    }
}

pub async fn clock_in(
    api: &ApiClient,
    store: AttendanceStore,
    notes: Option<String>,
) -> Result<(), ApiError> {
    store.state.try_update(|state| state.loading = true);
    let result = api.clock_in(notes.as_deref()).await;
    after_clock_change(api, store, result).await
}

pub async fn clock_out(
    api: &ApiClient,
    store: AttendanceStore,
    notes: Option<String>,
) -> Result<(), ApiError> {
    store.state.try_update(|state| state.loading = true);
    let result = api.clock_out(notes.as_deref()).await;
    after_clock_change(api, store, result).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockCommand {
    In,
    Out,
}

impl ClockCommand {
    pub fn success_message(self) -> &'static str {
        match self {
            ClockCommand::In => "Clocked in successfully",
            ClockCommand::Out => "Clocked out successfully",
        }
    }
}

pub async fn run_clock_command(
    api: &ApiClient,
    store: AttendanceStore,
    command: ClockCommand,
) -> Result<(), ApiError> {
    match command {
        ClockCommand::In => clock_in(api, store, None).await,
        ClockCommand::Out => clock_out(api, store, None).await,
    }
}

/// Removes the entry from "Recent Activity" only once the server agreed.
pub async fn delete_entry(api: &ApiClient, store: AttendanceStore, id: i64) -> Result<(), ApiError> {
    match api.delete_time_entry(id).await {
        Ok(()) => {
            store.state.try_update(|state| {
                state.recent.retain(|entry| entry.id != id);
                state.error = None;
            });
            Ok(())
        }
        Err(error) => {
            store.state.try_update(|state| state.error = Some(error.clone()));
            Err(error)
        }
    }
}

pub fn dismiss_error(store: AttendanceStore) {
    store.state.update(|state| state.error = None);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::session::SessionStore;
    use serde_json::json;

    fn api_for(server: &MockServer) -> ApiClient {
        ApiClient::with_session(SessionStore::in_memory()).with_base_url(server.url("/api"))
    }

    fn entry(id: i64) -> serde_json::Value {
        json!({ "id": id, "clockInTime": "2024-03-04T09:00:00", "clockOutTime": "2024-03-04T17:00:00", "totalHours": 8.0 })
    }

    fn seeded() -> AttendanceStore {
        let store = use_attendance();
        store.state.set(AttendanceState {
            recent: vec![
                serde_json::from_value(entry(1)).unwrap(),
                serde_json::from_value(entry(2)).unwrap(),
            ],
            ..AttendanceState::default()
        });
        store
    }

    fn status(clocked_in: bool) -> ClockStatus {
        ClockStatus {
            is_clocked_in: clocked_in,
            ..ClockStatus::default()
        }
    }

    #[tokio::test]
    async fn deleting_an_entry_removes_it_from_recent_activity() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/TimeEntry/1");
            then.status(204).body("");
        });

        let runtime = create_runtime();
        let store = seeded();
        let state = store.state;
        delete_entry(&api_for(&server), store, 1).await.unwrap();

        let ids: Vec<i64> = state.get().recent.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2]);
        assert!(state.get().error.is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_delete_keeps_list_and_sets_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/TimeEntry/1");
            then.status(500).json_body(json!({ "message": "Entry is locked" }));
        });

        let runtime = create_runtime();
        let store = seeded();
        let state = store.state;
        let result = delete_entry(&api_for(&server), store, 1).await;

        assert!(result.is_err());
        assert_eq!(state.get().recent.len(), 2);
        assert_eq!(
            state.get().error.map(|e| e.message),
            Some("Entry is locked".to_string())
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn clock_in_refreshes_status_and_recent() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/TimeEntry/ClockIn");
            then.status(200).json_body(json!({ "id": 3, "clockInTime": "2024-03-05T09:00:00" }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/TimeEntry/CurrentStatus");
            then.status(200).json_body(json!({
                "isClockedIn": true, "timeEntryId": 3, "clockInTime": "2024-03-05T09:00:00"
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/TimeEntry/Recent");
            then.status(200).json_body(json!([{ "id": 3, "clockInTime": "2024-03-05T09:00:00" }]));
        });

        let runtime = create_runtime();
        let store = use_attendance();
        let state = store.state;
        clock_in(&api_for(&server), store, Some("  ".into()))
            .await
            .unwrap();

        let snapshot = state.get();
        assert!(snapshot.status.is_clocked_in);
        assert_eq!(snapshot.recent.len(), 1);
        assert!(!snapshot.loading);
        let clock_in_body = server
            .received()
            .into_iter()
            .find(|r| r.path == "/api/TimeEntry/ClockIn")
            .and_then(|r| r.json);
        assert_eq!(clock_in_body, Some(json!({})));
        runtime.dispose();
    }

    #[test]
    fn superseded_refresh_is_discarded() {
        let runtime = create_runtime();
        let store = use_attendance();
        let older = store.begin();
        let newer = store.begin();

        assert!(store.finish(newer, &Ok((status(false), vec![]))));
        assert!(!store.finish(older, &Ok((status(true), vec![serde_json::from_value(entry(9)).unwrap()]))));

        let snapshot = store.state.get();
        assert!(!snapshot.status.is_clocked_in);
        assert!(snapshot.recent.is_empty());
        assert!(!snapshot.loading);
        runtime.dispose();
    }

    #[test]
    fn refresh_in_flight_at_unmount_is_dropped() {
        let runtime = create_runtime();
        let store = use_attendance();
        let ticket = store.begin();
        store.invalidate();

        assert!(!store.finish(ticket, &Err(ApiError::unknown("late"))));
        assert!(store.state.get().error.is_none());
        runtime.dispose();
    }
}
