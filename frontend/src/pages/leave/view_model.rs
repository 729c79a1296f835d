use super::{repository, utils::build_leave_request};
use crate::api::{ApiClient, ApiError, LeaveRequest, LeaveRequestInput};
use crate::state::{
    approval::{create_approval_queue, ApprovalQueue},
    flash::{create_flash, Flash},
    loader::{create_loader, Loader},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LeaveForm {
    pub open: RwSignal<bool>,
    pub leave_type: RwSignal<String>,
    pub start: RwSignal<String>,
    pub end: RwSignal<String>,
    pub reason: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
}

impl LeaveForm {
    fn new() -> Self {
        Self {
            open: create_rw_signal(false),
            leave_type: create_rw_signal(String::new()),
            start: create_rw_signal(String::new()),
            end: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
            error: create_rw_signal(None),
        }
    }

    pub fn reset(&self) {
        self.open.set(false);
        self.leave_type.set(String::new());
        self.start.set(String::new());
        self.end.set(String::new());
        self.reason.set(String::new());
        self.error.set(None);
    }
}

#[derive(Clone, Copy)]
pub struct LeaveViewModel {
    pub requests: Loader<Vec<LeaveRequest>>,
    pub form: LeaveForm,
    pub request_action: Action<LeaveRequestInput, Result<LeaveRequest, ApiError>>,
    pub cancel_target: RwSignal<Option<i64>>,
    pub cancel_action: Action<i64, Result<i64, ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub flash: Flash,
}

impl LeaveViewModel {
    pub fn submit(&self) {
        let form = self.form;
        match build_leave_request(
            &form.leave_type.get_untracked(),
            &form.start.get_untracked(),
            &form.end.get_untracked(),
            &form.reason.get_untracked(),
        ) {
            Ok(input) => {
                form.error.set(None);
                self.request_action.dispatch(input);
            }
            Err(err) => form.error.set(Some(err)),
        }
    }

    pub fn confirm_cancel(&self) {
        if let Some(id) = self.cancel_target.get_untracked() {
            self.cancel_action.dispatch(id);
        }
    }
}

pub fn use_leave_view_model() -> LeaveViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let requests = {
        let api = api.clone();
        create_loader(
            || (),
            move |_| {
                let api = api.clone();
                async move { repository::load_my_requests(&api).await }
            },
        )
    };
    let request_action = {
        let api = api.clone();
        create_action(move |input: &LeaveRequestInput| {
            let api = api.clone();
            let input = input.clone();
            async move { repository::create(&api, input).await }
        })
    };
    let cancel_action = create_action(move |id: &i64| {
        let api = api.clone();
        let id = *id;
        async move { repository::cancel(&api, id).await.map(|_| id) }
    });

    let form = LeaveForm::new();
    let cancel_target = create_rw_signal(None::<i64>);
    let error = create_rw_signal(None::<ApiError>);
    let flash = create_flash();

    create_effect(move |_| match request_action.value().get() {
        Some(Ok(request)) => {
            form.reset();
            requests.update_data(|list| list.insert(0, request));
            flash.show("Leave request submitted");
        }
        Some(Err(err)) => form.error.set(Some(err)),
        None => {}
    });
    create_effect(move |_| {
        let Some(result) = cancel_action.value().get() else {
            return;
        };
        cancel_target.set(None);
        match result {
            Ok(id) => {
                requests.update_data(|list| {
                    if let Some(request) = list.iter_mut().find(|r| r.id == id) {
                        request.status = "Cancelled".into();
                    }
                });
                flash.show("Leave request cancelled");
            }
            Err(err) => error.set(Some(err)),
        }
    });

    LeaveViewModel {
        requests,
        form,
        request_action,
        cancel_target,
        cancel_action,
        error,
        flash,
    }
}

pub fn use_leave_approvals() -> ApprovalQueue<LeaveRequest> {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let fetch_api = api.clone();
    create_approval_queue(
        "Leave request",
        |request: &LeaveRequest| request.id,
        move || {
            let api = fetch_api.clone();
            async move { repository::load_pending(&api).await }
        },
        move |id, decision, comments| {
            let api = api.clone();
            async move { repository::decide(&api, id, decision, &comments).await }
        },
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn invalid_form_stays_local() {
        with_runtime(|| {
            let vm = use_leave_view_model();
            vm.form.leave_type.set("Sick".into());
            vm.form.start.set("2024-04-03".into());
            vm.form.end.set("2024-04-01".into());
            vm.submit();
            assert!(vm.form.error.get().is_some());
            assert_eq!(vm.request_action.version().get_untracked(), 0);
        });
    }

    #[test]
    fn cancel_without_target_does_not_dispatch() {
        with_runtime(|| {
            let vm = use_leave_view_model();
            vm.confirm_cancel();
            assert_eq!(vm.cancel_action.version().get_untracked(), 0);
            assert_eq!(vm.request_action.version().get_untracked(), 0);
        });
    }

    #[test]
    fn reset_clears_form() {
        with_runtime(|| {
            let vm = use_leave_view_model();
            vm.form.open.set(true);
            vm.form.reason.set("Trip".into());
            vm.form.reset();
            assert!(!vm.form.open.get());
            assert!(vm.form.reason.get().is_empty());
        });
    }
}
