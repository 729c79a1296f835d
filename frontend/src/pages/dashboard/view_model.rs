use super::repository::{self, DashboardSnapshot};
use crate::api::{ApiClient, ApiError};
use crate::state::{
    attendance::{self, run_clock_command, use_attendance, AttendanceStore, ClockCommand},
    auth::use_auth,
    flash::{create_flash, Flash},
    loader::{create_loader, Loader},
    policy::DashboardVariant,
};
use crate::utils::time::today_in_app_tz;
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub variant: Memo<DashboardVariant>,
    pub snapshot: Loader<DashboardSnapshot>,
    pub has_time_clock: Memo<bool>,
    pub attendance: AttendanceStore,
    pub clock_action: Action<ClockCommand, Result<ClockCommand, ApiError>>,
    pub flash: Flash,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let (auth, _) = use_auth();
    let variant = create_memo(move |_| auth.with(|s| s.policy.dashboard()));
    let has_time_clock = create_memo(move |_| auth.with(|s| s.employee_id().is_some()));

    let snapshot = {
        let api = api.clone();
        create_loader(
            move || variant.get(),
            move |variant| {
                let api = api.clone();
                async move { repository::load_dashboard(&api, variant, today_in_app_tz()).await }
            },
        )
    };

    let attendance_store = use_attendance();
    {
        let api = api.clone();
        create_effect(move |_| {
            if !has_time_clock.get() {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                if let Err(err) = attendance::refresh(&api, attendance_store).await {
                    log::warn!("could not load clock status: {}", err);
                }
            });
        });
    }

    let clock_action = create_action(move |command: &ClockCommand| {
        let api = api.clone();
        let command = *command;
        async move {
            run_clock_command(&api, attendance_store, command)
                .await
                .map(|_| command)
        }
    });

    let flash = create_flash();
    create_effect(move |_| {
        if let Some(Ok(command)) = clock_action.value().get() {
            flash.show(command.success_message());
            snapshot.retry();
        }
    });

    DashboardViewModel {
        variant,
        snapshot,
        has_time_clock,
        attendance: attendance_store,
        clock_action,
        flash,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{admin_session, employee_session, provide_auth},
        ssr::with_runtime,
    };

    #[test]
    fn variant_and_time_clock_follow_session() {
        with_runtime(|| {
            provide_auth(Some(admin_session()));
            let vm = use_dashboard_view_model();
            assert_eq!(vm.variant.get(), DashboardVariant::Admin);
            assert!(!vm.has_time_clock.get());
        });
        with_runtime(|| {
            provide_auth(Some(employee_session()));
            let vm = use_dashboard_view_model();
            assert_eq!(vm.variant.get(), DashboardVariant::Employee);
            assert!(vm.has_time_clock.get());
        });
    }
}
