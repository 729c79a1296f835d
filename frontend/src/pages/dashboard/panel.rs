use super::{
    utils::{build_alerts, dashboard_title, greeting, stats_for},
    view_model::use_dashboard_view_model,
};
use crate::{
    components::{
        cards::{ClockCard, StatCard},
        error::{InlineErrorMessage, LoadFailure},
        layout::{FlashMessage, Layout, LoadingSpinner, PageHeader},
        progress::ProgressBar,
    },
    state::{
        attendance::{dismiss_error, ClockCommand},
        auth::use_auth,
    },
    utils::time::now_in_app_tz,
};
use chrono::Timelike;
use leptos::*;

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let (auth, _) = use_auth();
    let store = vm.attendance;
    let attendance = store.state;
    let snapshot = vm.snapshot;

    let subtitle = auth.with_untracked(|s| {
        let name = s.user().map(|u| u.display_name().to_string()).unwrap_or_default();
        format!("{}, {}", greeting(now_in_app_tz().hour()), name)
    });
    let clock_pending = vm.clock_action.pending();
    let clock_status = Signal::derive(move || attendance.with(|s| s.status.clone()));
    let clock_busy = Signal::derive(move || clock_pending.get() || attendance.with(|s| s.loading));
    let clock_error = Signal::derive(move || attendance.with(|s| s.error.clone()));
    let load_error = Signal::derive(move || snapshot.error());

    view! {
        <Layout>
            <PageHeader title=dashboard_title(vm.variant.get_untracked()) subtitle=subtitle />
            <FlashMessage flash=vm.flash />
            <LoadFailure error=load_error on_retry=Callback::new(move |_| snapshot.retry()) />

            <Show when=move || vm.has_time_clock.get()>
                <div class="mb-6 max-w-xl">
                    <ClockCard
                        status=clock_status
                        pending=clock_busy
                        on_clock_in=Callback::new(move |_| vm.clock_action.dispatch(ClockCommand::In))
                        on_clock_out=Callback::new(move |_| vm.clock_action.dispatch(ClockCommand::Out))
                    />
                    <InlineErrorMessage
                        error=clock_error
                        on_dismiss=Callback::new(move |_| dismiss_error(store))
                    />
                </div>
            </Show>

            {move || {
                if snapshot.is_loading() && snapshot.data().is_none() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                let Some(data) = snapshot.data() else {
                    return ().into_view();
                };
                let stats = stats_for(&data);
                let alerts = build_alerts(&data);
                view! {
                    <dl class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4">
                        {stats
                            .into_iter()
                            .map(|stat| {
                                let value = stat.value.clone();
                                view! {
                                    <StatCard
                                        label=stat.label
                                        value=Signal::derive(move || value.clone())
                                        icon=stat.icon
                                    />
                                }
                            })
                            .collect_view()}
                    </dl>
                    {data.onboarding_percent.map(|percent| view! {
                        <div class="mt-6 bg-surface-elevated shadow rounded-lg p-6">
                            <ProgressBar percent=percent label="Onboarding progress" />
                        </div>
                    })}
                    {(!alerts.is_empty()).then(|| view! {
                        <div class="mt-6 bg-surface-elevated shadow rounded-lg p-6">
                            <h3 class="text-lg font-medium text-fg mb-3">"Needs attention"</h3>
                            <ul class="space-y-2">
                                {alerts
                                    .into_iter()
                                    .map(|alert| view! {
                                        <li class="flex items-center gap-2 text-sm">
                                            <i class="fas fa-circle-exclamation text-status-warning-text"></i>
                                            <a href=alert.href class="text-fg hover:underline">{alert.message}</a>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    })}
                }
                .into_view()
            }}
        </Layout>
    }
}
