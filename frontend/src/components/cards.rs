use crate::{
    api::ClockStatus,
    utils::{
        format::{format_elapsed, format_time},
        time::now_naive,
    },
};
use chrono::NaiveDateTime;
use leptos::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] icon: Option<String>,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6 flex items-start gap-4">
                {icon.map(|icon| view! {
                    <div class="w-10 h-10 flex items-center justify-center rounded-xl bg-surface-muted text-action-primary-bg">
                        <i class=format!("fas {}", icon)></i>
                    </div>
                })}
                <div>
                    <dt class="text-sm font-medium text-fg-muted">{label}</dt>
                    <dd class="mt-1 text-2xl font-semibold text-fg">{move || value.get()}</dd>
                    {hint.map(|hint| view! { <p class="mt-1 text-xs text-fg-muted">{hint}</p> })}
                </div>
            </div>
        </div>
    }
}

/// Ticks once per second while mounted. Static on the host.
fn use_clock_tick() -> ReadSignal<NaiveDateTime> {
    let (now, set_now) = create_signal(now_naive());
    #[cfg(target_arch = "wasm32")]
    {
        let interval = gloo_timers::callback::Interval::new(1_000, move || {
            set_now.set(now_naive());
        });
        on_cleanup(move || drop(interval));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_now;
    now
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockButtonFlags {
    pub clock_in: bool,
    pub clock_out: bool,
}

pub fn clock_button_flags(is_clocked_in: bool, pending: bool) -> ClockButtonFlags {
    if pending {
        return ClockButtonFlags::default();
    }
    ClockButtonFlags {
        clock_in: !is_clocked_in,
        clock_out: is_clocked_in,
    }
}

#[component]
pub fn ClockCard(
    #[prop(into)] status: Signal<ClockStatus>,
    #[prop(into)] pending: Signal<bool>,
    on_clock_in: Callback<()>,
    on_clock_out: Callback<()>,
) -> impl IntoView {
    let now = use_clock_tick();
    let flags = move || clock_button_flags(status.with(|s| s.is_clocked_in), pending.get());
    let elapsed = move || {
        status
            .with(|s| s.clock_in_time.filter(|_| s.is_clocked_in))
            .map(|since| format_elapsed(since, now.get()))
            .unwrap_or_else(|| "00:00:00".to_string())
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-5">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-xs font-bold text-action-primary-bg uppercase tracking-wider">"Current status"</p>
                    {move || {
                        let (label, dot) = if status.with(|s| s.is_clocked_in) {
                            ("Clocked in", "bg-status-success-text animate-pulse")
                        } else {
                            ("Clocked out", "bg-status-neutral-text")
                        };
                        view! {
                            <div class="flex items-center gap-2 mt-1">
                                <span class=format!("w-2 h-2 rounded-full {}", dot)></span>
                                <span class="text-lg font-bold text-fg">{label}</span>
                            </div>
                        }
                    }}
                </div>
                <div class="text-right">
                    <p class="font-mono text-3xl font-semibold text-fg" aria-live="polite">{elapsed}</p>
                    <p class="text-xs text-fg-muted">
                        "Since "{move || format_time(status.with(|s| s.clock_in_time.filter(|_| s.is_clocked_in)))}
                    </p>
                </div>
            </div>
            <div class="grid grid-cols-2 gap-3">
                <button
                    class="flex items-center justify-center gap-2 p-3 rounded-xl font-bold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-40"
                    disabled=move || !flags().clock_in
                    on:click=move |_| on_clock_in.call(())
                >
                    <i class="fas fa-sign-in-alt"></i>
                    "Clock In"
                </button>
                <button
                    class="flex items-center justify-center gap-2 p-3 rounded-xl font-bold border-2 border-action-danger-bg text-action-danger-bg hover:bg-status-error-bg disabled:opacity-40"
                    disabled=move || !flags().clock_out
                    on:click=move |_| on_clock_out.call(())
                >
                    <i class="fas fa-sign-out-alt"></i>
                    "Clock Out"
                </button>
            </div>
        </div>
    }
}
