use crate::{
    api::TimeEntry,
    components::empty_state::EmptyState,
    utils::format::{format_optional_hours, format_time, format_timestamp},
};
use leptos::*;

/// "Recent Activity". Delete only asks; the page confirms and calls the API.
#[component]
pub fn RecentActivity(
    #[prop(into)] entries: Signal<Vec<TimeEntry>>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <h3 class="text-lg font-medium text-fg mb-4">"Recent Activity"</h3>
            <Show
                when=move || entries.with(|e| !e.is_empty())
                fallback=|| view! { <EmptyState title="No recent activity" icon="fa-clock-rotate-left" /> }
            >
                <ul class="divide-y divide-border">
                    <For
                        each=move || entries.get()
                        key=|entry| entry.id
                        children=move |entry| {
                            let id = entry.id;
                            view! {
                                <li class="flex items-center justify-between py-3 text-sm">
                                    <div>
                                        <p class="font-medium text-fg">{format_timestamp(entry.clock_in_time)}</p>
                                        <p class="text-fg-muted">
                                            {format_time(Some(entry.clock_in_time))}" - "{format_time(entry.clock_out_time)}
                                            {entry.entry_type.map(|kind| format!(" ({})", kind))}
                                        </p>
                                        {entry.notes.map(|n| view! { <p class="text-xs text-fg-subtle">{n}</p> })}
                                    </div>
                                    <div class="flex items-center gap-3">
                                        <span class="font-semibold text-fg">{format_optional_hours(entry.total_hours)}</span>
                                        <button
                                            type="button"
                                            aria-label="Delete entry"
                                            class="text-status-error-text hover:opacity-75"
                                            on:click=move |_| on_delete.call(id)
                                        >
                                            <i class="fas fa-trash"></i>
                                        </button>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
