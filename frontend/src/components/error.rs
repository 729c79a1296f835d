use crate::api::ApiError;
use leptos::*;
use serde_json::Value;

/// Flattens a server `errors` payload (field map or plain list) into lines.
fn validation_messages(details: &Value) -> Vec<String> {
    let collect = |value: &Value| -> Vec<String> {
        match value {
            Value::String(s) => vec![s.clone()],
            Value::Array(items) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    };
    match details {
        Value::Object(fields) => fields.values().flat_map(collect).collect(),
        other => collect(other),
    }
}

#[component]
pub fn InlineErrorMessage(
    error: Signal<Option<ApiError>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
            >
                <div class="flex items-start justify-between gap-3">
                    <div class="font-bold">{move || error.get().map(|e| e.message).unwrap_or_default()}</div>
                    {on_dismiss.map(|dismiss| view! {
                        <button
                            type="button"
                            aria-label="Dismiss"
                            class="text-status-error-text hover:opacity-75"
                            on:click=move |_| dismiss.call(())
                        >
                            {"✕"}
                        </button>
                    })}
                </div>
                {move || error.get().map(|e| {
                    let messages = e
                        .details
                        .as_ref()
                        .map(validation_messages)
                        .unwrap_or_default();
                    if !messages.is_empty() {
                        view! {
                            <ul class="list-disc list-inside text-sm">
                                {messages.into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
                            </ul>
                        }
                        .into_view()
                    } else if e.code != ApiError::UNKNOWN && !e.code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"Code: "}{e.code}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                })}
            </div>
        </Show>
    }
}

/// Banner for a failed page load. Retrying is always a manual click.
#[component]
pub fn LoadFailure(error: Signal<Option<ApiError>>, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div
                role="alert"
                class="flex items-center justify-between gap-3 bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2"
            >
                <span class="text-sm">{move || error.get().map(|e| e.message).unwrap_or_default()}</span>
                <button
                    type="button"
                    class="text-sm font-semibold underline hover:opacity-75"
                    on:click=move |_| on_retry.call(())
                >
                    "Retry"
                </button>
            </div>
        </Show>
    }
}
