use crate::components::modal::Modal;
use leptos::*;

const CONFIRM_CLASS: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50";

/// Gate in front of destructive actions. `pending` disables the confirm
/// button while the delete is in flight.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let message = Signal::derive(move || message.get());
    let pending = Signal::derive(move || pending.get());
    let tone = if destructive {
        "bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
    } else {
        "bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
    };
    let confirm_text = confirm_label
        .filter(|label| !label.trim().is_empty())
        .unwrap_or_else(|| if destructive { "Delete" } else { "Confirm" }.to_string());

    view! {
        <Modal is_open=is_open title=title on_close=on_cancel>
            <p class="text-sm text-fg-muted">{move || message.get()}</p>
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                    on:click=move |_| on_cancel.call(())
                >
                    "Cancel"
                </button>
                <button
                    type="button"
                    class=format!("{} {}", CONFIRM_CLASS, tone)
                    disabled=move || pending.get()
                    on:click=move |_| on_confirm.call(())
                >
                    {
                        let confirm_text = confirm_text.clone();
                        move || if pending.get() { "Working...".to_string() } else { confirm_text.clone() }
                    }
                </button>
            </div>
        </Modal>
    }
}
