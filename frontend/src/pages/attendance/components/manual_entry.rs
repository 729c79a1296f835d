use crate::{
    api::ApiError,
    components::{error::InlineErrorMessage, forms::{TextAreaField, TextField}, modal::Modal},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn ManualEntryModal(
    is_open: Signal<bool>,
    clock_in: RwSignal<String>,
    clock_out: RwSignal<String>,
    notes: RwSignal<String>,
    error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal is_open=is_open title="Add manual entry" on_close=on_close>
            <form
                class="space-y-4"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <TextField label="Clock in" value=clock_in input_type="datetime-local" required=true />
                <TextField label="Clock out" value=clock_out input_type="datetime-local" required=true />
                <TextAreaField label="Notes" value=notes rows=2 />
                <InlineErrorMessage error=error />
                <div class="flex justify-end gap-2">
                    <button
                        type="button"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                        on:click=move |_| on_close.call(())
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Saving..." } else { "Save entry" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
