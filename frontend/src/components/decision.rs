use crate::components::{forms::TextAreaField, modal::Modal};
pub use crate::state::approval::Decision;
use leptos::*;

/// Approve/reject prompt with an optional comment, shared by the timesheet
/// and leave approval queues. `on_decide` receives the decision and the raw
/// comment text.
#[component]
pub fn DecisionDialog(
    decision: RwSignal<Option<Decision>>,
    #[prop(into)] subject: Signal<String>,
    #[prop(into)] pending: Signal<bool>,
    on_decide: Callback<(Decision, String)>,
) -> impl IntoView {
    let comments = create_rw_signal(String::new());
    let is_open = Signal::derive(move || decision.with(Option::is_some));
    let title = Signal::derive(move || {
        decision
            .get()
            .map(|d| format!("{} {}", d.label(), subject.get()))
            .unwrap_or_default()
    });
    create_effect(move |_| {
        if decision.with(Option::is_none) {
            comments.set(String::new());
        }
    });
    let close = Callback::new(move |_| decision.set(None));
    let submit = move |_| {
        if let Some(choice) = decision.get_untracked() {
            on_decide.call((choice, comments.get_untracked()));
        }
    };

    view! {
        <Modal is_open=is_open title=title on_close=close>
            <TextAreaField label="Comments (optional)" value=comments />
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                    on:click=move |_| close.call(())
                >
                    "Cancel"
                </button>
                <button
                    type="button"
                    class=move || {
                        let tone = match decision.get() {
                            Some(Decision::Reject) => "bg-action-danger-bg text-action-danger-text",
                            _ => "bg-action-primary-bg text-action-primary-text",
                        };
                        format!("rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}", tone)
                    }
                    disabled=move || pending.get()
                    on:click=submit
                >
                    {move || decision.get().map(Decision::label).unwrap_or_default()}
                </button>
            </div>
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn reject_dialog_uses_danger_tone() {
        let html = render_to_string(|| {
            let decision = create_rw_signal(Some(Decision::Reject));
            view! {
                <DecisionDialog
                    decision=decision
                    subject=Signal::derive(|| "timesheet".to_string())
                    pending=Signal::derive(|| false)
                    on_decide=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Reject timesheet"));
        assert!(html.contains("bg-action-danger-bg"));
        assert!(html.contains("Comments (optional)"));
    }
}
