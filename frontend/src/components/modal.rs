use leptos::ev::KeyboardEvent;
use leptos::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSize {
    #[default]
    Small,
    Large,
}

impl ModalSize {
    fn width_class(self) -> &'static str {
        match self {
            ModalSize::Small => "max-w-md",
            ModalSize::Large => "max-w-2xl",
        }
    }
}

/// Overlay shell shared by form modals and confirmation prompts. Backdrop
/// clicks, the close button and Escape all route through `on_close`.
#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    #[prop(optional)] size: ModalSize,
    children: ChildrenFn,
) -> impl IntoView {
    let title = Signal::derive(move || title.get());
    let panel_class = format!(
        "relative z-[71] w-full {} rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4 max-h-[90vh] overflow-y-auto",
        size.width_class()
    );

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class=panel_class.clone()
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
