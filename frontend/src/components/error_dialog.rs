use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDialogProps {
    pub message: AttrValue,
    pub on_close: Callback<MouseEvent>,
}

/// Modal shown for failed operations. A single OK action clears the owning
/// component's error state and nothing else.
#[function_component(ErrorDialog)]
pub fn error_dialog(props: &ErrorDialogProps) -> Html {
    html! {
        <div class="fixed inset-0 z-50 overflow-y-auto">
            <div class="flex min-h-full items-center justify-center p-4">
                // Backdrop
                <div class="fixed inset-0 bg-black/50" onclick={props.on_close.clone()}></div>

                <div
                    class="relative rounded-lg shadow-xl w-full max-w-sm"
                    style="background-color: var(--bg-secondary); border: 1px solid var(--border-primary);"
                >
                    <div class="px-6 py-4">
                        <h3 class="text-lg font-medium" style="color: var(--fg-primary);">{"Error"}</h3>
                        <p class="mt-2 text-sm" style="color: var(--fg-muted);">{&props.message}</p>
                    </div>
                    <div class="px-6 py-4 flex justify-end" style="border-top: 1px solid var(--border-primary);">
                        <button
                            onclick={props.on_close.clone()}
                            class="px-4 py-2 rounded-lg text-sm font-medium"
                            style="background-color: var(--button-primary-bg); color: var(--button-primary-text);"
                        >
                            {"OK"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
