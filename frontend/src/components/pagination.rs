use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: u32,
    pub total_pages: u32,
    pub on_page_change: Callback<u32>,
}

/// Page indicators for the invoice table. Purely presentational: emits the
/// selected page and owns no state of its own.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let current = props.current_page;
    let total = props.total_pages;

    let go_to = |page: u32| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_| on_page_change.emit(page))
    };

    html! {
        <div class="flex items-center justify-center space-x-2 mt-4">
            <button
                onclick={go_to(current.saturating_sub(1))}
                disabled={current <= 1}
                class="px-3 py-1 rounded text-sm disabled:opacity-50 disabled:cursor-not-allowed"
                style="background-color: var(--button-secondary-bg); color: var(--fg-secondary);"
            >
                {"Previous"}
            </button>
            { for (1..=total).map(|page| {
                let is_current = page == current;
                let style = if is_current {
                    "background-color: var(--button-primary-bg); color: var(--button-primary-text);"
                } else {
                    "background-color: var(--button-secondary-bg); color: var(--fg-secondary);"
                };
                html! {
                    <button
                        key={page}
                        onclick={go_to(page)}
                        disabled={is_current}
                        class="px-3 py-1 rounded text-sm"
                        {style}
                    >
                        {page}
                    </button>
                }
            })}
            <button
                onclick={go_to(current + 1)}
                disabled={current >= total}
                class="px-3 py-1 rounded text-sm disabled:opacity-50 disabled:cursor-not-allowed"
                style="background-color: var(--button-secondary-bg); color: var(--fg-secondary);"
            >
                {"Next"}
            </button>
        </div>
    }
}
