use chrono::NaiveDate;
use yew::prelude::*;

use invoices_shared::FilterSet;

const QUANTITY_MAX: u32 = 100;
const UNIT_PRICE_MAX: u32 = 1000;
const TOTAL_VALUE_MAX: u32 = 10000;

#[derive(Properties, PartialEq)]
pub struct FilterDialogProps {
    pub is_open: bool,
    pub on_close: Callback<MouseEvent>,
    /// Receives the normalized filter set; the caller stores it and resets
    /// to page 1.
    pub on_apply: Callback<FilterSet>,
}

/// Collects list filters: free-text fields, a date range and three min/max
/// slider pairs. Stays mounted while hidden so the criteria accumulate
/// across openings until the table clears them.
#[function_component(FilterDialog)]
pub fn filter_dialog(props: &FilterDialogProps) -> Html {
    let filters = use_state(FilterSet::default);

    let on_text = |write: fn(&mut FilterSet, Option<String>)| {
        let filters = filters.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            let mut updated = (*filters).clone();
            write(&mut updated, (!value.is_empty()).then_some(value));
            filters.set(updated);
        })
    };

    let on_date = |write: fn(&mut FilterSet, Option<NaiveDate>)| {
        let filters = filters.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*filters).clone();
            write(&mut updated, input.value().parse::<NaiveDate>().ok());
            filters.set(updated);
        })
    };

    // A slider thumb writes its own bound and fills in the pair's other
    // bound, so a range selection always produces both min and max keys.
    let on_range = |write: fn(&mut FilterSet, u32)| {
        let filters = filters.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<u32>() {
                let mut updated = (*filters).clone();
                write(&mut updated, value);
                filters.set(updated);
            }
        })
    };

    let on_apply_click = {
        let filters = filters.clone();
        let on_apply = props.on_apply.clone();
        Callback::from(move |_| {
            let today = chrono::Local::now().date_naive();
            on_apply.emit((*filters).clone().normalized(today));
        })
    };

    if !props.is_open {
        return Html::default();
    }

    let range_row = |label: &str,
                     max: u32,
                     step: u32,
                     low: u32,
                     high: u32,
                     on_min: Callback<InputEvent>,
                     on_max: Callback<InputEvent>| {
        html! {
            <div>
                <div class="flex items-center justify-between mb-1">
                    <label class="text-sm font-medium" style="color: var(--fg-secondary);">{label}</label>
                    <span class="text-sm font-mono" style="color: var(--fg-muted);">
                        {format!("{} - {}", low, high)}
                    </span>
                </div>
                <div class="flex items-center space-x-2">
                    <input
                        type="range"
                        min="0"
                        max={max.to_string()}
                        step={step.to_string()}
                        value={low.to_string()}
                        oninput={on_min}
                        class="w-full"
                    />
                    <input
                        type="range"
                        min="0"
                        max={max.to_string()}
                        step={step.to_string()}
                        value={high.to_string()}
                        oninput={on_max}
                        class="w-full"
                    />
                </div>
            </div>
        }
    };

    html! {
        <div class="fixed inset-0 z-50 overflow-y-auto">
            <div class="flex min-h-full items-center justify-center p-4">
                // Backdrop
                <div class="fixed inset-0 bg-black/50" onclick={props.on_close.clone()}></div>

                <div
                    class="relative rounded-lg shadow-xl w-full max-w-lg"
                    style="background-color: var(--bg-secondary); border: 1px solid var(--border-primary);"
                >
                    <div class="px-6 py-4 flex items-center justify-between" style="border-bottom: 1px solid var(--border-primary);">
                        <h3 class="text-lg font-medium" style="color: var(--fg-primary);">{"Filter Invoices"}</h3>
                        <button onclick={props.on_close.clone()} style="color: var(--fg-muted);">
                            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                            </svg>
                        </button>
                    </div>

                    <div class="p-6 space-y-4 max-h-[70vh] overflow-y-auto">
                        <div>
                            <label class="block text-sm font-medium mb-1" style="color: var(--fg-secondary);">{"Invoice Number"}</label>
                            <input
                                type="text"
                                value={filters.invoice_number.clone().unwrap_or_default()}
                                oninput={on_text(|f, v| f.invoice_number = v)}
                                class="w-full rounded-lg px-3 py-2"
                                style="background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-primary);"
                            />
                        </div>

                        <div>
                            <label class="block text-sm font-medium mb-1" style="color: var(--fg-secondary);">{"Customer Name"}</label>
                            <input
                                type="text"
                                value={filters.customer_name.clone().unwrap_or_default()}
                                oninput={on_text(|f, v| f.customer_name = v)}
                                class="w-full rounded-lg px-3 py-2"
                                style="background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-primary);"
                            />
                        </div>

                        <div class="grid grid-cols-2 gap-4">
                            <div>
                                <label class="block text-sm font-medium mb-1" style="color: var(--fg-secondary);">{"Start Date"}</label>
                                <input
                                    type="date"
                                    value={filters.start_date.map(|d| d.to_string()).unwrap_or_default()}
                                    oninput={on_date(|f, v| f.start_date = v)}
                                    class="w-full rounded-lg px-3 py-2"
                                    style="background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-primary);"
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium mb-1" style="color: var(--fg-secondary);">{"End Date"}</label>
                                <input
                                    type="date"
                                    value={filters.end_date.map(|d| d.to_string()).unwrap_or_default()}
                                    oninput={on_date(|f, v| f.end_date = v)}
                                    class="w-full rounded-lg px-3 py-2"
                                    style="background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-primary);"
                                />
                            </div>
                        </div>

                        <div>
                            <label class="block text-sm font-medium mb-1" style="color: var(--fg-secondary);">{"Description"}</label>
                            <input
                                type="text"
                                value={filters.detail_description.clone().unwrap_or_default()}
                                oninput={on_text(|f, v| f.detail_description = v)}
                                class="w-full rounded-lg px-3 py-2"
                                style="background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-primary);"
                            />
                        </div>

                        { range_row(
                            "Quantity Range",
                            QUANTITY_MAX,
                            1,
                            filters.min_quantity.unwrap_or(0),
                            filters.max_quantity.unwrap_or(QUANTITY_MAX),
                            on_range(|f, v| {
                                f.min_quantity = Some(v);
                                f.max_quantity = Some(f.max_quantity.unwrap_or(QUANTITY_MAX));
                            }),
                            on_range(|f, v| {
                                f.max_quantity = Some(v);
                                f.min_quantity = Some(f.min_quantity.unwrap_or(0));
                            }),
                        ) }

                        { range_row(
                            "Unit Price Range",
                            UNIT_PRICE_MAX,
                            1,
                            filters.min_unit_price.unwrap_or(0),
                            filters.max_unit_price.unwrap_or(UNIT_PRICE_MAX),
                            on_range(|f, v| {
                                f.min_unit_price = Some(v);
                                f.max_unit_price = Some(f.max_unit_price.unwrap_or(UNIT_PRICE_MAX));
                            }),
                            on_range(|f, v| {
                                f.max_unit_price = Some(v);
                                f.min_unit_price = Some(f.min_unit_price.unwrap_or(0));
                            }),
                        ) }

                        { range_row(
                            "Total Value Range",
                            TOTAL_VALUE_MAX,
                            100,
                            filters.min_total_value.unwrap_or(0),
                            filters.max_total_value.unwrap_or(TOTAL_VALUE_MAX),
                            on_range(|f, v| {
                                f.min_total_value = Some(v);
                                f.max_total_value = Some(f.max_total_value.unwrap_or(TOTAL_VALUE_MAX));
                            }),
                            on_range(|f, v| {
                                f.max_total_value = Some(v);
                                f.min_total_value = Some(f.min_total_value.unwrap_or(0));
                            }),
                        ) }
                    </div>

                    <div class="px-6 py-4 flex justify-end" style="border-top: 1px solid var(--border-primary);">
                        <button
                            onclick={on_apply_click}
                            class="px-4 py-2 rounded-lg"
                            style="background-color: var(--button-primary-bg); color: var(--button-primary-text);"
                        >
                            {"Apply Filters"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
