use chrono::NaiveDate;
use rust_decimal::Decimal;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use invoices_shared::{DetailDraft, NewInvoice};

use crate::components::error_dialog::ErrorDialog;
use crate::services::invoices;

#[derive(Properties, PartialEq)]
pub struct AddInvoiceDialogProps {
    pub is_open: bool,
    pub on_close: Callback<MouseEvent>,
    /// Fired after a successful POST; the caller closes the dialog and
    /// refreshes the table. The draft is intentionally kept as-is.
    pub on_add_invoice: Callback<()>,
}

/// Dialog for creating an invoice with a dynamic list of line items. The
/// component stays mounted while hidden so the draft survives close/reopen.
#[function_component(AddInvoiceDialog)]
pub fn add_invoice_dialog(props: &AddInvoiceDialogProps) -> Html {
    let invoice_number = use_state(String::new);
    let customer_name = use_state(String::new);
    let date = use_state(String::new);
    let details = use_state(|| vec![DetailDraft::default()]);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_add_detail = {
        let details = details.clone();
        Callback::from(move |_| {
            let mut rows = (*details).clone();
            rows.push(DetailDraft::default());
            details.set(rows);
        })
    };

    let on_submit = {
        let invoice_number = invoice_number.clone();
        let customer_name = customer_name.clone();
        let date = date.clone();
        let details = details.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let on_add_invoice = props.on_add_invoice.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Ok(invoice_date) = date.parse::<NaiveDate>() else {
                error.set(Some("Error adding invoice. Please try again.".to_string()));
                return;
            };
            let request = NewInvoice {
                invoice_number: (*invoice_number).clone(),
                customer_name: (*customer_name).clone(),
                date: invoice_date,
                details: (*details).clone(),
            };

            let error = error.clone();
            let submitting = submitting.clone();
            let on_add_invoice = on_add_invoice.clone();
            submitting.set(true);

            spawn_local(async move {
                match invoices::create(&request).await {
                    Ok(_) => on_add_invoice.emit(()),
                    Err(_) => {
                        error.set(Some("Error adding invoice. Please try again.".to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    if !props.is_open {
        return Html::default();
    }

    html! {
        <>
            <div class="fixed inset-0 z-50 overflow-y-auto">
                <div class="flex min-h-full items-center justify-center p-4">
                    // Backdrop
                    <div class="fixed inset-0 bg-black/50" onclick={props.on_close.clone()}></div>

                    <div
                        class="relative rounded-lg shadow-xl w-full max-w-lg"
                        style="background-color: var(--bg-secondary); border: 1px solid var(--border-primary);"
                    >
                        <div class="px-6 py-4 flex items-center justify-between" style="border-bottom: 1px solid var(--border-primary);">
                            <h3 class="text-lg font-medium" style="color: var(--fg-primary);">{"Add New Invoice"}</h3>
                            <button onclick={props.on_close.clone()} style="color: var(--fg-muted);">
                                <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </button>
                        </div>

                        <form onsubmit={on_submit}>
                            <div class="p-6 space-y-4 max-h-[70vh] overflow-y-auto">
                                <div>
                                    <label class="block text-sm font-medium mb-1" style="color: var(--fg-secondary);">{"Invoice Number"}</label>
                                    <input
                                        type="text"
                                        required=true
                                        value={(*invoice_number).clone()}
                                        oninput={{
                                            let invoice_number = invoice_number.clone();
                                            Callback::from(move |e: InputEvent| {
                                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                invoice_number.set(input.value());
                                            })
                                        }}
                                        class="w-full rounded-lg px-3 py-2"
                                        style="background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-primary);"
                                    />
                                </div>

                                <div>
                                    <label class="block text-sm font-medium mb-1" style="color: var(--fg-secondary);">{"Customer Name"}</label>
                                    <input
                                        type="text"
                                        required=true
                                        value={(*customer_name).clone()}
                                        oninput={{
                                            let customer_name = customer_name.clone();
                                            Callback::from(move |e: InputEvent| {
                                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                customer_name.set(input.value());
                                            })
                                        }}
                                        class="w-full rounded-lg px-3 py-2"
                                        style="background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-primary);"
                                    />
                                </div>

                                <div>
                                    <label class="block text-sm font-medium mb-1" style="color: var(--fg-secondary);">{"Date"}</label>
                                    <input
                                        type="date"
                                        required=true
                                        value={(*date).clone()}
                                        oninput={{
                                            let date = date.clone();
                                            Callback::from(move |e: InputEvent| {
                                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                date.set(input.value());
                                            })
                                        }}
                                        class="w-full rounded-lg px-3 py-2"
                                        style="background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-primary);"
                                    />
                                </div>

                                { for (*details).iter().enumerate().map(|(index, detail)| {
                                    let on_description = {
                                        let details = details.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            let mut rows = (*details).clone();
                                            rows[index].description = input.value();
                                            details.set(rows);
                                        })
                                    };
                                    let on_quantity = {
                                        let details = details.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            let mut rows = (*details).clone();
                                            rows[index].quantity = input.value().parse::<Decimal>().unwrap_or(Decimal::ZERO);
                                            details.set(rows);
                                        })
                                    };
                                    let on_unit_price = {
                                        let details = details.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            let mut rows = (*details).clone();
                                            rows[index].unit_price = input.value().parse::<Decimal>().unwrap_or(Decimal::ZERO);
                                            details.set(rows);
                                        })
                                    };
                                    let on_remove = {
                                        let details = details.clone();
                                        Callback::from(move |_| {
                                            let mut rows = (*details).clone();
                                            rows.remove(index);
                                            details.set(rows);
                                        })
                                    };

                                    html! {
                                        <div key={index} class="space-y-2 pt-2" style="border-top: 1px solid var(--border-primary);">
                                            <div class="flex items-center justify-between">
                                                <span class="text-sm font-medium" style="color: var(--fg-muted);">
                                                    {format!("Detail {}", index + 1)}
                                                </span>
                                                // The first row is mandatory and cannot be removed
                                                if index > 0 {
                                                    <button type="button" onclick={on_remove} style="color: var(--color-error);" title="Remove detail">
                                                        <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                                        </svg>
                                                    </button>
                                                }
                                            </div>
                                            <div>
                                                <label class="block text-sm mb-1" style="color: var(--fg-secondary);">{"Description"}</label>
                                                <input
                                                    type="text"
                                                    value={detail.description.clone()}
                                                    oninput={on_description}
                                                    class="w-full rounded-lg px-3 py-2"
                                                    style="background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-primary);"
                                                />
                                            </div>
                                            <div class="grid grid-cols-2 gap-4">
                                                <div>
                                                    <label class="block text-sm mb-1" style="color: var(--fg-secondary);">{"Quantity"}</label>
                                                    <input
                                                        type="number"
                                                        value={detail.quantity.to_string()}
                                                        oninput={on_quantity}
                                                        class="w-full rounded-lg px-3 py-2"
                                                        style="background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-primary);"
                                                    />
                                                </div>
                                                <div>
                                                    <label class="block text-sm mb-1" style="color: var(--fg-secondary);">{"Unit Price"}</label>
                                                    <input
                                                        type="number"
                                                        step="0.01"
                                                        value={detail.unit_price.to_string()}
                                                        oninput={on_unit_price}
                                                        class="w-full rounded-lg px-3 py-2"
                                                        style="background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-primary);"
                                                    />
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })}

                                <button
                                    type="button"
                                    onclick={on_add_detail}
                                    class="w-full px-4 py-2 rounded-lg text-sm font-medium"
                                    style="background-color: var(--button-secondary-bg); color: var(--fg-secondary);"
                                >
                                    {"+ Add Detail"}
                                </button>
                            </div>

                            <div class="px-6 py-4 flex justify-end space-x-3" style="border-top: 1px solid var(--border-primary);">
                                <button
                                    type="button"
                                    onclick={props.on_close.clone()}
                                    class="px-4 py-2"
                                    style="color: var(--fg-muted);"
                                >
                                    {"Cancel"}
                                </button>
                                <button
                                    type="submit"
                                    disabled={*submitting}
                                    class="px-4 py-2 rounded-lg disabled:opacity-50"
                                    style="background-color: var(--button-primary-bg); color: var(--button-primary-text);"
                                >
                                    if *submitting {
                                        {"Adding..."}
                                    } else {
                                        {"Add Invoice"}
                                    }
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>

            if let Some(message) = (*error).clone() {
                <ErrorDialog
                    {message}
                    on_close={{
                        let error = error.clone();
                        Callback::from(move |_| error.set(None))
                    }}
                />
            }
        </>
    }
}
