use chrono::NaiveDate;
use rust_decimal::Decimal;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use invoices_shared::{Invoice, InvoiceDetail, InvoiceUpdate};

use crate::components::error_dialog::ErrorDialog;
use crate::services::invoices;

#[derive(Properties, PartialEq)]
pub struct EditInvoiceDialogProps {
    pub invoice: Invoice,
    pub on_close: Callback<MouseEvent>,
    /// Fired after a successful PUT; the caller closes the dialog and
    /// refreshes the table.
    pub on_update: Callback<()>,
}

/// Edits an existing invoice in place. Detail rows are fetched when the
/// dialog opens and the submit sends a full replacement of header plus the
/// entire detail array.
#[function_component(EditInvoiceDialog)]
pub fn edit_invoice_dialog(props: &EditInvoiceDialogProps) -> Html {
    let invoice_number = use_state(|| props.invoice.invoice_number.clone());
    let customer_name = use_state(|| props.invoice.customer_name.clone());
    let date = use_state(|| props.invoice.date.to_string());
    let details = use_state(Vec::<InvoiceDetail>::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    // Load the detail rows when the dialog opens
    {
        let details = details.clone();
        let error = error.clone();
        let invoice_id = props.invoice.id;

        use_effect_with(invoice_id, move |_| {
            spawn_local(async move {
                match invoices::details(invoice_id).await {
                    Ok(data) => details.set(data),
                    Err(_) => {
                        error.set(Some(
                            "Error fetching invoice details. Please try again.".to_string(),
                        ));
                    }
                }
            });
            || ()
        });
    }

    let on_submit = {
        let invoice_number = invoice_number.clone();
        let customer_name = customer_name.clone();
        let date = date.clone();
        let details = details.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let invoice_id = props.invoice.id;
        let on_update = props.on_update.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Ok(invoice_date) = date.parse::<NaiveDate>() else {
                error.set(Some("Error updating invoice. Please try again.".to_string()));
                return;
            };
            let request = InvoiceUpdate {
                id: invoice_id,
                invoice_number: (*invoice_number).clone(),
                customer_name: (*customer_name).clone(),
                date: invoice_date,
                details: (*details).clone(),
            };

            let error = error.clone();
            let submitting = submitting.clone();
            let on_update = on_update.clone();
            submitting.set(true);

            spawn_local(async move {
                match invoices::update(&request).await {
                    // Success closes the dialog via the caller; failure keeps
                    // it open with the draft intact.
                    Ok(_) => on_update.emit(()),
                    Err(_) => {
                        error.set(Some("Error updating invoice. Please try again.".to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <>
            <div class="fixed inset-0 z-50 overflow-y-auto">
                <div class="flex min-h-full items-center justify-center p-4">
                    // Backdrop
                    <div class="fixed inset-0 bg-black/50" onclick={props.on_close.clone()}></div>

                    <div
                        class="relative rounded-lg shadow-xl w-full max-w-2xl"
                        style="background-color: var(--bg-secondary); border: 1px solid var(--border-primary);"
                    >
                        <div class="px-6 py-4 flex items-center justify-between" style="border-bottom: 1px solid var(--border-primary);">
                            <h3 class="text-lg font-medium" style="color: var(--fg-primary);">{"Edit Invoice"}</h3>
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

                                <table class="w-full">
                                    <thead>
                                        <tr style="border-bottom: 1px solid var(--border-primary);">
                                            <th class="text-left py-2 px-2 text-sm font-medium" style="color: var(--fg-muted);">{"Description"}</th>
                                            <th class="text-left py-2 px-2 text-sm font-medium" style="color: var(--fg-muted);">{"Quantity"}</th>
                                            <th class="text-left py-2 px-2 text-sm font-medium" style="color: var(--fg-muted);">{"Unit Price"}</th>
                                            <th class="text-left py-2 px-2 text-sm font-medium" style="color: var(--fg-muted);">{"Line Total"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
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

                                            html! {
                                                <tr key={detail.id} style="border-bottom: 1px solid var(--border-primary);">
                                                    <td class="py-2 px-2">
                                                        <input
                                                            type="text"
                                                            value={detail.description.clone()}
                                                            oninput={on_description}
                                                            class="w-full rounded px-2 py-1"
                                                            style="background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-primary);"
                                                        />
                                                    </td>
                                                    <td class="py-2 px-2">
                                                        <input
                                                            type="number"
                                                            value={detail.quantity.to_string()}
                                                            oninput={on_quantity}
                                                            class="w-full rounded px-2 py-1"
                                                            style="background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-primary);"
                                                        />
                                                    </td>
                                                    <td class="py-2 px-2">
                                                        <input
                                                            type="number"
                                                            step="0.01"
                                                            value={detail.unit_price.to_string()}
                                                            oninput={on_unit_price}
                                                            class="w-full rounded px-2 py-1"
                                                            style="background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-primary);"
                                                        />
                                                    </td>
                                                    // The total as last fetched, not recomputed while typing
                                                    <td class="py-2 px-2 font-mono" style="color: var(--fg-secondary);">
                                                        {format!("${:.2}", detail.line_total)}
                                                    </td>
                                                </tr>
                                            }
                                        })}
                                    </tbody>
                                </table>
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
                                        {"Updating..."}
                                    } else {
                                        {"Update Invoice"}
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
