use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use invoices_shared::{Invoice, InvoiceDetail, grand_total};

use crate::services::invoices;

#[derive(Properties, PartialEq)]
pub struct InvoiceDialogProps {
    pub invoice: Invoice,
    pub on_close: Callback<MouseEvent>,
}

/// Read-only view of one invoice and its line items, with a grand total
/// summed from the transmitted line totals.
#[function_component(InvoiceDialog)]
pub fn invoice_dialog(props: &InvoiceDialogProps) -> Html {
    let details = use_state(Vec::<InvoiceDetail>::new);

    {
        let details = details.clone();
        let invoice_id = props.invoice.id;

        use_effect_with(invoice_id, move |_| {
            spawn_local(async move {
                match invoices::details(invoice_id).await {
                    Ok(data) => details.set(data),
                    // Nothing to act on in a read-only view; the table stays
                    // empty and the failure goes to the console.
                    Err(e) => log::error!("error fetching invoice details: {}", e),
                }
            });
            || ()
        });
    }

    let total = grand_total(&details);

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
                        <h3 class="text-lg font-medium" style="color: var(--fg-primary);">{"Invoice Details"}</h3>
                        <button onclick={props.on_close.clone()} style="color: var(--fg-muted);">
                            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                            </svg>
                        </button>
                    </div>

                    <div class="p-6 space-y-4">
                        <div class="space-y-1 text-sm" style="color: var(--fg-secondary);">
                            <div>{"Invoice Number: "}{&props.invoice.invoice_number}</div>
                            <div>{"Customer Name: "}{&props.invoice.customer_name}</div>
                            <div>{"Date: "}{props.invoice.date.to_string()}</div>
                        </div>

                        <table class="w-full">
                            <thead>
                                <tr style="border-bottom: 1px solid var(--border-primary);">
                                    <th class="text-left py-2 px-2 text-sm font-medium" style="color: var(--fg-muted);">{"Description"}</th>
                                    <th class="text-right py-2 px-2 text-sm font-medium" style="color: var(--fg-muted);">{"Quantity"}</th>
                                    <th class="text-right py-2 px-2 text-sm font-medium" style="color: var(--fg-muted);">{"Unit Price"}</th>
                                    <th class="text-right py-2 px-2 text-sm font-medium" style="color: var(--fg-muted);">{"Line Total"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for (*details).iter().map(|detail| html! {
                                    <tr key={detail.id} style="border-bottom: 1px solid var(--border-primary);">
                                        <td class="py-2 px-2" style="color: var(--fg-primary);">{&detail.description}</td>
                                        <td class="py-2 px-2 text-right font-mono" style="color: var(--fg-secondary);">{detail.quantity.to_string()}</td>
                                        <td class="py-2 px-2 text-right font-mono" style="color: var(--fg-secondary);">{format!("${:.2}", detail.unit_price)}</td>
                                        <td class="py-2 px-2 text-right font-mono" style="color: var(--fg-primary);">{format!("${:.2}", detail.line_total)}</td>
                                    </tr>
                                })}
                            </tbody>
                        </table>

                        <div class="font-bold text-right" style="color: var(--fg-primary);">
                            {format!("Total: ${:.2}", total)}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
