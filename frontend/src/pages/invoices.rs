// Invoices page: the paginated, filterable table and its dialogs.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use invoices_shared::{FilterSet, Invoice, total_pages};

use crate::components::add_invoice_dialog::AddInvoiceDialog;
use crate::components::edit_invoice_dialog::EditInvoiceDialog;
use crate::components::error_dialog::ErrorDialog;
use crate::components::filter_dialog::FilterDialog;
use crate::components::invoice_dialog::InvoiceDialog;
use crate::components::pagination::Pagination;
use crate::components::skeleton_loader::SkeletonLoader;
use crate::services::invoices;
use crate::theme::ThemeToggle;

#[function_component(InvoicesPage)]
pub fn invoices_page() -> Html {
    let invoice_list = use_state(Vec::<Invoice>::new);
    let page_count = use_state(|| 1u32);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let current_page = use_state(|| 1u32);
    let filters = use_state(FilterSet::default);
    let refresh = use_state(|| 0u32);

    let selected_invoice = use_state(|| None::<Invoice>);
    let editing_invoice = use_state(|| None::<Invoice>);
    let show_add_dialog = use_state(|| false);
    let show_filter_dialog = use_state(|| false);

    // List requests are not cancelable, so each takes a ticket and a
    // response only lands if no newer request was issued meanwhile. Keeps a
    // slow page 1 from overwriting a fast page 2.
    let fetch_ticket = use_mut_ref(|| 0u64);

    // Fetch on mount and whenever page, filters or the refresh counter change
    {
        let invoice_list = invoice_list.clone();
        let page_count = page_count.clone();
        let loading = loading.clone();
        let error = error.clone();
        let fetch_ticket = fetch_ticket.clone();
        let page = *current_page;
        let filter_set = (*filters).clone();

        use_effect_with((page, filter_set.clone(), *refresh), move |_| {
            let ticket = {
                let mut latest = fetch_ticket.borrow_mut();
                *latest += 1;
                *latest
            };
            loading.set(true);

            spawn_local(async move {
                let result = invoices::list(page, &filter_set).await;
                if *fetch_ticket.borrow() != ticket {
                    // Superseded by a newer request; drop this response.
                    return;
                }
                match result {
                    Ok(data) => {
                        invoice_list.set(data.results);
                        page_count.set(total_pages(data.count));
                        loading.set(false);
                    }
                    Err(_) => {
                        // Previous list stays on screen behind the error dialog
                        error.set(Some("Error fetching invoices. Please try again.".to_string()));
                        loading.set(false);
                    }
                }
            });
            || ()
        });
    }

    let on_delete = {
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: i64| {
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match invoices::delete(id).await {
                    Ok(()) => refresh.set(*refresh + 1),
                    Err(_) => {
                        error.set(Some("Error deleting invoice. Please try again.".to_string()));
                    }
                }
            });
        })
    };

    let on_refresh = {
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.set(*refresh + 1))
    };

    let on_clear_filters = {
        let filters = filters.clone();
        let current_page = current_page.clone();
        Callback::from(move |_: MouseEvent| {
            filters.set(FilterSet::default());
            current_page.set(1);
        })
    };

    let on_apply_filters = {
        let filters = filters.clone();
        let current_page = current_page.clone();
        let show_filter_dialog = show_filter_dialog.clone();
        Callback::from(move |new_filters: FilterSet| {
            filters.set(new_filters);
            current_page.set(1);
            show_filter_dialog.set(false);
        })
    };

    let on_page_change = {
        let current_page = current_page.clone();
        Callback::from(move |page: u32| current_page.set(page))
    };

    let open_add_dialog = {
        let show_add_dialog = show_add_dialog.clone();
        Callback::from(move |_: MouseEvent| show_add_dialog.set(true))
    };

    let open_filter_dialog = {
        let show_filter_dialog = show_filter_dialog.clone();
        Callback::from(move |_: MouseEvent| show_filter_dialog.set(true))
    };

    html! {
        <div class="p-4 max-w-[1200px] mx-auto">
            // Header
            <div class="flex items-center justify-between mb-4 gap-2 flex-wrap">
                <h1 class="text-2xl font-bold whitespace-nowrap" style="color: var(--fg-primary);">{"Invoices"}</h1>
                <div class="flex items-center gap-2 flex-wrap">
                    <ThemeToggle />
                    <button
                        onclick={open_filter_dialog}
                        class="flex items-center space-x-2 px-3 py-2 rounded-lg text-sm font-medium"
                        style="background-color: var(--button-secondary-bg); color: var(--fg-secondary);"
                    >
                        <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 4a1 1 0 011-1h16a1 1 0 011 1v2.586a1 1 0 01-.293.707l-6.414 6.414a1 1 0 00-.293.707V17l-4 4v-6.586a1 1 0 00-.293-.707L3.293 7.293A1 1 0 013 6.586V4z"/>
                        </svg>
                        <span>{"Filter"}</span>
                    </button>
                    <button
                        onclick={on_clear_filters}
                        class="px-3 py-2 rounded-lg text-sm font-medium"
                        style="background-color: var(--button-secondary-bg); color: var(--fg-secondary);"
                    >
                        {"Clear Filters"}
                    </button>
                    <button
                        onclick={on_refresh}
                        class="flex items-center space-x-2 px-3 py-2 rounded-lg text-sm font-medium"
                        style="background-color: var(--button-secondary-bg); color: var(--fg-secondary);"
                    >
                        <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15"/>
                        </svg>
                        <span>{"Refresh"}</span>
                    </button>
                    <button
                        onclick={open_add_dialog}
                        class="flex items-center space-x-2 px-3 py-2 rounded-lg text-sm font-medium"
                        style="background-color: var(--button-primary-bg); color: var(--button-primary-text);"
                    >
                        <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 4v16m8-8H4"/>
                        </svg>
                        <span>{"Add Invoice"}</span>
                    </button>
                </div>
            </div>

            // Invoice Table
            <div class="overflow-x-auto rounded-lg" style="background-color: var(--bg-secondary); border: 1px solid var(--border-primary);">
                <table class="w-full">
                    <thead>
                        <tr style="background-color: var(--bg-tertiary);">
                            <th class="text-left py-3 px-4 text-sm font-medium" style="color: var(--fg-muted);">{"Invoice Number"}</th>
                            <th class="text-left py-3 px-4 text-sm font-medium" style="color: var(--fg-muted);">{"Customer Name"}</th>
                            <th class="text-left py-3 px-4 text-sm font-medium" style="color: var(--fg-muted);">{"Date"}</th>
                            <th class="text-left py-3 px-4 text-sm font-medium" style="color: var(--fg-muted);">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if *loading {
                            <SkeletonLoader />
                        } else {
                            { for invoice_list.iter().map(|invoice| {
                                let on_view = {
                                    let selected_invoice = selected_invoice.clone();
                                    let invoice = invoice.clone();
                                    Callback::from(move |_| selected_invoice.set(Some(invoice.clone())))
                                };
                                let on_edit = {
                                    let editing_invoice = editing_invoice.clone();
                                    let invoice = invoice.clone();
                                    Callback::from(move |e: MouseEvent| {
                                        e.stop_propagation();
                                        editing_invoice.set(Some(invoice.clone()));
                                    })
                                };
                                let on_delete_row = {
                                    let on_delete = on_delete.clone();
                                    let id = invoice.id;
                                    Callback::from(move |e: MouseEvent| {
                                        e.stop_propagation();
                                        on_delete.emit(id);
                                    })
                                };

                                html! {
                                    <tr
                                        key={invoice.id}
                                        onclick={on_view}
                                        class="cursor-pointer hover:bg-gray-700/30"
                                        style="border-bottom: 1px solid var(--border-primary);"
                                    >
                                        <td class="py-3 px-4 font-mono" style="color: var(--accent-primary);">{&invoice.invoice_number}</td>
                                        <td class="py-3 px-4" style="color: var(--fg-primary);">{&invoice.customer_name}</td>
                                        <td class="py-3 px-4 text-sm" style="color: var(--fg-secondary);">{invoice.date.to_string()}</td>
                                        <td class="py-3 px-4">
                                            <div class="flex items-center space-x-2">
                                                <button onclick={on_edit} class="p-1 rounded hover:bg-gray-700" style="color: var(--fg-muted);" title="Edit">
                                                    <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M11 5H6a2 2 0 00-2 2v11a2 2 0 002 2h11a2 2 0 002-2v-5m-1.414-9.414a2 2 0 112.828 2.828L11.828 15H9v-2.828l8.586-8.586z"/>
                                                    </svg>
                                                </button>
                                                <button onclick={on_delete_row} class="p-1 rounded hover:bg-gray-700" style="color: var(--color-error);" title="Delete">
                                                    <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16"/>
                                                    </svg>
                                                </button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            })}
                        }
                    </tbody>
                </table>
                if !*loading && invoice_list.is_empty() {
                    <div class="text-center py-4" style="color: var(--fg-muted);">
                        {"No invoices found. Try adjusting your filters or add a new invoice."}
                    </div>
                }
            </div>

            <Pagination
                current_page={*current_page}
                total_pages={*page_count}
                on_page_change={on_page_change}
            />

            if let Some(invoice) = (*selected_invoice).clone() {
                <InvoiceDialog
                    {invoice}
                    on_close={{
                        let selected_invoice = selected_invoice.clone();
                        Callback::from(move |_| selected_invoice.set(None))
                    }}
                />
            }

            if let Some(invoice) = (*editing_invoice).clone() {
                <EditInvoiceDialog
                    {invoice}
                    on_close={{
                        let editing_invoice = editing_invoice.clone();
                        Callback::from(move |_| editing_invoice.set(None))
                    }}
                    on_update={{
                        let editing_invoice = editing_invoice.clone();
                        let refresh = refresh.clone();
                        Callback::from(move |_| {
                            editing_invoice.set(None);
                            refresh.set(*refresh + 1);
                        })
                    }}
                />
            }

            <AddInvoiceDialog
                is_open={*show_add_dialog}
                on_close={{
                    let show_add_dialog = show_add_dialog.clone();
                    Callback::from(move |_| show_add_dialog.set(false))
                }}
                on_add_invoice={{
                    let show_add_dialog = show_add_dialog.clone();
                    let refresh = refresh.clone();
                    Callback::from(move |_| {
                        show_add_dialog.set(false);
                        refresh.set(*refresh + 1);
                    })
                }}
            />

            <FilterDialog
                is_open={*show_filter_dialog}
                on_close={{
                    let show_filter_dialog = show_filter_dialog.clone();
                    Callback::from(move |_| show_filter_dialog.set(false))
                }}
                on_apply={on_apply_filters}
            />

            if let Some(message) = (*error).clone() {
                <ErrorDialog
                    {message}
                    on_close={{
                        let error = error.clone();
                        Callback::from(move |_| error.set(None))
                    }}
                />
            }
        </div>
    }
}
