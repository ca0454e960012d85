use yew::prelude::*;

const SKELETON_ROWS: usize = 5;

/// Placeholder table rows shown while the invoice list fetch is in flight.
/// No data dependency; always the same five rows.
#[function_component(SkeletonLoader)]
pub fn skeleton_loader() -> Html {
    html! {
        <>
            { for (0..SKELETON_ROWS).map(|i| html! {
                <tr key={i} style="border-bottom: 1px solid var(--border-primary);">
                    <td class="py-3 px-4">
                        <div class="h-4 w-24 rounded animate-pulse" style="background-color: var(--bg-highlight);"></div>
                    </td>
                    <td class="py-3 px-4">
                        <div class="h-4 w-36 rounded animate-pulse" style="background-color: var(--bg-highlight);"></div>
                    </td>
                    <td class="py-3 px-4">
                        <div class="h-4 w-24 rounded animate-pulse" style="background-color: var(--bg-highlight);"></div>
                    </td>
                    <td class="py-3 px-4">
                        <div class="flex space-x-2">
                            <div class="h-8 w-8 rounded-full animate-pulse" style="background-color: var(--bg-highlight);"></div>
                            <div class="h-8 w-8 rounded-full animate-pulse" style="background-color: var(--bg-highlight);"></div>
                        </div>
                    </td>
                </tr>
            })}
        </>
    }
}
