use yew::prelude::*;

mod components;
mod pages;
mod services;
mod theme;

use pages::invoices::InvoicesPage;
use theme::ThemeProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <div class="min-h-screen" style="background-color: var(--bg-primary); color: var(--fg-primary);">
                <main class="container mx-auto py-10">
                    <InvoicesPage />
                </main>
            </div>
        </ThemeProvider>
    }
}

fn main() {
    let _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();

    let document = web_sys::window().unwrap().document().unwrap();
    let head = document.head().unwrap();

    // Load Tailwind CSS
    let tailwind = document.create_element("link").unwrap();
    tailwind.set_attribute("href", "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css").unwrap();
    tailwind.set_attribute("rel", "stylesheet").unwrap();
    head.append_child(&tailwind).unwrap();

    // Load the light/dark palette variables
    let theme_css = document.create_element("link").unwrap();
    theme_css.set_attribute("href", "/static/themes.css").unwrap();
    theme_css.set_attribute("rel", "stylesheet").unwrap();
    head.append_child(&theme_css).unwrap();

    // Apply initial theme
    theme::apply_theme(theme::load_theme());

    log::info!("starting invoices frontend");
    yew::Renderer::<App>::new().render();
}
