// Light/dark theme support, persisted across sessions.

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

const THEME_STORAGE_KEY: &str = "invoices_theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Apply theme to the document
pub fn apply_theme(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(root) = document.document_element() {
                if let Ok(html) = root.dyn_into::<HtmlElement>() {
                    html.set_attribute("data-theme", theme.as_str()).ok();
                }
            }
        }
    }
}

/// Stored preference first, then the system preference, then dark.
pub fn load_theme() -> Theme {
    let saved = LocalStorage::get::<String>(THEME_STORAGE_KEY)
        .ok()
        .and_then(|s| Theme::from_str(&s));
    saved.or_else(system_theme).unwrap_or_default()
}

fn system_theme() -> Option<Theme> {
    let media = web_sys::window()?
        .match_media("(prefers-color-scheme: light)")
        .ok()??;
    if media.matches() {
        Some(Theme::Light)
    } else {
        Some(Theme::Dark)
    }
}

/// Save theme to local storage
pub fn save_theme(theme: Theme) {
    let _ = LocalStorage::set(THEME_STORAGE_KEY, theme.as_str());
}

// ===== Theme Context =====

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub set_theme: Callback<Theme>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Html,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(load_theme);

    // Apply theme on mount and when it changes
    {
        let theme = theme.clone();
        use_effect_with(*theme, move |theme| {
            apply_theme(*theme);
            || ()
        });
    }

    let set_theme = {
        let theme = theme.clone();
        Callback::from(move |new_theme: Theme| {
            save_theme(new_theme);
            theme.set(new_theme);
        })
    };

    let ctx = ThemeContext {
        theme: *theme,
        set_theme,
    };

    html! {
        <ContextProvider<ThemeContext> context={ctx}>
            { props.children.clone() }
        </ContextProvider<ThemeContext>>
    }
}

/// Hook to access theme context
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found")
}

// ===== Theme Toggle Button =====

/// Sun/moon toggle shown in the table toolbar. Purely cosmetic; no effect on
/// invoice data.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme_ctx = use_theme();

    let onclick = {
        let theme_ctx = theme_ctx.clone();
        Callback::from(move |_| {
            theme_ctx.set_theme.emit(theme_ctx.theme.toggled());
        })
    };

    let title = match theme_ctx.theme {
        Theme::Light => "Switch to dark mode",
        Theme::Dark => "Switch to light mode",
    };

    html! {
        <button
            {onclick}
            {title}
            class="p-2 rounded-lg"
            style="background-color: var(--button-secondary-bg); color: var(--fg-secondary);"
        >
            if theme_ctx.theme == Theme::Dark {
                // Sun
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z"/>
                </svg>
            } else {
                // Moon
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z"/>
                </svg>
            }
        </button>
    }
}
