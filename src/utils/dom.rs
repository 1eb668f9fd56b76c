//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Storage, Window};

/// DOM id of the terminal's command line input.
pub const TERMINAL_INPUT_ID: &str = "terminal-input";

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Focus the terminal input element.
#[inline]
pub fn focus_terminal_input() {
    focus_element(&format!("#{}", TERMINAL_INPUT_ID));
}

/// Scroll an element to its bottom edge.
pub fn scroll_to_bottom(element: &web_sys::Element) {
    element.set_scroll_top(element.scroll_height());
}

/// Set `data-theme` on the document root so CSS can switch palettes.
pub fn set_theme_attribute(theme: &str) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn focus_skips_other_inputs() {
        let document = window().unwrap().document().unwrap();
        let body = document.body().unwrap();

        let other = document.create_element("input").unwrap();
        body.append_child(&other).unwrap();
        let terminal = document.create_element("input").unwrap();
        terminal.set_id(TERMINAL_INPUT_ID);
        body.append_child(&terminal).unwrap();

        focus_terminal_input();
        let focused = document.active_element().unwrap();
        assert_eq!(focused.id(), TERMINAL_INPUT_ID);

        body.remove_child(&other).unwrap();
        body.remove_child(&terminal).unwrap();
    }
}
