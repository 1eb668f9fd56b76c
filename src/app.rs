//! Root application module.
//!
//! Contains the main App component and the AppContext definition.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::components::Shell;
use crate::config::CONTENT_JSON;
use crate::core::Session;
use crate::models::Content;
use crate::utils::{BrowserStore, KeyValueStore, MemoryStore};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read by child components
/// with `expect_context::<AppContext>()`. The whole terminal session lives in
/// one signal; components subscribe to slices of it through memos.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<Session>,
}

impl AppContext {
    /// Load the bundled content and persisted state, and start booting.
    pub fn new() -> Self {
        let content = Content::from_json(CONTENT_JSON).unwrap_or_else(|e| {
            warn!("[app] bundled content unusable, using fallback: {}", e);
            Content::fallback()
        });

        let store: Box<dyn KeyValueStore + Send + Sync> = if BrowserStore::is_available() {
            Box::new(BrowserStore)
        } else {
            warn!("[app] localStorage unavailable; history will not persist");
            Box::new(MemoryStore::new())
        };

        Self {
            session: RwSignal::new(Session::new(content, store)),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #000;
                    color: #00ff99;
                    font-family: 'Courier New', monospace;
                ">
                    <h1 style="color: #ff5f56; margin-bottom: 1rem;">
                        "Kernel panic"
                    </h1>
                    <ul style="color: #ff5f56; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: transparent;
                            color: #00ff99;
                            border: 1px solid #00ff99;
                            padding: 0.5rem 1.5rem;
                            cursor: pointer;
                            font-family: 'Courier New', monospace;
                        "
                    >
                        "reboot"
                    </button>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}
