//! Main shell component.
//!
//! Owns every timer of the terminal: the one-shot boot timer, the render
//! timer that streams the active Entry, and the scroll timer that keeps the
//! log pinned to the bottom while it streams. All of them are dropped when the
//! shell unmounts.

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;

use super::boot::{self, Boot};
use super::terminal::Terminal;
use crate::app::AppContext;
use crate::config::{APP_NAME, RENDER_TICK_MS, SCROLL_TICK_MS};
use crate::core::Session;
use crate::models::ShellState;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/shell.module.css");

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Start streaming when an Entry becomes active; stop when it completes.
fn setup_render_timers(
    session: RwSignal<Session>,
    output_ref: NodeRef<leptos::html::Div>,
    render_timer: StoredValue<Option<Interval>, LocalStorage>,
    scroll_timer: StoredValue<Option<Interval>, LocalStorage>,
) {
    let active = Memo::new(move |_| session.with(|s| s.active_entry()));

    Effect::new(move |_| {
        if active.get().is_some() {
            render_timer.set_value(Some(Interval::new(RENDER_TICK_MS, move || {
                session.update(|s| {
                    s.tick_render();
                });
            })));
            scroll_timer.set_value(Some(Interval::new(SCROLL_TICK_MS, move || {
                if let Some(el) = output_ref.get_untracked() {
                    dom::scroll_to_bottom(&el);
                }
            })));
        } else {
            render_timer.set_value(None);
            scroll_timer.set_value(None);
            if let Some(el) = output_ref.get_untracked() {
                dom::scroll_to_bottom(&el);
            }
        }
    });
}

/// Scroll to the bottom when the log grows without streaming (e.g. `cd`).
fn setup_autoscroll_effect(session: RwSignal<Session>, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move |_| {
        session.with(|s| s.log().len());
        if let Some(el) = output_ref.get() {
            dom::scroll_to_bottom(&el);
        }
    });
}

/// Mirror the selected theme onto the document root.
fn setup_theme_effect(session: RwSignal<Session>) {
    Effect::new(move |_| {
        let theme = session.with(|s| s.theme());
        dom::set_theme_attribute(theme.as_str());
    });
}

// ============================================================================
// Shell Component
// ============================================================================

/// Terminal window.
///
/// Shows the boot screen until the boot timer fires, then the terminal.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let session = ctx.session;

    let output_ref = NodeRef::<leptos::html::Div>::new();
    let boot_timer = StoredValue::new_local(None::<Timeout>);
    let render_timer = StoredValue::new_local(None::<Interval>);
    let scroll_timer = StoredValue::new_local(None::<Interval>);

    boot_timer.set_value(Some(boot::schedule(session)));

    setup_render_timers(session, output_ref, render_timer, scroll_timer);
    setup_autoscroll_effect(session, output_ref);
    setup_theme_effect(session);

    on_cleanup(move || {
        boot_timer.try_update_value(|t| t.take());
        render_timer.try_update_value(|t| t.take());
        scroll_timer.try_update_value(|t| t.take());
        session.try_update(|s| s.teardown());
    });

    let booting = Memo::new(move |_| session.with(|s| s.state() == ShellState::Booting));
    let title = Memo::new(move |_| session.with(|s| s.prompt()));
    let (name, role) = session.with_untracked(|s| {
        let profile = &s.content().profile;
        (profile.name.clone(), profile.role.clone())
    });

    view! {
        <div class=css::screen>
            <div class=css::crtOverlay></div>
            <div class=css::scanline></div>

            <div class=css::window>
                <div class=css::titleBar>
                    <div class=css::dots>
                        <span class=css::dotRed></span>
                        <span class=css::dotYellow></span>
                        <span class=css::dotGreen></span>
                    </div>
                    <div class=css::title>{move || format!("{}$", title.get())}</div>
                </div>

                <div class=css::main>
                    {move || {
                        if booting.get() {
                            view! { <Boot /> }.into_any()
                        } else {
                            view! { <Terminal output_ref=output_ref /> }.into_any()
                        }
                    }}
                </div>

                <div class=css::footer>
                    <span class=css::footerHint>"Type 'help' for available commands | "</span>
                    <span class=css::footerName>{name}</span>
                    {format!(" - {} | {}", role, APP_NAME)}
                </div>
            </div>
        </div>
    }
}
