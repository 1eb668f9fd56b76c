//! Terminal input component with autocompletion and history navigation.
//!
//! The field is a view of the session's input buffer. Every key goes through
//! the session, which ignores it while input is locked; the element itself is
//! also disabled for the whole boot and render window.

use leptos::{ev, prelude::*};

use crate::app::AppContext;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Command line bound to the session's input buffer.
#[component]
pub fn Input() -> impl IntoView {
    let session = expect_context::<AppContext>().session;
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let locked = Memo::new(move |_| session.with(|s| !s.state().accepts_input()));
    let value = Memo::new(move |_| session.with(|s| s.input().to_string()));
    let prompt = Memo::new(move |_| session.with(|s| s.prompt()));

    // Refocus once the lock lifts; a disabled element can't take focus
    Effect::new(move |_| {
        if !locked.get() {
            request_animation_frame(dom::focus_terminal_input);
        }
    });

    // Helper to move cursor to end of input after the value updates
    let move_cursor_to_end = move || {
        request_animation_frame(move || {
            if let Some(input) = input_ref.get_untracked() {
                let len = input.value().len() as u32;
                let _ = input.set_selection_range(len, len);
            }
        });
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            session.update(|s| {
                s.submit();
            });
        }
        "ArrowUp" => {
            ev.prevent_default();
            session.update(|s| s.history_up());
            move_cursor_to_end();
        }
        "ArrowDown" => {
            ev.prevent_default();
            session.update(|s| s.history_down());
            move_cursor_to_end();
        }
        "Tab" => {
            ev.prevent_default();
            session.update(|s| {
                s.tab_complete();
            });
            move_cursor_to_end();
        }
        "l" if ev.ctrl_key() => {
            ev.prevent_default();
            session.update(|s| {
                s.clear_screen();
            });
        }
        _ => {}
    };

    let handle_input = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        session.update(|s| s.set_input(text));
    };

    view! {
        <div class=css::line>
            <span class=format!("{} glow", css::prompt)>{move || prompt.get()}</span>
            <span class=css::separator>"$ "</span>
            <input
                node_ref=input_ref
                id=dom::TERMINAL_INPUT_ID
                type="text"
                class=css::input
                autocomplete="off"
                spellcheck="false"
                aria-label="Terminal Input"
                prop:value=move || value.get()
                prop:disabled=move || locked.get()
                on:input=handle_input
                on:keydown=handle_keydown
            />
            <Show
                when=move || locked.get()
                fallback=|| view! { <span class=css::cursor>"▋"</span> }
            >
                <span class=css::busy>"Processing..."</span>
            </Show>
        </div>
    }
}
