//! Terminal view component.
//!
//! The welcome banner, the output log and the command input.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::config::ASCII_BANNER;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

/// Banner, greeting and a hint. Hidden by `clear`, restored by `banner`.
#[component]
fn Welcome() -> impl IntoView {
    let session = expect_context::<AppContext>().session;
    let (name, role) = session.with_untracked(|s| {
        let profile = &s.content().profile;
        (profile.name.clone(), profile.role.clone())
    });

    view! {
        <div class=css::welcome>
            <pre class=format!("{} glow", css::banner)>{ASCII_BANNER}</pre>
            <p class=css::greeting>{format!("Hello! I'm {}", name)}</p>
            <p class=css::role>{role}</p>
            <p class=css::hint>
                "Type " <span class=css::accent>"'help'"</span> " to see available commands"
            </p>
        </div>
    }
}

#[component]
pub fn Terminal(output_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let session = expect_context::<AppContext>().session;

    let show_banner = Memo::new(move |_| session.with(|s| s.show_banner()));
    let entry_ids = Memo::new(move |_| {
        session.with(|s| s.log().iter().map(|e| e.id).collect::<Vec<_>>())
    });

    let handle_click = move |_| dom::focus_terminal_input();

    view! {
        <div class=css::container on:click=handle_click>
            <div node_ref=output_ref class=css::output>
                <Show when=move || show_banner.get() fallback=|| ()>
                    <Welcome />
                </Show>

                <For
                    each=move || entry_ids.get()
                    key=|id| *id
                    children=|id| view! { <Output id=id /> }
                />

                <div class=css::inputArea>
                    <Input />
                </div>
            </div>
        </div>
    }
}
