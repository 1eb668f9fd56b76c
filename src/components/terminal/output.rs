use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::{OutputKind, RenderState};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// Get CSS class for an OutputKind
fn kind_class(kind: OutputKind) -> &'static str {
    match kind {
        OutputKind::Error => css::textRed,
        OutputKind::Help | OutputKind::Listing => css::textCyan,
        OutputKind::EasterEgg | OutputKind::Theme => css::textYellow,
        OutputKind::Info => css::textBlue,
        _ => css::textFg,
    }
}

/// One log Entry: the prompt line it was submitted on, then its output.
#[component]
pub fn Output(id: usize) -> impl IntoView {
    let session = expect_context::<AppContext>().session;

    let header = session.with_untracked(|s| {
        s.entry(id)
            .map(|e| (s.prompt_for(&e.path), e.command.clone(), e.kind))
    });
    let Some((prompt, command, kind)) = header else {
        return ().into_any();
    };

    let visible = Memo::new(move |_| {
        session.with(|s| {
            s.entry(id)
                .map(|e| e.visible().to_string())
                .unwrap_or_default()
        })
    });
    let rendering = Memo::new(move |_| {
        session.with(|s| {
            s.entry(id)
                .is_some_and(|e| e.render_state() == RenderState::Rendering)
        })
    });

    // `cd` records only show the prompt line
    let body = kind.is_rendered().then(|| {
        view! {
            <div class=move || {
                if rendering.get() {
                    format!("{} {} {}", css::body, kind_class(kind), css::typing)
                } else {
                    format!("{} {}", css::body, kind_class(kind))
                }
            }>
                {move || visible.get()}
            </div>
        }
    });

    view! {
        <div class=css::entry>
            <div class=css::command>
                <span class=format!("{} glow", css::prompt)>{prompt}</span>
                <span class=css::textDim>"$ "</span>
                <span class=css::textFg>{command}</span>
            </div>
            {body}
        </div>
    }
    .into_any()
}
