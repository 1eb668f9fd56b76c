//! Boot sequence
//!
//! Shows the boot lines and hands control to the prompt after a fixed delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::{BOOT_DELAY_MS, BOOT_LINES, HOST_NAME};
use crate::core::Session;

stylance::import_crate_style!(css, "src/components/terminal/boot.module.css");

/// Schedule the end of the boot screen.
///
/// The returned timer must be kept alive; dropping it cancels the boot.
pub fn schedule(session: RwSignal<Session>) -> Timeout {
    Timeout::new(BOOT_DELAY_MS, move || {
        session.update(|s| s.finish_boot());
    })
}

#[component]
pub fn Boot() -> impl IntoView {
    view! {
        <div class=css::boot>
            {BOOT_LINES
                .iter()
                .map(|(tag, text)| {
                    view! {
                        <p class=css::line>
                            "[" <span class=css::tag>{*tag}</span> "] " {*text}
                        </p>
                    }
                })
                .collect_view()}
            <p class=css::ready>
                "System ready. Connection established to "
                <span class=css::tag>{HOST_NAME}</span>
            </p>
        </div>
    }
}
