//! Toast host: renders the active notice and auto-dismisses it.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Seconds a toast stays up before dismissing itself.
const TOAST_SECONDS: u64 = 3;

/// Renders the active toast. Mounted once by the app shell.
///
/// Auto-dismiss is sequence-numbered: a timer only clears the toast it was
/// armed for, so a notice raced by a newer one never cuts it short.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    Effect::new(move || {
        let state = ui.get();
        if state.toast.is_none() {
            return;
        }
        let seq = state.toast_seq;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_SECONDS)).await;
            ui.update(|state| state.dismiss(seq));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = seq;
        }
    });

    view! {
        {move || {
            ui.get().toast.map(|toast| {
                let class = format!("toast toast-{} show", toast.kind.slug());
                view! { <div class=class role="status">{toast.message}</div> }
            })
        }}
    }
}
