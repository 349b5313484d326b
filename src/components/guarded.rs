//! Guard wrapper executing access decisions for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders inside [`Guarded`], so redirect behavior is
//! identical everywhere: unauthenticated visits bounce to login with the
//! return path saved, foreign-role visits get the denial notice and land on
//! their own dashboard. The guard decides (`RouteGuard::protect`); this
//! component only executes.
//!
//! DESIGN
//! ======
//! Redirects are hard navigations through `window.location`, not router
//! transitions. Crossing an auth boundary with a full page load flushes
//! per-page state and matches how the server expects sessions to re-enter.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::AppGuard;
use crate::auth::guard::GuardState;

/// Wraps a protected page. Children render only when the guard authorizes
/// the current path; otherwise a placeholder shows until the redirect lands.
#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let guard = expect_context::<AppGuard>();
    let location = use_location();
    let state = RwSignal::new(GuardState::Unchecked);

    // Re-runs per navigation: every page load gets a fresh decision.
    Effect::new(move || {
        let path = location.pathname.get();
        let decision = guard.protect(&path);
        execute(&decision);
        state.set(decision);
    });

    view! {
        <Show
            when=move || state.get().allows_render()
            fallback=|| view! { <p class="guard-wait">"Redirecionando..."</p> }
        >
            {children()}
        </Show>
    }
}

/// Perform the side effects a guard decision asks for. Rendering states and
/// `Unchecked` have none.
fn execute(state: &GuardState) {
    #[cfg(feature = "hydrate")]
    match state {
        GuardState::Unauthenticated { login_path } => hard_navigate(login_path),
        GuardState::Unauthorized { notice, redirect_to } => {
            // Blocking notice first: the user must see why they moved.
            alert(notice);
            hard_navigate(redirect_to);
        }
        GuardState::Unchecked | GuardState::PublicOk | GuardState::Authorized => {}
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
    }
}

/// Full page load, deliberately not a router transition.
#[cfg(feature = "hydrate")]
pub fn hard_navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

#[cfg(feature = "hydrate")]
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Confirmation dialog; answers false outside the browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
