//! Top bar for the public pages (landing, about, login).

use leptos::prelude::*;

use crate::auth::policy::{self, paths};
use crate::state::session::SessionState;

/// Public navigation: brand, public links, and a session corner that swaps
/// between "Entrar" and a shortcut into the logged-in area.
#[component]
pub fn PublicNav() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();

    let session_corner = move || {
        match session_state.get().identity {
            // Hard links on purpose: entering the app area crosses the
            // auth boundary, and the guard re-checks on the next load.
            Some(identity) => view! {
                <a class="public-nav__cta" href=policy::default_path(identity.role)>
                    "Minha área"
                </a>
            }
            .into_any(),
            None => view! {
                <a class="public-nav__cta" href=paths::LOGIN>
                    "Entrar"
                </a>
            }
            .into_any(),
        }
    };

    view! {
        <header class="public-nav">
            <a class="public-nav__brand" href=paths::HOME>
                <span aria-hidden="true">"🐾 "</span>
                "MPet"
            </a>
            <nav class="public-nav__links">
                <a href=paths::HOME>"Início"</a>
                <a href=paths::SOBRE>"Sobre"</a>
                {session_corner}
            </nav>
        </header>
    }
}
