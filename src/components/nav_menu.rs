//! Navigation for authenticated pages, rendered from the role descriptor.
//!
//! DESIGN
//! ======
//! The menu is not a hand-maintained list: it renders `policy::menu_for`,
//! so it cannot link a page the role is denied. Programmatic navigation
//! still re-checks through `RouteGuard::can_access`, since state can change
//! between render and click (another tab logging out, for instance).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::AppGuard;
use crate::auth::guard::{DENIED_NOTICE, normalize};
use crate::auth::policy;
use crate::state::session::SessionState;
use crate::state::ui::{ToastKind, UiState};

#[cfg(feature = "hydrate")]
use crate::components::guarded::{confirm, hard_navigate};

/// Role-aware menu plus the session corner (user name, logout).
#[component]
pub fn NavMenu() -> impl IntoView {
    let guard = expect_context::<AppGuard>();
    let session_state = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let links_guard = guard.clone();
    let links = move || {
        let Some(identity) = session_state.get().identity else {
            return Vec::new();
        };
        policy::menu_for(identity.role)
            .iter()
            .map(|entry| {
                let guard = links_guard.clone();
                let navigate = navigate.clone();
                let path = entry.path;
                view! {
                    <a
                        href=path
                        class="nav-menu__link"
                        class=("nav-menu__link--active", move || normalize(&pathname.get()) == path)
                        on:click=move |ev| {
                            ev.prevent_default();
                            try_navigate(&guard, ui, &navigate, path);
                        }
                    >
                        <span class="nav-menu__icon" aria-hidden="true">{entry.icon}</span>
                        <span class="nav-menu__label">{entry.label}</span>
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    let logout_guard = guard.clone();
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if !confirm("Tem certeza que deseja sair?") {
                return;
            }
            logout_guard.session().clear();
            session_state.set(SessionState::loaded(None));
            hard_navigate(policy::paths::HOME);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &logout_guard;
        }
    };

    view! {
        <nav class="nav-menu">
            <div class="nav-menu__links">{links}</div>
            <div class="nav-menu__session">
                <span class="nav-menu__user">
                    {move || session_state.get().nome().unwrap_or_default()}
                </span>
                <button class="nav-menu__logout" on:click=on_logout>
                    "Sair"
                </button>
            </div>
        </nav>
    }
}

/// In-app link that re-checks access on click. Dashboards use it for their
/// shortcut cards.
#[component]
pub fn CheckedLink(
    path: &'static str,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let guard = expect_context::<AppGuard>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    view! {
        <a
            href=path
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                try_navigate(&guard, ui, &navigate, path);
            }
        >
            {children()}
        </a>
    }
}

/// Execute a checked navigation: allowed paths go through the router,
/// denied ones surface a toast and stay put.
fn try_navigate<N>(guard: &AppGuard, ui: RwSignal<UiState>, navigate: &N, path: &str)
where
    N: Fn(&str, NavigateOptions),
{
    if guard.can_access(path) {
        navigate(path, NavigateOptions::default());
    } else {
        ui.update(|state| state.show_toast(DENIED_NOTICE, ToastKind::Error));
    }
}
