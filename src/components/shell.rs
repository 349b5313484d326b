//! Chrome shared by every protected page: guard, brand bar, role menu.

use leptos::prelude::*;

use crate::auth::policy::paths;
use crate::components::guarded::Guarded;
use crate::components::nav_menu::NavMenu;

/// Wraps a protected page in the guard and the authenticated chrome.
///
/// Pages only provide their main content; redirect handling lives in
/// [`Guarded`] and the menu in `NavMenu`, so every section of the site
/// behaves identically at the boundary.
#[component]
pub fn ProtectedShell(#[prop(into)] title: String, children: ChildrenFn) -> impl IntoView {
    view! {
        <Guarded>
            <div class="app-page">
                <header class="app-page__bar">
                    <a class="app-page__brand" href=paths::HOME>
                        <span aria-hidden="true">"🐾 "</span>
                        "MPet"
                    </a>
                    <NavMenu/>
                </header>
                <main class="app-page__main">
                    <h1 class="app-page__title">{title.clone()}</h1>
                    {children()}
                </main>
            </div>
        </Guarded>
    }
}
