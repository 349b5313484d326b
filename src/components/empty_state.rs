//! Empty and error placeholders for listings.

use leptos::prelude::*;

/// Friendly placeholder for an empty or failed listing.
///
/// Pages pass the backend's error message here when a fetch fails; the
/// degraded state is shown honestly instead of filling the page with
/// stand-in data.
#[component]
pub fn EmptyState(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <span class="empty-state__icon" aria-hidden="true">{icon}</span>
            <h3 class="empty-state__title">{title}</h3>
            <p class="empty-state__message">{message}</p>
        </div>
    }
}
