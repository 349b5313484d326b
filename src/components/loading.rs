//! Centered loading indicator.

use leptos::prelude::*;

/// Spinner with an optional context label ("Carregando pets...").
#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: String) -> impl IntoView {
    let message = if label.is_empty() {
        "Carregando...".to_owned()
    } else {
        format!("Carregando {label}...")
    };

    view! {
        <div class="loading-spinner" role="status">
            <span class="loading-spinner__paw" aria-hidden="true">"🐾"</span>
            <p class="loading-spinner__text">{message}</p>
        </div>
    }
}
