//! Swipe card for the match page.

use leptos::prelude::*;

use crate::util::adapter::PetView;

/// One pet presented for a like/dislike decision.
///
/// The card is presentation only: the deck decides what happens on a swipe.
/// `busy` disables the action buttons while an interest request is in
/// flight, so double-clicking cannot register twice.
#[component]
pub fn PetCard(
    pet: PetView,
    busy: Signal<bool>,
    on_like: Callback<()>,
    on_dislike: Callback<()>,
) -> impl IntoView {
    let alt = format!("Foto de {}", pet.nome);
    let theme_class = format!("pet-card pet-card--{}", pet.theme);

    view! {
        <article class=theme_class>
            <img class="pet-photo" src=pet.imagem alt=alt/>
            <div class="pet-info">
                <h2 class="pet-name">
                    <span aria-hidden="true">{pet.icon}</span>
                    " "
                    {pet.nome}
                </h2>
                <p class="pet-details">{pet.detalhes}</p>
                <p class="pet-description">{pet.descricao}</p>
                <div class="pet-badges">
                    <span class="badge">{pet.tag}</span>
                </div>
            </div>
            <div class="actions">
                <button
                    class="action-btn dislike"
                    title="Não tenho interesse"
                    disabled=move || busy.get()
                    on:click=move |_| on_dislike.run(())
                >
                    "✖"
                </button>
                <button
                    class="action-btn like"
                    title="Tenho interesse!"
                    disabled=move || busy.get()
                    on:click=move |_| on_like.run(())
                >
                    "❤"
                </button>
            </div>
        </article>
    }
}
