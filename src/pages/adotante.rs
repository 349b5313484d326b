//! Adopter area: landing hub, the swipe deck and the interest list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The match page is the heart of the product: pets come up one card at a
//! time and a like registers an interest with the backend. The interest
//! page shows what the adopter already asked for and lets them withdraw
//! pending requests.
//!
//! ERROR HANDLING
//! ==============
//! A like that the server refuses (typically a duplicate interest) still
//! advances the deck: the card was seen, and trapping the user on it helps no
//! one. A like that never reached the server keeps the card on top so it
//! can be retried.

#[cfg(test)]
#[path = "adotante_test.rs"]
mod adotante_test;

use leptos::prelude::*;

use crate::auth::policy::paths;
use crate::components::empty_state::EmptyState;
use crate::components::guarded::confirm;
use crate::components::loading::LoadingSpinner;
use crate::components::nav_menu::CheckedLink;
use crate::components::pet_card::PetCard;
use crate::components::shell::ProtectedShell;
use crate::net::api::ApiError;
use crate::net::types::{Animal, Interesse};
use crate::state::deck::DeckState;
use crate::state::session::SessionState;
use crate::state::ui::{ToastKind, UiState};
use crate::util::adapter;

/// Landing hub for adopters. Not in the menu (the deck is the landing
/// page) but still reachable by URL.
#[component]
pub fn AdotanteDashboardPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let greeting = move || {
        session_state
            .with(SessionState::nome)
            .map_or_else(|| "Bem-vindo(a)!".to_owned(), |nome| format!("Olá, {nome}!"))
    };

    view! {
        <ProtectedShell title="Minha área">
            <p class="hub-greeting">{greeting}</p>
            <div class="hub-grid">
                <CheckedLink path=paths::ADOTANTE_MATCH class="hub-card">
                    <span class="hub-card__icon" aria-hidden="true">"❤️"</span>
                    <span class="hub-card__label">"Encontrar um pet"</span>
                </CheckedLink>
                <CheckedLink path=paths::ADOTANTE_INTERESSES class="hub-card">
                    <span class="hub-card__icon" aria-hidden="true">"⭐"</span>
                    <span class="hub-card__label">"Meus interesses"</span>
                </CheckedLink>
                <CheckedLink path=paths::ADOTANTE_PERFIL class="hub-card">
                    <span class="hub-card__icon" aria-hidden="true">"👤"</span>
                    <span class="hub-card__label">"Meu perfil"</span>
                </CheckedLink>
                <CheckedLink path=paths::ADOTANTE_CHATS class="hub-card">
                    <span class="hub-card__icon" aria-hidden="true">"💬"</span>
                    <span class="hub-card__label">"Conversas"</span>
                </CheckedLink>
            </div>
        </ProtectedShell>
    }
}

/// Kick off (or retry) the deck fetch.
fn start_deck(deck: RwSignal<DeckState>) {
    deck.set(DeckState::loading());
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_animais().await {
            Ok(animais) => deck.set(DeckState::loaded(adapter::adapt_list(&animais))),
            Err(err) => deck.set(DeckState::failed(err)),
        }
    });
}

/// The swipe deck. One pet at a time; ❤ registers an interest, ✖ skips.
#[component]
pub fn MatchPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let deck = RwSignal::new(DeckState::loading());
    let busy = RwSignal::new(false);

    // Fetch the deck once after hydration.
    Effect::new(move || {
        start_deck(deck);
    });

    let on_dislike = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        deck.update(|d| d.advance());
    });

    let on_like = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let pet_id = deck.with(|d| d.current().map(|pet| pet.id));
        let cpf = session_state.with(|s| s.identity.as_ref().map(|i| i.cpf.clone()));
        let (Some(pet_id), Some(cpf)) = (pet_id, cpf) else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::registrar_interesse(&cpf, pet_id).await {
                Ok(message) => {
                    ui.update(|u| u.show_toast(message, ToastKind::Success));
                    deck.update(|d| d.advance());
                }
                Err(ApiError::Recusado(message)) => {
                    // Usually "interest already registered"; move on.
                    ui.update(|u| u.show_toast(message, ToastKind::Info));
                    deck.update(|d| d.advance());
                }
                Err(err) => {
                    ui.update(|u| u.show_toast(err.to_string(), ToastKind::Error));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (pet_id, cpf, ui);
            busy.set(false);
        }
    });

    view! {
        <ProtectedShell title="Encontre um amigo">
            <div class="match-page">
                {move || {
                    let snapshot = deck.get();
                    if snapshot.loading {
                        view! { <LoadingSpinner label="pets"/> }.into_any()
                    } else if let Some(err) = snapshot.error {
                        view! {
                            <div class="match-page__error">
                                <EmptyState
                                    icon="🛰️"
                                    title="Sem conexão"
                                    message=err.to_string()
                                />
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| start_deck(deck)
                                >
                                    "Tentar novamente"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else if snapshot.pets.is_empty() {
                        view! {
                            <EmptyState
                                icon="🐾"
                                title="Nenhum pet por aqui"
                                message="Nenhum pet disponível para adoção no momento. Volte em breve!"
                            />
                        }
                            .into_any()
                    } else if let Some(pet) = snapshot.current().cloned() {
                        view! {
                            <PetCard
                                pet=pet
                                busy=Signal::from(busy)
                                on_like=on_like
                                on_dislike=on_dislike
                            />
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="deck-done">
                                <span class="deck-done__icon" aria-hidden="true">"🎉"</span>
                                <h2>"Você já viu todos os pets disponíveis!"</h2>
                                <p>"Que tal rever alguns deles?"</p>
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| deck.update(|d| d.restart())
                                >
                                    "Recomeçar"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </ProtectedShell>
    }
}

/// One line of the interest list: the interest joined with what the public
/// listing still knows about the animal.
#[derive(Clone, Debug, PartialEq, Eq)]
struct InteresseRow {
    id: i32,
    pet_nome: String,
    pet_icon: &'static str,
    status: String,
    pendente: bool,
}

/// Join interests with the animal listing. Animals that left the listing
/// (adopted or deactivated) keep their row with a placeholder name.
fn build_rows(interesses: &[Interesse], animais: &[Animal]) -> Vec<InteresseRow> {
    interesses
        .iter()
        .map(|interesse| {
            let pet = animais
                .iter()
                .find(|animal| animal.id == interesse.id_animal)
                .map(adapter::adapt);
            let (pet_nome, pet_icon) = match pet {
                Some(view) => (view.nome, view.icon),
                None => ("Pet não disponível".to_owned(), "🐾"),
            };
            InteresseRow {
                id: interesse.id,
                pet_nome,
                pet_icon,
                status: interesse.status.clone(),
                pendente: interesse.is_pendente(),
            }
        })
        .collect()
}

/// Label and CSS class for a status chip.
fn status_chip(status: &str) -> (String, String) {
    let label = match status {
        "PENDENTE" => "Pendente".to_owned(),
        "APROVADO" => "Aprovado".to_owned(),
        "RECUSADO" => "Recusado".to_owned(),
        other => other.to_owned(),
    };
    let class = format!("chip chip--{}", status.to_ascii_lowercase());
    (label, class)
}

/// The adopter's registered interests, with a withdraw action while the
/// ONG has not answered yet.
#[component]
pub fn InteressesPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let rows = LocalResource::new(move || {
        let cpf = session_state.with(|s| s.identity.as_ref().map(|i| i.cpf.clone()));
        async move {
            let Some(cpf) = cpf else {
                return Ok(Vec::new());
            };
            let interesses = crate::net::api::fetch_interesses_do_adotante(&cpf).await?;
            let animais = crate::net::api::fetch_animais().await?;
            Ok::<_, ApiError>(build_rows(&interesses, &animais))
        }
    });

    let cancel = move |id: i32| {
        if !confirm("Cancelar este interesse?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::cancelar_interesse(id).await {
                Ok(message) => {
                    ui.update(|u| u.show_toast(message, ToastKind::Success));
                    rows.refetch();
                }
                Err(err) => {
                    ui.update(|u| u.show_toast(err.to_string(), ToastKind::Error));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, ui, &rows);
        }
    };

    view! {
        <ProtectedShell title="Meus interesses">
            <div class="interest-page">
                <Suspense fallback=move || view! { <LoadingSpinner label="interesses"/> }>
                    {move || {
                        rows.get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! {
                                        <EmptyState
                                            icon="⭐"
                                            title="Nenhum interesse ainda"
                                            message="Curta um pet na aba Match para começar."
                                        />
                                    }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <ul class="interest-list">
                                            {list
                                                .into_iter()
                                                .map(|row| {
                                                    let (label, chip_class) = status_chip(&row.status);
                                                    let row_id = row.id;
                                                    view! {
                                                        <li class="interest-list__item">
                                                            <span class="interest-list__icon" aria-hidden="true">
                                                                {row.pet_icon}
                                                            </span>
                                                            <span class="interest-list__name">{row.pet_nome}</span>
                                                            <span class=chip_class>{label}</span>
                                                            <Show when=move || row.pendente>
                                                                <button
                                                                    class="btn btn--ghost"
                                                                    on:click=move |_| cancel(row_id)
                                                                >
                                                                    "Cancelar"
                                                                </button>
                                                            </Show>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <EmptyState
                                            icon="🛰️"
                                            title="Sem conexão"
                                            message=err.to_string()
                                        />
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </ProtectedShell>
    }
}
