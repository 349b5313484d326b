//! Volunteer area: the ONG's animals, interest triage and closed adoptions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Volunteers work on behalf of one ONG (`id_ong` on their identity).
//! Every listing here is the global backend listing filtered down to that
//! ONG; the backend has no per-ONG endpoints, so the cut happens client
//! side after the fetch.
//!
//! Adoptions are derived data: an interest the ONG approved. The triage
//! page moves interests from PENDENTE to APROVADO or RECUSADO, and the
//! adoptions page lists the approved ones with the adopter's contact.

#[cfg(test)]
#[path = "voluntario_test.rs"]
mod voluntario_test;

use leptos::prelude::*;

use crate::auth::policy::paths;
use crate::components::empty_state::EmptyState;
use crate::components::guarded::confirm;
use crate::components::loading::LoadingSpinner;
use crate::components::nav_menu::CheckedLink;
use crate::components::shell::ProtectedShell;
use crate::net::api::ApiError;
use crate::net::types::{Adotante, Animal, Interesse};
use crate::state::session::SessionState;
use crate::state::ui::{ToastKind, UiState};
use crate::util::adapter::{self, PetView};
use crate::util::cpf;

/// Landing hub for volunteers.
#[component]
pub fn VoluntarioDashboardPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let greeting = move || {
        session_state
            .with(SessionState::nome)
            .map_or_else(|| "Bem-vindo(a)!".to_owned(), |nome| format!("Olá, {nome}!"))
    };
    let cargo = move || {
        session_state.with(|s| {
            s.identity
                .as_ref()
                .and_then(|identity| identity.cargo.clone())
        })
    };

    view! {
        <ProtectedShell title="Área do voluntário">
            <p class="hub-greeting">{greeting}</p>
            <Show when=move || cargo().is_some()>
                <p class="hub-cargo">{move || cargo().unwrap_or_default()}</p>
            </Show>
            <div class="hub-grid">
                <CheckedLink path=paths::VOLUNTARIO_ANIMAIS class="hub-card">
                    <span class="hub-card__icon" aria-hidden="true">"🐾"</span>
                    <span class="hub-card__label">"Animais da ONG"</span>
                </CheckedLink>
                <CheckedLink path=paths::VOLUNTARIO_INTERESSES class="hub-card">
                    <span class="hub-card__icon" aria-hidden="true">"⭐"</span>
                    <span class="hub-card__label">"Interesses recebidos"</span>
                </CheckedLink>
                <CheckedLink path=paths::VOLUNTARIO_ADOCOES class="hub-card">
                    <span class="hub-card__icon" aria-hidden="true">"🏠"</span>
                    <span class="hub-card__label">"Adoções"</span>
                </CheckedLink>
                <CheckedLink path=paths::VOLUNTARIO_CHATS class="hub-card">
                    <span class="hub-card__icon" aria-hidden="true">"💬"</span>
                    <span class="hub-card__label">"Conversas"</span>
                </CheckedLink>
                <CheckedLink path=paths::VOLUNTARIO_PERFIL class="hub-card">
                    <span class="hub-card__icon" aria-hidden="true">"👤"</span>
                    <span class="hub-card__label">"Meu perfil"</span>
                </CheckedLink>
            </div>
        </ProtectedShell>
    }
}

/// Keep only the animals owned by the volunteer's ONG. No ONG on the
/// identity means an empty listing rather than someone else's animals.
fn animais_da_ong(animais: &[Animal], id_ong: Option<i32>) -> Vec<Animal> {
    let Some(id_ong) = id_ong else {
        return Vec::new();
    };
    animais
        .iter()
        .filter(|animal| animal.id_ong == id_ong)
        .cloned()
        .collect()
}

/// The ONG's animals currently up for adoption.
#[component]
pub fn VoluntarioAnimaisPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();

    let pets = LocalResource::new(move || {
        let id_ong = session_state.with(|s| s.identity.as_ref().and_then(|i| i.id_ong));
        async move {
            let animais = crate::net::api::fetch_animais().await?;
            Ok::<_, ApiError>(adapter::adapt_list(&animais_da_ong(&animais, id_ong)))
        }
    });

    view! {
        <ProtectedShell title="Animais da ONG">
            <div class="ong-pets">
                <Suspense fallback=move || view! { <LoadingSpinner label="animais"/> }>
                    {move || {
                        pets.get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! {
                                        <EmptyState
                                            icon="🐾"
                                            title="Nenhum animal cadastrado"
                                            message="A sua ONG ainda não tem animais disponíveis para adoção."
                                        />
                                    }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <div class="ong-pets__grid">
                                            {list
                                                .into_iter()
                                                .map(|pet| view! { <OngPetCard pet=pet/> })
                                                .collect::<Vec<_>>()}
                                        </div>
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

/// Read-only card for the ONG listing. No swipe actions here.
#[component]
fn OngPetCard(pet: PetView) -> impl IntoView {
    let alt = format!("Foto de {}", pet.nome);
    view! {
        <div class="ong-pet-card">
            <img class="ong-pet-card__photo" src=pet.imagem alt=alt loading="lazy"/>
            <div class="ong-pet-card__body">
                <span class="ong-pet-card__name">
                    <span aria-hidden="true">{pet.icon}</span>
                    " "
                    {pet.nome}
                </span>
                <span class="ong-pet-card__details">{pet.detalhes}</span>
                <span class="ong-pet-card__tag">{pet.tag}</span>
            </div>
        </div>
    }
}

/// One interest under review, joined with the pet and the adopter.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ReviewRow {
    id: i32,
    pet_nome: String,
    pet_icon: &'static str,
    adotante_nome: String,
    adotante_telefone: String,
}

/// Interests on this ONG's animals with the given status, joined with pet
/// and adopter data. Interests on other ONGs' animals never show up, so a
/// volunteer cannot approve on someone else's behalf.
fn review_rows(
    interesses: &[Interesse],
    animais: &[Animal],
    adotantes: &[Adotante],
    id_ong: Option<i32>,
    status: &str,
) -> Vec<ReviewRow> {
    let ong_animais = animais_da_ong(animais, id_ong);
    interesses
        .iter()
        .filter(|interesse| interesse.status == status)
        .filter_map(|interesse| {
            let pet = ong_animais
                .iter()
                .find(|animal| animal.id == interesse.id_animal)
                .map(adapter::adapt)?;
            let adotante = adotantes
                .iter()
                .find(|adotante| adotante.cpf == interesse.cpf_adotante);
            let (adotante_nome, adotante_telefone) = match adotante {
                Some(adotante) => (
                    adotante.nome.clone(),
                    adotante.telefone.clone(),
                ),
                None => (cpf::format_display(&interesse.cpf_adotante), String::new()),
            };
            Some(ReviewRow {
                id: interesse.id,
                pet_nome: pet.nome,
                pet_icon: pet.icon,
                adotante_nome,
                adotante_telefone,
            })
        })
        .collect()
}

/// Everything the triage and adoption pages need, in one fetch pass.
async fn fetch_review_data() -> Result<(Vec<Interesse>, Vec<Animal>, Vec<Adotante>), ApiError> {
    let interesses = crate::net::api::fetch_interesses().await?;
    let animais = crate::net::api::fetch_animais().await?;
    let adotantes = crate::net::api::fetch_adotantes().await?;
    Ok((interesses, animais, adotantes))
}

/// Pending interests on the ONG's animals, with approve/refuse actions.
#[component]
pub fn VoluntarioInteressesPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let rows = LocalResource::new(move || {
        let id_ong = session_state.with(|s| s.identity.as_ref().and_then(|i| i.id_ong));
        async move {
            let (interesses, animais, adotantes) = fetch_review_data().await?;
            Ok::<_, ApiError>(review_rows(
                &interesses,
                &animais,
                &adotantes,
                id_ong,
                "PENDENTE",
            ))
        }
    });

    let decide = move |id: i32, status: &'static str| {
        if status == "RECUSADO" && !confirm("Recusar este interesse?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::atualizar_interesse(id, status).await {
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
        <ProtectedShell title="Interesses recebidos">
            <div class="review-page">
                <Suspense fallback=move || view! { <LoadingSpinner label="interesses"/> }>
                    {move || {
                        rows.get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! {
                                        <EmptyState
                                            icon="⭐"
                                            title="Nenhum interesse pendente"
                                            message="Quando um adotante curtir um animal da sua ONG, ele aparece aqui."
                                        />
                                    }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <ul class="review-list">
                                            {list
                                                .into_iter()
                                                .map(|row| {
                                                    let row_id = row.id;
                                                    view! {
                                                        <li class="review-list__item">
                                                            <span class="review-list__icon" aria-hidden="true">
                                                                {row.pet_icon}
                                                            </span>
                                                            <span class="review-list__pet">{row.pet_nome}</span>
                                                            <span class="review-list__adopter">{row.adotante_nome}</span>
                                                            <span class="review-list__phone">{row.adotante_telefone}</span>
                                                            <span class="review-list__actions">
                                                                <button
                                                                    class="btn btn--primary"
                                                                    on:click=move |_| decide(row_id, "APROVADO")
                                                                >
                                                                    "Aprovar"
                                                                </button>
                                                                <button
                                                                    class="btn btn--ghost"
                                                                    on:click=move |_| decide(row_id, "RECUSADO")
                                                                >
                                                                    "Recusar"
                                                                </button>
                                                            </span>
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

/// Approved interests on the ONG's animals: the closed adoptions, with the
/// adopter's contact so the ONG can arrange the handover.
#[component]
pub fn VoluntarioAdocoesPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();

    let rows = LocalResource::new(move || {
        let id_ong = session_state.with(|s| s.identity.as_ref().and_then(|i| i.id_ong));
        async move {
            let (interesses, animais, adotantes) = fetch_review_data().await?;
            Ok::<_, ApiError>(review_rows(
                &interesses,
                &animais,
                &adotantes,
                id_ong,
                "APROVADO",
            ))
        }
    });

    view! {
        <ProtectedShell title="Adoções">
            <div class="review-page">
                <Suspense fallback=move || view! { <LoadingSpinner label="adoções"/> }>
                    {move || {
                        rows.get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! {
                                        <EmptyState
                                            icon="🏠"
                                            title="Nenhuma adoção ainda"
                                            message="Interesses aprovados aparecem aqui como adoções."
                                        />
                                    }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <ul class="review-list">
                                            {list
                                                .into_iter()
                                                .map(|row| {
                                                    view! {
                                                        <li class="review-list__item">
                                                            <span class="review-list__icon" aria-hidden="true">
                                                                {row.pet_icon}
                                                            </span>
                                                            <span class="review-list__pet">{row.pet_nome}</span>
                                                            <span class="review-list__adopter">{row.adotante_nome}</span>
                                                            <span class="review-list__phone">{row.adotante_telefone}</span>
                                                            <span class="chip chip--aprovado">"Aprovado"</span>
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
