//! Profile page, shared by adopters and volunteers.
//!
//! The backend has no profile endpoint, so edits go to the persisted
//! session only: name, email and phone are merged into the stored
//! identity and survive reloads, but not a logout.

#[cfg(test)]
#[path = "perfil_test.rs"]
mod perfil_test;

use leptos::prelude::*;

use crate::components::shell::ProtectedShell;
use crate::net::types::{Identity, IdentityPatch};
use crate::state::session::SessionState;
use crate::state::ui::{ToastKind, UiState};
use crate::util::cpf;

#[cfg(feature = "hydrate")]
use crate::app::AppGuard;

/// Build the patch for a submitted form. `nome` is required; empty
/// optional fields mean "leave as is", not "erase".
fn build_patch(nome: &str, email: &str, telefone: &str) -> Result<IdentityPatch, &'static str> {
    let nome = nome.trim();
    if nome.is_empty() {
        return Err("Informe seu nome.");
    }
    let optional = |value: &str| {
        let value = value.trim();
        if value.is_empty() { None } else { Some(value.to_owned()) }
    };
    Ok(IdentityPatch {
        nome: Some(nome.to_owned()),
        email: optional(email),
        telefone: optional(telefone),
    })
}

/// `dd/mm/aaaa` out of an ISO timestamp; anything else passes through.
fn format_login_at(iso: &str) -> String {
    let date = iso.split('T').next().unwrap_or(iso);
    let mut parts = date.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(ano), Some(mes), Some(dia)) if !dia.is_empty() => format!("{dia}/{mes}/{ano}"),
        _ => iso.to_owned(),
    }
}

#[component]
pub fn PerfilPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    #[cfg(feature = "hydrate")]
    let guard = expect_context::<AppGuard>();

    let nome = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let telefone = RwSignal::new(String::new());

    // Seed the form from the identity once it is available.
    Effect::new(move || {
        let identity = session_state.with(|s| s.identity.clone());
        if let Some(identity) = identity {
            nome.set(identity.nome);
            email.set(identity.email.unwrap_or_default());
            telefone.set(identity.telefone.unwrap_or_default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match build_patch(&nome.get(), &email.get(), &telefone.get()) {
            Ok(patch) => {
                #[cfg(feature = "hydrate")]
                {
                    let session = guard.session();
                    session.update_identity(&patch);
                    session_state.set(SessionState::loaded(session.current()));
                    ui.update(|u| u.show_toast("Perfil atualizado!", ToastKind::Success));
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = patch;
                }
            }
            Err(message) => {
                ui.update(|u| u.show_toast(message, ToastKind::Error));
            }
        }
    };

    let identity = move || session_state.with(|s| s.identity.clone());

    view! {
        <ProtectedShell title="Meu perfil">
            <div class="profile-page">
                {move || {
                    identity()
                        .map(|identity| {
                            view! { <ProfileFacts identity=identity/> }
                        })
                }}
                <form class="profile-form" on:submit=on_submit>
                    <label class="profile-form__label">
                        "Nome"
                        <input
                            class="profile-form__input"
                            type="text"
                            prop:value=move || nome.get()
                            on:input=move |ev| nome.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="profile-form__label">
                        "E-mail"
                        <input
                            class="profile-form__input"
                            type="email"
                            placeholder="voce@exemplo.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="profile-form__label">
                        "Telefone"
                        <input
                            class="profile-form__input"
                            type="tel"
                            placeholder="(11) 99999-0000"
                            prop:value=move || telefone.get()
                            on:input=move |ev| telefone.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit">
                        "Salvar"
                    </button>
                </form>
            </div>
        </ProtectedShell>
    }
}

/// Read-only identity facts above the edit form.
#[component]
fn ProfileFacts(identity: Identity) -> impl IntoView {
    let role_label = identity.role.label();
    let cpf_masked = cpf::format_display(&identity.cpf);
    let ultimo_acesso = identity.login_at.as_deref().map(format_login_at);
    let cargo = identity.cargo.clone();

    view! {
        <dl class="profile-facts">
            <div class="profile-facts__row">
                <dt>"CPF"</dt>
                <dd>{cpf_masked}</dd>
            </div>
            <div class="profile-facts__row">
                <dt>"Perfil"</dt>
                <dd>{role_label}</dd>
            </div>
            {cargo
                .map(|cargo| {
                    view! {
                        <div class="profile-facts__row">
                            <dt>"Cargo"</dt>
                            <dd>{cargo}</dd>
                        </div>
                    }
                })}
            {ultimo_acesso
                .map(|quando| {
                    view! {
                        <div class="profile-facts__row">
                            <dt>"Último acesso"</dt>
                            <dd>{quando}</dd>
                        </div>
                    }
                })}
        </dl>
    }
}
