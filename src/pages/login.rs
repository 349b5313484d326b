//! Login page: CPF + senha against the backend auth endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only way into the protected areas. On success the session is already
//! persisted by the API layer; this page refreshes the reactive mirror and
//! resumes whatever page the guard interrupted, or the role's landing page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::public_nav::PublicNav;
use crate::state::session::SessionState;

#[cfg(feature = "hydrate")]
use crate::app::AppGuard;
#[cfg(feature = "hydrate")]
use crate::components::guarded::hard_navigate;

/// Pre-submit check: both fields present. Format rules live in the API
/// layer; this only stops obviously empty submits from leaving the form.
fn form_ready(cpf: &str, senha: &str) -> Result<(), &'static str> {
    if cpf.trim().is_empty() || senha.is_empty() {
        return Err("Informe CPF e senha.");
    }
    Ok(())
}

/// CSS class for the feedback line.
fn feedback_class(failed: bool) -> &'static str {
    if failed {
        "login-message login-message--error"
    } else {
        "login-message"
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "hydrate")]
    let guard = expect_context::<AppGuard>();

    let cpf = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let failed = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let cpf_value = cpf.get();
        let senha_value = senha.get();
        if let Err(message) = form_ready(&cpf_value, &senha_value) {
            failed.set(true);
            info.set(message.to_owned());
            return;
        }
        busy.set(true);
        failed.set(false);
        info.set("Entrando...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(guard.session(), &cpf_value, &senha_value).await {
                    Ok(success) => {
                        session_state.set(SessionState::loaded(Some(success.identity)));
                        info.set(success.message);
                        // Let the welcome line paint before leaving the page.
                        gloo_timers::future::sleep(std::time::Duration::from_millis(600)).await;
                        let target = guard.resume_after_login();
                        hard_navigate(&target);
                    }
                    Err(err) => {
                        failed.set(true);
                        info.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&cpf_value, &senha_value, session_state);
        }
    };

    view! {
        <div class="login-page">
            <PublicNav/>
            <div class="login-card">
                <h1>
                    <span aria-hidden="true">"🐾 "</span>
                    "MPet"
                </h1>
                <p class="login-card__subtitle">"Entre para encontrar seu novo amigo"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "CPF"
                        <input
                            class="login-input"
                            type="text"
                            inputmode="numeric"
                            placeholder="000.000.000-00"
                            autocomplete="username"
                            prop:value=move || cpf.get()
                            on:input=move |ev| cpf.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Senha"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Sua senha"
                            autocomplete="current-password"
                            prop:value=move || senha.get()
                            on:input=move |ev| senha.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Entrar"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class=move || feedback_class(failed.get())>{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
