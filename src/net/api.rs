//! REST wrappers for the MPet backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs reporting the backend as unreachable, since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Login failures and data failures are different conversations with the
//! user, so they get separate error types. Every error renders a Portuguese
//! message through `Display`. When the backend is down the UI says so;
//! there is no canned fallback data, a lesson learned from the old client
//! silently swapping in mock pets.
//!
//! TRADE-OFFS
//! ==========
//! One request per call: no retry, no timeout, no in-flight deduplication.
//! Forms disable their submit button while busy, which is enough for this
//! traffic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use crate::auth::session::SessionStore;
use crate::net::types::{Adotante, Animal, Identity, Interesse, LoginResponse, Ong, Voluntario};
use crate::util::cpf;
use crate::util::storage::KeyValueStore;

#[cfg(feature = "hydrate")]
use crate::net::types::MutationResponse;

/// Login key accepted for the administrator account in place of a CPF.
pub const ADMIN_LOGIN: &str = "admin";

/// Minimum password length enforced before any request is made.
pub const MIN_SENHA_LEN: usize = 3;

const GENERIC_REJECTION: &str = "CPF ou senha incorretos.";

/// Authentication failure, from cheapest to most expensive to detect.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoginError {
    /// The login key is neither `admin` nor 11 digits. No request was made.
    #[error("CPF inválido. Digite apenas os 11 números.")]
    CpfInvalido,
    /// Password below the minimum length. No request was made.
    #[error("Senha deve ter no mínimo {MIN_SENHA_LEN} caracteres.")]
    SenhaCurta,
    /// The backend rejected the credentials. Carries the server's message;
    /// the backend answers unknown CPF and wrong password identically, and
    /// the fallback text keeps that property.
    #[error("{0}")]
    Recusado(String),
    /// Transport failure, or a success response the client could not read.
    #[error("Não foi possível conectar ao servidor. Verifique se ele está ativo.")]
    Indisponivel,
}

/// Data-endpoint failure. Pages surface these as a degraded state and never
/// substitute placeholder data.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure: server down or unreachable.
    #[error("Não foi possível conectar ao servidor. Verifique se ele está ativo.")]
    Indisponivel,
    /// Non-2xx without a usable error body.
    #[error("O servidor respondeu com erro {0}.")]
    Status(u16),
    /// 2xx with a body that did not parse.
    #[error("Resposta inesperada do servidor.")]
    RespostaInvalida,
    /// The backend refused the operation and said why.
    #[error("{0}")]
    Recusado(String),
    /// Caller-side validation failed. No request was made.
    #[error("CPF inválido.")]
    CpfInvalido,
}

/// Successful login: the persisted identity plus the welcome message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginSuccess {
    pub identity: Identity,
    pub message: String,
}

/// Result of one backend health probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthStatus {
    /// `/api/health` answered 2xx.
    Online { latency_ms: u32 },
    /// The server answered, but not with 2xx.
    Degraded { status: u16 },
    /// No answer at all.
    Offline,
}

const LOGIN_ENDPOINT: &str = "/api/auth/login";
const HEALTH_ENDPOINT: &str = "/api/health";
const ANIMAIS_ENDPOINT: &str = "/api/animais";
const ONGS_ENDPOINT: &str = "/api/ongs";
const ADOTANTES_ENDPOINT: &str = "/api/adotantes";
const VOLUNTARIOS_ENDPOINT: &str = "/api/voluntarios";
const INTERESSES_ENDPOINT: &str = "/api/interesses";

#[cfg(any(test, feature = "hydrate"))]
fn interesse_endpoint(id: i32) -> String {
    format!("{INTERESSES_ENDPOINT}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn adotante_interesses_endpoint(cpf: &str) -> String {
    format!("{ADOTANTES_ENDPOINT}/{cpf}/interesses")
}

/// Validate the login form and normalize the login key (strip CPF
/// punctuation, keep `admin` verbatim). Runs before any network call.
fn validate_login_input(cpf_raw: &str, senha: &str) -> Result<String, LoginError> {
    let key = if cpf_raw.trim() == ADMIN_LOGIN {
        ADMIN_LOGIN.to_owned()
    } else {
        let digits = cpf::clean(cpf_raw);
        if digits.len() != 11 {
            return Err(LoginError::CpfInvalido);
        }
        digits
    };
    if senha.chars().count() < MIN_SENHA_LEN {
        return Err(LoginError::SenhaCurta);
    }
    Ok(key)
}

/// Map the login response to an outcome. `body` is `None` when the body did
/// not parse as [`LoginResponse`].
fn interpret_login_response(
    status_ok: bool,
    body: Option<LoginResponse>,
) -> Result<(Identity, String), LoginError> {
    if !status_ok {
        // Any non-2xx is a rejection, whatever the body looked like.
        let message = body
            .and_then(|b| b.error)
            .unwrap_or_else(|| GENERIC_REJECTION.to_owned());
        return Err(LoginError::Recusado(message));
    }
    let Some(body) = body else {
        return Err(LoginError::Indisponivel);
    };
    if !body.success {
        let message = body.error.unwrap_or_else(|| GENERIC_REJECTION.to_owned());
        return Err(LoginError::Recusado(message));
    }
    match (body.user, body.token) {
        (Some(user), Some(token)) => Ok((user, token)),
        // "success" without the credentials to go with it is a broken
        // response, not a rejection.
        _ => Err(LoginError::Indisponivel),
    }
}

/// Stamp the login instant, persist the session, and build the welcome line.
fn finish_login<S: KeyValueStore>(
    session: &SessionStore<S>,
    mut identity: Identity,
    token: &str,
    login_at: Option<String>,
) -> LoginSuccess {
    identity.login_at = login_at;
    session.save(&identity, token);
    LoginSuccess {
        message: format!("Bem-vindo(a), {}!", identity.nome),
        identity,
    }
}

/// Authenticate against `POST /api/auth/login` and persist the session.
///
/// Validation short-circuits before the network: a malformed CPF or short
/// password never leaves the browser.
///
/// # Errors
///
/// [`LoginError`] distinguishing local validation, backend rejection, and
/// connectivity failure.
pub async fn login<S: KeyValueStore>(
    session: &SessionStore<S>,
    cpf_raw: &str,
    senha: &str,
) -> Result<LoginSuccess, LoginError> {
    let key = validate_login_input(cpf_raw, senha)?;
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "cpf": key, "senha": senha });
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|_| LoginError::Indisponivel)?
            .send()
            .await
            .map_err(|err| {
                leptos::logging::warn!("login request failed: {err}");
                LoginError::Indisponivel
            })?;
        let status_ok = resp.ok();
        let body = resp.json::<LoginResponse>().await.ok();
        let (identity, token) = interpret_login_response(status_ok, body)?;
        Ok(finish_login(session, identity, &token, Some(now_iso())))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, key);
        Err(LoginError::Indisponivel)
    }
}

/// Probe `GET /api/health` and measure round-trip latency.
pub async fn check_health() -> HealthStatus {
    #[cfg(feature = "hydrate")]
    {
        let started = js_sys::Date::now();
        match gloo_net::http::Request::get(HEALTH_ENDPOINT).send().await {
            Ok(resp) if resp.ok() => HealthStatus::Online {
                latency_ms: elapsed_ms(started),
            },
            Ok(resp) => HealthStatus::Degraded { status: resp.status() },
            Err(_) => HealthStatus::Offline,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        HealthStatus::Offline
    }
}

/// All animals available for adoption.
///
/// # Errors
///
/// [`ApiError`] when the backend is unreachable or answers badly.
pub async fn fetch_animais() -> Result<Vec<Animal>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(ANIMAIS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Indisponivel)
    }
}

/// All registered ONGs.
///
/// # Errors
///
/// [`ApiError`] when the backend is unreachable or answers badly.
pub async fn fetch_ongs() -> Result<Vec<Ong>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(ONGS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Indisponivel)
    }
}

/// All registered adopters.
///
/// # Errors
///
/// [`ApiError`] when the backend is unreachable or answers badly.
pub async fn fetch_adotantes() -> Result<Vec<Adotante>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(ADOTANTES_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Indisponivel)
    }
}

/// All registered volunteers.
///
/// # Errors
///
/// [`ApiError`] when the backend is unreachable or answers badly.
pub async fn fetch_voluntarios() -> Result<Vec<Voluntario>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(VOLUNTARIOS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Indisponivel)
    }
}

/// All active adoption interests, every role's view of them.
///
/// # Errors
///
/// [`ApiError`] when the backend is unreachable or answers badly.
pub async fn fetch_interesses() -> Result<Vec<Interesse>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(INTERESSES_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Indisponivel)
    }
}

/// Interests registered by one adopter.
///
/// # Errors
///
/// `ApiError::CpfInvalido` without a request for a malformed CPF, otherwise
/// [`ApiError`] as for the other listings.
pub async fn fetch_interesses_do_adotante(cpf_raw: &str) -> Result<Vec<Interesse>, ApiError> {
    let cpf = valid_cpf(cpf_raw)?;
    #[cfg(feature = "hydrate")]
    {
        get_json(&adotante_interesses_endpoint(&cpf)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cpf;
        Err(ApiError::Indisponivel)
    }
}

/// Register an adoption interest: `POST /api/interesses`.
///
/// Returns the backend's confirmation message.
///
/// # Errors
///
/// `ApiError::CpfInvalido` without a request for a malformed CPF;
/// `ApiError::Recusado` with the server's reason when it refuses.
pub async fn registrar_interesse(cpf_raw: &str, id_animal: i32) -> Result<String, ApiError> {
    let cpf = valid_cpf(cpf_raw)?;
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "cpfAdotante": cpf, "idAnimal": id_animal });
        let resp = gloo_net::http::Request::post(INTERESSES_ENDPOINT)
            .json(&payload)
            .map_err(|_| ApiError::Indisponivel)?
            .send()
            .await
            .map_err(|err| {
                leptos::logging::warn!("POST {INTERESSES_ENDPOINT} failed: {err}");
                ApiError::Indisponivel
            })?;
        mutation_outcome(resp, "Interesse registrado com sucesso!").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cpf, id_animal);
        Err(ApiError::Indisponivel)
    }
}

/// Approve or refuse an interest: `PUT /api/interesses/{id}`.
///
/// `status` is the backend's wire value (`APROVADO` / `RECUSADO`).
///
/// # Errors
///
/// `ApiError::Recusado` with the server's reason (e.g. the interest no
/// longer exists), or a connectivity error.
pub async fn atualizar_interesse(id: i32, status: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "status": status });
        let url = interesse_endpoint(id);
        let resp = gloo_net::http::Request::put(&url)
            .json(&payload)
            .map_err(|_| ApiError::Indisponivel)?
            .send()
            .await
            .map_err(|err| {
                leptos::logging::warn!("PUT {url} failed: {err}");
                ApiError::Indisponivel
            })?;
        mutation_outcome(resp, "Interesse atualizado com sucesso!").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, status);
        Err(ApiError::Indisponivel)
    }
}

/// Withdraw an interest: `DELETE /api/interesses/{id}`.
///
/// # Errors
///
/// `ApiError::Recusado` with the server's reason, or a connectivity error.
pub async fn cancelar_interesse(id: i32) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = interesse_endpoint(id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|err| {
                leptos::logging::warn!("DELETE {url} failed: {err}");
                ApiError::Indisponivel
            })?;
        mutation_outcome(resp, "Interesse removido com sucesso!").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Indisponivel)
    }
}

fn valid_cpf(cpf_raw: &str) -> Result<String, ApiError> {
    let digits = cpf::clean(cpf_raw);
    if digits.len() == 11 {
        Ok(digits)
    } else {
        Err(ApiError::CpfInvalido)
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|err| {
            leptos::logging::warn!("GET {url} failed: {err}");
            ApiError::Indisponivel
        })?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|err| {
        leptos::logging::warn!("GET {url}: unreadable body: {err}");
        ApiError::RespostaInvalida
    })
}

#[cfg(feature = "hydrate")]
async fn mutation_outcome(
    resp: gloo_net::http::Response,
    default_message: &str,
) -> Result<String, ApiError> {
    let status = resp.status();
    let body = resp.json::<MutationResponse>().await.ok();
    if resp.ok() {
        let message = body
            .and_then(|b| b.message)
            .unwrap_or_else(|| default_message.to_owned());
        return Ok(message);
    }
    match body.and_then(|b| b.error) {
        Some(reason) => Err(ApiError::Recusado(reason)),
        None => Err(ApiError::Status(status)),
    }
}

#[cfg(feature = "hydrate")]
fn now_iso() -> String {
    js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default()
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn elapsed_ms(started: f64) -> u32 {
    (js_sys::Date::now() - started).max(0.0) as u32
}
