//! Admin area: platform-wide listings, adoption overview and system status.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin sees everything the backend lists, unfiltered. These pages
//! are read-only dashboards: registering ONGs, animals and people happens
//! through the backend's own tooling, not through this client.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::auth::policy::paths;
use crate::components::empty_state::EmptyState;
use crate::components::loading::LoadingSpinner;
use crate::components::nav_menu::CheckedLink;
use crate::components::shell::ProtectedShell;
use crate::net::api::{self, ApiError, HealthStatus};
use crate::net::types::{Adotante, Animal, Interesse, Ong};
use crate::util::adapter;
use crate::util::cpf;

/// Counts shown on the admin landing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Totais {
    animais: usize,
    ongs: usize,
    adotantes: usize,
    voluntarios: usize,
}

/// Landing page: one tile per listing, with the current row count.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let totais = LocalResource::new(|| async {
        let animais = api::fetch_animais().await?;
        let ongs = api::fetch_ongs().await?;
        let adotantes = api::fetch_adotantes().await?;
        let voluntarios = api::fetch_voluntarios().await?;
        Ok::<_, ApiError>(Totais {
            animais: animais.len(),
            ongs: ongs.len(),
            adotantes: adotantes.len(),
            voluntarios: voluntarios.len(),
        })
    });

    view! {
        <ProtectedShell title="Painel administrativo">
            <div class="admin-hub">
                <Suspense fallback=move || view! { <LoadingSpinner/> }>
                    {move || {
                        totais
                            .get()
                            .map(|result| match result {
                                Ok(t) => {
                                    view! {
                                        <div class="admin-hub__grid">
                                            <StatTile
                                                path=paths::ADMIN_ANIMAIS
                                                icon="🐾"
                                                label="Animais"
                                                value=t.animais
                                            />
                                            <StatTile
                                                path=paths::ADMIN_ONGS
                                                icon="🏢"
                                                label="ONGs"
                                                value=t.ongs
                                            />
                                            <StatTile
                                                path=paths::ADMIN_ADOTANTES
                                                icon="👤"
                                                label="Adotantes"
                                                value=t.adotantes
                                            />
                                            <StatTile
                                                path=paths::ADMIN_VOLUNTARIOS
                                                icon="🤝"
                                                label="Voluntários"
                                                value=t.voluntarios
                                            />
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

/// Count tile that doubles as a link into the listing.
#[component]
fn StatTile(
    path: &'static str,
    icon: &'static str,
    label: &'static str,
    value: usize,
) -> impl IntoView {
    view! {
        <CheckedLink path=path class="stat-tile">
            <span class="stat-tile__icon" aria-hidden="true">{icon}</span>
            <span class="stat-tile__value">{value}</span>
            <span class="stat-tile__label">{label}</span>
        </CheckedLink>
    }
}

/// Name of an ONG by id, for join columns. Deactivated ONGs still resolve;
/// an id the listing does not know keeps the number visible.
fn ong_nome(ongs: &[Ong], id: i32) -> String {
    ongs.iter()
        .find(|ong| ong.id == id)
        .map_or_else(|| format!("ONG {id}"), |ong| ong.nome.clone())
}

/// All animals on the platform, with their owning ONG.
#[component]
pub fn AnimaisAdminPage() -> impl IntoView {
    let data = LocalResource::new(|| async {
        let animais = api::fetch_animais().await?;
        let ongs = api::fetch_ongs().await?;
        Ok::<_, ApiError>((animais, ongs))
    });

    view! {
        <ProtectedShell title="Animais">
            <div class="admin-table-page">
                <Suspense fallback=move || view! { <LoadingSpinner label="animais"/> }>
                    {move || {
                        data.get()
                            .map(|result| match result {
                                Ok((animais, _)) if animais.is_empty() => {
                                    view! {
                                        <EmptyState
                                            icon="🐾"
                                            title="Nenhum animal cadastrado"
                                            message="A plataforma ainda não tem animais disponíveis."
                                        />
                                    }
                                        .into_any()
                                }
                                Ok((animais, ongs)) => {
                                    view! {
                                        <table class="admin-table">
                                            <thead>
                                                <tr>
                                                    <th>"Nome"</th>
                                                    <th>"Tipo"</th>
                                                    <th>"Detalhes"</th>
                                                    <th>"Vacinado"</th>
                                                    <th>"ONG"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {animais
                                                    .iter()
                                                    .map(|animal| {
                                                        let pet = adapter::adapt(animal);
                                                        view! {
                                                            <tr>
                                                                <td>
                                                                    <span aria-hidden="true">{pet.icon}</span>
                                                                    " "
                                                                    {pet.nome}
                                                                </td>
                                                                <td>{animal.tipo.clone()}</td>
                                                                <td>{pet.detalhes}</td>
                                                                <td>{pet.tag}</td>
                                                                <td>{ong_nome(&ongs, animal.id_ong)}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
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

/// Registered ONGs, active and inactive.
#[component]
pub fn OngsAdminPage() -> impl IntoView {
    let ongs = LocalResource::new(|| api::fetch_ongs());

    view! {
        <ProtectedShell title="ONGs">
            <div class="admin-table-page">
                <Suspense fallback=move || view! { <LoadingSpinner label="ONGs"/> }>
                    {move || {
                        ongs.get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! {
                                        <EmptyState
                                            icon="🏢"
                                            title="Nenhuma ONG cadastrada"
                                            message="Cadastre ONGs pelo backend para vê-las aqui."
                                        />
                                    }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <table class="admin-table">
                                            <thead>
                                                <tr>
                                                    <th>"Nome"</th>
                                                    <th>"CNPJ"</th>
                                                    <th>"Endereço"</th>
                                                    <th>"Telefone"</th>
                                                    <th>"Situação"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {list
                                                    .into_iter()
                                                    .map(|ong| {
                                                        let (chip, chip_class) = situacao_chip(ong.ativo);
                                                        view! {
                                                            <tr>
                                                                <td>{ong.nome}</td>
                                                                <td>{ong.cnpj}</td>
                                                                <td>{ong.endereco}</td>
                                                                <td>{ong.telefone}</td>
                                                                <td>
                                                                    <span class=chip_class>{chip}</span>
                                                                </td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
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

/// Active/inactive chip for an ONG row.
fn situacao_chip(ativo: bool) -> (&'static str, &'static str) {
    if ativo {
        ("Ativa", "chip chip--aprovado")
    } else {
        ("Inativa", "chip chip--recusado")
    }
}

/// Registered adopters.
#[component]
pub fn AdotantesAdminPage() -> impl IntoView {
    let adotantes = LocalResource::new(|| api::fetch_adotantes());

    view! {
        <ProtectedShell title="Adotantes">
            <div class="admin-table-page">
                <Suspense fallback=move || view! { <LoadingSpinner label="adotantes"/> }>
                    {move || {
                        adotantes
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! {
                                        <EmptyState
                                            icon="👤"
                                            title="Nenhum adotante cadastrado"
                                            message="Quando alguém se cadastrar, aparece aqui."
                                        />
                                    }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <table class="admin-table">
                                            <thead>
                                                <tr>
                                                    <th>"CPF"</th>
                                                    <th>"Nome"</th>
                                                    <th>"Telefone"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {list
                                                    .into_iter()
                                                    .map(|adotante| {
                                                        view! {
                                                            <tr>
                                                                <td>{cpf::format_display(&adotante.cpf)}</td>
                                                                <td>{adotante.nome}</td>
                                                                <td>{adotante.telefone}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
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

/// Registered volunteers, with their ONG resolved to a name.
#[component]
pub fn VoluntariosAdminPage() -> impl IntoView {
    let data = LocalResource::new(|| async {
        let voluntarios = api::fetch_voluntarios().await?;
        let ongs = api::fetch_ongs().await?;
        Ok::<_, ApiError>((voluntarios, ongs))
    });

    view! {
        <ProtectedShell title="Voluntários">
            <div class="admin-table-page">
                <Suspense fallback=move || view! { <LoadingSpinner label="voluntários"/> }>
                    {move || {
                        data.get()
                            .map(|result| match result {
                                Ok((voluntarios, _)) if voluntarios.is_empty() => {
                                    view! {
                                        <EmptyState
                                            icon="🤝"
                                            title="Nenhum voluntário cadastrado"
                                            message="Voluntários cadastrados pelas ONGs aparecem aqui."
                                        />
                                    }
                                        .into_any()
                                }
                                Ok((voluntarios, ongs)) => {
                                    view! {
                                        <table class="admin-table">
                                            <thead>
                                                <tr>
                                                    <th>"CPF"</th>
                                                    <th>"Nome"</th>
                                                    <th>"Telefone"</th>
                                                    <th>"ONG"</th>
                                                    <th>"Cargo"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {voluntarios
                                                    .into_iter()
                                                    .map(|voluntario| {
                                                        let ong = ong_nome(&ongs, voluntario.id_ong);
                                                        view! {
                                                            <tr>
                                                                <td>{cpf::format_display(&voluntario.cpf)}</td>
                                                                <td>{voluntario.nome}</td>
                                                                <td>{voluntario.telefone}</td>
                                                                <td>{ong}</td>
                                                                <td>{voluntario.cargo}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
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

/// Interest counts by status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Contagem {
    pendentes: usize,
    aprovados: usize,
    recusados: usize,
}

fn contagem(interesses: &[Interesse]) -> Contagem {
    let mut c = Contagem::default();
    for interesse in interesses {
        match interesse.status.as_str() {
            "PENDENTE" => c.pendentes += 1,
            "APROVADO" => c.aprovados += 1,
            "RECUSADO" => c.recusados += 1,
            _ => {}
        }
    }
    c
}

/// One interest row for the platform-wide adoption overview.
#[derive(Clone, Debug, PartialEq, Eq)]
struct AdocaoRow {
    pet_nome: String,
    adotante_nome: String,
    status: String,
}

/// Every interest on the platform, joined with pet and adopter names.
/// Unlike the volunteer triage there is no ONG cut and rows whose animal
/// left the listing are kept.
fn adocao_rows(
    interesses: &[Interesse],
    animais: &[Animal],
    adotantes: &[Adotante],
) -> Vec<AdocaoRow> {
    interesses
        .iter()
        .map(|interesse| {
            let pet_nome = animais
                .iter()
                .find(|animal| animal.id == interesse.id_animal)
                .map_or_else(|| "Pet não disponível".to_owned(), |animal| animal.nome.clone());
            let adotante_nome = adotantes
                .iter()
                .find(|adotante| adotante.cpf == interesse.cpf_adotante)
                .map_or_else(
                    || cpf::format_display(&interesse.cpf_adotante),
                    |adotante| adotante.nome.clone(),
                );
            AdocaoRow {
                pet_nome,
                adotante_nome,
                status: interesse.status.clone(),
            }
        })
        .collect()
}

/// Platform-wide adoption overview: interest counts by status plus the
/// full list.
#[component]
pub fn AdocoesAdminPage() -> impl IntoView {
    let data = LocalResource::new(|| async {
        let interesses = api::fetch_interesses().await?;
        let animais = api::fetch_animais().await?;
        let adotantes = api::fetch_adotantes().await?;
        Ok::<_, ApiError>((contagem(&interesses), adocao_rows(&interesses, &animais, &adotantes)))
    });

    view! {
        <ProtectedShell title="Adoções">
            <div class="admin-table-page">
                <Suspense fallback=move || view! { <LoadingSpinner label="adoções"/> }>
                    {move || {
                        data.get()
                            .map(|result| match result {
                                Ok((_, rows)) if rows.is_empty() => {
                                    view! {
                                        <EmptyState
                                            icon="🏠"
                                            title="Nenhum interesse registrado"
                                            message="Interesses e adoções da plataforma aparecem aqui."
                                        />
                                    }
                                        .into_any()
                                }
                                Ok((totals, rows)) => {
                                    view! {
                                        <div class="adocoes-overview">
                                            <div class="adocoes-summary">
                                                <span class="chip chip--pendente">
                                                    {format!("{} pendentes", totals.pendentes)}
                                                </span>
                                                <span class="chip chip--aprovado">
                                                    {format!("{} aprovados", totals.aprovados)}
                                                </span>
                                                <span class="chip chip--recusado">
                                                    {format!("{} recusados", totals.recusados)}
                                                </span>
                                            </div>
                                            <table class="admin-table">
                                                <thead>
                                                    <tr>
                                                        <th>"Pet"</th>
                                                        <th>"Adotante"</th>
                                                        <th>"Status"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {rows
                                                        .into_iter()
                                                        .map(|row| {
                                                            let chip_class = format!(
                                                                "chip chip--{}",
                                                                row.status.to_ascii_lowercase(),
                                                            );
                                                            view! {
                                                                <tr>
                                                                    <td>{row.pet_nome}</td>
                                                                    <td>{row.adotante_nome}</td>
                                                                    <td>
                                                                        <span class=chip_class>{row.status}</span>
                                                                    </td>
                                                                </tr>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </tbody>
                                            </table>
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

/// One backend listing probe: label plus row count or failure.
type EndpointCheck = (&'static str, Result<usize, ApiError>);

/// Text and CSS class for one probe line.
fn check_line(outcome: &Result<usize, ApiError>) -> (String, &'static str) {
    match outcome {
        Ok(n) => (format!("OK · {n} registros"), "sys-check sys-check--ok"),
        Err(err) => (err.to_string(), "sys-check sys-check--fail"),
    }
}

/// Health line for the status panel.
fn health_line(status: &HealthStatus) -> (String, &'static str) {
    match status {
        HealthStatus::Online { latency_ms } => {
            (format!("Online · {latency_ms} ms"), "sys-check sys-check--ok")
        }
        HealthStatus::Degraded { status } => {
            (format!("Instável · HTTP {status}"), "sys-check sys-check--warn")
        }
        HealthStatus::Offline => ("Servidor offline".to_owned(), "sys-check sys-check--fail"),
    }
}

/// System status panel: backend health, one probe per listing endpoint,
/// and what the browser session storage currently holds.
#[component]
pub fn SistemaPage() -> impl IntoView {
    let health = LocalResource::new(|| api::check_health());

    let checks = LocalResource::new(|| async {
        let animais = api::fetch_animais().await.map(|l| l.len());
        let ongs = api::fetch_ongs().await.map(|l| l.len());
        let adotantes = api::fetch_adotantes().await.map(|l| l.len());
        let voluntarios = api::fetch_voluntarios().await.map(|l| l.len());
        let interesses = api::fetch_interesses().await.map(|l| l.len());
        let list: Vec<EndpointCheck> = vec![
            ("Animais", animais),
            ("ONGs", ongs),
            ("Adotantes", adotantes),
            ("Voluntários", voluntarios),
            ("Interesses", interesses),
        ];
        list
    });

    view! {
        <ProtectedShell title="Sistema">
            <div class="sys-page">
                <section class="sys-section">
                    <h2>"Servidor"</h2>
                    <Suspense fallback=move || view! { <LoadingSpinner/> }>
                        {move || {
                            health
                                .get()
                                .map(|status| {
                                    let (text, class) = health_line(&status);
                                    view! { <p class=class>{text}</p> }
                                })
                        }}
                    </Suspense>
                </section>
                <section class="sys-section">
                    <h2>"Endpoints"</h2>
                    <Suspense fallback=move || view! { <LoadingSpinner/> }>
                        {move || {
                            checks
                                .get()
                                .map(|list| {
                                    view! {
                                        <ul class="sys-list">
                                            {list
                                                .into_iter()
                                                .map(|(label, outcome)| {
                                                    let (text, class) = check_line(&outcome);
                                                    view! {
                                                        <li class="sys-list__item">
                                                            <span class="sys-list__label">{label}</span>
                                                            <span class=class>{text}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                })
                        }}
                    </Suspense>
                </section>
                <SessionPanel/>
            </div>
        </ProtectedShell>
    }
}

/// What the browser storage holds for the current session. Rendered only
/// behind the guard, so reading storage directly at render time is fine.
#[component]
fn SessionPanel() -> impl IntoView {
    let guard = expect_context::<crate::app::AppGuard>();
    let presence = |present: bool| {
        if present {
            ("presente", "sys-check sys-check--ok")
        } else {
            ("ausente", "sys-check sys-check--fail")
        }
    };
    let (identity_text, identity_class) = presence(guard.session().has_session());
    let (token_text, token_class) = presence(guard.session().token().is_some());

    view! {
        <section class="sys-section">
            <h2>"Sessão local"</h2>
            <ul class="sys-list">
                <li class="sys-list__item">
                    <span class="sys-list__label"><code>"mpet_current_user"</code></span>
                    <span class=identity_class>{identity_text}</span>
                </li>
                <li class="sys-list__item">
                    <span class="sys-list__label"><code>"mpet_session_token"</code></span>
                    <span class=token_class>{token_text}</span>
                </li>
            </ul>
        </section>
    }
}
