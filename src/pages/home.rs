//! Public landing page: hero, featured pets, backend health badge.

use leptos::prelude::*;

use crate::auth::policy::paths;
use crate::components::empty_state::EmptyState;
use crate::components::loading::LoadingSpinner;
use crate::components::public_nav::PublicNav;
use crate::net::api::{self, HealthStatus};
use crate::util::adapter::{PetView, adapt_list};

/// How many pets the landing page showcases.
const FEATURED_COUNT: usize = 6;

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = LocalResource::new(|| async {
        api::fetch_animais()
            .await
            .map(|animais| adapt_list(&animais))
    });

    view! {
        <div class="home-page">
            <PublicNav/>
            <section class="hero">
                <h1 class="hero__title">"Encontre seu novo melhor amigo"</h1>
                <p class="hero__subtitle">
                    "Cães e gatos de ONGs parceiras esperando por um lar. "
                    "Dê match, converse com a ONG e adote com responsabilidade."
                </p>
                <a class="hero__cta" href=paths::LOGIN>"Quero adotar"</a>
            </section>

            <section class="featured">
                <h2 class="featured__title">"Pets esperando por você"</h2>
                <Suspense fallback=move || view! { <LoadingSpinner label="pets"/> }>
                    {move || {
                        featured.get().map(|outcome| match outcome {
                            Ok(pets) if pets.is_empty() => view! {
                                <EmptyState
                                    icon="🐾"
                                    title="Nenhum pet por aqui ainda"
                                    message="As ONGs parceiras ainda não cadastraram animais."
                                />
                            }
                            .into_any(),
                            Ok(pets) => view! {
                                <div class="featured__grid">
                                    {pets
                                        .into_iter()
                                        .take(FEATURED_COUNT)
                                        .map(|pet| view! { <FeaturedCard pet=pet/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any(),
                            Err(err) => view! {
                                <EmptyState
                                    icon="📡"
                                    title="Servidor indisponível"
                                    message=err.to_string()
                                />
                            }
                            .into_any(),
                        })
                    }}
                </Suspense>
            </section>

            <HealthBadge/>
        </div>
    }
}

/// Small showcase card, photo plus name. The full card with actions lives
/// behind login on the match page.
#[component]
fn FeaturedCard(pet: PetView) -> impl IntoView {
    let alt = format!("Foto de {}", pet.nome);
    view! {
        <div class="featured-card">
            <img class="featured-card__photo" src=pet.imagem alt=alt loading="lazy"/>
            <div class="featured-card__body">
                <span class="featured-card__name">
                    <span aria-hidden="true">{pet.icon}</span>
                    " "
                    {pet.nome}
                </span>
                <span class="featured-card__tag">{pet.tag}</span>
            </div>
        </div>
    }
}

/// Corner badge polling `/api/health` every 15 seconds while the landing
/// page is mounted. Nothing renders until the first probe answers.
#[component]
fn HealthBadge() -> impl IntoView {
    let status = RwSignal::new(None::<HealthStatus>);

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                let report = api::check_health().await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                status.set(Some(report));
                gloo_timers::future::sleep(std::time::Duration::from_secs(15)).await;
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="health-badge">
            {move || {
                status.get().map(|report| match report {
                    HealthStatus::Online { latency_ms } => view! {
                        <span class="health-badge__dot health-badge__dot--online" title="Servidor online"></span>
                        <span class="health-badge__text">
                            {format!("Online · {latency_ms} ms")}
                        </span>
                    }
                    .into_any(),
                    HealthStatus::Degraded { status } => view! {
                        <span class="health-badge__dot health-badge__dot--degraded"></span>
                        <span class="health-badge__text">
                            {format!("Instável · HTTP {status}")}
                        </span>
                    }
                    .into_any(),
                    HealthStatus::Offline => view! {
                        <span class="health-badge__dot health-badge__dot--offline"></span>
                        <span class="health-badge__text">"Servidor offline"</span>
                    }
                    .into_any(),
                })
            }}
        </div>
    }
}
