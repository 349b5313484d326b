//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! One route per entry in the access tables (`auth::policy::paths`), so
//! the router and the guard always agree on which paths exist. Protected
//! pages wrap themselves in [`crate::components::guarded::Guarded`]; the
//! router itself stays unaware of roles.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::guard::RouteGuard;
use crate::auth::session::SessionStore;
use crate::components::toast::ToastHost;
use crate::pages::admin::{
    AdminDashboardPage, AdocoesAdminPage, AdotantesAdminPage, AnimaisAdminPage, OngsAdminPage,
    SistemaPage, VoluntariosAdminPage,
};
use crate::pages::adotante::{AdotanteDashboardPage, InteressesPage, MatchPage};
use crate::pages::chats::ChatsPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::perfil::PerfilPage;
use crate::pages::sobre::SobrePage;
use crate::pages::voluntario::{
    VoluntarioAdocoesPage, VoluntarioAnimaisPage, VoluntarioDashboardPage, VoluntarioInteressesPage,
};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::storage::WebStorage;

/// The session store as the app wires it: identity and token in
/// `localStorage`.
pub type AppSession = SessionStore<WebStorage>;

/// The route guard as the app wires it: session in `localStorage`, the
/// return URL in `sessionStorage` so it dies with the tab.
pub type AppGuard = RouteGuard<WebStorage, WebStorage>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, the guard and the shared reactive state, then
/// sets up one route per known path.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AppSession::new(WebStorage::local());
    let guard = AppGuard::new(session.clone(), WebStorage::session());

    let session_state = RwSignal::new(SessionState::booting());
    let ui = RwSignal::new(UiState::default());

    provide_context(guard);
    provide_context(session_state);
    provide_context(ui);

    // First storage read happens on the client; SSR stays in `booting`.
    Effect::new(move || {
        session_state.set(SessionState::loaded(session.current()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/mpet-client.css"/>
        <Title text="MPet — Adoção de Pets"/>

        <Router>
            <ToastHost/>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("sobre") view=SobrePage/>

                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=AdminDashboardPage
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("animais"))
                    view=AnimaisAdminPage
                />
                <Route path=(StaticSegment("admin"), StaticSegment("ongs")) view=OngsAdminPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("adotantes"))
                    view=AdotantesAdminPage
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("voluntarios"))
                    view=VoluntariosAdminPage
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("adocoes"))
                    view=AdocoesAdminPage
                />
                <Route path=(StaticSegment("admin"), StaticSegment("sistema")) view=SistemaPage/>

                <Route
                    path=(StaticSegment("adotante"), StaticSegment("dashboard"))
                    view=AdotanteDashboardPage
                />
                <Route
                    path=(StaticSegment("adotante"), StaticSegment("perfil"))
                    view=PerfilPage
                />
                <Route path=(StaticSegment("adotante"), StaticSegment("match")) view=MatchPage/>
                <Route
                    path=(StaticSegment("adotante"), StaticSegment("interesses"))
                    view=InteressesPage
                />
                <Route path=(StaticSegment("adotante"), StaticSegment("chats")) view=ChatsPage/>

                <Route
                    path=(StaticSegment("voluntario"), StaticSegment("dashboard"))
                    view=VoluntarioDashboardPage
                />
                <Route
                    path=(StaticSegment("voluntario"), StaticSegment("perfil"))
                    view=PerfilPage
                />
                <Route
                    path=(StaticSegment("voluntario"), StaticSegment("animais"))
                    view=VoluntarioAnimaisPage
                />
                <Route
                    path=(StaticSegment("voluntario"), StaticSegment("interesses"))
                    view=VoluntarioInteressesPage
                />
                <Route
                    path=(StaticSegment("voluntario"), StaticSegment("chats"))
                    view=ChatsPage
                />
                <Route
                    path=(StaticSegment("voluntario"), StaticSegment("adocoes"))
                    view=VoluntarioAdocoesPage
                />
            </Routes>
        </Router>
    }
}
