use super::*;
use crate::auth::policy::{PUBLIC_PATHS, paths};
use crate::auth::role::Role;
use crate::auth::session::SessionStore;
use crate::net::types::Identity;
use crate::util::storage::{KeyValueStore, MemoryStore};

fn identity(role: Role) -> Identity {
    Identity {
        cpf: "12345678901".to_owned(),
        nome: "Maria Souza".to_owned(),
        role,
        email: None,
        telefone: None,
        id_ong: None,
        cargo: None,
        login_at: None,
    }
}

struct Harness {
    guard: RouteGuard<MemoryStore, MemoryStore>,
    returns: MemoryStore,
}

fn anonymous() -> Harness {
    let returns = MemoryStore::new();
    let guard = RouteGuard::new(SessionStore::new(MemoryStore::new()), returns.clone());
    Harness { guard, returns }
}

fn logged_in(role: Role) -> Harness {
    let harness = anonymous();
    harness.guard.session().save(&identity(role), "tok");
    harness
}

#[test]
fn public_paths_render_without_a_session() {
    let harness = anonymous();

    for path in PUBLIC_PATHS {
        let state = harness.guard.protect(path);
        assert_eq!(state, GuardState::PublicOk, "{path}");
        assert!(state.allows_render());
    }
    // No bounce happened, so nothing was saved to resume later.
    assert!(harness.returns.is_empty());
}

#[test]
fn public_paths_render_with_a_session_too() {
    let harness = logged_in(Role::Adotante);

    assert_eq!(harness.guard.protect(paths::HOME), GuardState::PublicOk);
    assert_eq!(harness.guard.protect(paths::LOGIN), GuardState::PublicOk);
}

#[test]
fn every_allowed_path_is_authorized_for_its_role() {
    for role in Role::ALL {
        let harness = logged_in(role);
        for path in crate::auth::policy::allowed_paths(role) {
            assert_eq!(harness.guard.protect(path), GuardState::Authorized, "{role:?} {path}");
        }
    }
}

#[test]
fn protected_path_without_session_saves_return_path_and_goes_to_login() {
    let harness = anonymous();

    let state = harness.guard.protect(paths::ADOTANTE_MATCH);

    assert_eq!(
        state,
        GuardState::Unauthenticated { login_path: paths::LOGIN }
    );
    assert!(!state.allows_render());
    assert_eq!(
        harness.returns.get(RETURN_KEY),
        Some(paths::ADOTANTE_MATCH.to_owned())
    );
}

#[test]
fn later_bounce_overwrites_the_saved_return_path() {
    let harness = anonymous();

    harness.guard.protect(paths::ADOTANTE_MATCH);
    harness.guard.protect(paths::ADOTANTE_INTERESSES);

    assert_eq!(
        harness.returns.get(RETURN_KEY),
        Some(paths::ADOTANTE_INTERESSES.to_owned())
    );
}

#[test]
fn foreign_path_redirects_to_own_landing_page_with_notice() {
    let harness = logged_in(Role::Adotante);

    let state = harness.guard.protect(paths::ADMIN_DASHBOARD);

    assert_eq!(
        state,
        GuardState::Unauthorized {
            notice: DENIED_NOTICE,
            redirect_to: paths::ADOTANTE_MATCH,
        }
    );
    assert!(!state.allows_render());
    // The session survives a denial; only the page changes.
    assert!(harness.guard.session().has_session());
    // And no return path is saved: there is nothing to resume.
    assert!(harness.returns.is_empty());
}

#[test]
fn admin_on_adopter_path_is_bounced_to_admin_dashboard() {
    let harness = logged_in(Role::Admin);

    let state = harness.guard.protect(paths::ADOTANTE_MATCH);

    assert_eq!(
        state,
        GuardState::Unauthorized {
            notice: DENIED_NOTICE,
            redirect_to: paths::ADMIN_DASHBOARD,
        }
    );
}

#[test]
fn unknown_path_with_session_is_denied_not_crashed() {
    let harness = logged_in(Role::Voluntario);

    let state = harness.guard.protect("/naoexiste");

    assert_eq!(
        state,
        GuardState::Unauthorized {
            notice: DENIED_NOTICE,
            redirect_to: paths::VOLUNTARIO_DASHBOARD,
        }
    );
}

#[test]
fn can_access_mirrors_protect_without_side_effects() {
    let harness = logged_in(Role::Adotante);

    assert!(harness.guard.can_access(paths::SOBRE));
    assert!(harness.guard.can_access(paths::ADOTANTE_PERFIL));
    assert!(!harness.guard.can_access(paths::ADMIN_SISTEMA));

    let anon = anonymous();
    assert!(anon.guard.can_access(paths::HOME));
    assert!(!anon.guard.can_access(paths::VOLUNTARIO_ANIMAIS));
    // Unlike protect, a denied can_access saves nothing.
    assert!(anon.returns.is_empty());
}

#[test]
fn resume_consumes_the_saved_path_exactly_once() {
    let harness = logged_in(Role::Adotante);
    harness.returns.set(RETURN_KEY, paths::ADOTANTE_INTERESSES);

    assert_eq!(harness.guard.resume_after_login(), paths::ADOTANTE_INTERESSES);
    assert_eq!(harness.returns.get(RETURN_KEY), None);

    // A second login in the same tab starts fresh at the role default.
    assert_eq!(harness.guard.resume_after_login(), paths::ADOTANTE_MATCH);
}

#[test]
fn resume_falls_back_to_role_default_when_nothing_is_saved() {
    assert_eq!(
        logged_in(Role::Admin).guard.resume_after_login(),
        paths::ADMIN_DASHBOARD
    );
    assert_eq!(
        logged_in(Role::Voluntario).guard.resume_after_login(),
        paths::VOLUNTARIO_DASHBOARD
    );
}

#[test]
fn resume_never_loops_back_into_login() {
    let harness = logged_in(Role::Adotante);
    harness.returns.set(RETURN_KEY, paths::LOGIN);

    assert_eq!(harness.guard.resume_after_login(), paths::ADOTANTE_MATCH);
}

#[test]
fn resume_without_session_returns_to_login() {
    let harness = anonymous();
    harness.returns.set(RETURN_KEY, paths::ADOTANTE_MATCH);

    assert_eq!(harness.guard.resume_after_login(), paths::LOGIN);
    // Still consumed: the stale path must not replay later.
    assert_eq!(harness.returns.get(RETURN_KEY), None);
}

#[test]
fn bounce_then_login_then_resume_lands_on_the_original_page() {
    // The full scenario: anonymous hit on a deep page, login, resume.
    let harness = anonymous();
    assert!(!harness.guard.protect(paths::VOLUNTARIO_ADOCOES).allows_render());

    harness.guard.session().save(&identity(Role::Voluntario), "tok");

    assert_eq!(harness.guard.resume_after_login(), paths::VOLUNTARIO_ADOCOES);
}

#[test]
fn normalize_keeps_canonical_paths() {
    assert_eq!(normalize(paths::ADOTANTE_MATCH), paths::ADOTANTE_MATCH);
    assert_eq!(normalize(paths::HOME), paths::HOME);
    assert_eq!(normalize(paths::LOGIN), paths::LOGIN);
}

#[test]
fn normalize_trims_trailing_slashes() {
    assert_eq!(normalize("/admin/dashboard/"), paths::ADMIN_DASHBOARD);
    assert_eq!(normalize("/sobre/"), paths::SOBRE);
    assert_eq!(normalize("//"), paths::HOME);
}

#[test]
fn normalize_recovers_suffix_under_a_deployment_prefix() {
    assert_eq!(normalize("/mpet/adotante/match"), paths::ADOTANTE_MATCH);
    assert_eq!(normalize("/apps/mpet/admin/ongs/"), paths::ADMIN_ONGS);
    assert_eq!(normalize("/mpet/login"), paths::LOGIN);
}

#[test]
fn normalize_passes_unknown_paths_through() {
    assert_eq!(normalize("/naoexiste"), "/naoexiste");
    assert_eq!(normalize("/x/y/z"), "/x/y/z");
}

#[test]
fn normalize_maps_empty_to_home() {
    assert_eq!(normalize(""), paths::HOME);
}

#[test]
fn guard_normalizes_before_deciding() {
    let harness = logged_in(Role::Adotante);

    // Prefixed and slash-suffixed spellings of an allowed page authorize.
    assert_eq!(
        harness.guard.protect("/mpet/adotante/match/"),
        GuardState::Authorized
    );
    assert!(harness.guard.can_access("/mpet/adotante/perfil"));
}

#[test]
fn saved_return_path_is_the_normalized_one() {
    let harness = anonymous();

    harness.guard.protect("/mpet/voluntario/animais/");

    assert_eq!(
        harness.returns.get(RETURN_KEY),
        Some(paths::VOLUNTARIO_ANIMAIS.to_owned())
    );
}
