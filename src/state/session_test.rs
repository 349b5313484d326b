use super::*;
use crate::auth::role::Role;

fn identity() -> Identity {
    Identity {
        cpf: "12345678901".to_owned(),
        nome: "Maria Souza".to_owned(),
        role: Role::Adotante,
        email: None,
        telefone: None,
        id_ong: None,
        cargo: None,
        login_at: None,
    }
}

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn default_has_no_identity_and_is_not_loading() {
    let state = SessionState::default();
    assert!(state.identity.is_none());
    assert!(!state.loading);
}

#[test]
fn booting_is_loading_without_identity() {
    let state = SessionState::booting();
    assert!(state.loading);
    assert!(state.identity.is_none());
}

#[test]
fn loaded_clears_the_loading_flag() {
    let logged_in = SessionState::loaded(Some(identity()));
    assert!(!logged_in.loading);
    assert_eq!(logged_in.nome().as_deref(), Some("Maria Souza"));

    let logged_out = SessionState::loaded(None);
    assert!(!logged_out.loading);
    assert_eq!(logged_out.nome(), None);
}
