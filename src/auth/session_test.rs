use super::*;
use crate::auth::role::Role;
use crate::net::types::{Identity, IdentityPatch};
use crate::util::storage::{KeyValueStore, MemoryStore};

fn identity(role: Role) -> Identity {
    Identity {
        cpf: "12345678901".to_owned(),
        nome: "Maria Souza".to_owned(),
        role,
        email: Some("maria@exemplo.com".to_owned()),
        telefone: None,
        id_ong: None,
        cargo: None,
        login_at: Some("2025-03-01T12:00:00Z".to_owned()),
    }
}

fn session() -> SessionStore<MemoryStore> {
    SessionStore::new(MemoryStore::new())
}

#[test]
fn save_then_current_round_trips() {
    let session = session();
    session.save(&identity(Role::Adotante), "tok-1");

    let current = session.current().unwrap();
    assert_eq!(current.nome, "Maria Souza");
    assert_eq!(current.role, Role::Adotante);
    assert!(session.has_session());
    assert_eq!(session.token().as_deref(), Some("tok-1"));
}

#[test]
fn empty_store_has_no_session() {
    let session = session();

    assert_eq!(session.current(), None);
    assert!(!session.has_session());
    assert_eq!(session.role(), None);
    assert_eq!(session.token(), None);
}

#[test]
fn save_replaces_the_previous_session() {
    let session = session();
    session.save(&identity(Role::Adotante), "tok-1");

    let mut admin = identity(Role::Admin);
    admin.cpf = "admin".to_owned();
    session.save(&admin, "tok-2");

    assert_eq!(session.role(), Some(Role::Admin));
    assert_eq!(session.token().as_deref(), Some("tok-2"));
}

#[test]
fn unreadable_identity_reads_as_logged_out() {
    let store = MemoryStore::new();
    store.set(IDENTITY_KEY, "{not json");
    let session = SessionStore::new(store);

    assert_eq!(session.current(), None);
    assert!(!session.has_session());
}

#[test]
fn next_login_overwrites_unreadable_identity() {
    let store = MemoryStore::new();
    store.set(IDENTITY_KEY, "{not json");
    let session = SessionStore::new(store);

    session.save(&identity(Role::Voluntario), "tok-3");

    assert_eq!(session.role(), Some(Role::Voluntario));
}

#[test]
fn clear_removes_identity_and_token_and_is_idempotent() {
    let store = MemoryStore::new();
    let session = SessionStore::new(store.clone());
    session.save(&identity(Role::Adotante), "tok-1");

    session.clear();
    assert!(!session.has_session());
    assert_eq!(session.token(), None);
    assert!(store.is_empty());

    // Logging out twice must not fail.
    session.clear();
    assert!(store.is_empty());
}

#[test]
fn update_identity_merges_and_persists() {
    let session = session();
    session.save(&identity(Role::Adotante), "tok-1");

    session.update_identity(&IdentityPatch {
        nome: Some("Maria S. Lima".to_owned()),
        telefone: Some("31999990000".to_owned()),
        ..IdentityPatch::default()
    });

    let current = session.current().unwrap();
    assert_eq!(current.nome, "Maria S. Lima");
    assert_eq!(current.telefone.as_deref(), Some("31999990000"));
    // Untouched fields survive the merge.
    assert_eq!(current.email.as_deref(), Some("maria@exemplo.com"));
    assert_eq!(current.login_at.as_deref(), Some("2025-03-01T12:00:00Z"));
}

#[test]
fn update_identity_without_session_is_a_no_op() {
    let store = MemoryStore::new();
    let session = SessionStore::new(store.clone());

    session.update_identity(&IdentityPatch {
        nome: Some("Alguém".to_owned()),
        ..IdentityPatch::default()
    });

    assert!(store.is_empty());
}
