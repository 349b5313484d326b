use super::*;
use crate::auth::role::Role;

#[test]
fn login_success_body_parses() {
    let body = r#"{
        "success": true,
        "token": "a1b2c3",
        "user": {"cpf": "12345678901", "nome": "Maria Souza", "role": "ADOTANTE"}
    }"#;

    let parsed: LoginResponse = serde_json::from_str(body).unwrap();

    assert!(parsed.success);
    assert_eq!(parsed.token.as_deref(), Some("a1b2c3"));
    let user = parsed.user.unwrap();
    assert_eq!(user.nome, "Maria Souza");
    assert_eq!(user.role, Role::Adotante);
    assert_eq!(user.email, None);
}

#[test]
fn login_failure_body_defaults_success_to_false() {
    // The backend's 401 body carries only `error`.
    let body = r#"{"error": "CPF ou senha incorretos"}"#;

    let parsed: LoginResponse = serde_json::from_str(body).unwrap();

    assert!(!parsed.success);
    assert!(parsed.user.is_none());
    assert_eq!(parsed.error.as_deref(), Some("CPF ou senha incorretos"));
}

#[test]
fn volunteer_identity_round_trips_with_ong_fields() {
    let identity = Identity {
        cpf: "98765432100".to_owned(),
        nome: "Carlos Lima".to_owned(),
        role: Role::Voluntario,
        email: None,
        telefone: Some("31988887777".to_owned()),
        id_ong: Some(2),
        cargo: Some("COORDENADOR".to_owned()),
        login_at: Some("2025-03-01T12:00:00Z".to_owned()),
    };

    let json = serde_json::to_string(&identity).unwrap();
    assert!(json.contains("\"idOng\":2"), "camelCase wire field: {json}");
    assert!(!json.contains("email"), "unset options stay out of storage: {json}");

    let back: Identity = serde_json::from_str(&json).unwrap();
    assert_eq!(back, identity);
}

#[test]
fn identity_patch_merges_only_set_fields() {
    let mut identity = Identity {
        cpf: "12345678901".to_owned(),
        nome: "Maria Souza".to_owned(),
        role: Role::Adotante,
        email: Some("maria@exemplo.com".to_owned()),
        telefone: None,
        id_ong: None,
        cargo: None,
        login_at: None,
    };

    identity.apply(&IdentityPatch {
        telefone: Some("31999990000".to_owned()),
        ..IdentityPatch::default()
    });

    assert_eq!(identity.telefone.as_deref(), Some("31999990000"));
    assert_eq!(identity.nome, "Maria Souza");
    assert_eq!(identity.email.as_deref(), Some("maria@exemplo.com"));
}

#[test]
fn animal_parses_backend_row() {
    let body = r#"{
        "id": 7,
        "idOng": 1,
        "nome": "Rex",
        "tipo": "CACHORRO",
        "porte": "MEDIO",
        "sexo": "M",
        "vacinado": true,
        "descricao": "Muito brincalhão",
        "imageUrl": ""
    }"#;

    let animal: Animal = serde_json::from_str(body).unwrap();

    assert_eq!(animal.id, 7);
    assert_eq!(animal.id_ong, 1);
    assert_eq!(animal.tipo, "CACHORRO");
    assert!(animal.vacinado);
    assert!(animal.image_url.is_empty());
}

#[test]
fn animal_tolerates_missing_optional_columns() {
    // Rows created before porte/sexo existed come back without them.
    let body = r#"{"id": 1, "idOng": 1, "nome": "Mimi", "tipo": "GATO"}"#;

    let animal: Animal = serde_json::from_str(body).unwrap();

    assert_eq!(animal.porte, "");
    assert_eq!(animal.sexo, "");
    assert!(!animal.vacinado);
}

#[test]
fn interesse_status_helpers() {
    let body = r#"{"id": 3, "cpfAdotante": "12345678901", "idAnimal": 7, "status": "PENDENTE"}"#;
    let interesse: Interesse = serde_json::from_str(body).unwrap();

    assert!(interesse.is_pendente());
    assert!(!interesse.is_aprovado());
}

#[test]
fn mutation_error_body_reads_as_failure() {
    let body = r#"{"error": "Interesse não encontrado"}"#;
    let parsed: MutationResponse = serde_json::from_str(body).unwrap();

    assert!(!parsed.success);
    assert_eq!(parsed.error.as_deref(), Some("Interesse não encontrado"));
}
