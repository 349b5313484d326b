use super::*;

#[test]
fn serializes_to_backend_wire_strings() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    assert_eq!(serde_json::to_string(&Role::Adotante).unwrap(), "\"ADOTANTE\"");
    assert_eq!(
        serde_json::to_string(&Role::Voluntario).unwrap(),
        "\"VOLUNTARIO\""
    );
}

#[test]
fn deserializes_from_backend_wire_strings() {
    let role: Role = serde_json::from_str("\"VOLUNTARIO\"").unwrap();
    assert_eq!(role, Role::Voluntario);
}

#[test]
fn unknown_role_string_is_rejected() {
    let result = serde_json::from_str::<Role>("\"SUPERUSER\"");
    assert!(result.is_err());
}

#[test]
fn wire_string_round_trips_through_as_str() {
    for role in Role::ALL {
        let json = format!("\"{}\"", role.as_str());
        let parsed: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, role);
    }
}
