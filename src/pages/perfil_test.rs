use super::*;

#[test]
fn patch_requires_a_name() {
    assert_eq!(build_patch("", "a@b.com", "11"), Err("Informe seu nome."));
    assert_eq!(build_patch("   ", "", ""), Err("Informe seu nome."));
}

#[test]
fn patch_trims_and_keeps_filled_fields() {
    let patch =
        build_patch("  Maria Silva  ", " maria@exemplo.com ", "11 99999-0000").unwrap();

    assert_eq!(patch.nome.as_deref(), Some("Maria Silva"));
    assert_eq!(patch.email.as_deref(), Some("maria@exemplo.com"));
    assert_eq!(patch.telefone.as_deref(), Some("11 99999-0000"));
}

#[test]
fn empty_optional_fields_mean_leave_as_is() {
    let patch = build_patch("Maria", "", "   ").unwrap();

    assert_eq!(patch.nome.as_deref(), Some("Maria"));
    assert_eq!(patch.email, None);
    assert_eq!(patch.telefone, None);
}

#[test]
fn login_at_renders_as_brazilian_date() {
    assert_eq!(format_login_at("2026-08-25T14:03:22.123Z"), "25/08/2026");
    assert_eq!(format_login_at("2026-01-02"), "02/01/2026");
}

#[test]
fn login_at_passes_unrecognized_values_through() {
    assert_eq!(format_login_at("ontem"), "ontem");
    assert_eq!(format_login_at(""), "");
}
