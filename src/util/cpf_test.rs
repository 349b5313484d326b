use super::*;

#[test]
fn clean_strips_mask_punctuation() {
    assert_eq!(clean("123.456.789-01"), "12345678901");
    assert_eq!(clean("123 456 789 01"), "12345678901");
    assert_eq!(clean("abc"), "");
}

#[test]
fn is_valid_requires_exactly_eleven_digits() {
    assert!(is_valid("12345678901"));
    assert!(is_valid("123.456.789-01"));

    assert!(!is_valid("1234567890"));
    assert!(!is_valid("123456789012"));
    assert!(!is_valid("admin"));
    assert!(!is_valid(""));
}

#[test]
fn format_display_masks_valid_cpfs() {
    assert_eq!(format_display("12345678901"), "123.456.789-01");
    // Already-masked input normalizes to the same mask.
    assert_eq!(format_display("123.456.789-01"), "123.456.789-01");
}

#[test]
fn format_display_passes_through_non_cpf_values() {
    assert_eq!(format_display("admin"), "admin");
    assert_eq!(format_display("123"), "123");
}
