//! CPF cleaning, validation, and display formatting.
//!
//! The backend keys adopters and volunteers by bare 11-digit CPF strings.
//! Users type them with dots and dashes; everything that leaves this client
//! strips the punctuation first.

#[cfg(test)]
#[path = "cpf_test.rs"]
mod cpf_test;

/// Strip everything that is not an ASCII digit.
pub fn clean(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// True when `raw` reduces to exactly the 11 digits of a CPF.
pub fn is_valid(raw: &str) -> bool {
    clean(raw).len() == 11
}

/// Render a CPF with the usual mask: `123.456.789-01`.
///
/// Anything that does not reduce to 11 digits comes back unchanged, so
/// the `admin` login key and malformed rows stay readable.
pub fn format_display(raw: &str) -> String {
    let digits = clean(raw);
    if digits.len() != 11 {
        return raw.to_owned();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..]
    )
}
