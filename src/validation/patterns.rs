//! Compiled regexes for the pattern constraints used by the built-in screens.
//!
//! Each regex is compiled once on first use and cloned cheaply afterwards.

use std::sync::LazyLock;

use regex::Regex;

/// Allowed in the special-character password rule.
pub const PASSWORD_SPECIAL_CHARS: &str = r#"!@#$%^&*()-_"=+{}; :,<.>"#;

static LETTERS_AND_SPACES: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[a-zA-Z\s]+$"));
static LATIN_LETTER: LazyLock<Regex> = LazyLock::new(|| compile(r"[a-zA-Z]"));
static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| compile(r"[A-Z]"));
static LOWERCASE: LazyLock<Regex> = LazyLock::new(|| compile(r"[a-z]"));
static DIGIT: LazyLock<Regex> = LazyLock::new(|| compile(r"[0-9]+"));
static SPECIAL_CHAR: LazyLock<Regex> =
    LazyLock::new(|| compile(r##"[!@#$%^&*()\-_"=+{}; :,<.>]"##));
static TEN_DIGITS: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{10}$"));
static TWELVE_DIGITS: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{12}$"));
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
});
static SIGNUP_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^[a-zA-Z0-9.!#$%&’*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
});

// All patterns above are literals covered by the tests below.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("built-in pattern {pattern:?}: {e}"))
}

pub fn letters_and_spaces() -> Regex {
    LETTERS_AND_SPACES.clone()
}

pub fn latin_letter() -> Regex {
    LATIN_LETTER.clone()
}

pub fn uppercase() -> Regex {
    UPPERCASE.clone()
}

pub fn lowercase() -> Regex {
    LOWERCASE.clone()
}

pub fn digit() -> Regex {
    DIGIT.clone()
}

pub fn special_char() -> Regex {
    SPECIAL_CHAR.clone()
}

pub fn ten_digits() -> Regex {
    TEN_DIGITS.clone()
}

pub fn twelve_digits() -> Regex {
    TWELVE_DIGITS.clone()
}

/// Light RFC 5322 shape: local part, `@`, dot-separated DNS labels.
pub fn email() -> Regex {
    EMAIL.clone()
}

/// Stricter email rule used by registration.
pub fn signup_email() -> Regex {
    SIGNUP_EMAIL.clone()
}
