use super::*;
use crate::i18n::translations;
use crate::state::language::Language;

#[test]
fn validate_login_input_trims_email_only() {
    assert_eq!(
        validate_login_input("  officer@democorp.local ", " secret "),
        Ok(("officer@democorp.local".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email_first() {
    assert_eq!(validate_login_input("   ", ""), Err(LoginInputError::MissingEmail));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("a@b.com", ""), Err(LoginInputError::MissingPassword));
}

#[test]
fn input_errors_are_translated() {
    let en = &translations(Language::En).auth;
    let ar = &translations(Language::Ar).auth;
    assert_eq!(LoginInputError::MissingEmail.message(en), "Enter your email address.");
    assert_ne!(LoginInputError::MissingPassword.message(ar), LoginInputError::MissingPassword.message(en));
}
