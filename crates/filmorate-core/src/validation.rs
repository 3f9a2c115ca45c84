//! # Domain Rules
//!
//! Write-time business rules for films and users.
//!
//! These run inside the entity store on every create and update. They cover
//! cross-field rules only; shape checks (required fields, JSON types) belong
//! to whoever builds the record.

use crate::model::{Film, User};
use crate::primitives::{MAX_DESCRIPTION_LENGTH, earliest_release_date};
use crate::types::FilmorateError;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// `local@domain` with no whitespace and exactly one `@`. The domain is one
/// or more dot-separated labels, so `user@localhost` passes and
/// `user@example..com` does not.
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)*$").ok());

// =============================================================================
// FILM RULES
// =============================================================================

/// Check a film against the catalog rules.
///
/// - name is not blank
/// - description is at most `MAX_DESCRIPTION_LENGTH` characters
/// - release date is not before the first public screening
/// - duration is positive
pub fn check_film(film: &Film) -> Result<(), FilmorateError> {
    if film.name.trim().is_empty() {
        return Err(FilmorateError::validation("film name must not be blank"));
    }

    if let Some(description) = &film.description {
        let length = description.chars().count();
        if length > MAX_DESCRIPTION_LENGTH {
            return Err(FilmorateError::Validation(format!(
                "film description is {} characters, maximum is {}",
                length, MAX_DESCRIPTION_LENGTH
            )));
        }
    }

    let earliest = earliest_release_date();
    if film.release_date < earliest {
        return Err(FilmorateError::Validation(format!(
            "release date {} is before {}",
            film.release_date, earliest
        )));
    }

    if film.duration <= 0 {
        return Err(FilmorateError::validation("film duration must be positive"));
    }

    Ok(())
}

// =============================================================================
// USER RULES
// =============================================================================

/// Check whether a string looks like an email address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

/// Check a user against the catalog rules.
///
/// - email is syntactically valid
/// - login is not blank and contains no whitespace
/// - birthday, if given, is not after `today`
///
/// Email uniqueness is a cross-record rule and is enforced by the store.
pub fn check_user(user: &User, today: NaiveDate) -> Result<(), FilmorateError> {
    if user.email.trim().is_empty() {
        return Err(FilmorateError::validation("email must not be blank"));
    }
    if !is_valid_email(&user.email) {
        return Err(FilmorateError::Validation(format!(
            "'{}' is not a valid email address",
            user.email
        )));
    }

    if user.login.is_empty() {
        return Err(FilmorateError::validation("login must not be blank"));
    }
    if user.login.chars().any(char::is_whitespace) {
        return Err(FilmorateError::validation(
            "login must not contain whitespace",
        ));
    }

    if let Some(birthday) = user.birthday
        && birthday > today
    {
        return Err(FilmorateError::Validation(format!(
            "birthday {} is in the future",
            birthday
        )));
    }

    Ok(())
}

/// Replace an absent or blank display name with the login.
pub fn default_name_to_login(user: &mut User) {
    let blank = user.name.as_deref().is_none_or(|n| n.trim().is_empty());
    if blank {
        user.name = Some(user.login.clone());
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn film(release: NaiveDate) -> Film {
        Film::new("Arrival of a Train", release, 1)
    }

    #[test]
    fn release_on_first_screening_accepted() {
        assert!(check_film(&film(date(1895, 12, 28))).is_ok());
    }

    #[test]
    fn release_day_before_first_screening_rejected() {
        let result = check_film(&film(date(1895, 12, 27)));
        assert!(matches!(result, Err(FilmorateError::Validation(_))));
    }

    #[test]
    fn blank_film_name_rejected() {
        let mut f = film(date(2000, 1, 1));
        f.name = "  ".to_string();
        assert!(check_film(&f).is_err());
    }

    #[test]
    fn description_limit_counts_characters() {
        let exact = film(date(2000, 1, 1)).with_description("ж".repeat(200));
        assert!(check_film(&exact).is_ok());

        let over = film(date(2000, 1, 1)).with_description("a".repeat(201));
        assert!(check_film(&over).is_err());
    }

    #[test]
    fn non_positive_duration_rejected() {
        let mut f = film(date(2000, 1, 1));
        f.duration = 0;
        assert!(check_film(&f).is_err());
        f.duration = -5;
        assert!(check_film(&f).is_err());
    }

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("test@yandex.ru"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("bad_email"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spa ce@example.com"));
        assert!(is_valid_email("user@localhost"));
        assert!(!is_valid_email("double@example..com"));
        assert!(!is_valid_email("trailing@example."));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn login_with_whitespace_rejected() {
        let today = date(2024, 6, 1);
        let user = User::new("a@example.com", "bad login");
        assert!(check_user(&user, today).is_err());

        let tabbed = User::new("a@example.com", "bad\tlogin");
        assert!(check_user(&tabbed, today).is_err());
    }

    #[test]
    fn future_birthday_rejected() {
        let today = date(2024, 6, 1);
        let born_today = User::new("a@example.com", "a").with_birthday(today);
        assert!(check_user(&born_today, today).is_ok());

        let tomorrow = User::new("a@example.com", "a").with_birthday(date(2024, 6, 2));
        assert!(check_user(&tomorrow, today).is_err());
    }

    #[test]
    fn blank_name_defaults_to_login() {
        let mut absent = User::new("b@example.com", "bob");
        default_name_to_login(&mut absent);
        assert_eq!(absent.name.as_deref(), Some("bob"));

        let mut blank = User::new("b@example.com", "bob").with_name(" ");
        default_name_to_login(&mut blank);
        assert_eq!(blank.name.as_deref(), Some("bob"));

        let mut named = User::new("b@example.com", "bob").with_name("Robert");
        default_name_to_login(&mut named);
        assert_eq!(named.name.as_deref(), Some("Robert"));
    }
}
