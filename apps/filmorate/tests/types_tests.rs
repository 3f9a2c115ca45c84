//! Unit tests for API types serialization/deserialization.

#![allow(clippy::unwrap_used, clippy::panic)]

use chrono::NaiveDate;
use filmorate::api::{
    ErrorResponse, FilmRequest, HealthResponse, PopularQuery, StatusResponse, UserRequest,
};
use filmorate_core::{CatalogStats, ErrorKind, FilmId, UserId};

// =============================================================================
// HEALTH / STATUS
// =============================================================================

#[test]
fn test_health_response_default() {
    let health = HealthResponse::default();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[test]
fn test_status_response_from_stats() {
    let status = StatusResponse::from(CatalogStats {
        film_count: 4,
        user_count: 3,
        like_count: 7,
        friendship_count: 2,
    });

    let json = serde_json::to_string(&status).unwrap();
    assert!(json.contains("\"film_count\":4"));
    assert!(json.contains("\"user_count\":3"));
    assert!(json.contains("\"like_count\":7"));
    assert!(json.contains("\"friendship_count\":2"));
}

#[test]
fn test_error_response_shape() {
    let json = serde_json::to_value(ErrorResponse::new("Film with id 3 not found")).unwrap();
    assert_eq!(json, serde_json::json!({ "error": "Film with id 3 not found" }));
}

// =============================================================================
// FILM REQUEST
// =============================================================================

#[test]
fn test_film_request_camel_case() {
    let json = r#"{
        "id": 5,
        "name": "Arrival",
        "description": "Linguist meets heptapods",
        "releaseDate": "2016-11-11",
        "duration": 116
    }"#;
    let film = serde_json::from_str::<FilmRequest>(json)
        .unwrap()
        .into_film()
        .unwrap();

    assert_eq!(film.id, Some(FilmId(5)));
    assert_eq!(film.name, "Arrival");
    assert_eq!(film.description.as_deref(), Some("Linguist meets heptapods"));
    assert_eq!(film.release_date, NaiveDate::from_ymd_opt(2016, 11, 11).unwrap());
    assert_eq!(film.duration, 116);
    assert!(film.likes.is_empty());
}

#[test]
fn test_film_request_ignores_likes() {
    let json = r#"{"name": "A", "releaseDate": "2000-01-01", "duration": 1, "likes": [1, 2]}"#;
    let film = serde_json::from_str::<FilmRequest>(json)
        .unwrap()
        .into_film()
        .unwrap();
    assert!(film.likes.is_empty());
}

#[test]
fn test_film_request_missing_fields() {
    for json in [
        r#"{"releaseDate": "2000-01-01", "duration": 1}"#,
        r#"{"name": "A", "duration": 1}"#,
        r#"{"name": "A", "releaseDate": "2000-01-01"}"#,
    ] {
        let err = serde_json::from_str::<FilmRequest>(json)
            .unwrap()
            .into_film()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "input: {}", json);
    }
}

#[test]
fn test_film_request_bad_date_fails_to_parse() {
    let json = r#"{"name": "A", "releaseDate": "11/11/2016", "duration": 1}"#;
    assert!(serde_json::from_str::<FilmRequest>(json).is_err());
}

// =============================================================================
// USER REQUEST
// =============================================================================

#[test]
fn test_user_request_round_trip_fields() {
    let json = r#"{
        "id": 2,
        "email": "ann@example.com",
        "login": "ann",
        "name": "Ann",
        "birthday": "1990-04-01",
        "friends": [3]
    }"#;
    let user = serde_json::from_str::<UserRequest>(json)
        .unwrap()
        .into_user()
        .unwrap();

    assert_eq!(user.id, Some(UserId(2)));
    assert_eq!(user.email, "ann@example.com");
    assert_eq!(user.name.as_deref(), Some("Ann"));
    assert_eq!(user.birthday, NaiveDate::from_ymd_opt(1990, 4, 1));
    assert!(user.friends.is_empty());
}

#[test]
fn test_user_request_missing_fields() {
    let no_email = serde_json::from_str::<UserRequest>(r#"{"login": "ann"}"#)
        .unwrap()
        .into_user()
        .unwrap_err();
    assert!(no_email.to_string().contains("email"));

    let no_login = serde_json::from_str::<UserRequest>(r#"{"email": "a@b.io"}"#)
        .unwrap()
        .into_user()
        .unwrap_err();
    assert!(no_login.to_string().contains("login"));
}

#[test]
fn test_user_request_null_name_is_absent() {
    let user = serde_json::from_str::<UserRequest>(
        r#"{"email": "a@b.io", "login": "a", "name": null}"#,
    )
    .unwrap()
    .into_user()
    .unwrap();
    assert_eq!(user.name, None);
}

// =============================================================================
// POPULAR QUERY
// =============================================================================

#[test]
fn test_popular_query_optional_count() {
    let empty: PopularQuery = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.count, None);

    let negative: PopularQuery = serde_json::from_str(r#"{"count": -4}"#).unwrap();
    assert_eq!(negative.count, Some(-4));
}
