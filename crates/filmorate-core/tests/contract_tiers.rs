//! # Catalog Contract Tests (C0-C3)
//!
//! If ANY tier fails, the catalog is INVALID.
//!
//! ## Tiers
//! - C0: Entity Stores
//! - C1: Likes
//! - C2: Friendship
//! - C3: Popularity Ranking

use chrono::NaiveDate;
use filmorate_core::{Catalog, Film, FilmId, FilmorateError, FixedClock, User, UserId};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn catalog() -> Catalog {
    Catalog::with_clock(FixedClock(date(2024, 6, 1)))
}

fn user(login: &str) -> User {
    User::new(format!("{login}@example.com"), login).with_birthday(date(1990, 1, 1))
}

fn film(name: &str) -> Film {
    Film::new(name, date(2010, 7, 16), 148).with_description("A heist inside a dream")
}

fn add_users(catalog: &mut Catalog, logins: &[&str]) -> Vec<UserId> {
    logins
        .iter()
        .map(|login| {
            catalog
                .create_user(user(login))
                .expect("create user")
                .id
                .expect("id")
        })
        .collect()
}

fn add_films(catalog: &mut Catalog, n: usize) -> Vec<FilmId> {
    (0..n)
        .map(|i| {
            catalog
                .create_film(film(&format!("Film {i}")))
                .expect("create film")
                .id
                .expect("id")
        })
        .collect()
}

// =============================================================================
// TIER C0: ENTITY STORES
// =============================================================================

mod c0_entity_stores {
    use super::*;

    /// C0.1: Valid film is stored with a fresh id.
    #[test]
    fn create_film_assigns_id() {
        let mut catalog = catalog();
        let stored = catalog.create_film(film("Inception")).expect("create");

        assert_eq!(stored.id, Some(FilmId(1)));
        assert_eq!(catalog.film(FilmId(1)).expect("get"), stored);
    }

    /// C0.2: Release date on the first screening is accepted.
    #[test]
    fn release_on_boundary_accepted() {
        let mut catalog = catalog();
        let boundary = Film::new("L'Arrivée d'un train", date(1895, 12, 28), 1);
        assert!(catalog.create_film(boundary).is_ok());
    }

    /// C0.3: One day earlier is rejected.
    #[test]
    fn release_before_boundary_rejected() {
        let mut catalog = catalog();
        let early = Film::new("Too early", date(1895, 12, 27), 1);
        assert!(matches!(
            catalog.create_film(early),
            Err(FilmorateError::Validation(_))
        ));
        assert!(catalog.films().is_empty());
    }

    /// C0.4: Duplicate email is rejected, exact match.
    #[test]
    fn duplicate_email_rejected() {
        let mut catalog = catalog();
        catalog.create_user(user("ann")).expect("first");

        let twin = User::new("ann@example.com", "ann2");
        assert!(matches!(
            catalog.create_user(twin),
            Err(FilmorateError::Validation(_))
        ));
        assert_eq!(catalog.users().len(), 1);
    }

    /// C0.5: Blank name defaults to login.
    #[test]
    fn blank_name_defaults_to_login() {
        let mut catalog = catalog();
        let stored = catalog
            .create_user(User::new("bob@example.com", "bob").with_name(""))
            .expect("create");
        assert_eq!(stored.name.as_deref(), Some("bob"));
    }

    /// C0.6: Update without id is a validation error.
    #[test]
    fn update_without_id_rejected() {
        let mut catalog = catalog();
        catalog.create_film(film("Inception")).expect("create");
        assert!(matches!(
            catalog.update_film(film("Inception")),
            Err(FilmorateError::Validation(_))
        ));
        assert!(matches!(
            catalog.update_user(user("ann")),
            Err(FilmorateError::Validation(_))
        ));
    }

    /// C0.7: Update with an unknown id is not found.
    #[test]
    fn update_unknown_id_not_found() {
        let mut catalog = catalog();
        assert_eq!(
            catalog.update_film(film("Ghost").with_id(FilmId(9999))),
            Err(FilmorateError::FilmNotFound(FilmId(9999)))
        );
        assert_eq!(
            catalog.update_user(user("ghost").with_id(UserId(9999))),
            Err(FilmorateError::UserNotFound(UserId(9999)))
        );
    }

    /// C0.8: Update re-validates domain rules.
    #[test]
    fn update_revalidates() {
        let mut catalog = catalog();
        let id = add_users(&mut catalog, &["ann"])[0];
        let future = user("ann").with_id(id).with_birthday(date(2030, 1, 1));
        assert!(matches!(
            catalog.update_user(future),
            Err(FilmorateError::Validation(_))
        ));
        assert_eq!(
            catalog.user(id).expect("get").birthday,
            Some(date(1990, 1, 1))
        );
    }

    /// C0.9: Whitespace in login is rejected.
    #[test]
    fn login_with_space_rejected() {
        let mut catalog = catalog();
        assert!(
            catalog
                .create_user(User::new("a@example.com", "two words"))
                .is_err()
        );
    }

    /// C0.10: A domain without a dot is a valid email.
    #[test]
    fn dotless_email_domain_accepted() {
        let mut catalog = catalog();
        let stored = catalog
            .create_user(User::new("user@localhost", "u"))
            .expect("create");
        assert_eq!(stored.email, "user@localhost");
    }

    /// C0.11: Unknown id on get is not found.
    #[test]
    fn get_unknown_not_found() {
        let catalog = catalog();
        assert_eq!(
            catalog.film(FilmId(1)),
            Err(FilmorateError::FilmNotFound(FilmId(1)))
        );
        assert!(catalog.user(UserId(1)).is_err());
    }
}

// =============================================================================
// TIER C1: LIKES
// =============================================================================

mod c1_likes {
    use super::*;

    /// C1.1: Like twice, remove once, like is gone.
    #[test]
    fn add_twice_remove_once() {
        let mut catalog = catalog();
        let f = add_films(&mut catalog, 1)[0];
        let u = add_users(&mut catalog, &["ann"])[0];

        catalog.add_like(f, u).expect("like");
        let liked = catalog.add_like(f, u).expect("like again");
        assert_eq!(liked.like_count(), 1);

        let unliked = catalog.remove_like(f, u).expect("unlike");
        assert!(!unliked.likes.contains(&u));
    }

    /// C1.2: Removing a like that is not there is a no-op.
    #[test]
    fn remove_absent_like_is_noop() {
        let mut catalog = catalog();
        let f = add_films(&mut catalog, 1)[0];
        let u = add_users(&mut catalog, &["ann"])[0];
        let film = catalog.remove_like(f, u).expect("unlike");
        assert!(film.likes.is_empty());
    }

    /// C1.3: Unknown film or user is not found.
    #[test]
    fn unknown_endpoints_not_found() {
        let mut catalog = catalog();
        let f = add_films(&mut catalog, 1)[0];
        let u = add_users(&mut catalog, &["ann"])[0];

        assert!(
            catalog
                .add_like(FilmId(42), u)
                .is_err_and(|e| e.is_not_found())
        );
        assert!(
            catalog
                .add_like(f, UserId(42))
                .is_err_and(|e| e.is_not_found())
        );
    }
}

// =============================================================================
// TIER C2: FRIENDSHIP
// =============================================================================

mod c2_friendship {
    use super::*;

    fn ids(users: &[User]) -> Vec<UserId> {
        users.iter().filter_map(|u| u.id).collect()
    }

    /// C2.1: Adding a friend updates both sides.
    #[test]
    fn add_friend_is_symmetric() {
        let mut catalog = catalog();
        let users = add_users(&mut catalog, &["ann", "bob"]);
        let (a, b) = (users[0], users[1]);
        catalog.add_friend(a, b).expect("befriend");

        assert_eq!(ids(&catalog.friends(a).expect("a")), vec![b]);
        assert_eq!(ids(&catalog.friends(b).expect("b")), vec![a]);
    }

    /// C2.2: Add is idempotent, remove is symmetric and idempotent.
    #[test]
    fn add_remove_idempotent() {
        let mut catalog = catalog();
        let users = add_users(&mut catalog, &["ann", "bob"]);
        let (a, b) = (users[0], users[1]);
        catalog.add_friend(a, b).expect("befriend");
        catalog.add_friend(b, a).expect("befriend again");
        assert_eq!(catalog.stats().friendship_count, 1);

        catalog.remove_friend(a, b).expect("unfriend");
        catalog.remove_friend(a, b).expect("unfriend again");
        assert!(catalog.friends(a).expect("a").is_empty());
        assert!(catalog.friends(b).expect("b").is_empty());
    }

    /// C2.3: Common friends is the intersection.
    #[test]
    fn common_friends_intersection() {
        let mut catalog = catalog();
        let ids_all = add_users(&mut catalog, &["u1", "u2", "u3", "u4", "anna", "boris"]);
        let (a, b) = (ids_all[4], ids_all[5]);

        for friend in &ids_all[0..3] {
            catalog.add_friend(a, *friend).expect("a friends");
        }
        for friend in &ids_all[1..4] {
            catalog.add_friend(b, *friend).expect("b friends");
        }

        let common = catalog.common_friends(a, b).expect("common");
        assert_eq!(ids(&common), vec![ids_all[1], ids_all[2]]);
    }

    /// C2.4: Unknown users are not found.
    #[test]
    fn unknown_users_not_found() {
        let mut catalog = catalog();
        let a = add_users(&mut catalog, &["ann"])[0];

        assert_eq!(
            catalog.add_friend(a, UserId(77)),
            Err(FilmorateError::UserNotFound(UserId(77)))
        );
        assert_eq!(
            catalog.remove_friend(UserId(77), a),
            Err(FilmorateError::UserNotFound(UserId(77)))
        );
        assert!(catalog.friends(UserId(77)).is_err());
        assert!(catalog.common_friends(a, UserId(77)).is_err());
    }

    /// C2.5: Removed friends are skipped, never reported as errors.
    #[test]
    fn removed_friend_skipped() {
        let mut catalog = catalog();
        let users = add_users(&mut catalog, &["ann", "bob", "cid"]);
        let (a, b, c) = (users[0], users[1], users[2]);
        catalog.add_friend(a, b).expect("befriend");
        catalog.add_friend(a, c).expect("befriend");
        catalog.remove_user(b).expect("remove");

        let stored = catalog.user(a).expect("user");
        assert!(stored.friends.contains(&b));
        assert_eq!(ids(&catalog.friends(a).expect("friends")), vec![c]);
    }

    /// C2.6: Common friends skip removed users too.
    #[test]
    fn removed_common_friend_skipped() {
        let mut catalog = catalog();
        let users = add_users(&mut catalog, &["ann", "bob", "cid", "dan"]);
        let (a, b, c, d) = (users[0], users[1], users[2], users[3]);
        for friend in [b, d] {
            catalog.add_friend(a, friend).expect("befriend");
            catalog.add_friend(c, friend).expect("befriend");
        }
        catalog.remove_user(b).expect("remove");

        let common = catalog.common_friends(a, c).expect("common");
        assert_eq!(ids(&common), vec![d]);
    }

    /// C2.7: A user may befriend themselves; the edge is stored once.
    #[test]
    fn self_friendship_accepted() {
        let mut catalog = catalog();
        let a = add_users(&mut catalog, &["ann"])[0];
        catalog.add_friend(a, a).expect("befriend self");
        catalog.add_friend(a, a).expect("idempotent");

        assert_eq!(ids(&catalog.friends(a).expect("friends")), vec![a]);
        assert_eq!(catalog.stats().friendship_count, 1);
    }
}

// =============================================================================
// TIER C3: POPULARITY RANKING
// =============================================================================

mod c3_ranking {
    use super::*;

    fn like_times(catalog: &mut Catalog, film: FilmId, users: &[UserId]) {
        for user in users {
            catalog.add_like(film, *user).expect("like");
        }
    }

    /// C3.1: Films ordered by like-count, truncated to count.
    #[test]
    fn popular_top_two() {
        let mut catalog = catalog();
        let films = add_films(&mut catalog, 3);
        let users = add_users(&mut catalog, &["a", "b", "c"]);

        like_times(&mut catalog, films[0], &users[..3]);
        like_times(&mut catalog, films[1], &users[..1]);
        like_times(&mut catalog, films[2], &users[..2]);

        let top: Vec<_> = catalog
            .popular(2)
            .into_iter()
            .filter_map(|f| f.id)
            .collect();
        assert_eq!(top, vec![films[0], films[2]]);
    }

    /// C3.2: Zero or negative count is empty, oversized count is everything.
    #[test]
    fn popular_bounds() {
        let mut catalog = catalog();
        add_films(&mut catalog, 3);
        assert!(catalog.popular(0).is_empty());
        assert!(catalog.popular(-1).is_empty());
        assert_eq!(catalog.popular(100).len(), 3);
    }

    /// C3.3: Ranking reflects removed likes immediately.
    #[test]
    fn popular_recomputed() {
        let mut catalog = catalog();
        let films = add_films(&mut catalog, 2);
        let users = add_users(&mut catalog, &["a"]);

        like_times(&mut catalog, films[1], &users);
        assert_eq!(catalog.popular(1)[0].id, Some(films[1]));

        catalog.remove_like(films[1], users[0]).expect("unlike");
        assert_eq!(catalog.popular(1)[0].id, Some(films[0]));
    }
}
