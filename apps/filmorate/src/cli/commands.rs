//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api;
use crate::config::ServerConfig;
use crate::error::AppError;
use crate::seed::SeedFile;
use filmorate_core::{Catalog, CatalogStats};
use std::path::Path;

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server, optionally pre-loading a seed file.
pub async fn cmd_server(
    config: &ServerConfig,
    seed: Option<&Path>,
    quiet: bool,
) -> Result<(), AppError> {
    let mut catalog = Catalog::new();

    if let Some(path) = seed {
        let stats = SeedFile::load(path)?.apply(&mut catalog)?;
        tracing::info!(
            seed = %path.display(),
            users = stats.user_count,
            films = stats.film_count,
            likes = stats.like_count,
            friendships = stats.friendship_count,
            "Seed loaded"
        );
    }

    if !quiet {
        println!("Filmorate Server Starting...");
        println!();
        println!("Configuration:");
        println!("  Address:    {}", config.bind_addr());
        println!("  Rate limit: {}", describe_rate_limit(config.rate_limit));
        println!(
            "  CORS:       {}",
            config.cors_origins.as_deref().unwrap_or("localhost only")
        );
        println!();
        println!("Endpoints:");
        println!("  GET|POST|PUT  /films");
        println!("  GET           /films/popular?count=N");
        println!("  PUT|DELETE    /films/{{id}}/like/{{userId}}");
        println!("  GET|POST|PUT  /users");
        println!("  PUT|DELETE    /users/{{id}}/friends/{{friendId}}");
        println!("  GET           /users/{{id}}/friends[/common/{{otherId}}]");
        println!("  GET           /health, /status");
        println!();
        println!("Press Ctrl+C to stop");
        println!();
    }

    api::run_server(config, catalog).await
}

fn describe_rate_limit(rps: u32) -> String {
    if rps == 0 {
        "disabled".to_string()
    } else {
        format!("{} req/s", rps)
    }
}

// =============================================================================
// CHECK-SEED COMMAND
// =============================================================================

/// Apply a seed file to an empty catalog and print what it would contain.
pub fn cmd_check_seed(file: &Path, json_mode: bool) -> Result<(), AppError> {
    let mut catalog = Catalog::new();
    let stats = SeedFile::load(file)?.apply(&mut catalog)?;

    if json_mode {
        let output = serde_json::json!({
            "file": file.to_string_lossy(),
            "valid": true,
            "users": stats.user_count,
            "films": stats.film_count,
            "likes": stats.like_count,
            "friendships": stats.friendship_count,
        });
        println!("{}", to_pretty_json(&output)?);
        return Ok(());
    }

    print_stats(file, &stats);
    Ok(())
}

fn print_stats(file: &Path, stats: &CatalogStats) {
    println!("Seed file OK: {}", file.display());
    println!("==================");
    println!("Users:       {}", stats.user_count);
    println!("Films:       {}", stats.film_count);
    println!("Likes:       {}", stats.like_count);
    println!("Friendships: {}", stats.friendship_count);
}

// =============================================================================
// CONFIG COMMAND
// =============================================================================

/// Print the effective configuration.
pub fn cmd_config(config: &ServerConfig, json_mode: bool) -> Result<(), AppError> {
    if json_mode {
        println!("{}", to_pretty_json(config)?);
        return Ok(());
    }

    println!("Filmorate Configuration");
    println!("=======================");
    println!("Host:         {}", config.host);
    println!("Port:         {}", config.port);
    println!("Rate limit:   {}", describe_rate_limit(config.rate_limit));
    println!(
        "CORS origins: {}",
        config.cors_origins.as_deref().unwrap_or("localhost only")
    );
    println!("Log format:   {:?}", config.log_format);
    Ok(())
}

fn to_pretty_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Io(format!("Cannot render JSON: {}", e)))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_description() {
        assert_eq!(describe_rate_limit(0), "disabled");
        assert_eq!(describe_rate_limit(25), "25 req/s");
    }

    #[test]
    fn check_seed_accepts_valid_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("seed.json");
        std::fs::write(
            &path,
            r#"{"users": [{"email": "a@b.io", "login": "a"}], "films": []}"#,
        )
        .expect("write");

        assert!(cmd_check_seed(&path, true).is_ok());
    }

    #[test]
    fn check_seed_rejects_duplicate_email() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("seed.json");
        std::fs::write(
            &path,
            r#"{"users": [
                {"email": "a@b.io", "login": "a"},
                {"email": "a@b.io", "login": "b"}
            ]}"#,
        )
        .expect("write");

        let err = cmd_check_seed(&path, false).expect_err("duplicate");
        assert!(err.to_string().contains("users[1]"));
    }

    #[test]
    fn check_seed_missing_file() {
        let result = cmd_check_seed(Path::new("/definitely/not/here.json"), false);
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn config_prints_in_both_modes() {
        let config = ServerConfig::default();
        assert!(cmd_config(&config, true).is_ok());
        assert!(cmd_config(&config, false).is_ok());
    }
}
