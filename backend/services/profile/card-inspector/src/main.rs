// backend/services/profile/card-inspector/src/main.rs

use std::sync::Arc;
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

use profile::application::highlights::HighlightFeed;
use profile::application::inspect_highlights::HighlightReport;
use profile::application::ports::EmbedFetcher;
use profile::domain::entities::ProfileRecord;
use profile::domain::value_objects::EmbedPlatform;
use profile::infrastructure::http::HttpEmbedFetcher;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::{AppError, AppResult, DomainError, ErrorCode};
use shared_kernel::infrastructure::http::HttpContext;

const USAGE: &str = "usage: card-inspector <profile.json> [--fetch]";

/// Diagnostic des champs de highlights d'un profil exporté en JSON :
/// valeur brute, type stocké et entrées normalisées. Avec `--fetch`, résout
/// aussi les métadonnées via le proxy oEmbed (`PROFILE_CARD_API_URL`).
#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let fetch = args.iter().any(|arg| arg == "--fetch");
    let path = args.iter()
        .find(|arg| !arg.starts_with("--"))
        .cloned()
        .or_else(|| std::env::var("CARD_INSPECTOR_PROFILE").ok())
        .ok_or_else(|| AppError::new(ErrorCode::ValidationFailed, USAGE))?;

    tracing::info!("🔍 Inspecting profile highlights from {}", path);

    let profile = load_profile(&path).await?;
    let report = HighlightReport::from_record(&profile);

    for field in &report.fields {
        if field.dropped() > 0 {
            tracing::warn!(field = %field.field, dropped = field.dropped(), "Entries dropped by normalization");
        }
    }
    print_json(&report)?;

    if fetch {
        resolve_embeds(&profile).await?;
    }

    tracing::info!("✅ {} highlight entries inspected", report.total_entries());
    Ok(())
}

async fn load_profile(path: &str) -> AppResult<ProfileRecord> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::new(ErrorCode::InfrastructureFailure, format!("Cannot read '{}': {}", path, e))
    })?;

    let mut columns: Map<String, Value> = serde_json::from_str(&raw).map_err(|e| {
        AppError::new(ErrorCode::ValidationFailed, format!("'{}' is not a JSON object: {}", path, e))
    })?;

    // Export sans `user_id` : identifiant éphémère
    let user_id = columns.remove("user_id")
        .and_then(|v| v.as_str().and_then(|s| s.parse::<UserId>().ok()))
        .unwrap_or_else(UserId::new);

    Ok(ProfileRecord::restore(user_id, columns))
}

async fn resolve_embeds(profile: &ProfileRecord) -> AppResult<()> {
    let ctx = HttpContext::builder()?.build()?;
    let fetcher: Arc<dyn EmbedFetcher> = Arc::new(HttpEmbedFetcher::new(ctx.clone()));

    for platform in EmbedPlatform::ALL {
        let entries = profile.highlights(platform);
        if entries.is_empty() {
            continue;
        }

        tracing::info!("🌐 Resolving {} {} highlight(s)", entries.len(), platform.display_name());
        let feed = HighlightFeed::new(platform, fetcher.clone()).with_fetch_timeout(ctx.embed_timeout());
        feed.sync(entries).await;

        for index in 0..feed.carousel().len() {
            feed.go_to(index);
            print_json(&feed.view())?;
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(DomainError::from)?;
    println!("{}", rendered);
    Ok(())
}
