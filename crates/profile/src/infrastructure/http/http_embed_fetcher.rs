// crates/profile/src/infrastructure/http/http_embed_fetcher.rs

use async_trait::async_trait;
use serde_json::Value;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::http::{HttpContext, ReqwestErrorExt};

use crate::application::ports::{EmbedFetcher, EmbedMetadata};
use crate::domain::value_objects::EmbedPlatform;

/// Client du proxy oEmbed de l'application web (`/api/{plateforme}-oembed`).
pub struct HttpEmbedFetcher {
    ctx: HttpContext,
}

impl HttpEmbedFetcher {
    pub fn new(ctx: HttpContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl EmbedFetcher for HttpEmbedFetcher {
    async fn fetch(&self, platform: EmbedPlatform, url: &str) -> Result<Option<EmbedMetadata>> {
        let endpoint = self.ctx.endpoint(&platform.oembed_path());

        let response = self.ctx.client()
            .get(&endpoint)
            .query(&[("url", url)])
            .timeout(self.ctx.embed_timeout())
            .send()
            .await
            .map_domain_infra("embed proxy")?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(platform = %platform, url = %url, status = status.as_u16(), "Embed proxy returned an error status");
            return Ok(None);
        }

        let body = response.text().await.map_domain_infra("embed proxy")?;

        // 1. Corps illisible : pas de métadonnées
        let value: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(platform = %platform, url = %url, error = %e, "Embed proxy returned invalid JSON");
                return Ok(None);
            }
        };

        // 2. Erreur applicative du proxy (`{"error": "..."}`)
        if let Some(error) = value.get("error") {
            tracing::warn!(platform = %platform, url = %url, error = %error, "Embed proxy could not resolve URL");
            return Ok(None);
        }

        match serde_json::from_value::<EmbedMetadata>(value) {
            Ok(metadata) => Ok(Some(metadata)),
            Err(e) => {
                tracing::warn!(platform = %platform, url = %url, error = %e, "Unexpected embed metadata shape");
                Ok(None)
            }
        }
    }
}
