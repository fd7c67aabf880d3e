//! CORS Middleware Configuration

use axum::http::{header, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsSettings;

/// Methods the API serves; preflight responses advertise nothing else.
const ALLOWED_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

/// Create CORS layer from settings.
///
/// Unparseable origins are logged and skipped. When no usable origin
/// remains the layer degrades to allow-any so a misconfigured deployment
/// stays reachable.
pub fn create_cors_layer(settings: &CorsSettings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(ALLOWED_METHODS)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(ALLOWED_METHODS)
            .allow_headers([header::CONTENT_TYPE])
            .max_age(Duration::from_secs(settings.max_age_seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_layer_from_valid_origins() {
        let settings = CorsSettings {
            allowed_origins: vec!["https://banking.example.com".into()],
            max_age_seconds: 600,
        };
        create_cors_layer(&settings);
    }

    #[test]
    fn skips_unparseable_origins_without_panicking() {
        let settings = CorsSettings {
            allowed_origins: vec!["https://banking.example.com".into(), "not a\nurl".into()],
            max_age_seconds: 600,
        };
        create_cors_layer(&settings);
    }

    #[test]
    fn empty_origin_list_degrades_to_allow_any() {
        let settings = CorsSettings {
            allowed_origins: vec![],
            max_age_seconds: 600,
        };
        create_cors_layer(&settings);
    }
}
