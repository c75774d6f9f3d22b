//! Shared HTTP client and status-code mapping.

use std::sync::OnceLock;

use crate::error::MealgenError;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Map a non-success HTTP status code to an error.
pub fn status_to_error(status: u16, body: &str) -> MealgenError {
    match status {
        401 | 403 => MealgenError::Authentication(body.to_string()),
        429 => MealgenError::RateLimited {
            retry_after_ms: extract_retry_after(body),
        },
        _ => MealgenError::api(status, body),
    }
}

fn extract_retry_after(body: &str) -> Option<u64> {
    // Try to parse retry-after from JSON error body
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("retry_after"))
                .and_then(|r| r.as_f64())
                .map(|s| (s * 1000.0) as u64)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_authentication() {
        assert!(matches!(
            status_to_error(401, "bad key"),
            MealgenError::Authentication(_)
        ));
        assert!(matches!(
            status_to_error(403, "forbidden"),
            MealgenError::Authentication(_)
        ));
    }

    #[test]
    fn rate_limit_extracts_retry_after() {
        let err = status_to_error(429, r#"{"error": {"retry_after": 1.5}}"#);
        match err {
            MealgenError::RateLimited { retry_after_ms } => {
                assert_eq!(retry_after_ms, Some(1500));
            }
            other => panic!("expected RateLimited, got {other:?}"),
        }
    }

    #[test]
    fn server_error_maps_to_api() {
        let err = status_to_error(500, "boom");
        assert!(matches!(err, MealgenError::Api { status: 500, .. }));
        assert!(err.is_retryable());
    }
}
