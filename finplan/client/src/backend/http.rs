//! FinPlan Backend HTTP Implementation
//!
//! Talks to the hosted FinPlan backend over JSON-over-HTTPS. One POST per
//! operation; the backend does the actual AI work and this client only
//! normalizes what comes back.
//!
//! The client carries no timeout: a hung backend call suspends the calling
//! task until the transport gives up on its own.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use super::traits::{
    AssistantBackend, BackendError, Categorization, FinancialSummary, PlanRequest, ReceiptImage,
    ReceiptScan, PLAN_FALLBACK,
};
use crate::model::{Category, GoalSuggestion};

/// Backend origin compiled into the client.
pub const DEFAULT_BACKEND_URL: &str = "https://finplanv3.vercel.app";

const CATEGORIZE: &str = "/api/categorize";
const SCAN_RECEIPT: &str = "/api/scan-receipt";
const SUGGEST_GOALS: &str = "/api/suggest-goals";
const GENERATE_PLAN: &str = "/api/generate-plan";

/// HTTP client for the FinPlan backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client against [`DEFAULT_BACKEND_URL`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BACKEND_URL)
    }

    /// Create a client against another origin, e.g. a self-hosted backend
    /// or a local mock in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The origin this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// POST `body` as JSON and return the parsed response body.
    ///
    /// Any non-success status is a failure; callers apply their own
    /// recovery policy on top.
    async fn post_json<B>(&self, path: &str, body: &B) -> Result<Value, BackendError>
    where
        B: Serialize + Sync,
    {
        let response = self.http.post(self.endpoint(path)).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| BackendError::Response(e.to_string()))
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssistantBackend for HttpBackend {
    fn name(&self) -> &str {
        "FinPlan"
    }

    async fn categorize(&self, description: &str, categories: &[Category]) -> Categorization {
        let body = serde_json::json!({
            "description": description,
            "categories": categories,
        });

        let parsed = self.post_json(CATEGORIZE, &body).await.and_then(|value| {
            serde_json::from_value::<Categorization>(value)
                .map_err(|e| BackendError::Response(e.to_string()))
        });

        match parsed {
            Ok(mut result) => {
                result.confidence = result.confidence.clamp(0.0, 1.0);
                result
            }
            Err(e) => {
                tracing::warn!(error = %e, "categorization failed, substituting fallback");
                Categorization::fallback()
            }
        }
    }

    async fn scan_receipt(&self, image: &ReceiptImage) -> Result<ReceiptScan, BackendError> {
        let value = self.post_json(SCAN_RECEIPT, image).await.map_err(|e| {
            tracing::warn!(error = %e, "receipt scan failed");
            BackendError::ReceiptScan(Box::new(e))
        })?;

        Ok(ReceiptScan {
            merchant: value
                .get("merchant")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            total: value
                .get("total")
                .and_then(Value::as_f64)
                .unwrap_or(0.0)
                .max(0.0),
            date: value
                .get("date")
                .and_then(Value::as_str)
                .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
                .unwrap_or_else(|| Utc::now().date_naive()),
        })
    }

    async fn suggest_goals(&self, summary: &FinancialSummary) -> Vec<GoalSuggestion> {
        let parsed = self
            .post_json(SUGGEST_GOALS, summary)
            .await
            .and_then(|value| match value.get("goals") {
                Some(goals) => serde_json::from_value::<Vec<GoalSuggestion>>(goals.clone())
                    .map_err(|e| BackendError::Response(e.to_string())),
                None => Ok(Vec::new()),
            });

        match parsed {
            Ok(suggestions) => suggestions,
            Err(e) => {
                tracing::warn!(error = %e, "goal suggestion failed, substituting empty list");
                Vec::new()
            }
        }
    }

    async fn generate_plan(&self, request: &PlanRequest) -> String {
        let parsed = self
            .post_json(GENERATE_PLAN, request)
            .await
            .and_then(|value| match value.get("plan").and_then(Value::as_str) {
                Some(plan) => Ok(plan.to_string()),
                None => Err(BackendError::Response("missing plan text".to_string())),
            });

        match parsed {
            Ok(plan) => plan,
            Err(e) => {
                tracing::warn!(error = %e, "plan generation failed, substituting fallback text");
                PLAN_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_backend_url() {
        let backend = HttpBackend::new();
        assert_eq!(backend.base_url(), DEFAULT_BACKEND_URL);
        assert_eq!(backend.name(), "FinPlan");
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let backend = HttpBackend::with_base_url("http://localhost:5001");
        assert_eq!(
            backend.endpoint(CATEGORIZE),
            "http://localhost:5001/api/categorize"
        );
    }

    #[test]
    fn test_trailing_slashes_are_normalized() {
        let backend = HttpBackend::with_base_url("http://localhost:5001//");
        assert_eq!(
            backend.endpoint(SCAN_RECEIPT),
            "http://localhost:5001/api/scan-receipt"
        );
    }
}
