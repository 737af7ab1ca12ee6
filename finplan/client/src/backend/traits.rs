//! Assistant Backend Trait
//!
//! Trait definition for the remote assistant backend, plus the request and
//! response records the four operations exchange. The trait exists so
//! frontends and tests can substitute implementations; the shipped one is
//! [`HttpBackend`](super::HttpBackend).
//!
//! # Failure Policy
//!
//! The failure policy is part of the contract and is deliberately
//! asymmetric, for compatibility with the frontend this backend serves:
//!
//! - [`categorize`](AssistantBackend::categorize) never fails; it falls
//!   back to [`Categorization::fallback`]
//! - [`suggest_goals`](AssistantBackend::suggest_goals) never fails; it
//!   falls back to an empty list
//! - [`generate_plan`](AssistantBackend::generate_plan) never fails; it
//!   falls back to the literal [`PLAN_FALLBACK`] text
//! - [`scan_receipt`](AssistantBackend::scan_receipt) surfaces
//!   [`BackendError::ReceiptScan`] so the frontend can tell the user to
//!   retry with a better photo

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Category, Goal, GoalSuggestion, Language, Transaction};

/// Plan text returned when the backend cannot produce one.
///
/// Kept byte-identical to what the frontend already string-matches on.
pub const PLAN_FALLBACK: &str = "Could not generate an AI budget plan. Please try again.";

/// Errors that can occur while talking to the assistant backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("backend returned HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, as text
        body: String,
    },

    /// The response body was not the shape the operation expects
    #[error("malformed backend response: {0}")]
    Response(String),

    /// A receipt image file could not be read
    #[error("failed to read receipt image at {}: {}", path.display(), source)]
    Image {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// A receipt image's MIME type could not be inferred from its extension
    #[error("cannot infer image MIME type for {}", .0.display())]
    UnknownImageType(PathBuf),

    /// User-facing error raised by receipt scanning. The display text is
    /// exactly what the frontend shows; the underlying failure is kept as
    /// the error source.
    #[error("Failed to analyze receipt. Please try again.")]
    ReceiptScan(#[source] Box<BackendError>),
}

/// Result of categorizing one transaction description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Categorization {
    /// The label the backend picked
    pub category: Category,
    /// Backend confidence in `[0, 1]`
    pub confidence: f64,
}

impl Categorization {
    /// The safe default substituted when categorization fails.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            category: Category::Other,
            confidence: 0.0,
        }
    }
}

/// Fields extracted from a scanned receipt.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReceiptScan {
    /// Merchant name, or empty if the backend could not read one
    pub merchant: String,
    /// Receipt total; never negative
    pub total: f64,
    /// Receipt date; today if the backend could not read one
    pub date: NaiveDate,
}

/// Monthly financial summary used to ask for goal suggestions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FinancialSummary {
    /// Monthly income
    pub income: f64,
    /// Monthly expenses
    pub expenses: f64,
    /// Current balance
    pub balance: f64,
}

/// Everything the backend needs to write a budget plan for one goal.
#[derive(Clone, Debug, Serialize)]
pub struct PlanRequest {
    /// The goal to plan for (including any previous plan text, so the
    /// backend can comment on progress)
    pub goal: Goal,
    /// Ledger context; the backend filters and windows this itself
    pub transactions: Vec<Transaction>,
    /// Current balance
    pub balance: f64,
    /// Language to generate the plan in
    pub language: Language,
}

impl PlanRequest {
    /// Create a plan request with no transaction context and the default
    /// language.
    pub fn new(goal: Goal, balance: f64) -> Self {
        Self {
            goal,
            transactions: Vec::new(),
            balance,
            language: Language::default(),
        }
    }

    /// Attach ledger context.
    #[must_use]
    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    /// Set the plan language.
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

/// A receipt photo, base64-encoded for the JSON wire.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptImage {
    image: String,
    mime_type: String,
}

impl ReceiptImage {
    /// Wrap an already base64-encoded image.
    pub fn from_base64(image: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Encode raw image bytes.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self::from_base64(BASE64.encode(bytes), mime_type)
    }

    /// Read and encode an image file, inferring the MIME type from the
    /// file extension. Unknown extensions are an error, never a guess.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BackendError> {
        let path = path.as_ref();
        let mime_type = mime_type_for(path)
            .ok_or_else(|| BackendError::UnknownImageType(path.to_path_buf()))?;
        let bytes = std::fs::read(path).map_err(|source| BackendError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_bytes(&bytes, mime_type))
    }

    /// The MIME type that will be sent alongside the image.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The base64 payload that will be sent.
    #[must_use]
    pub fn as_base64(&self) -> &str {
        &self.image
    }
}

// Receipt photos run to megabytes of base64; keep Debug output readable.
impl std::fmt::Debug for ReceiptImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReceiptImage")
            .field("mime_type", &self.mime_type)
            .field("image", &format!("<{} base64 bytes>", self.image.len()))
            .finish()
    }
}

fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}

/// Remote assistant backend.
///
/// Implement this trait to substitute the backend, e.g. with a canned
/// implementation in frontend tests.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Name of the backend, for logs.
    fn name(&self) -> &str;

    /// Classify a transaction description into one of `categories`.
    ///
    /// Never fails: any transport, HTTP, or response-shape problem is
    /// logged and [`Categorization::fallback`] is returned instead.
    async fn categorize(&self, description: &str, categories: &[Category]) -> Categorization;

    /// Extract merchant, total, and date from a receipt photo.
    ///
    /// The only fallible operation: failures surface as
    /// [`BackendError::ReceiptScan`] with a user-facing retry message.
    async fn scan_receipt(&self, image: &ReceiptImage) -> Result<ReceiptScan, BackendError>;

    /// Ask for savings-goal suggestions based on a financial summary.
    ///
    /// Never fails: problems are logged and an empty list is returned.
    async fn suggest_goals(&self, summary: &FinancialSummary) -> Vec<GoalSuggestion>;

    /// Generate budget-plan text for a goal.
    ///
    /// Never fails: problems are logged and the literal [`PLAN_FALLBACK`]
    /// text is returned.
    async fn generate_plan(&self, request: &PlanRequest) -> String;
}
