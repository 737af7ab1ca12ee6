//! Assistant Backend Integration
//!
//! This module provides access to the remote FinPlan assistant backend
//! through a common trait interface.
//!
//! # Usage
//!
//! ```ignore
//! use finplan_client::backend::{AssistantBackend, HttpBackend};
//!
//! let backend = HttpBackend::new();
//! let result = backend.categorize("coffee at Starbucks", Category::all()).await;
//! ```

mod http;
mod traits;

pub use http::{HttpBackend, DEFAULT_BACKEND_URL};
pub use traits::{
    AssistantBackend, BackendError, Categorization, FinancialSummary, PlanRequest, ReceiptImage,
    ReceiptScan, PLAN_FALLBACK,
};
