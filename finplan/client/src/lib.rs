//! FinPlan Backend Client
//!
//! This crate is the frontend's adapter to the remote FinPlan assistant
//! backend: transaction categorization, receipt scanning, savings-goal
//! suggestion, and budget-plan generation. The AI work happens
//! server-side; this crate forwards requests and normalizes what comes
//! back into typed shapes, with defensive fallback values on failure.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     typed records      ┌──────────────────┐
//! │   Frontend   │ ─────────────────────▶ │ AssistantBackend │
//! │  (any UI)    │ ◀───────────────────── │      trait       │
//! └──────────────┘   results / fallbacks  └────────┬─────────┘
//!                                                  │
//!                                         ┌────────┴─────────┐
//!                                         │   HttpBackend    │
//!                                         │    (reqwest)     │
//!                                         └────────┬─────────┘
//!                                                  │ JSON POST
//!                                                  ▼
//!                                          FinPlan backend
//! ```
//!
//! # Key Types
//!
//! - [`AssistantBackend`]: the four operations, with their per-operation
//!   failure policy
//! - [`HttpBackend`]: the shipped implementation against the hosted
//!   backend
//! - [`Category`], [`Transaction`], [`Goal`]: domain records shared with
//!   the frontend
//!
//! # Quick Start
//!
//! ```no_run
//! use finplan_client::{AssistantBackend, Category, HttpBackend};
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = HttpBackend::new();
//!     let result = backend
//!         .categorize("coffee at Starbucks", Category::all())
//!         .await;
//!     println!("{} ({:.0}%)", result.category, result.confidence * 100.0);
//! }
//! ```
//!
//! # Failure Policy
//!
//! Three operations never fail: they log the problem and substitute a
//! safe default (`Other` with zero confidence, an empty suggestion list,
//! or a fixed plan-unavailable text). Receipt scanning is the exception
//! and surfaces a user-facing error so the UI can ask for a retry. See
//! [`backend::AssistantBackend`] for the full contract.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod model;

// Re-exports for convenience
pub use backend::{
    AssistantBackend, BackendError, Categorization, FinancialSummary, HttpBackend, PlanRequest,
    ReceiptImage, ReceiptScan, DEFAULT_BACKEND_URL, PLAN_FALLBACK,
};
pub use model::{Category, Goal, GoalSuggestion, Language, Transaction, TransactionKind};
