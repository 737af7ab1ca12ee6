//! Shared Domain Records
//!
//! Types exchanged between the frontend and the FinPlan backend. The wire
//! representation is JSON with camelCase keys, matching what the backend
//! emits and what the frontend persists, so every record here derives its
//! serde shape explicitly.
//!
//! # Key Types
//!
//! - [`Category`]: closed set of transaction classification labels
//! - [`Transaction`]: a single ledger entry
//! - [`Goal`]: a savings goal, including the last generated plan text
//! - [`GoalSuggestion`]: a partial goal as proposed by the assistant
//! - [`Language`]: languages the assistant can generate plan text in

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Categories
// =============================================================================

/// Transaction classification labels.
///
/// The set is closed: the backend is prompted with these labels and is
/// expected to answer with one of them. Anything else that arrives on the
/// wire deserializes as [`Category::Other`] rather than failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Category {
    /// Groceries, restaurants, coffee
    Food,
    /// Public transit, fuel, ride hailing
    Transport,
    /// Retail purchases
    Shopping,
    /// Streaming, games, outings
    Entertainment,
    /// Rent, utilities, subscriptions
    Bills,
    /// Medical, pharmacy, fitness
    Health,
    /// Tuition, courses, books
    Education,
    /// Recurring income
    Salary,
    /// Anything that fits nowhere else; also the defensive default
    #[default]
    Other,
}

impl Category {
    /// All labels, in display order.
    #[must_use]
    pub fn all() -> &'static [Category] {
        &[
            Category::Food,
            Category::Transport,
            Category::Shopping,
            Category::Entertainment,
            Category::Bills,
            Category::Health,
            Category::Education,
            Category::Salary,
            Category::Other,
        ]
    }

    /// The wire label for this category.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Salary => "Salary",
            Category::Other => "Other",
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        match label {
            "Food" => Category::Food,
            "Transport" => Category::Transport,
            "Shopping" => Category::Shopping,
            "Entertainment" => Category::Entertainment,
            "Bills" => Category::Bills,
            "Health" => Category::Health,
            "Education" => Category::Education,
            "Salary" => Category::Salary,
            // Labels outside the closed set never fail deserialization
            _ => Category::Other,
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from(label.as_str())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Transactions
// =============================================================================

/// Direction of a ledger entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

/// A financial ledger entry.
///
/// Sent to the backend as context for plan generation; the backend filters
/// for expenses and windows to the most recent entries itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Record identity
    pub id: Uuid,
    /// Free-text description, e.g. "coffee at Starbucks"
    pub description: String,
    /// Amount in the user's currency
    pub amount: f64,
    /// Classification label
    pub category: Category,
    /// Income or expense (wire key `type`)
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Day the transaction happened
    pub date: NaiveDate,
}

// =============================================================================
// Goals
// =============================================================================

/// A savings goal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Record identity
    pub id: Uuid,
    /// Short goal name, e.g. "Emergency Fund"
    pub name: String,
    /// Amount to save up to
    pub target_amount: f64,
    /// Amount saved so far
    pub saved_amount: f64,
    /// Whether the target has been reached
    pub is_completed: bool,
    /// When the goal was created
    pub created_at: DateTime<Utc>,
    /// The last budget plan generated for this goal, if any. Sending it
    /// back lets the backend comment on progress in an updated plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_plan: Option<String>,
}

/// A goal as proposed by the assistant: just a name and a target.
///
/// Identity, progress, completion, and creation time are minted locally
/// when the user accepts the suggestion; see [`GoalSuggestion::into_goal`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSuggestion {
    /// Suggested goal name
    pub name: String,
    /// Suggested amount to save up to
    pub target_amount: f64,
}

impl GoalSuggestion {
    /// Promote this suggestion to a full [`Goal`] with a fresh identity,
    /// nothing saved yet, and a creation time of now.
    #[must_use]
    pub fn into_goal(self) -> Goal {
        Goal {
            id: Uuid::new_v4(),
            name: self.name,
            target_amount: self.target_amount,
            saved_amount: 0.0,
            is_completed: false,
            created_at: Utc::now(),
            ai_plan: None,
        }
    }
}

// =============================================================================
// Languages
// =============================================================================

/// Languages the assistant can generate plan text in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Indonesian
    Id,
    /// Japanese
    Ja,
}

impl Language {
    /// The wire code for this language.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Id => "id",
            Language::Ja => "ja",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_category_serializes_as_label() {
        assert_eq!(serde_json::to_value(Category::Food).unwrap(), json!("Food"));
        assert_eq!(
            serde_json::to_value(Category::Entertainment).unwrap(),
            json!("Entertainment")
        );
    }

    #[test]
    fn test_unknown_category_coerces_to_other() {
        let category: Category = serde_json::from_value(json!("Cryptocurrency")).unwrap();
        assert_eq!(category, Category::Other);
    }

    #[test]
    fn test_every_label_parses_back_to_its_category() {
        // Guards the From<&str> table against drifting from the serialized names
        for &category in Category::all() {
            let value = serde_json::to_value(category).unwrap();
            assert_eq!(value, json!(category.as_str()));
            let parsed: Category = serde_json::from_value(value).unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_default_is_other() {
        assert_eq!(Category::default(), Category::Other);
        assert_eq!(Category::all().len(), 9);
        assert_eq!(Category::all().last(), Some(&Category::Other));
    }

    #[test]
    fn test_transaction_wire_shape() {
        let tx = Transaction {
            id: Uuid::nil(),
            description: "coffee at Starbucks".to_string(),
            amount: 4.5,
            category: Category::Food,
            kind: TransactionKind::Expense,
            date: NaiveDate::from_ymd_opt(2024, 3, 17).unwrap(),
        };

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["description"], json!("coffee at Starbucks"));
        assert_eq!(value["type"], json!("expense"));
        assert_eq!(value["category"], json!("Food"));
        assert_eq!(value["date"], json!("2024-03-17"));
    }

    #[test]
    fn test_goal_wire_shape_uses_camel_case() {
        let goal = Goal {
            id: Uuid::nil(),
            name: "Vacation".to_string(),
            target_amount: 1500.0,
            saved_amount: 200.0,
            is_completed: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
            ai_plan: None,
        };

        let value = serde_json::to_value(&goal).unwrap();
        assert_eq!(value["targetAmount"], json!(1500.0));
        assert_eq!(value["savedAmount"], json!(200.0));
        assert_eq!(value["isCompleted"], json!(false));
        // Absent plan text is omitted from the wire entirely
        assert!(value.get("aiPlan").is_none());
    }

    #[test]
    fn test_goal_round_trips_plan_text() {
        let goal = Goal {
            id: Uuid::new_v4(),
            name: "Emergency Fund".to_string(),
            target_amount: 3000.0,
            saved_amount: 750.0,
            is_completed: false,
            created_at: Utc::now(),
            ai_plan: Some("**Summary**\n* Save $250 a month.".to_string()),
        };

        let value = serde_json::to_value(&goal).unwrap();
        assert_eq!(value["aiPlan"], json!("**Summary**\n* Save $250 a month."));

        let parsed: Goal = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, goal);
    }

    #[test]
    fn test_suggestion_promotes_to_goal() {
        let suggestion = GoalSuggestion {
            name: "New Gadget".to_string(),
            target_amount: 800.0,
        };

        let goal = suggestion.into_goal();
        assert_eq!(goal.name, "New Gadget");
        assert!((goal.target_amount - 800.0).abs() < f64::EPSILON);
        assert!((goal.saved_amount).abs() < f64::EPSILON);
        assert!(!goal.is_completed);
        assert!(goal.ai_plan.is_none());
    }

    #[test]
    fn test_suggestion_parses_backend_shape() {
        let suggestion: GoalSuggestion =
            serde_json::from_value(json!({ "name": "Vacation", "targetAmount": 1500.0 })).unwrap();
        assert_eq!(suggestion.name, "Vacation");
        assert!((suggestion.target_amount - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_language_wire_codes() {
        assert_eq!(serde_json::to_value(Language::En).unwrap(), json!("en"));
        assert_eq!(serde_json::to_value(Language::Id).unwrap(), json!("id"));
        assert_eq!(serde_json::to_value(Language::Ja).unwrap(), json!("ja"));
        assert_eq!(Language::default(), Language::En);
    }
}
