//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::generate_diff;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
    /// Everything restored to defaults
    Reset,
    /// Something was recovered from rather than applied
    Warn,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Reset => write!(f, "RESET"),
            Operation::Warn => write!(f, "WARN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Transaction,
    Category,
    Budget,
    Currency,
    /// The persistence backend as a whole
    Store,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Transaction => write!(f, "Transaction"),
            EntityType::Category => write!(f, "Category"),
            EntityType::Budget => write!(f, "Budget"),
            EntityType::Currency => write!(f, "Currency"),
            EntityType::Store => write!(f, "Store"),
        }
    }
}

/// One line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Transaction id, category name, or storage key
    pub entity_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable change summary or warning text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, entity_type: EntityType, entity_id: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            before: None,
            after: None,
            message: None,
        }
    }

    pub fn create<T: Serialize + ?Sized>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Create, entity_type, entity_id);
        entry.after = serde_json::to_value(entity).ok();
        entry
    }

    /// Update entry; the message is a diff of the two serialized values
    pub fn update<T: Serialize + ?Sized>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Update, entity_type, entity_id);
        entry.before = serde_json::to_value(before).ok();
        entry.after = serde_json::to_value(after).ok();
        if let (Some(b), Some(a)) = (&entry.before, &entry.after) {
            entry.message = generate_diff(b, a);
        }
        entry
    }

    pub fn delete<T: Serialize + ?Sized>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Delete, entity_type, entity_id);
        entry.before = serde_json::to_value(entity).ok();
        entry
    }

    pub fn reset() -> Self {
        Self::new(Operation::Reset, EntityType::Store, "all")
    }

    pub fn warn(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let mut entry = Self::new(Operation::Warn, entity_type, entity_id);
        entry.message = Some(message.into());
        entry
    }

    /// Attach or replace the message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(message) = &self.message {
            output.push_str(&format!("\n  {}", message));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Reset.to_string(), "RESET");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(EntityType::Category, "Rent", "Rent");
        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(json!("Rent")));
    }

    #[test]
    fn test_update_entry_has_diff() {
        let before = json!({"amount": 1000, "category": "Food"});
        let after = json!({"amount": 1500, "category": "Food"});

        let entry = AuditEntry::update(EntityType::Transaction, "42", &before, &after);
        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.message.as_deref(), Some("amount: 1000 -> 1500"));
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(EntityType::Transaction, "42", &json!({"amount": 5}));
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::reset();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("before"));
        assert!(json.contains("\"operation\":\"reset\""));

        let back: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.entity_type, EntityType::Store);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::warn(EntityType::Budget, "monthlyBudget", "reset to default");
        let formatted = entry.format_human_readable();
        assert!(formatted.contains("WARN Budget monthlyBudget"));
        assert!(formatted.contains("reset to default"));
    }
}
