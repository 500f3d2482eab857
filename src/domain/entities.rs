use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the status of a task.
/// Corresponds to the `task_status` SQL enum. New tasks start as `pending`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    /// The enumeration accepted by the `status` filter and update field.
    pub const ALLOWED: &'static [&'static str] = &["pending", "completed"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(TaskStatus::Pending),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

/// A task as returned by the API. The owning user id stays in storage and is
/// never part of the wire model.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A registered user, including the stored password hash. Only repositories
/// and the login use case ever see this shape.
#[derive(Debug, Clone, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user without sensitive fields; the shape registration returns.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, FromRow)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> UserProfile {
        UserProfile {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_parse_round_trip() {
        assert_eq!(TaskStatus::parse("pending"), Some(TaskStatus::Pending));
        assert_eq!(TaskStatus::parse("completed"), Some(TaskStatus::Completed));
        assert_eq!(TaskStatus::parse("archived"), None);

        for name in TaskStatus::ALLOWED {
            let status = TaskStatus::parse(name).unwrap();
            assert_eq!(status.as_str(), *name);
        }
    }

    #[test]
    fn test_task_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(TaskStatus::Pending).unwrap(),
            serde_json::json!("pending")
        );
    }

    #[test]
    fn test_user_profile_drops_password() {
        let user = User {
            id: 1,
            email: "a@b.c".into(),
            name: "A".into(),
            password: "hashed".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let profile = UserProfile::from(user);
        let value = serde_json::to_value(profile).unwrap();
        assert!(value.get("password").is_none());
    }
}
