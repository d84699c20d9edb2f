use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Status
// ============================================================================

/// Workflow status of a task. Unknown values from the task service are kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Todo,
    InProgress,
    InReview,
    Done,
    Other(String),
}

impl TaskStatus {
    /// Board column order
    pub const COLUMNS: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::InReview,
        TaskStatus::Done,
    ];

    pub fn parse(raw: &str) -> Self {
        match crate::shared::features::fold_key(raw).as_str() {
            "todo" | "open" | "new" | "backlog" => Self::Todo,
            "inprogress" | "doing" | "active" => Self::InProgress,
            "inreview" | "review" | "testing" => Self::InReview,
            "done" | "closed" | "resolved" | "completed" => Self::Done,
            _ => Self::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::InReview => "in_review",
            Self::Done => "done",
            Self::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::InReview => "In Review",
            Self::Done => "Done",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl Serialize for TaskStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(TaskStatus::parse(&raw))
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Todo
    }
}

// ============================================================================
// Task
// ============================================================================

/// Task as served by the task service (`GET /api/projects/{id}/tasks`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(rename = "sprintId", default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<String>,
    #[serde(rename = "startDate", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Rank inside the backlog, lower first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing_is_tolerant() {
        assert_eq!(TaskStatus::parse("In Progress"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("in_progress"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("DONE"), TaskStatus::Done);
        assert_eq!(
            TaskStatus::parse("blocked"),
            TaskStatus::Other("blocked".to_string())
        );
    }

    #[test]
    fn test_task_deserialize() {
        let json = r#"{
            "id": "t1",
            "title": "Write release notes",
            "status": "in_review",
            "assignee": "kim",
            "dueDate": "2024-03-15"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::InReview);
        assert_eq!(task.assignee.as_deref(), Some("kim"));
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert!(task.start_date.is_none());
    }

    #[test]
    fn test_status_roundtrips_unknown_value() {
        let json = serde_json::to_string(&TaskStatus::Other("blocked".into())).unwrap();
        assert_eq!(json, "\"blocked\"");
    }
}
