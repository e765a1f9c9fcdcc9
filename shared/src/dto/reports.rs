use serde::{Deserialize, Serialize};

/// Incident report submission (sent as multipart form fields)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSubmission {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
}

/// Reply appended to an existing report conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportReply {
    pub report_id: String,
    pub message: String,
}

/// `POST /reports/submit` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportCreated {
    #[serde(default)]
    pub message: Option<String>,
    pub report_id: String,
}

/// Conversation entry on a report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationEntry {
    #[serde(default)]
    pub id: Option<String>,
    pub sender: String,
    #[serde(default)]
    pub sender_name: Option<String>,
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Submitted incident report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: String,
    pub status: String,
    #[serde(default)]
    pub conversation: Vec<ConversationEntry>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `GET /reports/my-reports` response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportsResponse {
    #[serde(default)]
    pub reports: Vec<Report>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_response_from_backend_payload() {
        let json = r#"{"reports": [{
            "_id": "5f0c2a9e-1b7d-4c1e-9a53-3f1a2b4c5d6e",
            "user_id": "u-1",
            "user_name": "Alice",
            "user_email": "alice@example.com",
            "title": "Phishing site",
            "description": "Fake exchange login page",
            "category": "fraud",
            "priority": "high",
            "status": "submitted",
            "created_at": "2025-01-15T10:30:00.123000",
            "updated_at": "2025-01-15T10:30:00.123000",
            "attachments": [],
            "conversation": [{
                "id": "c-1",
                "sender": "user",
                "sender_name": "Alice",
                "message": "Any update?",
                "timestamp": "2025-01-16T08:00:00"
            }]
        }]}"#;
        let response: ReportsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.reports.len(), 1);
        let report = &response.reports[0];
        assert_eq!(report.id, "5f0c2a9e-1b7d-4c1e-9a53-3f1a2b4c5d6e");
        assert_eq!(report.status, "submitted");
        assert_eq!(report.created_at.as_deref(), Some("2025-01-15T10:30:00.123000"));
        assert_eq!(report.conversation[0].sender_name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_empty_reports_response() {
        let response: ReportsResponse = serde_json::from_str(r#"{"reports": []}"#).unwrap();
        assert!(response.reports.is_empty());
    }

    #[test]
    fn test_report_created_payload() {
        let json = r#"{"message": "Report submitted successfully", "report_id": "r-1"}"#;
        let created: ReportCreated = serde_json::from_str(json).unwrap();
        assert_eq!(created.report_id, "r-1");
    }
}
