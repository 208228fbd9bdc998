use serde::{Deserialize, Serialize};

use cadence_domain::work_session::WorkSession;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartWorkSessionRequest {
    pub task_id: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkSessionDto {
    pub id: String,
    pub task_id: Option<String>,
    pub started_at: String, // RFC 3339
    pub ended_at: Option<String>,
    pub duration_seconds: Option<i64>,
    pub note: Option<String>,
    pub is_running: bool,
}

impl From<&WorkSession> for WorkSessionDto {
    fn from(session: &WorkSession) -> Self {
        Self {
            id: session.id().to_string(),
            task_id: session.task_id().map(|t| t.to_string()),
            started_at: session.started_at().to_rfc3339(),
            ended_at: session.ended_at().map(|t| t.to_rfc3339()),
            duration_seconds: session.duration_seconds(),
            note: session.note().map(str::to_string),
            is_running: session.is_running(),
        }
    }
}
