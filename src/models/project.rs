// taskboard-service/src/models/project.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Project document. team_ids may only reference teams owned by the same
// user that owns the project; the relationship resolver enforces this.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub team_ids: Vec<String>,
    pub user_id: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ProjectData {
    pub name: String,
    pub icon: Option<String>,
    pub team_ids: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub team_ids: Option<Vec<String>>,
}
