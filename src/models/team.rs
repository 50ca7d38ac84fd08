// taskboard-service/src/models/team.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Role a member holds within one team. Note: these are the only roles
// assignable through the members endpoint; the authorization checks look
// for different role strings entirely (see services::authorization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamRole {
    #[serde(rename = "Member")]
    Member,
    #[serde(rename = "Tech Lead")]
    TechLead,
    #[serde(rename = "QA")]
    Qa,
}

impl TeamRole {
    // The role string as stored on the member entry
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamRole::Member => "Member",
            TeamRole::TechLead => "Tech Lead",
            TeamRole::Qa => "QA",
        }
    }

    // Parse a role string from a request body
    pub fn parse(value: &str) -> Option<TeamRole> {
        match value {
            "Member" => Some(TeamRole::Member),
            "Tech Lead" => Some(TeamRole::TechLead),
            "QA" => Some(TeamRole::Qa),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamMember {
    pub user_id: String,
    pub role: TeamRole,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub added_at: DateTime<Utc>,
}

// Team aggregate. The owner is tracked by owner_id and is never a member
// entry; member user_ids are unique within the list.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    #[serde(default)]
    pub members: Vec<TeamMember>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

impl Team {
    pub fn is_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|m| m.user_id == user_id)
    }

    pub fn member_role(&self, user_id: &str) -> Option<TeamRole> {
        self.members
            .iter()
            .find(|m| m.user_id == user_id)
            .map(|m| m.role)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TeamData {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AddMemberRequest {
    pub email: String,
    pub role: Option<String>,
}
