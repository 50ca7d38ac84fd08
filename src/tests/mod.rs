pub mod relationship_tests;
pub mod route_tests;

// Shared fixtures. Every record gets a fresh uuid so tests can share the
// ./storage tree without stepping on each other.
pub mod fixtures {
    use crate::models::{
        GlobalRole, Project, Task, TaskPriority, TaskStatus, Team, TeamMember, TeamRole, User,
    };
    use crate::utils::{project_storage, task_storage, team_storage, user_storage};
    use chrono::Utc;
    use uuid::Uuid;

    pub fn make_user(role: GlobalRole) -> User {
        let id = Uuid::new_v4().to_string();
        let user = User {
            id: id.clone(),
            name: format!("user-{}", &id[..8]),
            email: format!("{}@example.com", id),
            password_hash: "not-a-real-hash".to_string(),
            role,
            created_at: Utc::now(),
        };
        user_storage::save_user(&user).unwrap();
        user
    }

    pub fn make_team(owner_id: &str) -> Team {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let team = Team {
            id: id.clone(),
            name: format!("team-{}", &id[..8]),
            owner_id: owner_id.to_string(),
            members: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        team_storage::save_team(&team).unwrap();
        team
    }

    pub fn add_fixture_member(team: &mut Team, user_id: &str, role: TeamRole) {
        team.members.push(TeamMember {
            user_id: user_id.to_string(),
            role,
            added_at: Utc::now(),
        });
        team_storage::save_team(team).unwrap();
    }

    pub fn make_project(owner_id: &str, team_ids: Vec<String>) -> Project {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let project = Project {
            id: id.clone(),
            name: format!("project-{}", &id[..8]),
            icon: String::new(),
            team_ids,
            user_id: owner_id.to_string(),
            created_at: now,
            updated_at: now,
        };
        project_storage::save_project(&project).unwrap();
        project
    }

    pub fn make_task(owner_id: &str, team_id: Option<String>, project_id: Option<String>) -> Task {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let task = Task {
            id: id.clone(),
            title: format!("task-{}", &id[..8]),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            due_date: None,
            scheduled: false,
            team_id,
            project_id,
            assigned_to: None,
            user_id: owner_id.to_string(),
            created_at: now,
            updated_at: now,
        };
        task_storage::save_task(&task).unwrap();
        task
    }
}
