// taskboard-service/src/services/cascade.rs
//
// Follow-up mutations after a Team or Project is deleted, stripping the
// dangling references out of dependent documents. Steps are best-effort,
// sequential, per-document updates: a failure is logged and the remaining
// steps still run, nothing is rolled back (the primary deletion has already
// committed). Every step is idempotent, so re-running a cascade over
// already-detached state is a no-op.
use crate::utils::{project_storage, task_storage};
use chrono::Utc;
use log::{error, info};

// A team was deleted: pull its id out of every project owned by the same
// user and null the team link on every task that referenced it. Projects
// and tasks themselves are never deleted here.
pub fn on_team_deleted(team_id: &str, owner_id: &str) {
    info!("🧹 Running team-deletion cascade for team: {}", team_id);

    match project_storage::get_projects_for_owner(owner_id) {
        Ok(projects) => {
            for mut project in projects {
                if project.team_ids.iter().any(|id| id == team_id) {
                    project.team_ids.retain(|id| id != team_id);
                    project.updated_at = Utc::now();
                    if let Err(e) = project_storage::save_project(&project) {
                        error!(
                            "Cascade failed to detach team {} from project {}: {}",
                            team_id, project.id, e
                        );
                    }
                }
            }
        }
        Err(e) => error!("Cascade failed to list projects for {}: {}", owner_id, e),
    }

    match task_storage::get_tasks_for_owner(owner_id) {
        Ok(tasks) => {
            for mut task in tasks {
                if task.team_id.as_deref() == Some(team_id) {
                    task.team_id = None;
                    task.updated_at = Utc::now();
                    if let Err(e) = task_storage::save_task(&task) {
                        error!(
                            "Cascade failed to detach team {} from task {}: {}",
                            team_id, task.id, e
                        );
                    }
                }
            }
        }
        Err(e) => error!("Cascade failed to list tasks for {}: {}", owner_id, e),
    }
}

// A project was deleted: null the project link on every task owned by the
// same user that referenced it. The task's team link stays as-is; once
// project_id is null there is no pairing left to keep consistent.
pub fn on_project_deleted(project_id: &str, owner_id: &str) {
    info!("🧹 Running project-deletion cascade for project: {}", project_id);

    match task_storage::get_tasks_for_owner(owner_id) {
        Ok(tasks) => {
            for mut task in tasks {
                if task.project_id.as_deref() == Some(project_id) {
                    task.project_id = None;
                    task.updated_at = Utc::now();
                    if let Err(e) = task_storage::save_task(&task) {
                        error!(
                            "Cascade failed to detach project {} from task {}: {}",
                            project_id, task.id, e
                        );
                    }
                }
            }
        }
        Err(e) => error!("Cascade failed to list tasks for {}: {}", owner_id, e),
    }
}

// A project's team list changed: tasks linked to the project whose team is
// no longer in the list get their team link nulled. Only runs when the new
// list is non-empty; clearing all teams leaves task links untouched.
pub fn on_project_teams_changed(project_id: &str, new_team_ids: &[String], owner_id: &str) {
    if new_team_ids.is_empty() {
        return;
    }

    info!(
        "🧹 Re-checking task links after team change on project: {}",
        project_id
    );

    match task_storage::get_tasks_for_owner(owner_id) {
        Ok(tasks) => {
            for mut task in tasks {
                if task.project_id.as_deref() != Some(project_id) {
                    continue;
                }
                let stale = task
                    .team_id
                    .as_ref()
                    .map_or(false, |team_id| !new_team_ids.contains(team_id));
                if stale {
                    task.team_id = None;
                    task.updated_at = Utc::now();
                    if let Err(e) = task_storage::save_task(&task) {
                        error!(
                            "Cascade failed to detach stale team from task {}: {}",
                            task.id, e
                        );
                    }
                }
            }
        }
        Err(e) => error!("Cascade failed to list tasks for {}: {}", owner_id, e),
    }
}
