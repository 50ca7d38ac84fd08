// taskboard-service/src/services/relationships.rs
//
// Validates and derives the Team/Project/Task cross-references at write
// time. Task links are checked strictly; project team lists are resolved
// permissively (unknown ids are dropped, not rejected).
use crate::models::ServiceError;
use crate::utils::{project_storage, team_storage};
use log::{debug, info};
use uuid::Uuid;

// Resolve the (team_id, project_id) pair for a task write.
//
// Both candidates must name records owned by `owner_id`. When both are set
// and the project is assigned to at least one team, the task's team must be
// one of them. When only a project is given and it is assigned to exactly
// one team, that team is silently derived as the task's team.
//
// Runs identically on create and update; for updates the caller passes the
// merged candidate values (current value where the request left a field
// untouched), so a project change re-validates against the current team and
// vice versa.
pub fn resolve_task_links(
    candidate_team_id: Option<&str>,
    candidate_project_id: Option<&str>,
    owner_id: &str,
) -> Result<(Option<String>, Option<String>), ServiceError> {
    let team = match candidate_team_id {
        Some(team_id) => match team_storage::find_team_owned_by(team_id, owner_id)? {
            Some(team) => Some(team),
            None => return Err(ServiceError::NotFound),
        },
        None => None,
    };

    let project = match candidate_project_id {
        Some(project_id) => match project_storage::find_project_owned_by(project_id, owner_id)? {
            Some(project) => Some(project),
            None => return Err(ServiceError::NotFound),
        },
        None => None,
    };

    match (team, project) {
        (Some(team), Some(project)) => {
            if !project.team_ids.is_empty() && !project.team_ids.contains(&team.id) {
                return Err(ServiceError::IncompatibleAssignment(
                    "Project is not assigned to the selected team".to_string(),
                ));
            }
            Ok((Some(team.id), Some(project.id)))
        }
        (None, Some(project)) => {
            // Unambiguous project-team pairing: derive the team
            if project.team_ids.len() == 1 {
                let derived = project.team_ids[0].clone();
                debug!(
                    "Auto-assigning team {} from project {} for user {}",
                    derived, project.id, owner_id
                );
                Ok((Some(derived), Some(project.id)))
            } else {
                Ok((None, Some(project.id)))
            }
        }
        (Some(team), None) => Ok((Some(team.id), None)),
        (None, None) => Ok((None, None)),
    }
}

// Resolve a project's candidate team list down to the teams that actually
// exist and belong to `owner_id`. Malformed and unknown ids are dropped
// silently; duplicates collapse to one entry.
pub fn resolve_project_teams(
    candidate_team_ids: &[String],
    owner_id: &str,
) -> Result<Vec<String>, ServiceError> {
    let mut resolved = Vec::new();

    for team_id in candidate_team_ids {
        if Uuid::parse_str(team_id).is_err() {
            debug!("Dropping malformed team id: {}", team_id);
            continue;
        }
        if resolved.contains(team_id) {
            continue;
        }
        if team_storage::find_team_owned_by(team_id, owner_id)?.is_some() {
            resolved.push(team_id.clone());
        } else {
            debug!("Dropping unknown team id: {}", team_id);
        }
    }

    if resolved.len() != candidate_team_ids.len() {
        info!(
            "Resolved {} of {} candidate team ids for user {}",
            resolved.len(),
            candidate_team_ids.len(),
            owner_id
        );
    }

    Ok(resolved)
}
