// taskboard-service/src/services/membership.rs
//
// Team membership mutations. Validation happens before any write; the only
// side effect that may fail after the mutation committed is the added-member
// notification, which is fire-and-forget.
use crate::models::{ServiceError, Team, TeamMember, TeamRole, User};
use crate::utils::{email, team_storage, user_storage};
use chrono::Utc;
use log::{error, info};

// Add a user (looked up by email) to a team owned by `owner`.
//
// Rejects unknown emails, the team owner themselves, duplicate members and
// role strings outside the assignable set. On success the member tuple is
// appended with the current timestamp and a best-effort notification is
// queued; notification failure never rolls back the membership change.
pub fn add_member(
    owner: &User,
    team_id: &str,
    member_email: &str,
    role: TeamRole,
) -> Result<Team, ServiceError> {
    let mut team = team_storage::find_team_owned_by(team_id, &owner.id)?
        .ok_or(ServiceError::NotFound)?;

    let user = user_storage::find_user_by_email(member_email)?
        .ok_or(ServiceError::NotFound)?;

    if team.owner_id == user.id {
        return Err(ServiceError::BadRequest(
            "Cannot add team owner as member".to_string(),
        ));
    }

    if team.is_member(&user.id) {
        return Err(ServiceError::Conflict(
            "User is already a member of this team".to_string(),
        ));
    }

    team.members.push(TeamMember {
        user_id: user.id.clone(),
        role,
        added_at: Utc::now(),
    });
    team.updated_at = Utc::now();

    team_storage::save_team(&team)?;

    info!(
        "👥 Added user: {} to team: {} with role: {}",
        user.id,
        team.id,
        role.as_str()
    );

    // Fire-and-forget: the membership change stands even if this fails
    if let Err(e) = email::send_team_notification(&user.email, &team.name, &owner.name) {
        error!("Failed to queue team notification: {}", e);
    }

    Ok(team)
}

// Remove a member from a team owned by `owner`. The order of the remaining
// members is preserved. No cascade: tasks assigned to the removed user keep
// their assigned_to reference.
pub fn remove_member(owner: &User, team_id: &str, user_id: &str) -> Result<Team, ServiceError> {
    let mut team = team_storage::find_team_owned_by(team_id, &owner.id)?
        .ok_or(ServiceError::NotFound)?;

    let member_index = team
        .members
        .iter()
        .position(|m| m.user_id == user_id)
        .ok_or(ServiceError::NotFound)?;

    team.members.remove(member_index);
    team.updated_at = Utc::now();

    team_storage::save_team(&team)?;

    info!("🗑️ Removed user: {} from team: {}", user_id, team.id);

    Ok(team)
}
