// taskboard-service/src/routes/team_routes.rs
use crate::models::{AddMemberRequest, ServiceError, Team, TeamData, TeamRole};
use crate::services::{cascade, membership};
use crate::utils::{get_user_from_request, get_user_id_from_request, team_storage};
use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use chrono::Utc;
use log::{error, info};
use serde_json::json;
use uuid::Uuid;

// Create a new team
#[post("/teams")]
async fn create_team(req: HttpRequest, body: web::Json<TeamData>) -> Result<HttpResponse, ServiceError> {
    let user_id = get_user_id_from_request(&req)?;

    let name = body.name.trim();
    if name.is_empty() {
        return Err(ServiceError::BadRequest("Team name is required".to_string()));
    }
    if name.len() > 100 {
        return Err(ServiceError::BadRequest(
            "Team name cannot exceed 100 characters".to_string(),
        ));
    }

    if team_storage::team_name_exists(&user_id, name, None)? {
        return Err(ServiceError::Conflict("Team name already exists".to_string()));
    }

    info!("📝 Creating new team: {} for user: {}", name, user_id);

    let now = Utc::now();
    let team = Team {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        owner_id: user_id,
        members: Vec::new(),
        created_at: now,
        updated_at: now,
    };

    team_storage::save_team(&team)?;

    info!("✅ Team created successfully: {}", team.id);

    Ok(HttpResponse::Created().json(json!({ "team": team })))
}

// Get all teams owned by the current user
#[get("/teams")]
async fn get_user_teams(req: HttpRequest) -> Result<HttpResponse, ServiceError> {
    let user_id = get_user_id_from_request(&req)?;

    let teams = team_storage::get_teams_for_owner(&user_id)?;

    info!("✅ Found {} teams for user: {}", teams.len(), user_id);

    Ok(HttpResponse::Ok().json(json!({ "teams": teams })))
}

// Get a specific team by ID
#[get("/teams/{team_id}")]
async fn get_team(req: HttpRequest, path: web::Path<String>) -> Result<HttpResponse, ServiceError> {
    let user_id = get_user_id_from_request(&req)?;
    let team_id = path.into_inner();

    let team = match team_storage::find_team_owned_by(&team_id, &user_id)? {
        Some(team) => team,
        None => {
            error!("❌ Team not found: {}", team_id);
            return Err(ServiceError::NotFound);
        }
    };

    Ok(HttpResponse::Ok().json(json!({ "team": team })))
}

// Rename a team
#[put("/teams/{team_id}")]
async fn update_team(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<TeamData>,
) -> Result<HttpResponse, ServiceError> {
    let user_id = get_user_id_from_request(&req)?;
    let team_id = path.into_inner();

    let name = body.name.trim();
    if name.is_empty() {
        return Err(ServiceError::BadRequest("Team name is required".to_string()));
    }
    if name.len() > 100 {
        return Err(ServiceError::BadRequest(
            "Team name cannot exceed 100 characters".to_string(),
        ));
    }

    let mut team = match team_storage::find_team_owned_by(&team_id, &user_id)? {
        Some(team) => team,
        None => {
            error!("❌ Team not found: {}", team_id);
            return Err(ServiceError::NotFound);
        }
    };

    if team_storage::team_name_exists(&user_id, name, Some(&team.id))? {
        return Err(ServiceError::Conflict("Team name already exists".to_string()));
    }

    team.name = name.to_string();
    team.updated_at = Utc::now();
    team_storage::save_team(&team)?;

    info!("✅ Team updated: {}", team.id);

    Ok(HttpResponse::Ok().json(json!({ "team": team })))
}

// Delete a team and detach the projects/tasks that referenced it
#[delete("/teams/{team_id}")]
async fn delete_team(req: HttpRequest, path: web::Path<String>) -> Result<HttpResponse, ServiceError> {
    let user_id = get_user_id_from_request(&req)?;
    let team_id = path.into_inner();

    info!("🗑️ Deleting team: {}", team_id);

    // Only the team owner can delete a team
    let team = match team_storage::find_team_owned_by(&team_id, &user_id)? {
        Some(team) => team,
        None => {
            error!("❌ Team not found: {}", team_id);
            return Err(ServiceError::NotFound);
        }
    };

    team_storage::delete_team(&team.id)?;

    // Best-effort cleanup of dangling references; the deletion above stands
    // regardless of how the cascade fares
    cascade::on_team_deleted(&team.id, &user_id);

    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

// Add a user to a team by email
#[post("/teams/{team_id}/members")]
async fn add_team_member(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<AddMemberRequest>,
) -> Result<HttpResponse, ServiceError> {
    let user = get_user_from_request(&req)?;
    let team_id = path.into_inner();

    let email = body.email.trim().to_lowercase();
    if email.is_empty() {
        return Err(ServiceError::BadRequest("User email is required".to_string()));
    }

    let role_str = body.role.as_deref().unwrap_or("Member");
    let role = TeamRole::parse(role_str)
        .ok_or_else(|| ServiceError::BadRequest("Invalid role".to_string()))?;

    info!("👥 Adding user: {} to team: {}", email, team_id);

    let team = membership::add_member(&user, &team_id, &email, role)?;

    Ok(HttpResponse::Created().json(json!({
        "message": "User added to team successfully",
        "team": team
    })))
}

// Remove a member from a team
#[delete("/teams/{team_id}/members/{user_id}")]
async fn remove_team_member(
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ServiceError> {
    let user = get_user_from_request(&req)?;
    let (team_id, target_user_id) = path.into_inner();

    info!("🗑️ Removing user: {} from team: {}", target_user_id, team_id);

    let team = membership::remove_member(&user, &team_id, &target_user_id)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "User removed from team successfully",
        "team": team
    })))
}

// Register all team routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_team)
        .service(get_user_teams)
        .service(get_team)
        .service(update_team)
        .service(delete_team)
        .service(add_team_member)
        .service(remove_team_member);
}
