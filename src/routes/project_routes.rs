// taskboard-service/src/routes/project_routes.rs
use crate::models::{Project, ProjectData, ProjectUpdate, ServiceError};
use crate::services::authorization::{authorize, Action};
use crate::services::{cascade, relationships};
use crate::utils::{get_user_from_request, project_storage};
use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use chrono::Utc;
use log::{error, info};
use serde_json::json;
use uuid::Uuid;

// Create a new project
#[post("/projects")]
async fn create_project(
    req: HttpRequest,
    body: web::Json<ProjectData>,
) -> Result<HttpResponse, ServiceError> {
    let user = get_user_from_request(&req)?;

    let name = body.name.trim();
    if name.is_empty() {
        return Err(ServiceError::BadRequest("Project name is required".to_string()));
    }

    // Permission is checked against the first candidate team (or, with no
    // team at all, denied for non-admins)
    let candidate_teams = body.team_ids.clone().unwrap_or_default();
    let check_team = candidate_teams.first().map(|s| s.as_str());
    if !authorize(&user, Action::ManageProjects, check_team)? {
        error!(
            "❌ User: {} is not allowed to create projects for team: {:?}",
            user.id, check_team
        );
        return Err(ServiceError::Forbidden);
    }

    if project_storage::project_name_exists(&user.id, name, None)? {
        return Err(ServiceError::Conflict("Project name already exists".to_string()));
    }

    let team_ids = relationships::resolve_project_teams(&candidate_teams, &user.id)?;

    info!("📝 Creating new project: {} for user: {}", name, user.id);

    let now = Utc::now();
    let project = Project {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        icon: body.icon.clone().unwrap_or_default(),
        team_ids,
        user_id: user.id.clone(),
        created_at: now,
        updated_at: now,
    };

    project_storage::save_project(&project)?;

    info!("✅ Project created successfully: {}", project.id);

    Ok(HttpResponse::Created().json(json!({ "project": project })))
}

// Get all projects owned by the current user
#[get("/projects")]
async fn get_user_projects(req: HttpRequest) -> Result<HttpResponse, ServiceError> {
    let user = get_user_from_request(&req)?;

    let projects = project_storage::get_projects_for_owner(&user.id)?;

    info!("✅ Found {} projects for user: {}", projects.len(), user.id);

    Ok(HttpResponse::Ok().json(json!({ "projects": projects })))
}

// Get a specific project by ID
#[get("/projects/{project_id}")]
async fn get_project(req: HttpRequest, path: web::Path<String>) -> Result<HttpResponse, ServiceError> {
    let user = get_user_from_request(&req)?;
    let project_id = path.into_inner();

    let project = match project_storage::find_project_owned_by(&project_id, &user.id)? {
        Some(project) => project,
        None => {
            error!("❌ Project not found: {}", project_id);
            return Err(ServiceError::NotFound);
        }
    };

    Ok(HttpResponse::Ok().json(json!({ "project": project })))
}

// Update a project; re-targeting its teams re-validates dependent task links
#[put("/projects/{project_id}")]
async fn update_project(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<ProjectUpdate>,
) -> Result<HttpResponse, ServiceError> {
    let user = get_user_from_request(&req)?;
    let project_id = path.into_inner();

    let mut project = match project_storage::find_project_owned_by(&project_id, &user.id)? {
        Some(project) => project,
        None => {
            error!("❌ Project not found: {}", project_id);
            return Err(ServiceError::NotFound);
        }
    };

    if let Some(ref name) = body.name {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::BadRequest("Project name is required".to_string()));
        }
        if project_storage::project_name_exists(&user.id, name, Some(&project.id))? {
            return Err(ServiceError::Conflict("Project name already exists".to_string()));
        }
        project.name = name.to_string();
    }

    if let Some(ref icon) = body.icon {
        project.icon = icon.clone();
    }

    let mut teams_changed = false;
    if let Some(ref candidate_teams) = body.team_ids {
        project.team_ids = relationships::resolve_project_teams(candidate_teams, &user.id)?;
        teams_changed = true;
    }

    project.updated_at = Utc::now();
    project_storage::save_project(&project)?;

    if teams_changed {
        cascade::on_project_teams_changed(&project.id, &project.team_ids, &user.id);
    }

    info!("✅ Project updated: {}", project.id);

    Ok(HttpResponse::Ok().json(json!({ "project": project })))
}

// Delete a project and detach the tasks that referenced it
#[delete("/projects/{project_id}")]
async fn delete_project(req: HttpRequest, path: web::Path<String>) -> Result<HttpResponse, ServiceError> {
    let user = get_user_from_request(&req)?;
    let project_id = path.into_inner();

    info!("🗑️ Deleting project: {}", project_id);

    let project = match project_storage::find_project_owned_by(&project_id, &user.id)? {
        Some(project) => project,
        None => {
            error!("❌ Project not found: {}", project_id);
            return Err(ServiceError::NotFound);
        }
    };

    project_storage::delete_project(&project.id)?;

    // Best-effort cleanup; the deletion above stands regardless
    cascade::on_project_deleted(&project.id, &user.id);

    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

// Register all project routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_project)
        .service(get_user_projects)
        .service(get_project)
        .service(update_project)
        .service(delete_project);
}
