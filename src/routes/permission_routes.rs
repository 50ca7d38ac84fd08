// taskboard-service/src/routes/permission_routes.rs
use crate::models::ServiceError;
use crate::services::authorization::{authorize, Action};
use crate::utils::get_user_from_request;
use actix_web::{get, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
struct PermissionQuery {
    team_id: Option<String>,
}

// Report the caller's effective permissions for a team. Without a team both
// checks come back false for non-admins.
#[get("/permissions")]
async fn check_permissions(
    req: HttpRequest,
    query: web::Query<PermissionQuery>,
) -> Result<HttpResponse, ServiceError> {
    let user = get_user_from_request(&req)?;
    let team_id = query.team_id.as_deref();

    let can_create_tasks = match team_id {
        Some(_) => authorize(&user, Action::CreateTasks, team_id)?,
        None => false,
    };
    let can_manage_projects = match team_id {
        Some(_) => authorize(&user, Action::ManageProjects, team_id)?,
        None => false,
    };

    Ok(HttpResponse::Ok().json(json!({
        "can_create_tasks": can_create_tasks,
        "can_manage_projects": can_manage_projects,
        "is_global_admin": user.is_global_admin(),
    })))
}

// Register permission routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(check_permissions);
}
