// taskboard-service/src/routes/task_routes.rs
use crate::models::{ServiceError, Task, TaskData, TaskUpdate};
use crate::services::authorization::{authorize, Action};
use crate::services::relationships;
use crate::utils::{get_user_from_request, task_storage};
use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use chrono::Utc;
use log::{error, info};
use serde_json::json;
use uuid::Uuid;

// Create a new task
#[post("/tasks")]
async fn create_task(req: HttpRequest, body: web::Json<TaskData>) -> Result<HttpResponse, ServiceError> {
    let user = get_user_from_request(&req)?;

    let title = body.title.trim();
    if title.is_empty() {
        return Err(ServiceError::BadRequest("Title is required".to_string()));
    }
    if title.len() > 100 {
        return Err(ServiceError::BadRequest(
            "Title cannot be more than 100 characters".to_string(),
        ));
    }
    if body.description.as_deref().map_or(0, |d| d.len()) > 500 {
        return Err(ServiceError::BadRequest(
            "Description cannot be more than 500 characters".to_string(),
        ));
    }

    if !authorize(&user, Action::CreateTasks, body.team_id.as_deref())? {
        error!(
            "❌ User: {} is not allowed to create tasks for team: {:?}",
            user.id, body.team_id
        );
        return Err(ServiceError::Forbidden);
    }

    let (team_id, project_id) = relationships::resolve_task_links(
        body.team_id.as_deref(),
        body.project_id.as_deref(),
        &user.id,
    )?;

    info!("📝 Creating new task: {} for user: {}", title, user.id);

    let now = Utc::now();
    let task = Task {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        description: body.description.clone().unwrap_or_default(),
        status: body.status.unwrap_or_default(),
        priority: body.priority.unwrap_or_default(),
        due_date: body.due_date,
        scheduled: body.scheduled.unwrap_or(false),
        team_id,
        project_id,
        assigned_to: body.assigned_to.clone(),
        user_id: user.id.clone(),
        created_at: now,
        updated_at: now,
    };

    task_storage::save_task(&task)?;

    info!("✅ Task created successfully: {}", task.id);

    Ok(HttpResponse::Created().json(json!({ "task": task })))
}

// Get all tasks owned by the current user
#[get("/tasks")]
async fn get_user_tasks(req: HttpRequest) -> Result<HttpResponse, ServiceError> {
    let user = get_user_from_request(&req)?;

    let tasks = task_storage::get_tasks_for_owner(&user.id)?;

    info!("✅ Found {} tasks for user: {}", tasks.len(), user.id);

    Ok(HttpResponse::Ok().json(json!({ "tasks": tasks })))
}

// Get a specific task by ID
#[get("/tasks/{task_id}")]
async fn get_task(req: HttpRequest, path: web::Path<String>) -> Result<HttpResponse, ServiceError> {
    let user = get_user_from_request(&req)?;
    let task_id = path.into_inner();

    let task = match task_storage::find_task_owned_by(&task_id, &user.id)? {
        Some(task) => task,
        None => {
            error!("❌ Task not found: {}", task_id);
            return Err(ServiceError::NotFound);
        }
    };

    Ok(HttpResponse::Ok().json(json!({ "task": task })))
}

// Update a task. Link changes go back through the resolver with the merged
// candidate values, so changing only the project re-validates against the
// task's current team and vice versa.
#[put("/tasks/{task_id}")]
async fn update_task(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<TaskUpdate>,
) -> Result<HttpResponse, ServiceError> {
    let user = get_user_from_request(&req)?;
    let task_id = path.into_inner();

    let mut task = match task_storage::find_task_owned_by(&task_id, &user.id)? {
        Some(task) => task,
        None => {
            error!("❌ Task not found: {}", task_id);
            return Err(ServiceError::NotFound);
        }
    };

    if let Some(ref title) = body.title {
        let title = title.trim();
        if title.is_empty() {
            return Err(ServiceError::BadRequest("Title is required".to_string()));
        }
        if title.len() > 100 {
            return Err(ServiceError::BadRequest(
                "Title cannot be more than 100 characters".to_string(),
            ));
        }
        task.title = title.to_string();
    }
    if let Some(ref description) = body.description {
        if description.len() > 500 {
            return Err(ServiceError::BadRequest(
                "Description cannot be more than 500 characters".to_string(),
            ));
        }
        task.description = description.clone();
    }
    if let Some(status) = body.status {
        task.status = status;
    }
    if let Some(priority) = body.priority {
        task.priority = priority;
    }
    if let Some(scheduled) = body.scheduled {
        task.scheduled = scheduled;
    }
    if let Some(ref assigned_to) = body.assigned_to {
        task.assigned_to = assigned_to.clone();
    }

    // Merge link candidates: a field absent from the body keeps its current
    // value, an explicit null clears it
    if body.team_id.is_some() || body.project_id.is_some() {
        let candidate_team = match &body.team_id {
            Some(value) => value.clone(),
            None => task.team_id.clone(),
        };
        let candidate_project = match &body.project_id {
            Some(value) => value.clone(),
            None => task.project_id.clone(),
        };

        let (team_id, project_id) = relationships::resolve_task_links(
            candidate_team.as_deref(),
            candidate_project.as_deref(),
            &user.id,
        )?;
        task.team_id = team_id;
        task.project_id = project_id;
    }

    task.updated_at = Utc::now();
    task_storage::save_task(&task)?;

    info!("✅ Task updated: {}", task.id);

    Ok(HttpResponse::Ok().json(json!({ "task": task })))
}

// Delete a task
#[delete("/tasks/{task_id}")]
async fn delete_task(req: HttpRequest, path: web::Path<String>) -> Result<HttpResponse, ServiceError> {
    let user = get_user_from_request(&req)?;
    let task_id = path.into_inner();

    if Uuid::parse_str(&task_id).is_err() {
        return Err(ServiceError::BadRequest("Invalid task ID".to_string()));
    }

    let task = match task_storage::find_task_owned_by(&task_id, &user.id)? {
        Some(task) => task,
        None => {
            error!("❌ Task not found: {}", task_id);
            return Err(ServiceError::NotFound);
        }
    };

    task_storage::delete_task(&task.id)?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Task deleted successfully" })))
}

// Register all task routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_task)
        .service(get_user_tasks)
        .service(get_task)
        .service(update_task)
        .service(delete_task);
}
