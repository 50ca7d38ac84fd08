// taskboard-service/src/utils/project_storage.rs
use crate::models::{Project, ServiceError};
use log::{error, info, warn};
use std::fs;
use std::path::Path;

const PROJECTS_DIR: &str = "./storage/projects";

// Initialize projects directory
pub fn ensure_projects_dir() -> std::io::Result<()> {
    let dir = Path::new(PROJECTS_DIR);
    if !dir.exists() {
        info!("Creating projects directory");
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

// Save project to storage
pub fn save_project(project: &Project) -> Result<(), ServiceError> {
    ensure_projects_dir().map_err(|e| {
        error!("Failed to create projects directory: {:?}", e);
        ServiceError::InternalServerError
    })?;

    let project_path = format!("{}/{}.json", PROJECTS_DIR, project.id);
    let project_json = serde_json::to_string_pretty(project).map_err(|e| {
        error!("Failed to serialize project: {:?}", e);
        ServiceError::InternalServerError
    })?;

    fs::write(&project_path, project_json).map_err(|e| {
        error!("Failed to save project: {:?}", e);
        ServiceError::InternalServerError
    })?;

    Ok(())
}

// Find project by ID
pub fn find_project_by_id(project_id: &str) -> Result<Option<Project>, ServiceError> {
    let project_path = format!("{}/{}.json", PROJECTS_DIR, project_id);
    let path = Path::new(&project_path);

    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| {
        error!("Failed to read project file: {:?}", e);
        ServiceError::InternalServerError
    })?;

    let project: Project = serde_json::from_str(&content).map_err(|e| {
        error!("Failed to parse project JSON: {:?}", e);
        ServiceError::InternalServerError
    })?;

    Ok(Some(project))
}

// Find a project by ID, scoped to its owner
pub fn find_project_owned_by(
    project_id: &str,
    owner_id: &str,
) -> Result<Option<Project>, ServiceError> {
    match find_project_by_id(project_id)? {
        Some(project) if project.user_id == owner_id => Ok(Some(project)),
        _ => Ok(None),
    }
}

// Get all projects owned by a user
pub fn get_projects_for_owner(owner_id: &str) -> Result<Vec<Project>, ServiceError> {
    let mut projects = Vec::new();
    ensure_projects_dir().map_err(|e| {
        error!("Failed to ensure projects directory: {:?}", e);
        ServiceError::InternalServerError
    })?;

    let dir = Path::new(PROJECTS_DIR);

    for entry_result in fs::read_dir(dir).map_err(|e| {
        error!("Failed to read projects directory: {:?}", e);
        ServiceError::InternalServerError
    })? {
        let entry = entry_result.map_err(|e| {
            error!("Failed to read directory entry: {:?}", e);
            ServiceError::InternalServerError
        })?;

        let path = entry.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == "json") {
            let content = fs::read_to_string(&path).map_err(|e| {
                error!("Failed to read project file: {:?}", e);
                ServiceError::InternalServerError
            })?;

            let project: Project = match serde_json::from_str(&content) {
                Ok(project) => project,
                Err(e) => {
                    warn!("Failed to parse project JSON: {:?}", e);
                    continue;
                }
            };

            if project.user_id == owner_id {
                projects.push(project);
            }
        }
    }

    projects.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(projects)
}

// Check whether the owner already has a project with this name
pub fn project_name_exists(
    owner_id: &str,
    name: &str,
    exclude_id: Option<&str>,
) -> Result<bool, ServiceError> {
    let projects = get_projects_for_owner(owner_id)?;
    Ok(projects
        .iter()
        .any(|p| p.name == name && exclude_id.map_or(true, |id| p.id != id)))
}

// Delete a project record
pub fn delete_project(project_id: &str) -> Result<bool, ServiceError> {
    let project_path = format!("{}/{}.json", PROJECTS_DIR, project_id);
    let path = Path::new(&project_path);

    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(path).map_err(|e| {
        error!("Failed to delete project file: {:?}", e);
        ServiceError::InternalServerError
    })?;

    info!("✅ Deleted project: {}", project_id);
    Ok(true)
}
