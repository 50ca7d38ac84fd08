// taskboard-service/src/utils/task_storage.rs
use crate::models::{ServiceError, Task};
use log::{error, info, warn};
use std::fs;
use std::path::Path;

const TASKS_DIR: &str = "./storage/tasks";

// Initialize tasks directory
pub fn ensure_tasks_dir() -> std::io::Result<()> {
    let dir = Path::new(TASKS_DIR);
    if !dir.exists() {
        info!("Creating tasks directory");
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

// Save task to storage
pub fn save_task(task: &Task) -> Result<(), ServiceError> {
    ensure_tasks_dir().map_err(|e| {
        error!("Failed to create tasks directory: {:?}", e);
        ServiceError::InternalServerError
    })?;

    let task_path = format!("{}/{}.json", TASKS_DIR, task.id);
    let task_json = serde_json::to_string_pretty(task).map_err(|e| {
        error!("Failed to serialize task: {:?}", e);
        ServiceError::InternalServerError
    })?;

    fs::write(&task_path, task_json).map_err(|e| {
        error!("Failed to save task: {:?}", e);
        ServiceError::InternalServerError
    })?;

    Ok(())
}

// Find task by ID
pub fn find_task_by_id(task_id: &str) -> Result<Option<Task>, ServiceError> {
    let task_path = format!("{}/{}.json", TASKS_DIR, task_id);
    let path = Path::new(&task_path);

    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| {
        error!("Failed to read task file: {:?}", e);
        ServiceError::InternalServerError
    })?;

    let task: Task = serde_json::from_str(&content).map_err(|e| {
        error!("Failed to parse task JSON: {:?}", e);
        ServiceError::InternalServerError
    })?;

    Ok(Some(task))
}

// Find a task by ID, scoped to its owner
pub fn find_task_owned_by(task_id: &str, owner_id: &str) -> Result<Option<Task>, ServiceError> {
    match find_task_by_id(task_id)? {
        Some(task) if task.user_id == owner_id => Ok(Some(task)),
        _ => Ok(None),
    }
}

// Get all tasks owned by a user, newest first
pub fn get_tasks_for_owner(owner_id: &str) -> Result<Vec<Task>, ServiceError> {
    let mut tasks = Vec::new();
    ensure_tasks_dir().map_err(|e| {
        error!("Failed to ensure tasks directory: {:?}", e);
        ServiceError::InternalServerError
    })?;

    let dir = Path::new(TASKS_DIR);

    for entry_result in fs::read_dir(dir).map_err(|e| {
        error!("Failed to read tasks directory: {:?}", e);
        ServiceError::InternalServerError
    })? {
        let entry = entry_result.map_err(|e| {
            error!("Failed to read directory entry: {:?}", e);
            ServiceError::InternalServerError
        })?;

        let path = entry.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == "json") {
            let content = fs::read_to_string(&path).map_err(|e| {
                error!("Failed to read task file: {:?}", e);
                ServiceError::InternalServerError
            })?;

            let task: Task = match serde_json::from_str(&content) {
                Ok(task) => task,
                Err(e) => {
                    warn!("Failed to parse task JSON: {:?}", e);
                    continue;
                }
            };

            if task.user_id == owner_id {
                tasks.push(task);
            }
        }
    }

    tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(tasks)
}

// Delete a task record
pub fn delete_task(task_id: &str) -> Result<bool, ServiceError> {
    let task_path = format!("{}/{}.json", TASKS_DIR, task_id);
    let path = Path::new(&task_path);

    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(path).map_err(|e| {
        error!("Failed to delete task file: {:?}", e);
        ServiceError::InternalServerError
    })?;

    info!("✅ Deleted task: {}", task_id);
    Ok(true)
}
