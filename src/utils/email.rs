// taskboard-service/src/utils/email.rs
use crate::models::ServiceError;
use chrono::{DateTime, Utc};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

const OUTBOX_DIR: &str = "./storage/outbox";

// A queued notification message. There is no SMTP relay in this service;
// messages land in an outbox directory that a separate mailer drains.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OutboxMessage {
    pub id: String,
    pub to: String,
    pub subject: String,
    pub body: String,
    pub queued_at: DateTime<Utc>,
}

fn ensure_outbox_dir() -> std::io::Result<()> {
    let dir = Path::new(OUTBOX_DIR);
    if !dir.exists() {
        info!("Creating outbox directory");
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

// Queue a "you've been added to a team" notification. Callers treat this as
// fire-and-forget: a failure here must not roll back the membership change.
pub fn send_team_notification(
    to: &str,
    team_name: &str,
    added_by: &str,
) -> Result<(), ServiceError> {
    ensure_outbox_dir().map_err(|e| {
        error!("Failed to create outbox directory: {:?}", e);
        ServiceError::InternalServerError
    })?;

    let message = OutboxMessage {
        id: Uuid::new_v4().to_string(),
        to: to.to_string(),
        subject: format!("You've been added to the team \"{}\"", team_name),
        body: format!(
            "{} added you to the team \"{}\". Sign in to see its projects and tasks.",
            added_by, team_name
        ),
        queued_at: Utc::now(),
    };

    let message_path = format!("{}/{}.json", OUTBOX_DIR, message.id);
    let message_json = serde_json::to_string_pretty(&message).map_err(|e| {
        error!("Failed to serialize notification: {:?}", e);
        ServiceError::InternalServerError
    })?;

    fs::write(&message_path, message_json).map_err(|e| {
        error!("Failed to queue notification: {:?}", e);
        ServiceError::InternalServerError
    })?;

    info!("📧 Queued team notification for: {}", to);
    Ok(())
}
