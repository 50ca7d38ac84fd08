// taskboard-service/src/routes/auth_routes.rs
use crate::models::{GlobalRole, LoginResponse, RegisterRequest, ServiceError, User, UserCredentials};
use crate::utils::{get_user_from_request, jwt, password, user_storage, validation};
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use chrono::Utc;
use log::{error, info};
use serde_json::json;
use uuid::Uuid;

// Register a new user
#[post("/auth/register")]
async fn register(body: web::Json<RegisterRequest>) -> Result<HttpResponse, ServiceError> {
    info!("📝 Register request for email: {}", body.email);

    if body.name.trim().len() < 4 {
        return Err(ServiceError::BadRequest(
            "Name must be at least 4 characters long".to_string(),
        ));
    }

    if !validation::validate_email(&body.email) {
        return Err(ServiceError::BadRequest(
            "Please provide a valid email address".to_string(),
        ));
    }

    validation::validate_password(&body.password)?;

    // Check if the email already exists
    if user_storage::find_user_by_email(&body.email)?.is_some() {
        error!("❌ Email already registered: {}", body.email);
        return Err(ServiceError::BadRequest(
            "User with this email already exists".to_string(),
        ));
    }

    // Create a new user; everyone starts as a plain member
    let user = User {
        id: Uuid::new_v4().to_string(),
        name: body.name.trim().to_string(),
        email: body.email.to_lowercase().trim().to_string(),
        password_hash: password::hash_password(&body.password)?,
        role: GlobalRole::Member,
        created_at: Utc::now(),
    };

    user_storage::save_user(&user)?;

    info!("✅ User registered successfully: {}", user.id);

    Ok(HttpResponse::Created().json(json!({
        "message": "User registered successfully",
        "user": {
            "id": user.id,
            "name": user.name,
            "email": user.email
        }
    })))
}

// Login and get JWT token
#[post("/auth/login")]
async fn login(credentials: web::Json<UserCredentials>) -> Result<HttpResponse, ServiceError> {
    info!("🔑 Login request for email: {}", credentials.email);

    // Find the user by email
    let user = match user_storage::find_user_by_email(&credentials.email)? {
        Some(user) => user,
        None => {
            error!("❌ User not found: {}", credentials.email);
            return Err(ServiceError::Unauthorized);
        }
    };

    // Verify password
    if !password::verify_password(&credentials.password, &user.password_hash)? {
        error!("❌ Invalid password for user: {}", credentials.email);
        return Err(ServiceError::Unauthorized);
    }

    // Generate JWT token
    let token = jwt::generate_token(&user)?;

    info!("✅ User logged in successfully: {}", user.id);

    // Return token in headers as well as response body
    let response = LoginResponse {
        token: token.clone(),
        user_id: user.id,
        email: user.email,
    };

    Ok(HttpResponse::Ok()
        .append_header(("Authorization", format!("Bearer {}", token)))
        .json(response))
}

// Get current user info (requires authentication)
#[get("/auth/me")]
async fn me(req: HttpRequest) -> Result<HttpResponse, ServiceError> {
    let user = get_user_from_request(&req)?;

    info!("✅ Found user: {}", user.id);

    Ok(HttpResponse::Ok().json(json!({
        "user_id": user.id,
        "name": user.name,
        "email": user.email,
        "role": user.role,
        "created_at": user.created_at
    })))
}

// Register all auth routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register)
        .service(login)
        .service(me);
}
