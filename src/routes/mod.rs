// taskboard-service/src/routes/mod.rs
pub mod auth_routes;
pub mod permission_routes;
pub mod project_routes;
pub mod task_routes;
pub mod team_routes;
