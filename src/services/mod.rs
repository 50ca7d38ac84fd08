// taskboard-service/src/services/mod.rs
pub mod authorization;
pub mod cascade;
pub mod membership;
pub mod relationships;
