//! GearGuard Maintenance Tracking System
//!
//! A Rust implementation of the GearGuard maintenance server, providing a
//! REST JSON API for managing equipment inventory, maintenance requests,
//! and dashboard statistics with role-based access control.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod rbac;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
