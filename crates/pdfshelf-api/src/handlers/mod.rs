pub mod auth;
pub mod delete;
pub mod files;
pub mod health;
pub mod home;
pub mod static_assets;
pub mod upload;
