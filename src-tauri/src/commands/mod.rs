pub mod brainstorm;
pub mod chat;
pub mod config;
pub mod export;
pub mod health;
pub mod keychain;
pub mod sessions;
