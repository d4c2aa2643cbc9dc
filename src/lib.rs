pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod slug;
pub mod web;

pub use slug::slugify;
