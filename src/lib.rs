pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod view;
pub mod web;

pub use config::Config;
pub use db::{init_db, Repository};
pub use domain::{Item, ItemDraft};
pub use error::AppError;
