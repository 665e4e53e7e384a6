//! ResumeForge core: line-record codec, adaptive one-page fit planner, and template
//! visual resolver. Every operation is a pure function over caller-owned data.

pub mod cli;
pub mod config;
pub mod errors;
pub mod layout;
pub mod models;
pub mod records;
pub mod templates;

pub use errors::AppError;
