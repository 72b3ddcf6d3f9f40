//! CLI command implementations
//!
//! This module contains all CLI command handlers, organized by category:
//! - `document`: CPF/CNPJ validation
//! - `format`: display masks
//! - `perms`: permission selection editing
//! - `config`: configuration checks and JSON schemas
//! - `util`: Shared argument helpers

pub mod config;
pub mod document;
pub mod format;
pub mod perms;
pub mod util;

// Re-export all command functions for convenient access
pub use config::{cmd_config, cmd_schema};
pub use document::cmd_validate;
pub use format::cmd_format;
pub use perms::cmd_perms;
