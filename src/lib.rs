// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # cadastro — Brazilian registration data and permission editing
//!
//! Pure, total helpers behind registration forms and the permission
//! editor of a business-management back office.
//!
//! - **Validate** CPF and CNPJ numbers with their modulo-11 check digits
//! - **Format** CPF, CNPJ, phone and CEP values for display, including
//!   partial input while the user is still typing
//! - **Edit** permission selections: toggle one id, toggle a whole
//!   category, or apply a template
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::{format_phone, is_valid_cnpj, is_valid_cpf, Document, DocumentKind};
//!
//! assert!(is_valid_cpf("123.456.789-09"));
//! assert!(!is_valid_cpf("111.111.111-11"));
//! assert!(is_valid_cnpj("11222333000181"));
//!
//! let doc = Document::parse("11222333000181", DocumentKind::Cnpj)?;
//! assert_eq!(doc.to_string(), "11.222.333/0001-81");
//!
//! assert_eq!(format_phone("11999999999"), "(11) 99999-9999");
//! # Ok::<(), cadastro::DocumentError>(())
//! ```
//!
//! ```rust
//! use cadastro::{apply_template, toggle_category, toggle_one, PermissionSet, Template};
//!
//! let selected = PermissionSet::new();
//! let selected = toggle_one(&selected, "eventos.view");
//! let selected = toggle_category(&selected, &["eventos.view", "eventos.edit"]);
//! assert_eq!(selected.len(), 2);
//!
//! let catalog = ["eventos.view", "eventos.edit", "clientes.view"];
//! let admin = apply_template(&selected, &Template::AllPermissions, &catalog);
//! assert_eq!(admin.len(), 3);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! free text ──► util::only_digits ──┬──► document ──► bool / DocumentError
//!                                   └──► format   ──► String
//!
//! cadastro.yaml ──► config ──► PermissionCatalog + PermissionTemplate
//!
//! (selected, SelectionEdit) ──► permission::reduce ──► selected'
//! ```
//!
//! Nothing here performs I/O except configuration loading; the
//! validators, masks and reducer never fail and never panic.

pub mod config;
pub mod config_validate;
pub mod document;
pub mod error;
pub mod format;
pub mod permission;
pub mod util;

// Re-exports
pub use config::{CadastroConfig, LoggingConfig, PermissionsConfig, CONFIG_FILE};
pub use document::{
    check_digits, is_valid_cnpj, is_valid_cpf, validate_document, Document, DocumentError,
    DocumentKind, DocumentReport,
};
pub use error::{Error, Result};
pub use format::{
    apply_mask, format_cep, format_document, format_document_auto, format_phone, format_value,
    FormatKind,
};
pub use permission::{
    apply_template, apply_template_ids, category_coverage, reduce, reduce_all, toggle_category,
    toggle_one, CategoryCoverage, Coverage, Permission, PermissionCatalog, PermissionSet,
    PermissionTemplate, SelectionEdit, Template,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
