//! RustF Helpers - identifier transforms for code generation templates
//!
//! This crate provides the helper functions that code generation templates
//! use to reshape identifiers while emitting source code: case conversion,
//! prefix/suffix stripping, pattern matching and literal replacement.
//!
//! # Features
//!
//! - **Helper registry** built once and shared read-only between renders
//! - **Null-safe helpers**: a missing argument yields a documented fallback
//!   instead of aborting the render
//! - **Fail-fast authoring errors**: malformed patterns and non-string
//!   arguments stop generation with the helper name and offending input
//! - **Handlebars host** with the registry installed, partials and
//!   output-path templates
//!
//! # Example
//!
//! ```rust
//! use rustf_helpers::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new();
//! let code = engine
//!     .render(
//!         "pub struct {{pascalCase table}};",
//!         &json!({ "table": "user_account" }),
//!     )
//!     .unwrap();
//! assert_eq!(code, "pub struct UserAccount;");
//! ```

pub mod builtin;
pub mod config;
pub mod engine;
pub mod error;
pub mod guard;
pub mod helpers;
pub mod template;
pub mod transform;

pub use builtin::{BUILTIN_NAMES, LEGACY_PREFIX};
pub use config::{HelperConfig, TypePolicy, DEFAULT_OUTPUT_MARKER};
pub use engine::{RenderedFile, TemplateEngine};
pub use error::{Error, Result};
pub use guard::{any_missing, is_missing};
pub use helpers::{Helper, HelperRegistry, HelperResult};
pub use template::Template;
