//! Use case orchestration for approvalguard.
//!
//! This crate provides the application layer: it coordinates the settings, repo, domain and
//! render layers. The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod render;

pub use audit::{
    AuditInput, AuditOutput, EXIT_ERROR, EXIT_OK, EXIT_RISK, audit_exit_code, run_audit,
};
pub use render::{RenderOptions, render_audit};
