//! Stable DTOs and IDs used across the approvalguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted audit report
//! - stable string IDs for syntax issues, danger categories and risk reasons
//! - canonical display paths for audited settings files

#![forbid(unsafe_code)]

pub mod ids;
pub mod path;
pub mod report;

pub use path::SourcePath;
pub use report::{
    AuditData, AuditReport, Finding, HealthStatus, PrefixHealth, SCHEMA_REPORT_V1, ToolMeta,
};
