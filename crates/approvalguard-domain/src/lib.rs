//! Pure rule evaluation (no IO).
//!
//! Input: settings sources whose auto-approve rule maps were read elsewhere.
//! Output: findings + per-prefix health + summary data.

#![forbid(unsafe_code)]

pub mod classify;
pub mod health;
pub mod model;
pub mod policy;
pub mod report;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{aggregate, evaluate, ingest};
