//! Domain layer containing the audit model and its derived views.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (score, IDs, timestamps, errors)
//! - `audit` - Pure pipeline: normalize, aggregate, classify, project
//! - `dashboard` - Presentation views built from an audit analysis

pub mod audit;
pub mod dashboard;
pub mod foundation;
