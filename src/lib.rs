//! Competitive Audit - Comparison matrix and insight engine
//!
//! This crate turns flat company × tactic audit rows into a pivoted
//! comparison matrix, per-company and per-theme averages, and insight lists
//! (uncontested tactics, battlegrounds, mixed results), then projects
//! filtered and sorted views for a dashboard.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
