//! Core library components.
//!
//! This module contains the publish and teardown logic, the wrangler and
//! Cloudflare API plumbing it drives, and comment formatting.

pub mod api;
pub mod comment;
pub mod config;
pub mod constants;
pub mod exec;
pub mod manifest;
pub mod namespace;
pub mod publish;
pub mod secrets;
pub mod teardown;
pub mod validation;
pub mod wrangler;
