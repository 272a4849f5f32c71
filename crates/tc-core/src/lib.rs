//! # tc-core
//!
//! Core types, input classification, and error types for TrustCheck.
//!
//! This crate provides the foundational types shared across all TrustCheck
//! crates:
//! - The search-input classifier and its closed query-kind type
//! - Report target/reason types and the submission payload builder
//! - Read models for the verification backend's wire shapes
//! - Admin entity models and the fixed PATCH allow-lists
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod query;
