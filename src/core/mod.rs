//! Core library components.
//!
//! This module contains the reusable business logic for key management,
//! multi-recipient encryption and re-encryption. Nothing here prompts,
//! prints, or reads environment variables.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod env;
pub mod environment;
pub mod keystore;
pub mod refresh;
pub mod registry;
pub mod secrets;
pub mod slug;
pub mod types;
pub mod validation;
