//! # Ideenportal Platform
//!
//! REST client for the hosted low-code data platform that stores ideas and
//! runs the approval workflow. This crate owns the wire-level concerns:
//! configuration, bearer-token handling, and the OData-style HTTP calls.
//! The domain mapping lives in `ideenportal-ideas`.

pub mod client;
pub mod config;
pub mod error;
pub mod token;

pub use client::{PlatformClient, PlatformRecord};
pub use config::{PlatformConfig, TableSchema};
pub use error::{PlatformError, PlatformResult};
pub use token::{decode_claims, Claims, TokenInfo};
