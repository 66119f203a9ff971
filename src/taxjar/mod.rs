//! Tax service integration module
//!
//! This module provides the client and types for the tax service's
//! transactions API. Orders and refunds are recorded through it, and a tax
//! computation endpoint is available for prospective orders. Transient
//! failure handling lives with the submission layer, not here; the client
//! reports every failure as an error.

/// REST client for the transactions endpoints
mod client;
/// Type definitions for tax service payloads and responses
mod types;

pub use client::TaxJarClient;
pub use types::*;
