//! Billing API integration module
//!
//! This module provides the client and types for reading billing events from
//! the payments provider's REST API. The sync treats the provider as a
//! read-only event source: invoices and refunds are listed in full, with the
//! nested charge graph expanded, and interpreted elsewhere.

/// REST client for the paginated list endpoints
mod client;
/// Type definitions for billing API resources
mod types;

pub use client::StripeClient;
pub use types::*;
