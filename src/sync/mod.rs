//! Transaction Synchronization Module
//!
//! This module provides all the core logic for reconciling billing events
//! with the tax service. It is composed of several submodules, each
//! responsible for a specific aspect of the sync process:
//!
//! - `orchestrator`: The main entry point and coordinator for a sync run. It
//!   drives the orders pass and the refunds pass.
//! - `address`: Resolves the destination address of an invoice from its
//!   ordered fallback sources.
//! - `mapper`: Converts raw invoices and refunds into normalized tax
//!   transactions, deciding eligibility along the way.
//! - `submitter`: Submits transactions to the tax service and contains
//!   transient failures so a pass can keep going.
//! - `report`: Counts what happened to every fetched event and renders pass
//!   summaries.
//! - `types`: Shared data types and errors for the sync pipeline.
//!
//! The orchestrator coordinates the run by fetching events through the
//! billing client, mapping each one, and submitting the eligible results.
//! Every fetched event is accounted for in the resulting report.

/// Destination address resolution for transactions
pub mod address;
/// Conversion of billing events into normalized transactions
pub mod mapper;
/// Main coordinator for the sync run
pub mod orchestrator;
/// Per-pass counters and summaries
pub mod report;
/// Submission of transactions to the tax service
pub mod submitter;
/// Shared data types and errors for the sync pipeline
pub mod types;

pub use orchestrator::*;
pub use submitter::TaxSubmitter;
pub use types::*;
