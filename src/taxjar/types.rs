//! Types for the tax service transactions API

use rust_decimal::Decimal;
use serde::Deserialize;

/// A transaction as echoed back by the tax service after creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTransaction {
    /// Identifier the transaction was recorded under.
    pub transaction_id: String,
    /// Recorded amount in major currency units.
    pub amount: Decimal,
    /// Recorded sales tax in major currency units.
    pub sales_tax: Decimal,
}

/// Envelope around a created order transaction
#[derive(Debug, Deserialize)]
pub struct OrderEnvelope {
    pub order: CreatedTransaction,
}

/// Envelope around a created refund transaction
#[derive(Debug, Deserialize)]
pub struct RefundEnvelope {
    pub refund: CreatedTransaction,
}

/// Tax computed for a prospective order
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBreakdown {
    /// Sales tax the seller should collect, in major currency units.
    pub amount_to_collect: Decimal,
}

/// Envelope around a computed tax breakdown
#[derive(Debug, Deserialize)]
pub struct TaxEnvelope {
    pub tax: TaxBreakdown,
}

/// Error types for tax service operations
#[derive(Debug, thiserror::Error)]
pub enum TaxJarError {
    /// The service could not be reached or the call did not complete.
    #[error("connection error: {0}")]
    ConnectionError(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("request rejected ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// A success response carried a body that could not be decoded.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}
