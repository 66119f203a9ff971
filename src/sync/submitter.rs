//!
//! Submission of normalized transactions to the tax service.
//!
//! The submitter owns the seller origin address and the containment rule for
//! transient failures: a connection failure or a structured rejection is
//! logged and reported as a failed outcome so the batch can keep going, while
//! anything else propagates and aborts the run.

use crate::config::FromAddress;
use crate::sync::types::{TaxTransaction, TransactionKind};
use crate::taxjar::{CreatedTransaction, TaxJarClient, TaxJarError};

use serde::Serialize;
use tracing::warn;

/// Result of one submission attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The tax service recorded the transaction.
    Created(CreatedTransaction),
    /// The call failed in a contained way; nothing was recorded.
    Failed(SubmitFailure),
}

/// A contained submission failure
#[derive(Debug)]
pub enum SubmitFailure {
    /// The service was unreachable or the call did not complete.
    Connection(String),
    /// The service rejected the payload.
    Rejected { status: u16, body: String },
}

/// Wire payload for the create-order and create-refund operations: the
/// normalized transaction plus the seller origin address, flattened into one
/// object.
#[derive(Debug, Serialize)]
struct TransactionPayload<'a> {
    #[serde(flatten)]
    transaction: &'a TaxTransaction,
    #[serde(flatten)]
    from_address: &'a FromAddress,
}

/// Submits order and refund transactions to the tax service
#[derive(Clone)]
pub struct TaxSubmitter {
    client: TaxJarClient,
    from_address: FromAddress,
}

impl TaxSubmitter {
    pub fn new(client: TaxJarClient, from_address: FromAddress) -> Self {
        Self {
            client,
            from_address,
        }
    }

    /// Submit one transaction as the given kind.
    ///
    /// Connection failures and rejections come back as
    /// `SubmitOutcome::Failed` after a warning is logged; any other error
    /// propagates to the caller.
    pub async fn submit(
        &self,
        transaction: &TaxTransaction,
        kind: TransactionKind,
    ) -> Result<SubmitOutcome, TaxJarError> {
        let payload = TransactionPayload {
            transaction,
            from_address: &self.from_address,
        };

        let result = match kind {
            TransactionKind::Order => self.client.create_order(&payload).await,
            TransactionKind::Refund => self.client.create_refund(&payload).await,
        };

        match result {
            Ok(created) => Ok(SubmitOutcome::Created(created)),
            Err(TaxJarError::ConnectionError(e)) => {
                warn!(
                    "Tax service unreachable for {} {}: {}",
                    kind, transaction.transaction_id, e
                );
                Ok(SubmitOutcome::Failed(SubmitFailure::Connection(
                    e.to_string(),
                )))
            }
            Err(TaxJarError::Rejected { status, body }) => {
                warn!(
                    "Tax service rejected {} {} ({}): {}",
                    kind, transaction.transaction_id, status, body
                );
                Ok(SubmitOutcome::Failed(SubmitFailure::Rejected {
                    status,
                    body,
                }))
            }
            Err(e) => Err(e),
        }
    }
}
