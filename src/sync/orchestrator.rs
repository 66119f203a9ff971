//! Synchronization driver and integration point for all sync components.
//!
//! This module defines the `SyncOrchestrator`, which coordinates one full
//! synchronization run against the two external services: billing events are
//! fetched, mapped, and the eligible ones submitted to the tax service.
//!
//! The orchestrator is responsible for:
//! - Running the orders pass and then the refunds pass, in that order
//! - Logging each skipped event with its reason
//! - Keeping a pass going when a submission fails in a contained way
//! - Producing a report of what happened to every fetched event
//!
//! Fatal errors, anything other than a contained submission failure, abort
//! the run immediately with the pass left incomplete.

use crate::stripe::{ListItem, StripeClient};
use crate::sync::mapper::{map_invoice, map_refund};
use crate::sync::report::{RunReport, SyncReport};
use crate::sync::submitter::{SubmitOutcome, TaxSubmitter};
use crate::sync::types::{MapError, MappedEvent, SyncError, TransactionKind};

use tracing::info;

/// Drives one full synchronization run
pub struct SyncOrchestrator {
    stripe: StripeClient,
    submitter: TaxSubmitter,
}

impl SyncOrchestrator {
    pub fn new(stripe: StripeClient, submitter: TaxSubmitter) -> Self {
        Self { stripe, submitter }
    }

    /// Run the orders pass, then the refunds pass.
    ///
    /// Each pass fetches its full event list before submitting anything, so a
    /// listing failure aborts before the tax service sees a single call.
    pub async fn run(&self) -> Result<RunReport, SyncError> {
        let orders = self.sync_orders().await?;
        info!("{}", orders.summary());

        let refunds = self.sync_refunds().await?;
        info!("{}", refunds.summary());

        Ok(RunReport { orders, refunds })
    }

    /// Fetch every invoice and submit an order transaction for each eligible
    /// one.
    pub async fn sync_orders(&self) -> Result<SyncReport, SyncError> {
        info!("Retrieving invoices");
        let invoices = self.stripe.list_invoices().await?;
        info!("Retrieved {} invoices", invoices.len());

        self.process_events("orders", "invoice", TransactionKind::Order, &invoices, map_invoice)
            .await
    }

    /// Fetch every refund and submit a refund transaction for each eligible
    /// one.
    pub async fn sync_refunds(&self) -> Result<SyncReport, SyncError> {
        info!("Retrieving refunds");
        let refunds = self.stripe.list_refunds().await?;
        info!("Retrieved {} refunds", refunds.len());

        self.process_events("refunds", "refund", TransactionKind::Refund, &refunds, map_refund)
            .await
    }

    /// Drive one pass over a fetched event list: map every event, submit the
    /// eligible ones as the given kind, and account for each outcome.
    ///
    /// `noun` names the event in log lines ("invoice", "refund").
    async fn process_events<T, F>(
        &self,
        pass: &'static str,
        noun: &str,
        kind: TransactionKind,
        events: &[T],
        map: F,
    ) -> Result<SyncReport, SyncError>
    where
        T: ListItem,
        F: Fn(&T) -> Result<MappedEvent, MapError>,
    {
        let mut report = SyncReport::new(pass);
        let total = events.len();

        for (position, event) in events.iter().enumerate() {
            let id = event.cursor_id();
            match map(event)? {
                MappedEvent::Skipped(reason) => {
                    info!("Skipping {} {} [{}/{}]: {}", noun, id, position + 1, total, reason);
                    report.record_skipped();
                }
                MappedEvent::Eligible(transaction) => {
                    info!("Processing {} {} [{}/{}]", noun, id, position + 1, total);
                    match self.submitter.submit(&transaction, kind).await? {
                        SubmitOutcome::Created(created) => {
                            info!(
                                "Recorded {} {} (amount {}, sales tax {})",
                                kind, created.transaction_id, created.amount, created.sales_tax
                            );
                            report.record_submitted();
                        }
                        SubmitOutcome::Failed(_) => {
                            report.record_failed();
                        }
                    }
                }
            }
        }

        Ok(report)
    }
}
