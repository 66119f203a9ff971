use crate::stripe::StripeError;
use crate::sync::address::Destination;
use crate::taxjar::TaxJarError;

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Direction of a tax transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
	Order,
	Refund,
}

impl TransactionKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			TransactionKind::Order => "order",
			TransactionKind::Refund => "refund",
		}
	}
}

impl fmt::Display for TransactionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A normalized transaction ready for submission to the tax service.
///
/// Serializes to the wire field names the transactions API expects; the
/// seller origin address is flattened in by the submission layer.
#[derive(Debug, Clone, Serialize)]
pub struct TaxTransaction {
	/// Identifier of the originating billing event.
	pub transaction_id: String,
	/// For refunds, the charge of the order being reversed.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub transaction_reference_id: Option<String>,
	/// Second-precision UTC timestamp, `YYYY-MM-DDTHH:MM:SS`.
	pub transaction_date: String,
	/// Where the sale was delivered.
	#[serde(flatten)]
	pub destination: Destination,
	/// Amount in major currency units, negative when money moved back to the
	/// customer.
	pub amount: Decimal,
	/// Shipping cost in major currency units.
	pub shipping: Decimal,
	/// Sales tax in major currency units, always positive.
	pub sales_tax: Decimal,
}

/// Outcome of mapping one raw billing event
#[derive(Debug, Clone)]
pub enum MappedEvent {
	/// The event produced a transaction to submit.
	Eligible(TaxTransaction),
	/// The event is not reconcilable; no transaction is submitted for it.
	Skipped(SkipReason),
}

/// Why a billing event was not converted into a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
	/// The invoice was never paid.
	NotPaid,
	/// The invoice carries no recorded tax to reconcile.
	NoTaxRecorded,
	/// The refund did not complete.
	RefundNotSucceeded,
	/// The refunded charge settled no invoice, so there is no order to
	/// reverse.
	NoInvoiceOnCharge,
}

impl fmt::Display for SkipReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let reason = match self {
			SkipReason::NotPaid => "invoice is not paid",
			SkipReason::NoTaxRecorded => "invoice has no recorded tax",
			SkipReason::RefundNotSucceeded => "refund did not succeed",
			SkipReason::NoInvoiceOnCharge => "refunded charge has no invoice",
		};
		f.write_str(reason)
	}
}

/// Error types for event mapping
#[derive(Debug, thiserror::Error)]
pub enum MapError {
	#[error("timestamp {0} is outside the representable range")]
	TimestampOutOfRange(i64),

	#[error("invoice {invoice} behind refund {refund} has no recorded tax")]
	MissingTax { refund: String, invoice: String },
}

/// Top-level error for a synchronization run
#[allow(clippy::enum_variant_names)]
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
	#[error("billing API error: {0}")]
	StripeError(#[from] StripeError),

	#[error("tax service error: {0}")]
	TaxJarError(#[from] TaxJarError),

	#[error("mapping error: {0}")]
	MapError(#[from] MapError),
}
