//! Conversion of raw billing events into normalized tax transactions.
//!
//! Mapping is pure and total over the fetched data: every invoice and refund
//! either yields a transaction, a skip with its reason, or a mapping error.
//! Nothing here talks to the network.

use crate::stripe::{Invoice, Refund};
use crate::sync::address::resolve_destination;
use crate::sync::types::{MapError, MappedEvent, SkipReason, TaxTransaction};

use chrono::DateTime;
use rust_decimal::Decimal;

/// Convert a minor-unit amount into major currency units.
///
/// Exact by construction: the minor amount becomes a decimal with two
/// fractional digits, never a float.
fn major_units(minor: i64) -> Decimal {
	Decimal::new(minor, 2)
}

/// Format an epoch-seconds timestamp as `YYYY-MM-DDTHH:MM:SS`.
///
/// The offset suffix is omitted; the tax service reads the value as UTC.
pub fn format_transaction_date(epoch_seconds: i64) -> Result<String, MapError> {
	let timestamp = DateTime::from_timestamp(epoch_seconds, 0)
		.ok_or(MapError::TimestampOutOfRange(epoch_seconds))?;
	Ok(timestamp.format("%Y-%m-%dT%H:%M:%S").to_string())
}

/// Map an invoice to an order transaction, or report why it is skipped.
///
/// Only invoices that were paid and carry a non-zero recorded tax are
/// eligible; everything about the transaction comes from the invoice itself.
pub fn map_invoice(invoice: &Invoice) -> Result<MappedEvent, MapError> {
	if !invoice.paid {
		return Ok(MappedEvent::Skipped(SkipReason::NotPaid));
	}

	let tax = match invoice.tax {
		Some(tax) if tax != 0 => tax,
		_ => return Ok(MappedEvent::Skipped(SkipReason::NoTaxRecorded)),
	};

	Ok(MappedEvent::Eligible(TaxTransaction {
		transaction_id: invoice.id.clone(),
		transaction_reference_id: None,
		transaction_date: format_transaction_date(invoice.created)?,
		destination: resolve_destination(invoice),
		amount: major_units(invoice.subtotal),
		shipping: Decimal::ZERO,
		sales_tax: major_units(tax),
	}))
}

/// Map a refund to a refund transaction, or report why it is skipped.
///
/// Amount and tax come from the invoice nested under the refunded charge, not
/// from the refund itself, so the reversal mirrors the order as it was
/// recorded. The amount is negated; the sales tax stays positive.
pub fn map_refund(refund: &Refund) -> Result<MappedEvent, MapError> {
	if !refund.status.is_succeeded() {
		return Ok(MappedEvent::Skipped(SkipReason::RefundNotSucceeded));
	}

	let invoice = match refund.charge.invoice.as_deref() {
		Some(invoice) => invoice,
		None => return Ok(MappedEvent::Skipped(SkipReason::NoInvoiceOnCharge)),
	};

	let tax = invoice.tax.ok_or_else(|| MapError::MissingTax {
		refund: refund.id.clone(),
		invoice: invoice.id.clone(),
	})?;

	Ok(MappedEvent::Eligible(TaxTransaction {
		transaction_id: refund.id.clone(),
		transaction_reference_id: Some(refund.charge.id.clone()),
		transaction_date: format_transaction_date(refund.created)?,
		destination: resolve_destination(invoice),
		amount: -major_units(invoice.subtotal),
		shipping: Decimal::ZERO,
		sales_tax: major_units(tax),
	}))
}
