use crate::stripe::{Address, Invoice};

use serde::Serialize;

/// Destination address of a transaction, in the field names the tax service
/// expects so it can be flattened straight into a payload.
///
/// Fields the source address never carried stay `None` and are left off the
/// wire; the tax service falls back to rate lookup by whatever is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Destination {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub to_country: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub to_zip: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub to_state: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub to_city: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub to_street: Option<String>,
}

impl From<&Address> for Destination {
	fn from(address: &Address) -> Self {
		Self {
			to_country: address.country.clone(),
			to_zip: address.postal_code.clone(),
			to_state: address.state.clone(),
			to_city: address.city.clone(),
			to_street: address.line1.clone(),
		}
	}
}

/// Resolve where an invoice was delivered.
///
/// Sources are tried in order: the customer's shipping address, the
/// customer's own address, then the billing details of the charge that paid
/// the invoice. A tier counts only if it actually holds an address object;
/// a shipping block with no address falls through to the next tier. All five
/// fields always come from the same tier. When no tier holds an address the
/// destination is empty rather than an error.
pub fn resolve_destination(invoice: &Invoice) -> Destination {
	if let Some(address) = invoice
		.customer_shipping
		.as_ref()
		.and_then(|shipping| shipping.address.as_ref())
	{
		return Destination::from(address);
	}

	if let Some(address) = invoice.customer_address.as_ref() {
		return Destination::from(address);
	}

	if let Some(address) = invoice
		.charge
		.as_ref()
		.and_then(|charge| charge.billing_details.as_ref())
		.and_then(|details| details.address.as_ref())
	{
		return Destination::from(address);
	}

	Destination::default()
}
