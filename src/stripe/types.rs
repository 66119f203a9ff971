//! Types for the billing API resources the sync consumes

use serde::Deserialize;

/// Status of a refund as reported by the billing API
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    /// Refund was canceled before completing
    Canceled,
    /// Refund could not be processed
    Failed,
    /// Refund is still being processed
    Pending,
    /// Refund is blocked on customer action
    RequiresAction,
    /// Funds were returned to the customer
    Succeeded,
}

impl RefundStatus {
    /// Check if the refund actually returned funds to the customer
    pub fn is_succeeded(&self) -> bool {
        matches!(self, RefundStatus::Succeeded)
    }
}

/// A postal address as the billing API represents it.
///
/// Every field is optional; the API omits whatever the customer never entered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    /// City, district, suburb, town, or village.
    pub city: Option<String>,
    /// Two-letter ISO country code.
    pub country: Option<String>,
    /// First line of the street address.
    pub line1: Option<String>,
    /// ZIP or postal code.
    pub postal_code: Option<String>,
    /// State, county, province, or region.
    pub state: Option<String>,
}

/// Shipping information attached to an invoice's customer
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerShipping {
    /// The address goods were shipped to, when one was recorded.
    pub address: Option<Address>,
}

/// Card-holder details recorded on a charge
#[derive(Debug, Clone, Deserialize)]
pub struct BillingDetails {
    /// The billing address of the payment method, when one was recorded.
    pub address: Option<Address>,
}

/// An invoice as returned by the list endpoint with its charge expanded.
///
/// Amounts are integers in the smallest currency unit; conversion to major
/// units happens during mapping, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct Invoice {
    /// The invoice identifier (`in_...`).
    pub id: String,
    /// Creation time in epoch seconds.
    pub created: i64,
    /// Whether payment was captured for this invoice.
    pub paid: bool,
    /// Pre-tax total in the smallest currency unit.
    pub subtotal: i64,
    /// Tax collected for this invoice in the smallest currency unit, if any.
    pub tax: Option<i64>,
    /// Shipping details of the invoice's customer.
    pub customer_shipping: Option<CustomerShipping>,
    /// The customer's own address.
    pub customer_address: Option<Address>,
    /// The charge that paid this invoice; an object only when expanded.
    pub charge: Option<Box<Charge>>,
}

/// A charge as returned nested under invoices and refunds.
///
/// `Charge` and [`Invoice`] reference each other, matching the expanded object
/// graph the refund listing returns; the boxes break the cycle.
#[derive(Debug, Clone, Deserialize)]
pub struct Charge {
    /// The charge identifier (`ch_...`).
    pub id: String,
    /// Card-holder details captured with the payment.
    pub billing_details: Option<BillingDetails>,
    /// The invoice this charge settled; an object only when expanded.
    pub invoice: Option<Box<Invoice>>,
}

/// A refund as returned by the list endpoint with its charge graph expanded
#[derive(Debug, Clone, Deserialize)]
pub struct Refund {
    /// The refund identifier (`re_...`).
    pub id: String,
    /// Creation time in epoch seconds.
    pub created: i64,
    /// Processing status of the refund.
    pub status: RefundStatus,
    /// The charge the money was returned against.
    pub charge: Charge,
}

/// One page of a list response
#[derive(Debug, Clone, Deserialize)]
pub struct ListPage<T> {
    /// The items on this page, oldest cursor position first.
    pub data: Vec<T>,
    /// Whether another page exists past the last item.
    pub has_more: bool,
}

/// Cursor extraction for items of a paginated list
pub trait ListItem {
    /// Identifier used as the `starting_after` cursor for the next page
    fn cursor_id(&self) -> &str;
}

impl ListItem for Invoice {
    fn cursor_id(&self) -> &str {
        &self.id
    }
}

impl ListItem for Refund {
    fn cursor_id(&self) -> &str {
        &self.id
    }
}

/// Error types for billing API operations
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("billing API error ({status}): {body}")]
    ApiError { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("list page carried no items but claimed more were available")]
    EmptyPage,
}
