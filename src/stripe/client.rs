//!
//! REST client for the billing API list endpoints.
//!
//! This module provides an async client for reading invoices and refunds from
//! the billing API. Both listings walk the cursor until the final page and
//! request expansion of the nested charge graph up front, so downstream
//! mapping never needs follow-up calls. All methods are async and designed
//! for use with Tokio.

use super::types::*;
use crate::config::StripeConfig;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Expansion requested with each invoice page, pulling the paying charge
/// into the invoice object
const INVOICE_EXPAND: &str = "data.charge";

/// Expansion requested with each refund page, pulling the refunded charge,
/// its invoice, and that invoice's own charge in one call
const REFUND_EXPAND: &str = "data.charge.invoice.charge";

/// Billing API client
#[derive(Clone)]
pub struct StripeClient {
	/// The underlying HTTP client for REST calls.
	http_client: Client,
	/// API key and base URL for the billing API.
	config: StripeConfig,
	/// Page size for list calls, 1 to 100.
	request_limit: u32,
}

impl StripeClient {
	/// Create a new billing API client.
	///
	/// # Arguments
	/// * `config` - The API key and base URL to use.
	/// * `request_limit` - Page size for list calls.
	///
	/// # Returns
	/// A new `StripeClient` instance.
	pub fn new(config: StripeConfig, request_limit: u32) -> Self {
		let http_client = Client::builder()
			.timeout(Duration::from_secs(30))
			.build()
			.expect("Failed to create HTTP client");

		Self {
			http_client,
			config,
			request_limit,
		}
	}

	/// List every invoice, paid and unpaid alike.
	///
	/// Eligibility is decided during mapping, not here; the listing is the raw
	/// event feed.
	///
	/// # Returns
	/// All invoices in cursor order, or a `StripeError` if any page fails.
	pub async fn list_invoices(&self) -> Result<Vec<Invoice>, StripeError> {
		self.list_all("/v1/invoices", INVOICE_EXPAND).await
	}

	/// List every refund with its full charge graph.
	///
	/// # Returns
	/// All refunds in cursor order, or a `StripeError` if any page fails.
	pub async fn list_refunds(&self) -> Result<Vec<Refund>, StripeError> {
		self.list_all("/v1/refunds", REFUND_EXPAND).await
	}

	/// Gather every item of a list endpoint by walking the cursor.
	///
	/// The cursor for each page is the id of the last item gathered so far. A
	/// page with no items that still claims `has_more` would loop forever, so
	/// it is reported as `StripeError::EmptyPage` instead.
	async fn list_all<T>(&self, path: &str, expand: &str) -> Result<Vec<T>, StripeError>
	where
		T: DeserializeOwned + ListItem,
	{
		let mut items: Vec<T> = Vec::new();
		let mut starting_after: Option<String> = None;

		loop {
			let page: ListPage<T> = self
				.fetch_page(path, expand, starting_after.as_deref())
				.await?;
			let has_more = page.has_more;

			if page.data.is_empty() && has_more {
				return Err(StripeError::EmptyPage);
			}

			items.extend(page.data);
			debug!("Fetched {} items from {} so far", items.len(), path);

			if !has_more {
				break;
			}

			starting_after = items.last().map(|item| item.cursor_id().to_string());
		}

		Ok(items)
	}

	/// Fetch a single page of a list endpoint.
	async fn fetch_page<T: DeserializeOwned>(
		&self,
		path: &str,
		expand: &str,
		starting_after: Option<&str>,
	) -> Result<ListPage<T>, StripeError> {
		let url = format!("{}{}", self.config.api_base_url, path);

		let mut query: Vec<(&str, String)> = vec![
			("limit", self.request_limit.to_string()),
			("expand[]", expand.to_string()),
		];
		if let Some(cursor) = starting_after {
			query.push(("starting_after", cursor.to_string()));
		}

		debug!("Fetching {} (starting_after: {:?})", path, starting_after);

		let response = self
			.http_client
			.get(&url)
			.bearer_auth(self.config.api_key.expose_secret())
			.query(&query)
			.send()
			.await?;

		let status = response.status();
		let body = response.text().await?;

		if !status.is_success() {
			return Err(StripeError::ApiError {
				status: status.as_u16(),
				body,
			});
		}

		Ok(serde_json::from_str(&body)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use mockito::Matcher;
	use secrecy::Secret;

	fn client(base_url: String, limit: u32) -> StripeClient {
		StripeClient::new(
			StripeConfig {
				api_key: Secret::new("sk_test_123".to_string()),
				api_base_url: base_url,
			},
			limit,
		)
	}

	#[tokio::test]
	async fn list_invoices_walks_the_cursor_until_the_last_page() {
		let mut server = mockito::Server::new_async().await;

		let first_page = server
			.mock("GET", "/v1/invoices")
			.match_query(Matcher::AllOf(vec![
				Matcher::UrlEncoded("limit".into(), "2".into()),
				Matcher::UrlEncoded("expand[]".into(), "data.charge".into()),
			]))
			.match_header("authorization", "Bearer sk_test_123")
			.with_status(200)
			.with_body(
				r#"{
					"data": [
						{"id": "in_1", "created": 1700000000, "paid": true, "subtotal": 10000, "tax": 500},
						{"id": "in_2", "created": 1700000100, "paid": false, "subtotal": 2500, "tax": null}
					],
					"has_more": true
				}"#,
			)
			.create_async()
			.await;

		let second_page = server
			.mock("GET", "/v1/invoices")
			.match_query(Matcher::AllOf(vec![
				Matcher::UrlEncoded("limit".into(), "2".into()),
				Matcher::UrlEncoded("expand[]".into(), "data.charge".into()),
				Matcher::UrlEncoded("starting_after".into(), "in_2".into()),
			]))
			.with_status(200)
			.with_body(
				r#"{
					"data": [
						{"id": "in_3", "created": 1700000200, "paid": true, "subtotal": 7000, "tax": 630}
					],
					"has_more": false
				}"#,
			)
			.create_async()
			.await;

		let invoices = client(server.url(), 2).list_invoices().await.unwrap();

		let ids: Vec<&str> = invoices.iter().map(|invoice| invoice.id.as_str()).collect();
		assert_eq!(ids, vec!["in_1", "in_2", "in_3"]);
		assert_eq!(invoices[0].tax, Some(500));
		assert_eq!(invoices[1].tax, None);
		first_page.assert_async().await;
		second_page.assert_async().await;
	}

	#[tokio::test]
	async fn list_refunds_decodes_the_expanded_charge_graph() {
		let mut server = mockito::Server::new_async().await;

		server
			.mock("GET", "/v1/refunds")
			.match_query(Matcher::AllOf(vec![
				Matcher::UrlEncoded("limit".into(), "100".into()),
				Matcher::UrlEncoded("expand[]".into(), "data.charge.invoice.charge".into()),
			]))
			.with_status(200)
			.with_body(
				r#"{
					"data": [
						{
							"id": "re_1",
							"created": 1700000300,
							"status": "succeeded",
							"charge": {
								"id": "ch_1",
								"billing_details": null,
								"invoice": {
									"id": "in_1",
									"created": 1700000000,
									"paid": true,
									"subtotal": 10000,
									"tax": 500,
									"charge": {
										"id": "ch_1",
										"billing_details": {
											"address": {"postal_code": "10001", "country": "US"}
										}
									}
								}
							}
						}
					],
					"has_more": false
				}"#,
			)
			.create_async()
			.await;

		let refunds = client(server.url(), 100).list_refunds().await.unwrap();

		assert_eq!(refunds.len(), 1);
		let invoice = refunds[0].charge.invoice.as_deref().unwrap();
		assert_eq!(invoice.subtotal, 10000);
		assert_eq!(invoice.tax, Some(500));
		let billing = invoice.charge.as_deref().unwrap().billing_details.as_ref().unwrap();
		assert_eq!(billing.address.as_ref().unwrap().postal_code.as_deref(), Some("10001"));
	}

	#[tokio::test]
	async fn empty_page_claiming_more_is_an_error() {
		let mut server = mockito::Server::new_async().await;

		server
			.mock("GET", "/v1/invoices")
			.match_query(Matcher::Any)
			.with_status(200)
			.with_body(r#"{"data": [], "has_more": true}"#)
			.create_async()
			.await;

		let err = client(server.url(), 100).list_invoices().await.unwrap_err();
		assert!(matches!(err, StripeError::EmptyPage));
	}

	#[tokio::test]
	async fn api_rejection_surfaces_status_and_body() {
		let mut server = mockito::Server::new_async().await;

		server
			.mock("GET", "/v1/invoices")
			.match_query(Matcher::Any)
			.with_status(401)
			.with_body(r#"{"error": {"message": "Invalid API Key provided"}}"#)
			.create_async()
			.await;

		let err = client(server.url(), 100).list_invoices().await.unwrap_err();
		match err {
			StripeError::ApiError { status, body } => {
				assert_eq!(status, 401);
				assert!(body.contains("Invalid API Key"));
			}
			other => panic!("expected ApiError, got {:?}", other),
		}
	}
}
