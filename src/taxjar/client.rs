//!
//! REST client for the tax service transactions API.
//!
//! This module provides an async client for recording order and refund
//! transactions with the tax service, plus the tax computation endpoint the
//! service exposes for prospective orders. Callers supply any serializable
//! payload; the wire shape of a transaction is owned by the submission layer.

use super::types::*;
use crate::config::TaxJarConfig;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Tax service API client
#[derive(Clone)]
pub struct TaxJarClient {
	/// The underlying HTTP client for REST calls.
	http_client: Client,
	/// API key and base URL for the tax service.
	config: TaxJarConfig,
}

impl TaxJarClient {
	/// Create a new tax service client.
	///
	/// # Arguments
	/// * `config` - The API key and base URL to use.
	///
	/// # Returns
	/// A new `TaxJarClient` instance.
	pub fn new(config: TaxJarConfig) -> Self {
		let http_client = Client::builder()
			.timeout(Duration::from_secs(30))
			.build()
			.expect("Failed to create HTTP client");

		Self {
			http_client,
			config,
		}
	}

	/// Record an order transaction.
	///
	/// # Returns
	/// The created transaction as echoed back by the service, or a
	/// `TaxJarError` if the call fails.
	pub async fn create_order<P: Serialize>(
		&self,
		payload: &P,
	) -> Result<CreatedTransaction, TaxJarError> {
		let envelope: OrderEnvelope = self.post("/v2/transactions/orders", payload).await?;
		Ok(envelope.order)
	}

	/// Record a refund transaction.
	///
	/// # Returns
	/// The created transaction as echoed back by the service, or a
	/// `TaxJarError` if the call fails.
	pub async fn create_refund<P: Serialize>(
		&self,
		payload: &P,
	) -> Result<CreatedTransaction, TaxJarError> {
		let envelope: RefundEnvelope = self.post("/v2/transactions/refunds", payload).await?;
		Ok(envelope.refund)
	}

	/// Compute the sales tax the seller should collect for an order.
	///
	/// The sync passes do not call this; invoices already carry the tax that
	/// was recorded at payment time. It is exposed for cross-checking a
	/// transaction by hand.
	pub async fn tax_for_order<P: Serialize>(
		&self,
		payload: &P,
	) -> Result<TaxBreakdown, TaxJarError> {
		let envelope: TaxEnvelope = self.post("/v2/taxes", payload).await?;
		Ok(envelope.tax)
	}

	/// POST a payload and decode the success body.
	async fn post<P: Serialize, R: DeserializeOwned>(
		&self,
		path: &str,
		payload: &P,
	) -> Result<R, TaxJarError> {
		let url = format!("{}{}", self.config.api_base_url, path);

		let response = self
			.http_client
			.post(&url)
			.bearer_auth(self.config.api_key.expose_secret())
			.json(payload)
			.send()
			.await?;

		let status = response.status();
		let body = response.text().await?;
		debug!("Tax service {} responded {}", path, status);

		if !status.is_success() {
			return Err(TaxJarError::Rejected {
				status: status.as_u16(),
				body,
			});
		}

		Ok(serde_json::from_str(&body)?)
	}
}
