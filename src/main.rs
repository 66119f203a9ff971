mod config;
mod stripe;
mod sync;
mod taxjar;

use tracing::{error, info};

use crate::config::SyncConfig;
use crate::stripe::StripeClient;
use crate::sync::{SyncOrchestrator, TaxSubmitter};
use crate::taxjar::TaxJarClient;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::from_default_env()
				.add_directive(tracing::Level::INFO.into()),
		)
		.with_target(false)
		.with_thread_ids(false)
		.with_thread_names(false)
		.with_file(false)
		.with_line_number(false)
		.with_timer(tracing_subscriber::fmt::time::time())
		.init();

	info!("Starting transaction sync service");

	let config = match SyncConfig::from_env() {
		Ok(config) => config,
		Err(e) => {
			error!("Configuration error: {}", e);
			std::process::exit(1);
		}
	};

	let stripe_client = StripeClient::new(config.stripe, config.request_limit);
	let taxjar_client = TaxJarClient::new(config.taxjar);
	let submitter = TaxSubmitter::new(taxjar_client, config.from_address);
	let orchestrator = SyncOrchestrator::new(stripe_client, submitter);

	info!("Created billing and tax service clients");

	match orchestrator.run().await {
		Ok(report) => {
			info!(
				"Synchronization completed successfully ({} events processed)",
				report.total_events()
			);
		}
		Err(e) => {
			error!("Synchronization aborted: {}", e);
			std::process::exit(1);
		}
	}
}
