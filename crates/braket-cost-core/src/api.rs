use std::collections::HashSet;
use std::time::Duration;

use aws_sdk_pricing::error::SdkError;
use serde_json::Value;
use tracing::debug;

use crate::catalog::{self, PriceCatalog};
use crate::error::{CostError, Result};

/// Service code of the quantum-computing product family.
pub const BRAKET_SERVICE_CODE: &str = "AmazonBraket";

/// The Price List Query API is only served from us-east-1 and ap-south-1.
pub const DEFAULT_PRICING_REGION: &str = "us-east-1";

const PAGE_SIZE: i32 = 100;

/// Client for the AWS Price List Query API.
pub struct PricingClient {
    pricing: aws_sdk_pricing::Client,
}

impl PricingClient {
    /// Create a client against the pricing endpoint in `region`.
    ///
    /// Credentials come from the default chain (environment, SSO, config
    /// files, IAM role). Connect and operation timeouts are bounded.
    pub async fn new(region: impl Into<String>) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.into()))
            .timeout_config(
                aws_config::timeout::TimeoutConfig::builder()
                    .operation_timeout(Duration::from_secs(30))
                    .connect_timeout(Duration::from_secs(10))
                    .build(),
            )
            .load()
            .await;

        Self {
            pricing: aws_sdk_pricing::Client::new(&config),
        }
    }

    /// All task- and shot-billing usage-type values for a service code.
    ///
    /// Pages through `GetAttributeValues` for the `usagetype` attribute and
    /// keeps the values [`catalog::is_billable_usage_type`] accepts.
    pub async fn billable_usage_types(&self, service_code: &str) -> Result<Vec<String>> {
        let mut values = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let mut req = self
                .pricing
                .get_attribute_values()
                .service_code(service_code)
                .attribute_name("usagetype")
                .max_results(PAGE_SIZE);
            if let Some(token) = next_token.take() {
                req = req.next_token(token);
            }
            let resp = req.send().await.map_err(classify_sdk_error)?;

            let page = resp.attribute_values();
            debug!(page_values = page.len(), "fetched usage-type page");
            for attr in page {
                if let Some(value) = attr.value() {
                    if catalog::is_billable_usage_type(value) {
                        values.push(value.to_string());
                    }
                }
            }

            next_token = resp.next_token().map(str::to_string);
            if next_token.is_none() {
                break;
            }
        }

        Ok(values)
    }

    /// Build the task/shot price catalog for a service code.
    ///
    /// Pages through `GetProducts`, parses each JSON price record, and keeps
    /// the entries whose usage type is a billable task or shot code. The
    /// returned catalog is independent of the client; callers fetch once and
    /// resolve/estimate against it as often as they like.
    pub async fn fetch_catalog(&self, service_code: &str) -> Result<PriceCatalog> {
        let retained: HashSet<String> = self
            .billable_usage_types(service_code)
            .await?
            .into_iter()
            .collect();

        let mut prices = PriceCatalog::new();
        let mut next_token: Option<String> = None;

        loop {
            let mut req = self
                .pricing
                .get_products()
                .service_code(service_code)
                .format_version("aws_v1")
                .max_results(PAGE_SIZE);
            if let Some(token) = next_token.take() {
                req = req.next_token(token);
            }
            let resp = req.send().await.map_err(classify_sdk_error)?;

            let records = resp.price_list();
            debug!(page_records = records.len(), "fetched price-record page");
            for raw in records {
                let record: Value = serde_json::from_str(raw)?;
                if let Some((usage_type, price)) = catalog::parse_price_record(&record) {
                    if retained.contains(&usage_type) {
                        prices.insert(usage_type, price);
                    }
                }
            }

            next_token = resp.next_token().map(str::to_string);
            if next_token.is_none() {
                break;
            }
        }

        debug!(usage_types = prices.len(), service_code, "built price catalog");
        Ok(prices)
    }
}

const AUTH_MARKERS: &[&str] = &[
    "UnrecognizedClientException",
    "InvalidClientTokenId",
    "AccessDenied",
    "ExpiredToken",
    "security token",
    "credentials",
];

/// Split SDK failures into credential problems and everything else.
/// The marker strings only show up in the error source chain, so the
/// whole chain is flattened into the message.
fn classify_sdk_error<E>(err: SdkError<E>) -> CostError
where
    E: std::error::Error + Send + Sync + 'static,
{
    let mut msg = err.to_string();
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }

    if AUTH_MARKERS.iter().any(|marker| msg.contains(marker)) {
        CostError::Auth(msg)
    } else {
        CostError::ServiceUnavailable(msg)
    }
}
