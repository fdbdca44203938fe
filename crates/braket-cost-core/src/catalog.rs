use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Usage types billed once per submitted task end with this.
pub const TASK_SUFFIX: &str = "Task";
/// Usage types billed per shot end with this.
pub const SHOT_SUFFIX: &str = "Shot";

/// Flat mapping from usage-type code to on-demand unit price in USD.
///
/// Built fresh on each fetch; callers wanting reuse keep the returned
/// value around and pass it into [`crate::device::resolve`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PriceCatalog {
    prices: BTreeMap<String, f64>,
}

impl PriceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, usage_type: impl Into<String>, price: f64) {
        self.prices.insert(usage_type.into(), price);
    }

    /// Unit price for a usage type, if present.
    pub fn price(&self, usage_type: &str) -> Option<f64> {
        self.prices.get(usage_type).copied()
    }

    pub fn contains(&self, usage_type: &str) -> bool {
        self.prices.contains_key(usage_type)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Iterate entries in usage-type order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.prices.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for PriceCatalog {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().collect(),
        }
    }
}

/// Whether a usage-type value is a task- or shot-billing line item.
pub fn is_billable_usage_type(value: &str) -> bool {
    value.ends_with(TASK_SUFFIX) || value.ends_with(SHOT_SUFFIX)
}

/// Extract `(usage_type, unit_price_usd)` from one product price record.
///
/// The record shape is
/// `product.attributes.usagetype` plus
/// `terms.OnDemand.<termId>.priceDimensions.<dimId>.pricePerUnit.USD`.
/// There may be several term ids and several dimensions per term; all are
/// walked and the last parsed price wins. Returns `None` for records
/// missing the usage type or carrying no parseable USD price.
pub fn parse_price_record(record: &Value) -> Option<(String, f64)> {
    let usage_type = record
        .get("product")?
        .get("attributes")?
        .get("usagetype")?
        .as_str()?
        .to_string();

    let terms = record.get("terms")?.get("OnDemand")?.as_object()?;

    let mut price = None;
    for term in terms.values() {
        let dims = match term.get("priceDimensions").and_then(|d| d.as_object()) {
            Some(dims) => dims,
            None => continue,
        };
        for dim in dims.values() {
            let usd = dim
                .get("pricePerUnit")
                .and_then(|p| p.get("USD"))
                .and_then(|v| v.as_str());
            if let Some(parsed) = usd.and_then(|s| s.parse::<f64>().ok()) {
                price = Some(parsed);
            }
        }
    }

    price.map(|p| (usage_type, p))
}
