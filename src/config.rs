//! Runtime configuration, read from the environment.
//!
//! | Variable                    | Default | Meaning                                   |
//! |-----------------------------|---------|-------------------------------------------|
//! | `DISPATCH_MAILBOX_CAPACITY` | 32      | Pending requests the actor mailbox holds  |
//! | `DISPATCH_SEED_STOCK`       | (none)  | Startup stock, e.g. `A:5,widget:12`       |
//!
//! ```ignore
//! DISPATCH_SEED_STOCK=A:5,B:10 RUST_LOG=info cargo run
//! ```

use crate::model::ProductId;
use tracing::warn;

pub const DEFAULT_MAILBOX_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Capacity of the actor's mpsc channel. Never zero.
    pub mailbox_capacity: usize,
    /// Products restocked before the actor starts, in this order.
    pub seed_stock: Vec<(ProductId, u32)>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            seed_stock: Vec::new(),
        }
    }
}

impl DispatchConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("DISPATCH_MAILBOX_CAPACITY").ok().as_deref(),
            std::env::var("DISPATCH_SEED_STOCK").ok().as_deref(),
        )
    }

    fn from_vars(capacity: Option<&str>, seed_stock: Option<&str>) -> Self {
        let mailbox_capacity = capacity
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAILBOX_CAPACITY)
            .max(1);
        Self {
            mailbox_capacity,
            seed_stock: seed_stock.map(parse_seed_stock).unwrap_or_default(),
        }
    }

    pub fn with_mailbox_capacity(mut self, capacity: usize) -> Self {
        self.mailbox_capacity = capacity.max(1);
        self
    }

    pub fn with_seed_stock(mut self, product_id: impl Into<ProductId>, amount: u32) -> Self {
        self.seed_stock.push((product_id.into(), amount));
        self
    }
}

/// Parses `id:amount` pairs separated by commas. Bad entries are skipped.
fn parse_seed_stock(raw: &str) -> Vec<(ProductId, u32)> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let parsed = entry.rsplit_once(':').and_then(|(id, amount)| {
                let id = id.trim();
                let amount = amount.trim().parse::<u32>().ok()?;
                (!id.is_empty() && amount > 0).then(|| (ProductId::from(id), amount))
            });
            if parsed.is_none() {
                warn!(entry, "Ignoring malformed seed stock entry");
            }
            parsed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(DispatchConfig::from_vars(None, None), DispatchConfig::default());
    }

    #[test]
    fn test_capacity_parsed_and_clamped() {
        assert_eq!(DispatchConfig::from_vars(Some(" 8 "), None).mailbox_capacity, 8);
        assert_eq!(DispatchConfig::from_vars(Some("0"), None).mailbox_capacity, 1);
        assert_eq!(
            DispatchConfig::from_vars(Some("lots"), None).mailbox_capacity,
            DEFAULT_MAILBOX_CAPACITY
        );
    }

    #[test]
    fn test_seed_stock_skips_bad_entries() {
        let config = DispatchConfig::from_vars(None, Some("A:5, widget:12,broken,B:-1,:3,C:0,"));
        assert_eq!(
            config.seed_stock,
            vec![(ProductId::from("A"), 5), (ProductId::from("widget"), 12)]
        );
    }

    #[test]
    fn test_builder_helpers() {
        let config = DispatchConfig::default()
            .with_mailbox_capacity(0)
            .with_seed_stock("A", 3);
        assert_eq!(config.mailbox_capacity, 1);
        assert_eq!(config.seed_stock, vec![(ProductId::from("A"), 3)]);
    }
}
