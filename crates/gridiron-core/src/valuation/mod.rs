// Valuation engine: tier baselines, positional scarcity, value scores.

pub mod scarcity;
pub mod tiers;
pub mod value;
