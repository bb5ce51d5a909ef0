mod regional_aggregator;

pub use regional_aggregator::aggregate;
