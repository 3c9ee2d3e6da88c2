//! Consumers of accumulated tallies: goodness of fit and charts.

pub mod analysis;
pub mod visualisation;
