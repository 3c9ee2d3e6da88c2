//! Concrete plant models implementing the traits in `abstract_plants`.

pub mod pea;
