//! Mendelian self-pollination of a dihybrid pea.
//!
//! Components of the simulation are separated by module.
//! Typical use is as follows:
//! ```
//! use mendel_rs::accumulator::Accumulator;
//! use mendel_rs::pollination::{simulate_batch, RandomSource};
//!
//! use rand::prelude::*;
//! let mut source = RandomSource::new(StdRng::seed_from_u64(0));
//!
//! let mut acc = Accumulator::new();
//! simulate_batch(&mut acc, 100, &mut source).unwrap();
//!
//! let snapshot = acc.snapshot();
//! assert_eq!(snapshot.total(), 100);
//! ```
//#![deny(missing_docs)]

/// Exports the allele and dominance traits implemented by `plants`
pub mod abstract_plants;
/// Running tallies and their snapshots
pub mod accumulator;
pub mod error;
pub mod extra;
pub mod plants;
/// Draws pollination events and feeds them to an accumulator
pub mod pollination;
pub mod settings;

#[cfg(feature = "python")]
pub mod python;

pub use error::{MendelError, Result};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
#[pyo3(name = "mendel_rs")]
fn mendel_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::Session>()?;
    m.add_function(wrap_pyfunction!(python::phenotype_of, m)?)?;
    Ok(())
}
