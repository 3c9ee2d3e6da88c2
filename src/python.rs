//! Python bindings, so a Python front end can drive a session and chart its tallies.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rand::rngs::StdRng;

use crate::accumulator::Accumulator;
use crate::error::MendelError;
use crate::plants::pea;
use crate::pollination::{simulate_batch, RandomSource};
use crate::settings::Settings;

impl From<MendelError> for PyErr {
    fn from(e: MendelError) -> PyErr {
        PyValueError::new_err(e.to_string())
    }
}

/// One user's tallies together with the generator feeding them.
#[pyclass]
pub struct Session {
    accumulator: Accumulator,
    source: RandomSource<StdRng>,
}

#[pymethods]
impl Session {
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u64>) -> Self {
        let settings = Settings {
            seed,
            ..Settings::default()
        };
        Self {
            accumulator: Accumulator::new(),
            source: RandomSource::new(settings.rng()),
        }
    }

    fn run(&mut self, n: i64) -> PyResult<()> {
        Ok(simulate_batch(&mut self.accumulator, n, &mut self.source)?)
    }

    fn reset(&mut self) {
        self.accumulator.reset()
    }

    fn total(&self) -> usize {
        self.accumulator.total()
    }

    fn genotype_counts(&self) -> Vec<(String, usize)> {
        self.accumulator
            .snapshot()
            .genotype_counts()
            .iter()
            .map(|(x, c)| (x.to_string(), *c))
            .collect()
    }

    fn phenotype_counts(&self) -> Vec<(String, usize)> {
        self.accumulator
            .snapshot()
            .phenotype_counts()
            .iter()
            .map(|(p, c)| (p.to_string(), *c))
            .collect()
    }

    fn last_event(&self) -> Option<String> {
        self.accumulator
            .snapshot()
            .last_event()
            .map(|e| e.to_string())
    }

    fn __str__(&self) -> String {
        self.accumulator.snapshot().to_string()
    }
}

/// Phenotype label of a canonical genotype key, e.g. `"RrYy"` -> `"round yellow"`.
#[pyfunction]
pub fn phenotype_of(key: &str) -> PyResult<String> {
    Ok(pea::phenotype_of_key(key)?.to_string())
}
