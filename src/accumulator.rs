use crate::error::{MendelError, Result};
use crate::plants::pea::*;
use crate::pollination::PollinationEvent;
use log::info;
use std::fmt;

/// Running tallies over every pollination of one session.
///
/// All genotype and phenotype categories are present from construction on, in the canonical
/// order of [`all_genotypes`] and [`all_phenotypes`], and are never dropped.
#[derive(Debug, Clone)]
pub struct Accumulator {
    genotypes: Vec<PeaGenotype>,
    phenotypes: Vec<Phenotype>,
    genotype_counts: Vec<usize>,
    phenotype_counts: Vec<usize>,
    total: usize,
    last_event: Option<PollinationEvent>,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    pub fn new() -> Self {
        let genotypes = all_genotypes();
        let phenotypes = all_phenotypes();
        Self {
            genotype_counts: vec![0; genotypes.len()],
            phenotype_counts: vec![0; phenotypes.len()],
            genotypes,
            phenotypes,
            total: 0,
            last_event: None,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Counts one pollination.
    ///
    /// Both slots are resolved before anything changes, so a failed record leaves the
    /// tallies as they were.
    pub fn record(&mut self, event: PollinationEvent) -> Result<()> {
        let i_x = self
            .genotypes
            .iter()
            .position(|x| x == event.genotype())
            .ok_or_else(|| MendelError::UnknownGenotype(event.genotype().to_string()))?;
        let i_p = self
            .phenotypes
            .iter()
            .position(|p| p == event.phenotype())
            .ok_or_else(|| MendelError::UnknownGenotype(event.genotype().to_string()))?;
        self.genotype_counts[i_x] += 1;
        self.phenotype_counts[i_p] += 1;
        self.total += 1;
        self.last_event = Some(event);
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            genotype_counts: self
                .genotypes
                .iter()
                .cloned()
                .zip(self.genotype_counts.iter().copied())
                .collect(),
            phenotype_counts: self
                .phenotypes
                .iter()
                .cloned()
                .zip(self.phenotype_counts.iter().copied())
                .collect(),
            total: self.total,
            last_event: self.last_event.clone(),
        }
    }

    /// Zeroes every count and forgets the last event. The categories stay.
    pub fn reset(&mut self) {
        self.genotype_counts.iter_mut().for_each(|c| *c = 0);
        self.phenotype_counts.iter_mut().for_each(|c| *c = 0);
        self.total = 0;
        self.last_event = None;
        info!("tallies reset");
    }
}

/// An immutable copy of the tallies, ready for listing or charting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    genotype_counts: Vec<(PeaGenotype, usize)>,
    phenotype_counts: Vec<(Phenotype, usize)>,
    total: usize,
    last_event: Option<PollinationEvent>,
}

fn ratios<K: Clone>(counts: &[(K, usize)], total: usize) -> Vec<(K, f64)> {
    counts
        .iter()
        .map(|(k, c)| match total {
            0 => (k.clone(), 0.0),
            _ => (k.clone(), *c as f64 / total as f64),
        })
        .collect()
}

impl Snapshot {
    pub fn genotype_counts(&self) -> &[(PeaGenotype, usize)] {
        &self.genotype_counts
    }

    pub fn phenotype_counts(&self) -> &[(Phenotype, usize)] {
        &self.phenotype_counts
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn last_event(&self) -> Option<&PollinationEvent> {
        self.last_event.as_ref()
    }

    pub fn genotype_count(&self, key: &str) -> Option<usize> {
        self.genotype_counts
            .iter()
            .find(|(x, _)| x.to_string() == key)
            .map(|(_, c)| *c)
    }

    pub fn phenotype_count(&self, label: &str) -> Option<usize> {
        self.phenotype_counts
            .iter()
            .find(|(p, _)| p.to_string() == label)
            .map(|(_, c)| *c)
    }

    /// Observed genotype frequencies; all zero when nothing has been recorded.
    pub fn genotype_ratios(&self) -> Vec<(PeaGenotype, f64)> {
        ratios(&self.genotype_counts, self.total)
    }

    pub fn phenotype_ratios(&self) -> Vec<(Phenotype, f64)> {
        ratios(&self.phenotype_counts, self.total)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(event) = &self.last_event {
            writeln!(f, "Last result: {}", event)?;
        }
        writeln!(f, "Total pollinations: {}", self.total)?;
        if self.total == 0 {
            return writeln!(f, "No pollination has been run yet.");
        }
        writeln!(f, "Genotypes:")?;
        for (x, c) in &self.genotype_counts {
            writeln!(f, "- {}: {}", x, c)?;
        }
        writeln!(f, "Phenotypes:")?;
        for (p, c) in &self.phenotype_counts {
            writeln!(f, "- {}: {}", p, c)?;
        }
        Ok(())
    }
}
