//! Simulated self-pollination of an `RrYy` pea.
//!
//! Each event draws two gametes from the same heterozygous parent, one allele per locus,
//! every draw independent of the others. The gametes are fused into a canonical genotype
//! and the phenotype follows from complete dominance.

use crate::abstract_plants::*;
use crate::accumulator::Accumulator;
use crate::error::{MendelError, Result};
use crate::plants::pea::*;
use log::{debug, info, trace, warn};
use rand::Rng;
use std::fmt;

pub use crate::abstract_plants::canonical_pair;

/// Where allele draws come from.
///
/// [`RandomSource`] wraps any `rand` generator; replaying fixed draws only takes another
/// implementation of this trait.
pub trait AlleleSource {
    fn draw_allele(&mut self, locus: &Locus) -> Allele;
}

pub struct RandomSource<R> {
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> AlleleSource for RandomSource<R> {
    fn draw_allele(&mut self, locus: &Locus) -> Allele {
        draw_allele(&mut self.rng, locus)
    }
}

/// Picks one of the two alleles of a heterozygous `locus`, each with probability 0.5.
pub fn draw_allele<R>(rng: &mut R, locus: &Locus) -> Allele
where
    R: Rng + ?Sized,
{
    let a = Allele::from(rng.gen::<bool>());
    trace!("{}: drew {}", locus.name(), locus.symbol(a));
    a
}

/// The outcome of one simulated pollination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollinationEvent {
    first: PeaGamete,
    second: PeaGamete,
    genotype: PeaGenotype,
    phenotype: Phenotype,
}

impl PollinationEvent {
    /// Gamete contributed by the first gamete source (the ovule).
    pub fn first(&self) -> &PeaGamete {
        &self.first
    }

    /// Gamete contributed by the second gamete source (the pollen).
    pub fn second(&self) -> &PeaGamete {
        &self.second
    }

    pub fn genotype(&self) -> &PeaGenotype {
        &self.genotype
    }

    pub fn phenotype(&self) -> &Phenotype {
        &self.phenotype
    }
}

impl fmt::Display for PollinationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} → {} ({})",
            self.first, self.second, self.genotype, self.phenotype
        )
    }
}

fn draw_gamete<S>(source: &mut S) -> Result<PeaGamete>
where
    S: AlleleSource + ?Sized,
{
    PeaGamete::new(LOCI.iter().map(|locus| source.draw_allele(locus)).collect())
}

/// Simulates one self-pollination. Does not record anything.
///
/// All alleles of the first gamete are drawn before those of the second, in [`LOCI`] order.
pub fn simulate_one<S>(source: &mut S) -> Result<PollinationEvent>
where
    S: AlleleSource + ?Sized,
{
    let first = draw_gamete(source)?;
    let second = draw_gamete(source)?;
    let genotype = PeaGenotype::from_gametes(&first, &second);
    let phenotype = phenotype_of(&genotype);
    let event = PollinationEvent {
        first,
        second,
        genotype,
        phenotype,
    };
    debug!("pollination: {}", event);
    Ok(event)
}

/// Runs `n` pollinations, recording each one in `acc` before the next is drawn.
///
/// A negative `n` is rejected before `acc` is touched and `n == 0` does nothing. If recording
/// fails part way, the batch stops there: trials recorded so far are kept and the error is
/// returned.
pub fn simulate_batch<S>(acc: &mut Accumulator, n: i64, source: &mut S) -> Result<()>
where
    S: AlleleSource + ?Sized,
{
    if n < 0 {
        return Err(MendelError::InvalidArgument(format!(
            "batch size must be non-negative, got {}",
            n
        )));
    }
    for i in 0..n {
        let event = simulate_one(source)?;
        acc.record(event).map_err(|e| {
            warn!("batch aborted after {} of {} pollinations: {}", i, n, e);
            e
        })?;
    }
    info!("ran {} pollinations, {} in total", n, acc.total());
    Ok(())
}
