use mendel_rs::abstract_plants::{canonical_pair, Allele};
use mendel_rs::accumulator::Accumulator;
use mendel_rs::extra::analysis;
use mendel_rs::plants::pea::{self, Locus};
use mendel_rs::pollination::{simulate_batch, simulate_one, AlleleSource, RandomSource};
use mendel_rs::MendelError;
use rand::prelude::*;
use std::collections::VecDeque;

/// Replays fixed allele symbols in draw order: first gamete's loci, then the second's.
struct Scripted(VecDeque<char>);

impl Scripted {
    fn new(s: &str) -> Self {
        Self(s.chars().collect())
    }
}

impl AlleleSource for Scripted {
    fn draw_allele(&mut self, locus: &Locus) -> Allele {
        let c = self.0.pop_front().expect("script exhausted");
        locus.allele_of(c).expect("symbol does not belong to locus")
    }
}

#[test]
fn test_heterozygous_color_scenario() {
    // fR = R, fY = Y, mR = R, mY = y
    let mut acc = Accumulator::new();
    simulate_batch(&mut acc, 1, &mut Scripted::new("RYRy")).unwrap();

    let s = acc.snapshot();
    let event = s.last_event().unwrap();
    assert_eq!(event.first().to_string(), "RY");
    assert_eq!(event.second().to_string(), "Ry");
    assert_eq!(event.genotype().to_string(), "RRYy");
    assert_eq!(event.phenotype().to_string(), "round yellow");

    assert_eq!(s.total(), 1);
    for (x, c) in s.genotype_counts() {
        let expected = if x.to_string() == "RRYy" { 1 } else { 0 };
        assert_eq!(*c, expected);
    }
    for (p, c) in s.phenotype_counts() {
        let expected = if p.to_string() == "round yellow" { 1 } else { 0 };
        assert_eq!(*c, expected);
    }
}

#[test]
fn test_double_recessive_scenario() {
    let event = simulate_one(&mut Scripted::new("ryry")).unwrap();
    assert_eq!(event.genotype().to_string(), "rryy");
    assert_eq!(event.phenotype().to_string(), "wrinkled green");
}

#[test]
fn test_canonical_pair_order_independent() {
    let alleles = [Allele::Dominant, Allele::Recessive];
    for &a in &alleles {
        for &b in &alleles {
            let p = canonical_pair(a, b);
            assert_eq!(p, canonical_pair(b, a));
            assert_eq!(p, canonical_pair(p.first(), p.second()));
            assert!(p.first() <= p.second());
        }
    }
}

#[test]
fn test_batch_of_hundred_sums() {
    let mut acc = Accumulator::new();
    let mut source = RandomSource::new(StdRng::seed_from_u64(2024));
    simulate_batch(&mut acc, 100, &mut source).unwrap();

    let s = acc.snapshot();
    let genotypes: usize = s.genotype_counts().iter().map(|(_, c)| c).sum();
    let phenotypes: usize = s.phenotype_counts().iter().map(|(_, c)| c).sum();
    assert_eq!(s.total(), 100);
    assert_eq!(genotypes, 100);
    assert_eq!(phenotypes, 100);
    assert!(s.last_event().is_some());
}

#[test]
fn test_zero_and_negative_batches_do_not_mutate() {
    let mut acc = Accumulator::new();
    let mut source = RandomSource::new(StdRng::seed_from_u64(5));
    let empty = acc.snapshot();
    simulate_batch(&mut acc, 0, &mut source).unwrap();
    assert_eq!(acc.snapshot(), empty);

    simulate_batch(&mut acc, 10, &mut source).unwrap();
    let populated = acc.snapshot();
    let err = simulate_batch(&mut acc, -3, &mut source).unwrap_err();
    assert!(matches!(err, MendelError::InvalidArgument(_)));
    assert_eq!(acc.snapshot(), populated);
}

#[test]
fn test_reset_after_trials() {
    let mut acc = Accumulator::new();
    let mut source = RandomSource::new(StdRng::seed_from_u64(9));
    simulate_batch(&mut acc, 37, &mut source).unwrap();
    acc.reset();

    let s = acc.snapshot();
    assert_eq!(s.total(), 0);
    assert!(s.last_event().is_none());
    assert_eq!(s.genotype_counts().len(), 9);
    assert_eq!(s.phenotype_counts().len(), 4);
    assert!(s.genotype_counts().iter().all(|(_, c)| *c == 0));
    assert!(s.phenotype_counts().iter().all(|(_, c)| *c == 0));
    assert_eq!(s, Accumulator::new().snapshot());
}

#[test]
fn test_every_genotype_has_one_of_four_phenotypes() {
    let phenotypes = pea::all_phenotypes();
    assert_eq!(phenotypes.len(), 4);
    for x in pea::all_genotypes() {
        let p = pea::phenotype_of_key(&x.to_string()).unwrap();
        assert!(phenotypes.contains(&p));
        assert_eq!(p, pea::phenotype_of(&x));
    }
}

#[test]
fn test_phenotype_frequencies_approach_9_3_3_1() {
    let mut acc = Accumulator::new();
    let mut source = RandomSource::new(StdRng::seed_from_u64(1865));
    simulate_batch(&mut acc, 10_000, &mut source).unwrap();

    let s = acc.snapshot();
    let expected = analysis::expected_phenotype_ratios();
    for ((p, observed), (q, e)) in s.phenotype_ratios().iter().zip(expected.iter()) {
        assert_eq!(p, q);
        // five standard errors of a proportion over 10,000 trials
        let tolerance = 5.0 * (e * (1.0 - e) / 10_000.0).sqrt();
        assert!(
            (observed - e).abs() < tolerance,
            "{}: observed {}, expected {}",
            p,
            observed,
            e
        );
    }
    assert!(analysis::chi_square(&s).unwrap() < 25.0);
}
