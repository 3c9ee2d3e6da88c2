use crate::abstract_plants::*;
use crate::accumulator::Snapshot;
use crate::plants::pea::*;

/// Upper 5% point of the chi-square distribution with 3 degrees of freedom, the test used
/// for four phenotype classes.
pub const PHENOTYPE_CHI_SQUARE_CRITICAL: f64 = 7.815;

/// Probability of a genotype class at one locus of an `Rr` self-cross: 1:2:1.
fn pair_probability(p: &AllelePair) -> f64 {
    match p.first() == p.second() {
        true => 0.25,
        false => 0.5,
    }
}

/// Probability of expressing an allele class at one locus of an `Rr` self-cross: 3:1.
fn expressed_probability(a: Allele) -> f64 {
    match a {
        Allele::Dominant => 0.75,
        Allele::Recessive => 0.25,
    }
}

/// Expected genotype frequencies of the `RrYy` self-cross, in canonical order.
pub fn expected_genotype_ratios() -> Vec<(PeaGenotype, f64)> {
    all_genotypes()
        .into_iter()
        .map(|x| {
            let r: f64 = x.pairs().iter().map(pair_probability).product();
            (x, r)
        })
        .collect()
}

/// Expected phenotype frequencies, 9:3:3:1 for two loci, in canonical order.
pub fn expected_phenotype_ratios() -> Vec<(Phenotype, f64)> {
    all_phenotypes()
        .into_iter()
        .map(|p| {
            let r: f64 = p
                .expressed()
                .iter()
                .copied()
                .map(expressed_probability)
                .product();
            (p, r)
        })
        .collect()
}

fn chi_square_against<K: PartialEq>(
    observed: &[(K, usize)],
    expected: &[(K, f64)],
    total: usize,
) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let n = total as f64;
    let mut chi = 0.0;
    for (k, c) in observed {
        let (_, r) = expected.iter().find(|(e, _)| e == k)?;
        let e = r * n;
        chi += (*c as f64 - e).powi(2) / e;
    }
    Some(chi)
}

/// Pearson's chi-square statistic of the observed phenotypes against 9:3:3:1.
///
/// `None` for an empty snapshot.
pub fn chi_square(snapshot: &Snapshot) -> Option<f64> {
    chi_square_against(
        snapshot.phenotype_counts(),
        &expected_phenotype_ratios(),
        snapshot.total(),
    )
}

/// Same as [`chi_square`] but over the nine genotype classes (1:2:1 x 1:2:1).
pub fn genotype_chi_square(snapshot: &Snapshot) -> Option<f64> {
    chi_square_against(
        snapshot.genotype_counts(),
        &expected_genotype_ratios(),
        snapshot.total(),
    )
}

/// Whether the observed phenotypes are consistent with 9:3:3:1 at the 5% level.
pub fn fits_mendelian_ratio(snapshot: &Snapshot) -> Option<bool> {
    chi_square(snapshot).map(|chi| chi < PHENOTYPE_CHI_SQUARE_CRITICAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::Accumulator;

    #[test]
    fn expected_ratios_test() {
        let f = |v: Vec<f64>| v.iter().map(|r| r * 16.0).collect::<Vec<f64>>();
        let phen = expected_phenotype_ratios()
            .into_iter()
            .map(|(_, r)| r)
            .collect();
        assert_eq!(f(phen), vec![9.0, 3.0, 3.0, 1.0]);
        let gen = expected_genotype_ratios()
            .into_iter()
            .map(|(_, r)| r)
            .collect();
        assert_eq!(
            f(gen),
            vec![1.0, 2.0, 1.0, 2.0, 4.0, 2.0, 1.0, 2.0, 1.0]
        );
    }

    #[test]
    fn empty_snapshot_test() {
        let s = Accumulator::new().snapshot();
        assert_eq!(chi_square(&s), None);
        assert_eq!(genotype_chi_square(&s), None);
        assert_eq!(fits_mendelian_ratio(&s), None);
    }
}
