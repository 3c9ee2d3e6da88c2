//! Mendel's garden pea: seed shape and seed color, two independently assorting loci with
//! complete dominance.

use crate::abstract_plants::*;
use crate::error::{MendelError, Result};
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// A gene position with one dominant and one recessive allele.
///
/// The dominant allele is written with the upper-case `symbol`, the recessive one with its
/// lower-case counterpart.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Locus {
    name: &'static str,
    symbol: char,
    dominant_trait: &'static str,
    recessive_trait: &'static str,
}

pub const SHAPE: Locus = Locus {
    name: "shape",
    symbol: 'R',
    dominant_trait: "round",
    recessive_trait: "wrinkled",
};

pub const COLOR: Locus = Locus {
    name: "color",
    symbol: 'Y',
    dominant_trait: "yellow",
    recessive_trait: "green",
};

/// Every locus of the model, in the order genotypes and phenotypes are written.
pub const LOCI: [Locus; 2] = [SHAPE, COLOR];

impl Locus {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The two allele symbols of this locus, dominant first.
    pub fn alleles(&self) -> [char; 2] {
        [self.symbol, self.symbol.to_ascii_lowercase()]
    }

    pub fn symbol(&self, allele: Allele) -> char {
        match allele {
            Allele::Dominant => self.symbol,
            Allele::Recessive => self.symbol.to_ascii_lowercase(),
        }
    }

    pub fn allele_of(&self, c: char) -> Option<Allele> {
        match self.alleles() {
            [d, _] if c == d => Some(Allele::Dominant),
            [_, r] if c == r => Some(Allele::Recessive),
            _ => None,
        }
    }

    pub fn trait_of(&self, allele: Allele) -> &'static str {
        match allele {
            Allele::Dominant => self.dominant_trait,
            Allele::Recessive => self.recessive_trait,
        }
    }

    /// Dominant trait if either allele of `pair` is dominant, recessive trait otherwise.
    pub fn expressed_trait(&self, pair: AllelePair) -> &'static str {
        self.trait_of(pair.expressed())
    }
}

/// One allele per locus, as carried by a single pollen grain or ovule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PeaGamete {
    alleles: Vec<Allele>,
}

impl PeaGamete {
    pub fn new(alleles: Vec<Allele>) -> Result<Self> {
        if alleles.len() != LOCI.len() {
            return Err(MendelError::InvalidArgument(format!(
                "a gamete carries {} alleles, got {}",
                LOCI.len(),
                alleles.len()
            )));
        }
        Ok(Self { alleles })
    }
}

impl BioSize for PeaGamete {
    fn get_n_loci(&self) -> usize {
        self.alleles.len()
    }
}

impl IndexAllele<usize> for PeaGamete {
    fn index(&self, idx: usize) -> Allele {
        self.alleles[idx]
    }
}

impl Haploid for PeaGamete {
    fn alleles(&self) -> &[Allele] {
        &self.alleles
    }
}

impl Gamete<PeaGenotype> for PeaGamete {}

impl fmt::Display for PeaGamete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (locus, &a) in LOCI.iter().zip(self.alleles.iter()) {
            write!(f, "{}", locus.symbol(a))?;
        }
        Ok(())
    }
}

/// A diploid genotype over [`LOCI`], one canonical pair per locus.
///
/// Its string form (`"RrYy"`) is the lookup key used by the tallies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeaGenotype {
    pairs: Vec<AllelePair>,
}

impl BioSize for PeaGenotype {
    fn get_n_loci(&self) -> usize {
        self.pairs.len()
    }
}

impl Diploid for PeaGenotype {
    fn pairs(&self) -> &[AllelePair] {
        &self.pairs
    }
}

impl Genotype<PeaGamete> for PeaGenotype {
    fn from_gametes(gx: &PeaGamete, gy: &PeaGamete) -> Self {
        assert_eq!(gx.get_n_loci(), gy.get_n_loci());
        Self {
            pairs: gx
                .alleles()
                .iter()
                .zip(gy.alleles().iter())
                .map(|(&a, &b)| canonical_pair(a, b))
                .collect(),
        }
    }
}

impl fmt::Display for PeaGenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (locus, p) in LOCI.iter().zip(self.pairs.iter()) {
            write!(f, "{}{}", locus.symbol(p.first()), locus.symbol(p.second()))?;
        }
        Ok(())
    }
}

impl FromStr for PeaGenotype {
    type Err = MendelError;

    /// Only the canonical spelling is accepted: `"RrYy"` parses, `"rRYy"` does not.
    fn from_str(s: &str) -> Result<Self> {
        let unknown = || MendelError::UnknownGenotype(s.to_owned());
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != 2 * LOCI.len() {
            return Err(unknown());
        }
        let pairs = LOCI
            .iter()
            .zip(symbols.chunks(2))
            .map(|(locus, c)| {
                let a = locus.allele_of(c[0])?;
                let b = locus.allele_of(c[1])?;
                (a <= b).then(|| canonical_pair(a, b))
            })
            .collect::<Option<Vec<AllelePair>>>()
            .ok_or_else(unknown)?;
        Ok(Self { pairs })
    }
}

/// The expressed allele class at every locus.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Phenotype {
    expressed: Vec<Allele>,
}

impl Phenotype {
    pub fn expressed(&self) -> &[Allele] {
        &self.expressed
    }

    pub fn traits(&self) -> Vec<&'static str> {
        LOCI.iter()
            .zip(self.expressed.iter())
            .map(|(locus, &a)| locus.trait_of(a))
            .collect()
    }
}

impl fmt::Display for Phenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.traits().join(" "))
    }
}

/// Complete dominance: one dominant allele is enough to express the dominant trait.
pub struct CompleteDominance;

impl Dominance<PeaGenotype> for CompleteDominance {
    type Phenotype = Phenotype;

    fn express(x: &PeaGenotype) -> Phenotype {
        Phenotype {
            expressed: x.pairs().iter().map(AllelePair::expressed).collect(),
        }
    }
}

pub fn phenotype_of(genotype: &PeaGenotype) -> Phenotype {
    CompleteDominance::express(genotype)
}

/// Looks up the phenotype of a genotype key such as `"RRYy"`.
///
/// Fails with [`MendelError::UnknownGenotype`] for anything outside the canonical table.
pub fn phenotype_of_key(key: &str) -> Result<Phenotype> {
    key.parse::<PeaGenotype>().map(|x| phenotype_of(&x))
}

/// All genotypes over [`LOCI`] in canonical order (`RRYY`, `RRYy`, `RRyy`, `RrYY`, ...).
pub fn all_genotypes() -> Vec<PeaGenotype> {
    LOCI.iter()
        .map(|_| AllelePair::CLASSES.into_iter())
        .multi_cartesian_product()
        .map(|pairs| PeaGenotype { pairs })
        .collect()
}

/// All phenotypes over [`LOCI`] in canonical order, dominant classes first.
pub fn all_phenotypes() -> Vec<Phenotype> {
    LOCI.iter()
        .map(|_| [Allele::Dominant, Allele::Recessive].into_iter())
        .multi_cartesian_product()
        .map(|expressed| Phenotype { expressed })
        .collect()
}

pub fn phenotype_table() -> Vec<(PeaGenotype, Phenotype)> {
    all_genotypes()
        .into_iter()
        .map(|x| {
            let p = phenotype_of(&x);
            (x, p)
        })
        .collect()
}
