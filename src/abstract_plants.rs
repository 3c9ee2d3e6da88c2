use std::cmp::Ordering;
use std::fmt;

pub trait BioSize {
    /// Number of loci carried by each haploid set.
    fn get_n_loci(&self) -> usize;
}

pub trait IndexAllele<Idx> {
    fn index(&self, idx: Idx) -> Allele;
}

pub trait Genotype<B: Gamete<Self>>: Sized + BioSize + fmt::Debug {
    fn from_gametes(gx: &B, gy: &B) -> Self;
}

pub trait Gamete<A: Genotype<Self>>: Sized + BioSize + Haploid + fmt::Debug {}

pub trait Haploid: IndexAllele<usize> {
    fn alleles(&self) -> &[Allele];
}

pub trait Diploid {
    fn pairs(&self) -> &[AllelePair];
}

/// Maps a genotype onto its observable phenotype under some dominance rule.
pub trait Dominance<T> {
    type Phenotype;

    fn express(x: &T) -> Self::Phenotype;
}

/// One variant of a biallelic gene. The variant symbol is owned by the locus.
///
/// `Dominant` orders before `Recessive`, which is what makes canonical pairs dominant first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Allele {
    Dominant,
    Recessive,
}

impl Allele {
    pub fn is_dominant(self) -> bool {
        self == Allele::Dominant
    }
}

impl From<bool> for Allele {
    fn from(value: bool) -> Self {
        match value {
            true => Allele::Dominant,
            false => Allele::Recessive,
        }
    }
}

/// Orders two alleles dominant first.
///
/// `canonical_pair(a, b) == canonical_pair(b, a)` for every `a` and `b`.
pub fn canonical_pair(a: Allele, b: Allele) -> AllelePair {
    match a.cmp(&b) {
        Ordering::Greater => AllelePair { first: b, second: a },
        _ => AllelePair { first: a, second: b },
    }
}

/// The diploid content of one locus, always stored dominant first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct AllelePair {
    first: Allele,
    second: Allele,
}

impl AllelePair {
    /// The three genotype classes a biallelic locus can take, in canonical order.
    pub const CLASSES: [AllelePair; 3] = [
        AllelePair {
            first: Allele::Dominant,
            second: Allele::Dominant,
        },
        AllelePair {
            first: Allele::Dominant,
            second: Allele::Recessive,
        },
        AllelePair {
            first: Allele::Recessive,
            second: Allele::Recessive,
        },
    ];

    pub fn first(&self) -> Allele {
        self.first
    }

    pub fn second(&self) -> Allele {
        self.second
    }

    pub fn has_dominant(&self) -> bool {
        self.first.is_dominant() || self.second.is_dominant()
    }

    /// The allele class this pair expresses under complete dominance.
    pub fn expressed(&self) -> Allele {
        Allele::from(self.has_dominant())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_pair_test() {
        use Allele::*;
        macro_rules! f {
            ($a:expr, $b:expr, $first:expr, $second:expr) => {
                let p = canonical_pair($a, $b);
                assert_eq!((p.first(), p.second()), ($first, $second));
                assert_eq!(p, canonical_pair($b, $a));
                assert_eq!(p, canonical_pair(p.first(), p.second()));
            };
        }
        f!(Dominant, Dominant, Dominant, Dominant);
        f!(Dominant, Recessive, Dominant, Recessive);
        f!(Recessive, Dominant, Dominant, Recessive);
        f!(Recessive, Recessive, Recessive, Recessive);
    }

    #[test]
    fn expressed_test() {
        assert_eq!(AllelePair::CLASSES[0].expressed(), Allele::Dominant);
        assert_eq!(AllelePair::CLASSES[1].expressed(), Allele::Dominant);
        assert_eq!(AllelePair::CLASSES[2].expressed(), Allele::Recessive);
    }
}
