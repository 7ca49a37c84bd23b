//! Blood type inheritance resolver.
//!
//! Maps two parental blood types to every child blood type they can produce.
//! ABO is resolved through the parents' allele pairs, Rh through a fixed rule:
//! any Rh+ parent gives Rh+ children, two Rh- parents give Rh- children.

use std::collections::BTreeSet;

use itertools::Itertools;
use tracing::instrument;

use crate::domain::entities::{AboPhenotype, Allele, Genotype, RhSign};

/// Child blood types reachable from a pair of parents.
pub type ChildSet = BTreeSet<Genotype>;

/// Phenotypes a child can express given one allele from each parent.
///
/// A combination with O stays ambiguous because the parent phenotype does not
/// fix zygosity, so both the dominant group and O are possible.
pub fn phenotypes_for(first: Allele, second: Allele) -> &'static [AboPhenotype] {
    match (first, second) {
        (Allele::A, Allele::A) => &[AboPhenotype::A],
        (Allele::A, Allele::O) | (Allele::O, Allele::A) => &[AboPhenotype::A, AboPhenotype::O],
        (Allele::B, Allele::B) => &[AboPhenotype::B],
        (Allele::B, Allele::O) | (Allele::O, Allele::B) => &[AboPhenotype::B, AboPhenotype::O],
        (Allele::A, Allele::B) | (Allele::B, Allele::A) => &[AboPhenotype::AB],
        (Allele::O, Allele::O) => &[AboPhenotype::O],
    }
}

/// Union of the phenotypes over all four ordered allele combinations.
pub fn child_phenotypes(first: AboPhenotype, second: AboPhenotype) -> BTreeSet<AboPhenotype> {
    first
        .alleles()
        .into_iter()
        .cartesian_product(second.alleles())
        .flat_map(|(a, b)| phenotypes_for(a, b).iter().copied())
        .collect()
}

/// Rh signs a child can carry.
///
/// Not a Punnett square: Rh+ parents are not split into homo/heterozygous.
pub fn child_rh_signs(first: RhSign, second: RhSign) -> BTreeSet<RhSign> {
    match (first, second) {
        (RhSign::Negative, RhSign::Negative) => BTreeSet::from([RhSign::Negative]),
        _ => BTreeSet::from([RhSign::Positive]),
    }
}

/// Resolve every child blood type possible for the two parents.
///
/// Pure and symmetric: `resolve(a, b) == resolve(b, a)`.
#[instrument(level = "debug", skip_all, fields(parent1 = %parent1, parent2 = %parent2))]
pub fn resolve(parent1: Genotype, parent2: Genotype) -> ChildSet {
    let phenotypes = child_phenotypes(parent1.abo, parent2.abo);
    let signs = child_rh_signs(parent1.rh, parent2.rh);

    phenotypes
        .into_iter()
        .cartesian_product(signs.iter().copied())
        .map(|(abo, rh)| Genotype::new(abo, rh))
        .collect()
}
