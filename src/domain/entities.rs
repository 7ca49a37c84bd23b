//! Domain entities: blood group phenotypes, alleles and genotypes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Observable ABO blood group.
///
/// This is the phenotype, not the allele pair: `A` covers both AA and AO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AboPhenotype {
    A,
    B,
    AB,
    O,
}

impl AboPhenotype {
    pub const ALL: [AboPhenotype; 4] = [
        AboPhenotype::A,
        AboPhenotype::B,
        AboPhenotype::AB,
        AboPhenotype::O,
    ];

    /// Allele pair consistent with the phenotype.
    ///
    /// A and B assume the heterozygous pair so the recessive O can be passed on.
    pub fn alleles(self) -> [Allele; 2] {
        match self {
            AboPhenotype::A => [Allele::A, Allele::O],
            AboPhenotype::B => [Allele::B, Allele::O],
            AboPhenotype::AB => [Allele::A, Allele::B],
            AboPhenotype::O => [Allele::O, Allele::O],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AboPhenotype::A => "A",
            AboPhenotype::B => "B",
            AboPhenotype::AB => "AB",
            AboPhenotype::O => "O",
        }
    }
}

impl fmt::Display for AboPhenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AboPhenotype {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(AboPhenotype::A),
            "B" => Ok(AboPhenotype::B),
            "AB" => Ok(AboPhenotype::AB),
            "O" => Ok(AboPhenotype::O),
            _ => Err(DomainError::invalid_genotype(
                s,
                "ABO group must be one of A, B, AB, O",
            )),
        }
    }
}

/// Rhesus factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RhSign {
    Positive,
    Negative,
}

impl RhSign {
    pub const ALL: [RhSign; 2] = [RhSign::Positive, RhSign::Negative];

    pub fn as_str(self) -> &'static str {
        match self {
            RhSign::Positive => "+",
            RhSign::Negative => "-",
        }
    }
}

impl fmt::Display for RhSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RhSign {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(RhSign::Positive),
            // ASCII hyphen and U+2212 minus
            "-" | "\u{2212}" => Ok(RhSign::Negative),
            _ => Err(DomainError::invalid_genotype(s, "Rh sign must be + or -")),
        }
    }
}

/// Single ABO allele carried by a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Allele {
    A,
    B,
    O,
}

/// Observed blood type: ABO phenotype plus Rh sign, e.g. `AB-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Genotype {
    pub abo: AboPhenotype,
    pub rh: RhSign,
}

impl Genotype {
    pub fn new(abo: AboPhenotype, rh: RhSign) -> Self {
        Self { abo, rh }
    }

    /// Build from the two separate selections (ABO group and Rh sign).
    pub fn from_parts(abo: &str, rh: &str) -> Result<Self, DomainError> {
        Ok(Self::new(abo.parse()?, rh.parse()?))
    }

    /// All eight blood types in natural order.
    pub fn all() -> impl Iterator<Item = Genotype> {
        AboPhenotype::ALL
            .into_iter()
            .flat_map(|abo| RhSign::ALL.into_iter().map(move |rh| Genotype::new(abo, rh)))
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.abo, self.rh)
    }
}

impl FromStr for Genotype {
    type Err = DomainError;

    /// Parse the combined form, e.g. `A+`, `AB-`, `O−`. Case and spacing are exact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sign_start = s
            .char_indices()
            .last()
            .map(|(idx, _)| idx)
            .filter(|&idx| idx > 0)
            .ok_or_else(|| {
                DomainError::invalid_genotype(s, "expected ABO group followed by Rh sign, e.g. A+")
            })?;
        let (abo, rh) = s.split_at(sign_start);
        Ok(Self::new(
            abo.parse().map_err(|_| {
                DomainError::invalid_genotype(s, "ABO group must be one of A, B, AB, O")
            })?,
            rh.parse()
                .map_err(|_| DomainError::invalid_genotype(s, "Rh sign must be + or -"))?,
        ))
    }
}

impl TryFrom<String> for Genotype {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Genotype> for String {
    fn from(value: Genotype) -> Self {
        value.to_string()
    }
}
