use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::crispr::{CrisprNuclease, RelativeStrand};
use crate::errors::*;

const NUCLEOTIDES: &[u8] = b"ACGT";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Substitution {
    from: u8,
    to: u8,
}

impl Substitution {
    pub fn new(from: u8, to: u8) -> Result<Substitution> {
        let from = from.to_ascii_uppercase();
        let to = to.to_ascii_uppercase();

        if !NUCLEOTIDES.contains(&from) || !NUCLEOTIDES.contains(&to) {
            Err(invalid_definition(
                "substitution",
                format!("{}2{} is not a substitution of A, C, G or T", from as char, to as char),
            ))
        } else if from == to {
            Err(invalid_definition(
                "substitution",
                format!("{}2{} does not change the nucleotide", from as char, to as char),
            ))
        } else {
            Ok(Substitution { from, to })
        }
    }

    pub fn from_base(&self) -> u8 {
        self.from
    }

    pub fn to_base(&self) -> u8 {
        self.to
    }
}

impl FromStr for Substitution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Substitution> {
        match s.as_bytes() {
            [from, b'2', to] => Substitution::new(*from, *to),
            _ => Err(invalid_definition(
                "substitution",
                format!("expected substitution such as 'C2T', not {:?}", s),
            )),
        }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}2{}", self.from as char, self.to as char)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditingWeights {
    weights: BTreeMap<(Substitution, isize), f64>,
}

impl EditingWeights {
    pub const DEFAULT_WEIGHT: f64 = 0.0;

    pub fn new<I>(entries: I) -> Result<EditingWeights>
    where
        I: IntoIterator<Item = (Substitution, isize, f64)>,
    {
        let mut weights = BTreeMap::new();
        for (substitution, position, weight) in entries {
            if !weight.is_finite() || weight < 0.0 {
                return Err(invalid_definition(
                    "editing_weights",
                    format!(
                        "weight {} for {} at position {} is not a non-negative number",
                        weight, substitution, position
                    ),
                ));
            } else if weights.insert((substitution, position), weight).is_some() {
                return Err(invalid_definition(
                    "editing_weights",
                    format!("{} at position {} listed twice", substitution, position),
                ));
            }
        }

        Ok(EditingWeights { weights })
    }

    pub fn get(&self, substitution: Substitution, position: isize) -> f64 {
        self.weights
            .get(&(substitution, position))
            .copied()
            .unwrap_or(Self::DEFAULT_WEIGHT)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn substitutions(&self) -> Vec<Substitution> {
        let mut substitutions: Vec<_> = self.weights.keys().map(|(sub, _)| *sub).collect();
        substitutions.dedup();
        substitutions
    }

    pub fn positions(&self) -> Vec<isize> {
        let mut positions: Vec<_> = self.weights.keys().map(|(_, pos)| *pos).collect();
        positions.sort_unstable();
        positions.dedup();
        positions
    }

    fn entries(&self, substitution: Substitution) -> impl Iterator<Item = (isize, f64)> + '_ {
        self.weights
            .iter()
            .filter(move |((sub, _), _)| *sub == substitution)
            .map(|((_, pos), weight)| (*pos, *weight))
    }

    pub fn max_weight(&self, substitution: Substitution) -> f64 {
        self.entries(substitution)
            .map(|(_, weight)| weight)
            .fold(Self::DEFAULT_WEIGHT, f64::max)
    }

    pub fn total_weight(&self, substitution: Substitution) -> f64 {
        self.entries(substitution).map(|(_, weight)| weight).sum()
    }

    /// Positions with at least `cutoff` times the maximum weight of `substitution`.
    pub fn window(&self, substitution: Substitution, cutoff: f64) -> Option<(isize, isize)> {
        let max_weight = self.max_weight(substitution);
        if max_weight <= Self::DEFAULT_WEIGHT {
            return None;
        }

        let threshold = max_weight * cutoff;
        self.entries(substitution)
            .filter(|(_, weight)| *weight > 0.0 && *weight >= threshold)
            .fold(None, |window, (pos, _)| match window {
                None => Some((pos, pos)),
                Some((start, end)) => Some((isize::min(start, pos), isize::max(end, pos))),
            })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BaseEditor {
    crispr: CrisprNuclease,
    editing_strand: RelativeStrand,
    weights: EditingWeights,
}

impl BaseEditor {
    pub fn new(
        crispr: CrisprNuclease,
        editing_strand: RelativeStrand,
        weights: EditingWeights,
    ) -> Result<BaseEditor> {
        if weights.is_empty() {
            return Err(invalid_definition(
                "editing_weights",
                "base editor requires at least one editing weight",
            ));
        }

        debug!(
            "defined base editor {:?} editing the {} strand with {} weight(s)",
            crispr.name(),
            editing_strand,
            weights.len()
        );

        Ok(BaseEditor {
            crispr,
            editing_strand,
            weights,
        })
    }

    pub fn crispr(&self) -> &CrisprNuclease {
        &self.crispr
    }

    pub fn name(&self) -> &str {
        self.crispr.name()
    }

    pub fn editing_strand(&self) -> RelativeStrand {
        self.editing_strand
    }

    pub fn editing_weights(&self) -> &EditingWeights {
        &self.weights
    }

    pub fn editing_weight(&self, substitution: Substitution, position: isize) -> f64 {
        self.weights.get(substitution, position)
    }

    pub fn editing_window(&self, substitution: Substitution, cutoff: f64) -> Option<(isize, isize)> {
        self.weights.window(substitution, cutoff)
    }

    // Ties go to the substitution that sorts first
    pub fn dominant_substitution(&self) -> Option<Substitution> {
        let mut best: Option<(Substitution, f64)> = None;
        for substitution in self.weights.substitutions() {
            let total = self.weights.total_weight(substitution);
            match best {
                Some((_, weight)) if weight >= total => {}
                _ => best = Some((substitution, total)),
            }
        }

        best.map(|(substitution, _)| substitution)
    }
}

impl AsRef<CrisprNuclease> for BaseEditor {
    fn as_ref(&self) -> &CrisprNuclease {
        &self.crispr
    }
}
