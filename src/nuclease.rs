use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::errors::*;
use crate::motif::{parse_motif, Motif};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetType {
    Dna,
    Rna,
}

impl FromStr for TargetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<TargetType> {
        match s.to_ascii_uppercase().as_ref() {
            "DNA" => Ok(TargetType::Dna),
            "RNA" => Ok(TargetType::Rna),
            _ => Err(invalid_definition(
                "target_type",
                format!("expected DNA or RNA, not {:?}", s),
            )),
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TargetType::Dna => write!(f, "DNA"),
            TargetType::Rna => write!(f, "RNA"),
        }
    }
}

/// Motifs supplied either as compact notation or as already parsed records.
#[derive(Clone, Debug)]
pub enum MotifSpecs {
    Notation(Vec<String>),
    Parsed(Vec<Motif>),
}

impl MotifSpecs {
    pub fn notation<S: AsRef<str>>(motifs: &[S]) -> MotifSpecs {
        MotifSpecs::Notation(motifs.iter().map(|v| v.as_ref().to_owned()).collect())
    }

    fn into_motifs(self) -> Result<Vec<Motif>> {
        match self {
            MotifSpecs::Notation(motifs) => motifs.iter().map(|v| parse_motif(v)).collect(),
            MotifSpecs::Parsed(motifs) => Ok(motifs),
        }
    }
}

/// Names and metadata keys must be non-empty, single-line strings.
fn validate_label(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(invalid_definition(field, "value is empty"))
    } else if value.contains(|c| c == '\n' || c == '\r') {
        Err(invalid_definition(field, "value spans multiple lines"))
    } else {
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Nuclease {
    name: String,
    target_type: TargetType,
    motifs: Vec<Motif>,
    // Empty (uniform), a single shared weight, or one weight per motif
    weights: Vec<f64>,
    metadata: BTreeMap<String, String>,
}

impl Nuclease {
    pub fn new(
        name: &str,
        target_type: TargetType,
        motifs: MotifSpecs,
        weights: Option<Vec<f64>>,
        metadata: BTreeMap<String, String>,
    ) -> Result<Nuclease> {
        validate_label("name", name)?;
        for key in metadata.keys() {
            validate_label("metadata", key)?;
        }

        let motifs = motifs.into_motifs()?;
        if motifs.is_empty() {
            return Err(invalid_definition("motifs", "at least one motif is required"));
        }

        let weights = weights.unwrap_or_default();
        if weights.len() > 1 && weights.len() != motifs.len() {
            return Err(invalid_definition(
                "weights",
                format!(
                    "{} weights given for {} motifs",
                    weights.len(),
                    motifs.len()
                ),
            ));
        } else if weights.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(invalid_definition(
                "weights",
                "weights must be finite, non-negative numbers",
            ));
        }

        debug!(
            "defined {} nuclease {:?} with {} motif(s)",
            target_type,
            name,
            motifs.len()
        );

        Ok(Nuclease {
            name: name.to_owned(),
            target_type,
            motifs,
            weights,
            metadata,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target_type(&self) -> TargetType {
        self.target_type
    }

    pub fn is_rnase(&self) -> bool {
        self.target_type == TargetType::Rna
    }

    pub fn motifs(&self) -> &[Motif] {
        &self.motifs
    }

    /// Motifs in compact notation, falling back to the bare sequence for
    /// offsets that the notation cannot express.
    pub fn motif_strings(&self) -> Vec<String> {
        self.motifs
            .iter()
            .map(|motif| {
                motif
                    .notation()
                    .unwrap_or_else(|| motif.to_string().into_owned())
            })
            .collect()
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// Relative cleavage probability of the motif at `idx`; 1 unless weights
    /// were supplied.
    pub fn weight(&self, idx: usize) -> f64 {
        match self.weights.len() {
            0 => 1.0,
            1 => self.weights[0],
            _ => self.weights[idx],
        }
    }

    pub fn weights(&self) -> Vec<f64> {
        (0..self.motifs.len()).map(|idx| self.weight(idx)).collect()
    }

    pub fn has_weights(&self) -> bool {
        !self.weights.is_empty()
    }

    /// Index of the motif with the greatest weight. Ties are resolved in
    /// favor of the motif listed first.
    pub fn primary_index(&self) -> usize {
        let mut best = 0;
        for idx in 1..self.motifs.len() {
            if self.weight(idx) > self.weight(best) {
                best = idx;
            }
        }

        best
    }

    pub fn primary_motif(&self) -> &Motif {
        &self.motifs[self.primary_index()]
    }

    /// First motif matching `candidate` under IUPAC rules, with its index.
    pub fn matching_motif(&self, candidate: &[u8]) -> Option<(usize, &Motif)> {
        self.motifs
            .iter()
            .enumerate()
            .find(|(_, motif)| motif.matches(candidate))
    }

    pub fn with_name(&self, name: &str) -> Result<Nuclease> {
        validate_label("name", name)?;

        Ok(Nuclease {
            name: name.to_owned(),
            ..self.clone()
        })
    }
}

impl AsRef<Nuclease> for Nuclease {
    fn as_ref(&self) -> &Nuclease {
        self
    }
}
