use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::errors::*;
use crate::motif::Motif;
use crate::nuclease::{Nuclease, TargetType};
pub use crate::pam::PamSide;

/// Strand relative to the protospacer: the strand carrying the protospacer
/// sequence (`Original`) or its complement (`Opposite`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelativeStrand {
    Original,
    Opposite,
}

impl FromStr for RelativeStrand {
    type Err = Error;

    fn from_str(s: &str) -> Result<RelativeStrand> {
        match s.to_ascii_lowercase().as_ref() {
            "original" => Ok(RelativeStrand::Original),
            "opposite" => Ok(RelativeStrand::Opposite),
            _ => Err(invalid_definition(
                "strand",
                format!("expected 'original' or 'opposite', not {:?}", s),
            )),
        }
    }
}

impl fmt::Display for RelativeStrand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RelativeStrand::Original => write!(f, "original"),
            RelativeStrand::Opposite => write!(f, "opposite"),
        }
    }
}

/// A CRISPR nuclease; the motifs of the underlying nuclease are its PAM (DNA)
/// or PFS (RNA) sequences, with cut offsets relative to the first PAM base.
#[derive(Clone, Debug, PartialEq)]
pub struct CrisprNuclease {
    nuclease: Nuclease,
    pam_side: PamSide,
    spacer_length: usize,
    spacer_gap: usize,
}

impl CrisprNuclease {
    pub fn new(
        nuclease: Nuclease,
        pam_side: PamSide,
        spacer_length: usize,
        spacer_gap: usize,
    ) -> Result<CrisprNuclease> {
        if spacer_length == 0 {
            return Err(invalid_definition(
                "spacer_length",
                "spacer length must be positive",
            ));
        }

        debug!(
            "defined CRISPR nuclease {:?} with {} PAM, spacer length {} and gap {}",
            nuclease.name(),
            pam_side,
            spacer_length,
            spacer_gap
        );

        Ok(CrisprNuclease {
            nuclease,
            pam_side,
            spacer_length,
            spacer_gap,
        })
    }

    pub fn nuclease(&self) -> &Nuclease {
        &self.nuclease
    }

    pub fn name(&self) -> &str {
        self.nuclease.name()
    }

    pub fn target_type(&self) -> TargetType {
        self.nuclease.target_type()
    }

    pub fn pam_side(&self) -> PamSide {
        self.pam_side
    }

    /// Side of the PAM/PFS on which the protospacer is found.
    pub fn spacer_side(&self) -> PamSide {
        self.pam_side.opposite()
    }

    pub fn spacer_length(&self) -> usize {
        self.spacer_length
    }

    pub fn spacer_gap(&self) -> usize {
        self.spacer_gap
    }

    pub fn has_spacer_gap(&self) -> bool {
        self.spacer_gap > 0
    }

    pub fn pams(&self) -> &[Motif] {
        self.nuclease.motifs()
    }

    pub fn primary_pam(&self) -> &Motif {
        self.nuclease.primary_motif()
    }

    /// Length of the primary PAM/PFS.
    pub fn pam_length(&self) -> usize {
        self.primary_pam().len()
    }

    /// Combined length of PAM/PFS, gap and protospacer.
    pub fn target_length(&self) -> usize {
        self.pam_length() + self.spacer_gap + self.spacer_length
    }

    pub fn with_name(&self, name: &str) -> Result<CrisprNuclease> {
        Ok(CrisprNuclease {
            nuclease: self.nuclease.with_name(name)?,
            ..self.clone()
        })
    }

    pub fn with_spacer_length(&self, spacer_length: usize) -> Result<CrisprNuclease> {
        CrisprNuclease::new(
            self.nuclease.clone(),
            self.pam_side,
            spacer_length,
            self.spacer_gap,
        )
    }
}

impl AsRef<CrisprNuclease> for CrisprNuclease {
    fn as_ref(&self) -> &CrisprNuclease {
        self
    }
}

impl AsRef<Nuclease> for CrisprNuclease {
    fn as_ref(&self) -> &Nuclease {
        &self.nuclease
    }
}

/// A CRISPR nuclease that cleaves only one of the two strands.
#[derive(Clone, Debug, PartialEq)]
pub struct CrisprNickase {
    crispr: CrisprNuclease,
    nicking_strand: RelativeStrand,
}

impl CrisprNickase {
    pub fn new(crispr: CrisprNuclease, nicking_strand: RelativeStrand) -> CrisprNickase {
        CrisprNickase {
            crispr,
            nicking_strand,
        }
    }

    pub fn crispr(&self) -> &CrisprNuclease {
        &self.crispr
    }

    pub fn nicking_strand(&self) -> RelativeStrand {
        self.nicking_strand
    }

    pub fn name(&self) -> &str {
        self.crispr.name()
    }
}

impl AsRef<CrisprNuclease> for CrisprNickase {
    fn as_ref(&self) -> &CrisprNuclease {
        &self.crispr
    }
}
