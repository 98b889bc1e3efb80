use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use bio::alphabets::dna;

use crate::crispr::CrisprNuclease;
use crate::errors::*;
use crate::motif::Motif;

/// Position of the PAM/PFS relative to the protospacer: upstream (5') as for
/// Cas12a, or downstream (3') as for Cas9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PamSide {
    FivePrime,
    ThreePrime,
}

impl PamSide {
    pub fn opposite(self) -> PamSide {
        match self {
            PamSide::FivePrime => PamSide::ThreePrime,
            PamSide::ThreePrime => PamSide::FivePrime,
        }
    }
}

impl FromStr for PamSide {
    type Err = Error;

    fn from_str(s: &str) -> Result<PamSide> {
        match s.to_ascii_lowercase().as_ref() {
            "5prime" | "5'" => Ok(PamSide::FivePrime),
            "3prime" | "3'" => Ok(PamSide::ThreePrime),
            _ => Err(invalid_definition(
                "pam_side",
                format!("expected '5prime' or '3prime', not {:?}", s),
            )),
        }
    }
}

impl fmt::Display for PamSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PamSide::FivePrime => write!(f, "5prime"),
            PamSide::ThreePrime => write!(f, "3prime"),
        }
    }
}

// Target sequences are read 5' to 3' on the protospacer strand, and contain
// the PAM/PFS, the spacer gap and the protospacer in the order implied by the
// PAM side. Sequences longer than required are read from their first base.

/// Indices of the PAM/PFS within a target sequence.
pub fn pam_indices(crispr: &CrisprNuclease) -> Range<usize> {
    let pam_len = crispr.pam_length();

    match crispr.pam_side() {
        PamSide::FivePrime => 0..pam_len,
        PamSide::ThreePrime => {
            let start = crispr.spacer_length() + crispr.spacer_gap();

            start..start + pam_len
        }
    }
}

/// Indices of the protospacer within a target sequence.
pub fn protospacer_indices(crispr: &CrisprNuclease) -> Range<usize> {
    match crispr.pam_side() {
        PamSide::FivePrime => {
            let start = crispr.pam_length() + crispr.spacer_gap();

            start..start + crispr.spacer_length()
        }
        PamSide::ThreePrime => 0..crispr.spacer_length(),
    }
}

fn check_length(target: &[u8], crispr: &CrisprNuclease) -> Result<()> {
    let required = crispr.target_length();
    if target.len() < required {
        Err(ErrorKind::SequenceTooShort(target.len(), required).into())
    } else {
        Ok(())
    }
}

pub fn extract_pam<C: AsRef<CrisprNuclease>>(target: &[u8], model: &C) -> Result<Vec<u8>> {
    let crispr = model.as_ref();
    check_length(target, crispr)?;

    Ok(target[pam_indices(crispr)].to_owned())
}

pub fn extract_protospacer<C: AsRef<CrisprNuclease>>(target: &[u8], model: &C) -> Result<Vec<u8>> {
    let crispr = model.as_ref();
    check_length(target, crispr)?;

    Ok(target[protospacer_indices(crispr)].to_owned())
}

/// The spacer equals the protospacer for DNA-targeting nucleases, and is its
/// reverse complement for RNA-targeting nucleases.
pub fn extract_spacer<C: AsRef<CrisprNuclease>>(target: &[u8], model: &C) -> Result<Vec<u8>> {
    let protospacer = extract_protospacer(target, model)?;

    if !model.as_ref().nuclease().is_rnase() {
        Ok(protospacer)
    } else if protospacer.iter().any(|&nuc| nuc == b'U' || nuc == b'u') {
        // dna::revcomp does not complement U
        let as_dna: Vec<u8> = protospacer.iter().map(|&nuc| uracil_to_thymine(nuc)).collect();

        Ok(dna::revcomp(&as_dna)
            .into_iter()
            .map(thymine_to_uracil)
            .collect())
    } else {
        Ok(dna::revcomp(&protospacer))
    }
}

fn uracil_to_thymine(nuc: u8) -> u8 {
    match nuc {
        b'U' => b'T',
        b'u' => b't',
        other => other,
    }
}

fn thymine_to_uracil(nuc: u8) -> u8 {
    match nuc {
        b'T' => b'U',
        b't' => b'u',
        other => other,
    }
}

fn extract_all<S, F>(targets: &[S], extract: F) -> Result<Vec<String>>
where
    S: AsRef<[u8]>,
    F: Fn(&[u8]) -> Result<Vec<u8>>,
{
    targets
        .iter()
        .map(|target| {
            extract(target.as_ref()).map(|seq| String::from_utf8_lossy(&seq).into_owned())
        })
        .collect()
}

pub fn extract_pam_from_target<S, C>(targets: &[S], model: &C) -> Result<Vec<String>>
where
    S: AsRef<[u8]>,
    C: AsRef<CrisprNuclease>,
{
    extract_all(targets, |target| extract_pam(target, model))
}

pub fn extract_protospacer_from_target<S, C>(targets: &[S], model: &C) -> Result<Vec<String>>
where
    S: AsRef<[u8]>,
    C: AsRef<CrisprNuclease>,
{
    extract_all(targets, |target| extract_protospacer(target, model))
}

pub fn extract_spacer_from_target<S, C>(targets: &[S], model: &C) -> Result<Vec<String>>
where
    S: AsRef<[u8]>,
    C: AsRef<CrisprNuclease>,
{
    extract_all(targets, |target| extract_spacer(target, model))
}

/// Returns the first PAM/PFS of the nuclease matching `pam`, and its weight.
pub fn matching_pam<'a, C: AsRef<CrisprNuclease>>(
    pam: &[u8],
    model: &'a C,
) -> Option<(&'a Motif, f64)> {
    let nuclease = model.as_ref().nuclease();

    nuclease
        .matching_motif(pam)
        .map(|(idx, motif)| (motif, nuclease.weight(idx)))
}
