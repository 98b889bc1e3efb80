use std::fmt;

use bio_types::annot::contig::Contig;
use bio_types::strand::{ReqStrand, Strand};
use log::debug;
use rayon::prelude::*;

use crate::constants::PARALLEL_THRESHOLD;
use crate::crispr::{CrisprNuclease, PamSide};
use crate::editor::{BaseEditor, Substitution};
use crate::errors::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Anchor {
    pub chrom: String,
    pub pam_site: i64,
    pub strand: Strand,
}

impl Anchor {
    pub fn new<S: Into<String>>(chrom: S, pam_site: i64, strand: Strand) -> Anchor {
        Anchor {
            chrom: chrom.into(),
            pam_site,
            strand,
        }
    }

    pub fn forward<S: Into<String>>(chrom: S, pam_site: i64) -> Anchor {
        Self::new(chrom, pam_site, Strand::Forward)
    }

    pub fn reverse<S: Into<String>>(chrom: S, pam_site: i64) -> Anchor {
        Self::new(chrom, pam_site, Strand::Reverse)
    }

    pub fn zip<S: AsRef<str>>(
        chroms: &[S],
        pam_sites: &[i64],
        strands: &[Strand],
    ) -> Result<Vec<Anchor>> {
        if chroms.len() != pam_sites.len() || chroms.len() != strands.len() {
            return Err(ErrorKind::InvalidAnchor(format!(
                "got {} contigs, {} PAM sites and {} strands",
                chroms.len(),
                pam_sites.len(),
                strands.len()
            ))
            .into());
        }

        Ok(chroms
            .iter()
            .zip(pam_sites.iter())
            .zip(strands.iter())
            .map(|((chrom, &pam_site), &strand)| Anchor::new(chrom.as_ref(), pam_site, strand))
            .collect())
    }

    pub fn req_strand(&self) -> Result<ReqStrand> {
        match self.strand {
            Strand::Forward => Ok(ReqStrand::Forward),
            Strand::Reverse => Ok(ReqStrand::Reverse),
            Strand::Unknown => Err(ErrorKind::InvalidAnchor(format!(
                "PAM site {}:{} has no strand",
                self.chrom, self.pam_site
            ))
            .into()),
        }
    }
}

pub fn parse_strand(value: &str) -> Result<Strand> {
    match value {
        "+" => Ok(Strand::Forward),
        "-" => Ok(Strand::Reverse),
        _ => Err(ErrorKind::InvalidAnchor(format!("invalid strand {:?}", value)).into()),
    }
}

// Closed, 1-based
#[derive(Clone, Debug, PartialEq)]
pub struct Interval {
    pub chrom: String,
    pub start: i64,
    pub end: i64,
    pub strand: ReqStrand,
}

impl Interval {
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (i128::from(self.end) - i128::from(self.start) + 1) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, pos: i64) -> bool {
        self.start <= pos && pos <= self.end
    }

    pub fn to_contig(&self) -> Contig<String, ReqStrand> {
        Contig::new(
            self.chrom.clone(),
            self.start.saturating_sub(1) as isize,
            self.len(),
            self.strand,
        )
    }
}

fn strand_symbol(strand: ReqStrand) -> char {
    match strand {
        ReqStrand::Forward => '+',
        ReqStrand::Reverse => '-',
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}({})",
            self.chrom,
            self.start,
            self.end,
            strand_symbol(self.strand)
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TargetRegions {
    pub pam: Interval,
    pub protospacer: Interval,
    pub spacer: Interval,
    pub target: Interval,
}

#[derive(Clone, Copy, Debug)]
struct Geometry {
    pam_length: i64,
    spacer_length: i64,
    spacer_gap: i64,
    pam_side: PamSide,
}

impl Geometry {
    fn of(crispr: &CrisprNuclease) -> Geometry {
        Geometry {
            pam_length: crispr.pam_length() as i64,
            spacer_length: crispr.spacer_length() as i64,
            spacer_gap: crispr.spacer_gap() as i64,
            pam_side: crispr.pam_side(),
        }
    }

    // Offsets of the first and last base, read 5' to 3' from the PAM site
    fn pam(&self) -> (i64, i64) {
        (0, self.pam_length - 1)
    }

    fn protospacer(&self) -> (i64, i64) {
        let (len, gap) = (self.spacer_length, self.spacer_gap);

        match self.pam_side {
            PamSide::ThreePrime => (-(gap + len), -(gap + 1)),
            PamSide::FivePrime => {
                let start = self.pam_length + gap;

                (start, start + len - 1)
            }
        }
    }

    fn target(&self, pam: (i64, i64), protospacer: (i64, i64)) -> Result<(i64, i64)> {
        for &(start, end) in &[pam, protospacer] {
            if start > end {
                return Err(ErrorKind::InvariantViolation(format!(
                    "interval {}-{} ends before it starts",
                    start, end
                ))
                .into());
            }
        }

        let (first, second) = if pam.0 <= protospacer.0 {
            (pam, protospacer)
        } else {
            (protospacer, pam)
        };

        let gap = i128::from(second.0) - i128::from(first.1) - 1;
        if gap != i128::from(self.spacer_gap) {
            return Err(ErrorKind::InvariantViolation(format!(
                "PAM {}-{} and protospacer {}-{} are separated by {} bases, not {}",
                pam.0, pam.1, protospacer.0, protospacer.1, gap, self.spacer_gap
            ))
            .into());
        }

        Ok((first.0, second.1))
    }
}

pub(crate) fn position(anchor: &Anchor, strand: ReqStrand, offset: i64) -> Result<i64> {
    let pos = match strand {
        ReqStrand::Forward => anchor.pam_site.checked_add(offset),
        ReqStrand::Reverse => anchor.pam_site.checked_sub(offset),
    };

    pos.ok_or_else(|| {
        ErrorKind::InvalidAnchor(format!(
            "position {} bases from PAM site {}:{} is out of range",
            offset, anchor.chrom, anchor.pam_site
        ))
        .into()
    })
}

fn locate(anchor: &Anchor, strand: ReqStrand, (first, last): (i64, i64)) -> Result<(i64, i64)> {
    let first = position(anchor, strand, first)?;
    let last = position(anchor, strand, last)?;

    Ok((i64::min(first, last), i64::max(first, last)))
}

fn interval(anchor: &Anchor, (start, end): (i64, i64), strand: ReqStrand) -> Interval {
    Interval {
        chrom: anchor.chrom.clone(),
        start,
        end,
        strand,
    }
}

pub fn pam_range<C: AsRef<CrisprNuclease>>(anchor: &Anchor, model: &C) -> Result<Interval> {
    let strand = anchor.req_strand()?;
    let bounds = locate(anchor, strand, Geometry::of(model.as_ref()).pam())?;

    Ok(interval(anchor, bounds, strand))
}

pub fn protospacer_range<C: AsRef<CrisprNuclease>>(anchor: &Anchor, model: &C) -> Result<Interval> {
    let strand = anchor.req_strand()?;
    let bounds = locate(anchor, strand, Geometry::of(model.as_ref()).protospacer())?;

    Ok(interval(anchor, bounds, strand))
}

pub fn spacer_range<C: AsRef<CrisprNuclease>>(anchor: &Anchor, model: &C) -> Result<Interval> {
    protospacer_range(anchor, model)
}

pub fn target_range<C: AsRef<CrisprNuclease>>(anchor: &Anchor, model: &C) -> Result<Interval> {
    Ok(target_regions(anchor, model)?.target)
}

pub fn target_regions<C: AsRef<CrisprNuclease>>(anchor: &Anchor, model: &C) -> Result<TargetRegions> {
    let strand = anchor.req_strand()?;
    let geometry = Geometry::of(model.as_ref());

    let pam = locate(anchor, strand, geometry.pam())?;
    let protospacer = locate(anchor, strand, geometry.protospacer())?;
    let target = geometry.target(pam, protospacer)?;

    Ok(TargetRegions {
        pam: interval(anchor, pam, strand),
        protospacer: interval(anchor, protospacer, strand),
        spacer: interval(anchor, protospacer, strand),
        target: interval(anchor, target, strand),
    })
}

/// Results are in the order of the anchors.
pub fn map_anchors<T, F>(anchors: &[Anchor], func: F) -> Vec<Result<T>>
where
    T: Send,
    F: Fn(&Anchor) -> Result<T> + Sync + Send,
{
    if anchors.len() >= PARALLEL_THRESHOLD {
        debug!("computing {} anchors in parallel", anchors.len());
        anchors.par_iter().map(|anchor| func(anchor)).collect()
    } else {
        anchors.iter().map(|anchor| func(anchor)).collect()
    }
}

pub fn get_pam_ranges_each<C>(anchors: &[Anchor], model: &C) -> Vec<Result<Interval>>
where
    C: AsRef<CrisprNuclease> + Sync,
{
    map_anchors(anchors, |anchor| pam_range(anchor, model))
}

pub fn get_protospacer_ranges_each<C>(anchors: &[Anchor], model: &C) -> Vec<Result<Interval>>
where
    C: AsRef<CrisprNuclease> + Sync,
{
    map_anchors(anchors, |anchor| protospacer_range(anchor, model))
}

pub fn get_spacer_ranges_each<C>(anchors: &[Anchor], model: &C) -> Vec<Result<Interval>>
where
    C: AsRef<CrisprNuclease> + Sync,
{
    map_anchors(anchors, |anchor| spacer_range(anchor, model))
}

pub fn get_target_ranges_each<C>(anchors: &[Anchor], model: &C) -> Vec<Result<Interval>>
where
    C: AsRef<CrisprNuclease> + Sync,
{
    map_anchors(anchors, |anchor| target_range(anchor, model))
}

pub fn get_pam_ranges<C>(anchors: &[Anchor], model: &C) -> Result<Vec<Interval>>
where
    C: AsRef<CrisprNuclease> + Sync,
{
    get_pam_ranges_each(anchors, model).into_iter().collect()
}

pub fn get_protospacer_ranges<C>(anchors: &[Anchor], model: &C) -> Result<Vec<Interval>>
where
    C: AsRef<CrisprNuclease> + Sync,
{
    get_protospacer_ranges_each(anchors, model).into_iter().collect()
}

pub fn get_spacer_ranges<C>(anchors: &[Anchor], model: &C) -> Result<Vec<Interval>>
where
    C: AsRef<CrisprNuclease> + Sync,
{
    get_spacer_ranges_each(anchors, model).into_iter().collect()
}

pub fn get_target_ranges<C>(anchors: &[Anchor], model: &C) -> Result<Vec<Interval>>
where
    C: AsRef<CrisprNuclease> + Sync,
{
    get_target_ranges_each(anchors, model).into_iter().collect()
}

pub fn get_target_regions<C>(anchors: &[Anchor], model: &C) -> Result<Vec<TargetRegions>>
where
    C: AsRef<CrisprNuclease> + Sync,
{
    map_anchors(anchors, |anchor| target_regions(anchor, model))
        .into_iter()
        .collect()
}

pub fn editing_window_range(
    anchor: &Anchor,
    editor: &BaseEditor,
    substitution: Substitution,
    cutoff: f64,
) -> Result<Interval> {
    let strand = anchor.req_strand()?;
    let (first, last) = match editor.editing_window(substitution, cutoff) {
        Some((first, last)) => (first as i64, last as i64),
        None => {
            return Err(invalid_definition(
                "editing_weights",
                format!("{} never makes {} edits", editor.name(), substitution),
            ))
        }
    };

    let bounds = locate(anchor, strand, (first, last))?;

    Ok(interval(anchor, bounds, strand))
}

pub fn get_editing_window_ranges(
    anchors: &[Anchor],
    editor: &BaseEditor,
    substitution: Substitution,
    cutoff: f64,
) -> Result<Vec<Interval>> {
    map_anchors(anchors, |anchor| {
        editing_window_range(anchor, editor, substitution, cutoff)
    })
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> Geometry {
        Geometry {
            pam_length: 3,
            spacer_length: 20,
            spacer_gap: 0,
            pam_side: PamSide::ThreePrime,
        }
    }

    fn is_invariant_violation(result: Result<(i64, i64)>) -> bool {
        match result {
            Err(Error(ErrorKind::InvariantViolation(_), _)) => true,
            _ => false,
        }
    }

    #[test]
    fn test_target_of_adjacent_regions() {
        assert_eq!(geometry().target((200, 202), (180, 199)).unwrap(), (180, 202));
        assert_eq!(geometry().target((198, 200), (201, 220)).unwrap(), (198, 220));
    }

    #[test]
    fn test_target_of_separated_regions() {
        assert!(is_invariant_violation(geometry().target((200, 202), (170, 189))));
        assert!(is_invariant_violation(geometry().target((200, 202), (190, 209))));
    }

    #[test]
    fn test_target_of_inverted_region() {
        assert!(is_invariant_violation(geometry().target((202, 200), (180, 199))));
    }

    #[test]
    fn test_target_at_coordinate_limits() {
        let pam = (i64::max_value() - 2, i64::max_value());

        assert!(is_invariant_violation(geometry().target(pam, (i64::min_value(), -1))));
    }
}
