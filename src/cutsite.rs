use crate::crispr::{PamSide, RelativeStrand};
use crate::enzyme::Capabilities;
use crate::errors::*;
use crate::motif::{CutOffsets, Motif};
use crate::ranges::{map_anchors, position, Anchor};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutOptions {
    pub strand: RelativeStrand,
    // Single value if every motif agrees
    pub combine: bool,
    pub midpoint: bool,
}

impl Default for CutOptions {
    fn default() -> CutOptions {
        CutOptions {
            strand: RelativeStrand::Original,
            combine: true,
            midpoint: false,
        }
    }
}

impl CutOptions {
    pub fn strand(strand: RelativeStrand) -> CutOptions {
        CutOptions {
            strand,
            ..Default::default()
        }
    }

    pub fn midpoint() -> CutOptions {
        CutOptions {
            midpoint: true,
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CutSites {
    Single(isize),
    PerMotif(Vec<(String, isize)>),
}

impl CutSites {
    pub fn values(&self) -> Vec<isize> {
        match self {
            CutSites::Single(value) => vec![*value],
            CutSites::PerMotif(values) => values.iter().map(|(_, value)| *value).collect(),
        }
    }

    pub fn single(&self) -> Option<isize> {
        match self {
            CutSites::Single(value) => Some(*value),
            CutSites::PerMotif(_) => None,
        }
    }
}

fn undefined(name: &str, reason: String) -> Error {
    ErrorKind::UndefinedCutSite(name.into(), reason).into()
}

fn motif_offsets(name: &str, motif: &Motif) -> Result<CutOffsets> {
    motif.cut().ok_or_else(|| {
        undefined(
            name,
            format!("motif {} does not specify a cut site", motif.to_string()),
        )
    })
}

// Nickases only cut one strand, which is also their midpoint
fn strand_offset<E: Capabilities + ?Sized>(
    enzyme: &E,
    offsets: CutOffsets,
    options: CutOptions,
) -> Result<isize> {
    let select = |strand| match strand {
        RelativeStrand::Original => offsets.forward,
        RelativeStrand::Opposite => offsets.reverse,
    };

    match enzyme.nicking_strand() {
        Some(nicked) if options.midpoint => Ok(select(nicked)),
        Some(nicked) if nicked != options.strand => Err(undefined(
            enzyme.nuclease().name(),
            format!("nickase does not cut the {} strand", options.strand),
        )),
        _ if options.midpoint => Ok(offsets.midpoint()),
        _ => Ok(select(options.strand)),
    }
}

pub fn cut_sites<E: Capabilities + ?Sized>(enzyme: &E, options: CutOptions) -> Result<CutSites> {
    let nuclease = enzyme.nuclease();

    let mut sites = Vec::with_capacity(nuclease.motifs().len());
    for motif in nuclease.motifs() {
        let offsets = motif_offsets(nuclease.name(), motif)?;
        let offset = strand_offset(enzyme, offsets, options)?;

        sites.push((motif.to_string().into_owned(), offset));
    }

    let first = sites.first().map(|(_, offset)| *offset);
    match first {
        Some(first) if options.combine && sites.iter().all(|(_, v)| *v == first) => {
            Ok(CutSites::Single(first))
        }
        _ => Ok(CutSites::PerMotif(sites)),
    }
}

pub fn primary_cut_site<E: Capabilities + ?Sized>(enzyme: &E, options: CutOptions) -> Result<isize> {
    let nuclease = enzyme.nuclease();
    let offsets = motif_offsets(nuclease.name(), nuclease.primary_motif())?;

    strand_offset(enzyme, offsets, options)
}

/// Number of protospacer bases 5' of the primary cut site.
pub fn protospacer_cut_site<E: Capabilities + ?Sized>(
    enzyme: &E,
    options: CutOptions,
) -> Result<isize> {
    let crispr = match enzyme.crispr() {
        Some(crispr) => crispr,
        None => {
            return Err(invalid_definition(
                "pam_side",
                format!("{} is not a CRISPR nuclease", enzyme.nuclease().name()),
            ))
        }
    };

    let offset = primary_cut_site(enzyme, options)?;
    let pam_length = crispr.pam_length() as isize;
    let spacer_length = crispr.spacer_length() as isize;
    let spacer_gap = crispr.spacer_gap() as isize;

    Ok(match crispr.pam_side() {
        PamSide::ThreePrime => offset + spacer_gap + spacer_length,
        PamSide::FivePrime => offset - pam_length - spacer_gap,
    })
}

pub fn cut_site_from_pam_site(anchor: &Anchor, offset: isize) -> Result<i64> {
    position(anchor, anchor.req_strand()?, offset as i64)
}

pub fn get_cut_sites_each<E>(anchors: &[Anchor], enzyme: &E, options: CutOptions) -> Vec<Result<i64>>
where
    E: Capabilities + Sync + ?Sized,
{
    map_anchors(anchors, |anchor| {
        cut_site_from_pam_site(anchor, primary_cut_site(enzyme, options)?)
    })
}

pub fn get_cut_sites<E>(anchors: &[Anchor], enzyme: &E, options: CutOptions) -> Result<Vec<i64>>
where
    E: Capabilities + Sync + ?Sized,
{
    let offset = primary_cut_site(enzyme, options)?;

    map_anchors(anchors, |anchor| cut_site_from_pam_site(anchor, offset))
        .into_iter()
        .collect()
}
