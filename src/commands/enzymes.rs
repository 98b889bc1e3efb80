use std::io::Write;

use crate::args::EnzymesArgs;
use crate::common::{cell, open_file_or_stdout};
use crate::constants::DEFAULT_EDITING_CUTOFF;
use crate::crispr::RelativeStrand;
use crate::cutsite::{cut_sites, protospacer_cut_site, CutOptions, CutSites};
use crate::enzyme::{Capabilities, Enzyme};
use crate::errors::*;

fn describe_cut_sites(sites: &CutSites) -> String {
    match sites {
        CutSites::Single(value) => value.to_string(),
        CutSites::PerMotif(values) => values
            .iter()
            .map(|(motif, value)| format!("{}:{}", motif, value))
            .collect::<Vec<_>>()
            .join(","),
    }
}

fn describe_editing_window(enzyme: &Enzyme) -> Option<String> {
    let editor = enzyme.editor()?;
    let substitution = editor.dominant_substitution()?;
    let (start, end) = editor.editing_window(substitution, DEFAULT_EDITING_CUTOFF)?;

    Some(format!("{}:{}..{}", substitution, start, end))
}

fn write_enzyme(out: &mut dyn Write, enzyme: &Enzyme) -> Result<()> {
    let nuclease = enzyme.nuclease();
    let crispr = enzyme.crispr();
    let options = CutOptions::strand(enzyme.nicking_strand().unwrap_or(RelativeStrand::Original));

    let weights: Vec<String> = nuclease.weights().iter().map(|v| v.to_string()).collect();

    writeln!(
        out,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        enzyme.name(),
        enzyme.kind(),
        nuclease.target_type(),
        nuclease.motif_strings().join(","),
        weights.join(","),
        cell(crispr.map(|v| v.pam_side())),
        cell(crispr.map(|v| v.spacer_length())),
        cell(crispr.map(|v| v.spacer_gap())),
        cell(cut_sites(enzyme, options).ok().map(|v| describe_cut_sites(&v))),
        cell(protospacer_cut_site(enzyme, options).ok()),
        cell(describe_editing_window(enzyme)),
    )
    .chain_err(|| "failed to write output row")
}

pub fn main(args: &EnzymesArgs) -> Result<()> {
    let mut out = open_file_or_stdout(&args.output)?;
    writeln!(
        out,
        "Name\tKind\tTargetType\tMotifs\tWeights\tPamSide\tSpacerLength\tSpacerGap\tCutsite\tProtospacerCutsite\tEditingWindow"
    )
    .chain_err(|| "failed to write output header")?;

    for enzyme in Enzyme::all() {
        write_enzyme(&mut out, enzyme)?;
    }

    Ok(())
}
