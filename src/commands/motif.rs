use std::io::Write;

use crate::args::MotifArgs;
use crate::common::{cell, open_file_or_stdout};
use crate::errors::*;
use crate::motif::parse_motif;

pub fn main(args: &MotifArgs) -> Result<()> {
    let mut out = open_file_or_stdout(&args.output)?;
    writeln!(out, "Notation\tSequence\tForward\tReverse\tOverhang\tCanonical")
        .chain_err(|| "failed to write output header")?;

    for notation in &args.notations {
        let motif = parse_motif(notation)?;
        let cut = motif.cut();

        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            notation,
            motif.to_string(),
            cell(cut.map(|v| v.forward)),
            cell(cut.map(|v| v.reverse)),
            cell(cut.map(|v| v.overhang())),
            cell(motif.notation()),
        )
        .chain_err(|| "failed to write output row")?;
    }

    Ok(())
}
