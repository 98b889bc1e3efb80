use std::io::Write;

use log::{info, warn};

use crate::args::ExtractArgs;
use crate::common::{cell, open_file_or_stdout};
use crate::crispr::CrisprNuclease;
use crate::enzyme::Capabilities;
use crate::errors::*;
use crate::iupac;
use crate::pam::{extract_pam, extract_protospacer, extract_spacer, matching_pam};
use crate::table;

struct Extracted {
    pam: Vec<u8>,
    protospacer: Vec<u8>,
    spacer: Vec<u8>,
}

fn extract(target: &[u8], crispr: &CrisprNuclease) -> Result<Extracted> {
    Ok(Extracted {
        pam: extract_pam(target, crispr)?,
        protospacer: extract_protospacer(target, crispr)?,
        spacer: extract_spacer(target, crispr)?,
    })
}

fn write_row(
    out: &mut dyn Write,
    target: &str,
    extracted: Option<&Extracted>,
    crispr: &CrisprNuclease,
) -> Result<()> {
    let text = |seq: &[u8]| String::from_utf8_lossy(seq).into_owned();
    let matched = extracted.and_then(|v| matching_pam(&v.pam, crispr));

    writeln!(
        out,
        "{}\t{}\t{}\t{}\t{}\t{}",
        target,
        cell(extracted.map(|v| text(&v.pam))),
        cell(extracted.map(|v| text(&v.protospacer))),
        cell(extracted.map(|v| text(&v.spacer))),
        cell(matched.map(|(motif, _)| motif.to_string().into_owned())),
        cell(matched.map(|(_, weight)| weight)),
    )
    .chain_err(|| "failed to write output row")
}

pub fn main(args: &ExtractArgs) -> Result<()> {
    let crispr = match args.enzyme.crispr() {
        Some(crispr) => crispr,
        None => return Err(format!("{} is not a CRISPR nuclease", args.enzyme.name()).into()),
    };

    info!("Reading target sequences from {:?}", args.table);
    let rows = table::read(&args.table).chain_err(|| "failed to read table of targets")?;
    info!("  read {} rows from table.", rows.len());

    let mut out = open_file_or_stdout(&args.output)?;
    writeln!(out, "Target\tPam\tProtospacer\tSpacer\tMatchedPam\tPamWeight")
        .chain_err(|| "failed to write output header")?;

    for (idx, row) in rows.iter().enumerate() {
        let target = row.fields.first().map(|v| v.as_str()).unwrap_or("");
        let upper = target.to_ascii_uppercase();

        // Not a sequence; either a header or (presumably) a malformed row
        if !iupac::is_valid_sequence(upper.as_bytes()) || upper.is_empty() {
            if idx > 0 && args.strict {
                return Err(format!("line {}: {:?} is not a nucleotide sequence", row.line, target).into());
            } else if idx > 0 {
                warn!("line {}: {:?} is not a nucleotide sequence", row.line, target);
                write_row(&mut out, target, None, crispr)?;
            }

            continue;
        }

        match extract(upper.as_bytes(), crispr) {
            Ok(extracted) => write_row(&mut out, target, Some(&extracted), crispr)?,
            Err(err) if args.strict => {
                return Err(err.chain_err(|| format!("failed to process line {}", row.line)));
            }
            Err(err) => {
                warn!("line {}: {}", row.line, err);
                write_row(&mut out, target, None, crispr)?;
            }
        }
    }

    Ok(())
}
