use std::io::Write;

use log::{info, warn};
use rayon::prelude::*;

use crate::args::RangesArgs;
use crate::common::{build_thread_pool, cell, open_file_or_stdout};
use crate::crispr::{CrisprNuclease, RelativeStrand};
use crate::cutsite::{cut_site_from_pam_site, primary_cut_site, CutOptions};
use crate::enzyme::{Capabilities, Enzyme};
use crate::errors::*;
use crate::progress;
use crate::ranges::{target_regions, Interval, TargetRegions};
use crate::table::{self, Row};

struct Located {
    regions: TargetRegions,
    cutsite: Option<i64>,
}

fn locate(row: &Row, enzyme: &Enzyme, crispr: &CrisprNuclease) -> Result<Located> {
    let anchor = table::parse_anchor(row)?;
    let regions = target_regions(&anchor, crispr)?;

    // Nickases are reported at the single strand they cut
    let options = CutOptions::strand(enzyme.nicking_strand().unwrap_or(RelativeStrand::Original));
    let cutsite = match primary_cut_site(enzyme, options) {
        Ok(offset) => Some(cut_site_from_pam_site(&anchor, offset)?),
        Err(Error(ErrorKind::UndefinedCutSite(..), _)) => None,
        Err(err) => return Err(err),
    };

    Ok(Located { regions, cutsite })
}

fn bounds(interval: Option<&Interval>) -> (String, String) {
    (
        cell(interval.map(|v| v.start)),
        cell(interval.map(|v| v.end)),
    )
}

fn write_row(out: &mut dyn Write, row: &Row, located: Option<&Located>) -> Result<()> {
    let field = |idx: usize| row.fields.get(idx).map(|v| v.as_str()).unwrap_or("");
    let regions = located.map(|v| &v.regions);
    let (pam_start, pam_end) = bounds(regions.map(|v| &v.pam));
    let (proto_start, proto_end) = bounds(regions.map(|v| &v.protospacer));
    let (target_start, target_end) = bounds(regions.map(|v| &v.target));

    writeln!(
        out,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        field(0),
        field(1),
        field(2),
        pam_start,
        pam_end,
        proto_start,
        proto_end,
        target_start,
        target_end,
        cell(located.and_then(|v| v.cutsite)),
    )
    .chain_err(|| "failed to write output row")
}

pub fn main(args: &RangesArgs) -> Result<()> {
    build_thread_pool(args.threads)?;

    let crispr = match args.enzyme.crispr() {
        Some(crispr) => crispr,
        None => return Err(format!("{} is not a CRISPR nuclease", args.enzyme.name()).into()),
    };

    info!("Reading PAM sites from {:?}", args.table);
    let mut rows = table::read(&args.table).chain_err(|| "failed to read table of PAM sites")?;
    if table::is_header(&rows) {
        rows.remove(0);
    }
    info!("  read {} PAM sites from table.", rows.len());

    let progress = progress::for_rows(rows.len(), "");
    let results: Vec<Result<Located>> = rows
        .par_iter()
        .map(|row| {
            let result = locate(row, &args.enzyme, crispr);
            progress.inc(1);
            result
        })
        .collect();
    progress.finish();

    let mut out = open_file_or_stdout(&args.output)?;
    writeln!(
        out,
        "Contig\tPamSite\tStrand\tPamStart\tPamEnd\tProtospacerStart\tProtospacerEnd\tTargetStart\tTargetEnd\tCutsite"
    )
    .chain_err(|| "failed to write output header")?;

    let mut failures = 0;
    for (row, result) in rows.iter().zip(results) {
        match result {
            Ok(located) => write_row(&mut out, row, Some(&located))?,
            Err(err) if args.strict => {
                return Err(err.chain_err(|| format!("failed to process line {}", row.line)));
            }
            Err(err) => {
                warn!("line {}: {}", row.line, err);
                failures += 1;
                write_row(&mut out, row, None)?;
            }
        }
    }

    if failures > 0 {
        warn!("{} of {} PAM sites could not be processed", failures, rows.len());
    }

    Ok(())
}
