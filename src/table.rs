use std::fmt::Debug;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use crate::errors::*;
use crate::ranges::{parse_strand, Anchor};

/// A non-empty, non-comment row of a tab-separated table, with its line number.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub line: usize,
    pub fields: Vec<String>,
}

pub fn read<P: AsRef<Path> + Debug>(path: &P) -> Result<Vec<Row>> {
    let file = File::open(path).chain_err(|| format!("failed to open table {:?}", path))?;
    let reader = BufReader::new(file);

    let mut table = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.chain_err(|| "error reading line from table")?;
        if !line.trim().is_empty() && !line.starts_with('#') {
            table.push(Row {
                line: idx + 1,
                fields: line.split('\t').map(|v| v.trim().to_string()).collect(),
            });
        }
    }

    Ok(table)
}

/// Parses a row of the form `contig<TAB>pam_site<TAB>strand`.
pub fn parse_anchor(row: &Row) -> Result<Anchor> {
    match row.fields.as_slice() {
        [chrom, pam_site, strand, ..] => {
            let pam_site = pam_site.parse::<i64>().map_err(|err| {
                Error::from(ErrorKind::InvalidAnchor(format!(
                    "invalid PAM site {:?} on line {}: {}",
                    pam_site, row.line, err
                )))
            })?;

            Ok(Anchor::new(chrom.as_str(), pam_site, parse_strand(strand)?))
        }
        _ => Err(ErrorKind::InvalidAnchor(format!(
            "expected contig, PAM site and strand on line {}",
            row.line
        ))
        .into()),
    }
}

/// A leading row whose position column is not a number is taken to be a header.
pub fn is_header(rows: &[Row]) -> bool {
    match rows.first() {
        Some(row) => row
            .fields
            .get(1)
            .map_or(false, |value| value.parse::<i64>().is_err()),
        None => false,
    }
}
