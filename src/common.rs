use std::fmt::Display;
use std::fs::File;
use std::io;
use std::io::Write;

use crate::constants::TABLE_MISSING_VALUE;
use crate::errors::*;

pub fn open_file_or_stdout(file: &Option<String>) -> Result<Box<dyn Write>> {
    if let Some(path) = file {
        let handle =
            File::create(path).chain_err(|| format!("could not create output file {:?}", path))?;
        let writer = io::BufWriter::new(handle);

        Ok(Box::new(writer))
    } else {
        Ok(Box::new(io::stdout()))
    }
}

pub fn build_thread_pool(threads: usize) -> Result<()> {
    ::rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .chain_err(|| "failed to build thread pool")
}

/// Formats a value for a table cell, using NA for missing values.
pub fn cell<T: Display>(value: Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => TABLE_MISSING_VALUE.to_owned(),
    }
}
