// Nucleotides between the PAM/PFS and the protospacer unless stated otherwise
pub const DEFAULT_SPACER_GAP: usize = 0;

// Batches of at least this many anchors are computed on the rayon thread pool
pub const PARALLEL_THRESHOLD: usize = 4096;

// Fraction of the maximum editing weight used when reporting editing windows
pub const DEFAULT_EDITING_CUTOFF: f64 = 0.5;

pub const TABLE_MISSING_VALUE: &str = "NA";
