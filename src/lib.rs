// error_chain macro can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use(lazy_static)]
extern crate lazy_static;

pub mod args;
pub mod commands;
pub mod common;
pub mod constants;
pub mod crispr;
pub mod cutsite;
pub mod editor;
pub mod enzyme;
pub mod errors;
pub mod iupac;
pub mod motif;
pub mod nuclease;
pub mod pam;
pub mod progress;
pub mod ranges;
pub mod table;

pub use crate::crispr::{CrisprNickase, CrisprNuclease, PamSide, RelativeStrand};
pub use crate::cutsite::{cut_sites, get_cut_sites, CutOptions, CutSites};
pub use crate::editor::{BaseEditor, EditingWeights, Substitution};
pub use crate::enzyme::{Capabilities, Enzyme};
pub use crate::motif::{parse_motif, CutOffsets, Motif};
pub use crate::nuclease::{MotifSpecs, Nuclease, TargetType};
pub use crate::ranges::{
    get_pam_ranges, get_protospacer_ranges, get_spacer_ranges, get_target_ranges, Anchor,
    Interval,
};
