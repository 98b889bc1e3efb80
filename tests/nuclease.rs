extern crate crisprbase;

use std::collections::BTreeMap;

use crisprbase::crispr::{CrisprNickase, CrisprNuclease, PamSide, RelativeStrand};
use crisprbase::errors::{ErrorKind, Result};
use crisprbase::motif::{parse_motif, CutOffsets, Motif};
use crisprbase::nuclease::{MotifSpecs, Nuclease, TargetType};

fn nuclease(name: &str, motifs: &[&str], weights: Option<Vec<f64>>) -> Result<Nuclease> {
    Nuclease::new(
        name,
        TargetType::Dna,
        MotifSpecs::notation(motifs),
        weights,
        BTreeMap::new(),
    )
}

fn assert_invalid_field<T: std::fmt::Debug>(result: Result<T>, expected: &str) {
    match result.unwrap_err().kind() {
        ErrorKind::InvalidNucleaseDefinition(field, _) => assert_eq!(field, expected),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_uniform_weights_by_default() {
    let nuclease = nuclease("Cas9", &["NGG", "NAG"], None).unwrap();

    assert!(!nuclease.has_weights());
    assert_eq!(nuclease.weights(), vec![1.0, 1.0]);
    assert_eq!(nuclease.weight(1), 1.0);
}

#[test]
fn test_single_weight_applies_to_every_motif() {
    let nuclease = nuclease("Cas9", &["NGG", "NAG"], Some(vec![0.5])).unwrap();

    assert_eq!(nuclease.weights(), vec![0.5, 0.5]);
}

#[test]
fn test_weight_count_must_match_motifs() {
    let result = nuclease("Cas9", &["NGG", "NAG", "NGA"], Some(vec![1.0, 0.2]));

    assert_invalid_field(result, "weights");
}

#[test]
fn test_weights_must_be_non_negative() {
    assert_invalid_field(nuclease("Cas9", &["NGG"], Some(vec![-1.0])), "weights");
    assert_invalid_field(nuclease("Cas9", &["NGG"], Some(vec![std::f64::NAN])), "weights");
}

#[test]
fn test_name_is_required() {
    assert_invalid_field(nuclease("", &["NGG"], None), "name");
    assert_invalid_field(nuclease("  ", &["NGG"], None), "name");
    assert_invalid_field(nuclease("Cas\n9", &["NGG"], None), "name");
}

#[test]
fn test_metadata_keys_are_validated() {
    let mut metadata = BTreeMap::new();
    metadata.insert(String::new(), "value".to_owned());

    let result = Nuclease::new(
        "Cas9",
        TargetType::Dna,
        MotifSpecs::notation(&["NGG"]),
        None,
        metadata,
    );

    assert_invalid_field(result, "metadata");
}

#[test]
fn test_motifs_are_required() {
    let empty: &[&str] = &[];

    assert_invalid_field(nuclease("Cas9", empty, None), "motifs");
}

#[test]
fn test_invalid_notation_is_reported() {
    let err = nuclease("Cas9", &["NGG", "(3/3)NG^G"], None).unwrap_err();

    assert!(matches!(err.kind(), ErrorKind::ConflictingCutSpecification(_)));
}

#[test]
fn test_parsed_motifs() {
    let motifs = vec![
        Motif::new(b"GAATTC", Some(CutOffsets::new(1, 5))).unwrap(),
        parse_motif("GGTCTC(1/5)").unwrap(),
    ];

    let nuclease = Nuclease::new(
        "Mixed",
        TargetType::Dna,
        MotifSpecs::Parsed(motifs.clone()),
        None,
        BTreeMap::new(),
    )
    .unwrap();

    assert_eq!(nuclease.motifs(), motifs.as_slice());
    assert_eq!(nuclease.motif_strings(), vec!["G^AATTC", "GGTCTC(1/5)"]);
}

#[test]
fn test_motif_strings_fall_back_to_sequence() {
    let motifs = vec![Motif::new(b"GAATTC", Some(CutOffsets::new(1, -1))).unwrap()];
    let nuclease = Nuclease::new(
        "Odd",
        TargetType::Dna,
        MotifSpecs::Parsed(motifs),
        None,
        BTreeMap::new(),
    )
    .unwrap();

    assert_eq!(nuclease.motif_strings(), vec!["GAATTC"]);
}

#[test]
fn test_primary_motif_has_greatest_weight() {
    let nuclease = nuclease("Cas9", &["NAG", "NGG", "NGA"], Some(vec![0.2, 1.0, 0.1])).unwrap();

    assert_eq!(nuclease.primary_index(), 1);
    assert_eq!(nuclease.primary_motif().sequence(), b"NGG");
}

#[test]
fn test_primary_motif_ties_go_to_first_motif() {
    let uniform = nuclease("Cas9", &["NAG", "NGG"], None).unwrap();
    assert_eq!(uniform.primary_motif().sequence(), b"NAG");

    let tied = nuclease("Cas9", &["NAG", "NGG", "NGA"], Some(vec![0.5, 1.0, 1.0])).unwrap();
    assert_eq!(tied.primary_motif().sequence(), b"NGG");
}

#[test]
fn test_matching_motif() {
    let nuclease = nuclease("Cas9", &["NGG", "NAG"], None).unwrap();

    assert_eq!(nuclease.matching_motif(b"TAG").map(|(idx, _)| idx), Some(1));
    assert_eq!(nuclease.matching_motif(b"TTT").map(|(idx, _)| idx), None);
}

#[test]
fn test_with_name() {
    let original = nuclease("Cas9", &["NGG"], Some(vec![0.5])).unwrap();
    let renamed = original.with_name("Cas9-copy").unwrap();

    assert_eq!(renamed.name(), "Cas9-copy");
    assert_eq!(renamed.motifs(), original.motifs());
    assert_eq!(renamed.weights(), original.weights());
    assert_eq!(original.name(), "Cas9");

    assert_invalid_field(original.with_name(""), "name");
}

#[test]
fn test_target_type() {
    assert_eq!("dna".parse::<TargetType>().unwrap(), TargetType::Dna);
    assert_eq!("RNA".parse::<TargetType>().unwrap(), TargetType::Rna);
    assert_invalid_field("protein".parse::<TargetType>(), "target_type");

    let rnase = Nuclease::new(
        "CasRx",
        TargetType::Rna,
        MotifSpecs::notation(&["N"]),
        None,
        BTreeMap::new(),
    )
    .unwrap();
    assert!(rnase.is_rnase());
}

#[test]
fn test_crispr_nuclease_geometry() {
    let cas9 = nuclease("Cas9", &["(3/3)NGG"], None).unwrap();
    let crispr = CrisprNuclease::new(cas9, PamSide::ThreePrime, 20, 2).unwrap();

    assert_eq!(crispr.pam_length(), 3);
    assert_eq!(crispr.spacer_length(), 20);
    assert_eq!(crispr.spacer_gap(), 2);
    assert!(crispr.has_spacer_gap());
    assert_eq!(crispr.target_length(), 25);
    assert_eq!(crispr.spacer_side(), PamSide::FivePrime);
}

#[test]
fn test_spacer_length_must_be_positive() {
    let cas9 = nuclease("Cas9", &["NGG"], None).unwrap();

    assert_invalid_field(
        CrisprNuclease::new(cas9.clone(), PamSide::ThreePrime, 0, 0),
        "spacer_length",
    );

    let crispr = CrisprNuclease::new(cas9, PamSide::ThreePrime, 20, 0).unwrap();
    assert_invalid_field(crispr.with_spacer_length(0), "spacer_length");
    assert_eq!(crispr.with_spacer_length(23).unwrap().spacer_length(), 23);
}

#[test]
fn test_pam_side_from_str() {
    assert_eq!("5prime".parse::<PamSide>().unwrap(), PamSide::FivePrime);
    assert_eq!("3PRIME".parse::<PamSide>().unwrap(), PamSide::ThreePrime);
    assert_eq!("3'".parse::<PamSide>().unwrap(), PamSide::ThreePrime);
    assert_invalid_field("middle".parse::<PamSide>(), "pam_side");
}

#[test]
fn test_relative_strand_from_str() {
    assert_eq!(
        "original".parse::<RelativeStrand>().unwrap(),
        RelativeStrand::Original
    );
    assert_eq!(
        "Opposite".parse::<RelativeStrand>().unwrap(),
        RelativeStrand::Opposite
    );
    assert_invalid_field("both".parse::<RelativeStrand>(), "strand");
}

#[test]
fn test_nickase() {
    let cas9 = nuclease("Cas9", &["(3/3)NGG"], None).unwrap();
    let crispr = CrisprNuclease::new(cas9, PamSide::ThreePrime, 20, 0).unwrap();
    let nickase = CrisprNickase::new(crispr.with_name("Cas9n").unwrap(), RelativeStrand::Opposite);

    assert_eq!(nickase.name(), "Cas9n");
    assert_eq!(nickase.nicking_strand(), RelativeStrand::Opposite);
    assert_eq!(nickase.crispr().pam_length(), 3);
}
