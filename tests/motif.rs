extern crate crisprbase;

use crisprbase::errors::ErrorKind;
use crisprbase::motif::{parse_motif, CutOffsets, Motif};

fn assert_grammar_error(notation: &str) {
    let err = parse_motif(notation).unwrap_err();

    assert!(
        matches!(err.kind(), ErrorKind::InvalidMotifGrammar(..)),
        "{:?}: {:?}",
        notation,
        err.kind()
    );
}

#[test]
fn test_marker_inside_site() {
    let motif = parse_motif("G^AATTC").unwrap();

    assert_eq!(motif.sequence(), b"GAATTC");
    assert_eq!(motif.cut(), Some(CutOffsets::new(1, 5)));
}

#[test]
fn test_marker_at_ends() {
    assert_eq!(parse_motif("^NGG").unwrap().cut(), Some(CutOffsets::new(0, 3)));
    assert_eq!(parse_motif("NGG^").unwrap().cut(), Some(CutOffsets::new(3, 0)));
}

#[test]
fn test_downstream_offsets() {
    let motif = parse_motif("GACGC(5/10)").unwrap();

    assert_eq!(motif.sequence(), b"GACGC");
    assert_eq!(motif.cut(), Some(CutOffsets::new(10, 15)));
}

#[test]
fn test_upstream_offsets() {
    let motif = parse_motif("(5/10)GACGC").unwrap();

    assert_eq!(motif.sequence(), b"GACGC");
    assert_eq!(motif.cut(), Some(CutOffsets::new(-5, -10)));
}

#[test]
fn test_cas12a_pam() {
    let motif = parse_motif("TTTV(18/23)").unwrap();

    assert_eq!(motif.sequence(), b"TTTV");
    assert_eq!(motif.cut(), Some(CutOffsets::new(22, 27)));
}

#[test]
fn test_no_cut_site() {
    let motif = parse_motif("NGG").unwrap();

    assert_eq!(motif.sequence(), b"NGG");
    assert_eq!(motif.cut(), None);
}

#[test]
fn test_lowercase_is_normalized() {
    let motif = parse_motif("g^aattc").unwrap();

    assert_eq!(motif.sequence(), b"GAATTC");
    assert_eq!(motif.cut(), Some(CutOffsets::new(1, 5)));
}

#[test]
fn test_sequence_length_excludes_notation() {
    for notation in &["G^AATTC", "(3/3)NGG", "TTTV(18/23)", "NNGRRT", "(12/100)A"] {
        let motif = parse_motif(notation).unwrap();
        let letters = notation.chars().filter(|c| c.is_ascii_alphabetic()).count();

        assert_eq!(motif.len(), letters, "{:?}", notation);
    }
}

#[test]
fn test_marker_and_offsets_conflict() {
    let err = parse_motif("(9/10)AC^CTG").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::ConflictingCutSpecification(_)));

    let err = parse_motif("AC^CTG(9/10)").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::ConflictingCutSpecification(_)));
}

#[test]
fn test_two_offset_pairs_conflict() {
    let err = parse_motif("(1/2)ACG(3/4)").unwrap_err();

    assert!(matches!(err.kind(), ErrorKind::ConflictingCutSpecification(_)));
}

#[test]
fn test_invalid_alphabet() {
    for (notation, expected) in &[("GAXTC", 'X'), ("GA TC", ' '), ("NGG;", ';'), ("NGGé", 'é')] {
        match parse_motif(notation).unwrap_err().kind() {
            ErrorKind::InvalidAlphabet(_, character) => assert_eq!(character, expected),
            other => panic!("unexpected error for {:?}: {:?}", notation, other),
        }
    }
}

#[test]
fn test_invalid_grammar() {
    assert_grammar_error("");
    assert_grammar_error("GA^^TC");
    assert_grammar_error("GA-TC");
    assert_grammar_error("(3/3)");
    assert_grammar_error("^");
    assert_grammar_error("(3/)NGG");
    assert_grammar_error("(/3)NGG");
    assert_grammar_error("(3-3)NGG");
    assert_grammar_error("(3/3NGG");
    assert_grammar_error("NG(3/3)G");
    assert_grammar_error("NGG(3/3)(1/1)");
    assert_grammar_error("N3GG");
    assert_grammar_error("(99999999999999999999999/1)NGG");
}

#[test]
fn test_notation_round_trip() {
    for notation in &[
        "G^AATTC",
        "^NGG",
        "NGG^",
        "(3/3)NGG",
        "(0/0)NGG",
        "TTTV(18/23)",
        "GACGC(0/0)",
        "NNGRRT",
    ] {
        let motif = parse_motif(notation).unwrap();
        let rendered = motif.notation().unwrap();

        assert_eq!(&rendered, notation);
        assert_eq!(parse_motif(&rendered).unwrap(), motif);
    }
}

#[test]
fn test_notation_of_mixed_offsets() {
    let motif = Motif::new(b"GAATTC", Some(CutOffsets::new(1, -1))).unwrap();

    assert_eq!(motif.notation(), None);
}

#[test]
fn test_new_motif_validates_alphabet() {
    let motif = Motif::new(b"ngg", Some(CutOffsets::new(-3, -3))).unwrap();
    assert_eq!(motif.sequence(), b"NGG");

    let err = Motif::new(b"NGZ", None).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidAlphabet(..)));

    let err = Motif::new(b"", None).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidMotifGrammar(..)));
}

#[test]
fn test_from_str() {
    let motif: Motif = "(3/3)NGG".parse().unwrap();

    assert_eq!(motif.cut(), Some(CutOffsets::new(-3, -3)));
}

#[test]
fn test_motif_matches() {
    let motif = parse_motif("(3/3)NGG").unwrap();

    assert!(motif.matches(b"AGG"));
    assert!(motif.matches(b"tgg"));
    assert!(!motif.matches(b"AGC"));
    assert!(!motif.matches(b"AGGA"));
}

#[test]
fn test_cut_offsets() {
    let blunt = CutOffsets::new(3, 3);
    assert!(blunt.is_blunt());
    assert_eq!(blunt.overhang(), 0);
    assert_eq!(blunt.midpoint(), 3);

    let sticky = parse_motif("G^AATTC").unwrap().cut().unwrap();
    assert!(!sticky.is_blunt());
    assert_eq!(sticky.overhang(), 4);
    assert_eq!(sticky.midpoint(), 3);

    // Rounded towards negative infinity
    assert_eq!(CutOffsets::new(-3, -4).midpoint(), -4);
    assert_eq!(CutOffsets::new(22, 27).midpoint(), 24);
}
