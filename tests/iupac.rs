extern crate crisprbase;

use crisprbase::iupac::{is_valid, is_valid_sequence, matches, matches_sequence};

#[test]
fn test_basic_nucleotides() {
    // first
    assert!(matches(b'A', b'A'));
    assert!(!matches(b'A', b'C'));
    assert!(!matches(b'A', b'G'));
    assert!(!matches(b'A', b'T'));
    // last
    assert!(!matches(b'T', b'A'));
    assert!(!matches(b'T', b'C'));
    assert!(!matches(b'T', b'G'));
    assert!(matches(b'T', b'T'));
}

#[test]
fn test_degenerate_nucleotide() {
    assert!(!matches(b'N', b'@'));
    assert!(matches(b'N', b'A')); // A
    assert!(matches(b'N', b'B')); // C, G, T
    assert!(matches(b'N', b'C')); // C
    assert!(matches(b'N', b'D')); // A, G, T
    assert!(!matches(b'N', b'E'));
    assert!(!matches(b'N', b'['));
}

#[test]
fn test_two_fold_codes() {
    assert!(matches(b'R', b'A'));
    assert!(matches(b'R', b'G'));
    assert!(!matches(b'R', b'C'));
    assert!(matches(b'V', b'C'));
    assert!(!matches(b'V', b'T'));
}

#[test]
fn test_uracil() {
    assert!(matches(b'T', b'U'));
    assert!(matches(b'U', b'T'));
    assert!(matches(b'Y', b'U'));
    assert!(!matches(b'U', b'C'));
}

#[test]
fn test_non_nucleotide_values() {
    assert!(matches(b'I', b'I'));
    assert!(!matches(b'I', b'J'));
    assert!(matches(b'!', b'!'));
    assert!(!matches(b'!', b'?'));
}

#[test]
fn test_is_valid() {
    for &nuc in b"ACGTURYSWKMBDHVN" {
        assert!(is_valid(nuc), "{}", nuc as char);
    }

    assert!(!is_valid(b'a'));
    assert!(!is_valid(b'X'));
    assert!(!is_valid(b'^'));
    assert!(is_valid_sequence(b"NNGRRT"));
    assert!(!is_valid_sequence(b"NNG-RRT"));
}

#[test]
fn test_matches_sequence() {
    assert!(matches_sequence(b"NGG", b"AGG"));
    assert!(matches_sequence(b"NGG", b"cgg"));
    assert!(!matches_sequence(b"NGG", b"AG"));
    assert!(!matches_sequence(b"TTTV", b"TTTT"));
    assert!(matches_sequence(b"", b""));
}
