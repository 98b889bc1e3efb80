const MAPPING: [(u8, &[u8]); 16] = [
    (b'A', b"A"),
    (b'C', b"C"),
    (b'G', b"G"),
    (b'T', b"TU"),
    (b'U', b"TU"),
    (b'R', b"AGR"),
    (b'Y', b"CTUY"),
    (b'S', b"GCS"),
    (b'W', b"ATUW"),
    (b'K', b"GTUK"),
    (b'M', b"ACM"),
    (b'B', b"CGTUB"),
    (b'D', b"AGTUD"),
    (b'H', b"ACTUH"),
    (b'V', b"ACGV"),
    (b'N', b"ACGTURYSWKMBDHVN"),
];

lazy_static! {
    static ref IUPAC: Vec<bool> = {
        let mut table = vec![false; 26 * 26];

        for (query, matches) in &MAPPING {
            for &candidate in matches.iter() {
                table[offset(*query, candidate)] = true;
            }
        }

        table
    };
}

fn offset(query: u8, candidate: u8) -> usize {
    (query - b'A') as usize * 26 + (candidate - b'A') as usize
}

/// Returns true if `nuc` is an (uppercase) IUPAC nucleotide code, including U.
pub fn is_valid(nuc: u8) -> bool {
    MAPPING.iter().any(|(code, _)| *code == nuc)
}

/// Returns true if every byte in `seq` is an IUPAC nucleotide code.
pub fn is_valid_sequence(seq: &[u8]) -> bool {
    seq.iter().all(|&nuc| is_valid(nuc))
}

/// Returns true if the (possibly degenerate) `query` code matches `candidate`.
pub fn matches(query: u8, candidate: u8) -> bool {
    if query == candidate {
        true
    } else if b'A' <= query && query <= b'Z' && b'A' <= candidate && candidate <= b'Z' {
        IUPAC[offset(query, candidate)]
    } else {
        false
    }
}

pub fn matches_sequence(query: &[u8], candidate: &[u8]) -> bool {
    query.len() == candidate.len()
        && query
            .iter()
            .zip(candidate.iter())
            .all(|(&q, &c)| matches(q, c.to_ascii_uppercase()))
}
