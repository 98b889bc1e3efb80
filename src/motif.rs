use std::borrow::Cow;
use std::str::FromStr;

use crate::errors::*;
use crate::iupac;

/// Cut positions on the motif strand and its complement, from the first motif base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CutOffsets {
    pub forward: isize,
    pub reverse: isize,
}

impl CutOffsets {
    pub fn new(forward: isize, reverse: isize) -> CutOffsets {
        CutOffsets { forward, reverse }
    }

    pub fn is_blunt(&self) -> bool {
        self.forward == self.reverse
    }

    /// Midpoint of the two cuts, rounded towards negative infinity.
    pub fn midpoint(&self) -> isize {
        (self.forward + self.reverse).div_euclid(2)
    }

    // Positive for 5' overhangs
    pub fn overhang(&self) -> isize {
        self.reverse - self.forward
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Motif {
    sequence: Vec<u8>,
    cut: Option<CutOffsets>,
}

impl Motif {
    pub fn new(sequence: &[u8], cut: Option<CutOffsets>) -> Result<Motif> {
        let sequence = sequence.to_ascii_uppercase();
        if let Some(&nuc) = sequence.iter().find(|&&nuc| !iupac::is_valid(nuc)) {
            let notation = String::from_utf8_lossy(&sequence).into_owned();

            return Err(ErrorKind::InvalidAlphabet(notation, nuc as char).into());
        } else if sequence.is_empty() {
            return Err(ErrorKind::InvalidMotifGrammar(
                String::new(),
                "motif contains no nucleotides".into(),
            )
            .into());
        }

        Ok(Motif { sequence, cut })
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn cut(&self) -> Option<CutOffsets> {
        self.cut
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn to_string(&self) -> Cow<str> {
        String::from_utf8_lossy(&self.sequence)
    }

    pub fn matches(&self, candidate: &[u8]) -> bool {
        iupac::matches_sequence(&self.sequence, candidate)
    }

    /// Compact notation, if the offsets fit one of its forms.
    pub fn notation(&self) -> Option<String> {
        let sequence = self.to_string();
        let len = self.len() as isize;

        match self.cut {
            None => Some(sequence.into_owned()),
            Some(CutOffsets { forward, reverse }) => {
                if forward >= 0 && forward <= len && reverse == len - forward {
                    let (head, tail) = sequence.split_at(forward as usize);

                    Some(format!("{}^{}", head, tail))
                } else if forward <= 0 && reverse <= 0 {
                    Some(format!("({}/{}){}", -forward, -reverse, sequence))
                } else if forward >= len && reverse >= len {
                    Some(format!("{}({}/{})", sequence, forward - len, reverse - len))
                } else {
                    None
                }
            }
        }
    }
}

impl FromStr for Motif {
    type Err = Error;

    fn from_str(s: &str) -> Result<Motif> {
        parse_motif(s)
    }
}

fn is_notation_char(c: char) -> bool {
    c.is_ascii() && (iupac::is_valid(c as u8) || c.is_ascii_digit() || "^()-/".contains(c))
}

fn grammar_error(notation: &str, reason: &str) -> Error {
    ErrorKind::InvalidMotifGrammar(notation.into(), reason.into()).into()
}

fn read_number(notation: &str, bytes: &[u8], pos: &mut usize) -> Result<isize> {
    let start = *pos;
    while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
        *pos += 1;
    }

    if start == *pos {
        return Err(grammar_error(notation, "expected offset in (x/y) pair"));
    }

    // Only ASCII digits were consumed, so this can only fail on overflow
    String::from_utf8_lossy(&bytes[start..*pos])
        .parse::<isize>()
        .map_err(|_| grammar_error(notation, "offset is too large"))
}

fn expect_byte(notation: &str, bytes: &[u8], pos: &mut usize, expected: u8) -> Result<()> {
    if bytes.get(*pos) == Some(&expected) {
        *pos += 1;
        Ok(())
    } else {
        let reason = format!("expected {:?} in (x/y) pair", expected as char);

        Err(grammar_error(notation, &reason))
    }
}

fn read_offset_pair(
    notation: &str,
    bytes: &[u8],
    pos: &mut usize,
) -> Result<Option<(isize, isize)>> {
    if bytes.get(*pos) != Some(&b'(') {
        return Ok(None);
    }

    *pos += 1;
    let upstream = read_number(notation, bytes, pos)?;
    expect_byte(notation, bytes, pos, b'/')?;
    let downstream = read_number(notation, bytes, pos)?;
    expect_byte(notation, bytes, pos, b')')?;

    Ok(Some((upstream, downstream)))
}

/// Parses a motif such as `G^AATTC`, `(3/3)NGG` or `TTTV(18/23)`.
pub fn parse_motif(notation: &str) -> Result<Motif> {
    let upper = notation.to_ascii_uppercase();
    if let Some(character) = upper.chars().find(|&c| !is_notation_char(c)) {
        return Err(ErrorKind::InvalidAlphabet(notation.into(), character).into());
    }

    let bytes = upper.as_bytes();
    let mut pos = 0;

    let leading = read_offset_pair(notation, bytes, &mut pos)?;

    let mut sequence = Vec::with_capacity(bytes.len());
    let mut marker = None;
    while pos < bytes.len() && bytes[pos] != b'(' {
        match bytes[pos] {
            b'^' if marker.is_some() => {
                return Err(grammar_error(notation, "more than one '^' marker"));
            }
            b'^' => marker = Some(sequence.len()),
            nuc if iupac::is_valid(nuc) => sequence.push(nuc),
            other => {
                let reason = format!("unexpected {:?} in nucleotide sequence", other as char);

                return Err(grammar_error(notation, &reason));
            }
        }

        pos += 1;
    }

    let trailing = read_offset_pair(notation, bytes, &mut pos)?;
    if pos < bytes.len() {
        return Err(grammar_error(notation, "unexpected text after (x/y) pair"));
    } else if sequence.is_empty() {
        return Err(grammar_error(notation, "motif contains no nucleotides"));
    }

    let len = sequence.len() as isize;
    let cut = match (leading, marker, trailing) {
        (None, None, None) => None,
        (None, Some(marker), None) => {
            let forward = marker as isize;

            Some(CutOffsets::new(forward, len - forward))
        }
        (Some((upstream, downstream)), None, None) => {
            Some(CutOffsets::new(-upstream, -downstream))
        }
        (None, None, Some((upstream, downstream))) => {
            let forward = upstream.checked_add(len);
            let reverse = downstream.checked_add(len);

            match (forward, reverse) {
                (Some(forward), Some(reverse)) => Some(CutOffsets::new(forward, reverse)),
                _ => return Err(grammar_error(notation, "offset is too large")),
            }
        }
        _ => return Err(ErrorKind::ConflictingCutSpecification(notation.into()).into()),
    };

    Ok(Motif { sequence, cut })
}
