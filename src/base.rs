//! The four-letter base alphabet and the sequences built from it.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::GeneMatchError;

/// A single base. The discriminant is the ASCII letter, which doubles as the
/// byte code uploaded to the device.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base {
    C = b'C',
    T = b'T',
    G = b'G',
    A = b'A',
}

/// Every base, in generator order.
pub const BASES: [Base; 4] = [Base::C, Base::T, Base::G, Base::A];

impl Base {
    /// Byte code of this base.
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn as_char(self) -> char {
        self.code() as char
    }
}

impl TryFrom<char> for Base {
    type Error = GeneMatchError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Base::C),
            'T' => Ok(Base::T),
            'G' => Ok(Base::G),
            'A' => Ok(Base::A),
            _ => Err(GeneMatchError::InvalidBase(c)),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An immutable, indexable run of bases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneSequence {
    bases: Vec<Base>,
}

impl GeneSequence {
    pub fn new(bases: Vec<Base>) -> Self {
        Self { bases }
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn as_slice(&self) -> &[Base] {
        &self.bases
    }

    /// Byte codes of every base, in order.
    pub fn codes(&self) -> Vec<u8> {
        self.bases.iter().map(|b| b.code()).collect()
    }

    /// Render `len` bases starting at `start` as text.
    ///
    /// Panics if the range falls outside the sequence.
    pub fn render(&self, start: usize, len: usize) -> String {
        self.bases[start..start + len].iter().map(|b| b.as_char()).collect()
    }
}

impl Index<usize> for GeneSequence {
    type Output = Base;

    fn index(&self, index: usize) -> &Base {
        &self.bases[index]
    }
}

impl FromIterator<Base> for GeneSequence {
    fn from_iter<I: IntoIterator<Item = Base>>(iter: I) -> Self {
        Self { bases: iter.into_iter().collect() }
    }
}

/// Parses letters into bases. ASCII whitespace is skipped so grouped input
/// such as `"CTGA CTGA"` reads as one sequence.
impl FromStr for GeneSequence {
    type Err = GeneMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_ascii_whitespace())
            .map(Base::try_from)
            .collect()
    }
}

impl fmt::Display for GeneSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.bases {
            write!(f, "{b}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grouped_text() {
        let seq: GeneSequence = "CTGA ctga".parse().unwrap();
        assert_eq!(seq.len(), 8);
        assert_eq!(seq[4], Base::C);
        assert_eq!(seq.to_string(), "CTGACTGA");
    }

    #[test]
    fn rejects_unknown_letters() {
        let err = "CTXA".parse::<GeneSequence>().unwrap_err();
        assert!(matches!(err, GeneMatchError::InvalidBase('X')));
    }

    #[test]
    fn codes_are_ascii_letters() {
        let seq: GeneSequence = "CTGA".parse().unwrap();
        assert_eq!(seq.codes(), b"CTGA".to_vec());
        assert_eq!(seq.render(1, 2), "TG");
    }
}
