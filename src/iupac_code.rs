/// IUPAC nucleotide alphabet helpers: complement table and query checks.
pub struct IupacCode;

impl IupacCode {
    /// Complement of a single base. Ambiguity codes map to their IUPAC
    /// complements (R<->Y, K<->M, B<->V, D<->H); S, W and N are their own
    /// complement. Unrecognized characters pass through unchanged.
    #[inline(always)]
    pub fn letter_complement(letter: char) -> char {
        match letter {
            'A' => 'T',
            'T' => 'A',
            'G' => 'C',
            'C' => 'G',
            'N' => 'N',
            'R' => 'Y',
            'Y' => 'R',
            'S' => 'S',
            'W' => 'W',
            'K' => 'M',
            'M' => 'K',
            'B' => 'V',
            'V' => 'B',
            'D' => 'H',
            'H' => 'D',
            other => other,
        }
    }

    pub fn reverse_complement(sequence: &str) -> String {
        sequence
            .chars()
            .rev()
            .map(Self::letter_complement)
            .collect()
    }

    /// True if the string is a plausible DNA search query: A/T/G/C/N only.
    pub fn is_dna_with_n(s: &str) -> bool {
        !s.is_empty()
            && s.chars()
                .all(|c| matches!(c.to_ascii_uppercase(), 'A' | 'T' | 'G' | 'C' | 'N'))
    }

    /// True for unambiguous DNA only: A/T/G/C.
    pub fn is_strict_dna(s: &str) -> bool {
        !s.is_empty()
            && s.chars()
                .all(|c| matches!(c.to_ascii_uppercase(), 'A' | 'T' | 'G' | 'C'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_complement() {
        assert_eq!(IupacCode::letter_complement('A'), 'T');
        assert_eq!(IupacCode::letter_complement('C'), 'G');
        assert_eq!(IupacCode::letter_complement('G'), 'C');
        assert_eq!(IupacCode::letter_complement('T'), 'A');
        assert_eq!(IupacCode::letter_complement('N'), 'N');
        assert_eq!(IupacCode::letter_complement('R'), 'Y');
        assert_eq!(IupacCode::letter_complement('K'), 'M');
        assert_eq!(IupacCode::letter_complement('B'), 'V');
        assert_eq!(IupacCode::letter_complement('D'), 'H');
        assert_eq!(IupacCode::letter_complement('X'), 'X'); // pass-through
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(IupacCode::reverse_complement("ATGC"), "GCAT");
        assert_eq!(IupacCode::reverse_complement("AAAA"), "TTTT");
        assert_eq!(IupacCode::reverse_complement(""), "");
    }

    #[test]
    fn test_reverse_complement_round_trip() {
        let seq = "ACGTNACGTN";
        assert_eq!(
            IupacCode::reverse_complement(&IupacCode::reverse_complement(seq)),
            seq
        );
    }

    #[test]
    fn test_query_alphabet_checks() {
        assert!(IupacCode::is_dna_with_n("ATGCN"));
        assert!(IupacCode::is_dna_with_n("atgcn"));
        assert!(!IupacCode::is_dna_with_n("ATGR"));
        assert!(!IupacCode::is_dna_with_n(""));
        assert!(IupacCode::is_strict_dna("ATGC"));
        assert!(!IupacCode::is_strict_dna("ATGCN"));
    }
}
