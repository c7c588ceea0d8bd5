use crate::iupac_code::IupacCode;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Standard genetic code, all 64 codons. Stops are '*'.
    static ref GENETIC_CODE: HashMap<&'static str, char> = {
        let mut m = HashMap::new();
        for (codon, aa) in [
            ("TTT", 'F'), ("TTC", 'F'), ("TTA", 'L'), ("TTG", 'L'),
            ("TCT", 'S'), ("TCC", 'S'), ("TCA", 'S'), ("TCG", 'S'),
            ("TAT", 'Y'), ("TAC", 'Y'), ("TAA", '*'), ("TAG", '*'),
            ("TGT", 'C'), ("TGC", 'C'), ("TGA", '*'), ("TGG", 'W'),
            ("CTT", 'L'), ("CTC", 'L'), ("CTA", 'L'), ("CTG", 'L'),
            ("CCT", 'P'), ("CCC", 'P'), ("CCA", 'P'), ("CCG", 'P'),
            ("CAT", 'H'), ("CAC", 'H'), ("CAA", 'Q'), ("CAG", 'Q'),
            ("CGT", 'R'), ("CGC", 'R'), ("CGA", 'R'), ("CGG", 'R'),
            ("ATT", 'I'), ("ATC", 'I'), ("ATA", 'I'), ("ATG", 'M'),
            ("ACT", 'T'), ("ACC", 'T'), ("ACA", 'T'), ("ACG", 'T'),
            ("AAT", 'N'), ("AAC", 'N'), ("AAA", 'K'), ("AAG", 'K'),
            ("AGT", 'S'), ("AGC", 'S'), ("AGA", 'R'), ("AGG", 'R'),
            ("GTT", 'V'), ("GTC", 'V'), ("GTA", 'V'), ("GTG", 'V'),
            ("GCT", 'A'), ("GCC", 'A'), ("GCA", 'A'), ("GCG", 'A'),
            ("GAT", 'D'), ("GAC", 'D'), ("GAA", 'E'), ("GAG", 'E'),
            ("GGT", 'G'), ("GGC", 'G'), ("GGA", 'G'), ("GGG", 'G'),
        ] {
            m.insert(codon, aa);
        }
        m
    };
}

/// Translates a codon to an amino acid, 'X' for anything not in the table
/// (ambiguity codes, gaps).
#[inline(always)]
pub fn translate_codon(codon: &str) -> char {
    GENETIC_CODE.get(codon).copied().unwrap_or('X')
}

/// Translates DNA to protein. A strand of -1 reverse-complements first,
/// then reads non-overlapping codons from position 0. A trailing partial
/// codon is dropped.
pub fn translate(dna: &str, strand: i8) -> String {
    let sequence = dna.to_uppercase();
    let sequence = if strand == -1 {
        IupacCode::reverse_complement(&sequence)
    } else {
        sequence
    };

    let chars: Vec<char> = sequence.chars().collect();
    let mut protein = String::with_capacity(chars.len() / 3);
    let mut codon = String::with_capacity(4);
    let mut i = 0;
    while i + 2 < chars.len() {
        codon.clear();
        codon.extend(&chars[i..i + 3]);
        protein.push(translate_codon(&codon));
        i += 3;
    }
    protein
}
