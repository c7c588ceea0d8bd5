use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const FLAG_REVERSE_STRAND: u32 = 16;

/// One aligned read. `start` is 0-based; `end` is approximated as
/// `start + sequence length`. CIGAR is stored but not applied, so
/// spliced/indel alignments overstate or understate their span.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Read {
    pub id: String,
    pub chromosome: String,
    pub start: usize,
    pub end: usize,
    pub strand: char,
    pub mapping_quality: u8,
    pub cigar: String,
    pub sequence: String,
    pub quality: String,
}

/// Parses SAM text into per-chromosome read lists. `@` header lines are
/// skipped; unmapped reads (RNAME `*` or POS 0) are dropped without being
/// counted as malformed. Short or non-numeric lines are skipped and
/// counted.
pub fn parse(text: &str) -> (HashMap<String, Vec<Read>>, usize) {
    let mut reads: HashMap<String, Vec<Read>> = HashMap::new();
    let mut skipped = 0;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('@') {
            continue;
        }
        let cols: Vec<&str> = trimmed.split('\t').collect();
        if cols.len() < 11 {
            skipped += 1;
            continue;
        }
        // Unmapped reads carry no usable coordinates.
        if cols[2] == "*" || cols[3] == "0" {
            continue;
        }
        let (flag, pos, mapq) = match (
            cols[1].parse::<u32>(),
            cols[3].parse::<usize>(),
            cols[4].parse::<u8>(),
        ) {
            (Ok(flag), Ok(pos), Ok(mapq)) if pos > 0 => (flag, pos, mapq),
            _ => {
                skipped += 1;
                continue;
            }
        };
        let start = pos - 1;

        reads.entry(cols[2].to_string()).or_default().push(Read {
            id: cols[0].to_string(),
            chromosome: cols[2].to_string(),
            start,
            end: start + cols[9].len(),
            strand: if flag & FLAG_REVERSE_STRAND != 0 {
                '-'
            } else {
                '+'
            },
            mapping_quality: mapq,
            cigar: cols[5].to_string(),
            sequence: cols[9].to_string(),
            quality: cols[10].to_string(),
        });
    }

    (reads, skipped)
}
