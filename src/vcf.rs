use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One VCF variant. `start`/`end` are 0-based, `end = start + ref len`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub chromosome: String,
    pub start: usize,
    pub end: usize,
    pub id: Option<String>,
    pub ref_allele: String,
    pub alt_allele: String,
    pub quality: Option<f64>,
    pub filter: String,
    pub info: String,
}

/// Parses VCF text into per-chromosome variant lists. The 1-based POS
/// column becomes a 0-based start. Header lines (`#`) are skipped; short
/// or non-numeric lines are skipped and counted.
pub fn parse(text: &str) -> (HashMap<String, Vec<Variant>>, usize) {
    let mut variants: HashMap<String, Vec<Variant>> = HashMap::new();
    let mut skipped = 0;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let cols: Vec<&str> = trimmed.split('\t').collect();
        if cols.len() < 8 {
            skipped += 1;
            continue;
        }
        let pos = match cols[1].parse::<usize>() {
            Ok(pos) if pos > 0 => pos,
            _ => {
                skipped += 1;
                continue;
            }
        };
        let start = pos - 1;

        variants
            .entry(cols[0].to_string())
            .or_default()
            .push(Variant {
                chromosome: cols[0].to_string(),
                start,
                end: start + cols[3].len(),
                id: match cols[2] {
                    "." => None,
                    id => Some(id.to_string()),
                },
                ref_allele: cols[3].to_string(),
                alt_allele: cols[4].to_string(),
                quality: match cols[5] {
                    "." => None,
                    raw => raw.parse::<f64>().ok(),
                },
                filter: cols[6].to_string(),
                info: cols[7].to_string(),
            });
    }

    (variants, skipped)
}
