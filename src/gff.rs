use crate::feature::Feature;
use std::collections::HashMap;

/// Parses GFF/GTF text into per-chromosome feature lists. Coordinates are
/// taken as-is (already 1-based inclusive). Lines with fewer than nine
/// tab-separated columns or non-numeric coordinates are skipped and
/// counted.
pub fn parse(text: &str) -> (HashMap<String, Vec<Feature>>, usize) {
    let mut annotations: HashMap<String, Vec<Feature>> = HashMap::new();
    let mut skipped = 0;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let cols: Vec<&str> = trimmed.split('\t').collect();
        if cols.len() < 9 {
            skipped += 1;
            continue;
        }
        let (start, end) = match (cols[3].parse::<usize>(), cols[4].parse::<usize>()) {
            (Ok(start), Ok(end)) => (start, end),
            _ => {
                skipped += 1;
                continue;
            }
        };

        let mut feature = Feature::new(cols[2], start, end, strand_of(cols[6]));
        feature.source = Some(cols[1].to_string());
        feature.score = match cols[5] {
            "." => None,
            raw => raw.parse::<f64>().ok(),
        };
        feature.qualifiers = parse_attributes(cols[8]);

        annotations
            .entry(cols[0].to_string())
            .or_default()
            .push(feature);
    }

    (annotations, skipped)
}

#[inline(always)]
fn strand_of(col: &str) -> i8 {
    if col == "-" {
        -1
    } else {
        1
    }
}

/// `;`-delimited attributes. GFF3 `key=value` and GTF `key "value"` forms
/// both land in the bag, quotes stripped, key case preserved.
fn parse_attributes(raw: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for part in raw.split(';') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if let Some((key, value)) = part.split_once('=') {
            let key = key.trim();
            let value = value.trim().replace('"', "");
            if !key.is_empty() && !value.is_empty() {
                map.insert(key.to_string(), value);
            }
            continue;
        }
        if let Some((key, value)) = part.split_once(char::is_whitespace) {
            let key = key.trim();
            let value = value.trim().replace('"', "");
            if !key.is_empty() && !value.is_empty() {
                map.insert(key.to_string(), value);
            }
        }
    }
    map
}
