use crate::feature::Feature;
use std::collections::HashMap;

/// Parses BED text into per-chromosome feature lists. BED is 0-based
/// half-open on disk; the in-memory model is 1-based inclusive, so start
/// gets +1 and end is unchanged. Missing name defaults to `BED_feature`,
/// missing strand to +1.
pub fn parse(text: &str) -> (HashMap<String, Vec<Feature>>, usize) {
    let mut annotations: HashMap<String, Vec<Feature>> = HashMap::new();
    let mut skipped = 0;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("track") {
            continue;
        }
        let cols: Vec<&str> = trimmed.split('\t').collect();
        if cols.len() < 3 {
            skipped += 1;
            continue;
        }
        let (start, end) = match (cols[1].parse::<usize>(), cols[2].parse::<usize>()) {
            (Ok(start), Ok(end)) => (start, end),
            _ => {
                skipped += 1;
                continue;
            }
        };
        let name = cols.get(3).copied().unwrap_or("BED_feature");
        let score = cols.get(4).and_then(|raw| raw.parse::<f64>().ok());
        let strand = match cols.get(5) {
            Some(&"-") => -1,
            _ => 1,
        };

        let mut feature = Feature::new("BED_feature", start + 1, end, strand);
        feature.score = score;
        feature.set_qualifier("name", name);
        if let Some(score) = score {
            feature.set_qualifier("score", &score.to_string());
        }

        annotations
            .entry(cols[0].to_string())
            .or_default()
            .push(feature);
    }

    (annotations, skipped)
}
