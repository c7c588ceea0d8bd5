use crate::feature::Feature;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    // "     gene            190..255"
    static ref FEATURE_LINE: Regex = Regex::new(r"^\s+(\w+)\s+(\S.*)").unwrap();
    // "                     /locus_tag="b0001""
    static ref QUALIFIER_LINE: Regex = Regex::new(r#"^\s+/(\w+)=?"?([^"]*)"?"#).unwrap();
    static ref LOCATION_RANGE: Regex = Regex::new(r"(\d+)\.\.(\d+)").unwrap();
    static ref LOCATION_SINGLE: Regex = Regex::new(r"(\d+)").unwrap();
}

/// One parsed GenBank flat file: sequences and annotations share LOCUS
/// names as keys.
#[derive(Debug, Default)]
pub struct GenbankRecords {
    pub sequences: HashMap<String, String>,
    pub annotations: HashMap<String, Vec<Feature>>,
    pub skipped_lines: usize,
}

/// Stateful line scan over a GenBank flat file. LOCUS opens a record,
/// indented lines inside the FEATURES block become features and
/// qualifiers, ORIGIN starts sequence accumulation, `//` commits the
/// record. Lines outside any record are ignored.
pub fn parse(text: &str) -> GenbankRecords {
    let mut out = GenbankRecords::default();
    let mut current_seq: Option<String> = None;
    let mut current_data = String::new();
    let mut in_origin = false;
    let mut features: Vec<Feature> = vec![];
    let mut current_feature: Option<Feature> = None;

    for line in text.lines() {
        if line.starts_with("LOCUS") {
            match line.split_whitespace().nth(1) {
                Some(name) => {
                    let name = name.to_string();
                    out.sequences.insert(name.clone(), String::new());
                    out.annotations.insert(name.clone(), vec![]);
                    current_seq = Some(name);
                    features = vec![];
                    current_feature = None;
                }
                None => out.skipped_lines += 1,
            }
            continue;
        }
        if line.starts_with("FEATURES") {
            continue;
        }

        // New feature: indented TYPE + location, outside ORIGIN.
        if line.starts_with("     ") && !in_origin && current_seq.is_some() {
            if let Some(caps) = FEATURE_LINE.captures(line) {
                if let Some(f) = current_feature.take() {
                    features.push(f);
                }
                match feature_from_location(&caps[1], &caps[2]) {
                    Some(f) => current_feature = Some(f),
                    None => out.skipped_lines += 1,
                }
            }
        }

        // Qualifier attached to the open feature.
        if line.starts_with("                     /") {
            if let Some(feature) = current_feature.as_mut() {
                if let Some(caps) = QUALIFIER_LINE.captures(line) {
                    let value = caps[2].replace('"', "");
                    feature.set_qualifier(&caps[1], &value);
                }
            }
        }

        if line.starts_with("ORIGIN") {
            if let Some(f) = current_feature.take() {
                features.push(f);
            }
            if let Some(name) = &current_seq {
                out.annotations.insert(name.clone(), features.clone());
            }
            in_origin = true;
            continue;
        }

        if in_origin && !line.trim().is_empty() && !line.starts_with("//") {
            current_data.extend(
                line.chars()
                    .filter(|c| !c.is_ascii_digit() && !c.is_whitespace())
                    .map(|c| c.to_ascii_uppercase()),
            );
        }

        if line.starts_with("//") {
            if let Some(name) = &current_seq {
                if !current_data.is_empty() {
                    out.sequences.insert(name.clone(), current_data.clone());
                }
            }
            in_origin = false;
            current_data.clear();
        }
    }

    out
}

/// Builds a feature from a GenBank location string. Handles `a..b`,
/// `complement(a..b)` and single positions; anything without a numeric
/// position is dropped.
fn feature_from_location(kind: &str, location: &str) -> Option<Feature> {
    let mut strand = 1;
    let mut clean = location.to_string();
    if location.contains("complement") {
        strand = -1;
        clean = clean.replace("complement(", "").replace(')', "");
    }

    let (start, end) = if let Some(caps) = LOCATION_RANGE.captures(&clean) {
        (
            caps[1].parse::<usize>().ok()?,
            caps[2].parse::<usize>().ok()?,
        )
    } else if let Some(caps) = LOCATION_SINGLE.captures(&clean) {
        let pos = caps[1].parse::<usize>().ok()?;
        (pos, pos)
    } else {
        return None;
    };

    Some(Feature::new(kind, start, end, strand))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = "\
LOCUS       TESTSEQ                 60 bp    DNA     linear   BCT 01-JAN-2024
DEFINITION  Test record.
FEATURES             Location/Qualifiers
     source          1..60
                     /organism=\"Escherichia coli\"
     gene            5..40
                     /gene=\"thrL\"
                     /locus_tag=\"b0001\"
     CDS             complement(10..30)
                     /product=\"test protein\"
     promoter        3
ORIGIN
        1 acgtacgtac gtacgtacgt acgtacgtac gtacgtacgt acgtacgtac gtacgtacgt
//
";

    #[test]
    fn test_parse_record() {
        let records = parse(RECORD);
        assert_eq!(records.sequences.len(), 1);
        assert_eq!(records.sequences["TESTSEQ"].len(), 60);
        assert!(records.sequences["TESTSEQ"].starts_with("ACGTACGT"));

        let features = &records.annotations["TESTSEQ"];
        assert_eq!(features.len(), 4);

        let gene = &features[1];
        assert_eq!(gene.kind, "gene");
        assert_eq!((gene.start, gene.end, gene.strand), (5, 40, 1));
        assert_eq!(gene.qualifier("gene"), Some("thrL"));
        assert_eq!(gene.qualifier("locus_tag"), Some("b0001"));
    }

    #[test]
    fn test_parse_complement_location() {
        let records = parse(RECORD);
        let cds = &records.annotations["TESTSEQ"][2];
        assert_eq!((cds.start, cds.end, cds.strand), (10, 30, -1));
        assert_eq!(cds.qualifier("product"), Some("test protein"));
    }

    #[test]
    fn test_parse_single_position_location() {
        let records = parse(RECORD);
        let promoter = &records.annotations["TESTSEQ"][3];
        assert_eq!((promoter.start, promoter.end), (3, 3));
    }

    #[test]
    fn test_parse_unquoted_qualifier() {
        let f = parse(
            "LOCUS       X 10 bp\n     gene            1..10\n                     /codon_start=1\nORIGIN\n//\n",
        );
        assert_eq!(f.annotations["X"][0].qualifier("codon_start"), Some("1"));
    }

    #[test]
    fn test_lines_before_locus_are_ignored() {
        let records = parse("     gene            1..10\nORIGIN\nacgt\n//\n");
        assert!(records.sequences.is_empty());
        assert!(records.annotations.is_empty());
    }

    #[test]
    fn test_origin_strips_digits_and_whitespace() {
        let records = parse("LOCUS       S 8 bp\nORIGIN\n        1 acgt 1234 acgt\n//\n");
        assert_eq!(records.sequences["S"], "ACGTACGT");
    }

    #[test]
    fn test_two_records() {
        let text = "LOCUS       A 4 bp\nORIGIN\nacgt\n//\nLOCUS       B 4 bp\nORIGIN\nttaa\n//\n";
        let records = parse(text);
        assert_eq!(records.sequences["A"], "ACGT");
        assert_eq!(records.sequences["B"], "TTAA");
    }
}
