use std::collections::HashMap;

/// Parses FASTA text into name -> sequence. The record name is the first
/// whitespace-delimited token after `>`; data lines are upper-cased with
/// all whitespace removed. Returns the sequences plus a count of data
/// lines that appeared before any header (skipped).
pub fn parse(text: &str) -> (HashMap<String, String>, usize) {
    let mut sequences = HashMap::new();
    let mut current_name: Option<String> = None;
    let mut current_data = String::new();
    let mut skipped = 0;

    for line in text.lines() {
        let trimmed = line.trim();
        if let Some(header) = trimmed.strip_prefix('>') {
            if let Some(name) = current_name.take() {
                sequences.insert(name, std::mem::take(&mut current_data));
            }
            let name = header.split_whitespace().next().unwrap_or_default();
            current_name = Some(name.to_string());
        } else if !trimmed.is_empty() {
            if current_name.is_some() {
                current_data.extend(
                    trimmed
                        .chars()
                        .filter(|c| !c.is_whitespace())
                        .map(|c| c.to_ascii_uppercase()),
                );
            } else {
                skipped += 1;
            }
        }
    }
    if let Some(name) = current_name {
        sequences.insert(name, current_data);
    }

    (sequences, skipped)
}

/// Renders one record as FASTA text, the sole on-disk export contract.
pub fn to_fasta(header: &str, sequence: &str) -> String {
    format!(">{header}\n{sequence}")
}
