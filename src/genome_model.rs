use crate::annotation_index;
use crate::bed;
use crate::error::NucleoviewError;
use crate::fasta;
use crate::feature::Feature;
use crate::genbank;
use crate::gff;
use crate::sam::{self, Read};
use crate::vcf::{self, Variant};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Supported input formats. Unknown extensions fall back to FASTA rather
/// than being rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    Fasta,
    Genbank,
    Gff,
    Bed,
    Vcf,
    Sam,
}

impl FileFormat {
    pub fn from_extension(extension: &str) -> Self {
        match extension.trim_start_matches('.').to_lowercase().as_str() {
            "gb" | "gbk" | "genbank" => FileFormat::Genbank,
            "gff" | "gtf" => FileFormat::Gff,
            "bed" => FileFormat::Bed,
            "vcf" => FileFormat::Vcf,
            "sam" => FileFormat::Sam,
            // .fasta/.fa and everything else
            _ => FileFormat::Fasta,
        }
    }
}

/// Diagnostics from one load: which parser ran and how many malformed
/// lines it skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub format: FileFormat,
    pub skipped_lines: usize,
}

/// The in-memory genome: sequences plus annotation, variant and read
/// stores, all keyed by the same chromosome-name strings (case-sensitive,
/// no normalization). A plain value type owned by the caller; every query
/// takes explicit arguments and no global state exists anywhere.
///
/// Coordinate conventions: `Feature.start`/`end` are 1-based inclusive;
/// `Variant` and `Read` positions are 0-based. The parsers convert on the
/// way in (BED start+1, VCF/SAM POS-1); nothing downstream converts again.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GenomeModel {
    sequences: HashMap<String, String>,
    annotations: HashMap<String, Vec<Feature>>,
    variants: HashMap<String, Vec<Variant>>,
    reads: HashMap<String, Vec<Read>>,
    /// User-defined features survive file loads; the active annotation
    /// store does not. Re-merging is explicit via `merge_user_features`.
    user_features: HashMap<String, Vec<Feature>>,
    next_user_feature_id: usize,
}

impl GenomeModel {
    pub fn from_text(text: &str, format: FileFormat) -> (Self, LoadReport) {
        let mut model = Self::default();
        let report = model.load_text(text, format);
        (model, report)
    }

    /// Loads a file, picking the parser from the file extension.
    pub fn from_file(path: &str) -> Result<(Self, LoadReport)> {
        let text = fs::read_to_string(path)?;
        let extension = Path::new(path)
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::from_text(&text, FileFormat::from_extension(&extension)))
    }

    /// Parses `text` into this model. The store a format feeds
    /// (sequences, annotations, variants or reads) is replaced wholesale;
    /// the others are left alone, so eg a GFF can be layered over a FASTA.
    pub fn load_text(&mut self, text: &str, format: FileFormat) -> LoadReport {
        let skipped_lines = match format {
            FileFormat::Fasta => {
                let (sequences, skipped) = fasta::parse(text);
                self.sequences = sequences;
                skipped
            }
            FileFormat::Genbank => {
                let records = genbank::parse(text);
                self.sequences = records.sequences;
                self.annotations = records.annotations;
                records.skipped_lines
            }
            FileFormat::Gff => {
                let (annotations, skipped) = gff::parse(text);
                self.annotations = annotations;
                skipped
            }
            FileFormat::Bed => {
                let (annotations, skipped) = bed::parse(text);
                self.annotations = annotations;
                skipped
            }
            FileFormat::Vcf => {
                let (variants, skipped) = vcf::parse(text);
                self.variants = variants;
                skipped
            }
            FileFormat::Sam => {
                let (reads, skipped) = sam::parse(text);
                self.reads = reads;
                skipped
            }
        };
        LoadReport {
            format,
            skipped_lines,
        }
    }

    #[inline(always)]
    pub fn sequence(&self, chromosome: &str) -> Option<&str> {
        self.sequences.get(chromosome).map(String::as_str)
    }

    pub fn annotations(&self, chromosome: &str) -> &[Feature] {
        self.annotations
            .get(chromosome)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn variants(&self, chromosome: &str) -> &[Variant] {
        self.variants
            .get(chromosome)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn reads(&self, chromosome: &str) -> &[Read] {
        self.reads
            .get(chromosome)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Chromosome names with a loaded sequence, sorted.
    pub fn chromosomes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.sequences.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Features overlapping the 1-based inclusive range; see
    /// [`annotation_index::features_overlapping`].
    pub fn features_overlapping(
        &self,
        chromosome: &str,
        range_start: usize,
        range_end: usize,
    ) -> Vec<&Feature> {
        annotation_index::features_overlapping(&self.annotations, chromosome, range_start, range_end)
    }

    /// Adds a user-defined feature to both the persistent user store and
    /// the active annotation list. Coordinates are 1-based inclusive and
    /// validated against the loaded sequence when one exists.
    pub fn add_user_feature(
        &mut self,
        chromosome: &str,
        kind: &str,
        name: &str,
        start: usize,
        end: usize,
        strand: i8,
        description: Option<&str>,
    ) -> Result<&Feature, NucleoviewError> {
        if chromosome.is_empty() {
            return Err(NucleoviewError::InvalidArgument(
                "chromosome name must not be empty".to_string(),
            ));
        }
        if name.is_empty() {
            return Err(NucleoviewError::InvalidArgument(
                "feature name must not be empty".to_string(),
            ));
        }
        if start == 0 {
            return Err(NucleoviewError::InvalidArgument(
                "start is 1-based and must be >= 1".to_string(),
            ));
        }
        if start > end {
            return Err(NucleoviewError::InvalidArgument(format!(
                "start ({start}) must be <= end ({end})"
            )));
        }
        if strand != 1 && strand != -1 {
            return Err(NucleoviewError::InvalidArgument(format!(
                "strand must be +1 or -1, got {strand}"
            )));
        }
        if let Some(sequence) = self.sequences.get(chromosome) {
            if end > sequence.len() {
                return Err(NucleoviewError::InvalidArgument(format!(
                    "end ({end}) exceeds sequence length ({})",
                    sequence.len()
                )));
            }
        }

        self.next_user_feature_id += 1;
        let mut feature = Feature::new(kind, start, end, strand);
        feature.user_defined = true;
        feature.id = Some(format!("user_{}", self.next_user_feature_id));
        feature.set_qualifier("gene", name);
        feature.set_qualifier("product", description.unwrap_or(name));
        if let Some(description) = description {
            feature.set_qualifier("note", description);
        }
        feature.set_qualifier("user_defined", "true");

        self.user_features
            .entry(chromosome.to_string())
            .or_default()
            .push(feature.clone());
        let active = self.annotations.entry(chromosome.to_string()).or_default();
        active.push(feature);
        Ok(active.last().unwrap())
    }

    pub fn user_features(&self, chromosome: &str) -> &[Feature] {
        self.user_features
            .get(chromosome)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Re-merges persistent user features into the active annotation
    /// store after a file load replaced it. Features already present (by
    /// id) are not duplicated.
    pub fn merge_user_features(&mut self) {
        for (chromosome, stored) in &self.user_features {
            let active = self.annotations.entry(chromosome.clone()).or_default();
            for feature in stored {
                let present = active
                    .iter()
                    .any(|f| f.id.is_some() && f.id == feature.id);
                if !present {
                    active.push(feature.clone());
                }
            }
        }
    }

    /// FASTA export of a 0-based half-open view window, the sole on-disk
    /// export contract: `>chr:start-end` with 1-based display coordinates.
    pub fn export_region_fasta(&self, chromosome: &str, start: usize, end: usize) -> Option<String> {
        let sequence = self.sequences.get(chromosome)?;
        if start >= end || start >= sequence.len() {
            return None;
        }
        let end = end.min(sequence.len());
        Some(fasta::to_fasta(
            &format!("{chromosome}:{}-{end}", start + 1),
            &String::from_utf8_lossy(&sequence.as_bytes()[start..end]),
        ))
    }

    pub fn to_json_string(&self) -> Result<String, NucleoviewError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, NucleoviewError> {
        Ok(serde_json::from_str(json)?)
    }
}
