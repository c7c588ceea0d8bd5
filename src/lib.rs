//! Genome-browser core: flat-file genomic format parsers, a caller-owned
//! genome model, and the position-indexed query and layout computations
//! that back interactive tracks. No rendering, no UI state: bytes in,
//! structured model out; model plus view range in, layout-ready rows out.

pub mod annotation_index;
pub mod bed;
pub mod error;
pub mod fasta;
pub mod feature;
pub mod feature_rows;
pub mod gc_contents;
pub mod genbank;
pub mod genetic_code;
pub mod genome_model;
pub mod gff;
pub mod iupac_code;
pub mod operon;
pub mod sam;
pub mod search;
pub mod vcf;
