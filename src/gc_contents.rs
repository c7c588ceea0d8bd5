use rayon::prelude::*;
use serde::{Deserialize, Serialize};

const MIN_WINDOW_SIZE: usize = 10;
const TARGET_WINDOW_COUNT: usize = 50;

/// Whole-sequence GC content as a percentage, rounded to two decimals.
/// An empty sequence has 0.00 GC.
pub fn gc_percent(sequence: &str) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let gc = sequence
        .bytes()
        .filter(|&c| c == b'G' || c == b'C')
        .count();
    let percent = (gc as f64 / sequence.len() as f64) * 100.0;
    (percent * 100.0).round() / 100.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GcRegion {
    from: usize,
    to: usize,
    gc: f32,
}

impl GcRegion {
    #[inline(always)]
    pub fn from(&self) -> usize {
        self.from
    }

    #[inline(always)]
    pub fn to(&self) -> usize {
        self.to
    }

    #[inline(always)]
    pub fn gc(&self) -> f32 {
        self.gc
    }
}

/// Windowed GC fractions over a sequence, for track rendering.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GcContents {
    regions: Vec<GcRegion>,
}

impl GcContents {
    pub fn new_from_sequence(sequence: &str) -> Self {
        if sequence.is_empty() {
            return Self::default();
        }
        let bytes = sequence.as_bytes();
        let window_size = Self::window_size(sequence);
        let starts: Vec<usize> = (0..bytes.len()).step_by(window_size).collect();
        let regions = starts
            .par_iter()
            .map(|&from| {
                let to = bytes.len().min(from + window_size);
                GcRegion {
                    from,
                    to,
                    gc: Self::gc_fraction(&bytes[from..to]),
                }
            })
            .collect();
        Self { regions }
    }

    #[inline(always)]
    pub fn regions(&self) -> &[GcRegion] {
        &self.regions
    }

    /// Aims for ~50 windows, never narrower than 10 bp.
    #[inline(always)]
    fn window_size(sequence: &str) -> usize {
        MIN_WINDOW_SIZE.max(sequence.len() / TARGET_WINDOW_COUNT)
    }

    #[inline(always)]
    fn gc_fraction(window: &[u8]) -> f32 {
        let gc = window.iter().filter(|&&c| c == b'G' || c == b'C').count() as f32;
        gc / window.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gc_percent_all_gc() {
        assert_eq!(gc_percent("GGCCGC"), 100.0);
    }

    #[test]
    fn test_gc_percent_all_at() {
        assert_eq!(gc_percent("ATATAT"), 0.0);
    }

    #[test]
    fn test_gc_percent_rounding() {
        // 1 of 3 => 33.333... => 33.33
        assert_eq!(gc_percent("GAT"), 33.33);
        assert_eq!(gc_percent(""), 0.0);
    }

    #[test]
    fn test_gc_contents_single_window() {
        let gc = GcContents::new_from_sequence("AAAGGGTTTCCC");
        assert_eq!(gc.regions().len(), 2); // 12 bp at min window 10 => 10 + 2
        assert_eq!(gc.regions()[0].from(), 0);
        assert_eq!(gc.regions()[0].to(), 10);
        assert_eq!(gc.regions()[1].to(), 12);
    }

    #[test]
    fn test_gc_contents_window_count() {
        let sequence = "ACGT".repeat(500); // 2000 bp => window 40 => 50 windows
        let gc = GcContents::new_from_sequence(&sequence);
        assert_eq!(gc.regions().len(), 50);
        for region in gc.regions() {
            assert!((region.gc() - 0.5).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_gc_contents_empty() {
        assert!(GcContents::new_from_sequence("").regions().is_empty());
    }

    #[test]
    fn test_gc_contents_window_edge_inside_multibyte_char() {
        // A window boundary landing mid-character must not panic; windows
        // are computed over bytes.
        let gc = GcContents::new_from_sequence("AAAAAAAAAé");
        assert_eq!(gc.regions().len(), 2);
        assert_eq!(gc.regions()[0].gc(), 0.0);
    }
}
