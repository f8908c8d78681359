//! Column reducer: edge mask to raw waveform.
use crate::edges::EdgeMask;

/// Reduce each mask column to the row index of its topmost edge pixel.
///
/// Columns are scanned left to right, rows top to bottom; the first flagged
/// row wins. A column with no edge records 0, mirroring first-match
/// semantics over an all-clear column, so the reducer is total and the
/// output length always equals the mask width. Values lie in
/// `[0, height - 1]`.
pub fn extract_trace(mask: &EdgeMask) -> Vec<u32> {
    (0..mask.width())
        .map(|x| {
            (0..mask.height())
                .find(|&y| mask.get(x, y))
                .unwrap_or(0) as u32
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topmost_edge_wins_per_column() {
        let mut mask = EdgeMask::new(4, 6);
        mask.set(0, 3, true);
        mask.set(0, 5, true); // below the first hit, ignored
        mask.set(1, 0, true);
        mask.set(3, 4, true);

        let trace = extract_trace(&mask);
        assert_eq!(trace, vec![3, 0, 0, 4]);
    }

    #[test]
    fn edgeless_column_records_zero() {
        let mask = EdgeMask::new(3, 5);
        assert_eq!(extract_trace(&mask), vec![0, 0, 0]);
    }

    #[test]
    fn length_and_range_invariants() {
        let mut mask = EdgeMask::new(7, 4);
        for x in 0..7 {
            mask.set(x, x % 4, true);
        }
        let trace = extract_trace(&mask);
        assert_eq!(trace.len(), mask.width());
        assert!(trace.iter().all(|&v| (v as usize) < mask.height()));
    }
}
