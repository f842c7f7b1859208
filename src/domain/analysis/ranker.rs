//! Ranker - dense ranking of scores, highest first.

/// Dense ranking functions.
pub struct Ranker;

impl Ranker {
    /// Assigns dense ranks on descending score.
    ///
    /// `rank_i = 1 + |{distinct scores strictly greater than score_i}|`
    ///
    /// Ties are exact floating-point equality; no tolerance is applied.
    ///
    /// # Edge Cases
    /// - Empty input: Returns empty Vec
    /// - All equal: Every alternative gets rank 1
    pub fn dense_rank(scores: &[f64]) -> Vec<u32> {
        let distinct = Self::distinct_descending(scores);

        scores
            .iter()
            .map(|score| {
                let greater = distinct.partition_point(|d| d > score);
                greater as u32 + 1
            })
            .collect()
    }

    /// Returns the distinct score values, highest first.
    fn distinct_descending(scores: &[f64]) -> Vec<f64> {
        let mut distinct = scores.to_vec();
        distinct.sort_by(|a, b| b.total_cmp(a));
        distinct.dedup();
        distinct
    }
}
