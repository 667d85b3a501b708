//! Typed report rows for the community table.

use crate::types::Combination;

/// One data row of the community report: a synthetic community label paired
/// with one member taxon. Rows are assembled as typed values before any
/// writer sees them, so the export boundary never handles loose positional
/// values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Sequential community label ("community1", "community2", ...).
    pub community: String,
    /// One member taxon identifier of that community.
    pub species: String,
}

/// Build report rows from ranked combinations.
///
/// Communities are labeled sequentially in rank order; within a community
/// one row is emitted per member, sorted ascending by identifier (the
/// combination's stored order).
///
/// # Examples
///
/// ```rust
/// use cooccur_core::report::build_report;
/// use cooccur_core::types::Combination;
///
/// let ranked = vec![(Combination::new(["B".to_string(), "A".to_string()]), 5)];
/// let rows = build_report(&ranked);
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].community, "community1");
/// assert_eq!(rows[0].species, "A");
/// assert_eq!(rows[1].species, "B");
/// ```
#[must_use]
pub fn build_report(ranked: &[(Combination, u64)]) -> Vec<ReportRow> {
    let mut rows = Vec::new();
    for (rank, (combination, _count)) in ranked.iter().enumerate() {
        let community = format!("community{}", rank + 1);
        for species in combination.members() {
            rows.push(ReportRow {
                community: community.clone(),
                species: species.clone(),
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combination(members: &[&str]) -> Combination {
        Combination::new(members.iter().map(|m| m.to_string()))
    }

    fn row(community: &str, species: &str) -> ReportRow {
        ReportRow {
            community: community.to_string(),
            species: species.to_string(),
        }
    }

    #[test]
    fn test_three_pairs_scenario() {
        let ranked = vec![
            (combination(&["S1", "S2"]), 1),
            (combination(&["S1", "S3"]), 1),
            (combination(&["S2", "S3"]), 1),
        ];
        assert_eq!(
            build_report(&ranked),
            vec![
                row("community1", "S1"),
                row("community1", "S2"),
                row("community2", "S1"),
                row("community2", "S3"),
                row("community3", "S2"),
                row("community3", "S3"),
            ]
        );
    }

    #[test]
    fn test_mixed_size_communities_in_rank_order() {
        let ranked = vec![
            (combination(&["A", "B"]), 5),
            (combination(&["C", "D", "E"]), 3),
        ];
        assert_eq!(
            build_report(&ranked),
            vec![
                row("community1", "A"),
                row("community1", "B"),
                row("community2", "C"),
                row("community2", "D"),
                row("community2", "E"),
            ]
        );
    }

    #[test]
    fn test_empty_ranking_yields_no_rows() {
        assert!(build_report(&[]).is_empty());
    }
}
