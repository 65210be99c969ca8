//! Enforces the fixed field size on every iteration.
//!
//! - too many: stable sort by rating (descending), first occurrence of a
//!   team wins, cut to size
//! - too few: top up with the highest-rated teams not yet present,
//!   labelled "FIFA Ranking Filler"
//! - exact: unchanged apart from dropping repeated teams
//!
//! The top-up ignores confederation eligibility; it only exists to keep
//! the invariant when a degenerate run leaves places unfilled.

use crate::data::RatingTable;
use crate::models::{IterationResult, Qualifier};
use crate::pathways::labels::FILLER;
use std::collections::HashSet;

pub fn normalize(qualifiers: Vec<Qualifier>, ratings: &RatingTable, size: usize) -> IterationResult {
    let unique = dedup_first(qualifiers.clone());

    if unique.len() > size {
        let mut ranked = qualifiers;
        ranked.sort_by(|a, b| b.team.rating.total_cmp(&a.team.rating));
        let mut kept = dedup_first(ranked);
        tracing::debug!(dropped = kept.len() - size, "trimming qualifiers to field size");
        kept.truncate(size);
        return kept;
    }

    let mut field = unique;
    if field.len() < size {
        let shortfall = size - field.len();
        let present: HashSet<String> = field.iter().map(|q| q.team.name.clone()).collect();
        field.extend(
            ratings
                .by_rating_desc()
                .filter(|t| !present.contains(&t.name))
                .take(shortfall)
                .map(|t| Qualifier::new(t.clone(), FILLER)),
        );
        tracing::debug!(shortfall, filled = field.len(), "topping up qualifiers from ratings");
    }
    field
}

fn dedup_first(qualifiers: Vec<Qualifier>) -> Vec<Qualifier> {
    let mut seen = HashSet::new();
    qualifiers
        .into_iter()
        .filter(|q| seen.insert(q.team.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RatingEntry;
    use crate::models::{Confederation, Team};
    use proptest::prelude::*;

    fn table(n: usize) -> RatingTable {
        RatingTable::new(
            (0..n)
                .map(|i| RatingEntry {
                    team: format!("R{:03}", i),
                    confederation: Confederation::UEFA,
                    rating: 2000.0 - i as f64,
                })
                .collect(),
        )
    }

    fn q(name: &str, rating: f64, path: &str) -> Qualifier {
        Qualifier::new(Team::unaffiliated(name, rating), path)
    }

    #[test]
    fn test_trim_keeps_top_by_rating() {
        // 48 teams rated 1000 down to 53, then 52 and 51
        let mut input: Vec<Qualifier> = (0..48)
            .map(|i| q(&format!("T{}", i), 1000.0 - 20.0 * i as f64 - if i == 47 { 7.0 } else { 0.0 }, "Direct"))
            .collect();
        input.push(q("Low52", 52.0, "Direct"));
        input.push(q("Low51", 51.0, "Direct"));
        input.reverse();

        let out = normalize(input, &table(0), 48);
        assert_eq!(out.len(), 48);
        assert!(out.iter().all(|x| x.team.rating > 52.0));
        assert!(!out.iter().any(|x| x.team.name.starts_with("Low")));
        assert_eq!(out[0].team.rating, 1000.0);
    }

    #[test]
    fn test_trim_tie_keeps_earlier_entry() {
        let input = vec![
            q("A", 100.0, "first"),
            q("B", 100.0, "second"),
            q("C", 100.0, "third"),
        ];
        let out = normalize(input, &table(0), 2);
        let names: Vec<_> = out.iter().map(|x| x.team.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_fill_tops_up_from_rating_order() {
        let ratings = table(100);
        // 30 qualifiers; R000, R002 are among them
        let mut input: Vec<Qualifier> = (0..28).map(|i| q(&format!("X{}", i), 900.0, "Direct")).collect();
        input.push(q("R000", 2000.0, "Direct"));
        input.push(q("R002", 1998.0, "Direct"));

        let out = normalize(input, &ratings, 48);
        assert_eq!(out.len(), 48);
        let fillers: Vec<_> = out.iter().filter(|x| x.path == FILLER).collect();
        assert_eq!(fillers.len(), 18);
        assert_eq!(fillers[0].team.name, "R001");
        assert_eq!(fillers[1].team.name, "R003");
        assert!(fillers.iter().all(|f| f.team.name != "R000" && f.team.name != "R002"));
    }

    #[test]
    fn test_exact_size_passes_through() {
        let input: Vec<Qualifier> = (0..48).map(|i| q(&format!("P{}", i), i as f64, "Direct")).collect();
        let out = normalize(input.clone(), &table(10), 48);
        assert_eq!(out, input);
    }

    #[test]
    fn test_duplicates_count_once() {
        let mut input: Vec<Qualifier> = (0..48).map(|i| q(&format!("P{}", i), 1500.0, "Direct")).collect();
        input.push(q("P0", 1500.0, "Again"));
        let out = normalize(input, &table(0), 48);
        assert_eq!(out.len(), 48);
        assert_eq!(out[0].path, "Direct");
    }

    #[test]
    fn test_small_rating_table_cannot_overfill() {
        let out = normalize(Vec::new(), &table(5), 48);
        assert_eq!(out.len(), 5);
    }

    proptest! {
        #[test]
        fn prop_normalized_field_is_exact_and_unique(
            names in proptest::collection::vec(0usize..150, 0..120),
        ) {
            let ratings = table(200);
            let input: Vec<Qualifier> = names
                .iter()
                .map(|&i| Qualifier::new(ratings.team(&format!("R{:03}", i)), "Direct"))
                .collect();
            let out = normalize(input, &ratings, 48);
            prop_assert_eq!(out.len(), 48);
            let unique: HashSet<_> = out.iter().map(|x| x.team.name.clone()).collect();
            prop_assert_eq!(unique.len(), 48);

            // Idempotent
            let again = normalize(out.clone(), &ratings, 48);
            prop_assert_eq!(again, out);
        }
    }
}
