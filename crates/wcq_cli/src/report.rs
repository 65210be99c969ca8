//! Plain-text tables and JSON export for the CLI.

use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use wcq_core::data::RatingTable;
use wcq_core::models::{GroupTable, Qualifier};
use wcq_core::{Aggregate, Confederation, IterationReport};

/// Left-aligned text columns under a title and a dashed rule.
fn write_table(out: &mut impl Write, title: &str, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    writeln!(out, "{}", title)?;
    write_row(out, &widths, headers.iter().copied())?;
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    write_row(out, &widths, rule.iter().map(String::as_str))?;
    for row in rows {
        write_row(out, &widths, row.iter().map(String::as_str))?;
    }
    writeln!(out)
}

fn write_row<'c>(out: &mut impl Write, widths: &[usize], cells: impl Iterator<Item = &'c str>) -> io::Result<()> {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
        .collect();
    writeln!(out, "{}", line.join("  ").trim_end())
}

fn percent(p: f64) -> String {
    format!("{:.1}", p * 100.0)
}

/// Round-by-round detail of one iteration.
pub fn write_trace(out: &mut impl Write, report: &IterationReport) -> io::Result<()> {
    writeln!(out, "Single Simulation Detail")?;
    writeln!(out)?;
    for pathway in &report.pathways {
        writeln!(out, "== {} ==", pathway.confederation)?;
        for table in &pathway.tables {
            write_group_table(out, table)?;
        }
        for q in &pathway.direct {
            writeln!(out, "  qualified: {} ({})", q.team.name, q.path)?;
        }
        for team in &pathway.playoff {
            writeln!(out, "  to playoff: {}", team.name)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "== Inter-confederation Playoff ==")?;
    let entrants: Vec<&str> = report.playoff_entrants.iter().map(|t| t.name.as_str()).collect();
    writeln!(out, "  entrants: {}", entrants.join(", "))?;
    for q in &report.playoff_qualifiers {
        writeln!(out, "  qualified: {}", q.team.name)?;
    }
    if report.filler_count() > 0 {
        writeln!(out, "  ranking fillers: {}", report.filler_count())?;
    }
    writeln!(out)
}

fn write_group_table(out: &mut impl Write, table: &GroupTable) -> io::Result<()> {
    let rows: Vec<Vec<String>> = table
        .standings
        .iter()
        .map(|s| {
            let r = &s.record;
            vec![
                s.team.name.clone(),
                r.played.to_string(),
                r.wins.to_string(),
                r.draws.to_string(),
                r.losses.to_string(),
                r.goals_for.to_string(),
                r.goals_against.to_string(),
                r.goal_difference.to_string(),
                r.points.to_string(),
            ]
        })
        .collect();
    write_table(
        out,
        &format!("Group {}", table.name),
        &["Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"],
        &rows,
    )
}

/// The 48 teams of one iteration, alphabetical.
pub fn write_single_simulation(out: &mut impl Write, qualified: &[Qualifier]) -> io::Result<()> {
    let mut sorted: Vec<&Qualifier> = qualified.iter().collect();
    sorted.sort_by(|a, b| a.team.name.cmp(&b.team.name));
    let rows: Vec<Vec<String>> = sorted
        .into_iter()
        .map(|q| vec![q.team.name.clone(), q.path.clone()])
        .collect();
    write_table(out, "Teams Qualified (Single Simulation)", &["Team", "Qualification Path"], &rows)
}

pub fn write_probabilities(out: &mut impl Write, aggregate: &Aggregate) -> io::Result<()> {
    let rows: Vec<Vec<String>> = aggregate
        .probabilities()
        .into_iter()
        .map(|(team, p)| vec![team, percent(p)])
        .collect();
    write_table(out, "Qualification Probabilities", &["Team", "Chance %"], &rows)
}

/// Probabilities again, one block per confederation. Teams the rating
/// table cannot place go under "Other".
pub fn write_breakdown(out: &mut impl Write, aggregate: &Aggregate, ratings: &RatingTable) -> io::Result<()> {
    let mut blocks: BTreeMap<Option<Confederation>, Vec<Vec<String>>> = BTreeMap::new();
    for (team, p) in aggregate.probabilities() {
        let conf = ratings.confederation(&team);
        blocks.entry(conf).or_default().push(vec![team, percent(p)]);
    }

    writeln!(out, "Qualification Probabilities by Confederation")?;
    writeln!(out)?;
    let order = Confederation::ALL.into_iter().map(Some).chain(std::iter::once(None));
    for conf in order {
        let Some(rows) = blocks.get(&conf) else {
            continue;
        };
        let title = conf.map_or("Other", |c| c.as_str());
        write_table(out, title, &["Team", "Chance %"], rows)?;
    }
    Ok(())
}

/// Every (team, path) pair seen, by team probability then path probability.
pub fn write_paths(out: &mut impl Write, aggregate: &Aggregate) -> io::Result<()> {
    let mut rows = Vec::new();
    for (team, _) in aggregate.probabilities() {
        for (path, p) in aggregate.path_probabilities(&team) {
            rows.push(vec![team.clone(), path, percent(p)]);
        }
    }
    write_table(out, "Qualification Paths", &["Team", "Path", "Chance %"], &rows)
}

#[derive(Debug, Serialize)]
struct TeamChance {
    team: String,
    probability: f64,
}

#[derive(Debug, Serialize)]
struct Export<'a> {
    seed: u64,
    simulations: u64,
    probabilities: Vec<TeamChance>,
    paths: &'a BTreeMap<String, BTreeMap<String, u64>>,
}

pub fn write_json(out: &mut impl Write, seed: u64, aggregate: &Aggregate) -> serde_json::Result<()> {
    let export = Export {
        seed,
        simulations: aggregate.iterations,
        probabilities: aggregate
            .probabilities()
            .into_iter()
            .map(|(team, probability)| TeamChance { team, probability })
            .collect(),
        paths: &aggregate.paths,
    };
    serde_json::to_writer_pretty(out, &export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wcq_core::data::RatingEntry;
    use wcq_core::Team;

    fn aggregate() -> Aggregate {
        let mut agg = Aggregate::default();
        agg.record(&[
            Qualifier::new(Team::new("Brazil", 2000.0, Confederation::CONMEBOL), "CONMEBOL Direct (Top 6)"),
            Qualifier::new(Team::unaffiliated("Atlantis", 500.0), "FIFA Ranking Filler"),
        ]);
        agg.record(&[Qualifier::new(
            Team::new("Brazil", 2000.0, Confederation::CONMEBOL),
            "CONMEBOL Direct (Top 6)",
        )]);
        agg
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_probability_table() {
        let text = render(|out| write_probabilities(out, &aggregate()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Qualification Probabilities");
        assert_eq!(lines[1], "Team      Chance %");
        assert_eq!(lines[3], "Brazil    100.0");
        assert_eq!(lines[4], "Atlantis  50.0");
    }

    #[test]
    fn test_single_simulation_is_alphabetical() {
        let qualified = vec![
            Qualifier::new(Team::unaffiliated("Zambia", 1.0), "CAF Group Winner"),
            Qualifier::new(Team::unaffiliated("Albania", 1.0), "UEFA Group Winner"),
        ];
        let text = render(|out| write_single_simulation(out, &qualified));
        let albania = text.find("Albania").unwrap();
        let zambia = text.find("Zambia").unwrap();
        assert!(albania < zambia);
        assert!(text.contains("Qualification Path"));
    }

    #[test]
    fn test_breakdown_groups_by_confederation() {
        let ratings = RatingTable::new(vec![RatingEntry {
            team: "Brazil".into(),
            confederation: Confederation::CONMEBOL,
            rating: 2000.0,
        }]);
        let text = render(|out| write_breakdown(out, &aggregate(), &ratings));
        let conmebol = text.find("CONMEBOL\n").unwrap();
        let other = text.find("Other\n").unwrap();
        assert!(conmebol < other);
        assert!(!text.contains("UEFA\n"));
    }

    #[test]
    fn test_json_export_shape() {
        let mut buf = Vec::new();
        write_json(&mut buf, 7, &aggregate()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["seed"], 7);
        assert_eq!(value["simulations"], 2);
        assert_eq!(value["probabilities"][0]["team"], "Brazil");
        assert_eq!(value["paths"]["Brazil"]["CONMEBOL Direct (Top 6)"], 2);
    }
}
