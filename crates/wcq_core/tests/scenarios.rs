//! End-to-end runs over the embedded reference data.

use std::collections::HashSet;
use wcq_core::data::{LiveStandings, RatingEntry, RatingTable, StaticQualifiers};
use wcq_core::pathways::labels;
use wcq_core::{iteration_rng, Confederation, ReferenceData, SimConfig, Simulator};

fn embedded() -> ReferenceData {
    ReferenceData::embedded().expect("embedded data parses")
}

#[test]
fn every_iteration_fields_48_unique_teams() {
    let data = embedded();
    let config = SimConfig::default();
    let sim = Simulator::new(&data, &config);

    for i in 0..50 {
        let field = sim.simulate_iteration(&mut iteration_rng(2026, i));
        let names: HashSet<_> = field.iter().map(|q| q.team.name.as_str()).collect();
        assert_eq!(field.len(), 48, "iteration {}", i);
        assert_eq!(names.len(), 48, "iteration {}", i);
    }
}

#[test]
fn same_seed_same_aggregate() {
    let data = embedded();
    let config = SimConfig::default();
    let sim = Simulator::new(&data, &config);
    assert_eq!(sim.run(60, 11), sim.run(60, 11));
    assert_ne!(sim.run(60, 11), sim.run(60, 12));
}

#[test]
fn parallel_run_matches_sequential_run() {
    let data = embedded();
    let config = SimConfig::default();
    let sim = Simulator::new(&data, &config);
    assert_eq!(sim.run_parallel(120, 99), sim.run(120, 99));
}

#[test]
fn probabilities_sum_to_48() {
    let data = embedded();
    let config = SimConfig::default();
    let agg = Simulator::new(&data, &config).run(100, 5);

    let total: f64 = agg.probabilities().iter().map(|(_, p)| *p).sum();
    assert!((total - 48.0).abs() < 1e-9, "total {}", total);
    assert!(agg.probabilities().iter().all(|(_, p)| (0.0..=1.0).contains(p)));
}

#[test]
fn hosts_and_new_zealand_always_qualify() {
    let data = embedded();
    let config = SimConfig::default();
    let agg = Simulator::new(&data, &config).run(100, 8);

    for host in ["Canada", "Mexico", "USA"] {
        assert_eq!(agg.probability(host), 1.0, "{}", host);
        assert_eq!(agg.paths[host].len(), 1);
        assert_eq!(agg.paths[host][labels::HOST], 100);
    }
    assert_eq!(agg.probability("New Zealand"), 1.0);
    assert_eq!(agg.paths["New Zealand"][labels::OFC_DIRECT], 100);
    for team in ["Japan", "Iran", "South Korea"] {
        assert_eq!(agg.paths[team][labels::AFC_PRE_QUALIFIED], 100);
    }
}

#[test]
fn new_caledonia_only_qualifies_through_playoffs() {
    let data = embedded();
    let config = SimConfig::default();
    let agg = Simulator::new(&data, &config).run(200, 13);

    if let Some(paths) = agg.paths.get("New Caledonia") {
        for label in paths.keys() {
            assert!(
                label == labels::ICP || label == labels::FILLER,
                "unexpected path {}",
                label
            );
        }
    }
}

#[test]
fn argentina_finishes_top_six() {
    let data = embedded();
    let config = SimConfig::default();
    let sim = Simulator::new(&data, &config);

    let report = sim.single(42);
    let argentina = report
        .qualified
        .iter()
        .find(|q| q.team.name == "Argentina")
        .expect("Argentina qualified");
    assert_eq!(argentina.path, labels::CONMEBOL_DIRECT);

    let agg = sim.run(1, 42);
    assert_eq!(agg.paths["Argentina"][labels::CONMEBOL_DIRECT], 1);
}

#[test]
fn one_iteration_reproduces_the_single_simulation() {
    let data = embedded();
    let config = SimConfig::default();
    let sim = Simulator::new(&data, &config);

    for seed in [1, 42, 1000] {
        let report = sim.single(seed);
        let agg = sim.run(1, seed);
        let from_report: HashSet<_> = report.qualified.iter().map(|q| q.team.name.clone()).collect();
        let from_agg: HashSet<_> = agg.counts.keys().cloned().collect();
        assert_eq!(from_report, from_agg);
    }
}

#[test]
fn pathway_places_add_up() {
    let data = embedded();
    let config = SimConfig::default();
    let report = Simulator::new(&data, &config).single(3);

    let direct: Vec<usize> = report.pathways.iter().map(|p| p.direct.len()).collect();
    assert_eq!(direct, vec![8, 9, 6, 6, 1, 15]);
    let playoff: Vec<usize> = report.pathways.iter().map(|p| p.playoff.len()).collect();
    assert_eq!(playoff, vec![1, 1, 2, 1, 1, 1]);
    assert_eq!(report.playoff_qualifiers.len(), 2);
    assert_eq!(report.filler_count(), 1);
}

#[test]
fn strongest_uefa_side_is_a_heavy_favourite() {
    let data = embedded();
    let config = SimConfig::low_variance();
    let agg = Simulator::new(&data, &config).run(200, 21);
    assert!(agg.probability("Spain") > 0.8, "Spain {}", agg.probability("Spain"));
}

#[test]
fn empty_reference_data_still_yields_a_full_field_when_ratings_allow() {
    let entries = (0..60)
        .map(|i| RatingEntry {
            team: format!("Team {:02}", i),
            confederation: Confederation::UEFA,
            rating: 1500.0 - i as f64,
        })
        .collect();
    let data = ReferenceData::new(
        RatingTable::new(entries),
        LiveStandings::default(),
        StaticQualifiers::default(),
    );
    let config = SimConfig::default();
    let report = Simulator::new(&data, &config).single(0);

    assert_eq!(report.qualified.len(), 48);
    assert_eq!(report.filler_count(), 48);
    assert_eq!(report.qualified[0].team.name, "Team 00");
}

#[test]
fn custom_field_size_is_respected() {
    let data = embedded();
    let config = SimConfig {
        tournament_size: 32,
        ..SimConfig::default()
    };
    let agg = Simulator::new(&data, &config).run(20, 4);
    assert_eq!(agg.expected_qualifiers(), 32.0);
}
