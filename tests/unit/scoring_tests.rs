//! Unit tests for the scoring engine: score, gaps, recommend.

use ca::model::{Career, Catalog, Profile};
use ca::scoring::{self, SUFFICIENT_LEVEL};

fn data_analyst() -> Career {
    Career::new("Data Analyst", [("python", 2.0), ("sql", 1.0)]).unwrap()
}

#[test]
fn test_worked_example_score() {
    // python:5 earns the full weight, sql:3 earns 3/5 of its weight:
    // (2*1.0 + 1*0.6) / 3 * 100 = 86.67
    let mut profile = Profile::new("Alice").unwrap();
    profile.add_skill("python", 5).unwrap();
    profile.add_skill("sql", 3).unwrap();
    let score = scoring::score(&profile, &data_analyst());
    assert!((score - 86.666_666).abs() < 0.001);
}

#[test]
fn test_worked_example_gaps() {
    let mut profile = Profile::new("Alice").unwrap();
    profile.add_skill("python", 5).unwrap();
    profile.add_skill("sql", 3).unwrap();
    assert_eq!(scoring::gaps(&profile, &data_analyst()), vec!["sql"]);
}

#[test]
fn test_score_of_empty_profile_is_zero() {
    let profile = Profile::new("Alice").unwrap();
    assert_eq!(scoring::score(&profile, &data_analyst()), 0.0);
}

#[test]
fn test_score_caps_at_one_hundred() {
    let mut profile = Profile::new("Alice").unwrap();
    profile.add_skill("python", 5).unwrap();
    profile.add_skill("sql", 5).unwrap();
    let score = scoring::score(&profile, &data_analyst());
    assert!((score - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_score_of_requirementless_career_is_zero() {
    let career = Career::new("Generalist", Vec::<(&str, f64)>::new()).unwrap();
    let mut profile = Profile::new("Alice").unwrap();
    profile.add_skill("python", 5).unwrap();
    assert_eq!(scoring::score(&profile, &career), 0.0);
}

#[test]
fn test_gap_threshold_boundary() {
    let career = Career::new("Role", [("python", 1.0)]).unwrap();
    let mut profile = Profile::new("Alice").unwrap();

    profile.add_skill("python", SUFFICIENT_LEVEL - 1).unwrap();
    assert_eq!(scoring::gaps(&profile, &career), vec!["python"]);

    profile.add_skill("python", SUFFICIENT_LEVEL).unwrap();
    assert!(scoring::gaps(&profile, &career).is_empty());
}

#[test]
fn test_gaps_ordered_by_weight_then_name() {
    let career = Career::new(
        "Role",
        [("zeta", 2.0), ("alpha", 1.0), ("beta", 2.0)],
    )
    .unwrap();
    let profile = Profile::new("Alice").unwrap();
    // weight desc, ties by name asc
    assert_eq!(scoring::gaps(&profile, &career), vec!["beta", "zeta", "alpha"]);
}

#[test]
fn test_gaps_are_subset_of_requirements() {
    let catalog = Catalog::builtin().unwrap();
    let mut profile = Profile::new("Alice").unwrap();
    profile.add_skill("python", 2).unwrap();
    profile.add_skill("sql", 5).unwrap();
    for career in catalog.careers() {
        for gap in scoring::gaps(&profile, career) {
            assert!(career.requires(&gap), "{gap} not required by {}", career.name());
        }
    }
}

#[test]
fn test_recommend_rejects_zero() {
    let catalog = Catalog::builtin().unwrap();
    let profile = Profile::new("Alice").unwrap();
    let err = scoring::recommend(&profile, &catalog, 0).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_recommend_clamps_to_catalog_size() {
    let catalog = Catalog::builtin().unwrap();
    let profile = Profile::new("Alice").unwrap();
    let picks = scoring::recommend(&profile, &catalog, catalog.len() + 10).unwrap();
    assert_eq!(picks.len(), catalog.len());
}

#[test]
fn test_recommend_empty_profile_uses_name_tie_break() {
    // Every score is 0, so ordering falls back to career name ascending.
    let catalog = Catalog::builtin().unwrap();
    let profile = Profile::new("Alice").unwrap();
    let picks = scoring::recommend(&profile, &catalog, 3).unwrap();
    assert_eq!(picks.len(), 3);
    for pick in &picks {
        assert_eq!(pick.score, 0.0);
    }
    let names: Vec<&str> = picks.iter().map(|r| r.career.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn test_recommend_ranks_best_match_first() {
    let catalog = Catalog::builtin().unwrap();
    let mut profile = Profile::new("Alice").unwrap();
    profile.add_skill("devops", 5).unwrap();
    profile.add_skill("ci cd", 5).unwrap();
    profile.add_skill("kubernetes", 5).unwrap();
    profile.add_skill("docker", 5).unwrap();
    let picks = scoring::recommend(&profile, &catalog, 1).unwrap();
    assert_eq!(picks[0].career, "DevOps Engineer");
}

#[test]
fn test_analyze_covers_whole_catalog_sorted() {
    let catalog = Catalog::builtin().unwrap();
    let mut profile = Profile::new("Alice").unwrap();
    profile.add_skill("python", 4).unwrap();
    let results = scoring::analyze(&profile, &catalog);
    assert_eq!(results.len(), catalog.len());
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_score_monotone_in_single_skill() {
    let career = data_analyst();
    let mut previous = -1.0;
    for level in 0..=5 {
        let mut profile = Profile::new("Alice").unwrap();
        profile.add_skill("sql", 2).unwrap();
        profile.add_skill("python", level).unwrap();
        let score = scoring::score(&profile, &career);
        assert!(score >= previous);
        previous = score;
    }
}

#[test]
fn test_improvement_hints() {
    let mut profile = Profile::new("Alice").unwrap();
    profile.add_skill("python", 5).unwrap();
    profile.add_skill("sql", 3).unwrap();
    let picks = scoring::recommend(
        &profile,
        &Catalog::new(vec![data_analyst()]),
        1,
    )
    .unwrap();
    let hints = scoring::improvement_hints(&picks[0]);
    assert_eq!(hints.len(), 1);
    assert!(hints[0].contains("sql"));

    profile.add_skill("sql", 5).unwrap();
    let picks = scoring::recommend(&profile, &Catalog::new(vec![data_analyst()]), 1).unwrap();
    let hints = scoring::improvement_hints(&picks[0]);
    assert!(hints[0].contains("already meets"));
}
