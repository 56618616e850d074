//! Fixture-driven parser tests: expected analyses from tests/fixtures and
//! structural properties every analysis must satisfy.
//!
//! Run: cargo test -p trmorph --test parse_fixtures

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use trmorph::{ContextlessMorphologicParser, MorphemeContainer, MorphologicParser, full_parser};
use trmorph_core::RootMap;
use trmorph_core::lexicon::load_lexicon;

// ---------------------------------------------------------------------------
// Fixture loading
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Fixture {
    lexicon: Vec<String>,
    cases: Vec<Case>,
}

#[derive(Debug, Deserialize)]
struct Case {
    input: String,
    #[serde(default)]
    expected: Vec<ExpectedAnalysis>,
    #[serde(default)]
    no_parse: bool,
}

/// One analysis that must be among the parser's results. Other results
/// may exist alongside it.
#[derive(Debug, Deserialize)]
struct ExpectedAnalysis {
    lemma: String,
    root: String,
    suffixes: Vec<String>,
    #[serde(default)]
    surfaces: Option<Vec<String>>,
}

impl ExpectedAnalysis {
    fn matches(&self, container: &MorphemeContainer) -> bool {
        let transitions = container.transitions();
        let names: Vec<&str> = transitions.iter().map(|t| t.suffix().name()).collect();
        let surfaces: Vec<&str> = transitions.iter().map(|t| t.surface()).collect();
        container.lexeme().lemma == self.lemma
            && container.root().sequence().as_str() == self.root
            && names == self.suffixes
            && self.surfaces.as_ref().is_none_or(|expected| surfaces == *expected)
    }
}

fn load_fixture() -> Fixture {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/parses.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {}", path.display(), e))
}

fn create_parser(fixture: &Fixture) -> ContextlessMorphologicParser {
    let lexemes = load_lexicon(&fixture.lexicon.join("\n"))
        .unwrap_or_else(|e| panic!("invalid fixture lexicon: {}", e));
    full_parser(Arc::new(RootMap::from_lexemes(&lexemes)))
        .unwrap_or_else(|e| panic!("failed to build parser: {}", e))
}

fn render(results: &[MorphemeContainer]) -> Vec<String> {
    results.iter().map(ToString::to_string).collect()
}

// ---------------------------------------------------------------------------
// Expected analyses
// ---------------------------------------------------------------------------

#[test]
fn fixture_expectations() {
    let fixture = load_fixture();
    let parser = create_parser(&fixture);

    let mut failures = Vec::new();
    for case in &fixture.cases {
        let results = parser
            .parse(&case.input)
            .unwrap_or_else(|e| panic!("parse of {:?} failed: {}", case.input, e));

        if case.no_parse && !results.is_empty() {
            failures.push(format!("{:?}: expected no analysis, got {:?}", case.input, render(&results)));
        }
        for expected in &case.expected {
            if !results.iter().any(|r| expected.matches(r)) {
                failures.push(format!(
                    "{:?}: missing {} [{}], got {:?}",
                    case.input,
                    expected.lemma,
                    expected.suffixes.join("+"),
                    render(&results)
                ));
            }
        }
    }

    assert!(failures.is_empty(), "{} fixture mismatches:\n{}", failures.len(), failures.join("\n"));
}

// ---------------------------------------------------------------------------
// Structural properties
// ---------------------------------------------------------------------------

fn all_results() -> Vec<(String, Vec<MorphemeContainer>)> {
    let fixture = load_fixture();
    let parser = create_parser(&fixture);
    fixture
        .cases
        .iter()
        .map(|case| (case.input.clone(), parser.parse(&case.input).unwrap()))
        .collect()
}

#[test]
fn surface_is_conserved() {
    for (input, results) in all_results() {
        for r in &results {
            let mut rebuilt = r.root().sequence().as_str().to_string();
            for t in r.transitions() {
                rebuilt.push_str(t.surface());
            }
            assert_eq!(rebuilt, input, "{r}");
            assert_eq!(format!("{}{}", r.surface_so_far(), r.remaining_surface()), input);
        }
    }
}

#[test]
fn results_are_complete() {
    for (input, results) in all_results() {
        for r in &results {
            assert!(r.is_terminal(), "{input}: {r} ends in a non-terminal state");
            assert!(r.remaining_surface().is_empty(), "{input}: {r} left input unconsumed");
        }
    }
}

#[test]
fn consumption_only_moves_forward() {
    for (input, results) in all_results() {
        for r in &results {
            let mut consumed = r.root().sequence().as_str().to_string();
            assert!(input.starts_with(&consumed), "{input}: {r} root is not a prefix");
            for t in r.transitions() {
                consumed.push_str(t.surface());
                assert!(input.starts_with(&consumed), "{input}: {r} consumed {consumed:?} out of order");
            }
            assert_eq!(consumed.len(), input.len(), "{input}: {r}");
        }
    }
}

#[test]
fn groups_do_not_repeat_between_derivations() {
    for (input, results) in all_results() {
        for r in &results {
            let mut seen = HashSet::new();
            for t in r.transitions() {
                if t.is_derivational() {
                    seen.clear();
                    assert!(!t.surface().is_empty(), "{input}: {r} derives without consuming");
                }
                if let Some(group) = t.suffix().group() {
                    assert!(seen.insert(group), "{input}: {r} repeats a suffix group");
                }
            }
        }
    }
}

#[test]
fn parsing_is_deterministic() {
    let fixture = load_fixture();
    let first = create_parser(&fixture);
    let second = create_parser(&fixture);
    for case in &fixture.cases {
        let a = render(&first.parse(&case.input).unwrap());
        let b = render(&second.parse(&case.input).unwrap());
        let again = render(&first.parse(&case.input).unwrap());
        assert_eq!(a, b, "{}", case.input);
        assert_eq!(a, again, "{}", case.input);
    }
}

#[test]
fn ordinal_voicing_follows_the_last_digit() {
    let fixture = load_fixture();
    let parser = create_parser(&fixture);
    let lemma = |input: &str| parser.parse(input).unwrap()[0].lexeme().lemma.clone();
    assert_eq!(lemma("4."), "dördüncü");
    assert_eq!(lemma("3."), "üçüncü");
    assert_eq!(lemma("14."), "on dördüncü");
    assert_eq!(lemma("40."), "kırkıncı");
}

#[test]
fn copula_never_follows_the_accusative() {
    let fixture = load_fixture();
    let parser = create_parser(&fixture);
    let results = parser.parse("eviyim").unwrap();
    assert!(!results.is_empty());
    for r in &results {
        let names: Vec<&str> = r.transitions().iter().map(|t| t.suffix().name()).collect();
        assert!(!names.contains(&"Acc_Noun"), "{r}");
    }
}

#[test]
fn batch_parse_matches_single_parses() {
    let fixture = load_fixture();
    let parser = create_parser(&fixture);
    let inputs: Vec<&str> = fixture.cases.iter().map(|c| c.input.as_str()).collect();
    let batch = parser.parse_all(&inputs).unwrap();
    assert_eq!(batch.len(), inputs.len());
    for (input, results) in inputs.iter().zip(&batch) {
        assert_eq!(render(results), render(&parser.parse(input).unwrap()));
    }
}
