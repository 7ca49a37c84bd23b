//! Tests for the inheritance resolver: exhaustive table, symmetry, input validation.

use std::collections::BTreeSet;

use rstest::rstest;

use bloodline::{resolve, AboPhenotype, DomainError, Genotype, RhSign};

fn g(label: &str) -> Genotype {
    label.parse().expect("valid blood type")
}

fn set(labels: &[&str]) -> BTreeSet<Genotype> {
    labels.iter().map(|l| g(l)).collect()
}

// ============================================================
// Exhaustive ABO x Rh table
// ============================================================

#[rstest]
#[case("A", "A", &["A", "O"])]
#[case("A", "B", &["A", "B", "AB", "O"])]
#[case("A", "AB", &["A", "B", "AB", "O"])]
#[case("A", "O", &["A", "O"])]
#[case("B", "A", &["A", "B", "AB", "O"])]
#[case("B", "B", &["B", "O"])]
#[case("B", "AB", &["A", "B", "AB", "O"])]
#[case("B", "O", &["B", "O"])]
#[case("AB", "A", &["A", "B", "AB", "O"])]
#[case("AB", "B", &["A", "B", "AB", "O"])]
#[case("AB", "AB", &["A", "B", "AB"])]
#[case("AB", "O", &["A", "B", "O"])]
#[case("O", "A", &["A", "O"])]
#[case("O", "B", &["B", "O"])]
#[case("O", "AB", &["A", "B", "O"])]
#[case("O", "O", &["O"])]
fn given_parent_pair_when_resolving_then_matches_inheritance_table(
    #[case] abo1: &str,
    #[case] abo2: &str,
    #[case] groups: &[&str],
    #[values("+", "-")] rh1: &str,
    #[values("+", "-")] rh2: &str,
) {
    // Arrange
    let parent1 = Genotype::from_parts(abo1, rh1).unwrap();
    let parent2 = Genotype::from_parts(abo2, rh2).unwrap();
    let child_rh = if rh1 == "-" && rh2 == "-" { "-" } else { "+" };
    let expected: BTreeSet<Genotype> = groups
        .iter()
        .map(|abo| Genotype::from_parts(abo, child_rh).unwrap())
        .collect();

    // Act
    let children = resolve(parent1, parent2);

    // Assert
    assert_eq!(children, expected, "{parent1} x {parent2}");
}

// ============================================================
// Fixed cases
// ============================================================

#[test]
fn given_two_o_negative_parents_when_resolving_then_only_o_negative() {
    assert_eq!(resolve(g("O-"), g("O-")), set(&["O-"]));
}

#[test]
fn given_two_ab_positive_parents_when_resolving_then_no_o_child() {
    assert_eq!(resolve(g("AB+"), g("AB+")), set(&["A+", "B+", "AB+"]));
}

#[test]
fn given_a_and_b_negative_parents_when_resolving_then_all_groups_negative() {
    assert_eq!(
        resolve(g("A-"), g("B-")),
        set(&["A-", "B-", "AB-", "O-"])
    );
}

#[test]
fn given_one_positive_parent_when_resolving_then_children_positive_only() {
    assert_eq!(resolve(g("O+"), g("O-")), set(&["O+"]));
}

#[test]
fn given_a_and_b_parents_when_resolving_then_includes_codominant_ab() {
    let children = resolve(g("A+"), g("B+"));
    assert!(children.contains(&Genotype::new(AboPhenotype::AB, RhSign::Positive)));
}

// ============================================================
// Properties
// ============================================================

#[test]
fn given_any_parents_when_swapped_then_same_children() {
    for p1 in Genotype::all() {
        for p2 in Genotype::all() {
            assert_eq!(resolve(p1, p2), resolve(p2, p1), "{p1} x {p2}");
        }
    }
}

#[test]
fn given_same_inputs_when_resolving_twice_then_identical_sets() {
    for p1 in Genotype::all() {
        for p2 in Genotype::all() {
            let first = resolve(p1, p2);
            let second = resolve(p1, p2);
            assert_eq!(first, second);
            assert!(!first.is_empty());
        }
    }
}

#[test]
fn given_any_parents_when_resolving_then_children_share_one_rh_sign() {
    for p1 in Genotype::all() {
        for p2 in Genotype::all() {
            let signs: BTreeSet<RhSign> = resolve(p1, p2).iter().map(|c| c.rh).collect();
            assert_eq!(signs.len(), 1, "{p1} x {p2}");
        }
    }
}

// ============================================================
// Invalid input
// ============================================================

#[rstest]
#[case("C+")]
#[case("ABO-")]
#[case("A")]
#[case("+")]
#[case("A~")]
#[case("")]
#[case("0+")]
#[case("ab+")]
#[case("A +")]
#[case(" O-")]
fn given_out_of_domain_label_when_parsing_then_invalid_genotype(#[case] input: &str) {
    let err = input.parse::<Genotype>().unwrap_err();
    assert!(matches!(err, DomainError::InvalidGenotype { .. }));
}

#[rstest]
#[case("X", "+")]
#[case("A", "?")]
#[case("", "-")]
#[case("AB", "")]
#[case("a", "+")]
#[case("B", " -")]
fn given_out_of_domain_part_when_from_parts_then_invalid_genotype(
    #[case] abo: &str,
    #[case] rh: &str,
) {
    let err = Genotype::from_parts(abo, rh).unwrap_err();
    assert!(matches!(err, DomainError::InvalidGenotype { .. }));
}
