use std::collections::{BTreeMap, BTreeSet};

use glitch_core::marks::{marks, MarkTables, Placement};

fn code_points(table: &[char]) -> Vec<u32> {
    table.iter().map(|ch| *ch as u32).collect()
}

fn multiplicities(table: &[char]) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    for cp in code_points(table) {
        *counts.entry(cp).or_insert(0) += 1;
    }
    counts
}

#[test]
fn table_sizes_match_curated_list() {
    let tables = marks();
    assert_eq!(tables.top().len(), 47);
    assert_eq!(tables.middle().len(), 5);
    assert_eq!(tables.bottom().len(), 46);
}

#[test]
fn duplicates_are_preserved() {
    let tables = marks();
    let top = multiplicities(tables.top());
    assert_eq!(top[&0x0344u32], 2);
    assert_eq!(top[&0x035Du32], 2);
    assert_eq!(top.values().filter(|n| **n > 1).count(), 2);
    assert!(multiplicities(tables.middle()).values().all(|n| *n == 1));
    assert!(multiplicities(tables.bottom()).values().all(|n| *n == 1));
}

#[test]
fn tables_are_disjoint() {
    let tables = marks();
    let top: BTreeSet<_> = code_points(tables.top()).into_iter().collect();
    let middle: BTreeSet<_> = code_points(tables.middle()).into_iter().collect();
    let bottom: BTreeSet<_> = code_points(tables.bottom()).into_iter().collect();
    assert!(top.is_disjoint(&middle));
    assert!(top.is_disjoint(&bottom));
    assert!(middle.is_disjoint(&bottom));
}

#[test]
fn exact_membership() {
    let tables = marks();
    let middle: Vec<u32> = (0x0334..=0x0338).collect();
    assert_eq!(code_points(tables.middle()), middle);

    let top: BTreeSet<_> = code_points(tables.top()).into_iter().collect();
    for cp in (0x0300u32..=0x0315).chain([0x031A, 0x031B]).chain(0x033D..=0x0344) {
        assert!(top.contains(&cp), "U+{cp:04X} missing from top");
    }
    for cp in [0x0346u32, 0x034A, 0x034B, 0x034C, 0x0350, 0x0351, 0x0352, 0x0357, 0x0358, 0x035B] {
        assert!(top.contains(&cp), "U+{cp:04X} missing from top");
    }
    for cp in [0x035Du32, 0x0360, 0x0361] {
        assert!(top.contains(&cp), "U+{cp:04X} missing from top");
    }

    let bottom: BTreeSet<_> = code_points(tables.bottom()).into_iter().collect();
    for cp in (0x0316u32..=0x0333).filter(|cp| *cp != 0x031A && *cp != 0x031B) {
        assert!(bottom.contains(&cp), "U+{cp:04X} missing from bottom");
    }
    for cp in (0x0339u32..=0x033C).chain([0x0345, 0x0347, 0x0348, 0x0349, 0x034D, 0x034E]) {
        assert!(bottom.contains(&cp), "U+{cp:04X} missing from bottom");
    }
    for cp in [0x0353u32, 0x0354, 0x0355, 0x0356, 0x0359, 0x035A, 0x035C, 0x035F] {
        assert!(bottom.contains(&cp), "U+{cp:04X} missing from bottom");
    }
}

#[test]
fn unused_marks_are_excluded() {
    let tables = marks();
    for ch in ['\u{034F}', '\u{0362}', 'a', ' '] {
        assert_eq!(tables.placement_of(ch), None);
        assert!(!tables.contains(ch));
    }
}

#[test]
fn placement_lookup_matches_tables() {
    let tables = marks();
    for placement in Placement::ALL {
        for ch in tables.for_placement(placement) {
            assert_eq!(tables.placement_of(*ch), Some(placement));
        }
    }
    assert_eq!(tables.placement_of('\u{0300}'), Some(Placement::Top));
    assert_eq!(tables.placement_of('\u{0336}'), Some(Placement::Middle));
    assert_eq!(tables.placement_of('\u{0316}'), Some(Placement::Bottom));
}

#[test]
fn build_is_deterministic_and_shared() {
    assert_eq!(MarkTables::build(), *marks());
    assert!(std::ptr::eq(marks(), marks()));
}
