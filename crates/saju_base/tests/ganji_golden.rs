//! Integration tests for the sexagenary table and the Five Elements engine.
//!
//! Pure-math tests (no solar-longitude provider needed).

use saju_base::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, ElementRelation, GanJi, SajuError, SexagenaryTable,
    all_gapja, compatibility,
};

// ---------------------------------------------------------------------------
// Sexagenary cycle
// ---------------------------------------------------------------------------

#[test]
fn two_letter_round_trip_all_60() {
    for i in 0..60 {
        let g = GanJi::at(i);
        assert_eq!(GanJi::find(&g.two_letters()).unwrap(), g, "index {i}");
    }
}

#[test]
fn cycle_closes_after_60() {
    for i in -120..120 {
        assert_eq!(GanJi::at(i), GanJi::at(i + 60), "index {i}");
    }
}

#[test]
fn exactly_half_of_pairs_are_legal() {
    let mut legal = 0;
    for s in ALL_STEMS {
        for b in ALL_BRANCHES {
            match GanJi::from_parts(s, b) {
                Ok(g) => {
                    legal += 1;
                    assert_eq!((g.stem(), g.branch()), (s, b));
                }
                Err(e) => {
                    assert_eq!(e, SajuError::InvalidCombination { stem: s, branch: b });
                    assert_ne!(s.index() % 2, b.index() % 2);
                }
            }
        }
    }
    assert_eq!(legal, 60);
}

#[test]
fn table_entries_are_distinct() {
    let names: std::collections::HashSet<String> =
        SexagenaryTable::shared().iter().map(|g| g.two_letters()).collect();
    assert_eq!(names.len(), 60);
}

#[test]
fn catalog_agrees_with_table() {
    for (entry, g) in all_gapja().zip(SexagenaryTable::shared().iter()) {
        assert_eq!(entry.ganji, g);
        assert_eq!(entry.code, g.index() + 1);
        assert_eq!(entry.stem_element, g.stem().element());
    }
}

#[test]
fn table_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|t| std::thread::spawn(move || GanJi::at(t * 15).two_letters()))
        .collect();
    let names: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(names, ["갑자", "기묘", "갑오", "기유"]);
}

// ---------------------------------------------------------------------------
// Five Elements
// ---------------------------------------------------------------------------

#[test]
fn relation_inverses_hold_for_all_pairs() {
    for a in ALL_ELEMENTS {
        for b in ALL_ELEMENTS {
            let ab = compatibility(a, b);
            let ba = compatibility(b, a);
            match ab {
                ElementRelation::Generates => assert_eq!(ba, ElementRelation::IsGeneratedBy),
                ElementRelation::IsGeneratedBy => assert_eq!(ba, ElementRelation::Generates),
                ElementRelation::Destroys => assert_eq!(ba, ElementRelation::IsDestroyedBy),
                ElementRelation::IsDestroyedBy => assert_eq!(ba, ElementRelation::Destroys),
                ElementRelation::Same => assert_eq!(a, b),
                ElementRelation::Neutral => panic!("{a:?}/{b:?} should be related"),
            }
        }
    }
}

#[test]
fn each_element_generates_and_destroys_one() {
    for a in ALL_ELEMENTS {
        let generated = ALL_ELEMENTS
            .iter()
            .filter(|&&b| compatibility(a, b) == ElementRelation::Generates)
            .count();
        let destroyed = ALL_ELEMENTS
            .iter()
            .filter(|&&b| compatibility(a, b) == ElementRelation::Destroys)
            .count();
        assert_eq!((generated, destroyed), (1, 1), "{a:?}");
    }
}
