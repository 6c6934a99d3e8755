use super::*;

const EXPECTED_SECTION_ORDER: &[&str] = &[
    "Getting started",
    "Privacy & data",
    "Extraction quality",
    "1099-DA & crypto",
    "Exporting & filing",
    "Pro & roadmap",
];

#[test]
fn catalog_sections_are_in_fixed_order() {
    let titles: Vec<&str> = CATALOG.iter().map(|s| s.title).collect();
    assert_eq!(titles, EXPECTED_SECTION_ORDER);
}

#[test]
fn every_section_has_at_least_one_item() {
    for section in CATALOG {
        assert!(!section.items.is_empty(), "empty section: {}", section.title);
    }
}

#[test]
fn questions_are_unique_within_each_section() {
    for section in CATALOG {
        for (i, item) in section.items.iter().enumerate() {
            let duplicate = section.items[i + 1..].iter().any(|other| other.question == item.question);
            assert!(!duplicate, "duplicate question in {}: {}", section.title, item.question);
        }
    }
}

#[test]
fn no_question_or_answer_is_blank() {
    for section in CATALOG {
        for item in section.items {
            assert!(!item.question.trim().is_empty());
            assert!(!item.answer.trim().is_empty());
        }
    }
}

#[test]
fn getting_started_keeps_authored_text_verbatim() {
    let first = CATALOG[0].items[0];
    assert_eq!(first.question, "What does TaxClaw actually do?");
    assert_eq!(
        first.answer,
        "TaxClaw reads common tax PDFs/images (W-2s, 1099s, K-1s) and extracts the key boxes into structured data you can review and export. It's built to save you from manual re-typing.",
    );
    assert_eq!(CATALOG[0].items[1].question, "How do I install it?");
}

#[test]
fn catalog_item_totals_are_stable() {
    let counts: Vec<usize> = CATALOG.iter().map(|s| s.items.len()).collect();
    assert_eq!(counts, [4, 3, 6, 3, 3, 2]);
}
