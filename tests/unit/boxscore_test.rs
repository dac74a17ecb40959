//! Unit tests for box-score queues

use pbp_ledger::boxscore::{category_for_code, BoxScoreSequenceExtractor};
use pbp_ledger::event::{BoxScoreRow, ResultCategory};

#[test]
fn queues_preserve_box_score_order() {
    let rows = vec![BoxScoreRow::new("X", "A", &["一安", "三振", "游滾"])];
    let mut queues = BoxScoreSequenceExtractor::extract(&rows);
    let queue = queues.get_mut("X").unwrap();

    let popped: Vec<String> = std::iter::from_fn(|| queue.pop_front()).collect();
    assert_eq!(popped, vec!["一安", "三振", "游滾"]);
    assert!(queue.is_exhausted());
    assert_eq!(queue.consumed(), 3);
}

#[test]
fn player_without_results_is_exhausted_from_start() {
    let rows = vec![BoxScoreRow::new("X", "A", &[])];
    let queues = BoxScoreSequenceExtractor::extract(&rows);
    assert!(queues["X"].is_exhausted());
}

#[test]
fn code_mapping_precedence() {
    // "犧" comes before the out fragments
    assert_eq!(category_for_code("犧飛"), Some(ResultCategory::Sacrifice));
    // "失" comes before the on-base fragments
    assert_eq!(category_for_code("一失"), Some(ResultCategory::Error));
    assert_eq!(category_for_code("左全打"), Some(ResultCategory::OnBase));
    assert_eq!(category_for_code("故四"), Some(ResultCategory::OnBase));
    assert_eq!(category_for_code("捕邪"), Some(ResultCategory::Out));
    assert_eq!(category_for_code("妨礙"), None);
}
