//! End-to-end reconstruction of fixture games.

use std::collections::HashMap;

use pbp_ledger::error::EngineWarning;
use pbp_ledger::event::{BoxScoreRow, GameInput, Half, RawFragment, ResultCategory};
use pbp_ledger::EventReconciler;

use super::helpers::load_game_fixture;

fn reconstruct(name: &str) -> pbp_ledger::Reconstruction {
    EventReconciler::new().reconstruct(&load_game_fixture(name))
}

// ── Full game ───────────────────────────────────────────────────────

#[test]
fn basic_game_is_clean() {
    let result = reconstruct("game_basic.json");
    assert!(result.is_clean(), "warnings: {:?}", result.warnings);
    assert_eq!(result.log.game_id.as_deref(), Some("2024-opening"));
    assert_eq!(result.log.events.len(), 10);
    assert_eq!(result.log.plate_appearances(), 8);
    assert_eq!(result.log.unmatched_count(), 0);
}

#[test]
fn basic_game_situations() {
    let log = reconstruct("game_basic.json").log;
    let situations: Vec<(u8, &str)> = log
        .events
        .iter()
        .map(|e| {
            (
                e.outs_before.unwrap(),
                e.runners_before_description.as_deref().unwrap(),
            )
        })
        .collect();

    assert_eq!(
        situations,
        vec![
            (0, "bases empty"),
            (0, "first base occupied"),
            (0, "second/third base occupied"),
            (0, "second/third base occupied"),
            (1, "second base occupied"),
            (2, "second base occupied"),
            (2, "second base occupied"),
            (0, "bases empty"),
            (0, "first base occupied"),
            (0, "second base occupied"),
        ]
    );
}

#[test]
fn basic_game_result_codes_and_categories() {
    let log = reconstruct("game_basic.json").log;
    let codes: Vec<&str> = log
        .events
        .iter()
        .map(|e| e.result_short.as_deref().unwrap())
        .collect();
    assert_eq!(
        codes,
        vec!["左安", "右二安", "no play", "犧飛", "三振", "游失", "中飛", "四壞", "no play", "左全打"]
    );

    let categories: Vec<ResultCategory> = log.events.iter().map(|e| e.result_category).collect();
    assert_eq!(categories[3], ResultCategory::Sacrifice);
    assert_eq!(categories[5], ResultCategory::Error);
    assert_eq!(categories[6], ResultCategory::Out);
    assert_eq!(categories[9], ResultCategory::OnBase);
}

#[test]
fn basic_game_runs_and_pitches() {
    let log = reconstruct("game_basic.json").log;
    let runs: u32 = log.events.iter().map(|e| e.runs_scored_on_play).sum();
    assert_eq!(runs, 4);

    let first = &log.events[0];
    assert_eq!(first.hitter_name, "陳傑憲");
    assert_eq!(first.opposing_pitcher_name.as_deref(), Some("李振昌"));
    assert_eq!(first.pitch_sequence.len(), 3);
    assert_eq!(first.pitch_sequence[2].call, "擊出");
}

#[test]
fn sequence_in_game_spans_the_game() {
    let log = reconstruct("game_basic.json").log;
    let chen: Vec<Option<u32>> = log.for_hitter("陳傑憲").map(|e| e.sequence_in_game).collect();
    assert_eq!(chen, vec![Some(1), Some(2)]);

    let su: Vec<Option<u32>> = log.for_hitter("蘇智傑").map(|e| e.sequence_in_game).collect();
    assert_eq!(su, vec![None, Some(1)]);
}

#[test]
fn half_innings_are_grouped_in_order() {
    let log = reconstruct("game_basic.json").log;
    assert_eq!(log.half_inning(1, Half::Top).count(), 7);
    assert_eq!(log.half_inning(1, Half::Bottom).count(), 3);
}

// ── Mismatched sources ──────────────────────────────────────────────

#[test]
fn mismatch_warnings_in_walk_order() {
    let result = reconstruct("game_mismatch.json");
    assert_eq!(
        result.warnings,
        vec![
            EngineWarning::FragmentSkipped {
                index: 3,
                reason: "fragment 3: no hitter name".to_string(),
            },
            EngineWarning::QueueExhausted {
                hitter: "X".to_string(),
                inning: 1,
                half: Half::Top,
            },
            EngineWarning::HitterNotInBoxScore {
                hitter: "Y".to_string(),
                inning: 1,
                half: Half::Top,
            },
            EngineWarning::UnconsumedCodes {
                player: "Z".to_string(),
                remaining: vec!["二安".to_string()],
            },
        ]
    );
}

#[test]
fn scenario_queue_exhaustion() {
    let log = reconstruct("game_mismatch.json").log;
    let x: Vec<(Option<&str>, bool)> = log
        .for_hitter("X")
        .map(|e| (e.result_short.as_deref(), e.unmatched))
        .collect();
    assert_eq!(x, vec![(Some("一安"), false), (Some("三振"), false), (None, true)]);
    assert_eq!(log.unmatched_count(), 2);
}

#[test]
fn warnings_serialize_with_kind_tag() {
    let result = reconstruct("game_mismatch.json");
    let json = serde_json::to_value(&result.warnings).unwrap();
    assert_eq!(json[1]["kind"], "queue_exhausted");
    assert_eq!(json[1]["half"], "top");
    assert_eq!(json[3]["remaining"][0], "二安");
}

#[test]
fn substitution_lines_do_not_take_plate_appearances() {
    let input = GameInput {
        game_id: None,
        fragments: vec![
            RawFragment::new(3, Half::Bottom, "更換投手：陳韻文"),
            RawFragment::new(3, Half::Bottom, "代打：王柏融"),
            RawFragment::new(3, Half::Bottom, "王柏融：擊出一壘安打"),
        ],
        box_score: vec![BoxScoreRow::new("王柏融", "Fighters", &["一安"])],
    };
    let result = EventReconciler::new().reconstruct(&input);

    assert!(result.is_clean(), "warnings: {:?}", result.warnings);
    let events = &result.log.events;
    assert!(!events[0].is_formal_plate_appearance);
    assert!(!events[1].is_formal_plate_appearance);
    assert_eq!(events[0].result_short.as_deref(), Some("no play"));
    assert_eq!(events[1].sequence_in_game, None);
    assert_eq!(events[2].hitter_name, "王柏融");
    assert_eq!(events[2].sequence_in_game, Some(1));
    assert_eq!(events[2].result_short.as_deref(), Some("一安"));
}

// ── Properties ──────────────────────────────────────────────────────

#[test]
fn reconstruction_is_byte_identical_across_runs() {
    for name in ["game_basic.json", "game_mismatch.json"] {
        let input = load_game_fixture(name);
        let first = serde_json::to_string(&EventReconciler::new().reconstruct(&input)).unwrap();
        let second = serde_json::to_string(&EventReconciler::new().reconstruct(&input)).unwrap();
        assert_eq!(first, second, "{} differs between runs", name);
    }
}

#[test]
fn formal_events_draw_codes_in_queue_order() {
    let input = load_game_fixture("game_basic.json");
    let log = EventReconciler::new().reconstruct(&input).log;

    let mut drawn: HashMap<&str, Vec<&str>> = HashMap::new();
    for e in log.events.iter().filter(|e| e.is_formal_plate_appearance) {
        drawn
            .entry(e.hitter_name.as_str())
            .or_default()
            .push(e.result_short.as_deref().unwrap());
    }
    for row in &input.box_score {
        let expected: Vec<&str> = row.results.iter().map(String::as_str).collect();
        assert_eq!(drawn[row.player_name.as_str()], expected);
    }
}

#[test]
fn non_formal_events_never_consume_codes() {
    let input = GameInput {
        game_id: None,
        fragments: vec![
            RawFragment::with_hitter(2, Half::Bottom, "X", "投手牽制一壘"),
            RawFragment::with_hitter(2, Half::Bottom, "X", "捕手捕逸"),
            RawFragment::with_hitter(2, Half::Bottom, "X", "擊出一壘安打"),
        ],
        box_score: vec![BoxScoreRow::new("X", "A", &["一安"])],
    };
    let result = EventReconciler::new().reconstruct(&input);
    assert!(result.is_clean());
    let shorts: Vec<&str> = result
        .log
        .events
        .iter()
        .map(|e| e.result_short.as_deref().unwrap())
        .collect();
    assert_eq!(shorts, vec!["no play", "no play", "一安"]);
}
