//! Classify command handler

use anyhow::Result;

use pbp_ledger::classifier::{ClassifierRules, TextEventClassifier};
use pbp_ledger::event::{Half, RawFragment};
use pbp_ledger::runner::{self, HitterOutcome, RunnerEffect};

use super::load_config;
use crate::cli::GlobalArgs;

/// Print how one fragment is read: category, flags and movement rules.
#[cfg(not(tarpaulin_include))]
pub fn handle(global: &GlobalArgs, text: &str, hitter: Option<&str>) -> Result<()> {
    let config = load_config(global)?;
    let classifier = TextEventClassifier::new(ClassifierRules::from_config(&config.rules));

    let fragment = match hitter {
        Some(name) => RawFragment::with_hitter(1, Half::Top, name, text),
        None => RawFragment::new(1, Half::Top, text),
    };

    let Some(event) = classifier.classify(0, &fragment)? else {
        println!("(noise: blank fragment)");
        return Ok(());
    };

    println!("hitter:      {}", event.hitter_name);
    println!("description: {}", event.description);
    println!("category:    {}", event.result_category);
    println!(
        "formal:      {}",
        if event.is_formal_plate_appearance { "yes" } else { "no" }
    );
    println!("runs:        {}", event.runs_scored_on_play);
    match runner::outs_after(&event.description) {
        Some(outs) => println!("outs after:  {}", outs),
        None => println!("outs after:  (unchanged)"),
    }

    let hitter_line = match runner::hitter_outcome(&event.description) {
        HitterOutcome::Reaches(base) => format!("reaches {}", base),
        HitterOutcome::Scores => "scores".to_string(),
        HitterOutcome::Stays => "off base".to_string(),
    };
    println!("hitter ends: {}", hitter_line);

    for movement in runner::runner_movements(&event.description) {
        let effect = match movement.effect {
            RunnerEffect::Out => "out".to_string(),
            RunnerEffect::Scores => "scores".to_string(),
            RunnerEffect::AdvanceTo(base) => format!("to {}", base),
            RunnerEffect::AdvanceOne => "up one base".to_string(),
        };
        println!("runner:      {} -> {}", movement.from, effect);
    }
    Ok(())
}
