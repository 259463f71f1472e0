// Replay Report Types
// One row per dispatched event, one summary per scenario

use invest_gate::Transition;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub scenario: String,
    pub step: usize,
    #[serde(flatten)]
    pub transition: Transition,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub label: String,
    pub steps: Vec<StepRecord>,
    pub failures: Vec<String>,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn print_table(&self) {
        println!("  {}: {}", self.scenario, self.label);
        for s in &self.steps {
            println!(
                "    {:>2}  {:<22} {:>12} -> {:<12} renders {:?}",
                s.step, s.transition.event, s.transition.from, s.transition.to, s.transition.view
            );
        }
        for f in &self.failures {
            println!("    ! {}", f);
        }
        println!("    {}\n", if self.passed() { "PASS" } else { "FAIL" });
    }
}
