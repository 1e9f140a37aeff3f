use crate::catalog::PropertyRecord;
use serde::Serialize;

use super::domain::{EvaluationReport, ScenarioResult};

/// Wire representation of one scenario; scores are rendered as strings with
/// exactly one decimal digit.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioView {
    #[serde(rename = "type")]
    pub scenario_type: &'static str,
    pub roi_score: String,
    pub risk_score: String,
    pub feasibility_score: String,
    pub neighborhood_fit_score: String,
    pub regulatory_complexity_score: String,
    pub tradeoffs: Vec<String>,
    pub explanations: Vec<String>,
}

/// Wire representation of a full referee report.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationView {
    pub property: PropertyRecord,
    pub scenarios: Vec<ScenarioView>,
    pub decision_guidance: String,
}

fn one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

impl ScenarioResult {
    pub fn view(&self) -> ScenarioView {
        ScenarioView {
            scenario_type: self.scenario.label(),
            roi_score: one_decimal(self.scores.roi),
            risk_score: one_decimal(self.scores.risk),
            feasibility_score: one_decimal(self.scores.feasibility),
            neighborhood_fit_score: one_decimal(self.scores.neighborhood_fit),
            regulatory_complexity_score: one_decimal(self.scores.regulatory_complexity),
            tradeoffs: self.tradeoffs.clone(),
            explanations: self.explanations.clone(),
        }
    }
}

impl EvaluationReport {
    pub fn view(&self) -> EvaluationView {
        EvaluationView {
            property: self.property.clone(),
            scenarios: self.scenarios.iter().map(ScenarioResult::view).collect(),
            decision_guidance: self.decision_guidance.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::referee::domain::{ScenarioType, ScoreSet};

    #[test]
    fn scores_serialize_with_one_decimal_digit() {
        let result = ScenarioResult {
            scenario: ScenarioType::CafeHotel,
            scores: ScoreSet {
                roi: 10.0,
                risk: 2.7,
                feasibility: 9.1,
                neighborhood_fit: 7.0,
                regulatory_complexity: 5.5,
            },
            tradeoffs: vec!["High return potential".to_string()],
            explanations: Vec::new(),
        };

        let view = result.view();
        assert_eq!(view.scenario_type, "Cafe / Hotel");
        assert_eq!(view.roi_score, "10.0");
        assert_eq!(view.risk_score, "2.7");
        assert_eq!(view.neighborhood_fit_score, "7.0");

        let json = serde_json::to_value(&view).expect("serializes");
        assert_eq!(json["type"], "Cafe / Hotel");
        assert_eq!(json["roi_score"], "10.0");
    }
}
