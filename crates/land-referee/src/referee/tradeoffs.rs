use super::domain::{BudgetTier, RiskTolerance, ScenarioType, ScoreSet, TimeHorizon, UserProfile};

/// Qualitative read of one scenario's scores: short tags plus the longer
/// sentences backing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeoffAnalysis {
    pub tradeoffs: Vec<String>,
    pub explanations: Vec<String>,
}

/// Derive trade-off tags and explanations from a bounded score set.
///
/// Rules run in fixed order (roi, risk, feasibility, neighborhood fit,
/// regulatory, then profile warnings) and only ever append. The neighborhood
/// fit and regulatory rules stay silent in their middle band; the first three
/// always emit.
pub fn synthesize(
    scenario: ScenarioType,
    scores: &ScoreSet,
    profile: &UserProfile,
) -> TradeoffAnalysis {
    let mut tradeoffs = Vec::new();
    let mut explanations = Vec::new();
    let label = scenario.label();

    if scores.roi > 7.5 {
        tradeoffs.push("High return potential".to_string());
        explanations.push(format!(
            "Strong ROI ({:.1}/10) due to favorable {} market conditions",
            scores.roi,
            label.to_lowercase()
        ));
    } else if scores.roi > 5.0 {
        tradeoffs.push("Moderate returns expected".to_string());
        explanations.push(format!(
            "Moderate ROI ({:.1}/10) - steady but not exceptional returns",
            scores.roi
        ));
    } else {
        tradeoffs.push("Lower return expectations".to_string());
        explanations.push(format!(
            "Conservative ROI ({:.1}/10) - prioritize stability over growth",
            scores.roi
        ));
    }

    if scores.risk > 7.0 {
        tradeoffs.push("High volatility risk".to_string());
        explanations.push(format!(
            "Risk score {:.1}/10 - market fluctuations likely",
            scores.risk
        ));
    } else if scores.risk > 4.0 {
        tradeoffs.push("Moderate risk profile".to_string());
        explanations.push(format!(
            "Balanced risk ({:.1}/10) - monitor market trends",
            scores.risk
        ));
    } else {
        tradeoffs.push("Low risk investment".to_string());
        explanations.push(format!(
            "Low risk ({:.1}/10) - stable, predictable returns",
            scores.risk
        ));
    }

    if scores.feasibility < 4.0 {
        tradeoffs.push("Complex development process".to_string());
        explanations.push(format!(
            "Low feasibility ({:.1}/10) - expect longer timelines",
            scores.feasibility
        ));
    } else if scores.feasibility > 7.0 {
        tradeoffs.push("Easy to develop and manage".to_string());
        explanations.push(format!(
            "High feasibility ({:.1}/10) - straightforward execution",
            scores.feasibility
        ));
    } else {
        tradeoffs.push("Standard development complexity".to_string());
        explanations.push(format!(
            "Moderate feasibility ({:.1}/10) - typical development challenges",
            scores.feasibility
        ));
    }

    if scores.neighborhood_fit > 7.0 {
        tradeoffs.push("Excellent area alignment".to_string());
        explanations.push(format!(
            "Strong neighborhood fit ({:.1}/10) - {} suits local demand",
            scores.neighborhood_fit, label
        ));
    } else if scores.neighborhood_fit < 4.0 {
        tradeoffs.push("Area mismatch concerns".to_string());
        explanations.push(format!(
            "Poor neighborhood fit ({:.1}/10) - {} may not align with local needs",
            scores.neighborhood_fit, label
        ));
    }

    if scores.regulatory_complexity > 7.0 {
        tradeoffs.push("Complex permit process".to_string());
        explanations.push(format!(
            "High regulatory complexity ({:.1}/10) - extensive approvals needed",
            scores.regulatory_complexity
        ));
    } else if scores.regulatory_complexity < 4.0 {
        tradeoffs.push("Streamlined approvals".to_string());
        explanations.push(format!(
            "Low regulatory complexity ({:.1}/10) - faster permit process",
            scores.regulatory_complexity
        ));
    }

    if profile.budget == BudgetTier::Low && scores.roi < 6.0 {
        explanations.push("Low budget and modest ROI point to a longer payback period".to_string());
    }
    if profile.risk_tolerance == RiskTolerance::Low && scores.risk > 6.0 {
        explanations.push("Risk score exceeds your low risk tolerance".to_string());
    }
    if profile.time_horizon == TimeHorizon::ShortTerm && scores.feasibility < 5.0 {
        explanations.push("Low feasibility conflicts with a short-term timeline".to_string());
    }

    TradeoffAnalysis {
        tradeoffs,
        explanations,
    }
}
