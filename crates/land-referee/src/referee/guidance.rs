use super::domain::{ScenarioResult, UserProfile};

/// Render the referee's comparative guidance across the three scenarios.
///
/// Winners are picked with strict comparisons against the running best, so a
/// tie always resolves to the scenario that appears earlier in the fixed
/// evaluation order.
pub fn render(scenarios: &[ScenarioResult; 3], profile: &UserProfile) -> String {
    let mut highest_roi = &scenarios[0];
    let mut lowest_risk = &scenarios[0];
    let mut most_feasible = &scenarios[0];

    for candidate in &scenarios[1..] {
        if candidate.scores.roi > highest_roi.scores.roi {
            highest_roi = candidate;
        }
        if candidate.scores.risk < lowest_risk.scores.risk {
            lowest_risk = candidate;
        }
        if candidate.scores.feasibility > most_feasible.scores.feasibility {
            most_feasible = candidate;
        }
    }

    format!(
        "REFEREE ANALYSIS:\n\
         • If ROI is your priority: {roi_scenario} shows highest potential ({roi:.1}/10)\n\
         • If risk minimization matters: {risk_scenario} offers lowest risk ({risk:.1}/10)\n\
         • If quick execution is key: {feasible_scenario} has best feasibility ({feasibility:.1}/10)\n\
         \n\
         Each scenario presents different trade-offs. Your {budget} budget, {risk_tolerance} risk \
         tolerance, and {time_horizon} timeline will determine which factors matter most to your \
         specific situation.",
        roi_scenario = highest_roi.scenario.label(),
        roi = highest_roi.scores.roi,
        risk_scenario = lowest_risk.scenario.label(),
        risk = lowest_risk.scores.risk,
        feasible_scenario = most_feasible.scenario.label(),
        feasibility = most_feasible.scores.feasibility,
        budget = profile.budget.label(),
        risk_tolerance = profile.risk_tolerance.label(),
        time_horizon = profile.time_horizon.label(),
    )
}
