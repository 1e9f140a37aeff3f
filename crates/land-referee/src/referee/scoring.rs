use crate::catalog::{AreaLevel, PropertyRecord};

use super::domain::{BudgetTier, RiskTolerance, ScenarioType, ScoreSet, TimeHorizon, UserProfile};

/// Multipliers derived from the investor profile. Budget scales returns,
/// risk tolerance scales exposure, time horizon scales execution capacity.
struct ProfileMultipliers {
    budget: f64,
    risk: f64,
    time: f64,
}

impl ProfileMultipliers {
    fn from_profile(profile: &UserProfile) -> Self {
        let budget = match profile.budget {
            BudgetTier::High => 1.2,
            BudgetTier::Medium => 1.0,
            BudgetTier::Low => 0.8,
        };
        let risk = match profile.risk_tolerance {
            RiskTolerance::High => 1.2,
            RiskTolerance::Medium => 1.0,
            RiskTolerance::Low => 0.8,
        };
        let time = match profile.time_horizon {
            TimeHorizon::LongTerm => 1.1,
            TimeHorizon::MediumTerm => 1.0,
            TimeHorizon::ShortTerm => 0.9,
        };

        Self { budget, risk, time }
    }
}

/// Numeric site signals lifted out of a property record.
struct SiteSignals {
    footfall: f64,
    commercial: f64,
    density: f64,
    /// Plot size in thousands of square feet; unbounded before clamping.
    plot: f64,
    dense_residential: bool,
    commercial_presence_low: bool,
}

impl SiteSignals {
    fn from_property(property: &PropertyRecord) -> Self {
        Self {
            footfall: property.footfall.ordinal(),
            commercial: property.commercial_activity.ordinal(),
            density: property.residential_density.ordinal(),
            plot: property.plot_size_sqft / 1000.0,
            dense_residential: property.residential_density > AreaLevel::Medium,
            commercial_presence_low: property.commercial_activity <= AreaLevel::Medium,
        }
    }
}

/// Score one property under one development scenario for one investor.
///
/// Pure and deterministic: identical inputs always produce identical output.
pub fn score(
    property: &PropertyRecord,
    profile: &UserProfile,
    scenario: ScenarioType,
) -> ScoreSet {
    let m = ProfileMultipliers::from_profile(profile);
    let s = SiteSignals::from_property(property);

    // Each arm is one closed formula record; adding a scenario variant must
    // fail to compile until a formula is written for it.
    let (roi, risk, feasibility, neighborhood_fit, regulatory_complexity) = match scenario {
        ScenarioType::ResidentialHousing => (
            (s.density * 2.0 + s.plot * 0.5 + 2.0) * m.budget,
            (5.0 - s.density + s.plot * 0.3) * m.risk,
            (8.0 - s.plot * 0.5 + s.density * 0.5) * m.time,
            s.density * 2.0 + if s.commercial_presence_low { 2.0 } else { 1.0 },
            6.0 + s.plot * 0.3 + if s.dense_residential { 1.0 } else { 0.0 },
        ),
        ScenarioType::CommercialRetail => (
            (s.commercial * 2.0 + s.footfall + s.plot * 0.3) * m.budget,
            (s.commercial + s.footfall + 1.0) * m.risk,
            (7.0 - s.plot * 0.4 + s.commercial * 0.5) * m.time,
            s.commercial * 2.0 + s.footfall,
            7.0 + s.plot * 0.4 + s.commercial * 0.5,
        ),
        ScenarioType::CafeHotel => (
            (s.footfall * 2.5 + s.commercial + s.plot * 0.2) * m.budget,
            (s.footfall + s.commercial + 2.0) * m.risk,
            (6.0 - s.plot * 0.3 + s.footfall * 0.5) * m.time,
            s.footfall * 2.0 + s.commercial + s.density * 0.5,
            5.0 + s.plot * 0.2 + s.footfall * 0.3,
        ),
    };

    ScoreSet {
        roi: bound(roi),
        risk: bound(risk),
        feasibility: bound(feasibility),
        neighborhood_fit: bound(neighborhood_fit),
        regulatory_complexity: bound(regulatory_complexity),
    }
}

/// Clamp to the published [1.0, 10.0] range, then round half-up to one
/// decimal place. Idempotent on already-bounded values.
pub fn bound(value: f64) -> f64 {
    (value.clamp(1.0, 10.0) * 10.0).round() / 10.0
}
