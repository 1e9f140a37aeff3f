use crate::catalog::PropertyRecord;
use serde::{Deserialize, Serialize};

use super::RefereeError;

/// Investor budget band supplied with each evaluation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

impl BudgetTier {
    pub const fn label(self) -> &'static str {
        match self {
            BudgetTier::Low => "Low",
            BudgetTier::Medium => "Medium",
            BudgetTier::High => "High",
        }
    }

    fn parse(value: &str) -> Result<Self, RefereeError> {
        match value {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            other => Err(RefereeError::invalid_field(
                "budget",
                other,
                "Low, Medium, High",
            )),
        }
    }
}

/// Appetite for volatility, same bands as the budget tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    pub const fn label(self) -> &'static str {
        match self {
            RiskTolerance::Low => "Low",
            RiskTolerance::Medium => "Medium",
            RiskTolerance::High => "High",
        }
    }

    fn parse(value: &str) -> Result<Self, RefereeError> {
        match value {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            other => Err(RefereeError::invalid_field(
                "risk_tolerance",
                other,
                "Low, Medium, High",
            )),
        }
    }
}

/// Investment window the investor is planning against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeHorizon {
    #[serde(rename = "Short-term")]
    ShortTerm,
    #[serde(rename = "Medium-term")]
    MediumTerm,
    #[serde(rename = "Long-term")]
    LongTerm,
}

impl TimeHorizon {
    pub const fn label(self) -> &'static str {
        match self {
            TimeHorizon::ShortTerm => "Short-term",
            TimeHorizon::MediumTerm => "Medium-term",
            TimeHorizon::LongTerm => "Long-term",
        }
    }

    fn parse(value: &str) -> Result<Self, RefereeError> {
        match value {
            "Short-term" => Ok(Self::ShortTerm),
            "Medium-term" => Ok(Self::MediumTerm),
            "Long-term" => Ok(Self::LongTerm),
            other => Err(RefereeError::invalid_field(
                "time_horizon",
                other,
                "Short-term, Medium-term, Long-term",
            )),
        }
    }
}

/// Validated investor constraints for a single evaluation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub budget: BudgetTier,
    pub risk_tolerance: RiskTolerance,
    pub time_horizon: TimeHorizon,
    pub location: Option<String>,
}

impl UserProfile {
    /// Build a profile from raw request strings, failing fast on any value
    /// outside the enumerated sets.
    pub fn from_raw(
        budget: &str,
        risk_tolerance: &str,
        time_horizon: &str,
        location: Option<String>,
    ) -> Result<Self, RefereeError> {
        Ok(Self {
            budget: BudgetTier::parse(budget)?,
            risk_tolerance: RiskTolerance::parse(risk_tolerance)?,
            time_horizon: TimeHorizon::parse(time_horizon)?,
            location,
        })
    }

    /// Location constraint, with the `"Any"` sentinel treated as no filter.
    pub fn location_filter(&self) -> Option<&str> {
        self.location
            .as_deref()
            .filter(|location| !location.is_empty() && *location != "Any")
    }
}

/// The three development scenarios every property is judged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioType {
    #[serde(rename = "Residential Housing")]
    ResidentialHousing,
    #[serde(rename = "Commercial Retail")]
    CommercialRetail,
    #[serde(rename = "Cafe / Hotel")]
    CafeHotel,
}

impl ScenarioType {
    /// Fixed evaluation and reporting order.
    pub const ALL: [ScenarioType; 3] = [
        ScenarioType::ResidentialHousing,
        ScenarioType::CommercialRetail,
        ScenarioType::CafeHotel,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ScenarioType::ResidentialHousing => "Residential Housing",
            ScenarioType::CommercialRetail => "Commercial Retail",
            ScenarioType::CafeHotel => "Cafe / Hotel",
        }
    }
}

/// Five bounded metrics describing one scenario on one property.
///
/// Every value is clamped to [1.0, 10.0] and rounded to one decimal before it
/// is stored here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub roi: f64,
    pub risk: f64,
    pub feasibility: f64,
    pub neighborhood_fit: f64,
    pub regulatory_complexity: f64,
}

/// Scores plus the qualitative analysis for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario: ScenarioType,
    pub scores: ScoreSet,
    pub tradeoffs: Vec<String>,
    pub explanations: Vec<String>,
}

/// Full referee output for one selected property.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    pub property: PropertyRecord,
    pub scenarios: Vec<ScenarioResult>,
    pub decision_guidance: String,
}
