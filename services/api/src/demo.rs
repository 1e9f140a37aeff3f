use crate::infra::load_catalog;
use clap::Args;
use land_referee::error::AppError;
use land_referee::referee::{EvaluationReport, RefereeEngine, UserProfile};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Investor budget tier (Low, Medium, High)
    #[arg(long)]
    pub(crate) budget: String,
    /// Appetite for volatility (Low, Medium, High)
    #[arg(long)]
    pub(crate) risk_tolerance: String,
    /// Investment window (Short-term, Medium-term, Long-term)
    #[arg(long)]
    pub(crate) time_horizon: String,
    /// Restrict the property pick to one catalog location
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Evaluate against a CSV portfolio instead of the built-in catalog
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Pin the random property selection for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the wire-format JSON payload instead of the report rendering
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        budget,
        risk_tolerance,
        time_horizon,
        location,
        catalog,
        seed,
        json,
    } = args;

    let catalog = load_catalog(catalog.as_deref())?;
    let engine = RefereeEngine::new(Arc::new(catalog));

    let profile = match UserProfile::from_raw(&budget, &risk_tolerance, &time_horizon, location) {
        Ok(profile) => profile,
        Err(err) => {
            println!("Evaluation rejected: {err}");
            return Ok(());
        }
    };

    let report = match seed {
        Some(seed) => engine.evaluate_with_rng(&profile, &mut StdRng::seed_from_u64(seed)),
        None => engine.evaluate(&profile),
    };
    let report = match report {
        Ok(report) => report,
        Err(err) => {
            println!("Evaluation unavailable: {err}");
            return Ok(());
        }
    };

    if json {
        match serde_json::to_string_pretty(&report.view()) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Report payload unavailable: {err}"),
        }
        return Ok(());
    }

    render_report(&report);
    Ok(())
}

pub(crate) fn render_report(report: &EvaluationReport) {
    let property = &report.property;
    println!("Land referee evaluation");
    println!(
        "Property {} in {} ({} sqft plot)",
        property.property_id, property.location, property.plot_size_sqft
    );
    println!(
        "Area signals: footfall {} | residential density {} | commercial activity {}",
        property.footfall.label(),
        property.residential_density.label(),
        property.commercial_activity.label()
    );

    for result in &report.scenarios {
        let scores = &result.scores;
        println!("\n{}", result.scenario.label());
        println!(
            "  ROI {:.1} | Risk {:.1} | Feasibility {:.1} | Area fit {:.1} | Regulatory {:.1}",
            scores.roi,
            scores.risk,
            scores.feasibility,
            scores.neighborhood_fit,
            scores.regulatory_complexity
        );

        println!("  Trade-offs:");
        for tradeoff in &result.tradeoffs {
            println!("  - {tradeoff}");
        }

        for explanation in &result.explanations {
            println!("    {explanation}");
        }
    }

    println!("\n{}", report.decision_guidance);
}
