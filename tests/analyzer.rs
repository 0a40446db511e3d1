//! End-to-end analysis of synthetic simulation runs.
//!
//! Runs are generated with a seeded RNG: Poisson call arrivals, exponential
//! response times and a fraction of calls left unanswered.

use dispatch_analysis::analysis::{calls_meeting_target, response_time_batches};
use dispatch_analysis::output::to_json;
use dispatch_analysis::{
    AnalysisConfig, AnalysisError, AnalysisReport, Ambulance, Call, DispatchAnalyzer, Simulation,
    TimeUnit,
};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};
use rand_xoshiro::Xoshiro256PlusPlus;

const MEAN_RESPONSE: f64 = 0.01;

/// Generate a finished run of `days` days with `calls_per_day` arrivals.
///
/// `modulation` scales each call's response time by its arrival time, which
/// lets tests inject slow drifts.
fn synthetic_run(
    seed: u64,
    days: f64,
    calls_per_day: f64,
    unanswered_rate: f64,
    modulation: impl Fn(f64) -> f64,
) -> Simulation {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let inter_arrival = Exp::new(calls_per_day).unwrap();
    let response = Exp::new(1.0 / MEAN_RESPONSE).unwrap();

    let mut calls = Vec::new();
    let mut t = inter_arrival.sample(&mut rng);
    while t < days {
        let priority = rng.gen_range(0..2);
        if rng.gen::<f64>() < unanswered_rate {
            calls.push(Call::unanswered(t, priority));
        } else {
            let r = response.sample(&mut rng) * modulation(t);
            calls.push(Call::answered(t, r, priority));
        }
        t += inter_arrival.sample(&mut rng);
    }

    let ambulances = (0..5)
        .map(|_| Ambulance {
            total_travel_time: days * rng.gen_range(0.2..0.4),
        })
        .collect();

    Simulation {
        complete: true,
        start_time: 0.0,
        end_time: days,
        calls,
        ambulances,
        target_response_times: vec![0.008, 0.015],
    }
}

#[test]
fn steady_state_mean_close_to_true_mean() {
    let sim = synthetic_run(7, 30.0, 200.0, 0.0, |_| 1.0);
    let report = DispatchAnalyzer::new(AnalysisConfig::new(1.0).warm_up(2.0).cool_down(1.0))
        .analyze(&sim)
        .unwrap();

    assert_eq!(report.batches.batches.len(), 27);
    let ss = report.steady_state.as_ref().unwrap();
    assert!(
        (ss.estimate.mean - MEAN_RESPONSE).abs() < 0.1 * MEAN_RESPONSE,
        "estimate {} too far from {}",
        ss.estimate.mean,
        MEAN_RESPONSE
    );
    assert!(ss.estimate.error > 0.0);
    assert!((0.0..=1.0).contains(&ss.independence.p_value));
}

#[test]
fn unanswered_calls_excluded_everywhere() {
    let sim = synthetic_run(11, 10.0, 150.0, 0.1, |_| 1.0);
    let unanswered = sim.num_unanswered();
    assert!(unanswered > 0);

    let report = DispatchAnalyzer::with_batch_time(0.5).analyze(&sim).unwrap();
    assert_eq!(report.response.unanswered, unanswered);
    assert_eq!(report.batches.unanswered, unanswered);
    assert_eq!(report.response.answered.count + unanswered, sim.num_calls());
    assert!(report
        .batches
        .batches
        .means
        .iter()
        .all(|m| m.is_finite() && *m >= 0.0));
    assert!(report.response.answered.min >= 0.0);
}

#[test]
fn slow_drift_flags_correlated_batches() {
    let drift = |t: f64| 1.0 + 0.6 * (2.0 * std::f64::consts::PI * t / 20.0).sin();
    let sim = synthetic_run(3, 40.0, 300.0, 0.0, drift);

    let report = DispatchAnalyzer::with_batch_time(0.25).analyze(&sim).unwrap();
    let ss = report.steady_state.as_ref().unwrap();
    assert!(!ss.batches_independent(), "p = {}", ss.independence.p_value);
    assert!(ss.independence.lag1_autocorrelation() > 0.3);
    assert!(!report.is_reliable());
    assert!(report.notes.iter().any(|n| n.contains("Durbin-Watson")));
}

#[test]
fn minutes_report_scales_estimate() {
    let sim = synthetic_run(5, 12.0, 200.0, 0.0, |_| 1.0);
    let days = DispatchAnalyzer::with_batch_time(1.0).analyze(&sim).unwrap();
    let minutes = DispatchAnalyzer::with_batch_time(1.0)
        .time_unit(TimeUnit::Minutes)
        .analyze(&sim)
        .unwrap();

    let d = days.steady_state.unwrap().estimate;
    let m = minutes.steady_state.unwrap().estimate;
    assert!((m.mean - d.mean * 1440.0).abs() < 1e-9);
    assert!((m.error - d.error * 1440.0).abs() < 1e-9);
    assert!((minutes.response.answered.mean - days.response.answered.mean * 1440.0).abs() < 1e-9);
}

#[test]
fn batch_too_narrow_for_traffic_is_an_error() {
    let sim = synthetic_run(9, 5.0, 20.0, 0.0, |_| 1.0);
    let err = response_time_batches(&sim, 0.001, 0.0, 0.0).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyBatch { .. }));
    assert!(DispatchAnalyzer::with_batch_time(0.001).analyze(&sim).is_err());
}

#[test]
fn explicit_targets_override_recorded_ones() {
    let sim = synthetic_run(13, 5.0, 100.0, 0.05, |_| 1.0);
    let lenient = calls_meeting_target(&sim, Some(&[1.0, 1.0][..])).unwrap();
    assert_eq!(lenient.met, lenient.answered);

    let recorded = calls_meeting_target(&sim, None).unwrap();
    assert!(recorded.met < lenient.met);
    assert_eq!(recorded.total(), sim.num_calls());
}

#[test]
fn report_serializes_to_json() {
    let sim = synthetic_run(17, 6.0, 100.0, 0.05, |_| 1.0);
    let report = DispatchAnalyzer::with_batch_time(1.0).analyze(&sim).unwrap();

    let json = to_json(&report).unwrap();
    let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.num_calls, report.num_calls);
    assert_eq!(parsed.batches.batches.counts, report.batches.batches.counts);
}

#[test]
fn incomplete_run_is_rejected() {
    let mut sim = synthetic_run(1, 2.0, 50.0, 0.0, |_| 1.0);
    sim.complete = false;
    assert!(matches!(
        DispatchAnalyzer::default().analyze(&sim),
        Err(AnalysisError::IncompleteSimulation)
    ));
}
