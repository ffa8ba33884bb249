use signal_core::config::TimingConfig;
use signal_core::models::*;
use signal_core::traits::SignalTimer;
use signal_core::TimingError;
use signal_timing::{compute_signal_timing, density_score, SignalTimingEngine};

fn cars(direction: LaneDirection, n: u32) -> LaneInput {
    LaneInput::new(direction, VehicleCounts::cars_only(n))
}

fn four_lanes(n: u32, e: u32, s: u32, w: u32) -> Vec<LaneInput> {
    vec![
        cars(LaneDirection::North, n),
        cars(LaneDirection::East, e),
        cars(LaneDirection::South, s),
        cars(LaneDirection::West, w),
    ]
}

// ── Density ──────────────────────────────────────────────────────────────

#[test]
fn zero_counts_have_zero_density() {
    assert_eq!(density_score(&VehicleCounts::default()), 0.0);
}

#[test]
fn trucks_and_buses_weigh_the_same() {
    let trucks = VehicleCounts {
        trucks: 3,
        ..Default::default()
    };
    let buses = VehicleCounts {
        buses: 3,
        ..Default::default()
    };
    assert_eq!(density_score(&trucks), 6.0);
    assert_eq!(density_score(&buses), 6.0);
}

#[test]
fn bikes_count_half() {
    let bikes = VehicleCounts {
        bikes: 5,
        ..Default::default()
    };
    assert_eq!(density_score(&bikes), 2.5);
}

// ── Allocation ───────────────────────────────────────────────────────────

#[test]
fn dominant_north_lane() {
    let phase = compute_signal_timing(&four_lanes(10, 2, 1, 1)).unwrap();

    assert_eq!(phase.priority_lane, LaneDirection::North);
    assert_eq!(phase.green_duration_seconds, 68.6);
    assert_eq!(phase.yellow_duration_seconds, 3.0);
    assert_eq!(phase.all_red_duration_seconds, 2.0);

    let scores: Vec<f64> = phase.density_scores.iter().map(|d| d.density_score).collect();
    assert_eq!(scores, vec![10.0, 2.0, 1.0, 1.0]);
    assert_eq!(phase.total_density(), 14.0);
    assert_eq!(
        phase.reasoning,
        "Lane North has highest density (10.0 weighted units, 71% of total). \
         Allocated 69s green (range: 15-90s)."
    );
}

#[test]
fn all_empty_lanes_fall_back_to_quarter_share() {
    let phase = compute_signal_timing(&four_lanes(0, 0, 0, 0)).unwrap();

    assert_eq!(phase.priority_lane, LaneDirection::North);
    assert_eq!(phase.green_duration_seconds, 33.8);
    assert_eq!(
        phase.reasoning,
        "Lane North has highest density (0.0 weighted units, 25% of total). \
         Allocated 34s green (range: 15-90s)."
    );
}

#[test]
fn three_to_one_share_rounds_tie_to_even() {
    let phase = compute_signal_timing(&four_lanes(3, 1, 0, 0)).unwrap();

    // 15 + 75 × 0.75 = 71.25
    assert_eq!(phase.priority_lane, LaneDirection::North);
    assert_eq!(phase.green_duration_seconds, 71.2);
    assert_eq!(
        phase.reasoning,
        "Lane North has highest density (3.0 weighted units, 75% of total). \
         Allocated 71s green (range: 15-90s)."
    );
}

#[test]
fn dyadic_shares_round_like_decimal_half_even() {
    // (car counts, expected green). Raw green in the comments.
    let cases: &[(&[u32], f64)] = &[
        (&[1, 1], 52.5),               // 1/2  -> 52.5
        (&[1, 1, 1, 1], 33.8),         // 1/4  -> 33.75
        (&[3, 1], 71.2),               // 3/4  -> 71.25
        (&[3, 3, 2], 43.1),            // 3/8  -> 43.125
        (&[5, 3], 61.9),               // 5/8  -> 61.875
        (&[7, 1], 80.6),               // 7/8  -> 80.625
        (&[1, 1, 1, 1, 1, 1, 1, 1], 24.4), // 1/8  -> 24.375
        (&[5, 5, 5, 1], 38.4),         // 5/16 -> 38.4375
        (&[13, 3], 75.9),              // 13/16 -> 75.9375
    ];
    for (counts, expected) in cases {
        let lanes: Vec<LaneInput> = counts
            .iter()
            .enumerate()
            .map(|(i, &n)| cars(LaneDirection::CARDINAL_ORDER[i % 4], n))
            .collect();
        let phase = compute_signal_timing(&lanes).unwrap();
        assert_eq!(
            phase.green_duration_seconds, *expected,
            "counts {:?}: got {}, expected {}",
            counts, phase.green_duration_seconds, expected
        );
    }
}

#[test]
fn quarter_share_fallback_ignores_lane_count() {
    let lanes = vec![cars(LaneDirection::East, 0), cars(LaneDirection::West, 0)];
    let phase = compute_signal_timing(&lanes).unwrap();
    assert_eq!(phase.priority_lane, LaneDirection::East);
    assert_eq!(phase.green_duration_seconds, 33.8);
}

#[test]
fn tie_goes_to_first_lane() {
    let lanes = vec![cars(LaneDirection::North, 5), cars(LaneDirection::East, 5)];
    let phase = compute_signal_timing(&lanes).unwrap();
    assert_eq!(phase.priority_lane, LaneDirection::North);

    let reversed = vec![cars(LaneDirection::East, 5), cars(LaneDirection::North, 5)];
    let phase = compute_signal_timing(&reversed).unwrap();
    assert_eq!(phase.priority_lane, LaneDirection::East);
}

#[test]
fn single_lane_gets_max_green() {
    let phase = compute_signal_timing(&[cars(LaneDirection::South, 7)]).unwrap();
    assert_eq!(phase.priority_lane, LaneDirection::South);
    assert_eq!(phase.green_duration_seconds, 90.0);
}

#[test]
fn output_order_follows_input_order() {
    let lanes = vec![
        cars(LaneDirection::West, 1),
        cars(LaneDirection::South, 9),
        cars(LaneDirection::North, 3),
    ];
    let phase = compute_signal_timing(&lanes).unwrap();
    let order: Vec<LaneDirection> = phase.density_scores.iter().map(|d| d.direction).collect();
    assert_eq!(
        order,
        vec![LaneDirection::West, LaneDirection::South, LaneDirection::North]
    );
    assert_eq!(phase.density_scores[1].vehicle_counts, VehicleCounts::cars_only(9));
    assert_eq!(phase.priority_lane, LaneDirection::South);
}

#[test]
fn empty_input_is_rejected() {
    let err = compute_signal_timing(&[]).unwrap_err();
    assert!(matches!(err, TimingError::InvalidInput { .. }));
}

#[test]
fn mixed_vehicle_lane_wins_over_car_lane() {
    let lanes = vec![
        cars(LaneDirection::North, 6),
        LaneInput::new(
            LaneDirection::East,
            VehicleCounts {
                bikes: 2,
                cars: 1,
                trucks: 1,
                buses: 2,
            },
        ),
    ];
    // East: 1 + 1 + 2 + 4 = 8
    let phase = compute_signal_timing(&lanes).unwrap();
    assert_eq!(phase.priority_lane, LaneDirection::East);
    assert_eq!(phase.density_scores[1].density_score, 8.0);
}

// ── Engine ───────────────────────────────────────────────────────────────

#[test]
fn engine_defaults_match_free_function() {
    let lanes = four_lanes(4, 8, 2, 6);
    let engine = SignalTimingEngine::new();
    assert_eq!(engine.compute(&lanes).unwrap(), compute_signal_timing(&lanes).unwrap());
}

#[test]
fn engine_uses_configured_bounds() {
    let engine = SignalTimingEngine::from_config(&TimingConfig {
        min_green_secs: Some(10.0),
        max_green_secs: Some(60.0),
        yellow_secs: Some(4.0),
        all_red_secs: Some(1.5),
    });
    assert_eq!(engine.timing().available_range(), 50.0);
    let phase = engine.compute(&four_lanes(0, 0, 0, 0)).unwrap();
    // 10 + 50 × 0.25
    assert_eq!(phase.green_duration_seconds, 22.5);
    assert_eq!(phase.yellow_duration_seconds, 4.0);
    assert_eq!(phase.all_red_duration_seconds, 1.5);
    assert!(phase.reasoning.ends_with("(range: 10-60s)."));
    assert_eq!(phase.cycle_seconds(), 28.0);
}

#[test]
fn engine_is_usable_as_trait_object() {
    let timer: Box<dyn SignalTimer> = Box::new(SignalTimingEngine::new());
    assert!(timer.compute(&[]).is_err());
    assert!(timer.compute(&four_lanes(1, 1, 1, 1)).is_ok());
}
