//! Tests for marginal shot sampling.

use rand::SeedableRng;

use qsteiner_ir::{Circuit, QubitId};
use qsteiner_sim::{MarginalDistribution, Simulator};

fn uneven_state() -> Circuit {
    // q0 in |+⟩, q1 copies q0, q2 in |+⟩: outcomes {000, 011, 100, 111}.
    let mut circuit = Circuit::new("uneven", 4);
    circuit.h(QubitId(0)).unwrap();
    circuit.mcx([QubitId(0)], QubitId(1)).unwrap();
    circuit.h(QubitId(2)).unwrap();
    // Ancilla-like top qubit in |−⟩ must not show up in outcomes.
    circuit.x(QubitId(3)).unwrap();
    circuit.h(QubitId(3)).unwrap();
    circuit
}

// ---------------------------------------------------------------------------
// Marginal distribution
// ---------------------------------------------------------------------------

#[test]
fn marginal_sums_over_traced_qubit() {
    let state = Simulator::new().run(&uneven_state()).unwrap();
    let dist = MarginalDistribution::from_statevector(&state, 3).unwrap();

    for outcome in [0b000, 0b011, 0b100, 0b111] {
        assert!((dist.probability(outcome) - 0.25).abs() < 1e-12);
    }
    for outcome in [0b001, 0b010, 0b101, 0b110] {
        assert!(dist.probability(outcome).abs() < 1e-12);
    }
}

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

#[test]
fn empirical_distribution_converges() {
    let state = Simulator::new().run(&uneven_state()).unwrap();
    let dist = MarginalDistribution::from_statevector(&state, 3).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(2024);

    let shots = 40_000;
    let counts = dist.sample_counts(shots, &mut rng);
    assert_eq!(counts.total_shots(), u64::from(shots));

    // Binomial std-dev at p = 0.25 is ~0.0022; allow a wide 0.02 band.
    for (outcome, p) in dist.probabilities().iter().enumerate() {
        let freq = counts.get(outcome) as f64 / f64::from(shots);
        assert!(
            (freq - p).abs() < 0.02,
            "outcome {outcome}: empirical {freq}, analytic {p}"
        );
    }
}

#[test]
fn seeded_rng_is_reproducible() {
    let state = Simulator::new().run(&uneven_state()).unwrap();
    let dist = MarginalDistribution::from_statevector(&state, 3).unwrap();

    let mut rng1 = rand::rngs::StdRng::seed_from_u64(42);
    let mut rng2 = rand::rngs::StdRng::seed_from_u64(42);
    assert_eq!(
        dist.sample_counts(1000, &mut rng1),
        dist.sample_counts(1000, &mut rng2)
    );
}

#[test]
fn sampling_does_not_touch_state() {
    let state = Simulator::new().run(&uneven_state()).unwrap();
    let before = state.clone();
    let dist = MarginalDistribution::from_statevector(&state, 3).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(5);
    let _ = dist.sample_counts(100, &mut rng);
    assert_eq!(state, before);
}

#[test]
fn zero_shots_yield_empty_counts() {
    let state = Simulator::new().run(&uneven_state()).unwrap();
    let dist = MarginalDistribution::from_statevector(&state, 3).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let counts = dist.sample_counts(0, &mut rng);
    assert!(counts.is_empty());
    assert_eq!(counts.num_qubits(), 3);
}
