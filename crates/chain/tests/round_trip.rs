use rand::SeedableRng;
use rand::rngs::StdRng;
use tell_chain::{
    ChainError, ChainModel, Sequence, StateId, StationaryConfig, TransitionMatrix, simulate,
};

fn boss_run(steps: usize, seed: u64) -> Sequence {
    let model = ChainModel::boss();
    let mut rng = StdRng::seed_from_u64(seed);
    simulate(&model, steps, StateId::new(0), &mut rng).expect("simulate failed")
}

fn idx(label: &str) -> StateId {
    ChainModel::boss()
        .state_by_label(label)
        .expect("built-in label")
}

// ---------------------------------------------------------------------------
// 1. deterministic_rows_return_to_target
// ---------------------------------------------------------------------------
#[test]
fn deterministic_rows_return_to_target() {
    let seq = boss_run(20_000, 17);
    let idle = idx("Idle");
    let swing_left = idx("Swing Left");
    let forced = [
        (idx("Swing Left"), idle),
        (idx("Hopping Swing"), idle),
        (idx("Hopping Stab High/Slow"), idle),
        (idx("Swing Right"), swing_left),
    ];

    let mut checked = 0;
    for (from, to) in seq.transitions() {
        if let Some(&(_, target)) = forced.iter().find(|(f, _)| *f == from) {
            assert_eq!(to, target, "state {from} must always go to {target}");
            checked += 1;
        }
    }
    assert!(checked > 100, "too few deterministic visits: {checked}");
}

// ---------------------------------------------------------------------------
// 2. never_follows_zero_probability_edges
// ---------------------------------------------------------------------------
#[test]
fn never_follows_zero_probability_edges() {
    let model = ChainModel::boss();
    let seq = boss_run(20_000, 23);
    for (from, to) in seq.transitions() {
        assert!(
            model.matrix().prob(from, to) > 0.0,
            "impossible transition {from} -> {to}"
        );
    }
}

// ---------------------------------------------------------------------------
// 3. idle_share_near_stationary
// ---------------------------------------------------------------------------
#[test]
fn idle_share_near_stationary() {
    let model = ChainModel::boss();
    let stationary = model
        .stationary_distribution(&StationaryConfig::new())
        .unwrap();
    let expected = stationary.probs[0];

    for seed in [1u64, 2, 3, 4, 5] {
        let seq = boss_run(10_000, seed);
        let idle = seq
            .as_slice()
            .iter()
            .filter(|s| s.as_index() == 0)
            .count() as f64
            / seq.len() as f64;
        assert!(
            (idle - expected).abs() < 0.05,
            "seed {seed}: idle share {idle}, stationary {expected}"
        );
    }
}

// ---------------------------------------------------------------------------
// 4. custom_model_from_parts
// ---------------------------------------------------------------------------
#[test]
fn custom_model_from_parts() {
    let model = ChainModel::from_parts(
        ["Guard", "Strike"],
        vec![vec![0.5, 0.5], vec![1.0, 0.0]],
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    let seq = simulate(&model, 1_000, StateId::new(1), &mut rng).unwrap();
    assert_eq!(seq.first(), Some(StateId::new(1)));
    for (from, to) in seq.transitions() {
        if from == StateId::new(1) {
            assert_eq!(to, StateId::new(0));
        }
    }
}

// ---------------------------------------------------------------------------
// 5. malformed_models_rejected
// ---------------------------------------------------------------------------
#[test]
fn malformed_models_rejected() {
    let half = TransitionMatrix::new(vec![vec![0.25, 0.25], vec![0.5, 0.5]]);
    assert!(matches!(half, Err(ChainError::InvalidModel { .. })));

    let negative = ChainModel::from_parts(["A", "B"], vec![vec![1.5, -0.5], vec![0.0, 1.0]]);
    assert!(matches!(negative, Err(ChainError::InvalidModel { .. })));
}
