use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalargrad_core::autograd::grad_check::check_grad;
use scalargrad_core::ops::{div_op, ln_op, pow_op};

mod common;
use common::init_logger;

const EPSILON: f64 = 1e-6;
const TOLERANCE: f64 = 1e-4;

#[test]
fn test_random_points_polynomial_and_tanh() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let inputs = [rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)];
        check_grad(
            |_, x| {
                let p = x[0] * x[1] + x[0] * 0.5 - x[1];
                Ok(p.tanh() * x[1])
            },
            &inputs,
            EPSILON,
            TOLERANCE,
        )
        .unwrap_or_else(|e| panic!("inputs {:?}: {}", inputs, e));
    }
}

#[test]
fn test_random_points_exp_log_div() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        // Positive inputs keep ln and the divisor in their domains.
        let inputs = [rng.gen_range(0.5..3.0), rng.gen_range(0.5..3.0)];
        check_grad(
            |_, x| {
                let ratio = div_op(x[0].exp(), x[1])?;
                let logged = ln_op(ratio + x[1])?;
                Ok(logged * x[0])
            },
            &inputs,
            EPSILON,
            TOLERANCE,
        )
        .unwrap_or_else(|e| panic!("inputs {:?}: {}", inputs, e));
    }
}

#[test]
fn test_random_points_relu_network() {
    let mut rng = StdRng::seed_from_u64(23);
    let weights: Vec<f64> = (0..6).map(|_| rng.gen_range(-1.0..1.0)).collect();
    for _ in 0..20 {
        let inputs = [rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)];
        check_grad(
            |_, x| {
                let h0 = (x[0] * weights[0] + x[1] * weights[1] + weights[2]).relu();
                let h1 = (x[0] * weights[3] + x[1] * weights[4]).tanh();
                let out = h0 * weights[5] + h1;
                pow_op(out, 2.0)
            },
            &inputs,
            EPSILON,
            TOLERANCE,
        )
        .unwrap_or_else(|e| panic!("inputs {:?}: {}", inputs, e));
    }
}
