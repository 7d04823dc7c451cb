//! Truncated-Gaussian helpers for the Thurstone-Mosteller model
//!
//! `v`/`w` are the mean and variance corrections for a win/loss outcome and
//! `vt`/`wt` their counterparts for a draw, each evaluated at the normalized
//! skill difference `x` with normalized draw margin `t`. The normal CDF comes
//! from `statrs`' complementary error function.

use statrs::function::erf::erfc;
use std::f64::consts::{PI, SQRT_2};

/// Below this the draw probability mass is treated as vanishing
const DRAW_MASS_FLOOR: f64 = 1e-5;

/// Standard normal cumulative distribution function
pub fn cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function
pub fn pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

pub fn v(x: f64, t: f64) -> f64 {
    let xt = x - t;
    let denom = cdf(xt);
    if denom < f64::EPSILON {
        -xt
    } else {
        pdf(xt) / denom
    }
}

pub fn w(x: f64, t: f64) -> f64 {
    let xt = x - t;
    let denom = cdf(xt);
    if denom < f64::EPSILON {
        return if x < 0.0 { 1.0 } else { 0.0 };
    }

    let v = v(x, t);
    v * (v + xt)
}

pub fn vt(x: f64, t: f64) -> f64 {
    let xx = x.abs();
    let b = cdf(t - xx) - cdf(-t - xx);
    if b < DRAW_MASS_FLOOR {
        return if x < 0.0 { -x - t } else { -x + t };
    }

    let a = pdf(-t - xx) - pdf(t - xx);
    if x < 0.0 {
        -a / b
    } else {
        a / b
    }
}

pub fn wt(x: f64, t: f64) -> f64 {
    let b = cdf(t - x) - cdf(-t - x);
    if b < f64::EPSILON {
        return 1.0;
    }

    let vt = vt(x, t);
    ((t - x) * pdf(t - x) + (t + x) * pdf(-t - x)) / b + vt * vt
}
