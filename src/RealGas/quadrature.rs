//! Adaptive Gauss-Legendre quadrature on a finite interval.
//!
//! Global adaptive scheme: the interval with the largest error estimate is bisected until
//! the summed error estimate drops below `max(abs_tol, rel_tol·|I|)` or the subdivision
//! limit is reached. Each panel is integrated with the 15-point Gauss-Legendre rule,
//! its error estimate is the difference to the 7-point rule on the same panel.
use super::errors::{RealGasError, ensure_finite};
use gauss_quad::GaussLegendre;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

const LOW_ORDER: usize = 7;
const HIGH_ORDER: usize = 15;

/// Tolerances of the adaptive quadrature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadratureConfig {
    pub abs_tol: f64,
    pub rel_tol: f64,
    /// maximal number of panels
    pub max_subdivisions: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            abs_tol: 1.49e-8,
            rel_tol: 1.49e-8,
            max_subdivisions: 50,
        }
    }
}

/// Value of the integral with its error estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadResult {
    pub value: f64,
    pub error: f64,
    pub subdivisions: usize,
    pub converged: bool,
}

impl QuadResult {
    fn zero() -> Self {
        Self {
            value: 0.0,
            error: 0.0,
            subdivisions: 0,
            converged: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Panel {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

/// Nodes and weights on [-1, 1] of the two rules applied to every panel
struct PanelRule {
    low: (Vec<f64>, Vec<f64>),
    high: (Vec<f64>, Vec<f64>),
}

impl PanelRule {
    fn new() -> Self {
        Self {
            low: GaussLegendre::nodes_and_weights(LOW_ORDER),
            high: GaussLegendre::nodes_and_weights(HIGH_ORDER),
        }
    }

    fn panel<F>(&self, f: &F, a: f64, b: f64, what: &str) -> Result<Panel, RealGasError>
    where
        F: Fn(f64) -> Result<f64, RealGasError>,
    {
        let center = 0.5 * (a + b);
        let half = 0.5 * (b - a);
        let sum = |(nodes, weights): &(Vec<f64>, Vec<f64>)| -> Result<f64, RealGasError> {
            let mut acc = 0.0;
            for (x, w) in nodes.iter().zip(weights) {
                let x = center + half * x;
                let y = ensure_finite(what, f(x)?, &format!("integrand at x = {}", x))?;
                acc += w * y;
            }
            Ok(acc * half)
        };
        let coarse = sum(&self.low)?;
        let value = sum(&self.high)?;
        Ok(Panel {
            a,
            b,
            value,
            error: (value - coarse).abs(),
        })
    }
}

/// Integrates `f` from `a` to `b`. A degenerate interval gives exactly zero,
/// `b < a` gives the negated integral over [b, a].
pub fn integrate<F>(
    f: F,
    a: f64,
    b: f64,
    config: &QuadratureConfig,
    what: &str,
) -> Result<QuadResult, RealGasError>
where
    F: Fn(f64) -> Result<f64, RealGasError>,
{
    ensure_finite("lower integration limit", a, what)?;
    ensure_finite("upper integration limit", b, what)?;
    if a == b {
        return Ok(QuadResult::zero());
    }
    if b < a {
        let mut reversed = integrate(f, b, a, config, what)?;
        reversed.value = -reversed.value;
        return Ok(reversed);
    }

    let rule = PanelRule::new();
    let mut panels = vec![rule.panel(&f, a, b, what)?];
    let limit = config.max_subdivisions.max(1);
    loop {
        let value: f64 = panels.iter().map(|p| p.value).sum();
        let error: f64 = panels.iter().map(|p| p.error).sum();
        let tolerance = config.abs_tol.max(config.rel_tol * value.abs());
        if error <= tolerance {
            debug!(
                "{}: integral {} +- {:e} with {} panels",
                what,
                value,
                error,
                panels.len()
            );
            return Ok(QuadResult {
                value,
                error,
                subdivisions: panels.len(),
                converged: true,
            });
        }
        if panels.len() >= limit {
            warn!(
                "{}: subdivision limit {} reached, error estimate {:e} exceeds tolerance {:e}",
                what, limit, error, tolerance
            );
            return Ok(QuadResult {
                value,
                error,
                subdivisions: panels.len(),
                converged: false,
            });
        }

        let (worst, _) = panels
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |(iw, ew), (i, p)| {
                if p.error > ew { (i, p.error) } else { (iw, ew) }
            });
        let panel = panels.swap_remove(worst);
        let mid = 0.5 * (panel.a + panel.b);
        panels.push(rule.panel(&f, panel.a, mid, what)?);
        panels.push(rule.panel(&f, mid, panel.b, what)?);
    }
}
