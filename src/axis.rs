//! Axis tick generation
//!
//! "Nice numbers" ticks for a numeric axis: steps are 1, 2 or 5 times a
//! power of ten, chosen so that roughly `count` ticks cover the domain.
//! Independent of any genome data; used to label the absolute axis.

use crate::core::{TickError, TickResult};

/// Step thresholds: sqrt(50), sqrt(10), sqrt(2)
const E10: f64 = 7.0710678118654755;
const E5: f64 = 3.1622776601683795;
const E2: f64 = std::f64::consts::SQRT_2;

/// Upper bound on the number of ticks a single call may produce
pub const MAX_TICKS: usize = 1_000_000;

/// Tick indices and step for an ascending domain
///
/// Ticks are `i * inc` for `i` in `i1..=i2` when `inc > 0`. A negative
/// `inc` encodes a fractional step: ticks are `i / -inc`, which keeps
/// decimal ticks such as 0.1 exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSpec {
    pub i1: f64,
    pub i2: f64,
    pub inc: f64,
}

/// Round half up, matching browser axis libraries
#[inline]
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Compute tick indices for `start < stop`
pub fn tick_spec(start: f64, stop: f64, count: usize) -> TickSpec {
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);

    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = round_half_up(start * inc);
        let mut i2 = round_half_up(stop * inc);
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        TickSpec { i1, i2, inc: -inc }
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = round_half_up(start / inc);
        let mut i2 = round_half_up(stop / inc);
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        TickSpec { i1, i2, inc }
    }
}

/// Nice tick values covering `domain`
///
/// Ticks follow the direction of the domain: ascending for
/// `domain.0 < domain.1`, descending otherwise. Returns an empty vector when
/// no nice value falls inside the domain, and fails when the request would
/// produce more than [`MAX_TICKS`] ticks.
///
/// # Examples
/// ```
/// use linear_genome::axis::ticks;
/// assert_eq!(ticks((23.0, 80.0), 5).unwrap(), vec![30.0, 40.0, 50.0, 60.0, 70.0, 80.0]);
/// assert!(ticks((0.0, 1.0), 2).is_err());
/// ```
pub fn ticks(domain: (f64, f64), count: usize) -> TickResult<Vec<f64>> {
    if count <= 2 {
        return Err(TickError::InvalidCount(count));
    }
    let (start, stop) = domain;
    if start == stop {
        return Err(TickError::EmptyDomain(start));
    }

    let ascending = start < stop;
    let spec = if ascending {
        tick_spec(start, stop, count)
    } else {
        tick_spec(stop, start, count)
    };

    // Also rejects NaN
    if !(spec.i2 >= spec.i1) {
        return Ok(Vec::new());
    }

    let n = spec.i2 - spec.i1 + 1.0;
    if !(n <= MAX_TICKS as f64) {
        return Err(TickError::TooMany(n));
    }
    let n = n as usize;
    let value = |i: f64| {
        if spec.inc < 0.0 {
            i / -spec.inc
        } else {
            i * spec.inc
        }
    };

    let out = (0..n)
        .map(|k| {
            let k = k as f64;
            if ascending {
                value(spec.i1 + k)
            } else {
                value(spec.i2 - k)
            }
        })
        .collect();

    Ok(out)
}
