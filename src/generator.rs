//! Uniform sampling of a [`Function`] into a [`Curve`].

use log::{debug, warn};
use crate::{Curve, Error, Function, Result};

/// A sampling plan: `number_of_points` evenly spaced values of the
/// argument in \[`min_x`, `max_x`\], both bounds included.  A
/// generator holds no state besides the plan and can be reused for
/// any number of functions.
///
/// # Example
///
/// ```
/// use fine::CurveGenerator;
/// # fn main() -> fine::Result<()> {
/// let generator = CurveGenerator::new(1000, 0., 1.)?;
/// let curve = generator.generate_curve(&f64::sqrt);
/// assert_eq!(curve.number_of_points(), 1000);
/// assert_eq!(curve.point(0)?, [0., 0.]);
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveGenerator {
    number_of_points: usize,
    min_x: f64,
    max_x: f64,
    delta_x: f64, // +∞ if `max_x - min_x` overflows.
    half_delta_x: f64, // Always finite.
}

impl CurveGenerator {
    /// Create a generator sampling `number_of_points` points in
    /// \[`min_x`, `max_x`\].  Return [`Error::Config`] if
    /// `number_of_points < 2`, if a bound is not finite or if
    /// `min_x > max_x`.
    pub fn new(number_of_points: usize, min_x: f64, max_x: f64)
               -> Result<Self> {
        if number_of_points < 2 {
            return Err(Error::Config(format!(
                "number_of_points = {} must at least be 2",
                number_of_points)))
        }
        if !min_x.is_finite() {
            return Err(Error::Config(format!(
                "min_x = {} must be finite", min_x)))
        }
        if !max_x.is_finite() {
            return Err(Error::Config(format!(
                "max_x = {} must be finite", max_x)))
        }
        if min_x > max_x {
            return Err(Error::Config(format!(
                "min_x = {} must not exceed max_x = {}", min_x, max_x)))
        }
        let n = (number_of_points - 1) as f64;
        let delta_x = (max_x - min_x) / n;
        let half_delta_x = (0.5 * max_x - 0.5 * min_x) / n;
        Ok(Self { number_of_points, min_x, max_x, delta_x, half_delta_x })
    }

    #[inline]
    pub fn number_of_points(&self) -> usize { self.number_of_points }

    #[inline]
    pub fn min_x(&self) -> f64 { self.min_x }

    /// Last sampled value, the `max_x` given to [`CurveGenerator::new`].
    #[inline]
    pub fn max_x(&self) -> f64 { self.max_x }

    /// Distance between two consecutive sampled values.  It is +∞
    /// when `max_x - min_x` is not representable, even though all
    /// sampled values are.
    #[inline]
    pub fn delta_x(&self) -> f64 { self.delta_x }

    /// The `i`-th sampled value.  The last one is exactly `max_x`.
    #[inline]
    fn x(&self, i: usize) -> f64 {
        if i + 1 == self.number_of_points {
            self.max_x
        } else if self.delta_x.is_finite() {
            self.min_x + i as f64 * self.delta_x
        } else {
            // min_x + i·h ≤ (min_x + max_x)/2, so no partial sum overflows.
            let h = i as f64 * self.half_delta_x;
            self.min_x + h + h
        }
    }

    /// Return a new curve whose point `i` is (`xᵢ`, `f(xᵢ)`) with
    /// `xᵢ = min_x + i·delta_x` (and `x_{N-1} = max_x`).  The values
    /// of `f` are stored as they are, even if they are not finite.
    pub fn generate_curve<F>(&self, f: &F) -> Curve
    where F: Function + ?Sized {
        debug!("fine: sampling {} points on [{}, {}]",
               self.number_of_points, self.min_x, self.max_x());
        let curve: Curve = (0 .. self.number_of_points).map(|i| {
            let x = self.x(i);
            [x, f.eval(x)]
        }).collect();
        let n_undef = curve.iter().filter(|[_, y]| !y.is_finite()).count();
        if n_undef > 0 {
            warn!("fine: {} of {} sampled values are not finite",
                  n_undef, self.number_of_points);
        }
        curve
    }

    /// Same as [`CurveGenerator::generate_curve`] but uses
    /// [`Function::try_eval`].  The first evaluation error is
    /// returned and no curve is produced.
    pub fn try_generate_curve<F>(&self, f: &F) -> Result<Curve>
    where F: Function + ?Sized {
        debug!("fine: sampling {} points on [{}, {}]",
               self.number_of_points, self.min_x, self.max_x());
        (0 .. self.number_of_points).map(|i| -> Result<[f64; 2]> {
            let x = self.x(i);
            Ok([x, f.try_eval(x)?])
        }).collect()
    }
}
