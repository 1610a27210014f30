//! Functions ℝ → ℝ.  FiNe knows two kinds of them: functions given
//! by a closed-form expression ([`MathematicalFunction`]) and
//! functions only known through (unstructured) data values
//! ([`DataFunction`]).  The aim is to express the second kind in
//! terms of the first.

use std::fmt::{self, Debug, Formatter};
use crate::{Curve, Error, Result};

/// A pure scalar function.
///
/// Any closure or function `Fn(f64) -> f64` is a `Function`:
/// ```
/// use fine::Function;
/// assert_eq!(f64::sqrt.eval(4.), 2.);
/// assert_eq!((|x: f64| 2. * x).eval(3.), 6.);
/// ```
pub trait Function {
    /// Return the value of the function at `x`.  Implementations
    /// return NaN when `x` lies outside their domain.
    fn eval(&self, x: f64) -> f64;

    /// Same as [`Function::eval`] but out-of-domain values of `x` are
    /// reported as [`Error::Evaluation`] instead of NaN.  The default
    /// implementation never fails.
    fn try_eval(&self, x: f64) -> Result<f64> {
        Ok(self.eval(x))
    }
}

impl<F> Function for F
where F: Fn(f64) -> f64 {
    #[inline]
    fn eval(&self, x: f64) -> f64 { self(x) }
}


////////////////////////////////////////////////////////////////////////
//
// Closed-form functions

/// A function given by a closed-form expression, possibly restricted
/// to an interval \[`lo`, `hi`\].
///
/// # Example
///
/// ```
/// use fine::{Function, MathematicalFunction};
/// # fn main() -> fine::Result<()> {
/// let f = MathematicalFunction::new("sqrt", f64::sqrt)
///     .domain(0., f64::INFINITY)?;
/// assert_eq!(f.eval(9.), 3.);
/// assert!(f.eval(-1.).is_nan());
/// assert!(f.try_eval(-1.).is_err());
/// # Ok(()) }
/// ```
pub struct MathematicalFunction<F> {
    name: String,
    f: F,
    domain: Option<(f64, f64)>,
}

impl<F> MathematicalFunction<F>
where F: Fn(f64) -> f64 {
    /// Create a function named `name` (used in error messages)
    /// defined on the whole real line.
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self { name: name.into(), f, domain: None }
    }

    /// Restrict the function to the interval \[`lo`, `hi`\].  The
    /// bounds may be infinite but not NaN, and `lo ≤ hi` is required.
    pub fn domain(mut self, lo: f64, hi: f64) -> Result<Self> {
        if lo.is_nan() || hi.is_nan() || lo > hi {
            return Err(Error::Config(format!(
                "domain [{}, {}] of {} is not an interval", lo, hi, self.name)))
        }
        self.domain = Some((lo, hi));
        Ok(self)
    }

    pub fn name(&self) -> &str { &self.name }

    #[inline]
    fn contains(&self, x: f64) -> bool {
        match self.domain {
            Some((lo, hi)) => lo <= x && x <= hi, // NAN ⟹ false
            None => true,
        }
    }
}

impl<F> Function for MathematicalFunction<F>
where F: Fn(f64) -> f64 {
    fn eval(&self, x: f64) -> f64 {
        if self.contains(x) { (self.f)(x) } else { f64::NAN }
    }

    fn try_eval(&self, x: f64) -> Result<f64> {
        match self.domain {
            Some((lo, hi)) if !self.contains(x) =>
                Err(Error::Evaluation {
                    x,
                    reason: format!("{} is only defined on [{}, {}]",
                                    self.name, lo, hi) }),
            _ => Ok((self.f)(x)),
        }
    }
}

impl<F> Debug for MathematicalFunction<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MathematicalFunction")
            .field("name", &self.name)
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}


////////////////////////////////////////////////////////////////////////
//
// Data-backed functions

/// A function known through samples `(x, y)` at irregular abscissae.
/// In between samples, the function is linearly interpolated.  It is
/// not defined outside the range of the abscissae.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFunction {
    // Sorted increasingly, without duplicates.  Never empty.
    x: Vec<f64>,
    y: Vec<f64>,
}

impl DataFunction {
    /// Create a function from the samples `points`, given in any
    /// order.  All coordinates must be finite and no two samples may
    /// share the same abscissa.
    ///
    /// # Example
    ///
    /// ```
    /// use fine::{DataFunction, Function};
    /// # fn main() -> fine::Result<()> {
    /// let f = DataFunction::new([[2., 4.], [0., 0.], [1., 1.]])?;
    /// assert_eq!(f.eval(1.5), 2.5);
    /// assert_eq!(f.domain(), (0., 2.));
    /// # Ok(()) }
    /// ```
    pub fn new<I>(points: I) -> Result<Self>
    where I: IntoIterator<Item = [f64; 2]> {
        let mut pts: Vec<[f64; 2]> = points.into_iter().collect();
        if pts.is_empty() {
            return Err(Error::Data("no sample given".to_string()))
        }
        if let Some([x, y]) = pts.iter()
            .find(|[x, y]| !(x.is_finite() && y.is_finite())) {
                return Err(Error::Data(format!(
                    "sample ({}, {}) is not finite", x, y)))
            }
        pts.sort_unstable_by(|p, q| p[0].total_cmp(&q[0]));
        if let Some(w) = pts.windows(2).find(|w| w[0][0] == w[1][0]) {
            return Err(Error::Data(format!(
                "several samples at x = {}", w[0][0])))
        }
        let (x, y) = pts.into_iter().map(|[x, y]| (x, y)).unzip();
        Ok(Self { x, y })
    }

    /// Number of samples.
    pub fn len(&self) -> usize { self.x.len() }

    /// Always `false`: a `DataFunction` has at least one sample.
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// The interval \[`x_first`, `x_last`\] covered by the samples.
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Iterate on the samples, by increasing abscissa.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = [f64; 2]> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| [x, y])
    }

    fn interpolate(&self, x: f64) -> Option<f64> {
        let (lo, hi) = self.domain();
        if !(lo <= x && x <= hi) { return None } // NAN ⟹ None
        // First sample strictly to the right of `x`; `i ≥ 1` as `lo ≤ x`.
        let i = self.x.partition_point(|&xi| xi <= x);
        if i == self.x.len() {
            return Some(self.y[i - 1]) // x = hi
        }
        let (x0, x1) = (self.x[i - 1], self.x[i]);
        let (y0, y1) = (self.y[i - 1], self.y[i]);
        Some(y0 + (x - x0) / (x1 - x0) * (y1 - y0))
    }
}

impl Function for DataFunction {
    fn eval(&self, x: f64) -> f64 {
        self.interpolate(x).unwrap_or(f64::NAN)
    }

    fn try_eval(&self, x: f64) -> Result<f64> {
        self.interpolate(x).ok_or_else(|| {
            let (lo, hi) = self.domain();
            Error::Evaluation {
                x,
                reason: format!("data only cover [{}, {}]", lo, hi) }
        })
    }
}

impl TryFrom<&Curve> for DataFunction {
    type Error = Error;

    /// Use the finite points of `curve` as data.  Points with a
    /// non-finite coordinate are skipped.
    fn try_from(curve: &Curve) -> Result<Self> {
        Self::new(curve.iter()
                  .filter(|[x, y]| x.is_finite() && y.is_finite()))
    }
}


#[cfg(test)]
mod tests {
    use crate::{Curve, DataFunction, Error, Function, MathematicalFunction};

    #[test]
    fn closures_are_functions() {
        fn apply(f: &dyn Function, x: f64) -> f64 { f.eval(x) }
        assert_eq!(apply(&|x: f64| x * x, 3.), 9.);
        assert_eq!(apply(&f64::abs, -2.), 2.);
        assert_eq!((|x: f64| x + 1.).try_eval(1.).unwrap(), 2.);
        assert!(f64::sqrt.eval(-1.).is_nan());
    }

    #[test]
    fn mathematical_domain() {
        let f = MathematicalFunction::new("inv", |x: f64| 1. / x)
            .domain(1., 2.).unwrap();
        assert_eq!(f.name(), "inv");
        assert_eq!(f.eval(1.), 1.);
        assert_eq!(f.eval(2.), 0.5);
        assert!(f.eval(0.5).is_nan());
        assert!(f.eval(f64::NAN).is_nan());
        assert!(matches!(f.try_eval(3.),
                         Err(Error::Evaluation { x, .. }) if x == 3.));
        assert_eq!(f.try_eval(2.).unwrap(), 0.5);
    }

    #[test]
    fn mathematical_without_domain() {
        let f = MathematicalFunction::new("sqrt", f64::sqrt);
        // The value is returned untouched, even NaN.
        assert!(f.eval(-1.).is_nan());
        assert!(f.try_eval(-1.).unwrap().is_nan());
    }

    #[test]
    fn mathematical_bad_domain() {
        let f = || MathematicalFunction::new("id", |x: f64| x);
        assert!(matches!(f().domain(1., 0.), Err(Error::Config(_))));
        assert!(matches!(f().domain(f64::NAN, 0.), Err(Error::Config(_))));
        assert!(f().domain(f64::NEG_INFINITY, f64::INFINITY).is_ok());
        assert!(f().domain(1., 1.).is_ok());
    }

    #[test]
    fn data_interpolation() {
        let f = DataFunction::new([[3., 0.], [0., 0.], [1., 2.]]).unwrap();
        assert_eq!(f.len(), 3);
        assert_eq!(f.domain(), (0., 3.));
        assert_eq!(f.iter().collect::<Vec<_>>(),
                   vec![[0., 0.], [1., 2.], [3., 0.]]);
        assert_eq!(f.eval(0.), 0.);
        assert_eq!(f.eval(0.5), 1.);
        assert_eq!(f.eval(1.), 2.);
        assert_eq!(f.eval(2.), 1.);
        assert_eq!(f.eval(3.), 0.);
        assert!(f.eval(-0.1).is_nan());
        assert!(f.eval(3.1).is_nan());
        assert!(f.eval(f64::NAN).is_nan());
        assert!(matches!(f.try_eval(4.), Err(Error::Evaluation { .. })));
        assert_eq!(f.try_eval(2.5).unwrap(), 0.5);
    }

    #[test]
    fn data_single_sample() {
        let f = DataFunction::new([[1., 5.]]).unwrap();
        assert_eq!(f.eval(1.), 5.);
        assert!(f.eval(1.5).is_nan());
    }

    #[test]
    fn data_invalid() {
        let empty: [[f64; 2]; 0] = [];
        assert!(matches!(DataFunction::new(empty), Err(Error::Data(_))));
        assert!(matches!(DataFunction::new([[0., 1.], [1., f64::NAN]]),
                         Err(Error::Data(_))));
        assert!(matches!(DataFunction::new([[f64::INFINITY, 1.]]),
                         Err(Error::Data(_))));
        assert!(matches!(DataFunction::new([[0., 1.], [2., 3.], [0., 2.]]),
                         Err(Error::Data(_))));
    }

    #[test]
    fn data_of_curve() {
        let c = Curve::from_iter([[0., 1.], [1., f64::NAN], [2., 3.]]);
        let f = DataFunction::try_from(&c).unwrap();
        assert_eq!(f.len(), 2);
        assert_eq!(f.eval(1.), 2.);
        assert!(DataFunction::try_from(&Curve::new(3)).is_err());
    }
}
