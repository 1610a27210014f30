//! Sampling of functions ℝ → ℝ into curves made of a fixed number of
//! points.  These curves are the discrete representation of
//! functions used to approximate data by closed-form expressions.
//!
//! ```
//! use fine::{CurveGenerator, MathematicalFunction};
//! # fn main() -> fine::Result<()> {
//! let f = MathematicalFunction::new("sqrt", f64::sqrt)
//!     .domain(0., f64::INFINITY)?;
//! let curve = CurveGenerator::new(1000, 0., 1.)?.try_generate_curve(&f)?;
//! assert_eq!(curve.point(0)?, [0., 0.]);
//! let mut out = Vec::new();
//! curve.write(&mut out)?;
//! assert_eq!(fine::Curve::read(&out[..])?, curve);
//! # Ok(()) }
//! ```

mod error;
mod function;
mod curve;
mod generator;

pub use error::{Error, Result};
pub use function::{Function, MathematicalFunction, DataFunction};
pub use curve::Curve;
pub use generator::CurveGenerator;
