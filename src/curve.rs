//! Discrete representation of a function by a fixed number of points.

use std::{fmt::{self, Display, Formatter},
          io::{self, BufRead, Write}};
use crate::{Error, Result};

/// A curve made of a fixed number of points `(x, y)`.  Points not
/// yet set hold NaN coordinates.
///
/// # Example
///
/// ```
/// use fine::Curve;
/// # fn main() -> fine::Result<()> {
/// let mut c = Curve::new(2);
/// c.set_point(0, 0., 1.)?;
/// c.set_point(1, 1., 3.)?;
/// assert_eq!(c.point(1)?, [1., 3.]);
/// assert!(c.x(2).is_err());
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    // Both of length `number_of_points`.
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Curve {
    /// Create a curve with `number_of_points` points.
    pub fn new(number_of_points: usize) -> Self {
        Self { x: vec![f64::NAN; number_of_points],
               y: vec![f64::NAN; number_of_points] }
    }

    /// Number of points in the curve.  It never changes.
    #[inline]
    pub fn number_of_points(&self) -> usize { self.x.len() }

    #[inline]
    pub fn len(&self) -> usize { self.x.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.x.len() { Ok(()) }
        else { Err(Error::Index { index, len: self.x.len() }) }
    }

    /// Set the point with the given `index` to (`x`, `y`).
    pub fn set_point(&mut self, index: usize, x: f64, y: f64) -> Result<()> {
        self.check_index(index)?;
        self.x[index] = x;
        self.y[index] = y;
        Ok(())
    }

    /// Return the x-value of the point with the given `index`.
    pub fn x(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.x[index])
    }

    /// Return the y-value of the point with the given `index`.
    pub fn y(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.y[index])
    }

    pub fn point(&self, index: usize) -> Result<[f64; 2]> {
        self.check_index(index)?;
        Ok([self.x[index], self.y[index]])
    }

    /// Iterate on the points `[x, y]` of the curve in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = [f64; 2]> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| [x, y])
    }
}

impl FromIterator<[f64; 2]> for Curve {
    /// Create a curve whose points are given by the iterator, in order.
    fn from_iter<T>(points: T) -> Self
    where T: IntoIterator<Item = [f64; 2]> {
        let (x, y) = points.into_iter().map(|[x, y]| (x, y)).unzip();
        Self { x, y }
    }
}

impl From<Vec<[f64; 2]>> for Curve {
    fn from(points: Vec<[f64; 2]>) -> Self {
        points.into_iter().collect()
    }
}


////////////////////////////////////////////////////////////////////////
//
// Tabular text

/// # Input/Output
impl Curve {
    /// Write the curve to `f` in a tabular form: a header line
    /// "# x\ty" followed by each point written as "x\ty" on a single
    /// line (in scientific notation).  The numbers are written with
    /// enough digits to be read back exactly by [`Curve::read`].
    ///
    /// # Example
    ///
    /// ```
    /// use std::fs::File;
    /// use fine::CurveGenerator;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let c = CurveGenerator::new(100, 0., 4.)?.generate_curve(&f64::sin);
    /// c.write(&mut File::create("target/curve.txt")?)?;
    /// # Ok(()) }
    /// ```
    pub fn write(&self, f: &mut impl Write) -> io::Result<()> {
        write!(f, "# x\ty\n")?;
        for [x, y] in self.iter() {
            write!(f, "{:e}\t{:e}\n", x, y)?
        }
        Ok(())
    }

    /// Read a curve written in the tabular form of [`Curve::write`].
    /// Empty lines and lines starting with `#` are ignored.  The
    /// other lines must contain exactly two numbers separated by
    /// white space.
    pub fn read(r: impl BufRead) -> Result<Curve> {
        let mut points = Vec::new();
        for (i, line) in r.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') { continue }
            let parse_err = |msg: String| Error::Parse { line: i + 1, msg };
            let mut cols = line.split_whitespace();
            let mut num = |name: &str| -> Result<f64> {
                let s = cols.next().ok_or_else(
                    || parse_err(format!("missing {} column", name)))?;
                s.parse().map_err(
                    |e| parse_err(format!("{} = {:?}: {}", name, s, e)))
            };
            let x = num("x")?;
            let y = num("y")?;
            if cols.next().is_some() {
                return Err(parse_err("more than two columns".to_string()))
            }
            points.push([x, y]);
        }
        Ok(Curve::from(points))
    }
}

impl Display for Curve {
    /// Display the curve in the tabular form of [`Curve::write`].
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "# x\ty\n")?;
        for [x, y] in self.iter() {
            write!(f, "{:e}\t{:e}\n", x, y)?
        }
        Ok(())
    }
}
