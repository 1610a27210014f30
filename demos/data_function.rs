use std::{error::Error,
          fs::File,
          io::BufWriter};
use rand::prelude::*;
use fine::{Curve, CurveGenerator, DataFunction, Function};

/// Resample noisy measurements of `exp(-x²)`, taken at random
/// abscissae, on a uniform grid.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let mut rng = rand::thread_rng();
    let data: Curve = (0 .. 200).map(|_| {
        let x: f64 = rng.gen_range(-2.5 .. 2.5);
        [x, (- x * x).exp() + 0.02 * (rng.gen::<f64>() - 0.5)]
    }).collect();
    data.write(&mut BufWriter::new(File::create("/tmp/data0.dat")?))?;

    let f = DataFunction::try_from(&data)?;
    let (lo, hi) = f.domain();
    println!("{} samples on [{}, {}], f(0) ≈ {}", f.len(), lo, hi, f.eval(0.));
    let curve = CurveGenerator::new(100, lo, hi)?.try_generate_curve(&f)?;
    curve.write(&mut BufWriter::new(File::create("/tmp/data1.dat")?))?;
    Ok(())
}
