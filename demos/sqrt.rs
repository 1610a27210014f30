use std::{error::Error,
          fs::File,
          io::BufWriter};
use fine::CurveGenerator;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let generator = CurveGenerator::new(1000, 0., 1.)?;
    let curve = generator.generate_curve(&f64::sqrt);
    let path = "/tmp/test_curve_generator.txt";
    curve.write(&mut BufWriter::new(File::create(path)?))?;
    println!("Wrote {} points of sqrt to {}.", curve.len(), path);
    Ok(())
}
