//! Fit linear, quadratic and cubic splines through the same waypoints and
//! print the sampled paths as CSV (`label,kind,s,x,y`) for plotting.

use std::io::{self, Write};

use arc_spline::prelude::*;
use nalgebra::Point2;

struct CsvSink<W: Write> {
    writer: W,
}

impl<W: Write> PathSink<f64> for CsvSink<W> {
    type Error = anyhow::Error;

    fn waypoints(&mut self, label: &str, points: &[Point2<f64>]) -> anyhow::Result<()> {
        for p in points {
            writeln!(self.writer, "{label},waypoint,,{},{}", p.x, p.y)?;
        }
        Ok(())
    }

    fn path(&mut self, label: &str, samples: &[SplineSample<f64>]) -> anyhow::Result<()> {
        for sample in samples {
            let p = sample.point();
            writeln!(
                self.writer,
                "{label},path,{},{},{}",
                sample.parameter(),
                p.x,
                p.y
            )?;
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let xs = [-2.5, 0.0, 2.5, 5.0, 7.5, 3.0, -1.0];
    let ys = [0.7, -6., -5., -3.5, 0.0, 5.0, -2.0];
    // [m] distance between interpolated points
    let options = SampleOptions::default().with_step(0.1);

    let stdout = io::stdout();
    let mut sink = CsvSink {
        writer: stdout.lock(),
    };
    writeln!(sink.writer, "label,series,s,x,y")?;

    for (kind, label) in [
        (InterpolationKind::Linear, "C0 (Linear spline)"),
        (InterpolationKind::Quadratic, "C0 & C1 (Quadratic spline)"),
        (InterpolationKind::Cubic, "C0 & C1 & C2 (Cubic spline)"),
    ] {
        let spline = ArcLengthSpline2D::try_new(&xs, &ys, kind)?;
        eprintln!("{spline}: length {:.3}", spline.total_length());
        spline.render_into(label, &options, &mut sink)?;
    }

    Ok(())
}
