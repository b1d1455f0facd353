//! Plain-text output of a trajectory, one `t,x1,x2` row per sample.
//! Paste into a spreadsheet to graph.

use std::io::{self, Write};

use crate::simulation::states::TimeSample;

pub fn write_csv<W: Write>(out: &mut W, samples: &[TimeSample]) -> io::Result<()> {
    writeln!(out, "t,x1,x2")?;
    for s in samples {
        writeln!(out, "{:.6},{:.9e},{:.9e}", s.t, s.x1, s.x2)?;
    }
    Ok(())
}
