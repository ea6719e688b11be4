use std::io::{self, Write};

use crate::sim::Sample;

/// Write trajectory data to CSV format.
///
/// Columns: time, altitude, velocity
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &[Sample]) -> io::Result<()> {
    writeln!(writer, "time,altitude,velocity")?;

    for s in trajectory {
        writeln!(writer, "{:.4},{:.4},{:.4}", s.time, s.altitude, s.velocity)?;
    }

    Ok(())
}
