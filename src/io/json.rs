use std::io::{self, Write};

use crate::sim::{AscentResult, FlightParams};

/// Write flight inputs and summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    params: &FlightParams,
    result: &AscentResult,
) -> io::Result<()> {
    let burst_altitude = match result.burst_altitude {
        Some(h) => format!("{h:.2}"),
        None => "null".to_string(),
    };

    writeln!(writer, "{{")?;
    writeln!(writer, "  \"flight\": {{")?;
    writeln!(writer, "    \"duration_s\": {},", params.duration)?;
    writeln!(writer, "    \"envelope_mass_kg\": {},", params.envelope_mass)?;
    writeln!(writer, "    \"diameter_m\": {},", params.diameter)?;
    writeln!(writer, "    \"material\": \"{}\",", escape(&params.material))?;
    writeln!(writer, "    \"gas\": \"{}\",", escape(&params.gas))?;
    writeln!(writer, "    \"payload_kg\": {}", params.payload)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"result\": {{")?;
    writeln!(writer, "    \"exit_status\": \"{}\",", result.exit_status)?;
    writeln!(writer, "    \"apex_altitude_m\": {:.2},", result.apex_altitude)?;
    writeln!(writer, "    \"time_to_apex_s\": {:.2},", result.time_to_apex)?;
    writeln!(writer, "    \"burst_altitude_m\": {burst_altitude},")?;
    writeln!(writer, "    \"peak_speed_ms\": {:.2}", result.peak_speed())?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"samples\": [")?;
    let n = result.samples().len();
    for (i, s) in result.samples().iter().enumerate() {
        let sep = if i + 1 < n { "," } else { "" };
        writeln!(writer, "    [{:.4}, {:.4}, {:.4}]{sep}", s.time, s.altitude, s.velocity)?;
    }
    writeln!(writer, "  ]")?;
    writeln!(writer, "}}")?;
    Ok(())
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\u{20}' => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
