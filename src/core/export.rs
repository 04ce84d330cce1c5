use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::core::ballistics::TrajectoryResult;

pub const CSV_HEADER: &str = "t_s,x_m,y_m";

/// Writes one `t,x,y` row per sample. Values use the shortest exact
/// representation so the file reproduces the series bit for bit.
pub fn write_csv<W: Write>(result: &TrajectoryResult, mut out: W) -> io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for sample in result.samples() {
        writeln!(out, "{},{},{}", sample.t_s, sample.x_m, sample.y_m)?;
    }
    out.flush()
}

pub fn export_csv(result: &TrajectoryResult, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_csv(result, BufWriter::new(file))?;
    info!(path = %path.display(), rows = result.len(), "wrote trajectory csv");
    Ok(())
}
