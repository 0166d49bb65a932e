// SVG export module
// Exports traced strokes to SVG in pixel units, one path per pen-down stroke

use anyhow::Result;
use edgetrace_core::Stroke;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::tracing::TracedPath;

/// Export the traced strokes to an SVG file
/// Jumps between strokes are drawn as dashed connectors when `show_jumps` is set
pub fn export_svg(traced: &TracedPath, output_path: &str, show_jumps: bool) -> Result<()> {
    let mut file = BufWriter::new(File::create(output_path)?);
    write_svg(&mut file, traced, show_jumps)?;
    file.flush()?;

    info!("Exported {} stroke(s) to SVG: {}", traced.strokes.len(), output_path);
    info!("  Canvas: {}px × {}px", traced.width, traced.height);

    Ok(())
}

fn write_svg<W: Write>(out: &mut W, traced: &TracedPath, show_jumps: bool) -> Result<()> {
    let (width, height) = (traced.width, traced.height);

    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(out, r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1""#)?;
    writeln!(out, r#"     width="{}" height="{}""#, width, height)?;
    writeln!(out, r#"     viewBox="0 0 {} {}">"#, width, height)?;
    writeln!(out)?;

    writeln!(out, r#"  <title>EdgeTrace - Drag Path</title>"#)?;
    writeln!(out, r#"  <desc>Pen-down strokes in replay order. Units: pixels</desc>"#)?;
    writeln!(out)?;

    for (idx, stroke) in traced.strokes.iter().enumerate() {
        if stroke.points.is_empty() {
            continue;
        }

        write!(out, r#"  <path id="stroke-{}" "#, idx)?;
        write!(out, r#"stroke="black" stroke-width="1" stroke-linecap="round" fill="none" "#)?;
        writeln!(out, r#"d="{}" />"#, path_data(stroke))?;
    }

    if show_jumps {
        writeln!(out)?;
        writeln!(out, r#"  <g id="jumps" stroke="red" stroke-width="0.5" stroke-dasharray="2,2">"#)?;
        for pair in traced.strokes.windows(2) {
            if let (Some(from), Some(to)) = (pair[0].last(), pair[1].first()) {
                writeln!(
                    out,
                    r#"    <line x1="{}.5" y1="{}.5" x2="{}.5" y2="{}.5" />"#,
                    from.col, from.row, to.col, to.row
                )?;
            }
        }
        writeln!(out, "  </g>")?;
    }

    writeln!(out)?;
    writeln!(out, "</svg>")?;

    Ok(())
}

/// Path data through pixel centres; a single-pixel stroke becomes a dot
fn path_data(stroke: &Stroke) -> String {
    let mut d = String::new();
    for (i, pt) in stroke.points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{} {}.5,{}.5 ", cmd, pt.col, pt.row));
    }
    if stroke.points.len() == 1 {
        d.push_str("l 0,0");
    }
    d.trim_end().to_string()
}
