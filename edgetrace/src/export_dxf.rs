// DXF export module
// Exports traced strokes to DXF, one lightweight polyline per stroke

use anyhow::Result;
use dxf::{Drawing, entities::*, Color, LwPolylineVertex};
use dxf::enums::AcadVersion;
use log::info;

use crate::tracing::TracedPath;

/// Build the drawing for a traced path
/// Pixel rows grow downwards, so y is flipped to keep the picture upright
pub fn build_drawing(traced: &TracedPath) -> Drawing {
    let mut drawing = Drawing::new();
    drawing.header.version = AcadVersion::R2010;

    let height = f64::from(traced.height);

    for (idx, stroke) in traced.strokes.iter().enumerate() {
        if stroke.points.is_empty() {
            continue;
        }

        let mut polyline = LwPolyline::default();
        for pt in &stroke.points {
            polyline.vertices.push(LwPolylineVertex {
                x: pt.col as f64,
                y: height - 1.0 - pt.row as f64,
                .. Default::default()
            });
        }
        polyline.set_is_closed(false);

        let mut common = EntityCommon::default();
        common.layer = format!("STROKE-{}", idx);
        common.color = Color::from_index(7);

        drawing.add_entity(Entity {
            common,
            specific: EntityType::LwPolyline(polyline),
        });
    }

    drawing
}

/// Export the traced strokes to a DXF file
pub fn export_dxf(traced: &TracedPath, output_path: &str) -> Result<()> {
    let drawing = build_drawing(traced);
    drawing.save_file(output_path)?;

    info!("Exported {} stroke(s) to DXF: {}", traced.strokes.len(), output_path);
    info!("  Canvas: {}px × {}px", traced.width, traced.height);

    Ok(())
}
