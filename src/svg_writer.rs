//! SVG writer
//!
//! Draws the layout the way the interactive viewer does: vertices as red
//! circles, edges as white line segments, on a black background.

use std::fs;
use std::path::Path;

use askama::Template;

use crate::force::Vec2;
use crate::io::{IoError, IoResult, Writer};
use crate::layout::LayoutResult;

/// Vertex circle radius
const VERTEX_RADIUS: f64 = 5.0;

/// Space kept around the drawing
const MARGIN: f64 = 20.0;

struct SvgLine {
    x1: String,
    y1: String,
    x2: String,
    y2: String,
}

struct SvgVertex {
    cx: String,
    cy: String,
    label_x: String,
    label: String,
}

#[derive(Template)]
#[template(path = "layout.svg", escape = "html")]
struct LayoutTemplate<'a> {
    width: String,
    height: String,
    origin_x: String,
    origin_y: String,
    view_box: String,
    radius: String,
    lines: &'a [SvgLine],
    vertices: &'a [SvgVertex],
}

fn coord(value: f64) -> String {
    format!("{value:.2}")
}

/// Axis-aligned box covering the bounds and every finite position
#[derive(Debug, Clone, Copy, PartialEq)]
struct Extent {
    min: Vec2,
    max: Vec2,
}

impl Extent {
    fn of(layout: &LayoutResult) -> Self {
        let mut extent = Extent {
            min: Vec2::ZERO,
            max: Vec2::new(layout.bounds.width, layout.bounds.height),
        };
        for p in layout.positions.iter().filter(|p| p.is_finite()) {
            extent.min.x = extent.min.x.min(p.x - MARGIN);
            extent.min.y = extent.min.y.min(p.y - MARGIN);
            extent.max.x = extent.max.x.max(p.x + MARGIN);
            extent.max.y = extent.max.y.max(p.y + MARGIN);
        }
        extent
    }

    fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Writer for SVG drawings of a layout
pub struct SvgWriter;

impl SvgWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render the layout to an SVG document
    pub fn to_svg(layout: &LayoutResult) -> IoResult<String> {
        let position = |i: usize| layout.positions.get(i).copied().filter(|p| p.is_finite());

        let lines: Vec<SvgLine> = layout
            .edges
            .iter()
            .filter(|(v, w)| v != w)
            .filter_map(|&(v, w)| {
                let (a, b) = (position(v)?, position(w)?);
                Some(SvgLine {
                    x1: coord(a.x),
                    y1: coord(a.y),
                    x2: coord(b.x),
                    y2: coord(b.y),
                })
            })
            .collect();

        let vertices: Vec<SvgVertex> = (0..layout.positions.len())
            .filter_map(|i| {
                let p = position(i)?;
                Some(SvgVertex {
                    cx: coord(p.x),
                    cy: coord(p.y),
                    label_x: coord(p.x + VERTEX_RADIUS + 2.0),
                    label: layout.label(i),
                })
            })
            .collect();

        let extent = Extent::of(layout);
        let size = extent.size();
        let template = LayoutTemplate {
            width: coord(size.x),
            height: coord(size.y),
            origin_x: coord(extent.min.x),
            origin_y: coord(extent.min.y),
            view_box: format!(
                "{} {} {} {}",
                coord(extent.min.x),
                coord(extent.min.y),
                coord(size.x),
                coord(size.y)
            ),
            radius: coord(VERTEX_RADIUS),
            lines: &lines,
            vertices: &vertices,
        };

        template.render().map_err(|e| IoError::Write(e.to_string()))
    }
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for SvgWriter {
    fn write(&self, layout: &LayoutResult, output: &Path) -> IoResult<()> {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let svg = Self::to_svg(layout)?;
        fs::write(output, svg)?;
        Ok(())
    }

    fn format_id(&self) -> &str {
        "svg"
    }
}
