use egui::{Color32, Pos2, Rect};
use std::f32::consts::TAU;

use crate::geometry::{self, Affine};
use crate::tools::StampKind;

/// Side of the local square stamp outlines are expressed in.
pub const SHAPE_EXTENT: f32 = 200.0;

pub const DEFAULT_ELLIPSE_SEGMENTS: usize = 96;

/// A polyline outline, optionally closed back to its first point.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePath {
    points: Vec<Pos2>,
    closed: bool,
}

impl ShapePath {
    pub fn closed(points: Vec<Pos2>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    pub fn open(points: Vec<Pos2>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of straight edges, including the closing one.
    pub fn edge_count(&self) -> usize {
        match (self.points.len(), self.closed) {
            (0 | 1, _) => 0,
            (n, true) => n,
            (n, false) => n - 1,
        }
    }

    pub fn edges(&self) -> impl Iterator<Item = (Pos2, Pos2)> + '_ {
        let closing = match (self.closed, self.points.first(), self.points.last()) {
            (true, Some(&first), Some(&last)) if self.points.len() > 1 => Some((last, first)),
            _ => None,
        };
        self.points
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .chain(closing)
    }

    pub fn bounds(&self) -> Rect {
        geometry::bounds_of(&self.points)
    }

    pub fn transformed(&self, transform: &Affine) -> Self {
        Self {
            points: self.points.iter().map(|&p| transform.apply(p)).collect(),
            closed: self.closed,
        }
    }
}

/// A stroke-only stamp outline, ready to be previewed or rasterized.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeOutline {
    pub path: ShapePath,
    pub stroke_color: Color32,
    pub stroke_width: f32,
}

/// Builds stamp outlines in the local `SHAPE_EXTENT` square.
#[derive(Debug, Clone, Copy)]
pub struct ShapeGenerator {
    ellipse_segments: usize,
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ELLIPSE_SEGMENTS)
    }
}

impl ShapeGenerator {
    pub fn new(ellipse_segments: usize) -> Self {
        Self {
            ellipse_segments: ellipse_segments.max(8),
        }
    }

    /// `surface` is the live editing surface. Only the ellipse is sized to it,
    /// the rectangle and triangle always fill the fixed local square.
    pub fn generate(
        &self,
        kind: StampKind,
        stroke_color: Color32,
        stroke_width: f32,
        surface: Rect,
    ) -> ShapeOutline {
        let path = match kind {
            StampKind::Rectangle => ShapePath::closed(vec![
                Pos2::new(0.0, 0.0),
                Pos2::new(SHAPE_EXTENT, 0.0),
                Pos2::new(SHAPE_EXTENT, SHAPE_EXTENT),
                Pos2::new(0.0, SHAPE_EXTENT),
            ]),
            StampKind::Triangle => ShapePath::closed(vec![
                Pos2::new(0.0, SHAPE_EXTENT),
                Pos2::new(SHAPE_EXTENT / 2.0, 0.0),
                Pos2::new(SHAPE_EXTENT, SHAPE_EXTENT),
            ]),
            StampKind::Ellipse => self.ellipse_in(surface),
        };

        ShapeOutline {
            path,
            stroke_color,
            stroke_width,
        }
    }

    fn ellipse_in(&self, rect: Rect) -> ShapePath {
        let center = rect.center();
        let radii = rect.size() / 2.0;
        let points = (0..self.ellipse_segments)
            .map(|i| {
                let angle = TAU * i as f32 / self.ellipse_segments as f32;
                Pos2::new(center.x + radii.x * angle.cos(), center.y + radii.y * angle.sin())
            })
            .collect();
        ShapePath::closed(points)
    }
}
