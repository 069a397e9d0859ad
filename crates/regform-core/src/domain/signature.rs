//! Signature surface
//!
//! A fixed-size RGBA raster that strokes are stamped onto, with an undo stack
//! of PNG snapshots taken before each stroke that lands on a non-blank surface.

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use thiserror::Error;
use tracing::debug;

use crate::domain::value_objects::SignatureArtifact;

/// Spacing between stamps along a segment, in pixels
const STAMP_SPACING: f32 = 0.5;

/// Smallest stamp radius that always covers at least one pixel
const MIN_RADIUS: f32 = 1.0;

#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("no signature has been drawn")]
    SignatureMissing,

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn lerp(self, to: Point, t: f32) -> Point {
        Point::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
    }

    fn distance(self, to: Point) -> f32 {
        ((to.x - self.x).powi(2) + (to.y - self.y).powi(2)).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Pen width in pixels and RGBA colour
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenStyle {
    pub width: f32,
    pub color: [u8; 4],
}

impl Default for PenStyle {
    fn default() -> Self {
        Self {
            width: 2.5,
            color: [0, 0, 0, 255],
        }
    }
}

pub struct SignatureCanvas {
    surface: RgbaImage,
    pen: PenStyle,
    has_content: bool,
    undo_stack: Vec<Vec<u8>>,
    cursor: Option<Point>,
}

impl SignatureCanvas {
    pub fn new(width: u32, height: u32, pen: PenStyle) -> Self {
        Self {
            surface: RgbaImage::new(width, height),
            pen,
            has_content: false,
            undo_stack: Vec::new(),
            cursor: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn has_content(&self) -> bool {
        self.has_content
    }

    /// No pixel has been painted
    pub fn is_blank(&self) -> bool {
        self.surface.pixels().all(|pixel| pixel[3] == 0)
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn surface(&self) -> &RgbaImage {
        &self.surface
    }

    /// Begin a stroke, snapshotting the surface first if it already has content
    ///
    /// A non-finite point starts nothing.
    pub fn stroke_start(&mut self, point: Point) -> Result<(), SignatureError> {
        if !point.is_finite() {
            return Ok(());
        }
        if self.has_content {
            let snapshot = encode_png(&self.surface)?;
            self.undo_stack.push(snapshot);
        }
        self.cursor = Some(point);
        self.stamp(point);
        Ok(())
    }

    /// Extend the current stroke; ignored outside a stroke or for non-finite points
    ///
    /// Only the part of the segment that can reach the surface is stamped.
    pub fn stroke_to(&mut self, point: Point) {
        let Some(from) = self.cursor else {
            return;
        };
        if !point.is_finite() {
            return;
        }
        if let Some((start, end)) = self.clip(from, point) {
            let steps = (start.distance(end) / STAMP_SPACING).ceil().max(1.0) as usize;
            for step in 1..=steps {
                self.stamp(start.lerp(end, step as f32 / steps as f32));
            }
        }
        self.cursor = Some(point);
    }

    pub fn stroke_end(&mut self) {
        self.cursor = None;
        self.has_content = !self.is_blank();
        debug!(has_content = self.has_content, undo_depth = self.undo_stack.len(), "stroke ended");
    }

    pub fn clear(&mut self) {
        let (width, height) = self.surface.dimensions();
        self.surface = RgbaImage::new(width, height);
        self.has_content = false;
        self.undo_stack.clear();
        self.cursor = None;
    }

    /// Restore the latest snapshot; `Ok(false)` when there is nothing to undo
    pub fn undo(&mut self) -> Result<bool, SignatureError> {
        let Some(snapshot) = self.undo_stack.pop() else {
            return Ok(false);
        };
        let restored = image::load_from_memory_with_format(&snapshot, ImageFormat::Png)?;
        self.surface = restored.to_rgba8();
        self.has_content = true;
        self.cursor = None;
        Ok(true)
    }

    /// Encode the surface as a PNG artifact
    pub fn export(&self) -> Result<SignatureArtifact, SignatureError> {
        if !self.has_content {
            return Err(SignatureError::SignatureMissing);
        }
        Ok(SignatureArtifact::from_png(&encode_png(&self.surface)?))
    }

    fn radius(&self) -> f32 {
        (self.pen.width / 2.0).max(MIN_RADIUS)
    }

    /// Liang-Barsky clip of `from..to` against the surface grown by the pen radius
    fn clip(&self, from: Point, to: Point) -> Option<(Point, Point)> {
        let margin = f64::from(self.radius());
        let (width, height) = self.surface.dimensions();
        let (x0, y0) = (f64::from(from.x), f64::from(from.y));
        let (dx, dy) = (f64::from(to.x) - x0, f64::from(to.y) - y0);

        let mut enter = 0.0_f64;
        let mut leave = 1.0_f64;
        let edges = [
            (-dx, x0 + margin),
            (dx, f64::from(width) + margin - x0),
            (-dy, y0 + margin),
            (dy, f64::from(height) + margin - y0),
        ];
        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                enter = enter.max(t);
            } else {
                leave = leave.min(t);
            }
            if enter > leave {
                return None;
            }
        }

        // Clamped so rounding on huge coordinates cannot stretch the segment
        let at = |t: f64| {
            Point::new(
                (x0 + t * dx).clamp(-margin, f64::from(width) + margin) as f32,
                (y0 + t * dy).clamp(-margin, f64::from(height) + margin) as f32,
            )
        };
        Some((at(enter), at(leave)))
    }

    fn stamp(&mut self, center: Point) {
        let radius = self.radius();
        let (width, height) = self.surface.dimensions();
        let x_range = span(center.x, radius, width);
        let y_range = span(center.y, radius, height);
        let color = Rgba(self.pen.color);

        for y in y_range {
            for x in x_range.clone() {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= radius * radius {
                    self.surface.put_pixel(x, y, color);
                }
            }
        }
    }
}

impl std::fmt::Debug for SignatureCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureCanvas")
            .field("width", &self.surface.width())
            .field("height", &self.surface.height())
            .field("pen", &self.pen)
            .field("has_content", &self.has_content)
            .field("undo_depth", &self.undo_stack.len())
            .finish()
    }
}

/// Pixel indices within `radius` of `center`, clipped to `[0, limit)`
fn span(center: f32, radius: f32, limit: u32) -> std::ops::Range<u32> {
    let low = (center - radius).floor().clamp(0.0, limit as f32) as u32;
    let high = (center + radius).ceil().clamp(0.0, limit as f32) as u32;
    low..high
}

fn encode_png(surface: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(surface.clone()).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> SignatureCanvas {
        SignatureCanvas::new(500, 200, PenStyle::default())
    }

    fn draw_line(canvas: &mut SignatureCanvas, from: Point, to: Point) {
        canvas.stroke_start(from).unwrap();
        canvas.stroke_to(to);
        canvas.stroke_end();
    }

    #[test]
    fn test_new_canvas_is_blank() {
        let canvas = canvas();
        assert!(canvas.is_blank());
        assert!(!canvas.has_content());
        assert_eq!((canvas.width(), canvas.height()), (500, 200));
    }

    #[test]
    fn test_export_blank_fails() {
        assert!(matches!(canvas().export(), Err(SignatureError::SignatureMissing)));
    }

    #[test]
    fn test_stroke_paints_and_exports() {
        let mut canvas = canvas();
        draw_line(&mut canvas, Point::new(10.0, 10.0), Point::new(120.0, 80.0));
        assert!(canvas.has_content());
        let artifact = canvas.export().unwrap();
        assert!(!artifact.is_empty());

        let decoded = image::load_from_memory(&artifact.png_bytes().unwrap()).unwrap();
        assert_eq!(decoded.to_rgba8().dimensions(), (500, 200));
    }

    #[test]
    fn test_first_stroke_takes_no_snapshot() {
        let mut canvas = canvas();
        draw_line(&mut canvas, Point::new(10.0, 10.0), Point::new(40.0, 10.0));
        assert_eq!(canvas.undo_depth(), 0);
        draw_line(&mut canvas, Point::new(10.0, 50.0), Point::new(40.0, 50.0));
        assert_eq!(canvas.undo_depth(), 1);
    }

    #[test]
    fn test_undo_restores_previous_surface() {
        let mut canvas = canvas();
        draw_line(&mut canvas, Point::new(10.0, 10.0), Point::new(40.0, 10.0));
        let after_first = canvas.surface().clone();
        draw_line(&mut canvas, Point::new(10.0, 100.0), Point::new(40.0, 100.0));
        assert_ne!(canvas.surface(), &after_first);

        assert!(canvas.undo().unwrap());
        assert_eq!(canvas.surface(), &after_first);
        assert!(canvas.has_content());
        assert!(!canvas.undo().unwrap());
    }

    #[test]
    fn test_clear_empties_undo_stack() {
        let mut canvas = canvas();
        draw_line(&mut canvas, Point::new(10.0, 10.0), Point::new(40.0, 10.0));
        draw_line(&mut canvas, Point::new(10.0, 30.0), Point::new(40.0, 30.0));
        canvas.clear();
        assert!(canvas.is_blank());
        assert!(!canvas.has_content());
        assert!(!canvas.undo().unwrap());
    }

    #[test]
    fn test_out_of_bounds_points_are_clipped() {
        let mut canvas = canvas();
        draw_line(&mut canvas, Point::new(-50.0, -50.0), Point::new(-10.0, -10.0));
        assert!(!canvas.has_content());
        draw_line(&mut canvas, Point::new(490.0, 190.0), Point::new(900.0, 900.0));
        assert!(canvas.has_content());
    }

    #[test]
    fn test_far_off_canvas_segment_paints_only_the_visible_part() {
        let mut canvas = canvas();
        canvas.stroke_start(Point::new(250.0, 100.0)).unwrap();
        canvas.stroke_to(Point::new(1.0e8, 100.0));
        canvas.stroke_to(Point::new(3.0e38, 3.0e38));
        canvas.stroke_to(Point::new(3.0e38, -3.0e38));
        canvas.stroke_end();

        assert!(canvas.has_content());
        assert_eq!(canvas.surface().get_pixel(499, 100)[3], 255);
        assert_eq!(canvas.surface().get_pixel(100, 100)[3], 0);
        assert_eq!(canvas.surface().get_pixel(499, 10)[3], 0);
    }

    #[test]
    fn test_huge_segment_across_the_surface_stays_bounded() {
        let mut canvas = canvas();
        let from = Point::new(3.0e38, -3.0e38);
        let to = Point::new(-3.0e38, 3.0e38);
        if let Some((start, end)) = canvas.clip(from, to) {
            assert!(start.distance(end) <= 600.0);
        }

        canvas.stroke_start(from).unwrap();
        canvas.stroke_to(to);
        canvas.stroke_end();
        assert_eq!((canvas.width(), canvas.height()), (500, 200));
    }

    #[test]
    fn test_non_finite_points_are_skipped() {
        let mut canvas = canvas();
        canvas.stroke_start(Point::new(f32::NAN, 10.0)).unwrap();
        canvas.stroke_to(Point::new(40.0, 10.0));
        canvas.stroke_end();
        assert!(canvas.is_blank());

        canvas.stroke_start(Point::new(10.0, 10.0)).unwrap();
        canvas.stroke_to(Point::new(f32::INFINITY, 10.0));
        canvas.stroke_to(Point::new(40.0, 10.0));
        canvas.stroke_end();
        assert_eq!(canvas.surface().get_pixel(25, 10)[3], 255);
    }

    #[test]
    fn test_stroke_to_outside_stroke_is_ignored() {
        let mut canvas = canvas();
        canvas.stroke_to(Point::new(20.0, 20.0));
        canvas.stroke_end();
        assert!(canvas.is_blank());
    }
}
