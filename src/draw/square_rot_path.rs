// src/draw/square_rot_path.rs
// Geometry of one square rotation path shape and its translation to Nannou Draw.
//
// The shape is built for the right half in local coordinates (origin at the
// surface center, y up) and mirrored for the left half:
//   * a base line growing out from the center,
//   * an arm pivoting at the end of the base line, swinging up by `rotation_degrees`,
//   * a small rectangle sliding from the center toward the surface edge while growing.
use nannou::color::Rgb8;
use nannou::lyon::tessellation::LineCap;
use nannou::prelude::*;

use super::DrawParams;
use crate::animation::scale::{divide_scale, sinify, PARTS};
use crate::config::Style;

const MIN_EXTENT: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point2,
    pub end: Point2,
}

impl LineSegment {
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfGeometry {
    pub base: LineSegment,
    pub arm: LineSegment,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeGeometry {
    pub halves: [HalfGeometry; 2], // right, left
    pub stroke_weight: f32,
}

/// Sub-progress of each part of the shape for an overall progress value.
pub fn part_scales(progress: f32) -> [f32; PARTS] {
    let sf = sinify(progress);
    std::array::from_fn(|i| divide_scale(sf, i, PARTS))
}

impl ShapeGeometry {
    pub fn compute(progress: f32, bounds: Rect, style: &Style) -> Self {
        let [sf_len, sf_rot, sf_rect_h, sf_rect_x] = part_scales(progress);

        let (w, h) = bounds.w_h();
        let min_dim = w.min(h);
        let size = min_dim / style.size_factor;
        let rect_size = min_dim / style.rect_factor;
        let stroke_weight = min_dim / style.stroke_factor;

        let length = size * sf_len;
        let angle = (style.rotation_degrees * sf_rot).to_radians();
        let rect_x = rect_size / 2.0 + (w / 2.0 - rect_size).max(0.0) * sf_rect_x;
        let rect_h = rect_size * sf_rect_h;

        let center = pt2(bounds.x(), bounds.y());
        let half = |flip: f32| {
            let pivot = pt2(length, 0.0);
            let arm_end = pivot + vec2(angle.cos(), angle.sin()) * length;
            HalfGeometry {
                base: LineSegment {
                    start: transform_point(pt2(0.0, 0.0), center, flip),
                    end: transform_point(pivot, center, flip),
                },
                arm: LineSegment {
                    start: transform_point(pivot, center, flip),
                    end: transform_point(arm_end, center, flip),
                },
                rect: {
                    let rect_center = transform_point(pt2(rect_x, -rect_h / 2.0), center, flip);
                    Rect::from_x_y_w_h(rect_center.x, rect_center.y, rect_size, rect_h)
                },
            }
        };

        Self {
            halves: [half(1.0), half(-1.0)],
            stroke_weight,
        }
    }
}

// Mirror around the vertical axis, then move into surface coordinates
fn transform_point(local: Point2, center: Point2, flip: f32) -> Point2 {
    pt2(center.x + local.x * flip, center.y + local.y)
}

pub fn draw_square_rot_path(draw: &Draw, bounds: Rect, progress: f32, color: Rgb8, style: &Style) {
    let geometry = ShapeGeometry::compute(progress, bounds, style);
    let params = DrawParams {
        color,
        stroke_weight: geometry.stroke_weight,
    };
    for half in geometry.halves.iter() {
        draw_line(draw, &half.base, &params);
        draw_line(draw, &half.arm, &params);
        draw_rect(draw, &half.rect, &params);
    }
}

fn draw_line(draw: &Draw, segment: &LineSegment, params: &DrawParams) {
    if segment.length() < MIN_EXTENT {
        return;
    }
    draw.line()
        .points(segment.start, segment.end)
        .color(params.color)
        .stroke_weight(params.stroke_weight)
        .caps(LineCap::Round);
}

fn draw_rect(draw: &Draw, rect: &Rect, params: &DrawParams) {
    if rect.w() < MIN_EXTENT || rect.h() < MIN_EXTENT {
        return;
    }
    draw.rect()
        .x_y(rect.x(), rect.y())
        .w_h(rect.w(), rect.h())
        .color(params.color);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn bounds() -> Rect {
        Rect::from_w_h(580.0, 900.0)
    }

    fn close(a: Point2, b: Point2) -> bool {
        a.distance(b) < EPS
    }

    #[test]
    fn test_at_rest_shape_collapses() {
        for progress in [0.0, 1.0] {
            let geometry = ShapeGeometry::compute(progress, bounds(), &Style::default());
            for half in geometry.halves.iter() {
                assert!(half.base.length() < EPS, "base visible at {}", progress);
                assert!(half.arm.length() < EPS, "arm visible at {}", progress);
                assert!(half.rect.h() < EPS, "rect visible at {}", progress);
            }
        }
    }

    #[test]
    fn test_peak_shape() {
        // min dimension 580: size 200, rect 580 / 5.6, stroke 580 / 90
        let style = Style::default();
        let geometry = ShapeGeometry::compute(0.5, bounds(), &style);
        let right = geometry.halves[0];

        assert!((geometry.stroke_weight - 580.0 / 90.0).abs() < EPS);
        assert!(close(right.base.start, pt2(0.0, 0.0)));
        assert!(close(right.base.end, pt2(200.0, 0.0)));
        // arm swung a full quarter turn
        assert!(close(right.arm.end, pt2(200.0, 200.0)));

        let rect_size = 580.0 / 5.6;
        assert!((right.rect.w() - rect_size).abs() < EPS);
        assert!((right.rect.h() - rect_size).abs() < EPS);
        // slid all the way to the surface edge
        assert!((right.rect.right() - 290.0).abs() < EPS);
    }

    #[test]
    fn test_halves_are_mirrored() {
        let bounds = Rect::from_x_y_w_h(30.0, -10.0, 400.0, 300.0);
        let geometry = ShapeGeometry::compute(0.37, bounds, &Style::default());
        let [right, left] = geometry.halves;
        let mirror = |p: Point2| pt2(2.0 * 30.0 - p.x, p.y);

        assert!(close(mirror(right.base.end), left.base.end));
        assert!(close(mirror(right.arm.end), left.arm.end));
        assert!(close(
            mirror(pt2(right.rect.x(), right.rect.y())),
            pt2(left.rect.x(), left.rect.y())
        ));
        assert!((right.rect.h() - left.rect.h()).abs() < EPS);
    }

    #[test]
    fn test_part_scales_fill_in_order() {
        let tests = vec![
            // (progress, expected parts)
            (0.0, [0.0, 0.0, 0.0, 0.0]),
            (0.5, [1.0, 1.0, 1.0, 1.0]),
            (1.0 / 6.0, [1.0, 1.0, 0.0, 0.0]), // sin(pi / 6) = 0.5
        ];

        for (progress, expected) in tests {
            let result = part_scales(progress);
            for (got, want) in result.iter().zip(expected.iter()) {
                assert!(
                    (got - want).abs() < EPS,
                    "Failed for progress {}: {:?}",
                    progress,
                    result
                );
            }
        }
    }
}
