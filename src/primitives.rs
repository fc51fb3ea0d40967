//! Geometric primitives: segment/segment, segment/circle, and circle/circle
//! tests. Pure math, no shape abstraction.

use std::f32::consts::PI;

use glam::Vec2;

use crate::contact::Contacts;

/// Tolerance absorbing accumulated floating-point error, notably in the
/// winding-angle sum and the degenerate-length guards.
pub(crate) const EPSILON: f32 = 1e-6;

/// Classification of a segment-segment intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The finite segments do not touch.
    None,
    /// The segments cross at a single point.
    Point(Vec2),
    /// The supporting lines are parallel and distinct.
    Parallel,
    /// The supporting lines coincide.
    Coincident,
}

/// Intersect two finite segments using the 2x2 determinant form.
///
/// A zero denominator means the supporting lines never cross: coincident
/// when either numerator also vanishes, parallel otherwise. Both parameters
/// must land in `[0, 1]` for the finite segments to meet.
pub fn segment_segment(s1: Vec2, e1: Vec2, s2: Vec2, e2: Vec2) -> SegmentIntersection {
    let d1 = e1 - s1;
    let d2 = e2 - s2;

    let denom = d2.y * d1.x - d2.x * d1.y;
    let ua_num = d2.x * (s1.y - s2.y) - d2.y * (s1.x - s2.x);
    let ub_num = d1.x * (s1.y - s2.y) - d1.y * (s1.x - s2.x);

    if denom == 0.0 {
        if ua_num == 0.0 || ub_num == 0.0 {
            return SegmentIntersection::Coincident;
        }
        return SegmentIntersection::Parallel;
    }

    let ua = ua_num / denom;
    let ub = ub_num / denom;
    if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
        SegmentIntersection::Point(s1 + ua * d1)
    } else {
        SegmentIntersection::None
    }
}

/// Intersect a finite segment with a circle.
///
/// Solves `|p1 + t * (p2 - p1) - center|^2 = r^2` as a quadratic in the
/// segment parameter `t`; roots outside `[0, 1]` fall off the finite
/// segment, so the result holds 0, 1, or 2 points depending on the data.
/// Working in the segment parameter keeps the acceptance test exact under
/// translation, so circles far from the origin report the same crossing
/// count as circles at the origin. Zero-length segments and non-positive
/// radii never intersect.
pub fn segment_circle(p1: Vec2, p2: Vec2, center: Vec2, radius: f32) -> Contacts {
    let mut contacts = Contacts::new();
    if radius <= 0.0 || p1 == p2 {
        return contacts;
    }

    let d = p2 - p1;
    let f = p1 - center;
    let qa = d.dot(d);
    let qb = 2.0 * f.dot(d);
    let qc = f.dot(f) - radius * radius;

    let disc = qb * qb - 4.0 * qa * qc;
    if disc < 0.0 {
        return contacts;
    }

    if disc == 0.0 {
        // Tangent line: a single candidate, kept only if the segment spans it.
        let t = -qb / (2.0 * qa);
        if (0.0..=1.0).contains(&t) {
            contacts.push(p1 + t * d);
        }
    } else {
        let sq = disc.sqrt();
        for t in [(-qb - sq) / (2.0 * qa), (-qb + sq) / (2.0 * qa)] {
            if (0.0..=1.0).contains(&t) {
                contacts.push(p1 + t * d);
            }
        }
    }
    contacts
}

/// Squared-distance overlap test between two circles.
#[inline]
pub fn circles_overlap(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> bool {
    let sum = r1 + r2;
    c1.distance_squared(c2) <= sum * sum
}

/// Approximate contact point for two overlapping circles: the point on the
/// center line split by the radius ratio.
///
/// This is not a true lens-boundary point. Callers needing exact lens
/// geometry use [`circle_overlap_area`] or the per-edge segment routines.
#[inline]
pub fn circle_circle_contact(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> Vec2 {
    let sum = r1 + r2;
    if sum <= 0.0 {
        return (c1 + c2) * 0.5;
    }
    c1 + (c2 - c1) * (r1 / sum)
}

/// Area of the lens formed by two overlapping circles.
///
/// Zero when disjoint; the full area of the smaller circle when one
/// contains the other; otherwise the sum of the two circular segments
/// `r^2/2 (theta - sin theta)` with the half-angles from the cosine rule.
pub fn circle_overlap_area(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> f32 {
    let d = c1.distance(c2);
    if d >= r1 + r2 {
        return 0.0;
    }
    if d <= (r1 - r2).abs() {
        let r = r1.min(r2);
        return PI * r * r;
    }

    let alpha = 2.0 * ((d * d + r1 * r1 - r2 * r2) / (2.0 * d * r1)).clamp(-1.0, 1.0).acos();
    let beta = 2.0 * ((d * d + r2 * r2 - r1 * r1) / (2.0 * d * r2)).clamp(-1.0, 1.0).acos();
    0.5 * r1 * r1 * (alpha - alpha.sin()) + 0.5 * r2 * r2 * (beta - beta.sin())
}
