//! Narrowphase shape-pair tests: sprite, polygon, segment, and circle
//! combinations.
//!
//! Every test runs a cheap world-space AABB rejection first, then an exact
//! test built from the primitives in [`crate::primitives`] and the
//! winding-angle containment test in [`crate::polygon`]. Results carry at
//! most two contact points; a segment crossing a concave polygon more than
//! twice still reports only the first two crossings found.
//!
//! All tests are pure functions of their inputs: no hidden state, no
//! allocation inside the pixel and edge loops, and identical inputs always
//! produce identical results.

use glam::Vec2;

use crate::collider::{Aabb, Shape};
use crate::contact::Contacts;
use crate::polygon::PolygonView;
use crate::primitives::{
    circle_circle_contact, circles_overlap, segment_circle, segment_segment, SegmentIntersection,
    EPSILON,
};
use crate::sprite::Sprite;

/// Integer pixel bounds covering an overlap rectangle: `(x0, x1, y0, y1)`
/// with the upper bounds exclusive.
#[inline]
fn pixel_bounds(overlap: &Aabb) -> (i32, i32, i32, i32) {
    (
        overlap.min.x.floor() as i32,
        overlap.max.x.ceil() as i32,
        overlap.min.y.floor() as i32,
        overlap.max.y.ceil() as i32,
    )
}

/// Opacity of the sprite pixel under a world-space point.
#[inline]
fn sprite_opaque_world(sprite: &Sprite, center: Vec2, world: Vec2) -> bool {
    let local = world - (center - sprite.half_extents());
    sprite.is_opaque_at(local.x.floor() as i32, local.y.floor() as i32)
}

/// Pixel-perfect sprite-sprite test.
///
/// Scans the overlapping pixel rectangle; the first pixel opaque on both
/// sprites is the hit and its location the contact point.
pub fn sprite_sprite(
    a: &Sprite,
    a_center: Vec2,
    b: &Sprite,
    b_center: Vec2,
) -> Option<Contacts> {
    let box_a = Aabb::from_center_half_extents(a_center, a.half_extents());
    let box_b = Aabb::from_center_half_extents(b_center, b.half_extents());
    let overlap = box_a.intersection(&box_b)?;

    let (x0, x1, y0, y1) = pixel_bounds(&overlap);
    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32, y as f32);
            if sprite_opaque_world(a, a_center, p) && sprite_opaque_world(b, b_center, p) {
                return Some(Contacts::one(p));
            }
        }
    }
    None
}

/// Sprite against a polygon view: the first sprite pixel that is both
/// opaque and inside the polygon is the hit.
pub fn sprite_polygon(
    sprite: &Sprite,
    sprite_center: Vec2,
    view: &PolygonView,
    poly_center: Vec2,
) -> Option<Contacts> {
    if view.vertices().len() < 3 {
        return None;
    }
    let sprite_box = Aabb::from_center_half_extents(sprite_center, sprite.half_extents());
    let poly_box = view.bbox().translate(poly_center);
    let overlap = sprite_box.intersection(&poly_box)?;

    let (x0, x1, y0, y1) = pixel_bounds(&overlap);
    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32, y as f32);
            if sprite_opaque_world(sprite, sprite_center, p) && view.contains(poly_center, p) {
                return Some(Contacts::one(p));
            }
        }
    }
    None
}

/// Polygon-polygon test. Intentionally asymmetric: B is tested against A,
/// which is cheaper when B is the smaller or simpler shape, so callers pass
/// the simpler polygon second.
///
/// B's vertices are tested for containment in A first, stopping as soon as
/// two are inside. Any inside vertex found stays in the contact list while
/// the remaining slots are filled by B-edge against A-edge intersections.
pub fn polygon_polygon(
    view_a: &PolygonView,
    center_a: Vec2,
    view_b: &PolygonView,
    center_b: Vec2,
) -> Option<Contacts> {
    if view_a.vertices().len() < 3 || view_b.vertices().len() < 3 {
        return None;
    }
    let box_a = view_a.bbox().translate(center_a);
    let box_b = view_b.bbox().translate(center_b);
    if !box_a.overlaps(&box_b) {
        return None;
    }

    let mut contacts = Contacts::new();
    for &v in view_b.vertices() {
        let world = center_b + v;
        if view_a.contains(center_a, world) {
            contacts.push(world);
            if contacts.is_full() {
                return Some(contacts);
            }
        }
    }

    for (bs, be) in view_b.edges() {
        for (as_, ae) in view_a.edges() {
            let hit = segment_segment(
                center_b + bs,
                center_b + be,
                center_a + as_,
                center_a + ae,
            );
            if let SegmentIntersection::Point(p) = hit {
                contacts.push(p);
                if contacts.is_full() {
                    return Some(contacts);
                }
            }
        }
    }
    (!contacts.is_empty()).then_some(contacts)
}

/// March along the segment direction one pixel at a time, from `from_t`
/// toward `to_t`, returning the first opaque sprite pixel.
fn march_for_opaque(
    sprite: &Sprite,
    sprite_center: Vec2,
    start: Vec2,
    dir: Vec2,
    from_t: f32,
    to_t: f32,
) -> Option<Vec2> {
    let step = if to_t >= from_t { 1.0 } else { -1.0 };
    let mut t = from_t;
    while (to_t - t) * step >= 0.0 {
        let p = start + dir * t;
        if sprite_opaque_world(sprite, sprite_center, p) {
            return Some(p);
        }
        t += step;
    }
    None
}

/// Segment against a sprite.
///
/// Finds where the segment enters and leaves the sprite's rectangle (border
/// crossings via the four edge tests, or an endpoint that terminates
/// inside), then marches pixel-by-pixel inward from each crossing until an
/// opaque pixel is found. Zero-length segments never collide.
pub fn segment_sprite(
    start: Vec2,
    end: Vec2,
    sprite: &Sprite,
    sprite_center: Vec2,
) -> Option<Contacts> {
    let bounds = Aabb::from_center_half_extents(sprite_center, sprite.half_extents());
    if !Aabb::from_points(&[start, end]).overlaps(&bounds) {
        return None;
    }

    let delta = end - start;
    let len = delta.length();
    if len <= EPSILON {
        return None;
    }
    let dir = delta / len;

    // Parameter range of the segment's stay inside the rectangle.
    let corners = [
        bounds.min,
        Vec2::new(bounds.max.x, bounds.min.y),
        bounds.max,
        Vec2::new(bounds.min.x, bounds.max.y),
    ];
    let mut t_min = f32::MAX;
    let mut t_max = f32::MIN;
    let mut crossed = false;
    for i in 0..4 {
        let edge = (corners[i], corners[(i + 1) % 4]);
        if let SegmentIntersection::Point(p) = segment_segment(start, end, edge.0, edge.1) {
            let t = (p - start).dot(dir);
            t_min = t_min.min(t);
            t_max = t_max.max(t);
            crossed = true;
        }
    }
    if bounds.contains(start) {
        t_min = t_min.min(0.0);
        t_max = t_max.max(0.0);
        crossed = true;
    }
    if bounds.contains(end) {
        t_min = t_min.min(len);
        t_max = t_max.max(len);
        crossed = true;
    }
    if !crossed {
        return None;
    }

    let first = march_for_opaque(sprite, sprite_center, start, dir, t_min, t_max)?;
    let mut contacts = Contacts::one(first);
    if let Some(second) = march_for_opaque(sprite, sprite_center, start, dir, t_max, t_min) {
        if second.distance_squared(first) > EPSILON * EPSILON {
            contacts.push(second);
        }
    }
    Some(contacts)
}

/// Segment against a polygon view.
///
/// An endpoint strictly inside the polygon is an immediate contact; both
/// inside returns both with no further work. Otherwise the segment is
/// tested against every polygon edge, stopping at two points. Zero-length
/// segments never collide.
pub fn segment_polygon(
    start: Vec2,
    end: Vec2,
    view: &PolygonView,
    center: Vec2,
) -> Option<Contacts> {
    if view.vertices().len() < 3 || start == end {
        return None;
    }

    let mut contacts = Contacts::new();
    let start_inside = view.contains(center, start);
    let end_inside = view.contains(center, end);
    if start_inside {
        contacts.push(start);
    }
    if end_inside {
        contacts.push(end);
    }
    if start_inside && end_inside {
        return Some(contacts);
    }

    if !Aabb::from_points(&[start, end]).overlaps(&view.bbox().translate(center)) {
        return (!contacts.is_empty()).then_some(contacts);
    }

    for (a, b) in view.edges() {
        if let SegmentIntersection::Point(p) = segment_segment(start, end, center + a, center + b)
        {
            contacts.push(p);
            if contacts.is_full() {
                break;
            }
        }
    }
    (!contacts.is_empty()).then_some(contacts)
}

/// Circle against a polygon view, accumulating up to two edge crossings.
///
/// A circle entirely inside the polygon crosses no edge and reports no
/// collision; callers relying on containment pair the circle's center with
/// the polygon instead.
pub fn circle_polygon(
    circle_center: Vec2,
    radius: f32,
    view: &PolygonView,
    poly_center: Vec2,
) -> Option<Contacts> {
    if radius <= 0.0 || view.vertices().len() < 3 {
        return None;
    }
    let circle_box = Aabb::from_center_half_extents(circle_center, Vec2::splat(radius));
    if !circle_box.overlaps(&view.bbox().translate(poly_center)) {
        return None;
    }

    let mut contacts = Contacts::new();
    for (a, b) in view.edges() {
        let crossings = segment_circle(poly_center + a, poly_center + b, circle_center, radius);
        for &p in crossings.points() {
            contacts.push(p);
            if contacts.is_full() {
                return Some(contacts);
            }
        }
    }
    (!contacts.is_empty()).then_some(contacts)
}

/// Circle against a sprite: the first opaque pixel within the radius is the
/// hit. Squared distances avoid a sqrt per pixel.
pub fn circle_sprite(
    circle_center: Vec2,
    radius: f32,
    sprite: &Sprite,
    sprite_center: Vec2,
) -> Option<Contacts> {
    if radius <= 0.0 {
        return None;
    }
    let circle_box = Aabb::from_center_half_extents(circle_center, Vec2::splat(radius));
    let sprite_box = Aabb::from_center_half_extents(sprite_center, sprite.half_extents());
    let overlap = circle_box.intersection(&sprite_box)?;

    let r2 = radius * radius;
    let (x0, x1, y0, y1) = pixel_bounds(&overlap);
    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32, y as f32);
            if p.distance_squared(circle_center) <= r2
                && sprite_opaque_world(sprite, sprite_center, p)
            {
                return Some(Contacts::one(p));
            }
        }
    }
    None
}

/// Dispatch a pair of shape instances to the matching pair test.
///
/// Operand order never changes the outcome: swapped pairs delegate to the
/// canonical ordering. Segment-segment pairs report a contact only for a
/// single-point crossing; coincident overlap has no representable point
/// and reports no collision. Zero-radius circles never collide.
pub fn detect_collision(a: &Shape, b: &Shape) -> Option<Contacts> {
    match (*a, *b) {
        (
            Shape::Sprite {
                sprite: sa,
                center: ca,
            },
            Shape::Sprite {
                sprite: sb,
                center: cb,
            },
        ) => sprite_sprite(&sa, ca, &sb, cb),

        (
            Shape::Sprite { sprite, center },
            Shape::Polygon {
                polygon,
                center: poly_center,
                direction,
            },
        ) => {
            let view = polygon.select_view(direction)?;
            sprite_polygon(&sprite, center, view, poly_center)
        }

        (
            Shape::Polygon {
                polygon: pa,
                center: ca,
                direction: da,
            },
            Shape::Polygon {
                polygon: pb,
                center: cb,
                direction: db,
            },
        ) => {
            let view_a = pa.select_view(da)?;
            let view_b = pb.select_view(db)?;
            polygon_polygon(view_a, ca, view_b, cb)
        }

        (Shape::Segment { start, end }, Shape::Sprite { sprite, center }) => {
            segment_sprite(start, end, &sprite, center)
        }

        (
            Shape::Segment { start, end },
            Shape::Polygon {
                polygon,
                center,
                direction,
            },
        ) => {
            let view = polygon.select_view(direction)?;
            segment_polygon(start, end, view, center)
        }

        (
            Shape::Segment {
                start: s1,
                end: e1,
            },
            Shape::Segment {
                start: s2,
                end: e2,
            },
        ) => match segment_segment(s1, e1, s2, e2) {
            SegmentIntersection::Point(p) => Some(Contacts::one(p)),
            _ => None,
        },

        (Shape::Segment { start, end }, Shape::Circle { center, radius }) => {
            if radius <= 0.0 {
                return None;
            }
            let contacts = segment_circle(start, end, center, radius);
            (!contacts.is_empty()).then_some(contacts)
        }

        (
            Shape::Circle { center, radius },
            Shape::Polygon {
                polygon,
                center: poly_center,
                direction,
            },
        ) => {
            let view = polygon.select_view(direction)?;
            circle_polygon(center, radius, view, poly_center)
        }

        (Shape::Circle { center, radius }, Shape::Sprite { sprite, center: sc }) => {
            circle_sprite(center, radius, &sprite, sc)
        }

        (
            Shape::Circle {
                center: c1,
                radius: r1,
            },
            Shape::Circle {
                center: c2,
                radius: r2,
            },
        ) => {
            if r1 > 0.0 && r2 > 0.0 && circles_overlap(c1, r1, c2, r2) {
                Some(Contacts::one(circle_circle_contact(c1, r1, c2, r2)))
            } else {
                None
            }
        }

        // Swapped orderings delegate to the canonical arm.
        (Shape::Polygon { .. }, Shape::Sprite { .. })
        | (Shape::Sprite { .. }, Shape::Segment { .. })
        | (Shape::Polygon { .. }, Shape::Segment { .. })
        | (Shape::Circle { .. }, Shape::Segment { .. })
        | (Shape::Polygon { .. }, Shape::Circle { .. })
        | (Shape::Sprite { .. }, Shape::Circle { .. }) => detect_collision(b, a),
    }
}
