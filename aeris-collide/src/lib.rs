#![doc = r#"aeris-collide: boundary-intersection collision test and proximity risk.

- [`detect_collision`]: samples each ellipse at [`BOUNDARY_SAMPLES`] points and
  reports whether the two closed polygon outlines intersect edge-to-edge.
  Containment without a boundary crossing is NOT a collision; that boundary-only
  semantics is intentional and callers must not rely on area overlap.
- [`risk_level`]: a continuous [0,1] center-proximity score, independent of the
  boolean result; it can be high while `detect_collision` is false.
- [`CollisionReport`] / [`pairwise_reports`]: the per-pair view handed to the
  presentation layer, with the risk also available as a rounded 0–100 percent.
"#]

use aeris_core::Scalar;
use aeris_geom::Ellipse;

/// Boundary resolution used by the collision test.
pub const BOUNDARY_SAMPLES: usize = 200;

/// True iff the two sampled boundary outlines share at least one point.
pub fn detect_collision(e1: &Ellipse, e2: &Ellipse) -> bool {
    let outline1 = outline(e1);
    let outline2 = outline(e2);
    boundaries_intersect(&outline1, &outline2)
}

/// `clamp(1 − distance/safeRadius, 0, 1)` with
/// `safeRadius = 0.5·(a1 + b1 + a2 + b2)`.
pub fn risk_level(e1: &Ellipse, e2: &Ellipse) -> Scalar {
    let dx = Scalar::from(e1.h() - e2.h());
    let dy = Scalar::from(e1.k() - e2.k());
    let distance = dx.hypot(dy);
    let safe_radius = 0.5 * Scalar::from(e1.a() + e1.b() + e2.a() + e2.b());
    (1.0 - distance / safe_radius).clamp(0.0, 1.0)
}

/// Collision state of one index pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionReport {
    pub first: usize,
    pub second: usize,
    pub collides: bool,
    pub risk: Scalar,
}

impl CollisionReport {
    pub fn new(first: usize, second: usize, e1: &Ellipse, e2: &Ellipse) -> Self {
        Self {
            first,
            second,
            collides: detect_collision(e1, e2),
            risk: risk_level(e1, e2),
        }
    }

    /// Risk scaled to an integer-rounded percentage.
    #[inline]
    pub fn risk_percent(&self) -> u32 {
        (self.risk * 100.0).round() as u32
    }
}

/// Reports for every index pair (i, j) with i < j, in ascending order.
pub fn pairwise_reports(ellipses: &[Ellipse]) -> Vec<CollisionReport> {
    let mut reports = Vec::new();
    for i in 0..ellipses.len() {
        for j in (i + 1)..ellipses.len() {
            reports.push(CollisionReport::new(i, j, &ellipses[i], &ellipses[j]));
        }
    }
    reports
}

fn outline(e: &Ellipse) -> Vec<(Scalar, Scalar)> {
    e.boundary(BOUNDARY_SAMPLES, 0.0).map(|p| (p.x, p.y)).collect()
}

/// Edge-to-edge intersection of two closed polylines. The sampled outlines
/// already repeat their first vertex at the end, so consecutive windows cover
/// the full boundary.
fn boundaries_intersect(p: &[(Scalar, Scalar)], q: &[(Scalar, Scalar)]) -> bool {
    if bounding_boxes_disjoint(p, q) {
        return false;
    }
    for s1 in p.windows(2) {
        for s2 in q.windows(2) {
            if segments_intersect(s1[0], s1[1], s2[0], s2[1]) {
                return true;
            }
        }
    }
    false
}

fn bounding_boxes_disjoint(p: &[(Scalar, Scalar)], q: &[(Scalar, Scalar)]) -> bool {
    let bbox = |pts: &[(Scalar, Scalar)]| {
        pts.iter().fold(
            (Scalar::INFINITY, Scalar::NEG_INFINITY, Scalar::INFINITY, Scalar::NEG_INFINITY),
            |(xmin, xmax, ymin, ymax), &(x, y)| {
                (xmin.min(x), xmax.max(x), ymin.min(y), ymax.max(y))
            },
        )
    };
    let (pxmin, pxmax, pymin, pymax) = bbox(p);
    let (qxmin, qxmax, qymin, qymax) = bbox(q);
    pxmax < qxmin || qxmax < pxmin || pymax < qymin || qymax < pymin
}

type Point = (Scalar, Scalar);

#[inline]
fn cross(o: Point, a: Point, b: Point) -> Scalar {
    (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
}

/// `r` is collinear with segment `pq`; true when it also lies within its bounds.
#[inline]
fn on_segment(p: Point, q: Point, r: Point) -> bool {
    r.0 >= p.0.min(q.0) && r.0 <= p.0.max(q.0) && r.1 >= p.1.min(q.1) && r.1 <= p.1.max(q.1)
}

/// Proper and degenerate (collinear/endpoint-touching) segment intersection.
fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let d1 = cross(q1, q2, p1);
    let d2 = cross(q1, q2, p2);
    let d3 = cross(p1, p2, q1);
    let d4 = cross(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(q1, q2, p1))
        || (d2 == 0.0 && on_segment(q1, q2, p2))
        || (d3 == 0.0 && on_segment(p1, p2, q1))
        || (d4 == 0.0 && on_segment(p1, p2, q2))
}
