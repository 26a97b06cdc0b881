use super::VoronoiRegion;
use delaunator::{next_halfedge, triangulate, Point as DPoint, Triangulation, EMPTY};
use geo::{Coord, LineString, Point, Polygon};
use itertools::Itertools;

/// planar Voronoi diagram, derived as the dual of a Delaunay triangulation. the
/// region of a point is the ring of circumcenters of the triangles around it.
pub struct VoronoiDiagram {
    triangulation: Triangulation,
    circumcenters: Vec<Coord<f64>>,
    /// one halfedge ending at each point, `EMPTY` for points not in any triangle
    inedges: Vec<usize>,
    merge_distance: f64,
}

impl VoronoiDiagram {
    /// builds the diagram over `points`; the point index is the region index.
    /// consecutive region vertices closer than `merge_distance` on both axes are
    /// treated as one vertex.
    pub fn new(points: &[Point<f64>], merge_distance: f64) -> VoronoiDiagram {
        let d_points = points
            .iter()
            .map(|p| DPoint { x: p.x(), y: p.y() })
            .collect_vec();
        let triangulation = triangulate(&d_points);
        let circumcenters = triangulation
            .triangles
            .chunks_exact(3)
            .map(|t| circumcenter(points[t[0]].0, points[t[1]].0, points[t[2]].0))
            .collect_vec();
        let mut inedges = vec![EMPTY; points.len()];
        for e in 0..triangulation.triangles.len() {
            let p = triangulation.triangles[next_halfedge(e)];
            // prefer a hull halfedge so the walk around a hull point starts at the gap
            if inedges[p] == EMPTY || triangulation.halfedges[e] == EMPTY {
                inedges[p] = e;
            }
        }
        log::debug!(
            "voronoi diagram over {} points with {} triangles",
            points.len(),
            circumcenters.len()
        );
        VoronoiDiagram {
            triangulation,
            circumcenters,
            inedges,
            merge_distance,
        }
    }

    pub fn len(&self) -> usize {
        self.inedges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inedges.is_empty()
    }

    /// the closed region of one input point, or the reason it has none.
    pub fn region(&self, index: usize) -> VoronoiRegion {
        let Some(start) = self.inedges.get(index).copied() else {
            return VoronoiRegion::Empty;
        };
        if start == EMPTY {
            return VoronoiRegion::Empty;
        }
        let mut vertices: Vec<Coord<f64>> = vec![];
        let mut incoming = start;
        loop {
            let vertex = self.circumcenters[incoming / 3];
            if !vertex.x.is_finite() || !vertex.y.is_finite() {
                return VoronoiRegion::Unbounded;
            }
            match vertices.last() {
                Some(last) if self.coincident(last, &vertex) => {}
                _ => vertices.push(vertex),
            }
            let outgoing = next_halfedge(incoming);
            incoming = self.triangulation.halfedges[outgoing];
            if incoming == EMPTY {
                return VoronoiRegion::Unbounded;
            }
            if incoming == start {
                break;
            }
        }
        if vertices.len() > 1 && self.coincident(&vertices[0], &vertices[vertices.len() - 1]) {
            vertices.pop();
        }
        if vertices.len() < 3 {
            return VoronoiRegion::Degenerate;
        }
        vertices.push(vertices[0]);
        VoronoiRegion::Bounded(Polygon::new(LineString::new(vertices), vec![]))
    }

    fn coincident(&self, a: &Coord<f64>, b: &Coord<f64>) -> bool {
        (a.x - b.x).abs() <= self.merge_distance && (a.y - b.y).abs() <= self.merge_distance
    }
}

/// circumcenter computed relative to `a` to limit cancellation on geographic
/// coordinates. collinear input yields non-finite values.
fn circumcenter(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> Coord<f64> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let ex = c.x - a.x;
    let ey = c.y - a.y;
    let bl = dx * dx + dy * dy;
    let cl = ex * ex + ey * ey;
    let d = 0.5 / (dx * ey - dy * ex);
    Coord {
        x: a.x + (ey * bl - dy * cl) * d,
        y: a.y + (dx * cl - ex * bl) * d,
    }
}
