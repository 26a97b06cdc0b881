use geo::Polygon;

/// outcome of closing the Voronoi region of one point
#[derive(Clone, Debug, PartialEq)]
pub enum VoronoiRegion {
    /// closed ring, first vertex repeated at the end
    Bounded(Polygon<f64>),
    /// the region reaches the unbounded marker (the point is on the convex hull)
    Unbounded,
    /// the point takes part in no triangle
    Empty,
    /// fewer than three distinct vertices after merging coincident ones
    Degenerate,
}
