use super::{Territory, VoronoiDiagram, VoronoiRegion};
use crate::{
    config::TerritoryBuildConfiguration,
    model::{
        facility::FacilityId,
        grid::Lattice,
        travel::NearestAssignment,
        TerritoryError,
    },
};
use geo::{BoundingRect, Contains, MultiPolygon, Point, Polygon};
use indexmap::IndexMap;
use itertools::Itertools;
use kdam::{Bar, BarExt};
use rayon::prelude::*;
use std::sync::{Arc, Mutex};

/// what became of one cell's Voronoi region
enum Classification {
    /// no usable region (unbounded, empty or degenerate)
    Rejected,
    OutsideBoundingBox,
    /// the key is registered; the polygon is kept only inside the area of interest
    Registered {
        key: FacilityId,
        polygon: Option<Polygon<f64>>,
    },
}

/// turns the nearest-facility assignment into one dissolved, colored territory per
/// alias-collapsed facility.
///
/// every assigned cell contributes its Voronoi region if the region is closed, lies
/// inside the sampling box and inside the area of interest. territories are returned
/// in the order their keys first appear in the assignment. a facility whose line has
/// no color fails the whole build.
pub fn build_territories(
    assignments: &[NearestAssignment],
    lattice: &Lattice,
    config: &TerritoryBuildConfiguration,
) -> Result<Vec<Territory>, TerritoryError> {
    let area_of_interest = config.area_of_interest_polygon()?;
    let points: Vec<Point<f64>> = assignments
        .iter()
        .map(|a| lattice.center_of(&a.cell_id))
        .collect_vec();
    let diagram = VoronoiDiagram::new(&points, config.vertex_merge_tolerance * lattice.step);

    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .total(assignments.len())
            .desc("voronoi regions")
            .build()
            .map_err(TerritoryError::InternalError)?,
    ));
    let classified: Vec<Classification> = assignments
        .par_iter()
        .enumerate()
        .map(|(index, assignment)| {
            if let Ok(mut bar) = bar.clone().lock() {
                let _ = bar.update(1);
            }
            classify(index, assignment, &diagram, lattice, &area_of_interest, config)
        })
        .collect();
    eprintln!();

    let mut groups: IndexMap<FacilityId, Vec<Polygon<f64>>> = IndexMap::new();
    let (mut n_rejected, mut n_outside_bbox, mut n_outside_aoi) = (0, 0, 0);
    for classification in classified.into_iter() {
        match classification {
            Classification::Rejected => n_rejected += 1,
            Classification::OutsideBoundingBox => n_outside_bbox += 1,
            Classification::Registered { key, polygon } => {
                let polygons = groups.entry(key).or_default();
                match polygon {
                    Some(p) => polygons.push(p),
                    None => n_outside_aoi += 1,
                }
            }
        }
    }
    log::info!(
        "{} regions kept for {} territories; discarded {} without a closed region, {} outside the grid extent, {} outside the area of interest",
        assignments.len() - n_rejected - n_outside_bbox - n_outside_aoi,
        groups.len(),
        n_rejected,
        n_outside_bbox,
        n_outside_aoi
    );

    // colors are resolved up front so an unknown line fails before any dissolve or write
    let colored = groups
        .into_iter()
        .map(|(key, polygons)| {
            let color = config.line_colors.color_for(&key)?.to_string();
            Ok((key, polygons, color))
        })
        .collect::<Result<Vec<_>, TerritoryError>>()?;

    let territories = colored
        .into_par_iter()
        .map(|(key, polygons, color)| {
            let dissolved: MultiPolygon<f64> = geo::unary_union(&polygons);
            if dissolved.0.is_empty() {
                log::warn!("territory '{key}' has no region inside the area of interest");
            }
            Territory::new(key, dissolved, color)
        })
        .collect::<Vec<_>>();
    Ok(territories)
}

fn classify(
    index: usize,
    assignment: &NearestAssignment,
    diagram: &VoronoiDiagram,
    lattice: &Lattice,
    area_of_interest: &Polygon<f64>,
    config: &TerritoryBuildConfiguration,
) -> Classification {
    let polygon = match diagram.region(index) {
        VoronoiRegion::Bounded(polygon) => polygon,
        other => {
            log::debug!("cell {} has no closed region: {other:?}", assignment.cell_id);
            return Classification::Rejected;
        }
    };
    let inside_extent = polygon
        .bounding_rect()
        .map(|rect| lattice.extent.contains_rect(&rect))
        .unwrap_or(false);
    if !inside_extent {
        return Classification::OutsideBoundingBox;
    }
    let key = config.aliases.collapse(&assignment.facility_id).clone();
    let polygon = if area_of_interest.contains(&polygon) {
        Some(polygon)
    } else {
        None
    };
    Classification::Registered { key, polygon }
}
