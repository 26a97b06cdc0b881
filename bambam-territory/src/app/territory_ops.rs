use crate::{
    algorithm::{border, nearest, raster, voronoi},
    config::TerritoryConfiguration,
    model::{
        facility::Facility,
        grid::GridCell,
        travel::{NearestAssignment, TravelRecord},
        TerritoryError,
    },
    oracle::{ChunkCache, ChunkedOracleAdapter, MatrixOracle, RoutingOracle, WalkingOracle},
    output::{self, filenames},
    schedule,
};
use chrono::NaiveDateTime;
use itertools::Itertools;
use std::path::Path;

/// where travel times come from. without a matrix, straight-line walking times are used.
#[derive(Clone, Debug, Default)]
pub struct OracleSource {
    pub matrix_file: Option<String>,
    pub service_window: Option<(NaiveDateTime, NaiveDateTime)>,
}

/// reads facilities from the schedule, computes travel times from every grid cell in
/// cached chunks and reduces them to the nearest facility per cell. the concatenated
/// travel times and the nearest table are written next to the chunk cache.
pub fn travel_times(
    conf: &TerritoryConfiguration,
    gtfs_path: &str,
    source: &OracleSource,
    cache_directory: &Path,
) -> Result<Vec<NearestAssignment>, TerritoryError> {
    let facilities = schedule::read_facilities(gtfs_path, &conf.schedule.route_types)?;
    let origins: Vec<GridCell> = conf.grid.cells().collect_vec();
    log::info!(
        "sampling {} grid cells ({} columns by {} rows)",
        origins.len(),
        conf.grid.columns(),
        conf.grid.rows()
    );
    let cache = ChunkCache::new(cache_directory, conf.oracle.chunk_size)?;
    let records = match &source.matrix_file {
        Some(matrix_file) => {
            let mut oracle = MatrixOracle::from_csv(matrix_file)?;
            if let Some((start, end)) = source.service_window {
                oracle = oracle.with_service_window(start, end);
            }
            compute_chunked(&oracle, conf, &origins, &facilities, cache)?
        }
        None => {
            let oracle =
                WalkingOracle::new(conf.oracle.walking_speed, conf.oracle.max_travel_time)?;
            compute_chunked(&oracle, conf, &origins, &facilities, cache)?
        }
    };
    output::write_csv(&cache_directory.join(filenames::TIMES), &records, "writing travel times")?;
    let assignments = nearest::reduce_nearest(&records)?;
    output::write_csv(
        &cache_directory.join(filenames::NEAREST),
        &assignments,
        "writing nearest facilities",
    )?;
    Ok(assignments)
}

fn compute_chunked<O: RoutingOracle>(
    oracle: &O,
    conf: &TerritoryConfiguration,
    origins: &[GridCell],
    facilities: &[Facility],
    cache: ChunkCache,
) -> Result<Vec<TravelRecord>, TerritoryError> {
    let adapter = ChunkedOracleAdapter::new(oracle, conf.oracle.chunk_size)?.with_cache(cache);
    let records = adapter.compute(
        origins,
        facilities,
        conf.oracle.departure,
        &conf.oracle.modes,
    )?;
    Ok(records)
}

/// reads a nearest table and checks every cell against the configured grid
pub fn read_nearest(
    conf: &TerritoryConfiguration,
    nearest_file: &Path,
) -> Result<Vec<NearestAssignment>, TerritoryError> {
    let assignments: Vec<NearestAssignment> = output::read_csv(nearest_file)?;
    if let Some(outside) = assignments.iter().find(|a| !conf.grid.contains(&a.cell_id)) {
        return Err(TerritoryError::ConfigurationError(format!(
            "cell {} of {} is outside of the configured grid, was it computed with another grid?",
            outside.cell_id,
            nearest_file.to_string_lossy()
        )));
    }
    Ok(assignments)
}

pub fn borders(
    conf: &TerritoryConfiguration,
    assignments: &[NearestAssignment],
    output_file: &Path,
) -> Result<(), TerritoryError> {
    let segments = border::extract_borders(assignments, &conf.grid);
    output::write_borders(output_file, &segments)
}

/// builds and writes the territories. nothing is written when the build fails.
pub fn territories(
    conf: &TerritoryConfiguration,
    assignments: &[NearestAssignment],
    output_directory: &Path,
) -> Result<(), TerritoryError> {
    let territories = voronoi::build_territories(assignments, &conf.grid, &conf.territory)?;
    output::write_territories(output_directory, &territories, filenames::ALL_COMBINED)?;
    Ok(())
}

pub fn heatmap(
    conf: &TerritoryConfiguration,
    assignments: &[NearestAssignment],
    output_file: &Path,
) -> Result<(), TerritoryError> {
    let cmap = raster::viridis()?;
    let image = raster::render_heatmap(assignments, &conf.grid, &conf.raster, &cmap)?;
    output::write_heatmap(output_file, &image)
}

/// every stage in order, all outputs under one directory
pub fn run_all(
    conf: &TerritoryConfiguration,
    gtfs_path: &str,
    source: &OracleSource,
    cache_directory: &Path,
    output_directory: &Path,
) -> Result<(), TerritoryError> {
    let assignments = travel_times(conf, gtfs_path, source, cache_directory)?;
    std::fs::create_dir_all(output_directory)?;
    borders(conf, &assignments, &output_directory.join(filenames::BORDERS))?;
    territories(
        conf,
        &assignments,
        &output_directory.join(filenames::TERRITORY_DIRECTORY),
    )?;
    heatmap(conf, &assignments, &output_directory.join(filenames::HEATMAP))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{read_nearest, run_all, territories, OracleSource};
    use crate::config::TerritoryConfiguration;
    use crate::model::{
        facility::FacilityId,
        grid::{BoundingBox, CellId, Lattice},
        travel::NearestAssignment,
        TerritoryError,
    };
    use crate::output::{filenames, write_csv};
    use std::{fs, path::Path};

    fn write_bundle(dir: &Path) {
        let files = [
            (
                "agency.txt",
                "agency_id,agency_name,agency_url,agency_timezone\n\
                 ATM,ATM,https://www.atm.it,Europe/Rome\n",
            ),
            (
                "routes.txt",
                "route_id,agency_id,route_short_name,route_long_name,route_type\n\
                 M1,ATM,M1,Linea 1,1\n\
                 M2,ATM,M2,Linea 2,1\n",
            ),
            (
                "calendar.txt",
                "service_id,monday,tuesday,wednesday,thursday,friday,saturday,sunday,start_date,end_date\n\
                 WK,1,1,1,1,1,0,0,20250101,20251231\n",
            ),
            (
                "trips.txt",
                "route_id,service_id,trip_id\n\
                 M1,WK,T1\n\
                 M2,WK,T2\n",
            ),
            (
                "stops.txt",
                "stop_id,stop_name,stop_lat,stop_lon\n\
                 PAGANO,Pagano,45.4683,9.1607\n\
                 LORETO M1,Loreto,45.4857,9.2165\n\
                 LORETO M2,Loreto,45.4859,9.2163\n\
                 CENTRALE,Centrale,45.4846,9.2030\n",
            ),
            (
                "stop_times.txt",
                "trip_id,arrival_time,departure_time,stop_id,stop_sequence\n\
                 T1,08:00:00,08:00:00,PAGANO,1\n\
                 T1,08:10:00,08:10:00,LORETO M1,2\n\
                 T2,08:00:00,08:00:00,CENTRALE,1\n\
                 T2,08:03:00,08:03:00,LORETO M2,2\n",
            ),
        ];
        for (name, contents) in files {
            fs::write(dir.join(name), contents).expect("failed writing test GTFS file");
        }
    }

    fn small_conf() -> TerritoryConfiguration {
        let mut conf = TerritoryConfiguration::default();
        conf.grid = Lattice::new(BoundingBox::new(9.15, 9.23, 45.46, 45.49).unwrap(), 0.005).unwrap();
        conf.oracle.chunk_size = 25;
        conf.raster.width = 160;
        conf
    }

    #[test]
    fn test_run_with_walking_oracle() {
        let gtfs = tempfile::tempdir().unwrap();
        write_bundle(gtfs.path());
        let work = tempfile::tempdir().unwrap();
        let cache = work.path().join("distances_cache");
        let out = work.path().join("out");
        let conf = small_conf();
        conf.validate().unwrap();

        run_all(
            &conf,
            gtfs.path().to_str().unwrap(),
            &OracleSource::default(),
            &cache,
            &out,
        )
        .unwrap();

        assert!(cache.join(filenames::TIMES).is_file());
        assert!(cache.join(filenames::NEAREST).is_file());
        assert!(cache.join("chunk_size_25").join("0.csv").is_file());
        assert!(out.join(filenames::BORDERS).is_file());
        assert!(out.join(filenames::HEATMAP).is_file());
        let territory_dir = out.join(filenames::TERRITORY_DIRECTORY);
        assert!(territory_dir.join(filenames::ALL_COMBINED).is_file());
        // LORETO M1 (M1) is an alias of LORETO M2 (M2)
        assert!(!territory_dir.join("LORETO M1 (M1).json").exists());

        let nearest = read_nearest(&conf, &cache.join(filenames::NEAREST)).unwrap();
        assert!(!nearest.is_empty());
        assert!(nearest.len() <= conf.grid.len());
    }

    #[test]
    fn test_unknown_color_writes_nothing() {
        let work = tempfile::tempdir().unwrap();
        let conf = small_conf();
        let assignments = conf
            .grid
            .cells()
            .map(|cell| NearestAssignment {
                cell_id: cell.id,
                facility_id: FacilityId::from(if cell.id.ix < 8 {
                    "PAGANO (M1)"
                } else {
                    "SAN SIRO (M5X)"
                }),
                total_time: 10.0,
            })
            .collect::<Vec<_>>();
        let output_directory = work.path().join("territories");
        let result = territories(&conf, &assignments, &output_directory);
        assert!(matches!(
            result,
            Err(TerritoryError::UnknownLineColor { .. })
        ));
        assert!(!output_directory.exists());
    }

    #[test]
    fn test_nearest_from_another_grid() {
        let work = tempfile::tempdir().unwrap();
        let path = work.path().join("nearest.csv");
        let rows = vec![NearestAssignment {
            cell_id: CellId::new(999, 0),
            facility_id: FacilityId::from("PAGANO (M1)"),
            total_time: 3.0,
        }];
        write_csv(&path, &rows, "nearest").unwrap();
        let result = read_nearest(&small_conf(), &path);
        assert!(matches!(result, Err(TerritoryError::ConfigurationError(_))));
    }
}
