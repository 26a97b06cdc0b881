use super::ScheduleError;
use crate::model::facility::Facility;
use gtfs_structures::{Gtfs, RouteType};
use itertools::Itertools;
use std::collections::{BTreeMap, HashSet};

/// reads a GTFS archive (zip or directory) and collects every stop served by a route of
/// one of the given route types, once per (line, stop) pair.
pub fn read_facilities(gtfs_path: &str, route_types: &[i16]) -> Result<Vec<Facility>, ScheduleError> {
    log::info!("reading GTFS schedule from {gtfs_path}");
    let gtfs = Gtfs::new(gtfs_path)?;
    let has_matching_route = gtfs
        .routes
        .values()
        .any(|r| route_types.contains(&route_type_code(&r.route_type)));
    if !has_matching_route {
        return Err(ScheduleError::NoMatchingRoutes(
            gtfs_path.to_string(),
            route_types.to_vec(),
        ));
    }
    let facilities = facilities_from_gtfs(&gtfs, route_types);
    if facilities.is_empty() {
        return Err(ScheduleError::NoFacilitiesFound(gtfs_path.to_string()));
    }
    log::info!(
        "found {} facilities on {} routes",
        facilities.len(),
        facilities.iter().map(|f| &f.line_id).unique().count()
    );
    Ok(facilities)
}

/// joins routes to trips to stop times to stops. the result is sorted by facility id.
pub fn facilities_from_gtfs(gtfs: &Gtfs, route_types: &[i16]) -> Vec<Facility> {
    let route_ids: HashSet<&str> = gtfs
        .routes
        .values()
        .filter(|r| route_types.contains(&route_type_code(&r.route_type)))
        .map(|r| r.id.as_str())
        .collect();

    let mut facilities: BTreeMap<String, Facility> = BTreeMap::new();
    let mut missing_coords: HashSet<&str> = HashSet::new();
    for trip in gtfs.trips.values() {
        if !route_ids.contains(trip.route_id.as_str()) {
            continue;
        }
        for stop_time in trip.stop_times.iter() {
            let stop = &stop_time.stop;
            let (lat, lon) = match (stop.latitude, stop.longitude) {
                (Some(lat), Some(lon)) => (lat, lon),
                _ => {
                    missing_coords.insert(stop.id.as_str());
                    continue;
                }
            };
            let facility = Facility::new(&trip.route_id, &stop.id, lon, lat);
            facilities
                .entry(facility.id.0.clone())
                .or_insert(facility);
        }
    }
    if !missing_coords.is_empty() {
        log::warn!(
            "skipped {} stops without coordinates: {}",
            missing_coords.len(),
            missing_coords.iter().sorted().join(", ")
        );
    }
    facilities.into_values().collect_vec()
}

/// GTFS `route_type` code of a parsed route type
pub fn route_type_code(route_type: &RouteType) -> i16 {
    match route_type {
        RouteType::Tramway => 0,
        RouteType::Subway => 1,
        RouteType::Rail => 2,
        RouteType::Bus => 3,
        RouteType::Ferry => 4,
        RouteType::CableCar => 5,
        RouteType::Gondola => 6,
        RouteType::Funicular => 7,
        RouteType::Coach => 200,
        RouteType::Air => 1100,
        RouteType::Taxi => 1500,
        RouteType::Other(i) => *i,
    }
}

#[cfg(test)]
mod tests {
    use super::read_facilities;
    use crate::schedule::ScheduleError;
    use itertools::Itertools;
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
                 M2,ATM,M2,Linea 2,1\n\
                 90,ATM,90,Filobus,3\n",
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
                 M1,WK,T2\n\
                 M2,WK,T3\n\
                 90,WK,T4\n",
            ),
            (
                "stops.txt",
                "stop_id,stop_name,stop_lat,stop_lon\n\
                 LORETO M1,Loreto,45.4857,9.2165\n\
                 LORETO M2,Loreto,45.4859,9.2163\n\
                 PAGANO,Pagano,45.4683,9.1607\n\
                 CENTRALE,Centrale,45.4846,9.2030\n\
                 VIALE,Viale,45.4700,9.1800\n",
            ),
            (
                "stop_times.txt",
                "trip_id,arrival_time,departure_time,stop_id,stop_sequence\n\
                 T1,08:00:00,08:00:00,PAGANO,1\n\
                 T1,08:05:00,08:05:00,LORETO M1,2\n\
                 T2,09:00:00,09:00:00,PAGANO,1\n\
                 T2,09:05:00,09:05:00,LORETO M1,2\n\
                 T3,08:00:00,08:00:00,CENTRALE,1\n\
                 T3,08:03:00,08:03:00,LORETO M2,2\n\
                 T4,08:00:00,08:00:00,VIALE,1\n\
                 T4,08:10:00,08:10:00,PAGANO,2\n",
            ),
        ];
        for (name, contents) in files {
            fs::write(dir.join(name), contents).expect("failed writing test GTFS file");
        }
    }

    #[test]
    fn test_subway_facilities_are_distinct_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write_bundle(dir.path());
        let path = dir.path().to_str().unwrap();
        let facilities = read_facilities(path, &[1]).unwrap();
        let ids = facilities.iter().map(|f| f.id.to_string()).collect_vec();
        assert_eq!(
            ids,
            vec![
                "CENTRALE (M2)",
                "LORETO M1 (M1)",
                "LORETO M2 (M2)",
                "PAGANO (M1)"
            ]
        );
        let pagano = &facilities[3];
        assert_eq!(pagano.line_id, "M1");
        assert_eq!(pagano.point.x(), 9.1607);
        assert_eq!(pagano.point.y(), 45.4683);
    }

    #[test]
    fn test_bus_filter_includes_shared_stop() {
        let dir = tempfile::tempdir().unwrap();
        write_bundle(dir.path());
        let path = dir.path().to_str().unwrap();
        let facilities = read_facilities(path, &[3]).unwrap();
        let ids = facilities.iter().map(|f| f.id.to_string()).collect_vec();
        assert_eq!(ids, vec!["PAGANO (90)", "VIALE (90)"]);
    }

    #[test]
    fn test_no_matching_route_type() {
        let dir = tempfile::tempdir().unwrap();
        write_bundle(dir.path());
        let path = dir.path().to_str().unwrap();
        let result = read_facilities(path, &[4]);
        assert!(matches!(result, Err(ScheduleError::NoMatchingRoutes(_, _))));
    }
}
