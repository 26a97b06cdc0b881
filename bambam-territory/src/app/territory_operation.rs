use super::territory_ops::{self, OracleSource};
use crate::{
    config::TerritoryConfiguration,
    model::TerritoryError,
    output::filenames,
};
use chrono::NaiveDateTime;
use clap::{value_parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TerritoryOperation {
    /// compute travel times from every grid cell to every facility and reduce them to
    /// the nearest facility per cell
    TravelTimes {
        #[arg(long, help = "path to .toml or .json file with bambam-territory parameters")]
        config: Option<String>,
        #[arg(long, help = "GTFS archive (zip or directory) providing the facilities")]
        gtfs: String,
        #[command(flatten)]
        oracle: OracleArguments,
        #[arg(long, default_value_t = String::from("distances_cache"))]
        cache_directory: String,
    },
    /// write the lines between neighbouring cells served by different facilities
    Borders {
        #[arg(long)]
        config: Option<String>,
        #[arg(long, default_value_t = format!("distances_cache/{}", filenames::NEAREST))]
        nearest_file: String,
        #[arg(long, default_value_t = String::from(filenames::BORDERS))]
        output_file: String,
    },
    /// build one dissolved Voronoi territory per facility
    Territories {
        #[arg(long)]
        config: Option<String>,
        #[arg(long, default_value_t = format!("distances_cache/{}", filenames::NEAREST))]
        nearest_file: String,
        #[arg(long, default_value_t = String::from(filenames::TERRITORY_DIRECTORY))]
        output_directory: String,
    },
    /// render the nearest facility travel time of every cell to a PNG
    Heatmap {
        #[arg(long)]
        config: Option<String>,
        #[arg(long, default_value_t = format!("distances_cache/{}", filenames::NEAREST))]
        nearest_file: String,
        #[arg(long, default_value_t = String::from(filenames::HEATMAP))]
        output_file: String,
    },
    /// all of the above, in order
    Run {
        #[arg(long)]
        config: Option<String>,
        #[arg(long)]
        gtfs: String,
        #[command(flatten)]
        oracle: OracleArguments,
        #[arg(long, default_value_t = String::from("distances_cache"))]
        cache_directory: String,
        #[arg(long, default_value_t = String::from("."))]
        output_directory: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, clap::Args)]
pub struct OracleArguments {
    /// CSV of precomputed travel times (from_id,to_id,travel_time,wait_time). when
    /// omitted, straight-line walking times are computed.
    #[arg(long)]
    pub matrix_file: Option<String>,
    /// first departure covered by the matrix
    #[arg(long, value_parser = value_parser!(NaiveDateTime), requires = "service_end")]
    pub service_start: Option<NaiveDateTime>,
    /// last departure covered by the matrix
    #[arg(long, value_parser = value_parser!(NaiveDateTime), requires = "service_start")]
    pub service_end: Option<NaiveDateTime>,
}

impl From<&OracleArguments> for OracleSource {
    fn from(value: &OracleArguments) -> Self {
        OracleSource {
            matrix_file: value.matrix_file.clone(),
            service_window: value.service_start.zip(value.service_end),
        }
    }
}

impl TerritoryOperation {
    pub fn run(&self) -> Result<(), TerritoryError> {
        match self {
            TerritoryOperation::TravelTimes {
                config,
                gtfs,
                oracle,
                cache_directory,
            } => {
                let conf = TerritoryConfiguration::from_optional_file(config.as_ref())?;
                territory_ops::travel_times(
                    &conf,
                    gtfs,
                    &oracle.into(),
                    Path::new(cache_directory),
                )?;
                Ok(())
            }
            TerritoryOperation::Borders {
                config,
                nearest_file,
                output_file,
            } => {
                let conf = TerritoryConfiguration::from_optional_file(config.as_ref())?;
                let assignments = territory_ops::read_nearest(&conf, Path::new(nearest_file))?;
                territory_ops::borders(&conf, &assignments, Path::new(output_file))
            }
            TerritoryOperation::Territories {
                config,
                nearest_file,
                output_directory,
            } => {
                let conf = TerritoryConfiguration::from_optional_file(config.as_ref())?;
                let assignments = territory_ops::read_nearest(&conf, Path::new(nearest_file))?;
                territory_ops::territories(&conf, &assignments, Path::new(output_directory))
            }
            TerritoryOperation::Heatmap {
                config,
                nearest_file,
                output_file,
            } => {
                let conf = TerritoryConfiguration::from_optional_file(config.as_ref())?;
                let assignments = territory_ops::read_nearest(&conf, Path::new(nearest_file))?;
                territory_ops::heatmap(&conf, &assignments, Path::new(output_file))
            }
            TerritoryOperation::Run {
                config,
                gtfs,
                oracle,
                cache_directory,
                output_directory,
            } => {
                let conf = TerritoryConfiguration::from_optional_file(config.as_ref())?;
                territory_ops::run_all(
                    &conf,
                    gtfs,
                    &oracle.into(),
                    Path::new(cache_directory),
                    Path::new(output_directory),
                )?;
                eprintln!("finished.");
                Ok(())
            }
        }
    }
}
