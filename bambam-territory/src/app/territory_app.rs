use super::TerritoryOperation;
use clap::Parser;

/// builds transit service territories and a travel time heatmap over a regular grid
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TerritoryApp {
    #[command(subcommand)]
    pub op: TerritoryOperation,
}
