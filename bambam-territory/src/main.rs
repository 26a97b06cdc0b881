use bambam_territory::app::TerritoryApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = TerritoryApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("bambam-territory failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
