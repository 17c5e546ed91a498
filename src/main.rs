use motif_splice::config::{init_logging, ProgConfig};
use motif_splice::handling::GracefulResult;
use motif_splice::pipeline;

fn main() {
    let cfg = ProgConfig::from_cli().unwrap_formatful("While reading configuration");
    init_logging(cfg.verbosity);
    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        cfg.mode
    );

    let stats = pipeline::run(&cfg).unwrap_graceful();
    if stats.malformed_dropped > 0 {
        log::warn!("{} malformed read records were dropped", stats.malformed_dropped);
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
}
