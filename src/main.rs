//! vec4kit - homogeneous point report
//!
//! Loads a list of homogeneous points from configuration, converts them to
//! Cartesian form and logs the path they trace.

use vec4kit::config::AppConfig;
use vec4kit::report::build_report;

fn main() {
    let config = AppConfig::load();

    // RUST_LOG wins over the configured level
    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting vec4kit");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let report = build_report(&config.report, config.math.epsilon);

    log::info!(
        "Homogenized {} points ({} skipped at infinity)",
        report.points.len(),
        report.skipped
    );
    for (i, p) in report.points.iter().enumerate() {
        log::info!("  [{}] {}", i, p);
    }
    for (i, seg) in report.segments.iter().enumerate() {
        log::info!(
            "Segment {}: {} -> {} length {:.4}, {} samples{}",
            i,
            seg.start,
            seg.end,
            seg.length,
            seg.samples.len(),
            if seg.samples_on_segment { "" } else { " (off segment!)" }
        );
        for s in &seg.samples {
            log::debug!("    {}", s);
        }
    }
    for (at, angle) in &report.turn_angles {
        log::info!("Turn at point {}: {:.2} degrees", at, angle.to_degrees());
    }
    if let Some(centroid) = report.centroid {
        log::info!("Centroid {}", centroid);
    }
    log::info!("Total path length {:.4}", report.total_length());
}
