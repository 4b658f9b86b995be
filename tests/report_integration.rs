//! Integration tests for the point report built from the shipped config

use serial_test::serial;
use vec4kit::config::AppConfig;
use vec4kit::report::build_report;
use vec4kit::Vector4;

#[test]
#[serial]
fn test_report_from_default_config() {
    let config = AppConfig::load().unwrap();
    let report = build_report(&config.report, config.math.epsilon);

    assert_eq!(report.skipped, 0);
    assert_eq!(
        report.points,
        vec![
            Vector4::new(1.0, 2.0, 3.0, 1.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
            Vector4::new(3.0, 0.0, 4.0, 1.0),
        ]
    );
    assert_eq!(report.segments.len(), 2);
    assert_eq!(report.segments[1].length, 5.0);
    assert!(report.segments.iter().all(|s| s.samples_on_segment));
    assert!(report.segments.iter().all(|s| s.samples.len() == 5));
    assert_eq!(report.turn_angles.len(), 1);
}
