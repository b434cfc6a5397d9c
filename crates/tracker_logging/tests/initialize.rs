use log::LevelFilter;
use tracker_logging::{initialize, initialize_for_tests, tracker_info, LogDestination};

#[test]
fn repeated_initialization_is_harmless() {
    initialize(LogDestination::Terminal, LevelFilter::Debug);
    initialize(LogDestination::Terminal, LevelFilter::Info);
    initialize_for_tests();

    tracker_info!("logger initialized {} times", 3);
    assert!(log::max_level() >= LevelFilter::Debug);
}
