use ipnt_logger::{Logger, LoggerError};

#[test]
fn second_init_reports_subscriber_error() {
    let _logger = Logger::builder().name("ipnt-first").init().expect("first init should succeed");

    let err = Logger::builder().name("ipnt-second").init().expect_err("second init should fail");
    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
