//! Exhausted deliveries must be reported on the diagnostic channel.

mod test_utils;

use std::time::Duration;

use logtest::Logger;

use gelfhook::{
    Endpoint, GelfHandler, GelfHandlerConfig, GelfLevel, GelfRecord, RetryPolicy, TlsOptions,
};

use test_utils::RefusingTransport;

#[test]
fn exhausted_delivery_emits_operator_warning() {
    let mut logger = Logger::start();
    let config = GelfHandlerConfig {
        endpoint: Endpoint {
            host: "10.255.0.1".into(),
            port: 2202,
        },
        token: "tok".into(),
        host: "web-1".into(),
        tls: TlsOptions::default(),
        min_level: GelfLevel::Debug,
        retry: RetryPolicy {
            connect_timeout: Duration::from_millis(10),
            backoff: Duration::from_millis(1),
            connect_attempts: 2,
            send_attempts: 2,
        },
    };
    let handler = GelfHandler::with_transport(config, Box::new(RefusingTransport));

    handler
        .fire(&GelfRecord::new(GelfLevel::Error, "unreachable"))
        .expect_err("endpoint always refuses");

    let mut saw_warning = false;
    while let Some(record) = logger.pop() {
        if record.level() == log::Level::Warn && record.args().contains("10.255.0.1:2202") {
            saw_warning = true;
        }
    }
    assert!(
        saw_warning,
        "the final delivery failure must be reported through the log facade"
    );
}
