#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::time::Duration;

use libfeig::transport::MockTransport;
use libfeig::{CommandCode, Protocol, Transceiver, TransferResult};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

async fn opened(mock: &MockTransport) -> Arc<Transceiver<MockTransport>> {
    common::init_logging();
    let t = Arc::new(Transceiver::new(mock.clone()));
    t.open().await.unwrap();
    t
}

#[tokio::test(start_paused = true)]
async fn silent_transport_times_out_on_deadline() {
    let mock = MockTransport::new();
    let t = opened(&mock).await;
    mock.push_silence();

    let start = Instant::now();
    let result = t
        .transfer(
            common::fixtures::reset_cpu_request(),
            Protocol::Standard,
            Duration::from_millis(100),
            &CancellationToken::new(),
        )
        .await
        .unwrap();
    let elapsed = start.elapsed();

    assert!(matches!(result, TransferResult::Timeout { .. }));
    assert_eq!(result.request().command, CommandCode::RESET_CPU);
    assert!(elapsed >= Duration::from_millis(100));
    assert!(elapsed < Duration::from_millis(150));

    // Resolved and disarmed: later bytes change nothing.
    assert!(!t.is_armed());
    mock.inject(&common::fixtures::ok_frame(Protocol::Standard, CommandCode::RESET_CPU));
    assert!(!t.is_armed());
}

#[tokio::test(start_paused = true)]
async fn cancellation_before_data_wins() {
    let mock = MockTransport::new();
    let t = opened(&mock).await;
    mock.push_silence();
    let cancel = CancellationToken::new();

    let task = {
        let t = Arc::clone(&t);
        let cancel = cancel.clone();
        tokio::spawn(async move {
            t.transfer(
                common::fixtures::reset_cpu_request(),
                Protocol::Standard,
                Duration::from_secs(5),
                &cancel,
            )
            .await
        })
    };

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(t.is_armed());
    cancel.cancel();

    let result = task.await.unwrap().unwrap();
    assert!(matches!(result, TransferResult::Canceled { .. }));
    assert_eq!(mock.sent().len(), 1);
    assert!(!t.is_armed());
}

#[tokio::test]
async fn already_canceled_token_never_sends() {
    let mock = MockTransport::new();
    let t = opened(&mock).await;
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = t
        .transfer(
            common::fixtures::reset_cpu_request(),
            Protocol::Advanced,
            Duration::from_secs(1),
            &cancel,
        )
        .await
        .unwrap();
    assert!(matches!(result, TransferResult::Canceled { .. }));
    assert!(mock.sent().is_empty());
}

#[tokio::test]
async fn reply_split_across_two_chunks_is_reassembled() {
    let mock = MockTransport::new();
    let t = opened(&mock).await;
    let frame = common::fixtures::software_version_standard();
    mock.push_reply_chunked(frame.clone(), 7);

    let request = libfeig::Request::new(0xFF, CommandCode::GET_SOFTWARE_VERSION, Vec::new());
    let result = t
        .transfer(
            request,
            Protocol::Standard,
            Duration::from_secs(1),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    match result {
        TransferResult::Success { response, .. } => {
            assert_eq!(response.data, common::fixtures::software_version_data());
            assert_eq!(response.frame_length, frame.len());
        }
        other => panic!("expected Success, got: {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn delayed_chunks_arrive_before_deadline() {
    let mock = MockTransport::new();
    let t = opened(&mock).await;
    let frame = common::fixtures::software_version_advanced();
    let (head, tail) = frame.split_at(4);
    mock.push_reply_delayed(vec![head.to_vec(), tail.to_vec()], Duration::from_millis(20));

    let request = libfeig::Request::new(0xFF, CommandCode::GET_SOFTWARE_VERSION, Vec::new());
    let result = t
        .transfer(
            request,
            Protocol::Advanced,
            Duration::from_millis(100),
            &CancellationToken::new(),
        )
        .await
        .unwrap();
    assert!(result.is_success());
}

#[tokio::test(start_paused = true)]
async fn deadline_beats_slow_reply() {
    let mock = MockTransport::new();
    let t = opened(&mock).await;
    let frame = common::fixtures::ok_frame(Protocol::Standard, CommandCode::RESET_CPU);
    mock.push_reply_delayed(vec![frame], Duration::from_millis(200));

    let result = t
        .transfer(
            common::fixtures::reset_cpu_request(),
            Protocol::Standard,
            Duration::from_millis(100),
            &CancellationToken::new(),
        )
        .await
        .unwrap();
    assert!(matches!(result, TransferResult::Timeout { .. }));

    // Let the late reply land while idle.
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(!t.is_armed());
}
