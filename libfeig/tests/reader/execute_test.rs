#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use libfeig::test_support::{mock_reader, response_frame};
use libfeig::{CommandCode, Error, Protocol, ReaderSettings, Status, TransferOptions};
use tokio_util::sync::CancellationToken;

fn settings() -> ReaderSettings {
    common::init_logging();
    ReaderSettings::default().with_timeout(Duration::from_millis(100))
}

#[tokio::test(start_paused = true)]
async fn timeout_becomes_error() {
    let (reader, mock) = mock_reader(settings()).await;
    mock.push_silence();

    let request = reader.request(CommandCode::RESET_CPU, Vec::new());
    let err = reader
        .execute(request, &TransferOptions::default())
        .await
        .unwrap_err();
    assert!(err.is_timeout());
    assert_eq!(err.request().unwrap().command, CommandCode::RESET_CPU);
}

#[tokio::test]
async fn cancellation_becomes_error() {
    let (reader, mock) = mock_reader(settings()).await;
    let token = CancellationToken::new();
    token.cancel();

    let request = reader.request(CommandCode::RESET_CPU, Vec::new());
    let err = reader
        .execute(request, &TransferOptions::new().cancel(token))
        .await
        .unwrap_err();
    assert!(err.is_canceled());
    assert!(mock.sent().is_empty());
}

#[tokio::test]
async fn checksum_error_carries_response() {
    let (reader, mock) = mock_reader(settings()).await;
    let mut reply = common::fixtures::ok_frame(Protocol::Standard, CommandCode::RESET_CPU);
    reply[4] ^= 0x01;
    mock.push_reply(reply);

    let request = reader.request(CommandCode::RESET_CPU, Vec::new());
    match reader.execute(request, &TransferOptions::default()).await {
        Err(Error::Communication {
            response: Some(response),
            ..
        }) => assert_eq!(response.command, CommandCode::RESET_CPU),
        other => panic!("expected Communication error, got: {:?}", other),
    }
}

#[tokio::test]
async fn frame_error_carries_no_response() {
    let (reader, mock) = mock_reader(settings()).await;
    mock.push_reply(vec![0x02, 0x00, 0x00, 0x00, 0x00, 0x00]);

    let request = reader.request(CommandCode::RESET_CPU, Vec::new());
    match reader.execute(request, &TransferOptions::default()).await {
        Err(err @ Error::Communication { response: None, .. }) => {
            assert!(err.response().is_none());
            assert!(err.request().is_some());
        }
        other => panic!("expected Communication error, got: {:?}", other),
    }
}

#[tokio::test]
async fn unexpected_response_becomes_error() {
    let (reader, mock) = mock_reader(settings()).await;
    mock.push_reply(common::fixtures::ok_frame(
        Protocol::Standard,
        CommandCode::SWITCH_RF,
    ));

    let err = reader.reset_cpu().await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedResponse { .. }));
    assert_eq!(err.response().unwrap().command, CommandCode::SWITCH_RF);
}

#[tokio::test]
async fn non_ok_status_becomes_error() {
    let (reader, mock) = mock_reader(settings()).await;
    mock.push_reply(response_frame(
        Protocol::Standard,
        0x00,
        CommandCode::RESET_CPU,
        Status::LENGTH_ERROR,
        &[],
    ));

    let err = reader.reset_cpu().await.unwrap_err();
    assert_eq!(err.status(), Some(Status::LENGTH_ERROR));
    assert!(err.to_string().contains("LengthError"));
}

#[tokio::test]
async fn transfer_reports_without_raising() {
    let (reader, mock) = mock_reader(settings()).await;
    mock.push_reply(response_frame(
        Protocol::Standard,
        0x00,
        CommandCode::RESET_CPU,
        Status::LENGTH_ERROR,
        &[],
    ));

    let request = reader.request(CommandCode::RESET_CPU, Vec::new());
    let result = reader
        .transfer(request, &TransferOptions::default())
        .await
        .unwrap();
    assert!(result.is_success());
}

#[tokio::test]
async fn closed_transport_is_an_error() {
    let (reader, _mock) = mock_reader(settings()).await;
    reader.close().await.unwrap();
    assert!(!reader.is_open().await);

    let request = reader.request(CommandCode::RESET_CPU, Vec::new());
    let result = reader.execute(request, &TransferOptions::default()).await;
    assert!(matches!(result, Err(Error::NotConnected)));
}

#[tokio::test]
async fn sequential_executes_each_get_their_reply() {
    let (reader, mock) = mock_reader(settings()).await;
    libfeig::test_support::seed_replies(
        &mock,
        vec![
            common::fixtures::ok_frame(Protocol::Standard, CommandCode::RESET_RF),
            common::fixtures::ok_frame(Protocol::Standard, CommandCode::SWITCH_RF),
        ],
    );

    reader.reset_rf().await.unwrap();
    reader.switch_rf(false).await.unwrap();
    assert_eq!(mock.sent().len(), 2);
    assert_eq!(mock.remaining_replies(), 0);
}
