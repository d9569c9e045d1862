#[path = "../common/mod.rs"]
mod common;

use libfeig::test_support::{mock_reader, response_frame};
use libfeig::transport::MockTransport;
use libfeig::{
    CommandCode, ConfigAddress, ConfigBlock, ConfigLocation, Error, Protocol, ReaderBuilder,
    ReaderSettings, Status,
};

#[tokio::test]
async fn software_info_over_advanced_protocol() {
    common::init_logging();
    let settings = ReaderSettings::default().with_protocol(Protocol::Advanced);
    let (reader, mock) = mock_reader(settings).await;
    mock.push_reply(common::fixtures::software_version_advanced());

    let info = reader.get_software_info().await.unwrap();
    assert_eq!(info.major(), 3);
    assert_eq!(info.minor(), 3);
    assert_eq!(info.hardware_type, 0x44);
    assert_eq!(info.software_type, 0x53);
    assert_eq!(info.transponder_types, 0x0D30);
    assert_eq!(mock.sent()[0], hex::decode("020007ff656e61").unwrap());
}

#[tokio::test]
async fn read_configuration_returns_block() {
    let (reader, mock) = mock_reader(ReaderSettings::default()).await;
    let bytes = common::fixtures::config_block_bytes();
    mock.push_reply(response_frame(
        Protocol::Standard,
        0x00,
        CommandCode::READ_CONFIGURATION,
        Status::OK,
        &bytes,
    ));

    let address = ConfigAddress::new(3, ConfigLocation::Ram).unwrap();
    let block = reader.read_configuration(address).await.unwrap();
    assert_eq!(block.as_bytes(), &bytes);
    assert_eq!(mock.sent()[0], hex::decode("06ff80031f30").unwrap());
}

#[tokio::test]
async fn short_configuration_data_is_rejected() {
    let (reader, mock) = mock_reader(ReaderSettings::default()).await;
    mock.push_reply(response_frame(
        Protocol::Standard,
        0x00,
        CommandCode::READ_CONFIGURATION,
        Status::OK,
        &[0x01, 0x02],
    ));

    let address = ConfigAddress::new(0, ConfigLocation::Eeprom).unwrap();
    assert!(matches!(
        reader.read_configuration(address).await,
        Err(Error::InvalidLength { .. })
    ));
}

#[tokio::test]
async fn write_save_and_default_configuration() {
    let (reader, mock) = mock_reader(ReaderSettings::default().with_address(0x01)).await;
    libfeig::test_support::seed_replies(
        &mock,
        vec![
            common::fixtures::ok_frame(Protocol::Standard, CommandCode::WRITE_CONFIGURATION),
            common::fixtures::ok_frame(Protocol::Standard, CommandCode::SAVE_CONFIGURATION),
            common::fixtures::ok_frame(Protocol::Standard, CommandCode::SET_DEFAULT_CONFIGURATION),
        ],
    );

    let address = ConfigAddress::new(2, ConfigLocation::Ram).unwrap();
    let block = ConfigBlock::from_bytes(common::fixtures::config_block_bytes());
    reader.write_configuration(address, &block).await.unwrap();
    reader.save_configuration(address, true).await.unwrap();
    reader.set_default_configuration(address, false).await.unwrap();

    let sent = mock.sent();
    assert_eq!(sent.len(), 3);
    // [len][addr][cmd][cfg-adr]...
    assert_eq!(&sent[0][1..4], &[0x01, 0x81, 0x02]);
    assert_eq!(sent[0].len(), 20);
    assert_eq!(&sent[1][1..4], &[0x01, 0x82, 0x42]);
    assert_eq!(&sent[2][1..4], &[0x01, 0x83, 0x02]);
}

#[tokio::test]
async fn inventory_lists_transponders() {
    let (reader, mock) = mock_reader(ReaderSettings::default()).await;
    mock.push_reply(response_frame(
        Protocol::Standard,
        0x00,
        CommandCode::ISO_HOST_COMMAND,
        Status::OK,
        &common::fixtures::inventory_data_one(),
    ));

    let tags = reader.inventory().await.unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].transponder_type, 0x03);
    assert_eq!(tags[0].uid_hex(), "e004010012345678");
    assert_eq!(&mock.sent()[0][2..5], &[0xB0, 0x01, 0x00]);
}

#[tokio::test]
async fn inventory_with_no_transponder_is_empty() {
    let (reader, mock) = mock_reader(ReaderSettings::default()).await;
    mock.push_reply(response_frame(
        Protocol::Standard,
        0x00,
        CommandCode::ISO_HOST_COMMAND,
        Status::NO_TRANSPONDER,
        &[],
    ));
    assert!(reader.inventory().await.unwrap().is_empty());
}

#[tokio::test]
async fn inventory_other_status_is_error() {
    let (reader, mock) = mock_reader(ReaderSettings::default()).await;
    mock.push_reply(response_frame(
        Protocol::Standard,
        0x00,
        CommandCode::ISO_HOST_COMMAND,
        Status::RF_COMMUNICATION_ERROR,
        &[],
    ));
    let err = reader.inventory().await.unwrap_err();
    assert_eq!(err.status(), Some(Status::RF_COMMUNICATION_ERROR));
}

#[tokio::test]
async fn builder_reader_opens_and_runs() {
    let mock = MockTransport::new();
    let reader = ReaderBuilder::new()
        .settings(ReaderSettings::default())
        .transport(mock.clone())
        .build()
        .unwrap();
    assert!(!reader.is_open().await);
    reader.open().await.unwrap();
    assert!(reader.is_open().await);

    mock.push_reply(common::fixtures::ok_frame(Protocol::Standard, CommandCode::RESET_CPU));
    reader.reset_cpu().await.unwrap();
}
