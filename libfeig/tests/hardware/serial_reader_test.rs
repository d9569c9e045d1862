#![cfg(feature = "serial")]

#[path = "common.rs"]
mod common;

use serial_test::serial;

// These tests require a Feig reader on the port named by FEIG_PORT. They
// are marked `#[ignore]` so CI does not attempt to run them. Run manually
// with:
//
// FEIG_PORT=/dev/ttyUSB0 cargo test -p libfeig --test hardware --features serial -- --ignored

#[tokio::test]
#[ignore]
#[serial]
async fn software_info_from_reader() -> anyhow::Result<()> {
    let Some(reader) = common::open_reader().await? else {
        return Ok(());
    };
    let info = reader.get_software_info().await?;
    println!("firmware {}.{:02}", info.major(), info.minor());
    reader.close().await?;
    Ok(())
}

#[tokio::test]
#[ignore]
#[serial]
async fn rf_field_and_inventory() -> anyhow::Result<()> {
    let Some(reader) = common::open_reader().await? else {
        return Ok(());
    };
    reader.switch_rf(true).await?;
    let tags = reader.inventory().await?;
    println!("{} transponder(s) in field", tags.len());
    reader.switch_rf(false).await?;
    reader.close().await?;
    Ok(())
}
