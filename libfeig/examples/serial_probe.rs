#![cfg(feature = "serial")]

//! Probe a reader on a serial port: firmware info, RF on/off and one
//! inventory scan.
//!
//! Usage:
//!   cargo run -p libfeig --example serial_probe --features serial -- /dev/ttyUSB0 [38400] [standard|advanced]

use std::env;

use libfeig::prelude::*;
use libfeig::transport::SerialTransport;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let port = args.next().unwrap_or_else(|| "/dev/ttyUSB0".to_string());
    let baud = match args.next() {
        Some(b) => b
            .parse()
            .map_err(|_| Error::InvalidParameter(format!("bad baud rate: {b}")))?,
        None => 38400,
    };
    let protocol = match args.next() {
        Some(p) => p.parse::<Protocol>()?,
        None => Protocol::Standard,
    };

    let settings = ReaderSettings::default()
        .with_serial(SerialSettings::new(port, baud))
        .with_protocol(protocol);
    let reader = Reader::<SerialTransport>::serial(&settings);
    reader.open().await?;
    println!(
        "Opened {} at {} baud ({})",
        settings.serial.port, settings.serial.baud_rate, protocol
    );

    match reader.get_software_info().await {
        Ok(info) => println!(
            "Firmware {}.{:02} (dev {}), hardware 0x{:02X}, software 0x{:02X}, transponders 0x{:04X}",
            info.major(),
            info.minor(),
            info.development_revision,
            info.hardware_type,
            info.software_type,
            info.transponder_types
        ),
        Err(e) => println!("GetSoftwareVersion failed: {}", e),
    }

    reader.switch_rf(true).await?;
    match reader.inventory().await {
        Ok(tags) if tags.is_empty() => println!("No transponders in field"),
        Ok(tags) => {
            for tag in tags {
                println!(
                    "type 0x{:02X} dsfid 0x{:02X} uid {}",
                    tag.transponder_type,
                    tag.dsfid,
                    tag.uid_hex()
                );
            }
        }
        Err(e) => println!("Inventory failed: {}", e),
    }
    reader.switch_rf(false).await?;

    reader.close().await?;
    Ok(())
}
