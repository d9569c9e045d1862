// libfeig/src/protocol/crc.rs

//! Parameterized CRC calculator.
//!
//! Any CRC up to 32 bits can be described by [`CrcParameters`]. Orders of 8
//! and above use a 256-entry lookup table built once in [`Crc::new`]; smaller
//! orders fall back to bit-by-bit processing.
//!
//! The reader protocol uses CRC-16/MCRF4XX, available through [`crc16`].

use std::sync::LazyLock;

/// How the `init` value of [`CrcParameters`] is to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `init` is the register value before the first data bit.
    Direct,
    /// `init` is the value an augmented (shift-register) implementation
    /// starts with; it is converted to its direct equivalent.
    Augmented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrcParameters {
    /// Width of the CRC in bits, 1..=32.
    pub order: u32,
    /// Generator polynomial without the leading term.
    pub polynomial: u32,
    pub init_mode: InitMode,
    pub init: u32,
    pub final_xor: u32,
    /// Reflect every input byte before processing.
    pub reflect_input: bool,
    /// Reflect the register before the final XOR.
    pub reflect_output: bool,
}

impl CrcParameters {
    /// CRC-16/MCRF4XX as used by the reader host protocol.
    pub const FEIG: Self = Self {
        order: 16,
        polynomial: 0x1021,
        init_mode: InitMode::Direct,
        init: 0xFFFF,
        final_xor: 0x0000,
        reflect_input: true,
        reflect_output: true,
    };
}

/// A configured CRC with its precomputed lookup table.
///
/// Read-only after construction, so one instance can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct Crc {
    params: CrcParameters,
    mask: u32,
    high_bit: u32,
    init_direct: u32,
    table: Option<Box<[u32; 256]>>,
}

impl Crc {
    /// # Panics
    ///
    /// Panics if `params.order` is outside 1..=32.
    pub fn new(params: CrcParameters) -> Self {
        assert!(
            (1..=32).contains(&params.order),
            "CRC order must be within 1..=32, got {}",
            params.order
        );

        let high_bit = 1u32 << (params.order - 1);
        let mask = ((high_bit - 1) << 1) | 1;
        let polynomial = params.polynomial & mask;

        let init_direct = match params.init_mode {
            InitMode::Direct => params.init & mask,
            InitMode::Augmented => {
                let mut crc = params.init & mask;
                for _ in 0..params.order {
                    let bit = crc & high_bit;
                    crc <<= 1;
                    if bit != 0 {
                        crc ^= polynomial;
                    }
                }
                crc & mask
            }
        };

        let mut crc = Self {
            params: CrcParameters {
                polynomial,
                ..params
            },
            mask,
            high_bit,
            init_direct,
            table: None,
        };
        if params.order >= 8 {
            crc.table = Some(crc.build_table());
        }
        crc
    }

    pub fn parameters(&self) -> &CrcParameters {
        &self.params
    }

    /// Compute the CRC of `data`.
    pub fn calculate(&self, data: &[u8]) -> u32 {
        let crc = match &self.table {
            Some(table) => self.calculate_table(table, data),
            None => self.calculate_bitwise(data),
        };
        (crc ^ self.params.final_xor) & self.mask
    }

    fn build_table(&self) -> Box<[u32; 256]> {
        let order = self.params.order;
        let mut table = Box::new([0u32; 256]);
        for (i, entry) in table.iter_mut().enumerate() {
            let mut crc = i as u32;
            if self.params.reflect_input {
                crc = reflect(crc, 8);
            }
            crc <<= order - 8;
            for _ in 0..8 {
                let bit = crc & self.high_bit;
                crc <<= 1;
                if bit != 0 {
                    crc ^= self.params.polynomial;
                }
            }
            if self.params.reflect_input {
                crc = reflect(crc, order);
            }
            *entry = crc & self.mask;
        }
        table
    }

    fn calculate_table(&self, table: &[u32; 256], data: &[u8]) -> u32 {
        let order = self.params.order;
        let mut crc = self.init_direct;

        if self.params.reflect_input {
            crc = reflect(crc, order);
            for &byte in data {
                crc = (crc >> 8) ^ table[((crc ^ byte as u32) & 0xFF) as usize];
            }
        } else {
            for &byte in data {
                let index = ((crc >> (order - 8)) ^ byte as u32) & 0xFF;
                crc = ((crc << 8) & self.mask) ^ table[index as usize];
            }
        }

        // The table already produces a reflected register for reflected input.
        if self.params.reflect_input != self.params.reflect_output {
            crc = reflect(crc, order);
        }
        crc
    }

    fn calculate_bitwise(&self, data: &[u8]) -> u32 {
        let mut crc = self.init_direct;
        for &byte in data {
            let byte = if self.params.reflect_input {
                reflect(byte as u32, 8)
            } else {
                byte as u32
            };
            let mut j = 0x80u32;
            while j != 0 {
                let mut bit = crc & self.high_bit;
                crc = (crc << 1) & self.mask;
                if byte & j != 0 {
                    bit ^= self.high_bit;
                }
                if bit != 0 {
                    crc ^= self.params.polynomial;
                }
                j >>= 1;
            }
        }
        if self.params.reflect_output {
            crc = reflect(crc, self.params.order);
        }
        crc
    }
}

/// Reverse the lowest `bits` bits of `value`; higher bits are dropped.
fn reflect(value: u32, bits: u32) -> u32 {
    (0..bits)
        .filter(|i| value & (1 << i) != 0)
        .fold(0, |acc, i| acc | 1 << (bits - 1 - i))
}

static FEIG_CRC: LazyLock<Crc> = LazyLock::new(|| Crc::new(CrcParameters::FEIG));

/// CRC-16 of `data` as transmitted in every reader frame.
pub fn crc16(data: &[u8]) -> u16 {
    FEIG_CRC.calculate(data) as u16
}
