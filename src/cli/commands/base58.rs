use super::input::collect_values;
use crate::console::{self, BLUE, END_COLOR};
use crate::crypto::base58::{self, BTC_ADDRESS_LEN};
use crate::errors::{AppError, AppResult};
use clap::builder::RangedU64ValueParser;
use clap::Args;
use std::path::PathBuf;
use tracing::{debug, info};

/// Validate Bitcoin addresses
#[derive(Args)]
pub struct BtcCheckCommand {
    /// Addresses to check (reads --file or stdin when omitted)
    pub addresses: Vec<String>,

    /// File with one address per line
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Exit with an error if any address is invalid
    #[arg(long)]
    pub strict: bool,
}

impl BtcCheckCommand {
    pub fn run(&self) -> AppResult<()> {
        let addresses = collect_values(&self.addresses, self.file.as_deref())?;
        info!("Checking {} addresses", addresses.len());

        let mut invalid = 0usize;
        for address in &addresses {
            match base58::verify_base58check(address, BTC_ADDRESS_LEN) {
                Ok(_) => console::success(&format!("valid    {}", address)),
                Err(e) => {
                    invalid += 1;
                    debug!("{}: {}", address, e);
                    console::warning(&format!("invalid  {} ({})", address, e));
                }
            }
        }

        if self.strict && invalid > 0 {
            return Err(AppError::InvalidData(format!(
                "{} of {} addresses failed validation",
                invalid,
                addresses.len()
            )));
        }

        Ok(())
    }
}

/// Widest output buffer `base58-decode` will allocate
pub const MAX_DECODE_LEN: u64 = 4096;

/// Decode Base58 to hex
#[derive(Args)]
pub struct Base58DecodeCommand {
    /// Base58 string to decode
    pub encoded: String,

    /// Output length in bytes (value is left-padded with zeros)
    #[arg(
        long,
        default_value_t = BTC_ADDRESS_LEN,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_DECODE_LEN)
    )]
    pub length: usize,

    /// Also verify the trailing 4-byte Base58Check checksum
    #[arg(long)]
    pub check: bool,
}

impl Base58DecodeCommand {
    pub fn run(&self) -> AppResult<()> {
        let decoded = base58::decode_base58(&self.encoded, self.length)?;
        println!("{}{}{}", BLUE, hex::encode(&decoded), END_COLOR);

        if self.check {
            base58::verify_base58check(&self.encoded, self.length)?;
            console::success("checksum valid");
        }

        Ok(())
    }
}

/// Encode hex bytes as Base58
#[derive(Args)]
pub struct Base58EncodeCommand {
    /// Hex-encoded bytes
    pub hex: String,
}

impl Base58EncodeCommand {
    pub fn run(&self) -> AppResult<()> {
        let bytes = hex::decode(self.hex.trim())
            .map_err(|e| AppError::InvalidData(format!("invalid hex input: {}", e)))?;
        println!("{}", base58::encode_base58(&bytes));
        Ok(())
    }
}
