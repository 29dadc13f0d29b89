//! Error types surfaced at cartridge-construction time.
//!
//! Per-tick guest misbehaviour (`GuestViolation` in the design notes) is
//! never modeled as a `Result`; it is logged via [`log::warn!`] at the call
//! site and the access is absorbed per hardware behaviour. Only load-time
//! failures reach here.

use std::path::PathBuf;

/// Errors a caller can receive from cartridge or save-file loading.
#[derive(Debug, thiserror::Error)]
pub enum EmulatorError {
    #[error("rom file {path:?} is too short ({actual} bytes) to contain a header")]
    RomTooShort { path: Option<PathBuf>, actual: usize },

    #[error("rom declares an unknown ROM size code {code:#04x}")]
    UnknownRomSize { code: u8 },

    #[error("rom declares an unknown RAM size code {code:#04x}")]
    UnknownRamSize { code: u8 },

    #[error("cartridge type byte {code:#04x} is not an MBC flavour this core implements")]
    UnsupportedCartridge { code: u8 },

    #[error("save file {path:?} is missing or unreadable: {source}")]
    SaveFileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("save file {path:?} does not match the cartridge it is paired with")]
    SaveFileMismatch { path: PathBuf },

    #[error("save file {path:?} is truncated or corrupted")]
    SaveFileCorrupted { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, EmulatorError>;
