//! SD card storage for captured frames
//!
//! Three layers, bottom up:
//!
//! - [`completion`]: interrupt-to-thread transfer flags
//! - [`sdio`]: blocking block I/O on top of a DMA-driven [`SdioTransport`]
//! - [`diskio`]: the single-drive disk interface a FAT library mounts,
//!   including an [`embedded_sdmmc::BlockDevice`] implementation

pub mod completion;
pub mod diskio;
pub mod sdio;

pub use completion::{Completion, TransferFlags};
pub use diskio::{DiskIo, DiskStatus, IoctlCommand, IoctlResponse};
pub use sdio::{CardInfo, SdCard, SdioTransport};

/// Sector size used by the disk interface
pub const BLOCK_SIZE: usize = 512;

/// Storage errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SdError<E> {
    /// The transport reported an error
    Transport(E),
    /// A transfer or the card did not finish within the poll budget
    Timeout,
    /// The card has not been initialized
    NotInitialized,
    /// The drive number does not exist
    NoDisk,
    /// Bad buffer size, block count or ioctl code
    InvalidParameter,
}

impl<E> SdError<E> {
    /// Numeric status code in the disk-result convention
    ///
    /// `1` transport error, `2` timeout or missing drive, `3` not ready,
    /// `4` invalid parameter.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Transport(_) => 1,
            Self::Timeout | Self::NoDisk => 2,
            Self::NotInitialized => 3,
            Self::InvalidParameter => 4,
        }
    }

    /// Whether the error came from the transfer itself and may go away on retry
    #[must_use]
    pub const fn is_transfer_failure(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for SdError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "sdio error: {e:?}"),
            Self::Timeout => f.write_str("sd transfer timed out"),
            Self::NotInitialized => f.write_str("sd card not initialized"),
            Self::NoDisk => f.write_str("no such drive"),
            Self::InvalidParameter => f.write_str("invalid parameter"),
        }
    }
}

/// Time source for cards without a real-time clock
///
/// Every timestamp is the FAT epoch, 1980-01-01 00:00:00.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FatEpoch;

impl embedded_sdmmc::TimeSource for FatEpoch {
    fn get_timestamp(&self) -> embedded_sdmmc::Timestamp {
        embedded_sdmmc::Timestamp {
            year_since_1970: 10,
            zero_indexed_month: 0,
            zero_indexed_day: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }
}
