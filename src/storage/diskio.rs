//! Disk interface for a FAT filesystem
//!
//! Exposes the SD card as physical drive 0 with the classic
//! status/initialize/read/write/ioctl entry points. Reads and writes are
//! attempted twice before the error is reported. [`DiskIo`] also implements
//! [`embedded_sdmmc::BlockDevice`], so it can be handed straight to an
//! `embedded_sdmmc::VolumeManager`.

use super::sdio::{SdCard, SdioTransport};
use super::{BLOCK_SIZE, SdError};
use core::cell::RefCell;
use embedded_hal::delay::DelayNs;
use embedded_sdmmc::{Block, BlockCount, BlockDevice, BlockIdx};

/// Physical drive number of the SD card
pub const SD_DRIVE: u8 = 0;

/// Attempts per read or write before giving up
const TRANSFER_ATTEMPTS: usize = 2;

/// Drive status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DiskStatus {
    /// Initialized and ready
    Ready,
    /// Present but not initialized
    NotInitialized,
    /// No such drive
    NoDisk,
}

impl DiskStatus {
    /// Status flags in the disk-status convention (`0x01` no init, `0x02` no disk)
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Ready => 0x00,
            Self::NotInitialized => 0x01,
            Self::NoDisk => 0x02,
        }
    }
}

/// Miscellaneous drive commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoctlCommand {
    /// Flush pending writes (transfers are synchronous, so this is a no-op)
    Sync = 0,
    /// Number of sectors on the drive
    GetSectorCount = 1,
    /// Sector size in bytes
    GetSectorSize = 2,
    /// Card block size in bytes
    GetBlockSize = 3,
}

impl IoctlCommand {
    /// Decode a raw command code
    #[must_use]
    pub const fn from_raw(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Sync),
            1 => Some(Self::GetSectorCount),
            2 => Some(Self::GetSectorSize),
            3 => Some(Self::GetBlockSize),
            _ => None,
        }
    }
}

/// Result of an [`IoctlCommand`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoctlResponse {
    /// Command completed, nothing to report
    Done,
    /// Sector count
    SectorCount(u32),
    /// Sector size in bytes
    SectorSize(u16),
    /// Card block size in bytes
    BlockSize(u32),
}

/// Single-drive disk interface over an [`SdCard`]
///
/// All entry points take `&self`; the card sits behind a `RefCell`.
pub struct DiskIo<'a, T, D> {
    card: RefCell<SdCard<'a, T, D>>,
}

impl<'a, T, D> DiskIo<'a, T, D>
where
    T: SdioTransport,
    D: DelayNs,
{
    /// Wrap a card handle
    pub const fn new(card: SdCard<'a, T, D>) -> Self {
        Self {
            card: RefCell::new(card),
        }
    }

    /// Return the card handle
    pub fn into_inner(self) -> SdCard<'a, T, D> {
        self.card.into_inner()
    }

    /// Status of `drive`
    pub fn disk_status(&self, drive: u8) -> DiskStatus {
        if drive != SD_DRIVE {
            return DiskStatus::NoDisk;
        }
        if self.card.borrow().is_initialized() {
            DiskStatus::Ready
        } else {
            DiskStatus::NotInitialized
        }
    }

    /// Initialize `drive`
    ///
    /// # Errors
    ///
    /// [`SdError::NoDisk`] for an unknown drive, otherwise the card init error.
    pub fn disk_initialize(&self, drive: u8) -> Result<(), SdError<T::Error>> {
        Self::check_drive(drive)?;
        self.card.borrow_mut().init()?;
        Ok(())
    }

    /// Read `count` sectors starting at `sector` into `buffer`
    ///
    /// # Errors
    ///
    /// [`SdError::NoDisk`] for an unknown drive, otherwise the error of the
    /// last attempt.
    pub fn disk_read(
        &self,
        drive: u8,
        buffer: &mut [u8],
        sector: u32,
        count: u32,
    ) -> Result<(), SdError<T::Error>> {
        Self::check_drive(drive)?;
        self.with_retry(|card| card.read_blocks(sector, buffer, count))
    }

    /// Write `count` sectors from `buffer` starting at `sector`
    ///
    /// # Errors
    ///
    /// [`SdError::NoDisk`] for an unknown drive, otherwise the error of the
    /// last attempt.
    pub fn disk_write(
        &self,
        drive: u8,
        buffer: &[u8],
        sector: u32,
        count: u32,
    ) -> Result<(), SdError<T::Error>> {
        Self::check_drive(drive)?;
        self.with_retry(|card| card.write_blocks(sector, buffer, count))
    }

    /// Run a drive command
    ///
    /// # Errors
    ///
    /// [`SdError::NoDisk`] for an unknown drive, [`SdError::NotInitialized`]
    /// for geometry queries before init.
    pub fn disk_ioctl(
        &self,
        drive: u8,
        command: IoctlCommand,
    ) -> Result<IoctlResponse, SdError<T::Error>> {
        Self::check_drive(drive)?;
        let info = self.card.borrow().card_info();
        match command {
            IoctlCommand::Sync => Ok(IoctlResponse::Done),
            IoctlCommand::GetSectorSize => Ok(IoctlResponse::SectorSize(BLOCK_SIZE as u16)),
            IoctlCommand::GetSectorCount => info
                .map(|info| IoctlResponse::SectorCount(info.block_count))
                .ok_or(SdError::NotInitialized),
            IoctlCommand::GetBlockSize => info
                .map(|info| IoctlResponse::BlockSize(info.block_size))
                .ok_or(SdError::NotInitialized),
        }
    }

    /// Run a drive command given as a raw code
    ///
    /// # Errors
    ///
    /// [`SdError::InvalidParameter`] for an unknown code, otherwise as
    /// [`disk_ioctl`](Self::disk_ioctl).
    pub fn disk_ioctl_raw(&self, drive: u8, code: u8) -> Result<IoctlResponse, SdError<T::Error>> {
        Self::check_drive(drive)?;
        let command = IoctlCommand::from_raw(code).ok_or(SdError::InvalidParameter)?;
        self.disk_ioctl(drive, command)
    }

    fn check_drive(drive: u8) -> Result<(), SdError<T::Error>> {
        if drive == SD_DRIVE {
            Ok(())
        } else {
            Err(SdError::NoDisk)
        }
    }

    fn with_retry<F>(&self, mut transfer: F) -> Result<(), SdError<T::Error>>
    where
        F: FnMut(&mut SdCard<'a, T, D>) -> Result<(), SdError<T::Error>>,
    {
        let mut card = self.card.borrow_mut();
        let mut attempt = 1;
        loop {
            match transfer(&mut card) {
                Err(e) if e.is_transfer_failure() && attempt < TRANSFER_ATTEMPTS => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("sd: transfer failed, retrying");
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}

impl<T, D> BlockDevice for DiskIo<'_, T, D>
where
    T: SdioTransport,
    D: DelayNs,
{
    type Error = SdError<T::Error>;

    fn read(
        &self,
        blocks: &mut [Block],
        start_block_idx: BlockIdx,
        _reason: &str,
    ) -> Result<(), Self::Error> {
        for (sector, block) in (start_block_idx.0..).zip(blocks.iter_mut()) {
            self.disk_read(SD_DRIVE, &mut block.contents, sector, 1)?;
        }
        Ok(())
    }

    fn write(&self, blocks: &[Block], start_block_idx: BlockIdx) -> Result<(), Self::Error> {
        for (sector, block) in (start_block_idx.0..).zip(blocks.iter()) {
            self.disk_write(SD_DRIVE, &block.contents, sector, 1)?;
        }
        Ok(())
    }

    fn num_blocks(&self) -> Result<BlockCount, Self::Error> {
        match self.disk_ioctl(SD_DRIVE, IoctlCommand::GetSectorCount)? {
            IoctlResponse::SectorCount(count) => Ok(BlockCount(count)),
            _ => Err(SdError::InvalidParameter),
        }
    }
}
