//! DMA block transfers over an SDIO peripheral
//!
//! [`SdCard`] drives a vendor SDIO/DMA layer through [`SdioTransport`]. A
//! transfer is started, then the matching [`Completion`] is polled until the
//! interrupt handler signals it, and finally the card is polled until it is
//! back in the transfer state. Both waits share the same poll budget.

use super::{BLOCK_SIZE, Completion, SdError, TransferFlags};
use embedded_hal::delay::DelayNs;

/// Default number of completion polls before a transfer times out
pub const DEFAULT_TIMEOUT_POLLS: u32 = 1000;

/// Default delay between completion polls
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 1;

/// Card geometry reported by the transport after init
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CardInfo {
    /// Number of logical blocks on the card
    pub block_count: u32,
    /// Logical block size in bytes
    pub block_size: u32,
}

/// SDIO peripheral with DMA block transfers
///
/// Implementations start transfers and return immediately. Completion is
/// reported by the interrupt handler through [`TransferFlags`].
pub trait SdioTransport {
    /// Peripheral error type
    type Error: core::fmt::Debug;

    /// Initialize the peripheral and the card, read the card info and
    /// switch to a 4-bit bus
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three steps fails.
    fn init(&mut self) -> Result<CardInfo, Self::Error>;

    /// Shut the peripheral down
    ///
    /// # Errors
    ///
    /// Returns an error if the peripheral rejects the request.
    fn deinit(&mut self) -> Result<(), Self::Error>;

    /// Start a DMA read of `count` blocks from `sector` into `buffer`
    ///
    /// # Errors
    ///
    /// Returns an error if the transfer cannot be started.
    fn start_read(&mut self, sector: u32, buffer: &mut [u8], count: u32) -> Result<(), Self::Error>;

    /// Start a DMA write of `count` blocks from `buffer` to `sector`
    ///
    /// # Errors
    ///
    /// Returns an error if the transfer cannot be started.
    fn start_write(&mut self, sector: u32, buffer: &[u8], count: u32) -> Result<(), Self::Error>;

    /// Whether the card is back in the transfer state
    fn is_transfer_ready(&mut self) -> bool;
}

/// SD card on an [`SdioTransport`]
pub struct SdCard<'a, T, D> {
    transport: T,
    flags: &'a TransferFlags,
    delay: D,
    timeout_polls: u32,
    poll_interval_ms: u32,
    info: Option<CardInfo>,
}

impl<'a, T, D> SdCard<'a, T, D>
where
    T: SdioTransport,
    D: DelayNs,
{
    /// Create a card handle with the default timeout (1000 polls, 1 ms apart)
    pub fn new(transport: T, flags: &'a TransferFlags, delay: D) -> Self {
        Self {
            transport,
            flags,
            delay,
            timeout_polls: DEFAULT_TIMEOUT_POLLS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            info: None,
        }
    }

    /// Override the poll budget
    ///
    /// `polls` is clamped to at least one.
    #[must_use]
    pub fn with_timeout(mut self, polls: u32, interval_ms: u32) -> Self {
        self.timeout_polls = polls.max(1);
        self.poll_interval_ms = interval_ms;
        self
    }

    /// Initialize the card
    ///
    /// # Errors
    ///
    /// Returns [`SdError::Transport`] if the transport fails to bring the card up.
    pub fn init(&mut self) -> Result<CardInfo, SdError<T::Error>> {
        let info = self.transport.init().map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("sd: init failed");
            SdError::Transport(e)
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "sd: {} blocks of {} bytes",
            info.block_count,
            info.block_size
        );

        self.info = Some(info);
        Ok(info)
    }

    /// Shut the card down
    ///
    /// # Errors
    ///
    /// Returns [`SdError::Transport`] if the transport fails. The handle is
    /// marked uninitialized either way.
    pub fn deinit(&mut self) -> Result<(), SdError<T::Error>> {
        self.info = None;
        self.transport.deinit().map_err(SdError::Transport)
    }

    /// Card geometry, `None` before [`init`](Self::init)
    pub const fn card_info(&self) -> Option<CardInfo> {
        self.info
    }

    /// Whether [`init`](Self::init) has succeeded
    pub const fn is_initialized(&self) -> bool {
        self.info.is_some()
    }

    /// Read `count` blocks starting at `sector`
    ///
    /// # Errors
    ///
    /// - [`SdError::NotInitialized`] before [`init`](Self::init)
    /// - [`SdError::InvalidParameter`] if `count` is zero or `buffer` is
    ///   shorter than `count` blocks
    /// - [`SdError::Transport`] if the transfer cannot be started
    /// - [`SdError::Timeout`] if the transfer or the card does not finish in
    ///   time. The DMA is not cancelled.
    pub fn read_blocks(
        &mut self,
        sector: u32,
        buffer: &mut [u8],
        count: u32,
    ) -> Result<(), SdError<T::Error>> {
        self.check_transfer(buffer.len(), count)?;

        let flags = self.flags;
        flags.rx_done.reset();
        self.transport
            .start_read(sector, buffer, count)
            .map_err(SdError::Transport)?;
        self.wait_for(&flags.rx_done).inspect_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("sd: read of {} blocks at {} timed out", count, sector);
        })?;
        self.wait_card_ready()
    }

    /// Write `count` blocks starting at `sector`
    ///
    /// # Errors
    ///
    /// Same as [`read_blocks`](Self::read_blocks).
    pub fn write_blocks(
        &mut self,
        sector: u32,
        buffer: &[u8],
        count: u32,
    ) -> Result<(), SdError<T::Error>> {
        self.check_transfer(buffer.len(), count)?;

        let flags = self.flags;
        flags.tx_done.reset();
        self.transport
            .start_write(sector, buffer, count)
            .map_err(SdError::Transport)?;
        self.wait_for(&flags.tx_done).inspect_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("sd: write of {} blocks at {} timed out", count, sector);
        })?;
        self.wait_card_ready()
    }

    /// Consume the handle and return the transport and delay
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }

    fn check_transfer(&self, len: usize, count: u32) -> Result<(), SdError<T::Error>> {
        if self.info.is_none() {
            return Err(SdError::NotInitialized);
        }
        match (count as usize).checked_mul(BLOCK_SIZE) {
            Some(needed) if count > 0 && len >= needed => Ok(()),
            _ => Err(SdError::InvalidParameter),
        }
    }

    fn wait_for(&mut self, completion: &Completion) -> Result<(), SdError<T::Error>> {
        let mut remaining = self.timeout_polls;
        loop {
            if completion.is_signaled() {
                return Ok(());
            }
            remaining -= 1;
            if remaining == 0 {
                return Err(SdError::Timeout);
            }
            self.delay.delay_ms(self.poll_interval_ms);
        }
    }

    fn wait_card_ready(&mut self) -> Result<(), SdError<T::Error>> {
        let mut remaining = self.timeout_polls;
        loop {
            if self.transport.is_transfer_ready() {
                return Ok(());
            }
            remaining -= 1;
            if remaining == 0 {
                #[cfg(feature = "defmt")]
                defmt::warn!("sd: card stuck outside transfer state");
                return Err(SdError::Timeout);
            }
            self.delay.delay_ms(self.poll_interval_ms);
        }
    }
}
