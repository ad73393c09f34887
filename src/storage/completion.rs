//! Transfer completion flags shared with interrupt context

use core::sync::atomic::{AtomicBool, Ordering};

/// One-shot completion flag
///
/// Reset by the thread that starts a transfer, signaled from the DMA
/// complete interrupt.
#[derive(Debug, Default)]
pub struct Completion {
    done: AtomicBool,
}

impl Completion {
    /// Create a flag in the reset state
    pub const fn new() -> Self {
        Self {
            done: AtomicBool::new(false),
        }
    }

    /// Clear the flag before starting a transfer
    pub fn reset(&self) {
        self.done.store(false, Ordering::Release);
    }

    /// Mark the transfer as complete (interrupt side)
    pub fn signal(&self) {
        self.done.store(true, Ordering::Release);
    }

    /// Whether the transfer has completed
    pub fn is_signaled(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }
}

/// Completion flags for the SDIO DMA channels
///
/// Meant to live in a `static` so the interrupt handlers can reach it:
///
/// ```
/// use ov2640::storage::TransferFlags;
///
/// static SD_FLAGS: TransferFlags = TransferFlags::new();
///
/// // in the SDIO TX complete interrupt
/// SD_FLAGS.tx_done.signal();
/// assert!(SD_FLAGS.tx_done.is_signaled());
/// ```
#[derive(Debug, Default)]
pub struct TransferFlags {
    /// Block write finished
    pub tx_done: Completion,
    /// Block read finished
    pub rx_done: Completion,
}

impl TransferFlags {
    /// Both flags reset
    pub const fn new() -> Self {
        Self {
            tx_done: Completion::new(),
            rx_done: Completion::new(),
        }
    }
}
