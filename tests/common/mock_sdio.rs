//! Mock SDIO transport for testing the storage layer

use ov2640::storage::{CardInfo, SdioTransport, TransferFlags};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Block size of the simulated card
const BLOCK: usize = 512;

#[derive(Debug)]
struct SdioState {
    info: CardInfo,
    blocks: HashMap<u32, [u8; BLOCK]>,
    initialized: bool,
    fail_init: bool,
    fail_deinit: bool,
    /// Number of upcoming starts that return an error
    fail_starts: usize,
    /// Complete DMA transfers by signaling the flags on start
    complete_on_start: bool,
    /// Number of busy polls before the card reports ready
    busy_polls: usize,
    card_ready: bool,
    read_starts: usize,
    write_starts: usize,
    ready_polls: usize,
}

/// Mock SDIO peripheral
///
/// Reads and writes are served from an in-memory block map. Completion is
/// signaled through the shared [`TransferFlags`] as an interrupt handler
/// would.
#[derive(Clone)]
pub struct MockSdio {
    flags: &'static TransferFlags,
    state: Rc<RefCell<SdioState>>,
}

/// Mock SDIO error
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SdioError {
    /// Card did not respond during init
    NoResponse,
    /// DMA could not be started
    Dma,
}

impl MockSdio {
    /// Create a card with `block_count` blocks whose transfers complete at once
    pub fn new(flags: &'static TransferFlags, block_count: u32) -> Self {
        Self {
            flags,
            state: Rc::new(RefCell::new(SdioState {
                info: CardInfo {
                    block_count,
                    block_size: BLOCK as u32,
                },
                blocks: HashMap::new(),
                initialized: false,
                fail_init: false,
                fail_deinit: false,
                fail_starts: 0,
                complete_on_start: true,
                busy_polls: 0,
                card_ready: true,
                read_starts: 0,
                write_starts: 0,
                ready_polls: 0,
            })),
        }
    }

    /// Never signal transfer completion
    pub fn stall_transfers(&self) {
        self.state.borrow_mut().complete_on_start = false;
    }

    /// Keep the card out of the transfer state
    pub fn stall_card(&self) {
        self.state.borrow_mut().card_ready = false;
    }

    /// Report busy for the next `polls` card-state polls
    pub fn busy_for(&self, polls: usize) {
        self.state.borrow_mut().busy_polls = polls;
    }

    /// Fail the next `count` transfer starts
    pub fn fail_starts(&self, count: usize) {
        self.state.borrow_mut().fail_starts = count;
    }

    /// Fail the next init
    pub fn fail_init(&self) {
        self.state.borrow_mut().fail_init = true;
    }

    /// Fail the next deinit
    pub fn fail_deinit(&self) {
        self.state.borrow_mut().fail_deinit = true;
    }

    /// Whether the peripheral is up
    pub fn is_initialized(&self) -> bool {
        self.state.borrow().initialized
    }

    /// Number of read transfers started
    pub fn read_starts(&self) -> usize {
        self.state.borrow().read_starts
    }

    /// Number of write transfers started
    pub fn write_starts(&self) -> usize {
        self.state.borrow().write_starts
    }

    /// Number of card-state polls
    pub fn ready_polls(&self) -> usize {
        self.state.borrow().ready_polls
    }

    /// Contents of one block, zeros if never written
    pub fn block(&self, sector: u32) -> [u8; BLOCK] {
        self.state
            .borrow()
            .blocks
            .get(&sector)
            .copied()
            .unwrap_or([0; BLOCK])
    }

    /// Preload one block
    pub fn set_block(&self, sector: u32, contents: [u8; BLOCK]) {
        self.state.borrow_mut().blocks.insert(sector, contents);
    }
}

impl SdioTransport for MockSdio {
    type Error = SdioError;

    fn init(&mut self) -> Result<CardInfo, SdioError> {
        let mut state = self.state.borrow_mut();
        if state.fail_init {
            state.fail_init = false;
            return Err(SdioError::NoResponse);
        }
        state.initialized = true;
        Ok(state.info)
    }

    fn deinit(&mut self) -> Result<(), SdioError> {
        let mut state = self.state.borrow_mut();
        state.initialized = false;
        if state.fail_deinit {
            state.fail_deinit = false;
            return Err(SdioError::NoResponse);
        }
        Ok(())
    }

    fn start_read(&mut self, sector: u32, buffer: &mut [u8], count: u32) -> Result<(), SdioError> {
        let mut state = self.state.borrow_mut();
        state.read_starts += 1;
        if state.fail_starts > 0 {
            state.fail_starts -= 1;
            return Err(SdioError::Dma);
        }
        for (i, chunk) in buffer.chunks_mut(BLOCK).take(count as usize).enumerate() {
            let block = state
                .blocks
                .get(&(sector + i as u32))
                .copied()
                .unwrap_or([0; BLOCK]);
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
        if state.complete_on_start {
            self.flags.rx_done.signal();
        }
        Ok(())
    }

    fn start_write(&mut self, sector: u32, buffer: &[u8], count: u32) -> Result<(), SdioError> {
        let mut state = self.state.borrow_mut();
        state.write_starts += 1;
        if state.fail_starts > 0 {
            state.fail_starts -= 1;
            return Err(SdioError::Dma);
        }
        for (i, chunk) in buffer.chunks(BLOCK).take(count as usize).enumerate() {
            let mut block = [0; BLOCK];
            block[..chunk.len()].copy_from_slice(chunk);
            state.blocks.insert(sector + i as u32, block);
        }
        if state.complete_on_start {
            self.flags.tx_done.signal();
        }
        Ok(())
    }

    fn is_transfer_ready(&mut self) -> bool {
        let mut state = self.state.borrow_mut();
        state.ready_polls += 1;
        if state.busy_polls > 0 {
            state.busy_polls -= 1;
            return false;
        }
        state.card_ready
    }
}
