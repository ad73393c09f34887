//! Unit tests for the SD card block layer and disk interface

use crate::common::mock_sdio::{MockSdio, SdioError};
use crate::common::{MockDelay, create_mock_disk, leak_flags};
use ov2640::storage::diskio::SD_DRIVE;
use ov2640::storage::{
    BLOCK_SIZE, CardInfo, DiskIo, DiskStatus, IoctlCommand, IoctlResponse, SdCard, SdError,
};

#[test]
fn test_status_before_and_after_init() {
    let (disk, sdio) = create_mock_disk(1024);

    assert_eq!(disk.disk_status(SD_DRIVE), DiskStatus::NotInitialized);
    disk.disk_initialize(SD_DRIVE).unwrap();

    assert_eq!(disk.disk_status(SD_DRIVE), DiskStatus::Ready);
    assert!(sdio.is_initialized());
}

#[test]
fn test_init_failure() {
    let (disk, sdio) = create_mock_disk(1024);
    sdio.fail_init();

    assert_eq!(
        disk.disk_initialize(SD_DRIVE),
        Err(SdError::Transport(SdioError::NoResponse))
    );
    assert_eq!(disk.disk_status(SD_DRIVE), DiskStatus::NotInitialized);
}

#[test]
fn test_unknown_drive() {
    let (disk, sdio) = create_mock_disk(1024);
    let mut buffer = [0u8; BLOCK_SIZE];

    assert_eq!(disk.disk_status(1), DiskStatus::NoDisk);
    assert_eq!(disk.disk_initialize(1), Err(SdError::NoDisk));
    assert_eq!(disk.disk_read(1, &mut buffer, 0, 1), Err(SdError::NoDisk));
    assert_eq!(disk.disk_write(1, &buffer, 0, 1), Err(SdError::NoDisk));
    assert_eq!(disk.disk_ioctl(1, IoctlCommand::Sync), Err(SdError::NoDisk));
    assert_eq!(sdio.read_starts() + sdio.write_starts(), 0);
}

#[test]
fn test_read_before_init() {
    let (disk, sdio) = create_mock_disk(1024);
    let mut buffer = [0u8; BLOCK_SIZE];

    let result = disk.disk_read(SD_DRIVE, &mut buffer, 0, 1);

    assert_eq!(result, Err(SdError::NotInitialized));
    assert_eq!(result.unwrap_err().code(), 3);
    assert_eq!(sdio.read_starts(), 0, "Not-ready is not retried");
}

#[test]
fn test_write_then_read_multiple_blocks() {
    let (disk, sdio) = create_mock_disk(1024);
    disk.disk_initialize(SD_DRIVE).unwrap();

    let mut data = [0u8; 2 * BLOCK_SIZE];
    data[..BLOCK_SIZE].fill(0xAA);
    data[BLOCK_SIZE..].fill(0x55);
    disk.disk_write(SD_DRIVE, &data, 10, 2).unwrap();

    assert_eq!(sdio.block(10), [0xAA; BLOCK_SIZE]);
    assert_eq!(sdio.block(11), [0x55; BLOCK_SIZE]);

    let mut readback = [0u8; 2 * BLOCK_SIZE];
    disk.disk_read(SD_DRIVE, &mut readback, 10, 2).unwrap();
    assert_eq!(readback, data);
    assert_eq!(sdio.write_starts(), 1);
    assert_eq!(sdio.read_starts(), 1);
}

#[test]
fn test_transfer_timeout_is_retried_once() {
    let (disk, sdio) = create_mock_disk(1024);
    disk.disk_initialize(SD_DRIVE).unwrap();
    sdio.stall_transfers();

    let mut buffer = [0u8; BLOCK_SIZE];
    let result = disk.disk_read(SD_DRIVE, &mut buffer, 0, 1);

    assert_eq!(result, Err(SdError::Timeout));
    assert_eq!(result.unwrap_err().code(), 2);
    assert_eq!(sdio.read_starts(), 2, "Exactly two attempts");
    assert_eq!(sdio.ready_polls(), 0, "Card state is not polled after a DMA timeout");
}

#[test]
fn test_write_timeout_is_retried_once() {
    let (disk, sdio) = create_mock_disk(1024);
    disk.disk_initialize(SD_DRIVE).unwrap();
    sdio.stall_transfers();

    let data = [0x5Au8; BLOCK_SIZE];
    let result = disk.disk_write(SD_DRIVE, &data, 4, 1);

    assert_eq!(result, Err(SdError::Timeout));
    assert_eq!(sdio.write_starts(), 2, "Exactly two attempts");
    assert_eq!(sdio.read_starts(), 0);
}

#[test]
fn test_transient_start_failure_recovers() {
    let (disk, sdio) = create_mock_disk(1024);
    disk.disk_initialize(SD_DRIVE).unwrap();
    sdio.fail_starts(1);

    let data = [0x11u8; BLOCK_SIZE];
    disk.disk_write(SD_DRIVE, &data, 3, 1).unwrap();

    assert_eq!(sdio.write_starts(), 2);
    assert_eq!(sdio.block(3), data);
}

#[test]
fn test_persistent_start_failure() {
    let (disk, sdio) = create_mock_disk(1024);
    disk.disk_initialize(SD_DRIVE).unwrap();
    sdio.fail_starts(5);

    let data = [0u8; BLOCK_SIZE];
    assert_eq!(
        disk.disk_write(SD_DRIVE, &data, 0, 1),
        Err(SdError::Transport(SdioError::Dma))
    );
    assert_eq!(sdio.write_starts(), 2);
}

#[test]
fn test_card_busy_then_ready() {
    let (disk, sdio) = create_mock_disk(1024);
    disk.disk_initialize(SD_DRIVE).unwrap();
    sdio.busy_for(2);

    let mut buffer = [0u8; BLOCK_SIZE];
    disk.disk_read(SD_DRIVE, &mut buffer, 0, 1).unwrap();

    assert_eq!(sdio.ready_polls(), 3);
}

#[test]
fn test_card_stuck_busy() {
    let (disk, sdio) = create_mock_disk(1024);
    disk.disk_initialize(SD_DRIVE).unwrap();
    sdio.stall_card();

    let mut buffer = [0u8; BLOCK_SIZE];
    assert_eq!(
        disk.disk_read(SD_DRIVE, &mut buffer, 0, 1),
        Err(SdError::Timeout)
    );
    // Three polls per attempt, two attempts
    assert_eq!(sdio.ready_polls(), 6);
    assert_eq!(sdio.read_starts(), 2);
}

#[test]
fn test_invalid_transfer_parameters() {
    let (disk, sdio) = create_mock_disk(1024);
    disk.disk_initialize(SD_DRIVE).unwrap();

    let mut short = [0u8; BLOCK_SIZE];
    assert_eq!(
        disk.disk_read(SD_DRIVE, &mut short, 0, 2),
        Err(SdError::InvalidParameter)
    );
    assert_eq!(
        disk.disk_write(SD_DRIVE, &short, 0, 0),
        Err(SdError::InvalidParameter)
    );
    assert_eq!(sdio.read_starts() + sdio.write_starts(), 0);
}

#[test]
fn test_stale_completion_is_cleared() {
    let flags = leak_flags();
    let sdio = MockSdio::new(flags, 64);
    let mut card = SdCard::new(sdio.clone(), flags, MockDelay).with_timeout(3, 0);
    card.init().unwrap();

    // Left over from an earlier transfer
    flags.rx_done.signal();
    sdio.stall_transfers();

    let mut buffer = [0u8; BLOCK_SIZE];
    assert_eq!(card.read_blocks(0, &mut buffer, 1), Err(SdError::Timeout));
}

#[test]
fn test_ioctl_geometry() {
    let (disk, _sdio) = create_mock_disk(2048);

    // Sync and sector size need no card
    assert_eq!(
        disk.disk_ioctl(SD_DRIVE, IoctlCommand::Sync),
        Ok(IoctlResponse::Done)
    );
    assert_eq!(
        disk.disk_ioctl(SD_DRIVE, IoctlCommand::GetSectorSize),
        Ok(IoctlResponse::SectorSize(512))
    );
    assert_eq!(
        disk.disk_ioctl(SD_DRIVE, IoctlCommand::GetSectorCount),
        Err(SdError::NotInitialized)
    );

    disk.disk_initialize(SD_DRIVE).unwrap();

    assert_eq!(
        disk.disk_ioctl(SD_DRIVE, IoctlCommand::GetSectorCount),
        Ok(IoctlResponse::SectorCount(2048))
    );
    assert_eq!(
        disk.disk_ioctl(SD_DRIVE, IoctlCommand::GetBlockSize),
        Ok(IoctlResponse::BlockSize(512))
    );
}

#[test]
fn test_ioctl_raw_codes() {
    let (disk, _sdio) = create_mock_disk(2048);

    assert_eq!(disk.disk_ioctl_raw(SD_DRIVE, 0), Ok(IoctlResponse::Done));
    let result = disk.disk_ioctl_raw(SD_DRIVE, 9);
    assert_eq!(result, Err(SdError::InvalidParameter));
    assert_eq!(result.unwrap_err().code(), 4);
}

#[test]
fn test_card_deinit_always_clears_state() {
    let flags = leak_flags();
    let sdio = MockSdio::new(flags, 64);
    let mut card = SdCard::new(sdio.clone(), flags, MockDelay);

    assert_eq!(
        card.init(),
        Ok(CardInfo {
            block_count: 64,
            block_size: 512,
        })
    );
    sdio.fail_deinit();

    assert_eq!(card.deinit(), Err(SdError::Transport(SdioError::NoResponse)));
    assert!(!card.is_initialized());
    assert_eq!(card.card_info(), None);
}

#[test]
fn test_disk_returns_card() {
    let (disk, sdio) = create_mock_disk(64);
    disk.disk_initialize(SD_DRIVE).unwrap();

    let card = DiskIo::into_inner(disk);
    assert!(card.is_initialized());

    let (transport, _delay) = card.release();
    assert!(transport.is_initialized());
    assert!(sdio.is_initialized());
}
