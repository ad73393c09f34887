//! Integration tests for the SD card seen through the `BlockDevice` trait a
//! FAT library mounts

use crate::common::create_mock_disk;
use embedded_sdmmc::{Block, BlockCount, BlockDevice, BlockIdx, TimeSource};
use ov2640::storage::diskio::SD_DRIVE;
use ov2640::storage::{FatEpoch, SdError};

#[test]
fn test_block_device_workflow() {
    let (disk, sdio) = create_mock_disk(4096);

    // Before init the geometry is unknown
    assert_eq!(disk.num_blocks(), Err(SdError::NotInitialized));

    disk.disk_initialize(SD_DRIVE).unwrap();
    assert_eq!(disk.num_blocks(), Ok(BlockCount(4096)));

    // Write a boot-sector-like block plus a data block
    let mut blocks = [Block::new(), Block::new()];
    blocks[0].contents[510] = 0x55;
    blocks[0].contents[511] = 0xAA;
    blocks[1].contents.fill(0xC3);
    disk.write(&blocks, BlockIdx(0)).unwrap();

    // One single-block transfer per block
    assert_eq!(sdio.write_starts(), 2);

    let mut readback = [Block::new(), Block::new()];
    disk.read(&mut readback, BlockIdx(0), "readback").unwrap();
    assert_eq!(readback[0].contents[510..], [0x55, 0xAA]);
    assert_eq!(readback[1].contents, [0xC3; 512]);
}

#[test]
fn test_block_device_propagates_timeouts() {
    let (disk, sdio) = create_mock_disk(4096);
    disk.disk_initialize(SD_DRIVE).unwrap();
    sdio.stall_transfers();

    let mut blocks = [Block::new()];
    assert_eq!(disk.read(&mut blocks, BlockIdx(7), "fat"), Err(SdError::Timeout));
}

#[test]
fn test_fat_timestamps_use_epoch() {
    let timestamp = FatEpoch.get_timestamp();

    assert_eq!(timestamp.year_since_1970, 10);
    assert_eq!(timestamp.zero_indexed_day, 0);
    assert_eq!(timestamp.hours, 0);
}
