//! Common test utilities and mock implementations

#![allow(dead_code)]

pub mod mock_sdio;

pub use mock_control::Event;
pub use mock_interface::{MockError, Operation};
pub use test_utils::{
    MockDelay, create_initialized_driver, create_mock_disk, create_mock_driver, leak_flags,
};
