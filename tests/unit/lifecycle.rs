//! Unit tests for init/deinit sequencing

use crate::common::mock_control::RecordingDelay;
use crate::common::{
    Event, MockDelay, MockError, Operation, create_initialized_driver, create_mock_driver,
};
use embedded_hal::digital::PinState;
use ov2640::{Bank, Error, Ov2640Driver};

#[test]
fn test_init_sequence() {
    let (mut driver, harness) = create_mock_driver();
    let mut delay = RecordingDelay::new(harness.events.clone());

    driver.init(&mut delay).unwrap();

    assert!(driver.is_initialized());
    assert_eq!(
        *harness.events.borrow(),
        vec![
            Event::Acquire("pwdn"),
            Event::Acquire("reset"),
            Event::Acquire("bus"),
            Event::Drive("pwdn", PinState::Low),
            Event::Delay(10),
            Event::Drive("reset", PinState::Low),
            Event::Delay(10),
            Event::Drive("reset", PinState::High),
            Event::Delay(10),
            Event::Delay(50),
        ]
    );
}

#[test]
fn test_init_soft_resets_through_com7() {
    let (mut driver, harness) = create_mock_driver();

    driver.init(&mut MockDelay).unwrap();

    assert!(harness.interface.operations().contains(&Operation::WriteRegister {
        bank: Bank::Sensor,
        address: 0x12,
        value: 0x80,
    }));
}

#[test]
fn test_init_wrong_manufacturer() {
    let (mut driver, harness) = create_mock_driver();
    harness.interface.set_register(Bank::Sensor, 0x1C, 0x00);

    let result = driver.init(&mut MockDelay);

    assert_eq!(result, Err(Error::InvalidManufacturerId(0x00A2)));
    assert_eq!(result.unwrap_err().code(), 7);
    assert!(!driver.is_initialized());

    // Product ID is never read after a manufacturer mismatch
    let product_read = harness.interface.operations().iter().any(|op| {
        matches!(
            op,
            Operation::ReadRegister {
                bank: Bank::Sensor,
                address: 0x0A,
                ..
            }
        )
    });
    assert!(!product_read);

    // Everything acquired is released again
    assert!(!harness.interface.is_acquired());
    assert!(!harness.power_down.is_acquired());
    assert!(!harness.reset.is_acquired());
}

#[test]
fn test_init_wrong_product() {
    let (mut driver, harness) = create_mock_driver();
    harness.interface.set_register(Bank::Sensor, 0x0B, 0x41);

    let result = driver.init(&mut MockDelay);

    assert_eq!(result, Err(Error::InvalidProductId(0x2641)));
    assert_eq!(result.unwrap_err().code(), 8);
    assert!(!driver.is_initialized());
    assert!(!harness.interface.is_acquired());
}

#[test]
fn test_init_bus_acquire_failure() {
    let (mut driver, harness) = create_mock_driver();
    harness.interface.fail_acquire();

    assert_eq!(driver.init(&mut MockDelay), Err(Error::BusInit));

    // Lines are released in reverse order
    assert_eq!(
        *harness.events.borrow(),
        vec![
            Event::Acquire("pwdn"),
            Event::Acquire("reset"),
            Event::Release("reset"),
            Event::Release("pwdn"),
        ]
    );
    assert!(harness.interface.is_idle(), "No bus traffic without a bus");
}

#[test]
fn test_init_reset_line_acquire_failure() {
    let (mut driver, harness) = create_mock_driver();
    harness.reset.fail_acquire();

    let result = driver.init(&mut MockDelay);

    assert_eq!(result, Err(Error::Gpio));
    assert_eq!(result.unwrap_err().code(), 4);
    assert!(!harness.power_down.is_acquired());
}

#[test]
fn test_init_power_line_failure() {
    let (mut driver, harness) = create_mock_driver();
    harness.power_down.fail_drive(true);

    let result = driver.init(&mut MockDelay);

    assert_eq!(result, Err(Error::HardwareReset));
    assert_eq!(result.unwrap_err().code(), 5);
    assert!(!harness.interface.is_acquired());
    assert!(!harness.reset.is_acquired());
}

#[test]
fn test_init_soft_reset_failure() {
    let (mut driver, harness) = create_mock_driver();
    harness.interface.fail_write_to(Bank::Sensor, 0x12);

    let result = driver.init(&mut MockDelay);

    assert_eq!(result, Err(Error::SoftReset(MockError::Communication)));
    assert_eq!(result.unwrap_err().code(), 6);
    assert!(!driver.is_initialized());
    assert!(!harness.interface.is_acquired());
}

#[test]
fn test_deinit_sequence() {
    let (mut driver, harness) = create_initialized_driver();
    let mut delay = RecordingDelay::new(harness.events.clone());

    driver.deinit(&mut delay).unwrap();

    assert!(!driver.is_initialized());
    assert_eq!(
        *harness.events.borrow(),
        vec![
            Event::Delay(50),
            Event::Drive("pwdn", PinState::High),
            Event::Delay(10),
            Event::Release("reset"),
            Event::Release("pwdn"),
            Event::Release("bus"),
        ]
    );
    assert_eq!(harness.power_down.level(), Some(PinState::High));
}

#[test]
fn test_deinit_before_init() {
    let (mut driver, harness) = create_mock_driver();

    assert_eq!(driver.deinit(&mut MockDelay), Err(Error::NotInitialized));
    assert!(harness.interface.is_idle());
    assert!(harness.events.borrow().is_empty());
}

#[test]
fn test_deinit_line_release_failure() {
    let (mut driver, harness) = create_initialized_driver();
    harness.power_down.fail_release();

    let result = driver.deinit(&mut MockDelay);

    assert_eq!(result, Err(Error::LineRelease));
    assert_eq!(result.unwrap_err().code(), 1);
    // The handle is not left half-initialized
    assert!(!driver.is_initialized());
    assert!(!harness.interface.is_acquired());
}

#[test]
fn test_deinit_bus_release_failure() {
    let (mut driver, harness) = create_initialized_driver();
    harness.interface.fail_release();

    let result = driver.deinit(&mut MockDelay);

    assert_eq!(result, Err(Error::BusDeinit));
    assert_eq!(result.unwrap_err().code(), 1);
    assert!(!driver.is_initialized());
}

#[test]
fn test_deinit_soft_reset_failure() {
    let (mut driver, harness) = create_initialized_driver();
    harness.interface.fail_write_to(Bank::Sensor, 0x12);

    let result = driver.deinit(&mut MockDelay);

    assert_eq!(
        result,
        Err(Error::ShutdownSoftReset(MockError::Communication))
    );
    assert_eq!(result.unwrap_err().code(), 4);
    // Nothing was powered down or released
    assert!(driver.is_initialized());
    assert!(harness.interface.is_acquired());
    assert_eq!(harness.power_down.level(), Some(PinState::Low));
}

#[test]
fn test_deinit_power_down_failure() {
    let (mut driver, harness) = create_initialized_driver();
    harness.power_down.fail_drive(true);

    let result = driver.deinit(&mut MockDelay);

    assert_eq!(result, Err(Error::PowerDown));
    assert_eq!(result.unwrap_err().code(), 5);

    // Nothing was released, so the handle stays usable
    assert!(driver.is_initialized());
    assert!(harness.interface.is_acquired());
}

#[test]
fn test_reinit_after_deinit() {
    let (mut driver, _harness) = create_initialized_driver();

    driver.deinit(&mut MockDelay).unwrap();
    driver.init(&mut MockDelay).unwrap();

    assert!(driver.is_initialized());
    driver.set_horizontal_mirror(true).unwrap();
}

#[test]
fn test_accessors_require_init() {
    let (mut driver, harness) = create_mock_driver();

    assert_eq!(
        driver.set_horizontal_mirror(true),
        Err(Error::NotInitialized)
    );
    assert_eq!(driver.get_dsp_bypass(), Err(Error::NotInitialized));
    assert_eq!(driver.get_sensor_reg(0x04), Err(Error::NotInitialized));
    assert_eq!(driver.soft_reset(), Err(Error::NotInitialized));
    assert_eq!(driver.table_init(), Err(Error::NotInitialized));

    assert!(harness.interface.is_idle(), "No bus traffic before init");
}

#[test]
fn test_soft_reset() {
    let (mut driver, harness) = create_initialized_driver();

    driver.soft_reset().unwrap();

    assert_eq!(
        harness.interface.writes(),
        vec![(Bank::Sensor, 0x12, 0x80)]
    );
}

#[test]
fn test_release_returns_parts() {
    let (driver, harness) = create_mock_driver();

    let (interface, _power_down, _reset) = driver.release();
    interface.set_register(Bank::Dsp, 0x44, 0x0C);

    // Shares state with the harness handle
    assert_eq!(harness.interface.get_register(Bank::Dsp, 0x44), 0x0C);
}

#[test]
fn test_info() {
    let info = Ov2640Driver::<
        crate::common::mock_interface::MockInterface,
        ov2640::NoLine,
        ov2640::NoLine,
    >::info();

    assert_eq!(info.chip_name, "OmniVision OV2640");
    assert_eq!(info.interface, "SCCB");
    assert_eq!(info.driver_version, 1000);
}
