//! Unit tests for bank-gated register access

use crate::common::{Operation, create_initialized_driver};
use ov2640::{BANK_SELECT_REGISTER, Bank, Error};

#[test]
fn test_sensor_access_switches_from_dsp() {
    let (mut driver, harness) = create_initialized_driver();
    harness.interface.set_selector(0x00);

    driver.set_horizontal_mirror(true).unwrap();

    let ops = harness.interface.operations();
    // Selector read, selector write, then the field read-modify-write
    assert_eq!(
        ops[0],
        Operation::ReadRegister {
            bank: Bank::Dsp,
            address: BANK_SELECT_REGISTER,
            value: 0x00,
        }
    );
    assert_eq!(
        ops[1],
        Operation::BankSwitch {
            from: Bank::Dsp,
            to: Bank::Sensor,
        }
    );
    assert_eq!(harness.interface.bank_switch_count(), 1);
    assert_eq!(harness.interface.current_bank(), Bank::Sensor);
}

#[test]
fn test_no_switch_when_already_selected() {
    let (mut driver, harness) = create_initialized_driver();
    harness.interface.set_selector(0x01);

    driver.get_vertical_flip().unwrap();

    let ops = harness.interface.operations();
    assert!(
        ops.contains(&Operation::ReadRegister {
            bank: Bank::Sensor,
            address: BANK_SELECT_REGISTER,
            value: 0x01,
        }),
        "Selector must be read before every access"
    );
    assert_eq!(
        harness.interface.bank_switch_count(),
        0,
        "No bank switch should occur for same bank"
    );
}

#[test]
fn test_repeated_accesses_switch_once() {
    let (mut driver, harness) = create_initialized_driver();
    harness.interface.set_selector(0x00);

    driver.set_horizontal_mirror(true).unwrap();
    driver.set_vertical_flip(true).unwrap();
    driver.set_frame_exposure_pre_charge_row_number(4).unwrap();

    assert_eq!(harness.interface.bank_switch_count(), 1);
}

#[test]
fn test_alternating_banks() {
    let (mut driver, harness) = create_initialized_driver();
    harness.interface.set_selector(0x00);

    driver.set_horizontal_mirror(true).unwrap(); // sensor
    driver.set_dsp_bypass(true).unwrap(); // dsp
    driver.set_vertical_flip(true).unwrap(); // sensor

    let switches: Vec<_> = harness
        .interface
        .operations()
        .into_iter()
        .filter_map(|op| match op {
            Operation::BankSwitch { to, .. } => Some(to),
            _ => None,
        })
        .collect();
    assert_eq!(switches, vec![Bank::Sensor, Bank::Dsp, Bank::Sensor]);
}

#[test]
fn test_selector_upper_bits_preserved() {
    let (mut driver, harness) = create_initialized_driver();
    harness.interface.set_selector(0xFE);

    driver.get_horizontal_mirror().unwrap();

    assert_eq!(harness.interface.selector(), 0xFF);

    driver.get_dsp_bypass().unwrap();

    assert_eq!(harness.interface.selector(), 0xFE);
}

#[test]
fn test_table_bank_change_is_noticed() {
    let (mut driver, harness) = create_initialized_driver();

    // The JPEG tables leave the DSP bank selected
    driver.set_sensor_reg(0x04, 0x00).unwrap();
    driver.table_jpeg_init().unwrap();
    assert_eq!(harness.interface.current_bank(), Bank::Dsp);

    harness.interface.clear_operations();
    driver.set_horizontal_mirror(true).unwrap();

    assert_eq!(harness.interface.bank_switch_count(), 1);
    assert_eq!(
        harness.interface.get_register(Bank::Sensor, 0x04) & 0x80,
        0x80
    );
}

#[test]
fn test_bank_switch_failure() {
    let (mut driver, harness) = create_initialized_driver();
    harness.interface.set_selector(0x00);

    // Inject bank switch failure
    harness.interface.fail_bank_switch(true);

    let result = driver.set_horizontal_mirror(true);
    assert!(
        matches!(result, Err(Error::Bus(_))),
        "Bank switch failure should surface as a bus error"
    );
    assert_eq!(harness.interface.write_count(), 0);
}

#[test]
fn test_selector_read_failure() {
    let (mut driver, harness) = create_initialized_driver();

    harness.interface.fail_next_read();

    assert!(matches!(driver.get_dsp_reg(0x44), Err(Error::Bus(_))));
    assert_eq!(harness.interface.bank_switch_count(), 0);
}

#[test]
fn test_raw_register_access() {
    let (mut driver, harness) = create_initialized_driver();

    driver.set_dsp_reg(0x44, 0x0C).unwrap();
    driver.set_sensor_reg(0x44, 0x55).unwrap();

    // Same address, different banks
    assert_eq!(harness.interface.get_register(Bank::Dsp, 0x44), 0x0C);
    assert_eq!(harness.interface.get_register(Bank::Sensor, 0x44), 0x55);
    assert_eq!(driver.get_dsp_reg(0x44).unwrap(), 0x0C);
    assert_eq!(driver.get_sensor_reg(0x44).unwrap(), 0x55);
}
