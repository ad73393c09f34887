//! Unit tests for DSP-bank field accessors

use crate::common::create_initialized_driver;
use ov2640::{Bank, Bist, ByteSwap, DvpOutputFormat, Error, HrefTiming, ResetTarget};

#[test]
fn test_dsp_bypass() {
    let (mut driver, harness) = create_initialized_driver();
    harness.interface.set_register(Bank::Dsp, 0x05, 0xF0);

    driver.set_dsp_bypass(true).unwrap();

    assert_eq!(harness.interface.get_register(Bank::Dsp, 0x05), 0xF1);
    assert!(driver.get_dsp_bypass().unwrap());
    assert_eq!(harness.interface.current_bank(), Bank::Dsp);
}

#[test]
fn test_dvp_pclk_and_auto_mode() {
    let (mut driver, harness) = create_initialized_driver();

    driver.set_dvp_pclk(0x02).unwrap();
    driver.set_auto_mode(true).unwrap();

    assert_eq!(harness.interface.get_register(Bank::Dsp, 0xD3), 0x82);
    assert_eq!(driver.get_dvp_pclk().unwrap(), 0x02);
    assert!(driver.get_auto_mode().unwrap());
}

#[test]
fn test_image_mode_fields() {
    let (mut driver, harness) = create_initialized_driver();

    driver.set_dvp_output_format(DvpOutputFormat::Rgb565).unwrap();
    driver.set_jpeg_output(true).unwrap();
    driver.set_byte_swap(ByteSwap::Uvuv).unwrap();
    driver
        .set_dvp_jpeg_output_href_timing(HrefTiming::Vsync)
        .unwrap();

    assert_eq!(harness.interface.get_register(Bank::Dsp, 0xDA), 0x1B);
    assert_eq!(
        driver.get_dvp_output_format().unwrap(),
        DvpOutputFormat::Rgb565
    );
    assert!(driver.get_jpeg_output().unwrap());
    assert_eq!(driver.get_byte_swap().unwrap(), ByteSwap::Uvuv);
    assert_eq!(
        driver.get_dvp_jpeg_output_href_timing().unwrap(),
        HrefTiming::Vsync
    );
}

#[test]
fn test_reserved_output_format() {
    let (mut driver, harness) = create_initialized_driver();
    harness.interface.set_register(Bank::Dsp, 0xDA, 0x0C);

    assert_eq!(driver.get_dvp_output_format(), Err(Error::UnknownValue(3)));
}

#[test]
fn test_module_resets() {
    let (mut driver, harness) = create_initialized_driver();

    driver.set_reset(ResetTarget::Jpeg, true).unwrap();
    driver.set_reset(ResetTarget::Dvp, true).unwrap();
    assert_eq!(harness.interface.get_register(Bank::Dsp, 0xE0), 0x14);

    driver.set_reset(ResetTarget::Jpeg, false).unwrap();
    assert!(!driver.get_reset(ResetTarget::Jpeg).unwrap());
    assert!(driver.get_reset(ResetTarget::Dvp).unwrap());
    assert!(!driver.get_reset(ResetTarget::Microcontroller).unwrap());
}

#[test]
fn test_bist_bits() {
    let (mut driver, harness) = create_initialized_driver();

    driver.set_bist(Bist::Launch, true).unwrap();
    driver.set_bist(Bist::MicrocontrollerReset, true).unwrap();
    assert_eq!(harness.interface.get_register(Bank::Dsp, 0xF9), 0x81);

    driver.set_bist(Bist::Launch, false).unwrap();
    assert_eq!(harness.interface.get_register(Bank::Dsp, 0xF9), 0x80);
    assert!(driver.get_bist(Bist::MicrocontrollerReset).unwrap());
    assert!(!driver.get_bist(Bist::BootRomSelect).unwrap());
}

#[test]
fn test_program_memory_pointer() {
    let (mut driver, harness) = create_initialized_driver();

    driver.set_program_memory_pointer_address(0x1234).unwrap();
    driver.set_program_memory_pointer_access_address(0x5A).unwrap();

    assert_eq!(harness.interface.get_register(Bank::Dsp, 0xFA), 0x34);
    assert_eq!(harness.interface.get_register(Bank::Dsp, 0xFB), 0x12);
    assert_eq!(driver.get_program_memory_pointer_address().unwrap(), 0x1234);
    assert_eq!(
        driver.get_program_memory_pointer_access_address().unwrap(),
        0x5A
    );
}

#[test]
fn test_ctrl_flags_share_registers() {
    let (mut driver, harness) = create_initialized_driver();

    driver.set_yuv422(true).unwrap();
    driver.set_yuv(true).unwrap();
    driver.set_aec_enable(true).unwrap();
    assert_eq!(harness.interface.get_register(Bank::Dsp, 0xC2), 0x8C);

    driver.set_dcw(true).unwrap();
    driver.set_cmx(true).unwrap();
    assert_eq!(harness.interface.get_register(Bank::Dsp, 0x86), 0x21);

    driver.set_bpc(true).unwrap();
    assert_eq!(harness.interface.get_register(Bank::Dsp, 0x87), 0x80);
    assert!(!driver.get_wpc().unwrap());

    driver.set_awb(true).unwrap();
    assert!(driver.get_awb().unwrap());
    assert!(!driver.get_awb_gain().unwrap());
}

#[test]
fn test_image_horizontal_twelve_bits() {
    let (mut driver, harness) = create_initialized_driver();

    driver.set_image_horizontal(1600).unwrap();

    // 1600 = 0b0110_0100_0000: bit 11 clear, [10:3] = 0xC8, [2:0] = 0
    assert_eq!(harness.interface.get_register(Bank::Dsp, 0xC0), 0xC8);
    assert_eq!(driver.get_image_horizontal().unwrap(), 1600);

    driver.set_image_horizontal(0xFFF).unwrap();
    assert_eq!(harness.interface.get_register(Bank::Dsp, 0x8C) & 0x78, 0x78);
    assert_eq!(driver.get_image_horizontal().unwrap(), 0xFFF);
}

#[test]
fn test_image_vertical_keeps_horizontal_bits() {
    let (mut driver, _harness) = create_initialized_driver();

    driver.set_image_horizontal(0xFFF).unwrap();
    driver.set_image_vertical(1200).unwrap();

    assert_eq!(driver.get_image_vertical().unwrap(), 1200);
    assert_eq!(driver.get_image_horizontal().unwrap(), 0xFFF);
}

#[test]
fn test_horizontal_size_ten_bits() {
    let (mut driver, harness) = create_initialized_driver();

    driver.set_horizontal_size(0x3FF).unwrap();

    assert_eq!(harness.interface.get_register(Bank::Dsp, 0x51), 0xFF);
    assert_eq!(harness.interface.get_register(Bank::Dsp, 0x55), 0x08);
    assert_eq!(harness.interface.get_register(Bank::Dsp, 0x57), 0x80);
    assert_eq!(driver.get_horizontal_size().unwrap(), 0x3FF);
}

#[test]
fn test_vertical_size_and_offsets() {
    let (mut driver, _harness) = create_initialized_driver();

    driver.set_vertical_size(0x12C).unwrap();
    driver.set_offset_x(0x7FF).unwrap();
    driver.set_offset_y(0x123).unwrap();

    // All three share VHYX
    assert_eq!(driver.get_vertical_size().unwrap(), 0x12C);
    assert_eq!(driver.get_offset_x().unwrap(), 0x7FF);
    assert_eq!(driver.get_offset_y().unwrap(), 0x123);
}

#[test]
fn test_output_size() {
    let (mut driver, harness) = create_initialized_driver();

    driver.set_zoom_speed(0x5).unwrap();
    driver.set_output_width(400).unwrap();
    driver.set_output_height(300).unwrap();

    assert_eq!(harness.interface.get_register(Bank::Dsp, 0x5A), 0x90);
    assert_eq!(harness.interface.get_register(Bank::Dsp, 0x5B), 0x2C);
    // Zoom speed in [7:4], height MSB in [2], width MSBs in [1:0]
    assert_eq!(harness.interface.get_register(Bank::Dsp, 0x5C), 0x55);
    assert_eq!(driver.get_output_width().unwrap(), 400);
    assert_eq!(driver.get_output_height().unwrap(), 300);
    assert_eq!(driver.get_zoom_speed().unwrap(), 0x5);
}

#[test]
fn test_dividers_and_dp_sel() {
    let (mut driver, _harness) = create_initialized_driver();

    driver.set_vertical_divider(3).unwrap();
    driver.set_horizontal_divider(5).unwrap();
    driver.set_dp_selx(0xA).unwrap();
    driver.set_dp_sely(0x4).unwrap();

    assert_eq!(driver.get_vertical_divider().unwrap(), 3);
    assert_eq!(driver.get_horizontal_divider().unwrap(), 5);
    assert_eq!(driver.get_dp_selx().unwrap(), 0xA);
    assert_eq!(driver.get_dp_sely().unwrap(), 0x4);
}

#[test]
fn test_sccb_fields() {
    let (mut driver, _harness) = create_initialized_driver();

    driver.set_sccb_master_speed(4).unwrap();
    driver.set_sccb_slave_id(0x60).unwrap();
    driver.set_sensor_pass_through_access(true).unwrap();
    driver.set_address_auto_increase(true).unwrap();

    assert_eq!(driver.get_sccb_master_speed().unwrap(), 4);
    assert_eq!(driver.get_sccb_slave_id().unwrap(), 0x60);
    assert!(driver.get_sensor_pass_through_access().unwrap());
    assert!(driver.get_address_auto_increase().unwrap());
    assert!(!driver.get_sccb_master_access().unwrap());
}

#[test]
fn test_quantization_and_sde() {
    let (mut driver, harness) = create_initialized_driver();

    driver.set_quantization_scale_factor(0x0C).unwrap();
    driver.set_sde_indirect_register_address(0x05).unwrap();
    driver.set_sde_indirect_register_data(0x80).unwrap();

    assert_eq!(harness.interface.get_register(Bank::Dsp, 0x44), 0x0C);
    assert_eq!(harness.interface.get_register(Bank::Dsp, 0x7C), 0x05);
    assert_eq!(driver.get_sde_indirect_register_data().unwrap(), 0x80);
}
