//! Integration tests for basic workflow scenarios

use crate::common::{MockDelay, create_mock_driver};
use ov2640::basic::defaults;
use ov2640::{
    Bank, DvpOutputFormat, Error, ImageResolution, LightMode, SpecialEffect, jpeg,
};

#[test]
fn test_complete_capture_setup_workflow() {
    let (mut driver, harness) = create_mock_driver();

    // Power up and identify
    driver.init(&mut MockDelay).unwrap();

    // Baseline profile
    driver.configure_basic().unwrap();
    assert!(!driver.get_dsp_bypass().unwrap(), "DSP back in the pipeline");
    assert!(driver.get_horizontal_mirror().unwrap());
    assert!(driver.get_vertical_flip().unwrap());
    assert_eq!(driver.get_50hz_banding_aec().unwrap(), defaults::BD50_AEC);
    assert_eq!(driver.get_image_horizontal().unwrap(), 1600);
    assert_eq!(driver.get_image_vertical().unwrap(), 1200);
    assert_eq!(driver.get_output_width().unwrap(), 1600 / 4);
    assert_eq!(driver.get_output_height().unwrap(), 1200 / 4);

    // JPEG at SVGA
    driver.set_jpeg_mode().unwrap();
    driver.set_image_resolution(ImageResolution::Svga).unwrap();
    assert!(driver.get_jpeg_output().unwrap());
    assert_eq!(driver.get_output_width().unwrap(), 200);
    assert_eq!(driver.get_output_height().unwrap(), 150);

    // Image tuning
    driver.set_light_mode(LightMode::Office).unwrap();
    driver.set_special_effect(SpecialEffect::Normal).unwrap();

    // Shut down
    driver.deinit(&mut MockDelay).unwrap();
    assert!(!driver.is_initialized());
    assert!(!harness.interface.is_acquired());
}

#[test]
fn test_rgb565_workflow() {
    let (mut driver, _harness) = create_mock_driver();

    driver.init(&mut MockDelay).unwrap();
    driver.configure_basic().unwrap();
    driver.set_rgb565_mode().unwrap();
    driver.set_image_resolution(ImageResolution::Qvga).unwrap();

    assert_eq!(
        driver.get_dvp_output_format().unwrap(),
        DvpOutputFormat::Rgb565
    );
    assert!(!driver.get_jpeg_output().unwrap());
    assert_eq!(driver.get_output_width().unwrap(), 80);
    assert_eq!(driver.get_output_height().unwrap(), 60);
}

#[test]
fn test_error_recovery() {
    let (mut driver, harness) = create_mock_driver();
    driver.init(&mut MockDelay).unwrap();

    // A failure halfway through the profile leaves the driver usable
    harness.interface.fail_write_to(Bank::Dsp, 0x44);
    assert!(matches!(driver.configure_basic(), Err(Error::Bus(_))));

    driver.set_dsp_bypass(false).unwrap();
    assert!(!driver.get_dsp_bypass().unwrap());
}

#[test]
fn test_frame_extraction() {
    // What the DMA buffer looks like after a JPEG capture: padding, then the
    // image, then stale data
    let mut frame = [0u8; 64];
    frame[5..7].copy_from_slice(&jpeg::SOI);
    frame[7..20].fill(0x42);
    frame[20..22].copy_from_slice(&jpeg::EOI);

    let range = jpeg::find_jpeg(&frame).unwrap();

    assert_eq!(range, 5..22);
    assert_eq!(&frame[range][..2], &jpeg::SOI);
}
