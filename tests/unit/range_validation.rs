//! Unit tests for argument range checks
//!
//! Every range-checked setter must reject an oversized value before touching
//! the bus, and accept its largest legal value.

use crate::common::test_utils::MockDriver;
use crate::common::{MockError, create_initialized_driver, create_mock_driver};
use ov2640::Error;

type SetResult = Result<(), Error<MockError>>;

type Setter = fn(&mut MockDriver, u16) -> SetResult;

/// (name, largest legal value, setter)
fn ranged_setters() -> Vec<(&'static str, u16, Setter)> {
    let setters: &[(&'static str, u16, Setter)] = &[
        ("agc_gain", 0x3FF, |d, v| d.set_agc_gain(v)),
        ("vstrt", 0x3FF, |d, v| d.set_vertical_window_line_start(v)),
        ("vend", 0x3FF, |d, v| d.set_vertical_window_line_end(v)),
        ("clock_divider", 0x3F, |d, v| d.set_clock_divider(v as u8)),
        ("line_interval", 0xFFF, |d, v| d.set_line_interval_adjust(v)),
        ("hsync_end", 0x3FF, |d, v| {
            d.set_hsync_position_and_width_end_point(v)
        }),
        ("hsync_start", 0x3FF, |d, v| {
            d.set_hsync_position_and_width_start_point(v)
        }),
        ("href_start", 0x7FF, |d, v| d.set_horizontal_window_start(v)),
        ("href_end", 0x7FF, |d, v| d.set_horizontal_window_end(v)),
        ("frame_length", 0x3FF, |d, v| d.set_frame_length_adjustment(v)),
        ("zoom_v_start", 0x3FF, |d, v| {
            d.set_zoom_mode_vertical_window_start_point(v)
        }),
        ("bd50", 0x3FF, |d, v| d.set_50hz_banding_aec(v)),
        ("bd60", 0x3FF, |d, v| d.set_60hz_banding_aec(v)),
        ("dvp_pclk", 0x7F, |d, v| d.set_dvp_pclk(v as u8)),
        ("image_h", 0xFFF, |d, v| d.set_image_horizontal(v)),
        ("image_v", 0x7FF, |d, v| d.set_image_vertical(v)),
        ("v_divider", 0x7, |d, v| d.set_vertical_divider(v as u8)),
        ("h_divider", 0x7, |d, v| d.set_horizontal_divider(v as u8)),
        ("hsize", 0x3FF, |d, v| d.set_horizontal_size(v)),
        ("vsize", 0x1FF, |d, v| d.set_vertical_size(v)),
        ("offset_x", 0x7FF, |d, v| d.set_offset_x(v)),
        ("offset_y", 0x7FF, |d, v| d.set_offset_y(v)),
        ("dp_selx", 0xF, |d, v| d.set_dp_selx(v as u8)),
        ("dp_sely", 0xF, |d, v| d.set_dp_sely(v as u8)),
        ("output_width", 0x3FF, |d, v| d.set_output_width(v)),
        ("output_height", 0x1FF, |d, v| d.set_output_height(v)),
        ("zoom_speed", 0xF, |d, v| d.set_zoom_speed(v as u8)),
    ];
    setters.to_vec()
}

#[test]
fn test_oversized_values_rejected_without_bus_traffic() {
    for (name, max, set) in ranged_setters() {
        let (mut driver, harness) = create_initialized_driver();

        let result = set(&mut driver, max + 1);

        assert_eq!(
            result,
            Err(Error::OutOfRange { argument: 0 }),
            "{name} should reject {:#x}",
            max + 1
        );
        assert!(harness.interface.is_idle(), "{name} touched the bus");
    }
}

#[test]
fn test_largest_value_accepted() {
    for (name, max, set) in ranged_setters() {
        let (mut driver, harness) = create_initialized_driver();

        assert_eq!(set(&mut driver, max), Ok(()), "{name} should accept {max:#x}");
        assert!(harness.interface.write_count() > 0, "{name} wrote nothing");
    }
}

#[test]
fn test_not_initialized_takes_precedence() {
    for (name, max, set) in ranged_setters() {
        let (mut driver, _harness) = create_mock_driver();

        assert_eq!(
            set(&mut driver, max + 1),
            Err(Error::NotInitialized),
            "{name} should report the missing init first"
        );
    }
}

#[test]
fn test_second_argument_index() {
    let (mut driver, harness) = create_initialized_driver();

    assert_eq!(
        driver.set_fast_mode_large_step_range(0x10, 0x0),
        Err(Error::OutOfRange { argument: 0 })
    );
    let result = driver.set_fast_mode_large_step_range(0x3, 0x10);
    assert_eq!(result, Err(Error::OutOfRange { argument: 1 }));
    assert_eq!(result.unwrap_err().code(), 5);
    assert!(harness.interface.is_idle());

    driver.set_fast_mode_large_step_range(0xF, 0xF).unwrap();
    assert_eq!(
        driver.get_fast_mode_large_step_range().unwrap(),
        (0xF, 0xF)
    );
}
