//! Ready-to-use camera profile
//!
//! [`configure_basic`](Ov2640Driver::configure_basic) loads the UXGA baseline
//! table and then programs every field with a known-good default, so the
//! sensor ends up in the same state regardless of what ran before. Output
//! format and frame size are then chosen with the JPEG/RGB565 mode helpers
//! and [`set_image_resolution`](Ov2640Driver::set_image_resolution).

use crate::control::{ControlLine, Resource};
use crate::device::{DriverResult, Ov2640Driver};
use device_driver::RegisterInterface;

/// Field values applied by [`configure_basic`](Ov2640Driver::configure_basic)
pub mod defaults {
    #![allow(missing_docs)]

    use crate::dsp::{ByteSwap, DvpOutputFormat, HrefTiming};
    use crate::sensor::{
        AgcGain, Band, Control, DummyFrame, Edge, Mode, OutputDrive, Pclk, PinStatus, Polarity,
        Resolution,
    };

    // Sensor bank defaults
    pub const CLOCK_RATE_DOUBLE: bool = false;
    pub const CLOCK_DIVIDER: u8 = 0x00;
    pub const MODE: Mode = Mode::Normal;
    pub const POWER_RESET_PIN_REMAP: bool = false;
    pub const OUTPUT_DRIVE: OutputDrive = OutputDrive::Capability2x;
    pub const HORIZONTAL_MIRROR: bool = true;
    pub const VERTICAL_FLIP: bool = true;
    pub const BAND_FILTER: bool = true;
    pub const AGC_CONTROL: Control = Control::Auto;
    pub const EXPOSURE_CONTROL: Control = Control::Auto;
    pub const AGC_GAIN_CEILING: AgcGain = AgcGain::Gain8x;
    pub const ZOOM_WINDOW_H_START: bool = false;
    pub const PIN_STATUS: PinStatus = PinStatus::TriState;
    pub const ZOOM_WINDOW_V_START: u16 = 0x0000;
    pub const LUMINANCE_HIGH: u8 = 0x40;
    pub const LUMINANCE_LOW: u8 = 0x38;
    pub const FAST_MODE_HIGH: u8 = 0x8;
    pub const FAST_MODE_LOW: u8 = 0x2;
    pub const FRAME_LENGTH_ADJ: u16 = 0x0000;
    pub const BAND: Band = Band::Hz50;
    pub const AUTO_BAND: bool = false;
    pub const SNAPSHOT: bool = false;
    pub const HISTOGRAM_LOW: u8 = 0x70;
    pub const HISTOGRAM_HIGH: u8 = 0x80;
    pub const BD50_AEC: u16 = 0x0CA;
    pub const BD60_AEC: u16 = 0x0A8;
    pub const RESOLUTION: Resolution = Resolution::Uxga;
    pub const ZOOM: bool = false;
    pub const COLOR_BAR_TEST: bool = false;
    pub const PCLK: Pclk = Pclk::NoEffect;
    pub const H_WINDOW_START: u16 = 142;
    pub const H_WINDOW_END: u16 = 942;
    pub const V_WINDOW_START: u16 = 7;
    pub const V_WINDOW_END: u16 = 607;
    pub const VSYNC_PULSE_WIDTH: u16 = 0x0000;
    pub const AGC_GAIN: u16 = 0x0000;
    pub const DUMMY_FRAME: DummyFrame = DummyFrame::None;
    pub const AEC: u16 = 0x0CC;
    pub const FRAME_EXPOSURE_PRE_ROW: u8 = 0x40;
    pub const CHSYNC_HREF_SWAP: bool = false;
    pub const HREF_CHSYNC_SWAP: bool = false;
    pub const PCLK_OUTPUT_BY_HREF: bool = false;
    pub const PCLK_EDGE: Edge = Edge::Falling;
    pub const HREF_POLARITY: Polarity = Polarity::Positive;
    pub const VSYNC_POLARITY: Polarity = Polarity::Positive;
    pub const HSYNC_POLARITY: Polarity = Polarity::Positive;
    pub const LINE_INTERVAL_ADJUST: u16 = 0x000;
    pub const HSYNC_START_POINT: u16 = 0x08;
    pub const HSYNC_END_POINT: u16 = 0x30;
    pub const LUMINANCE_AVERAGE: u8 = 0x00;
    pub const FLASH_LIGHT: u8 = 0x20;
    pub const ZONE_WEIGHTS: u32 = 0x0000_0000;

    // DSP bank defaults
    pub const DSP_BPC: bool = true;
    pub const DSP_WPC: bool = true;
    pub const DSP_DVP_PCLK: u8 = 0x02;
    pub const DSP_CIP: bool = true;
    pub const DSP_DMY: bool = true;
    pub const DSP_RAW_GMA: bool = true;
    pub const DSP_DG: bool = false;
    pub const DSP_AWB: bool = true;
    pub const DSP_AWB_GAIN: bool = true;
    pub const DSP_PRE: bool = true;
    pub const DSP_DVP_Y8: bool = false;
    pub const DSP_JPEG_OUTPUT: bool = false;
    pub const DSP_DVP_OUTPUT_FORMAT: DvpOutputFormat = DvpOutputFormat::Rgb565;
    pub const DSP_JPEG_HREF_TIMING: HrefTiming = HrefTiming::Sensor;
    pub const DSP_BYTE_SWAP: ByteSwap = ByteSwap::Uvuv;
    pub const DSP_IMAGE_HORIZONTAL: u16 = 1600;
    pub const DSP_IMAGE_VERTICAL: u16 = 1200;
    pub const DSP_DCW: bool = true;
    pub const DSP_SDE: bool = true;
    pub const DSP_UV_ADJ: bool = true;
    pub const DSP_UV_AVG: bool = true;
    pub const DSP_CMX: bool = true;
    pub const DSP_LP_DP: bool = false;
    pub const DSP_ROUND: bool = false;
    pub const DSP_VERTICAL_DIVIDER: u8 = 0x00;
    pub const DSP_HORIZONTAL_DIVIDER: u8 = 0x00;
    pub const DSP_HORIZONTAL_SIZE: u16 = 1600;
    pub const DSP_VERTICAL_SIZE: u16 = 1200;
    pub const DSP_OFFSET_X: u16 = 0;
    pub const DSP_OFFSET_Y: u16 = 0;
    pub const DSP_OUTPUT_WIDTH: u16 = 1600;
    pub const DSP_OUTPUT_HEIGHT: u16 = 1200;
    pub const DSP_ZOOM_SPEED: u8 = 0x00;
    pub const DSP_QUANTIZATION_SCALE: u8 = 0x0C;
    pub const DSP_SCCB_MASTER_SPEED: u8 = 4;
    pub const DSP_ADDRESS_AUTO_INCREASE: bool = false;
    pub const DSP_SCCB: bool = false;
    pub const DSP_SCCB_CLOCK_DELAY: bool = false;
    pub const DSP_SCCB_ACCESS: bool = false;
    pub const DSP_SENSOR_PASS_ACCESS: bool = true;
    pub const DSP_AEC_ENABLE: bool = false;
    pub const DSP_AEC_SEL: bool = false;
    pub const DSP_STAT_SEL: bool = false;
    pub const DSP_VFIRST: bool = false;
    pub const DSP_YUV422: bool = true;
    pub const DSP_YUV: bool = true;
    pub const DSP_RGB: bool = false;
    pub const DSP_RAW: bool = false;
    pub const DSP_DP_SELX: u8 = 0x00;
    pub const DSP_DP_SELY: u8 = 0x00;
}

/// DSP size registers count in units of 4 pixels
const SIZE_UNIT: u16 = 4;

/// Output frame size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImageResolution {
    /// 160 x 120
    Qqvga,
    /// 176 x 144
    Qcif,
    /// 320 x 240
    Qvga,
    /// 400 x 240
    Wqvga,
    /// 352 x 288
    Cif,
    /// 640 x 480
    Vga,
    /// 800 x 600
    Svga,
    /// 1024 x 768
    Xga,
    /// 1280 x 800
    Wxga,
    /// 1280 x 960
    Xvga,
    /// 1440 x 900
    WxgaPlus,
    /// 1280 x 1024
    Sxga,
    /// 1600 x 1200
    Uxga,
}

impl ImageResolution {
    /// Frame size in pixels as `(width, height)`
    #[must_use]
    pub const fn dimensions(self) -> (u16, u16) {
        match self {
            Self::Qqvga => (160, 120),
            Self::Qcif => (176, 144),
            Self::Qvga => (320, 240),
            Self::Wqvga => (400, 240),
            Self::Cif => (352, 288),
            Self::Vga => (640, 480),
            Self::Svga => (800, 600),
            Self::Xga => (1024, 768),
            Self::Wxga => (1280, 800),
            Self::Xvga => (1280, 960),
            Self::WxgaPlus => (1440, 900),
            Self::Sxga => (1280, 1024),
            Self::Uxga => (1600, 1200),
        }
    }
}

impl<I, PD, RST> Ov2640Driver<I, PD, RST>
where
    I: RegisterInterface<AddressType = u8> + Resource,
    PD: ControlLine,
    RST: ControlLine,
{
    /// Load the baseline table and program every field with its default
    ///
    /// DSP fields are written with the DSP bypassed, and the DSP is put back
    /// in the pipeline at the end.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. The sensor is left partially
    /// configured.
    pub fn configure_basic(&mut self) -> DriverResult<(), I> {
        self.table_init()?;
        self.configure_sensor_defaults()?;

        self.set_dsp_bypass(true)?;
        self.configure_dsp_defaults()?;
        self.set_dsp_bypass(false)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("ov2640: basic profile applied");

        Ok(())
    }

    /// Switch to JPEG output
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or any write fails.
    pub fn set_jpeg_mode(&mut self) -> DriverResult<(), I> {
        self.table_jpeg_init()
    }

    /// Switch to RGB565 output
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or any write fails.
    pub fn set_rgb565_mode(&mut self) -> DriverResult<(), I> {
        self.table_rgb565_init()
    }

    /// Program the DSP output size for `resolution`
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or communication fails.
    pub fn set_image_resolution(&mut self, resolution: ImageResolution) -> DriverResult<(), I> {
        let (width, height) = resolution.dimensions();
        self.set_output_width(width / SIZE_UNIT)?;
        self.set_output_height(height / SIZE_UNIT)?;
        Ok(())
    }

    fn configure_sensor_defaults(&mut self) -> DriverResult<(), I> {
        self.set_clock_rate_double(defaults::CLOCK_RATE_DOUBLE)?;
        self.set_clock_divider(defaults::CLOCK_DIVIDER)?;
        self.set_mode(defaults::MODE)?;
        self.set_power_reset_pin_remap(defaults::POWER_RESET_PIN_REMAP)?;
        self.set_output_drive(defaults::OUTPUT_DRIVE)?;
        self.set_horizontal_mirror(defaults::HORIZONTAL_MIRROR)?;
        self.set_vertical_flip(defaults::VERTICAL_FLIP)?;
        self.set_band_filter(defaults::BAND_FILTER)?;
        self.set_agc_control(defaults::AGC_CONTROL)?;
        self.set_exposure_control(defaults::EXPOSURE_CONTROL)?;
        self.set_agc_gain_ceiling(defaults::AGC_GAIN_CEILING)?;
        self.set_zoom_window_horizontal_start_point(defaults::ZOOM_WINDOW_H_START)?;
        self.set_clock_output_power_down_pin_status(defaults::PIN_STATUS)?;
        self.set_zoom_mode_vertical_window_start_point(defaults::ZOOM_WINDOW_V_START)?;
        self.set_luminance_signal_high_range(defaults::LUMINANCE_HIGH)?;
        self.set_luminance_signal_low_range(defaults::LUMINANCE_LOW)?;
        self.set_fast_mode_large_step_range(defaults::FAST_MODE_HIGH, defaults::FAST_MODE_LOW)?;
        self.set_frame_length_adjustment(defaults::FRAME_LENGTH_ADJ)?;
        self.set_band(defaults::BAND)?;
        self.set_auto_band(defaults::AUTO_BAND)?;
        self.set_live_video_after_snapshot(defaults::SNAPSHOT)?;
        self.set_histogram_algorithm_low_level(defaults::HISTOGRAM_LOW)?;
        self.set_histogram_algorithm_high_level(defaults::HISTOGRAM_HIGH)?;
        self.set_50hz_banding_aec(defaults::BD50_AEC)?;
        self.set_60hz_banding_aec(defaults::BD60_AEC)?;
        self.set_resolution(defaults::RESOLUTION)?;
        self.set_zoom(defaults::ZOOM)?;
        self.set_color_bar_test(defaults::COLOR_BAR_TEST)?;
        self.set_pclk(defaults::PCLK)?;
        self.set_horizontal_window_start(defaults::H_WINDOW_START)?;
        self.set_horizontal_window_end(defaults::H_WINDOW_END)?;
        self.set_vertical_window_line_start(defaults::V_WINDOW_START)?;
        self.set_vertical_window_line_end(defaults::V_WINDOW_END)?;
        self.set_vsync_pulse_width(defaults::VSYNC_PULSE_WIDTH)?;
        self.set_agc_gain(defaults::AGC_GAIN)?;
        self.set_dummy_frame(defaults::DUMMY_FRAME)?;
        self.set_aec(defaults::AEC)?;
        self.set_frame_exposure_pre_charge_row_number(defaults::FRAME_EXPOSURE_PRE_ROW)?;
        self.set_chsync_href_swap(defaults::CHSYNC_HREF_SWAP)?;
        self.set_href_chsync_swap(defaults::HREF_CHSYNC_SWAP)?;
        self.set_pclk_output_qualified_by_href(defaults::PCLK_OUTPUT_BY_HREF)?;
        self.set_pclk_edge(defaults::PCLK_EDGE)?;
        self.set_href_polarity(defaults::HREF_POLARITY)?;
        self.set_vsync_polarity(defaults::VSYNC_POLARITY)?;
        self.set_hsync_polarity(defaults::HSYNC_POLARITY)?;
        self.set_line_interval_adjust(defaults::LINE_INTERVAL_ADJUST)?;
        self.set_hsync_position_and_width_start_point(defaults::HSYNC_START_POINT)?;
        self.set_hsync_position_and_width_end_point(defaults::HSYNC_END_POINT)?;
        self.set_luminance_average(defaults::LUMINANCE_AVERAGE)?;
        self.set_flash_light(defaults::FLASH_LIGHT)?;
        self.set_16_zone_average_weight_option(defaults::ZONE_WEIGHTS)?;
        Ok(())
    }

    fn configure_dsp_defaults(&mut self) -> DriverResult<(), I> {
        self.set_bpc(defaults::DSP_BPC)?;
        self.set_wpc(defaults::DSP_WPC)?;
        self.set_dvp_pclk(defaults::DSP_DVP_PCLK)?;
        self.set_cip(defaults::DSP_CIP)?;
        self.set_dmy(defaults::DSP_DMY)?;
        self.set_raw_gma(defaults::DSP_RAW_GMA)?;
        self.set_dg(defaults::DSP_DG)?;
        self.set_awb(defaults::DSP_AWB)?;
        self.set_awb_gain(defaults::DSP_AWB_GAIN)?;
        self.set_pre(defaults::DSP_PRE)?;
        self.set_dvp_y8(defaults::DSP_DVP_Y8)?;
        self.set_jpeg_output(defaults::DSP_JPEG_OUTPUT)?;
        self.set_dvp_output_format(defaults::DSP_DVP_OUTPUT_FORMAT)?;
        self.set_dvp_jpeg_output_href_timing(defaults::DSP_JPEG_HREF_TIMING)?;
        self.set_byte_swap(defaults::DSP_BYTE_SWAP)?;
        self.set_image_horizontal(defaults::DSP_IMAGE_HORIZONTAL)?;
        self.set_image_vertical(defaults::DSP_IMAGE_VERTICAL)?;
        self.set_dcw(defaults::DSP_DCW)?;
        self.set_sde(defaults::DSP_SDE)?;
        self.set_uv_adj(defaults::DSP_UV_ADJ)?;
        self.set_uv_avg(defaults::DSP_UV_AVG)?;
        self.set_cmx(defaults::DSP_CMX)?;
        self.set_lp_dp(defaults::DSP_LP_DP)?;
        self.set_round(defaults::DSP_ROUND)?;
        self.set_vertical_divider(defaults::DSP_VERTICAL_DIVIDER)?;
        self.set_horizontal_divider(defaults::DSP_HORIZONTAL_DIVIDER)?;
        self.set_horizontal_size(defaults::DSP_HORIZONTAL_SIZE / SIZE_UNIT)?;
        self.set_vertical_size(defaults::DSP_VERTICAL_SIZE / SIZE_UNIT)?;
        self.set_offset_x(defaults::DSP_OFFSET_X)?;
        self.set_offset_y(defaults::DSP_OFFSET_Y)?;
        self.set_output_width(defaults::DSP_OUTPUT_WIDTH / SIZE_UNIT)?;
        self.set_output_height(defaults::DSP_OUTPUT_HEIGHT / SIZE_UNIT)?;
        self.set_zoom_speed(defaults::DSP_ZOOM_SPEED)?;
        self.set_quantization_scale_factor(defaults::DSP_QUANTIZATION_SCALE)?;
        self.set_sccb_master_speed(defaults::DSP_SCCB_MASTER_SPEED)?;
        self.set_address_auto_increase(defaults::DSP_ADDRESS_AUTO_INCREASE)?;
        self.set_sccb(defaults::DSP_SCCB)?;
        self.set_sccb_master_clock_delay(defaults::DSP_SCCB_CLOCK_DELAY)?;
        self.set_sccb_master_access(defaults::DSP_SCCB_ACCESS)?;
        self.set_sensor_pass_through_access(defaults::DSP_SENSOR_PASS_ACCESS)?;
        self.set_aec_enable(defaults::DSP_AEC_ENABLE)?;
        self.set_aec_sel(defaults::DSP_AEC_SEL)?;
        self.set_stat_sel(defaults::DSP_STAT_SEL)?;
        self.set_vfirst(defaults::DSP_VFIRST)?;
        self.set_yuv422(defaults::DSP_YUV422)?;
        self.set_yuv(defaults::DSP_YUV)?;
        self.set_rgb(defaults::DSP_RGB)?;
        self.set_raw(defaults::DSP_RAW)?;
        self.set_dp_selx(defaults::DSP_DP_SELX)?;
        self.set_dp_sely(defaults::DSP_DP_SELY)?;
        Ok(())
    }
}
