//! Register definitions for the OV2640
//!
//! The OV2640 exposes two register banks over a single 8-bit address space.
//! Bit 0 of the selector register at `0xFF` chooses which bank the remaining
//! addresses refer to:
//!
//! - **DSP bank** (`0xFF` bit 0 = 0): image pipeline, output formatting, SCCB
//!   slave control and the embedded microcontroller
//! - **Sensor bank** (`0xFF` bit 0 = 1): array timing, exposure, gain and
//!   windowing
//!
//! All registers use `ALLOW_ADDRESS_OVERLAP = true` because both banks share
//! the same addresses. Registers wider than 8 bits are accessed byte by byte
//! (see [`SccbInterface`](crate::SccbInterface)), with the lowest address
//! holding the most significant byte.

device_driver::create_device!(
    device_name: Ov2640,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        // ==================== SENSOR BANK ====================

        /// GAIN - AGC gain control LSBs (Sensor, 0x00)
        register Gain {
            const ADDRESS = 0x00;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Gain[7:0]
            gain_low: uint = 0..8,
        },

        /// COM1 - Common control 1 (Sensor, 0x03)
        register Com1 {
            const ADDRESS = 0x03;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Vertical window start line LSBs
            vstrt_low: uint = 0..2,
            /// Vertical window end line LSBs
            vend_low: uint = 2..4,
            reserved: uint = 4..6,
            /// Dummy frame control
            dummy_frame: uint = 6..8,
        },

        /// REG04 - Register 04 (Sensor, 0x04)
        register Reg04 {
            const ADDRESS = 0x04;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// AEC[1:0]
            aec_low: uint = 0..2,
            reserved: uint = 2..6,
            /// Vertical flip
            vflip: bool = 6,
            /// Horizontal mirror
            hmirror: bool = 7,
        },

        /// REG08 - Frame exposure one-pin control pre-charge row number (Sensor, 0x08)
        register Reg08 {
            const ADDRESS = 0x08;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            pre_charge_rows: uint = 0..8,
        },

        /// PIDH/PIDL - Product ID (Sensor, 0x0A-0x0B)
        /// Expected value: 0x2642
        register ProductId {
            const ADDRESS = 0x0A;
            const SIZE_BITS = 16;
            const ALLOW_ADDRESS_OVERLAP = true;

            id: uint = 0..16,
        },

        /// COM2 - Common control 2 (Sensor, 0x09)
        register Com2 {
            const ADDRESS = 0x09;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Output drive select
            output_drive: uint = 0..2,
            /// Pin PWDN/RESETB used as SLVS/SLHS
            pin_remap: bool = 2,
            reserved_low: bool = 3,
            /// Standby mode enable
            standby: bool = 4,
            reserved_high: uint = 5..8,
        },

        /// COM3 - Common control 3 (Sensor, 0x0C)
        register Com3 {
            const ADDRESS = 0x0C;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Snapshot option (0: live video after snapshot, 1: single frame)
            single_frame: bool = 0,
            /// Auto set banding
            auto_band: bool = 1,
            /// Set banding manually (0: 60 Hz, 1: 50 Hz)
            fifty_hz: bool = 2,
            reserved: uint = 3..8,
        },

        /// COM4 - Common control 4 (Sensor, 0x0D)
        register Com4 {
            const ADDRESS = 0x0D;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved_low: uint = 0..2,
            /// Clock output power-down pin status (0: tri-state, 1: last state)
            clock_pin_last_state: bool = 2,
            reserved_high: uint = 3..8,
        },

        /// AEC - Exposure value AEC[9:2] (Sensor, 0x10)
        register Aec {
            const ADDRESS = 0x10;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            aec_mid: uint = 0..8,
        },

        /// CLKRC - Clock rate control (Sensor, 0x11)
        register Clkrc {
            const ADDRESS = 0x11;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Internal clock pre-scalar
            divider: uint = 0..6,
            reserved: bool = 6,
            /// Internal frequency doubler
            double: bool = 7,
        },

        /// COM7 - Common control 7 (Sensor, 0x12)
        register Com7 {
            const ADDRESS = 0x12;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved_low: bool = 0,
            /// Color bar test pattern
            color_bar: bool = 1,
            /// Zoom mode
            zoom: bool = 2,
            reserved_mid: bool = 3,
            /// Resolution selection
            resolution: uint = 4..7,
            /// Initiates system reset, auto-cleared
            srst: bool = 7,
        },

        /// COM8 - Common control 8 (Sensor, 0x13)
        register Com8 {
            const ADDRESS = 0x13;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Exposure control (0: manual, 1: auto)
            aec_auto: bool = 0,
            reserved_low: bool = 1,
            /// AGC control (0: manual, 1: auto)
            agc_auto: bool = 2,
            reserved_mid: uint = 3..5,
            /// Banding filter selection
            band_filter: bool = 5,
            reserved_high: uint = 6..8,
        },

        /// COM9 - Common control 9 (Sensor, 0x14)
        register Com9 {
            const ADDRESS = 0x14;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved: uint = 0..5,
            /// AGC gain ceiling
            agc_ceiling: uint = 5..8,
        },

        /// COM10 - Common control 10 (Sensor, 0x15)
        register Com10 {
            const ADDRESS = 0x15;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// HSYNC polarity (1: negative)
            hsync_negative: bool = 0,
            /// VSYNC polarity (1: negative)
            vsync_negative: bool = 1,
            reserved: bool = 2,
            /// HREF polarity (1: negative)
            href_negative: bool = 3,
            /// PCLK output edge (1: rising)
            pclk_rising: bool = 4,
            /// PCLK output qualified by HREF
            pclk_qualified: bool = 5,
            /// HREF changed to CHSYNC
            href_to_chsync: bool = 6,
            /// CHSYNC pin output swapped to HREF
            chsync_to_href: bool = 7,
        },

        /// HREFST - Horizontal window start MSBs (Sensor, 0x17)
        register Hrefst {
            const ADDRESS = 0x17;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// HREFST[10:3]
            start_high: uint = 0..8,
        },

        /// HREFEND - Horizontal window end MSBs (Sensor, 0x18)
        register Hrefend {
            const ADDRESS = 0x18;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// HREFEND[10:3]
            end_high: uint = 0..8,
        },

        /// VSTRT - Vertical window line start MSBs (Sensor, 0x19)
        register Vstrt {
            const ADDRESS = 0x19;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// VSTRT[9:2]
            start_high: uint = 0..8,
        },

        /// VEND - Vertical window line end MSBs (Sensor, 0x1A)
        register Vend {
            const ADDRESS = 0x1A;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// VEND[9:2]
            end_high: uint = 0..8,
        },

        /// MIDH/MIDL - Manufacturer ID (Sensor, 0x1C-0x1D)
        /// Expected value: 0x7FA2
        register ManufacturerId {
            const ADDRESS = 0x1C;
            const SIZE_BITS = 16;
            const ALLOW_ADDRESS_OVERLAP = true;

            id: uint = 0..16,
        },

        /// AEW - Luminance signal high range for AEC/AGC (Sensor, 0x24)
        register Aew {
            const ADDRESS = 0x24;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            high_range: uint = 0..8,
        },

        /// AEB - Luminance signal low range for AEC/AGC (Sensor, 0x25)
        register Aeb {
            const ADDRESS = 0x25;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            low_range: uint = 0..8,
        },

        /// VV - Fast mode large step range thresholds (Sensor, 0x26)
        register Vv {
            const ADDRESS = 0x26;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Low threshold
            low: uint = 0..4,
            /// High threshold
            high: uint = 4..8,
        },

        /// REG2A - Line interval and HSYNC MSBs (Sensor, 0x2A)
        register FrameRateMsb {
            const ADDRESS = 0x2A;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// HSYNC start point MSBs
            hsync_start_high: uint = 0..2,
            /// HSYNC end point MSBs
            hsync_end_high: uint = 2..4,
            /// Line interval adjustment MSBs
            line_interval_high: uint = 4..8,
        },

        /// FRARL - Line interval adjustment LSBs (Sensor, 0x2B)
        register Frarl {
            const ADDRESS = 0x2B;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            line_interval_low: uint = 0..8,
        },

        /// ADDVSL - VSYNC pulse width LSBs (Sensor, 0x2D)
        register Addvsl {
            const ADDRESS = 0x2D;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            width_low: uint = 0..8,
        },

        /// ADDVSH - VSYNC pulse width MSBs (Sensor, 0x2E)
        register Addvsh {
            const ADDRESS = 0x2E;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            width_high: uint = 0..8,
        },

        /// YAVG - Luminance average (Sensor, 0x2F)
        register Yavg {
            const ADDRESS = 0x2F;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            average: uint = 0..8,
        },

        /// HSYST - HSYNC position and width start point LSBs (Sensor, 0x30)
        register Hsyst {
            const ADDRESS = 0x30;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            start_low: uint = 0..8,
        },

        /// HSYEN - HSYNC position and width end point LSBs (Sensor, 0x31)
        register Hsyen {
            const ADDRESS = 0x31;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            end_low: uint = 0..8,
        },

        /// REG32 - Pixel clock divider and horizontal window LSBs (Sensor, 0x32)
        register Reg32 {
            const ADDRESS = 0x32;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// HREFST[2:0]
            href_start_low: uint = 0..3,
            /// HREFEND[2:0]
            href_end_low: uint = 3..6,
            /// Pixel clock divide option
            pclk: uint = 6..8,
        },

        /// ARCOM2 - Zoom window horizontal start point (Sensor, 0x34)
        register Arcom2 {
            const ADDRESS = 0x34;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved_low: uint = 0..2,
            zoom_horizontal_start: bool = 2,
            reserved_high: uint = 3..8,
        },

        /// REG45 - AGC and AEC MSBs (Sensor, 0x45)
        register Reg45 {
            const ADDRESS = 0x45;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// AEC[15:10]
            aec_high: uint = 0..6,
            /// Gain[9:8]
            gain_high: uint = 6..8,
        },

        /// FLL - Frame length adjustment LSBs (Sensor, 0x46)
        register Fll {
            const ADDRESS = 0x46;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            length_low: uint = 0..8,
        },

        /// FLH - Frame length adjustment MSBs (Sensor, 0x47)
        register Flh {
            const ADDRESS = 0x47;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            length_high: uint = 0..2,
            reserved: uint = 2..8,
        },

        /// COM19 - Zoom mode vertical window start point LSBs (Sensor, 0x48)
        register Com19 {
            const ADDRESS = 0x48;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            zoom_start_low: uint = 0..2,
            reserved: uint = 2..8,
        },

        /// ZOOMS - Zoom mode vertical window start point MSBs (Sensor, 0x49)
        register Zooms {
            const ADDRESS = 0x49;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            zoom_start_high: uint = 0..8,
        },

        /// COM22 - Flash light control (Sensor, 0x4B)
        register Com22 {
            const ADDRESS = 0x4B;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            flash_light: uint = 0..8,
        },

        /// COM25 - Banding AEC MSBs (Sensor, 0x4E)
        register Com25 {
            const ADDRESS = 0x4E;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved: uint = 0..4,
            /// 60 Hz banding AEC MSBs
            sixty_high: uint = 4..6,
            /// 50 Hz banding AEC MSBs
            fifty_high: uint = 6..8,
        },

        /// BD50 - 50 Hz banding AEC LSBs (Sensor, 0x4F)
        register Bd50 {
            const ADDRESS = 0x4F;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            fifty_low: uint = 0..8,
        },

        /// BD60 - 60 Hz banding AEC LSBs (Sensor, 0x50)
        register Bd60 {
            const ADDRESS = 0x50;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            sixty_low: uint = 0..8,
        },

        /// REG5D - 16-zone average weight, zones 1-4 (Sensor, 0x5D)
        register ZoneWeightByte0 {
            const ADDRESS = 0x5D;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            weight: uint = 0..8,
        },

        /// REG5E - 16-zone average weight, zones 5-8 (Sensor, 0x5E)
        register ZoneWeightByte1 {
            const ADDRESS = 0x5E;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            weight: uint = 0..8,
        },

        /// REG5F - 16-zone average weight, zones 9-12 (Sensor, 0x5F)
        register ZoneWeightByte2 {
            const ADDRESS = 0x5F;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            weight: uint = 0..8,
        },

        /// REG60 - 16-zone average weight, zones 13-16 (Sensor, 0x60)
        register ZoneWeightByte3 {
            const ADDRESS = 0x60;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            weight: uint = 0..8,
        },

        /// HISTO_LOW - Histogram algorithm low level (Sensor, 0x61)
        register HistogramLow {
            const ADDRESS = 0x61;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            level: uint = 0..8,
        },

        /// HISTO_HIGH - Histogram algorithm high level (Sensor, 0x62)
        register HistogramHigh {
            const ADDRESS = 0x62;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            level: uint = 0..8,
        },

        // ==================== DSP BANK ====================

        /// R_BYPASS - DSP bypass control (DSP, 0x05)
        register RBypass {
            const ADDRESS = 0x05;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Bypass DSP (select sensor data directly)
            bypass: bool = 0,
            reserved: uint = 1..8,
        },

        /// QS - Quantization scale factor (DSP, 0x44)
        register Qs {
            const ADDRESS = 0x44;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            scale: uint = 0..8,
        },

        /// CTRLI - Down-sampling control (DSP, 0x50)
        register Ctrli {
            const ADDRESS = 0x50;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Horizontal divider
            h_divider: uint = 0..3,
            /// Vertical divider
            v_divider: uint = 3..6,
            /// Round
            round: bool = 6,
            /// LP_DP
            lp_dp: bool = 7,
        },

        /// HSIZE - Horizontal size LSBs, in units of 4 pixels (DSP, 0x51)
        register Hsize {
            const ADDRESS = 0x51;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            size_low: uint = 0..8,
        },

        /// VSIZE - Vertical size LSBs, in units of 4 lines (DSP, 0x52)
        register Vsize {
            const ADDRESS = 0x52;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            size_low: uint = 0..8,
        },

        /// XOFFL - Horizontal offset LSBs (DSP, 0x53)
        register Xoffl {
            const ADDRESS = 0x53;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            offset_low: uint = 0..8,
        },

        /// YOFFL - Vertical offset LSBs (DSP, 0x54)
        register Yoffl {
            const ADDRESS = 0x54;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            offset_low: uint = 0..8,
        },

        /// VHYX - Size and offset MSBs (DSP, 0x55)
        register Vhyx {
            const ADDRESS = 0x55;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// XOFF[10:8]
            x_offset_high: uint = 0..3,
            /// HSIZE[8]
            h_size_bit_eight: bool = 3,
            /// YOFF[10:8]
            y_offset_high: uint = 4..7,
            /// VSIZE[8]
            v_size_bit_eight: bool = 7,
        },

        /// DPRP - DP_SELX/DP_SELY (DSP, 0x56)
        register Dprp {
            const ADDRESS = 0x56;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            dp_selx: uint = 0..4,
            dp_sely: uint = 4..8,
        },

        /// TEST - Horizontal size bit 9 (DSP, 0x57)
        register Test {
            const ADDRESS = 0x57;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved: uint = 0..7,
            /// HSIZE[9]
            h_size_bit_nine: bool = 7,
        },

        /// ZMOW - Output width LSBs, in units of 4 pixels (DSP, 0x5A)
        register Zmow {
            const ADDRESS = 0x5A;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            width_low: uint = 0..8,
        },

        /// ZMOH - Output height LSBs, in units of 4 lines (DSP, 0x5B)
        register Zmoh {
            const ADDRESS = 0x5B;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            height_low: uint = 0..8,
        },

        /// ZMHH - Zoom speed and output size MSBs (DSP, 0x5C)
        register Zmhh {
            const ADDRESS = 0x5C;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// OUTW[9:8]
            width_high: uint = 0..2,
            /// OUTH[8]
            height_high: bool = 2,
            reserved: bool = 3,
            /// Zoom speed
            zoom_speed: uint = 4..8,
        },

        /// BPADDR - SDE indirect register address (DSP, 0x7C)
        register Bpaddr {
            const ADDRESS = 0x7C;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            address: uint = 0..8,
        },

        /// BPDATA - SDE indirect register data (DSP, 0x7D)
        register Bpdata {
            const ADDRESS = 0x7D;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            data: uint = 0..8,
        },

        /// CTRL2 - Module enables (DSP, 0x86)
        register Ctrl2 {
            const ADDRESS = 0x86;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Color matrix
            cmx: bool = 0,
            reserved_low: bool = 1,
            /// UV average
            uv_avg: bool = 2,
            /// UV adjust
            uv_adj: bool = 3,
            /// Special digital effects
            sde: bool = 4,
            /// Down-sizing (DCW)
            dcw: bool = 5,
            reserved_high: uint = 6..8,
        },

        /// CTRL3 - Pixel correction enables (DSP, 0x87)
        register Ctrl3 {
            const ADDRESS = 0x87;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved: uint = 0..6,
            /// White pixel correction
            wpc: bool = 6,
            /// Black pixel correction
            bpc: bool = 7,
        },

        /// SIZEL - Image size LSBs (DSP, 0x8C)
        register Sizel {
            const ADDRESS = 0x8C;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// VSIZE[2:0]
            v_size_low: uint = 0..3,
            /// HSIZE[2:0]
            h_size_low: uint = 3..6,
            /// HSIZE[11]
            h_size_top: bool = 6,
            reserved: bool = 7,
        },

        /// HSIZE8 - Image horizontal size [10:3] (DSP, 0xC0)
        register Hsize8 {
            const ADDRESS = 0xC0;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            size_mid: uint = 0..8,
        },

        /// VSIZE8 - Image vertical size [10:3] (DSP, 0xC1)
        register Vsize8 {
            const ADDRESS = 0xC1;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            size_mid: uint = 0..8,
        },

        /// CTRL0 - Module and format enables (DSP, 0xC2)
        register Ctrl0 {
            const ADDRESS = 0xC2;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            raw: bool = 0,
            rgb: bool = 1,
            yuv: bool = 2,
            /// YUV422 enable
            yuv_four_two_two: bool = 3,
            vfirst: bool = 4,
            stat_sel: bool = 5,
            aec_sel: bool = 6,
            aec_en: bool = 7,
        },

        /// CTRL1 - Module enables (DSP, 0xC3)
        register Ctrl1 {
            const ADDRESS = 0xC3;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            pre: bool = 0,
            lenc: bool = 1,
            awb_gain: bool = 2,
            awb: bool = 3,
            dg: bool = 4,
            raw_gma: bool = 5,
            dmy: bool = 6,
            cip: bool = 7,
        },

        /// R_DVP_SP - DVP output speed control (DSP, 0xD3)
        register RDvpSp {
            const ADDRESS = 0xD3;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// DVP PCLK divider
            pclk: uint = 0..7,
            /// Auto mode
            auto_mode: bool = 7,
        },

        /// IMAGE_MODE - Output format control (DSP, 0xDA)
        register ImageMode {
            const ADDRESS = 0xDA;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Byte swap for YUV422 (1: high byte first UVUV)
            byte_swap: bool = 0,
            /// HREF timing select in JPEG mode
            href_timing: bool = 1,
            /// DVP output format
            output_format: uint = 2..4,
            /// JPEG output enable
            jpeg: bool = 4,
            reserved_low: bool = 5,
            /// Y8 enable for DVP
            y_eight: bool = 6,
            reserved_high: bool = 7,
        },

        /// RESET - Module resets (DSP, 0xE0)
        register DspReset {
            const ADDRESS = 0xE0;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            cif: bool = 0,
            ipu: bool = 1,
            dvp: bool = 2,
            reserved_low: bool = 3,
            jpeg: bool = 4,
            sccb: bool = 5,
            microcontroller: bool = 6,
            reserved_high: bool = 7,
        },

        /// MS_SP - SCCB master speed (DSP, 0xF0)
        register MsSp {
            const ADDRESS = 0xF0;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            speed: uint = 0..8,
        },

        /// SS_ID - SCCB slave ID (DSP, 0xF7)
        register SsId {
            const ADDRESS = 0xF7;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            id: uint = 0..8,
        },

        /// SS_CTRL - SCCB slave control (DSP, 0xF8)
        register SsCtrl {
            const ADDRESS = 0xF8;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Sensor pass-through access
            pass_through: bool = 0,
            /// SCCB master access
            master_access: bool = 1,
            /// Delay SCCB master clock
            master_clock_delay: bool = 2,
            /// SCCB enable
            sccb: bool = 3,
            reserved_low: bool = 4,
            /// Address auto-increase enable
            auto_increase: bool = 5,
            reserved_high: uint = 6..8,
        },

        /// MC_BIST - Microcontroller built-in self test (DSP, 0xF9)
        register McBist {
            const ADDRESS = 0xF9;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            bist: uint = 0..8,
        },

        /// MC_AL - Program memory pointer address LSBs (DSP, 0xFA)
        register McAl {
            const ADDRESS = 0xFA;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            address_low: uint = 0..8,
        },

        /// MC_AH - Program memory pointer address MSBs (DSP, 0xFB)
        register McAh {
            const ADDRESS = 0xFB;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            address_high: uint = 0..8,
        },

        /// MC_D - Program memory pointer access address (DSP, 0xFC)
        register McD {
            const ADDRESS = 0xFC;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            data: uint = 0..8,
        },

        /// P_CMD - SCCB protocol command register (DSP, 0xFD)
        register PCmd {
            const ADDRESS = 0xFD;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            command: uint = 0..8,
        },

        /// P_STATUS - SCCB protocol status register (DSP, 0xFE)
        register PStatus {
            const ADDRESS = 0xFE;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            status: uint = 0..8,
        },
    }
);
