/// Packed ARGB color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Per-channel linear interpolation toward `end`, truncating each channel
    /// the way integer argb evaluators do.
    pub fn lerp(self, end: Color, fraction: f32) -> Color {
        let channel = |start: u8, end: u8| -> u8 {
            let start = start as i32;
            let end = end as i32;
            (start + (fraction * (end - start) as f32) as i32) as u8
        };
        Color::from_argb(
            channel(self.alpha(), end.alpha()),
            channel(self.red(), end.red()),
            channel(self.green(), end.green()),
            channel(self.blue(), end.blue()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_round_trip() {
        let color = Color::from_argb(0xff, 0x12, 0x34, 0x56);
        assert_eq!(color.0, 0xff12_3456);
        assert_eq!(color.alpha(), 0xff);
        assert_eq!(color.red(), 0x12);
        assert_eq!(color.green(), 0x34);
        assert_eq!(color.blue(), 0x56);
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let start = Color(0xff00_0000);
        let end = Color(0xffff_ffff);
        assert_eq!(start.lerp(end, 0.0), start);
        assert_eq!(start.lerp(end, 1.0), end);
    }

    #[test]
    fn lerp_midpoint_truncates_per_channel() {
        let start = Color::from_argb(0xff, 0x00, 0x64, 0xff);
        let end = Color::from_argb(0xff, 0x64, 0x00, 0xff);
        let mid = start.lerp(end, 0.5);
        assert_eq!(mid, Color::from_argb(0xff, 0x32, 0x32, 0xff));
    }
}
