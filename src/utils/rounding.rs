/// Rounding to a fixed number of decimal places, half away from zero.
/// Every intermediate fuel/autonomy figure in the crate goes through this
/// before being applied.
pub trait Rounded {
    fn rounded(self, places: u32) -> Self;
}

impl Rounded for f32 {
    fn rounded(self, places: u32) -> f32 {
        let factor = 10f32.powi(places as i32);
        (self * factor).round() / factor
    }
}
