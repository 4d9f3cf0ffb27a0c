pub mod rounding;
pub mod standings;
pub mod text;
