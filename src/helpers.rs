pub mod params;
pub mod views;
