pub mod dashboard;
pub mod downloads;
pub mod events;
pub mod forecasts;
pub mod health;
pub mod kpis;
pub mod overview;
pub mod trends;
