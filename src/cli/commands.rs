pub mod export;
pub mod serve;

pub use export::export;
pub use serve::serve;
