pub mod color;
pub mod constants;
pub mod export;
pub mod generator;
pub mod preset;
pub mod shape;
pub mod state;
pub mod svg;

pub use color::*;
pub use constants::*;
pub use export::*;
pub use generator::*;
pub use preset::*;
pub use shape::*;
pub use state::*;
pub use svg::*;
