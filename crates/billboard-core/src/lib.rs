pub mod animation;
pub mod camera;
pub mod config;
pub mod constants;
pub mod controller;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod hit;
pub mod layout;
pub mod marker;

pub use animation::*;
pub use camera::*;
pub use config::*;
pub use controller::*;
pub use engine::*;
pub use error::*;
pub use gesture::*;
pub use hit::*;
pub use layout::*;
pub use marker::*;
