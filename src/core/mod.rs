pub mod camera;
pub mod field;
pub mod hud;
pub mod motion;
pub mod synth;

pub use camera::*;
pub use field::*;
pub use hud::*;
pub use motion::*;
pub use synth::*;
