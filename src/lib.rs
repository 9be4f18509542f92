pub mod color;
pub mod config;
pub mod easing;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod shape;
pub mod signal;
pub mod tween;

pub use color::Color;
pub use easing::Easing;
pub use renderer::{FrameBuffer, FrameFormat, RenderEngine, VideoEncoder};
pub use scene::{Scene, SceneDecl, Timeline};
pub use shape::{DashBar, Shape, View};
pub use signal::Signal;
pub use tween::{all, Animate};
