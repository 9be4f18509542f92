pub mod encoder;
pub mod engine;
pub mod frame_buffer;
pub mod raster;
pub mod timeline;

pub use encoder::VideoEncoder;
pub use engine::{FrameFormat, RenderEngine, RenderStats};
pub use frame_buffer::FrameBuffer;
pub use raster::Raster;
pub use timeline::FrameClock;
