use crate::color::Color;
use crate::renderer::{FrameBuffer, FrameClock, Raster};
use crate::scene::SceneDecl;
use anyhow::{Context, Result};
use clap::ValueEnum;
use dashmap::DashMap;
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;

/// On-disk format for rendered frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FrameFormat {
    #[default]
    Png,
    Ppm,
}

impl FrameFormat {
    pub fn extension(self) -> &'static str {
        match self {
            FrameFormat::Png => "png",
            FrameFormat::Ppm => "ppm",
        }
    }
}

/// Timing summary for a finished render
#[derive(Debug, Clone, Copy)]
pub struct RenderStats {
    pub frames: u32,
    pub mean_ms: f32,
    pub min_ms: f32,
    pub max_ms: f32,
}

impl RenderStats {
    pub fn summary(&self) -> String {
        format!(
            "{} frames, {:.2}ms mean ({:.2}ms min, {:.2}ms max)",
            self.frames, self.mean_ms, self.min_ms, self.max_ms
        )
    }
}

/// Main rendering engine.
///
/// Frames are independent samples of the scene: each render builds a fresh
/// scene instance, seeks its timeline to the frame time and rasterizes the
/// view. That keeps frame rendering embarrassingly parallel, so the frame
/// loop fans out across the rayon pool with one scene instance per task.
pub struct RenderEngine {
    decl: SceneDecl,
    clock: FrameClock,
    width: u32,
    height: u32,
    format: FrameFormat,
}

impl RenderEngine {
    /// Create an engine for one scene at the given output size and rate
    pub fn new(decl: SceneDecl, width: u32, height: u32, fps: u32, format: FrameFormat) -> Self {
        let duration = (decl.build)().duration();
        Self {
            decl,
            clock: FrameClock::new(fps, duration),
            width,
            height,
            format,
        }
    }

    /// Render a single frame into the buffer
    pub fn render_frame(&self, frame: u32, buffer: &mut FrameBuffer) {
        buffer.clear(Color::BLACK);

        let scene = (self.decl.build)();
        scene.sample(self.clock.frame_to_time(frame));
        Raster::draw_view(buffer, scene.view.shapes());
    }

    /// Render all frames to the output directory
    pub fn render(&self, output_dir: &Path) -> Result<RenderStats> {
        std::fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create output directory: {}", output_dir.display())
        })?;

        let total_frames = self.clock.total_frames();
        let timings: DashMap<u32, f32> = DashMap::new();

        (0..total_frames)
            .into_par_iter()
            .try_for_each(|frame| -> Result<()> {
                if frame % 30 == 0 {
                    println!("  Rendering frame {}/{}", frame, total_frames);
                }

                let started = Instant::now();
                let mut buffer = FrameBuffer::new(self.width, self.height);
                self.render_frame(frame, &mut buffer);

                let filename = format!("frame_{}.{}", frame, self.format.extension());
                let path = output_dir.join(filename);
                match self.format {
                    FrameFormat::Png => buffer.save_png(&path)?,
                    FrameFormat::Ppm => buffer.save_ppm(&path)?,
                }

                timings.insert(frame, started.elapsed().as_secs_f32() * 1000.0);
                Ok(())
            })?;

        let mut min_ms = f32::INFINITY;
        let mut max_ms = 0.0_f32;
        let mut sum_ms = 0.0_f32;
        for entry in timings.iter() {
            min_ms = min_ms.min(*entry.value());
            max_ms = max_ms.max(*entry.value());
            sum_ms += *entry.value();
        }

        Ok(RenderStats {
            frames: total_frames,
            mean_ms: sum_ms / total_frames.max(1) as f32,
            min_ms,
            max_ms,
        })
    }

    /// Get the frame clock
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Frame filename pattern for the encoder
    pub fn frame_pattern(&self, output_dir: &Path) -> String {
        format!(
            "{}/frame_%d.{}",
            output_dir.display(),
            self.format.extension()
        )
    }
}
