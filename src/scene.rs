use crate::shape::View;
use crate::tween::{Animate, Wait};
use serde::Serialize;

/// Sequential choreography for one scene.
///
/// Items play back to back; a joined group (`tween::all`) counts as one item
/// and holds the cursor until its longest member completes.
#[derive(Default)]
pub struct Timeline {
    items: Vec<Box<dyn Animate>>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sequence; it starts when everything before it has finished
    pub fn play(&mut self, item: impl Animate + 'static) {
        self.items.push(Box::new(item));
    }

    /// Suspend for the given duration before the next item
    pub fn wait(&mut self, duration: f32) {
        self.items.push(Box::new(Wait(duration)));
    }

    /// Total playback duration
    pub fn duration(&self) -> f32 {
        self.items.iter().map(|i| i.duration()).sum()
    }

    /// Position the timeline at time `t`.
    ///
    /// Completed items are applied in full, the active item at its local
    /// time. Assumes the scene is in its pre-timeline state; callers that
    /// sample repeatedly rebuild the scene between seeks.
    pub fn seek(&self, t: f32) {
        let mut elapsed = 0.0;
        for item in &self.items {
            let duration = item.duration();
            if t >= elapsed + duration {
                item.seek(duration);
                elapsed += duration;
                continue;
            }
            if t > elapsed {
                item.seek(t - elapsed);
            }
            break;
        }
    }
}

/// A composed visual tree plus its choreography
pub struct Scene {
    pub view: View,
    pub timeline: Timeline,
}

impl Scene {
    pub fn duration(&self) -> f32 {
        self.timeline.duration()
    }

    /// Position all animated properties at time `t`
    pub fn sample(&self, t: f32) {
        self.timeline.seek(t);
    }
}

/// Registry entry for a named scene script
#[derive(Clone, Copy)]
pub struct SceneDecl {
    pub name: &'static str,
    pub summary: &'static str,
    pub build: fn() -> Scene,
}

/// Serializable scene description for the CLI
#[derive(Debug, Serialize)]
pub struct SceneInfo {
    pub name: String,
    pub summary: String,
    pub duration: f32,
    pub shapes: usize,
}

impl SceneDecl {
    pub fn info(&self) -> SceneInfo {
        let scene = (self.build)();
        SceneInfo {
            name: self.name.to_string(),
            summary: self.summary.to_string(),
            duration: scene.duration(),
            shapes: scene.view.shapes().len(),
        }
    }
}
