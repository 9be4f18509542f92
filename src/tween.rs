use crate::color::Color;
use crate::easing::Easing;
use crate::signal::Signal;

/// Values that can be interpolated by a tween
pub trait Animatable: Clone + 'static {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Animatable for Color {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Color::lerp(*a, *b, t)
    }
}

/// A timed instruction sequence that can be positioned at any time cursor.
///
/// `seek` assumes the targeted properties are in their pre-timeline state;
/// the render engine rebuilds a scene instance before every sample, so each
/// seek interprets the instruction list from the beginning.
pub trait Animate {
    /// Total time consumed by this item
    fn duration(&self) -> f32;

    /// Apply the item at time `t` relative to its own start
    fn seek(&self, t: f32);

    fn boxed(self) -> Box<dyn Animate>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

struct TweenStep<T> {
    to: T,
    duration: f32,
    easing: Easing,
}

/// Sequence of tween steps driving a single property.
///
/// Each step animates the property from its value at the moment the step
/// begins to the step's target. A zero-duration step is an instantaneous
/// jump, which is how scenes pin a starting value before animating away
/// from it.
pub struct Tween<T: Animatable> {
    signal: Signal<T>,
    steps: Vec<TweenStep<T>>,
}

impl<T: Animatable> Signal<T> {
    /// Start a tween on this property
    pub fn tween(&self, to: T, duration: f32) -> Tween<T> {
        Tween {
            signal: self.clone(),
            steps: vec![TweenStep {
                to,
                duration: duration.max(0.0),
                easing: Easing::default(),
            }],
        }
    }
}

impl<T: Animatable> Tween<T> {
    /// Append a step continuing from wherever the previous one ends
    pub fn to(mut self, to: T, duration: f32) -> Self {
        self.steps.push(TweenStep {
            to,
            duration: duration.max(0.0),
            easing: Easing::default(),
        });
        self
    }

    /// Override the easing of the most recent step
    pub fn ease(mut self, easing: Easing) -> Self {
        if let Some(step) = self.steps.last_mut() {
            step.easing = easing;
        }
        self
    }
}

impl<T: Animatable> Animate for Tween<T> {
    fn duration(&self) -> f32 {
        self.steps.iter().map(|s| s.duration).sum()
    }

    fn seek(&self, t: f32) {
        let mut elapsed = 0.0;
        for step in &self.steps {
            if t >= elapsed + step.duration {
                // Step fully passed (zero-duration steps complete the
                // instant the cursor reaches them)
                self.signal.set(step.to.clone());
                elapsed += step.duration;
                continue;
            }
            if t <= elapsed {
                break;
            }
            let start = self.signal.get();
            let progress = step.easing.apply((t - elapsed) / step.duration);
            self.signal.set(T::lerp(&start, &step.to, progress));
            break;
        }
    }
}

/// Step that only consumes time
pub struct Wait(pub f32);

impl Animate for Wait {
    fn duration(&self) -> f32 {
        self.0.max(0.0)
    }

    fn seek(&self, _t: f32) {}
}

/// Concurrent composition of several sequences
pub struct Join {
    children: Vec<Box<dyn Animate>>,
}

/// Run all sequences concurrently; the join completes when the longest
/// child does. Children share the time cursor but have no ordering
/// guarantee between them beyond joint completion.
pub fn all(children: Vec<Box<dyn Animate>>) -> Join {
    Join { children }
}

impl Animate for Join {
    fn duration(&self) -> f32 {
        self.children
            .iter()
            .map(|c| c.duration())
            .fold(0.0, f32::max)
    }

    fn seek(&self, t: f32) {
        for child in &self.children {
            child.seek(t);
        }
    }
}
