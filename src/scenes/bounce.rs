use crate::color::Color;
use crate::scene::{Scene, SceneDecl, Timeline};
use crate::shape::{Circle, Shape, View};
use crate::tween::{all, Animate};

pub const DECL: SceneDecl = SceneDecl {
    name: "bounce",
    summary: "Circle sweeping side to side while its fill pulses",
    build,
};

const LILAC: Color = Color::rgb(0xf1, 0xca, 0xff);
const VIOLET: Color = Color::rgb(0xa5, 0x71, 0xf4);

fn build() -> Scene {
    let mut view = View::new();

    let circle = Circle::default();
    circle.width.set(200.0);
    circle.height.set(200.0);
    circle.fill.set(LILAC);
    view.add(Shape::Circle(circle.clone()));

    // Position and fill run concurrently and finish together at t = 2
    let mut timeline = Timeline::new();
    timeline.play(all(vec![
        circle
            .x
            .tween(300.0, 0.0)
            .to(-300.0, 1.0)
            .to(300.0, 1.0)
            .boxed(),
        circle
            .fill
            .tween(LILAC, 0.0)
            .to(VIOLET, 1.0)
            .to(LILAC, 1.0)
            .boxed(),
    ]));

    Scene { view, timeline }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle_of(scene: &Scene) -> Circle {
        match &scene.view.shapes()[0] {
            Shape::Circle(c) => c.clone(),
            _ => panic!("Expected Circle"),
        }
    }

    #[test]
    fn test_total_duration() {
        let scene = build();
        assert_eq!(scene.duration(), 2.0);
    }

    #[test]
    fn test_initial_state() {
        let scene = build();
        let circle = circle_of(&scene);

        scene.sample(0.0);
        assert_eq!(circle.x.get(), 300.0);
        assert_eq!(circle.fill.get(), LILAC);
        assert_eq!(circle.width.get(), 200.0);
        assert_eq!(circle.height.get(), 200.0);
    }

    #[test]
    fn test_turnaround_at_one() {
        let scene = build();
        let circle = circle_of(&scene);

        scene.sample(1.0);
        assert_eq!(circle.x.get(), -300.0);
        assert_eq!(circle.fill.get(), VIOLET);
    }

    #[test]
    fn test_both_tracks_complete_together() {
        let scene = build();
        let circle = circle_of(&scene);

        scene.sample(2.0);
        assert_eq!(circle.x.get(), 300.0);
        assert_eq!(circle.fill.get(), LILAC);
    }
}
