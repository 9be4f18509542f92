use crate::scene::{Scene, SceneDecl, Timeline};
use crate::shape::{DashBar, Shape, View};

pub const DECL: SceneDecl = SceneDecl {
    name: "dashline",
    summary: "Dash bar filling in from one to eight marks",
    build,
};

fn build() -> Scene {
    let mut view = View::new();

    let bar = DashBar::new(600.0, 0.0);
    bar.dashes.set(1.0);
    view.add(Shape::DashBar(bar.clone()));

    let mut timeline = Timeline::new();
    timeline.play(bar.dashes.tween(1.0, 0.0).to(8.0, 1.0));
    timeline.wait(0.5);

    Scene { view, timeline }
}
