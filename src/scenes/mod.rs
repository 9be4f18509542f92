mod bounce;
mod dashline;

use crate::scene::SceneDecl;

/// Every scene script shipped with the engine
pub fn registry() -> Vec<SceneDecl> {
    vec![bounce::DECL, dashline::DECL]
}

/// Look up a scene by name
pub fn find(name: &str) -> Option<SceneDecl> {
    registry().into_iter().find(|decl| decl.name == name)
}
