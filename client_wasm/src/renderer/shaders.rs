pub const SCENE_SHADER: &str = include_str!("scene.wgsl");
