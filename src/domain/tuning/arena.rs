/// Map and spawn layout for a stage.

#[derive(Debug, Clone, Copy)]
pub struct ArenaTuning {
    pub map_width: f32,
    pub map_height: f32,

    /// Viewport size around the player. Only the presentation layer uses it.
    pub vision_width: f32,
    pub vision_height: f32,

    /// Enemies placed when the world is created.
    pub enemy_count: usize,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self {
            map_width: 3000.0,
            map_height: 3000.0,
            vision_width: 500.0,
            vision_height: 500.0,
            enemy_count: 30,
        }
    }
}
