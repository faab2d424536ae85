use crate::app::Application;
use crate::assets::AssetPaths;
use crate::audio::Mixer;
use crate::time::FrameTime;
use crate::window::WindowDisplay;

/// Everything a game callback may touch.
pub struct FrameCtx<'a> {
    pub app: &'a mut Application<WindowDisplay>,
    pub mixer: &'a mut Mixer,
    pub assets: &'a AssetPaths,
    pub time: FrameTime,
}
