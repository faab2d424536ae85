use anyhow::Result;

use easel_engine::core::{AppControl, FrameCtx, Game};
use easel_engine::logging::{init_logging, LoggingConfig};
use easel_engine::window::{Runtime, RuntimeConfig};
use easel_engine::{Color, DisplayFlags, GameObject, Loops, Sfx, SourcePolicy, Text, TextStyle, Texture, Vec2, WindowConfig};

/// Bouncing logo with a hit counter, background music and a blip per bounce.
///
/// Expects `Assets/Images/{icon,logo}.png`, `Assets/Fonts/body.ttf` and
/// `Assets/SFX/{music.ogg,blip.wav}` (root overridable with `EASEL_ASSETS`).
#[derive(Default)]
struct Bounce {
    logo: Option<Texture>,
    counter: Option<Text>,
    blip: Option<Sfx>,
    velocity: Vec2,
    bounces: u32,
}

impl Game for Bounce {
    fn start(&mut self, ctx: &mut FrameCtx<'_>) -> Result<()> {
        let logo = Texture::from_path(ctx.assets.image("logo.png"), 2.0, SourcePolicy::KeepDecoded)?;
        let style = TextStyle { fill: Color::WHITE, anti_alias: true, ..TextStyle::default() };
        let counter = Text::new("Bounces: 0", ctx.assets, "body.ttf", 0.5, style)?;

        let music = Sfx::new(ctx.mixer, ctx.assets, "music.ogg")?;
        music.set_music_volume(ctx.mixer, 0.4);
        music.load_music(ctx.mixer, Loops::Forever)?;

        self.blip = Some(Sfx::new(ctx.mixer, ctx.assets, "blip.wav")?);
        self.logo = Some(logo);
        self.counter = Some(counter);
        self.velocity = Vec2::new(180.0, 120.0);
        Ok(())
    }

    fn frame(&mut self, ctx: &mut FrameCtx<'_>) -> Result<AppControl> {
        let (Some(logo), Some(counter)) = (self.logo.as_mut(), self.counter.as_mut()) else {
            return Ok(AppControl::Continue);
        };

        let (w, h) = (ctx.app.width as f32, ctx.app.height as f32);
        let size = logo.rect();
        let t = logo.transform_mut();
        t.position = t.position + self.velocity * ctx.time.dt;

        let mut bounced = false;
        if t.position.x < 0.0 || t.position.x + size.w as f32 > w {
            self.velocity.x = -self.velocity.x;
            t.position.x = t.position.x.clamp(0.0, (w - size.w as f32).max(0.0));
            bounced = true;
        }
        if t.position.y < 0.0 || t.position.y + size.h as f32 > h {
            self.velocity.y = -self.velocity.y;
            t.position.y = t.position.y.clamp(0.0, (h - size.h as f32).max(0.0));
            bounced = true;
        }

        if bounced {
            self.bounces += 1;
            counter.set_text(format!("Bounces: {}", self.bounces));
            if let Some(blip) = self.blip.as_mut() {
                blip.play(ctx.mixer, Loops::ONCE, 0.8)?;
            }
        }

        let screen = ctx.app.screen_mut();
        screen.fill(Color::rgb(24, 26, 32));
        logo.draw(screen)?;
        counter.transform.position = Vec2::new(12.0, 8.0);
        counter.draw(screen)?;

        Ok(AppControl::Continue)
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        window: WindowConfig::new("icon.png", 800, 600, "easel studio").with_flags(DisplayFlags::RESIZABLE),
        ..RuntimeConfig::default()
    };

    log::info!("assets root: {}", config.assets.root().display());
    Runtime::run(config, Bounce::default())
}
