//! Headless end-to-end: window, texture, text and sound working together.

use std::path::{Path, PathBuf};

use easel_engine::audio::{AudioEvent, RecordingBackend};
use easel_engine::{
    Application, AssetPaths, Color, GameObject, HeadlessDisplay, Loops, Mixer, MixerConfig, Rect,
    Sfx, Text, TextStyle, Texture, Vec2, WindowConfig,
};
use image::{Rgba, RgbaImage};

struct Assets {
    _dir: tempfile::TempDir,
    paths: AssetPaths,
}

fn system_font() -> Option<PathBuf> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .find(|p| p.is_file())
}

fn write_png(dir: &Path, name: &str, w: u32, h: u32, px: [u8; 4]) {
    RgbaImage::from_pixel(w, h, Rgba(px)).save(dir.join(name)).unwrap();
}

fn assets() -> Assets {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    for sub in ["Images", "Fonts", "SFX"] {
        std::fs::create_dir_all(root.join(sub)).unwrap();
    }
    write_png(&root.join("Images"), "icon.png", 8, 8, [255, 255, 255, 255]);
    write_png(&root.join("Images"), "logo.png", 20, 10, [0, 200, 0, 255]);
    std::fs::write(root.join("SFX").join("blip.wav"), b"stub clip").unwrap();

    if let Some(font) = system_font() {
        std::fs::copy(font, root.join("Fonts").join("body.ttf")).unwrap();
    }

    Assets { paths: AssetPaths::new(root), _dir: dir }
}

#[test]
fn logo_at_default_transform_matches_file() {
    let a = assets();
    let mut logo = Texture::new(&a.paths, "logo.png", 1.0).unwrap();

    logo.reset_rect().unwrap();

    assert_eq!(logo.surface().size(), (20, 10));
    assert_eq!(logo.rect(), Rect::new(0, 0, 20, 10));
}

#[test]
fn drawn_frame_reaches_display() {
    let a = assets();
    let config = WindowConfig::new("icon.png", 64, 48, "Frame test");
    let mut app = Application::new(HeadlessDisplay::new(), &config, &a.paths).unwrap();
    let mut logo = Texture::new(&a.paths, "logo.png", 0.5).unwrap();

    logo.transform.position = Vec2::new(4.0, 6.0);
    logo.draw(app.screen_mut()).unwrap();
    app.present().unwrap();

    let frame = app.display().last_frame().unwrap();
    assert_eq!(frame.size(), (64, 48));
    assert_eq!(frame.pixel(4, 6), Some(Color::rgb(0, 200, 0)));
    assert_eq!(frame.pixel(13, 10), Some(Color::rgb(0, 200, 0)));
    assert_eq!(frame.pixel(14, 6), Some(Color::BLACK));
    assert_eq!(frame.pixel(3, 6), Some(Color::BLACK));
}

#[test]
fn moving_text_between_draws_is_not_stale() {
    let a = assets();
    if system_font().is_none() {
        return;
    }
    let style = TextStyle { fill: Color::WHITE, ..TextStyle::default() };
    let mut label = Text::new("Hello", &a.paths, "body.ttf", 0.5, style).unwrap();
    let mut screen = easel_engine::Surface::new(300, 100);

    label.draw(&mut screen).unwrap();
    let first = label.rect();

    label.transform.position = Vec2::new(100.0, 20.0);
    label.draw(&mut screen).unwrap();
    let second = label.rect();

    assert_eq!((first.x, first.y), (0, 0));
    assert_eq!((second.x, second.y), (100, 20));
    assert_eq!((first.w, first.h), (second.w, second.h));
}

#[test]
fn sound_loops_and_music_volume_are_independent() {
    let a = assets();
    let rec = RecordingBackend::new(MixerConfig::default().voices);
    let mut mixer = Mixer::with_backend(MixerConfig::default(), rec.clone());
    let mut blip = Sfx::new(&mixer, &a.paths, "blip.wav").unwrap();

    blip.set_music_volume(&mut mixer, 0.5);
    let channel = blip.play(&mut mixer, Loops::from(2), 1.0).unwrap();

    assert!(channel.is_some());
    assert_eq!(rec.total_plays(), Some(3));
    assert_eq!(mixer.music_volume(), 0.5);
    assert!(rec
        .log()
        .borrow()
        .iter()
        .any(|e| matches!(e, AudioEvent::Play { volume, .. } if *volume == 1.0)));
}
