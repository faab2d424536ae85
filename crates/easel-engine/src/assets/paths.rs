use std::path::{Path, PathBuf};

/// Environment variable overriding the asset root.
pub const ASSETS_ENV: &str = "EASEL_ASSETS";

const DEFAULT_ROOT: &str = "Assets";

/// Kind of asset, selecting its sub-directory.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AssetKind {
    Image,
    Font,
    Sound,
}

impl AssetKind {
    pub const fn dir_name(self) -> &'static str {
        match self {
            AssetKind::Image => "Images",
            AssetKind::Font => "Fonts",
            AssetKind::Sound => "SFX",
        }
    }
}

/// Resolves asset names to paths on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    root: PathBuf,
}

impl AssetPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root from `EASEL_ASSETS`, falling back to `Assets`.
    pub fn from_env() -> Self {
        match std::env::var_os(ASSETS_ENV) {
            Some(root) if !root.is_empty() => Self::new(root),
            _ => Self::new(DEFAULT_ROOT),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dir(&self, kind: AssetKind) -> PathBuf {
        self.root.join(kind.dir_name())
    }

    pub fn resolve(&self, kind: AssetKind, name: impl AsRef<Path>) -> PathBuf {
        self.dir(kind).join(name)
    }

    pub fn image(&self, name: impl AsRef<Path>) -> PathBuf {
        self.resolve(AssetKind::Image, name)
    }

    pub fn font(&self, name: impl AsRef<Path>) -> PathBuf {
        self.resolve(AssetKind::Font, name)
    }

    pub fn sound(&self, name: impl AsRef<Path>) -> PathBuf {
        self.resolve(AssetKind::Sound, name)
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let paths = AssetPaths::default();
        assert_eq!(paths.image("logo.png"), Path::new("Assets/Images/logo.png"));
        assert_eq!(paths.font("mono.ttf"), Path::new("Assets/Fonts/mono.ttf"));
        assert_eq!(paths.sound("jump.wav"), Path::new("Assets/SFX/jump.wav"));
    }

    #[test]
    fn custom_root() {
        let paths = AssetPaths::new("/srv/game");
        assert_eq!(paths.dir(AssetKind::Sound), Path::new("/srv/game/SFX"));
    }
}
