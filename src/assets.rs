use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

pub const BACKGROUND_KEY: &str = "background";

/// Every image the program knows how to use, keyed the same way as the bodies.
pub const ASSET_FILES: [(&str, &str); 11] = [
    ("sun", "sun.gif"),
    ("mercury", "mercury.gif"),
    ("venus", "venus.gif"),
    ("earth", "earth.gif"),
    ("mars", "mars.gif"),
    ("jupiter", "jupiter.gif"),
    ("saturn", "saturn.gif"),
    ("uranus", "uranus.gif"),
    ("neptune", "neptune.gif"),
    ("moon", "moon.gif"),
    (BACKGROUND_KEY, "background.gif"),
];

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("missing {key}: {}", path.display())]
    Missing { key: String, path: PathBuf },

    #[error("failed to load {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[derive(Debug, Clone)]
pub struct MissingAsset {
    pub key: String,
    pub path: PathBuf,
    // Files next to where this one should be that look like it
    pub suggestions: Vec<String>,
}

/// How a body (or the background) gets drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sprite {
    Image(PathBuf),
    // A colored shape for bodies, plain black for the background
    Fallback,
}

/// Which images are on disk. Computed once at startup.
#[derive(Debug, Clone, Default)]
pub struct AssetReport {
    found: BTreeMap<String, PathBuf>,
    missing: Vec<MissingAsset>,
}

impl AssetReport {
    pub fn path(&self, key: &str) -> Option<&Path> {
        self.found.get(key).map(PathBuf::as_path)
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn expected_count(&self) -> usize {
        self.found.len() + self.missing.len()
    }

    pub fn missing(&self) -> &[MissingAsset] {
        &self.missing
    }

    pub fn counts(&self) -> (usize, usize) {
        (self.found_count(), self.expected_count())
    }

    /// Picks the image for `key` if there is one and it decodes, and the
    /// fallback otherwise.
    pub fn sprite_for(&self, key: &str) -> Sprite {
        let path = match self.path(key) {
            Some(path) => path,
            None => return Sprite::Fallback,
        };
        match check_image(path) {
            Ok(_) => Sprite::Image(path.to_owned()),
            Err(err) => {
                warn!("{}", err);
                Sprite::Fallback
            }
        }
    }
}

/// Looks for the standard images in `dir`.
pub fn resolve_assets(dir: &Path) -> AssetReport {
    let entries: Vec<_> = ASSET_FILES
        .iter()
        .map(|(key, file)| (key.to_string(), dir.join(file)))
        .collect();
    resolve(&entries)
}

pub fn resolve(entries: &[(String, PathBuf)]) -> AssetReport {
    info!("Checking image files...");
    let mut report = AssetReport::default();

    for (key, path) in entries {
        match check_asset(key, path) {
            Ok(size) => {
                info!(
                    "Found {}: {} ({:.1}KB)",
                    key,
                    path.file_name().unwrap_or_default().to_string_lossy(),
                    size as f64 / 1024.0
                );
                report.found.insert(key.clone(), path.clone());
            }
            Err(err) => {
                warn!("{}", err);
                let suggestions = similar_files(key, path);
                if !suggestions.is_empty() {
                    info!("  Found similar files: {:?}", suggestions);
                }
                report.missing.push(MissingAsset {
                    key: key.clone(),
                    path: path.clone(),
                    suggestions,
                });
            }
        }
    }

    if report.missing.is_empty() {
        info!("All {} image files found!", report.found_count());
    } else {
        warn!(
            "{} files are missing. Using colored circles as fallback.",
            report.missing.len()
        );
    }

    report
}

// Returns the size of the file in bytes
fn check_asset(key: &str, path: &Path) -> Result<u64, AssetError> {
    let missing = || AssetError::Missing {
        key: key.to_owned(),
        path: path.to_owned(),
    };

    let metadata = fs::metadata(path).map_err(|_| missing())?;
    if !metadata.is_file() {
        return Err(missing());
    }
    Ok(metadata.len())
}

fn similar_files(key: &str, path: &Path) -> Vec<String> {
    let dir = match path.parent() {
        Some(dir) => dir,
        None => return vec![],
    };
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return vec![],
    };

    let key = key.to_lowercase();
    let mut similar: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| {
            let name = name.to_lowercase();
            name.contains(&key) && name.ends_with(".gif")
        })
        .collect();
    similar.sort();
    similar
}

/// Decodes the image at `path`, to make sure it's usable before it gets handed
/// to the renderer. Returns its dimensions.
pub fn check_image(path: &Path) -> Result<(u32, u32), AssetError> {
    use image::GenericImageView;

    let image = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_owned(),
        source,
    })?;
    Ok(image.dimensions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::solar_system;

    // A scratch directory that cleans up after itself
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "rust-orrery-{}-{}",
                name,
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&dir);
            fs::create_dir_all(&dir).unwrap();
            ScratchDir(dir)
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    // A tiny image that really decodes
    fn write_png(path: &Path) {
        image::RgbaImage::new(2, 2).save(path).unwrap();
    }

    #[test]
    fn test_nothing_found() {
        let scratch = ScratchDir::new("empty");
        let report = resolve_assets(&scratch.0);
        assert_eq!(report.counts(), (0, 11));
        assert!(report.path("earth").is_none());
        assert_eq!(report.missing().len(), 11);
    }

    #[test]
    fn test_nothing_found_means_every_body_falls_back() {
        let scratch = ScratchDir::new("fallback");
        let report = resolve_assets(&scratch.0);
        for body in solar_system().bodies() {
            assert_eq!(report.sprite_for(&body.info.info_key), Sprite::Fallback);
        }
        assert_eq!(report.sprite_for(BACKGROUND_KEY), Sprite::Fallback);
    }

    #[test]
    fn test_sprites_for_some_images() {
        let scratch = ScratchDir::new("sprites");
        let earth = scratch.0.join("earth.png");
        let mars = scratch.0.join("mars.png");
        write_png(&earth);
        fs::write(&mars, b"not an image").unwrap();
        let entries = vec![
            (String::from("earth"), earth.clone()),
            (String::from("mars"), mars),
            (String::from("venus"), scratch.0.join("venus.png")),
        ];
        let report = resolve(&entries);

        assert_eq!(report.counts(), (2, 3));
        assert_eq!(report.sprite_for("earth"), Sprite::Image(earth));
        // Present but undecodable
        assert_eq!(report.sprite_for("mars"), Sprite::Fallback);
        assert_eq!(report.sprite_for("venus"), Sprite::Fallback);
    }

    #[test]
    fn test_sprites_for_all_images() {
        let scratch = ScratchDir::new("all");
        let entries: Vec<_> = ASSET_FILES
            .iter()
            .map(|(key, _)| {
                let path = scratch.0.join(format!("{}.png", key));
                write_png(&path);
                (key.to_string(), path)
            })
            .collect();
        let report = resolve(&entries);

        assert_eq!(report.counts(), (11, 11));
        for (key, path) in entries.iter() {
            assert_eq!(report.sprite_for(key), Sprite::Image(path.clone()));
        }
    }

    #[test]
    fn test_nonexistent_directory() {
        let report = resolve_assets(Path::new("/definitely/not/a/real/dir"));
        assert_eq!(report.counts(), (0, 11));
        assert!(report.missing().iter().all(|m| m.suggestions.is_empty()));
    }

    #[test]
    fn test_some_found() {
        let scratch = ScratchDir::new("some");
        fs::write(scratch.0.join("earth.gif"), b"GIF89a").unwrap();
        fs::write(scratch.0.join("sun.gif"), b"GIF89a").unwrap();
        let report = resolve_assets(&scratch.0);

        assert_eq!(report.counts(), (2, 11));
        assert_eq!(report.path("earth"), Some(scratch.0.join("earth.gif").as_path()));
        assert!(report.missing().iter().all(|m| m.key != "sun"));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let scratch = ScratchDir::new("dir");
        fs::create_dir_all(scratch.0.join("mars.gif")).unwrap();
        let report = resolve_assets(&scratch.0);
        assert!(report.path("mars").is_none());
    }

    #[test]
    fn test_suggestions() {
        let scratch = ScratchDir::new("suggest");
        fs::write(scratch.0.join("Jupiter nobg.gif"), b"").unwrap();
        fs::write(scratch.0.join("jupiter.png"), b"").unwrap();
        let report = resolve_assets(&scratch.0);

        let jupiter = report
            .missing()
            .iter()
            .find(|m| m.key == "jupiter")
            .unwrap();
        assert_eq!(jupiter.suggestions, ["Jupiter nobg.gif"]);
    }

    #[test]
    fn test_bad_image_fails_to_decode() {
        let scratch = ScratchDir::new("decode");
        let path = scratch.0.join("background.gif");
        fs::write(&path, b"definitely not a gif").unwrap();
        match check_image(&path) {
            Err(AssetError::Decode { .. }) => {}
            other => panic!("expected a decode error, got {:?}", other),
        }
    }
}
