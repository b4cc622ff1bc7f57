//! Stylesheet and background-image loading.
//!
//! Asset problems never stop a session: anything missing or unreadable is
//! skipped and reported as a warning.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, warn};

use crate::config::AssetsConfig;

/// A background image ready to embed as a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundImage {
    /// Where the image was read from.
    pub path: PathBuf,
    /// Image subtype, e.g. `jpeg` or `png`.
    pub mime: String,
    /// Raw image bytes.
    pub data: Vec<u8>,
}

impl BackgroundImage {
    /// Image subtype for a file extension. `jpg` maps to `jpeg`.
    #[must_use]
    pub fn mime_for(path: &Path) -> String {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" => "jpeg".to_string(),
            _ => ext,
        }
    }

    /// `data:image/<mime>;base64,...`
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:image/{};base64,{}", self.mime, STANDARD.encode(&self.data))
    }

    /// Full-page background rule for the app container.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            ".stApp {{\n    background-image: url(\"{}\");\n    background-size: cover;\n    \
             background-position: center;\n    background-repeat: no-repeat;\n    \
             background-attachment: fixed;\n}}\n",
            self.data_uri()
        )
    }
}

/// Whatever assets could be loaded, plus warnings for the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedAssets {
    /// Stylesheet contents.
    pub stylesheet: Option<String>,
    /// Background image.
    pub background: Option<BackgroundImage>,
    /// Non-blocking warnings to surface to the user.
    pub warnings: Vec<String>,
}

impl LoadedAssets {
    /// Combined CSS: the stylesheet followed by the background rule.
    #[must_use]
    pub fn css(&self) -> Option<String> {
        match (&self.stylesheet, &self.background) {
            (None, None) => None,
            (stylesheet, background) => {
                let mut css = stylesheet.clone().unwrap_or_default();
                if let Some(background) = background {
                    if !css.is_empty() && !css.ends_with('\n') {
                        css.push('\n');
                    }
                    css.push_str(&background.css());
                }
                Some(css)
            }
        }
    }
}

/// Load the configured assets. Never fails.
#[must_use]
pub fn load(config: &AssetsConfig) -> LoadedAssets {
    let mut loaded = LoadedAssets::default();
    if !config.enabled {
        debug!("Asset loading disabled");
        return loaded;
    }

    if let Some(path) = &config.stylesheet {
        let path = config.resolve(path);
        match fs::read_to_string(&path) {
            Ok(css) => {
                debug!("Loaded stylesheet from {}", path.display());
                loaded.stylesheet = Some(css);
            }
            Err(err) => loaded.warn(format!(
                "Stylesheet not loaded: {} ({err}); running without it",
                path.display()
            )),
        }
    }

    if let Some(path) = &config.background_image {
        let path = config.resolve(path);
        if path.exists() {
            match fs::read(&path) {
                Ok(data) => {
                    debug!("Loaded background image from {}", path.display());
                    loaded.background = Some(BackgroundImage {
                        mime: BackgroundImage::mime_for(&path),
                        path,
                        data,
                    });
                }
                Err(err) => loaded.warn(format!(
                    "Background image unreadable: {} ({err}); running without it",
                    path.display()
                )),
            }
        } else {
            loaded.warn(format!(
                "Background image not found: {} (running without it)",
                path.display()
            ));
        }
    }

    loaded
}

impl LoadedAssets {
    /// Write the combined CSS to `path`, or to `out` when no path is given.
    ///
    /// Returns `false` (and writes nothing) when no asset was loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or `out` cannot be written.
    pub fn emit_css<W: Write>(&self, path: Option<&Path>, out: &mut W) -> crate::Result<bool> {
        let Some(css) = self.css() else {
            return Ok(false);
        };
        match path {
            Some(path) => {
                fs::write(path, &css)?;
                debug!("Wrote {} bytes of CSS to {}", css.len(), path.display());
            }
            None => out.write_all(css.as_bytes())?,
        }
        Ok(true)
    }

    fn warn(&mut self, message: String) {
        warn!("{message}");
        self.warnings.push(message);
    }
}
