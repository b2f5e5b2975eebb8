//! Image assets: the poster, production stills, and team photos.
//!
//! The engine never owns image data. Each upload is an [`ImageHandle`], a
//! cheap-to-clone reference to shared bytes plus what the `image` crate could
//! learn from sniffing them (format and pixel size). Handles are grouped in an
//! [`AssetBundle`] that travels next to the [`ProjectConfig`](crate::types::ProjectConfig).
//!
//! ## Project Layout
//!
//! [`AssetBundle::load`] reads the folders the wizard fills in:
//!
//! ```text
//! my-film/
//! ├── film_config.json
//! ├── epk.toml                       # Engine settings (optional)
//! └── assets/images/
//!     ├── posters/                   # First image by file name is the poster
//!     ├── stills/                    # Gallery, in file name order
//!     ├── cast/                      # Team photos
//!     ├── crew/                      # Team photos
//!     └── logos/
//! ```
//!
//! Loading is the only fallible step in the engine. Once a bundle exists,
//! validation and generation cannot fail.

use crate::naming;
use crate::types::{TeamMember, filled};
use image::{ImageFormat, ImageReader};
use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

pub const POSTERS_DIR: &str = "assets/images/posters";
pub const STILLS_DIR: &str = "assets/images/stills";
pub const CAST_DIR: &str = "assets/images/cast";
pub const CREW_DIR: &str = "assets/images/crew";

/// Folders created by [`setup_project`].
pub const PROJECT_FOLDERS: &[&str] = &[
    POSTERS_DIR,
    STILLS_DIR,
    CAST_DIR,
    CREW_DIR,
    "assets/images/logos",
    "output/html",
];

/// Extensions accepted as images, with the format they imply.
const IMAGE_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("webp", ImageFormat::WebP),
];

const FALLBACK_MIME: &str = "application/octet-stream";

/// Format implied by a file name's extension, if it is one we accept.
fn format_from_name(name: &str) -> Option<ImageFormat> {
    let ext = Path::new(name).extension()?.to_str()?;
    IMAGE_CANDIDATES
        .iter()
        .find(|(candidate, _)| ext.eq_ignore_ascii_case(candidate))
        .map(|(_, format)| *format)
}

/// Is this a file the loader should pick up?
pub fn is_supported_image(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| format_from_name(n).is_some())
}

/// An opaque, shared reference to one uploaded image.
///
/// Cloning a handle shares the bytes; it never copies them.
#[derive(Clone)]
pub struct ImageHandle {
    name: String,
    mime: &'static str,
    dimensions: Option<(u32, u32)>,
    bytes: Arc<[u8]>,
}

impl ImageHandle {
    /// Wrap bytes already in memory (e.g. an upload buffer).
    ///
    /// The format is sniffed from the bytes, falling back to the extension
    /// of `name`. Dimensions are read from the image header without a full
    /// decode; undecodable data simply has no dimensions.
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let name = name.into();
        let bytes: Arc<[u8]> = bytes.into();

        let format = image::guess_format(&bytes)
            .ok()
            .or_else(|| format_from_name(&name));
        let mime = format.map(|f| f.to_mime_type()).unwrap_or(FALLBACK_MIME);
        let dimensions = ImageReader::new(Cursor::new(&bytes[..]))
            .with_guessed_format()
            .ok()
            .and_then(|reader| reader.into_dimensions().ok());

        Self {
            name,
            mime,
            dimensions,
            bytes,
        }
    }

    /// Read an image file from disk.
    pub fn open(path: &Path) -> Result<Self, AssetError> {
        let bytes = std::fs::read(path).map_err(|source| AssetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::from_bytes(name, bytes))
    }

    /// File name the image was uploaded under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Pixel size as `(width, height)`, when the header could be read.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    pub(crate) fn bytes(&self) -> &Arc<[u8]> {
        &self.bytes
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHandle")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("dimensions", &self.dimensions)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Every image the engine may display for one film.
#[derive(Debug, Clone, Default)]
pub struct AssetBundle {
    pub poster: Option<ImageHandle>,
    /// Production stills in gallery order.
    pub stills: Vec<ImageHandle>,
    pub team_photos: Vec<ImageHandle>,
}

impl AssetBundle {
    /// Load the bundle from a project directory (see the [module docs](self)).
    ///
    /// Missing folders are treated as empty; validation reports what that
    /// means for the press kit.
    pub fn load(project_dir: &Path) -> Result<Self, AssetError> {
        let poster = list_images(&project_dir.join(POSTERS_DIR))?
            .first()
            .map(|path| ImageHandle::open(path))
            .transpose()?;

        let stills = open_all(&list_images(&project_dir.join(STILLS_DIR))?)?;

        let mut photo_paths = list_images(&project_dir.join(CAST_DIR))?;
        photo_paths.extend(list_images(&project_dir.join(CREW_DIR))?);
        let team_photos = open_all(&photo_paths)?;

        Ok(Self {
            poster,
            stills,
            team_photos,
        })
    }

    /// Index into `team_photos` of the photo belonging to `member`.
    ///
    /// An explicit `photo` file name on the member wins; otherwise the first
    /// photo whose name starts with the member's [`naming::photo_key`].
    pub fn team_photo_index(&self, member: &TeamMember) -> Option<usize> {
        if let Some(photo) = filled(&member.photo) {
            // The wizard stores either a bare file name or a project-relative path
            let wanted = Path::new(photo)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(photo);
            return self.team_photos.iter().position(|p| p.name() == wanted);
        }
        let key = naming::photo_key(filled(&member.name)?)?;
        self.team_photos
            .iter()
            .position(|p| naming::photo_matches(p.name(), &key))
    }
}

/// Supported images directly inside `dir`, sorted by file name.
fn list_images(dir: &Path) -> Result<Vec<PathBuf>, AssetError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_supported_image(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

fn open_all(paths: &[PathBuf]) -> Result<Vec<ImageHandle>, AssetError> {
    paths.iter().map(|p| ImageHandle::open(p)).collect()
}

/// Create the standard project folder layout under `project_dir`.
pub fn setup_project(project_dir: &Path) -> Result<(), AssetError> {
    for folder in PROJECT_FOLDERS {
        std::fs::create_dir_all(project_dir.join(folder))?;
    }
    Ok(())
}
