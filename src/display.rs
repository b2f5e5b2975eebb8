//! Scoped display references for embedding images in the artifact.
//!
//! Displaying an image requires a short-lived reference to it. A
//! [`DisplayScope`] acquires one [`DisplayRef`] per image in an
//! [`AssetBundle`] and releases all of them when it goes out of scope, on
//! every exit path. Callers may also [`release`](DisplayScope::release)
//! explicitly once the artifact has been handed off.
//!
//! A reference pins the shared image bytes while it is alive and carries a
//! self-contained `data:` URI, so the artifact needs no companion files or
//! network access to render.

use crate::assets::{AssetBundle, ImageHandle};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::sync::Arc;

/// A live display reference to one image.
#[derive(Debug)]
pub struct DisplayRef {
    name: String,
    uri: String,
    // Held so the resource stays pinned for the lifetime of the scope
    _pin: Arc<[u8]>,
}

impl DisplayRef {
    fn acquire(handle: &ImageHandle) -> Self {
        let bytes = handle.bytes();
        Self {
            name: handle.name().to_string(),
            uri: format!("data:{};base64,{}", handle.mime(), BASE64.encode(&bytes[..])),
            _pin: Arc::clone(bytes),
        }
    }

    /// The display pointer to place in an `src` attribute.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// All display references for one generation pass.
#[derive(Debug)]
pub struct DisplayScope {
    poster: Option<DisplayRef>,
    stills: Vec<DisplayRef>,
    team_photos: Vec<DisplayRef>,
}

impl DisplayScope {
    /// Acquire references to every image in `assets`.
    pub fn acquire(assets: &AssetBundle) -> Self {
        let scope = Self {
            poster: assets.poster.as_ref().map(DisplayRef::acquire),
            stills: assets.stills.iter().map(DisplayRef::acquire).collect(),
            team_photos: assets.team_photos.iter().map(DisplayRef::acquire).collect(),
        };
        tracing::debug!(references = scope.len(), "acquired display references");
        scope
    }

    pub fn poster(&self) -> Option<&DisplayRef> {
        self.poster.as_ref()
    }

    pub fn stills(&self) -> &[DisplayRef] {
        &self.stills
    }

    /// Team photo at an index into [`AssetBundle::team_photos`].
    pub fn team_photo(&self, index: usize) -> Option<&DisplayRef> {
        self.team_photos.get(index)
    }

    /// Number of live references held by this scope.
    pub fn len(&self) -> usize {
        usize::from(self.poster.is_some()) + self.stills.len() + self.team_photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// End the scope now instead of at the end of the enclosing block.
    pub fn release(self) {}
}

impl Drop for DisplayScope {
    fn drop(&mut self) {
        tracing::debug!(references = self.len(), "released display references");
    }
}
