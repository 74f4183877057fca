//! Ordered registry of cube face layers.
//!
//! Insertion order is significant: the position of a layer is its face index,
//! and every lookup scans front to back so the lowest index wins ties.

use std::collections::HashSet;
use tracing::warn;

use crate::{CanonicalFace, FaceHandle, FaceLayer};

/// Registry of face layers, built once by cube construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceLayerRegistry {
    layers: Vec<FaceLayer>,
}

impl FaceLayerRegistry {
    /// Construct a registry from layers in face-index order.
    ///
    /// Duplicate handles or names are kept (the first occurrence shadows the
    /// rest during lookup) but reported.
    pub fn new(layers: Vec<FaceLayer>) -> Self {
        let mut handles = HashSet::new();
        let mut names = HashSet::new();
        for (index, layer) in layers.iter().enumerate() {
            if !handles.insert(layer.handle) {
                warn!(index, handle = %layer.handle, "Duplicate face handle in registry");
            }
            if !names.insert(layer.name.as_str()) {
                warn!(index, name = %layer.name, "Duplicate face name in registry");
            }
        }
        Self { layers }
    }

    /// The six canonical faces in priority order, with handles `0..=5`.
    pub fn standard_cube() -> Self {
        Self::new(
            CanonicalFace::PRIORITY
                .iter()
                .zip(0u64..)
                .map(|(face, id)| FaceLayer::new(FaceHandle(id), face.name()))
                .collect(),
        )
    }

    /// Number of registered layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether no layers are registered.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Look up a layer by face index.
    pub fn get(&self, index: usize) -> Option<&FaceLayer> {
        self.layers.get(index)
    }

    /// Iterate layers in face-index order.
    pub fn iter(&self) -> std::slice::Iter<'_, FaceLayer> {
        self.layers.iter()
    }

    /// Index of the first layer registered with `handle`.
    pub fn position_of_handle(&self, handle: FaceHandle) -> Option<usize> {
        self.layers.iter().position(|layer| layer.handle == handle)
    }

    /// Index of the first layer registered under `name`.
    pub fn position_of_name(&self, name: &str) -> Option<usize> {
        self.layers.iter().position(|layer| layer.name == name)
    }
}

impl<'a> IntoIterator for &'a FaceLayerRegistry {
    type Item = &'a FaceLayer;
    type IntoIter = std::slice::Iter<'a, FaceLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
