//! Placeholder container for the logo model
//!
//! The group exists in the scene from startup so the render loop can
//! rotate it before (and regardless of whether) the asynchronous load
//! finishes. It gains its mesh at most once.

use crate::model::MeshData;

/// Container node that receives the loaded model.
#[derive(Debug, Default)]
pub struct ModelGroup {
    children: Vec<MeshData>,
}

impl ModelGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the loaded mesh. Returns `true` when the mesh was accepted.
    ///
    /// A second attach is refused; the loader fires once per application
    /// lifetime, so hitting this path means a wiring bug upstream.
    pub fn attach(&mut self, mesh: MeshData) -> bool {
        if self.children.is_empty() {
            self.children.push(mesh);
            true
        } else {
            tracing::warn!("model group already populated, ignoring second attach");
            false
        }
    }

    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The attached mesh, if the load has resolved.
    #[must_use]
    pub fn mesh(&self) -> Option<&MeshData> {
        self.children.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vertex;

    fn one_triangle() -> MeshData {
        MeshData {
            vertices: vec![
                Vertex {
                    position: [0.0, 0.0, 0.0],
                    normal: [0.0, 0.0, 1.0],
                    color: [1.0; 4],
                };
                3
            ],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn group_starts_empty() {
        let group = ModelGroup::new();
        assert!(group.is_empty());
        assert_eq!(group.child_count(), 0);
        assert!(group.mesh().is_none());
    }

    #[test]
    fn attach_adds_exactly_one_child() {
        let mut group = ModelGroup::new();
        assert!(group.attach(one_triangle()));
        assert_eq!(group.child_count(), 1);
    }

    #[test]
    fn second_attach_is_refused() {
        let mut group = ModelGroup::new();
        assert!(group.attach(one_triangle()));
        assert!(!group.attach(one_triangle()));
        assert_eq!(group.child_count(), 1);
    }
}
