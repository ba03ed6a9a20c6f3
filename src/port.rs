//! Port descriptors for system inputs and outputs.

use serde::{Deserialize, Serialize};

/// Kind of data carried by a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDataKind {
    /// A fixed-width vector of scalars.
    Vector,
    /// An opaque, application-defined value.
    Abstract,
}

/// Declared shape of an output port.
///
/// Descriptors are fixed at configuration time; storage allocated from them
/// never resizes during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortDescriptor {
    width: usize,
    kind: PortDataKind,
}

impl PortDescriptor {
    /// Create a descriptor with an explicit data kind.
    pub fn new(width: usize, kind: PortDataKind) -> Self {
        Self { width, kind }
    }

    /// Create a vector-valued descriptor of the given width.
    pub fn vector(width: usize) -> Self {
        Self::new(width, PortDataKind::Vector)
    }

    /// Create an abstract-valued descriptor.
    pub fn abstract_valued() -> Self {
        Self::new(0, PortDataKind::Abstract)
    }

    /// Declared vector width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Declared data kind.
    pub fn kind(&self) -> PortDataKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_descriptor() {
        let d = PortDescriptor::vector(3);
        assert_eq!(d.width(), 3);
        assert_eq!(d.kind(), PortDataKind::Vector);
    }

    #[test]
    fn test_abstract_descriptor() {
        let d = PortDescriptor::abstract_valued();
        assert_eq!(d.kind(), PortDataKind::Abstract);
    }
}
