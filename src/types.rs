//! Core types shared by the component runtime and the renderer.

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function registered by components.
///
/// Runs once when the owning [`Scope`](crate::engine::Scope) is disposed.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
    }
}

impl Attr {
    /// Attributes used for section headings.
    pub const HEADING: Attr = Attr::BOLD.union(Attr::UNDERLINE);
}
