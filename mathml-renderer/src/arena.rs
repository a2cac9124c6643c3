use std::fmt::Debug;

use stable_arena::DroplessArena;

use crate::layout::Node;

pub struct Arena {
    inner: DroplessArena,
}

impl Arena {
    pub fn new() -> Self {
        Arena {
            inner: DroplessArena::default(),
        }
    }

    pub fn push<'arena>(&'arena self, node: Node<'arena>) -> &'arena mut Node<'arena> {
        self.inner.alloc(node)
    }

    pub fn push_slice<'arena>(
        &'arena self,
        nodes: &[&'arena Node<'arena>],
    ) -> &'arena [&'arena Node<'arena>] {
        // `DroplessArena::alloc_slice()` panics on empty slices.
        if nodes.is_empty() {
            &[]
        } else {
            self.inner.alloc_slice(nodes)
        }
    }

    pub fn push_rows<'arena>(
        &'arena self,
        rows: &[&'arena [&'arena Node<'arena>]],
    ) -> &'arena [&'arena [&'arena Node<'arena>]] {
        // `DroplessArena::alloc_slice()` panics on empty slices.
        if rows.is_empty() {
            &[]
        } else {
            self.inner.alloc_slice(rows)
        }
    }

    pub fn alloc_str(&self, src: &str) -> &str {
        // `DroplessArena::alloc_str()` panics on empty strings.
        if src.is_empty() {
            ""
        } else {
            self.inner.alloc_str(src)
        }
    }

    #[inline]
    pub fn freeze(self) -> FrozenArena {
        FrozenArena { inner: self.inner }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

/// A frozen arena is a version of the arena that does not allow new allocations.
pub struct FrozenArena {
    inner: DroplessArena,
}

impl FrozenArena {
    pub fn contains_node(&self, node: &Node<'_>) -> bool {
        self.inner.contains_slice(std::slice::from_ref(node))
    }
}

impl Debug for FrozenArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrozenArena").finish()
    }
}

// Safety: `FrozenArena` does not allow new allocations and is therefore safe to share across
// threads.
unsafe impl Sync for FrozenArena {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::MathmlFont;
    use crate::layout::{Body, Node};

    #[test]
    fn arena_push_and_contains() {
        let arena = Arena::new();
        let node = arena.push(Node::plain(Body::SymbolPlain {
            text: "x",
            font: MathmlFont::Italic,
        }));
        let node: *const Node<'static> = (node as *const Node<'_>).cast();
        let frozen = arena.freeze();
        // The arena's allocations are stable across the move in `freeze()`,
        // so the pointer still refers to the node inside `frozen`.
        let node = unsafe { &*node };
        assert!(frozen.contains_node(node));
    }

    #[test]
    fn foreign_node_is_not_contained() {
        let arena = Arena::new();
        let _ = arena.push(Node::plain(Body::Space {
            width: 3,
            is_user_requested: true,
        }));
        let frozen = arena.freeze();
        let outside = Node::plain(Body::Space {
            width: 0,
            is_user_requested: false,
        });
        assert!(!frozen.contains_node(&outside));
    }

    #[test]
    fn empty_slices_are_fine() {
        let arena = Arena::new();
        let nodes = arena.push_slice(&[]);
        assert!(nodes.is_empty());
        assert_eq!(arena.alloc_str(""), "");
    }
}
