use mathml_renderer::arena::FrozenArena;
use mathml_renderer::layout::Node;

/// A lifetime-erased reference to a layout tree root.
///
/// The layout tree borrows from its arena, so a struct cannot hold both
/// the arena and a `&Node` into it. Instead the root is stored as a raw
/// pointer and lifted back to a reference against the frozen arena.
#[derive(Debug)]
pub struct RawNodeRef {
    ptr: *const Node<'static>,
}

impl RawNodeRef {
    pub fn from_node(node: &Node<'_>) -> Self {
        Self {
            ptr: unsafe {
                std::mem::transmute::<*const Node<'_>, *const Node<'static>>(node as *const _)
            },
        }
    }

    /// Turn the raw pointer back into a node reference. This method
    /// requires a reference to a `FrozenArena` to ensure the node is
    /// valid. We check at runtime whether the node is contained within
    /// the arena, ensuring safety.
    pub fn lift<'arena>(&self, arena: &'arena FrozenArena) -> Option<&'arena Node<'arena>> {
        let ptr =
            unsafe { std::mem::transmute::<*const Node<'static>, *const Node<'arena>>(self.ptr) };
        // SAFETY: The pointer came from a node reference, and the
        // containment check below confirms it points into this arena.
        let node = unsafe { &*ptr };
        arena.contains_node(node).then(|| {
            // SAFETY: The node is guaranteed to be valid for the lifetime of the arena.
            unsafe { std::mem::transmute::<&Node<'arena>, &'arena Node<'arena>>(node) }
        })
    }
}

// Safety: While `RawNodeRef` contains a raw pointer, it does not allow mutation of the underlying
// data. In order to dereference the pointer, one requires a valid reference to a `FrozenArena`,
// which contains the pointer.
unsafe impl Send for RawNodeRef {}
unsafe impl Sync for RawNodeRef {}

#[cfg(test)]
mod tests {
    use std::thread;

    use mathml_renderer::arena::Arena;
    use mathml_renderer::attribute::MathmlFont;
    use mathml_renderer::layout::Body;

    use super::*;

    #[test]
    fn raw_node_ref_lifts_across_threads() {
        let arena = Arena::new();
        let node = arena.push(Node::plain(Body::SymbolPlain {
            text: "x",
            font: MathmlFont::Italic,
        }));

        let raw = RawNodeRef::from_node(node);
        let arena = arena.freeze();

        thread::spawn(move || {
            let lifted = raw.lift(&arena).unwrap();
            assert!(matches!(
                lifted.body,
                Body::SymbolPlain { text: "x", .. }
            ));
        })
        .join()
        .unwrap();
    }

    #[test]
    fn foreign_node_is_rejected() {
        let arena = Arena::new();
        let _ = arena.push(Node::plain(Body::Space {
            width: 3,
            is_user_requested: true,
        }));
        let outside = Node::plain(Body::Space {
            width: 0,
            is_user_requested: false,
        });
        let raw = RawNodeRef::from_node(&outside);
        let arena = arena.freeze();
        assert!(raw.lift(&arena).is_none());
    }
}
