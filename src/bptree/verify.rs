//! Structural audit. Walks the tree breadth-first, producing each level's
//! children while checking it, and panics on the first violated invariant.
//! Always compiled; meant for tests and debugging rather than hot paths.

use super::node::{Content, NodePtr};
use super::{Payload, Tree};

impl<P: Payload> Tree<P> {
    pub(crate) fn check_invariants(&self) {
        unsafe {
            let root = self.root.as_ref();
            assert!(root.parent.is_none(), "root has a parent");
            assert!(
                root.prev.is_none() && root.next.is_none(),
                "root has siblings"
            );

            let mut level: Vec<NodePtr<P>> = vec![self.root];
            let mut depth = 0;
            loop {
                let leaf_level = level[0].as_ref().is_leaf();

                assert!(
                    level[0].as_ref().prev.is_none(),
                    "head of level {depth} has a prev link"
                );
                assert!(
                    level.last().unwrap().as_ref().next.is_none(),
                    "tail of level {depth} has a next link"
                );
                for pair in level.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    assert!(
                        a.as_ref().next == Some(b) && b.as_ref().prev == Some(a),
                        "broken sibling chain at depth {depth}"
                    );
                    assert!(
                        a.as_ref().room() + b.as_ref().room() > self.cap,
                        "adjacent siblings at depth {depth} would fit in one node"
                    );
                }

                let mut next_level = Vec::new();
                for &ptr in &level {
                    assert_eq!(
                        ptr.as_ref().is_leaf(),
                        leaf_level,
                        "mixed node kinds at depth {depth}"
                    );
                    self.check_node(ptr, depth);
                    if let Content::Inner(children) = &ptr.as_ref().content {
                        next_level.extend(children.iter().copied());
                    }
                }

                if leaf_level {
                    assert!(
                        level[0] == self.first,
                        "first does not point at the leftmost leaf"
                    );
                    let total: usize = level.iter().map(|leaf| leaf.as_ref().used()).sum();
                    assert_eq!(total, self.len, "stored items disagree with the length");
                    return;
                }
                level = next_level;
                depth += 1;
            }
        }
    }

    unsafe fn check_node(&self, ptr: NodePtr<P>, depth: usize) {
        let n = ptr.as_ref();
        let used = n.used();
        let room = n.room();
        let is_root = ptr == self.root;

        assert!(
            room <= self.cap,
            "slot array longer than the node capacity at depth {depth}"
        );
        assert!(
            room.is_power_of_two() || room == self.cap,
            "slot array length {room} is neither a power of two nor the capacity"
        );
        assert!(used <= room, "more slots used than allocated at depth {depth}");
        if used > 0 {
            assert!(
                used * 2 > room,
                "slot array more than half empty at depth {depth}"
            );
        }
        if is_root {
            // A demotion cascade never leaves an interior root holding a
            // single child.
            assert!(
                n.is_leaf() || used >= 2,
                "interior root with fewer than two children"
            );
        } else {
            assert!(
                used * 2 >= self.cap,
                "underfull non-root node at depth {depth}"
            );
        }

        match &n.content {
            Content::Leaf(items) => {
                assert!(items.tail_is_vacant(), "occupied slot past used in a leaf");
                assert_eq!(
                    n.weight,
                    used * P::WEIGHT,
                    "leaf weight mismatch at depth {depth}"
                );
                if P::KEYED && used > 0 {
                    assert!(
                        n.first_key.as_ref() == Some(P::key_of(items.get(0))),
                        "leaf first key out of date at depth {depth}"
                    );
                }
            }
            Content::Inner(children) => {
                assert!(
                    children.tail_is_vacant(),
                    "occupied slot past used in an interior node"
                );
                let mut weight = 0;
                for &child in children.iter() {
                    assert!(
                        child.as_ref().parent == Some(ptr),
                        "child with a stale parent pointer at depth {depth}"
                    );
                    weight += child.as_ref().weight;
                }
                assert_eq!(
                    n.weight, weight,
                    "interior weight mismatch at depth {depth}"
                );
                if P::KEYED {
                    let head = *children.get(0);
                    assert!(
                        n.first_key == head.as_ref().first_key,
                        "interior first key out of date at depth {depth}"
                    );
                }
            }
        }
    }
}
