//! Ordered collections of scene nodes.

use crate::render::Renderer;
use crate::stage::node::Node;

/// An ordered, mutable collection of [`Node`]s; itself a node, so groups
/// nest.
///
/// Insertion order is both update order and draw order (later additions
/// draw on top). A traversal only visits the members present when it
/// started: nodes that mark themselves removed during their own update are
/// still visited exactly once and dropped at the end of the traversal, so
/// siblings are never skipped or double-visited.
#[derive(Default)]
pub struct Group {
    members: Vec<Node>,
    removed: bool,
}

impl Group {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            removed: false,
        }
    }

    /// Append a node. It will first be visited by the next traversal.
    pub fn add(&mut self, node: impl Into<Node>) {
        self.members.push(node.into());
    }

    /// Remove and return the node at `index`.
    ///
    /// Panics if `index` is out of range; passing a stale index is a
    /// caller error. Nodes that remove themselves (see
    /// [`crate::actions::Action::remove`]) do not need this.
    pub fn remove_at(&mut self, index: usize) -> Node {
        assert!(
            index < self.members.len(),
            "Group::remove_at index {index} out of range ({} members)",
            self.members.len()
        );
        self.members.remove(index)
    }

    /// Number of members (including any marked for removal but not yet
    /// swept).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.members.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.members.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.members.iter_mut()
    }

    /// Advance every member by `dt`, then drop members marked for
    /// removal.
    ///
    /// The traversal covers the members present at its start; structural
    /// changes (removal marks, nodes added by game logic between frames)
    /// take effect from the next traversal on.
    pub fn update(&mut self, dt: f32) {
        // marks made outside any traversal (e.g. by game logic last frame)
        self.members.retain(|m| !m.is_removed());

        let count = self.members.len();
        for i in 0..count {
            self.members[i].update(dt);
        }

        self.members.retain(|m| !m.is_removed());
    }

    /// Draw every member in insertion order. Members marked removed are
    /// skipped.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        for member in &self.members {
            if !member.is_removed() {
                member.render(renderer);
            }
        }
    }

    /// Mark this group (and thereby all its members) for removal from its
    /// containing group.
    pub fn remove(&mut self) {
        self.removed = true;
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }
}
