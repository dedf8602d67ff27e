//! Scene-tree node variants.

use crate::render::Renderer;
use crate::stage::group::Group;
use crate::stage::label::Label;
use crate::stage::sprite::Sprite;
use crate::tilemap::TileMap;

/// A node in the scene tree.
///
/// The variant set is closed: groups recurse, sprites integrate physics,
/// animation, and actions, labels and tile maps only render. Removal is
/// cooperative: a node marks itself removed and the owning [`Group`]
/// drops it at the end of its next traversal.
pub enum Node {
    Group(Group),
    Sprite(Sprite),
    Label(Label),
    TileMap(TileMap),
}

impl Node {
    /// Advance this node by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        match self {
            Node::Group(group) => group.update(dt),
            Node::Sprite(sprite) => sprite.act(dt),
            Node::Label(_) | Node::TileMap(_) => {}
        }
    }

    /// Draw this node.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        match self {
            Node::Group(group) => group.render(renderer),
            Node::Sprite(sprite) => sprite.render(renderer),
            Node::Label(label) => label.render(renderer),
            Node::TileMap(map) => map.render(renderer),
        }
    }

    /// Mark this node for removal from its containing group.
    pub fn remove(&mut self) {
        match self {
            Node::Group(group) => group.remove(),
            Node::Sprite(sprite) => sprite.remove(),
            Node::Label(label) => label.remove(),
            Node::TileMap(map) => map.remove(),
        }
    }

    /// Whether this node is marked for removal.
    pub fn is_removed(&self) -> bool {
        match self {
            Node::Group(group) => group.is_removed(),
            Node::Sprite(sprite) => sprite.is_removed(),
            Node::Label(label) => label.is_removed(),
            Node::TileMap(map) => map.is_removed(),
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            Node::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_sprite(&self) -> Option<&Sprite> {
        match self {
            Node::Sprite(sprite) => Some(sprite),
            _ => None,
        }
    }

    pub fn as_sprite_mut(&mut self) -> Option<&mut Sprite> {
        match self {
            Node::Sprite(sprite) => Some(sprite),
            _ => None,
        }
    }

    pub fn as_label_mut(&mut self) -> Option<&mut Label> {
        match self {
            Node::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_tilemap(&self) -> Option<&TileMap> {
        match self {
            Node::TileMap(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_tilemap_mut(&mut self) -> Option<&mut TileMap> {
        match self {
            Node::TileMap(map) => Some(map),
            _ => None,
        }
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

impl From<Sprite> for Node {
    fn from(sprite: Sprite) -> Self {
        Node::Sprite(sprite)
    }
}

impl From<Label> for Node {
    fn from(label: Label) -> Self {
        Node::Label(label)
    }
}

impl From<TileMap> for Node {
    fn from(map: TileMap) -> Self {
        Node::TileMap(map)
    }
}
