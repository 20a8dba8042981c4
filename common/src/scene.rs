//! Scene graph recorded while drawing.
//!
//! Renderers push one [`Node`] per visual element in paint order, with a
//! parent link for nesting. The scene is the hit-testing source for both
//! normal clicks ([`Scene::action_at`]) and the inspector
//! ([`crate::inspector::locate`]).
//!
//! Nodes are stored flat; a parent is always pushed before its children, so
//! the descendants of node `i` all live at indices greater than `i`.

use core::fmt::Write;
use core::iter;

use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;
use heapless::{String, Vec};

use crate::colors::{TRANSPARENT, WHITE};
use crate::config::{COMPONENT_NAME_LEN, MAX_NODES, NODE_TEXT_LEN};
use crate::symbols::LvSymbol;
use crate::views::View;

/// Index of a node within its scene.
pub type NodeId = usize;

/// What a node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Layout box (card, panel, list).
    Container,
    /// Clickable button.
    Button,
    /// Range input.
    Slider,
    /// Text label.
    Label,
    /// Icon or ornament.
    Decoration,
}

impl NodeKind {
    /// Element tag reported by the inspector.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Container | Self::Decoration => "div",
            Self::Button => "button",
            Self::Slider => "input",
            Self::Label => "span",
        }
    }
}

/// What happens when a node is clicked outside inspection mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Navigate(View),
    Back,
    SelectRoom(usize),
    ToggleValve(usize),
    /// The new value comes from the click position along the slider.
    SetTargetTemp(usize),
    Pair(usize),
}

/// One drawn element.
#[derive(Clone, Debug)]
pub struct Node {
    pub kind: NodeKind,
    /// Component name, e.g. `RoomCard:kitchen`. Empty for anonymous boxes.
    pub component: String<COMPONENT_NAME_LEN>,
    pub bounds: Rectangle,
    pub parent: Option<NodeId>,
    /// Background style.
    pub background: &'static str,
    /// Text/foreground style.
    pub foreground: &'static str,
    pub text: String<NODE_TEXT_LEN>,
    pub symbol: Option<LvSymbol>,
    pub action: Option<Action>,
}

impl Node {
    pub fn new(
        kind: NodeKind,
        bounds: Rectangle,
    ) -> Self {
        Self {
            kind,
            component: String::new(),
            bounds,
            parent: None,
            background: TRANSPARENT,
            foreground: WHITE,
            text: String::new(),
            symbol: None,
            action: None,
        }
    }

    pub fn container(bounds: Rectangle) -> Self { Self::new(NodeKind::Container, bounds) }

    pub fn button(bounds: Rectangle) -> Self { Self::new(NodeKind::Button, bounds) }

    pub fn label(
        bounds: Rectangle,
        text: &str,
    ) -> Self {
        Self::new(NodeKind::Label, bounds).text(text)
    }

    pub fn decoration(bounds: Rectangle) -> Self { Self::new(NodeKind::Decoration, bounds) }

    #[must_use]
    pub fn named(
        mut self,
        name: &str,
    ) -> Self {
        self.component.clear();
        push_truncated(&mut self.component, name);
        self
    }

    /// Name with a key suffix, e.g. `("RoomCard", "kitchen")` -> `RoomCard:kitchen`.
    #[must_use]
    pub fn keyed(
        mut self,
        name: &str,
        key: &str,
    ) -> Self {
        self.component.clear();
        // Overlong names are cut at capacity.
        let _ = write!(self.component, "{name}:{key}");
        self
    }

    #[must_use]
    pub fn colors(
        mut self,
        background: &'static str,
        foreground: &'static str,
    ) -> Self {
        self.background = background;
        self.foreground = foreground;
        self
    }

    #[must_use]
    pub fn text(
        mut self,
        text: &str,
    ) -> Self {
        self.text.clear();
        push_truncated(&mut self.text, text);
        self
    }

    #[must_use]
    pub fn symbol(
        mut self,
        symbol: LvSymbol,
    ) -> Self {
        self.symbol = Some(symbol);
        self
    }

    #[must_use]
    pub fn action(
        mut self,
        action: Action,
    ) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn parent(
        mut self,
        parent: Option<NodeId>,
    ) -> Self {
        self.parent = parent;
        self
    }

    /// Controls and named containers are what the inspector stops at.
    #[inline]
    pub fn is_inspectable(&self) -> bool {
        match self.kind {
            NodeKind::Button | NodeKind::Slider => true,
            NodeKind::Container => !self.component.is_empty(),
            NodeKind::Label | NodeKind::Decoration => false,
        }
    }
}

/// Paint-ordered list of nodes for one rendered frame.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<Node, MAX_NODES>,
}

impl Scene {
    pub const fn new() -> Self { Self { nodes: Vec::new() } }

    /// Forget all nodes before a redraw.
    pub fn clear(&mut self) { self.nodes.clear(); }

    /// Record a node. Returns `None` (and drops the node) when the scene is full.
    pub fn push(
        &mut self,
        node: Node,
    ) -> Option<NodeId> {
        let id = self.nodes.len();
        match self.nodes.push(node) {
            Ok(()) => Some(id),
            Err(node) => {
                log::warn!("scene full, dropping node {:?}", node.component.as_str());
                None
            }
        }
    }

    #[inline]
    pub fn get(
        &self,
        id: NodeId,
    ) -> Option<&Node> {
        self.nodes.get(id)
    }

    #[inline]
    pub fn len(&self) -> usize { self.nodes.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &Node> { self.nodes.iter() }

    /// First node (by component name) matching `name`.
    pub fn find(
        &self,
        name: &str,
    ) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.component.as_str() == name)
    }

    /// Last-painted node whose bounds contain `point`.
    pub fn topmost_at(
        &self,
        point: Point,
    ) -> Option<NodeId> {
        self.nodes.iter().rposition(|n| n.bounds.contains(point))
    }

    /// `id` followed by its parent, grandparent, and so on.
    pub fn ancestors(
        &self,
        id: NodeId,
    ) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(self.get(id).map(|_| id), move |&i| self.nodes.get(i).and_then(|n| n.parent))
    }

    /// True when `ancestor` is `id` or one of its ancestors.
    pub fn is_within(
        &self,
        id: NodeId,
        ancestor: NodeId,
    ) -> bool {
        self.ancestors(id).any(|i| i == ancestor)
    }

    /// Strict descendants of `id`, in paint order.
    pub fn descendants(
        &self,
        id: NodeId,
    ) -> impl Iterator<Item = NodeId> + '_ {
        (id + 1..self.nodes.len()).filter(move |&i| self.is_within(i, id))
    }

    /// The action of the topmost node at `point`, or of its nearest ancestor with one.
    pub fn action_at(
        &self,
        point: Point,
    ) -> Option<(NodeId, Action)> {
        let top = self.topmost_at(point)?;
        self.ancestors(top)
            .find_map(|i| self.nodes[i].action.map(|action| (i, action)))
    }

    /// Visible text of `id` and its descendants, space-separated, cut at capacity.
    pub fn text_within<const N: usize>(
        &self,
        id: NodeId,
    ) -> String<N> {
        let mut out = String::new();
        for i in iter::once(id).chain(self.descendants(id)) {
            let Some(node) = self.get(i) else { continue };
            for part in node.text.split('\n').map(str::trim).filter(|p| !p.is_empty()) {
                if !out.is_empty() && !push_truncated(&mut out, " ") {
                    return out;
                }
                if !push_truncated(&mut out, part) {
                    return out;
                }
            }
        }
        out
    }

    /// Symbol of `id`, else of its first descendant carrying one.
    pub fn symbol_within(
        &self,
        id: NodeId,
    ) -> Option<LvSymbol> {
        iter::once(id)
            .chain(self.descendants(id))
            .find_map(|i| self.get(i).and_then(|n| n.symbol))
    }
}

/// Append as many characters as fit. Returns `false` if anything was cut.
fn push_truncated<const N: usize>(
    out: &mut String<N>,
    text: &str,
) -> bool {
    for c in text.chars() {
        if out.push(c).is_err() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::Size;

    use super::*;

    fn rect(
        x: i32,
        y: i32,
        w: u32,
        h: u32,
    ) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
    }

    /// card > (title label, button > icon)
    fn sample_scene() -> Scene {
        let mut scene = Scene::new();
        let card = scene.push(Node::container(rect(0, 0, 200, 100)).named("Card"));
        scene.push(Node::label(rect(10, 10, 100, 20), "Living Room").parent(card));
        let button = scene.push(
            Node::button(rect(10, 50, 80, 40))
                .named("Toggle")
                .text("OPEN")
                .action(Action::ToggleValve(0))
                .parent(card),
        );
        scene.push(
            Node::decoration(rect(20, 60, 16, 16))
                .symbol(LvSymbol::Power)
                .parent(button),
        );
        scene
    }

    #[test]
    fn test_topmost_prefers_last_painted() {
        let scene = sample_scene();
        assert_eq!(scene.topmost_at(Point::new(25, 65)), Some(3));
        assert_eq!(scene.topmost_at(Point::new(60, 55)), Some(2));
        assert_eq!(scene.topmost_at(Point::new(150, 90)), Some(0));
        assert_eq!(scene.topmost_at(Point::new(500, 500)), None);
    }

    #[test]
    fn test_ancestors_chain() {
        let scene = sample_scene();
        let chain: std::vec::Vec<NodeId> = scene.ancestors(3).collect();
        assert_eq!(chain, [3, 2, 0]);
        assert_eq!(scene.ancestors(99).count(), 0);
    }

    #[test]
    fn test_action_bubbles_to_ancestor() {
        let scene = sample_scene();
        // Icon has no action; its button does.
        assert_eq!(scene.action_at(Point::new(25, 65)), Some((2, Action::ToggleValve(0))));
        // Card body has none.
        assert_eq!(scene.action_at(Point::new(150, 20)), None);
    }

    #[test]
    fn test_text_within_joins_descendants() {
        let scene = sample_scene();
        let text: String<64> = scene.text_within(0);
        assert_eq!(text.as_str(), "Living Room OPEN");
        let short: String<6> = scene.text_within(0);
        assert_eq!(short.as_str(), "Living");
    }

    #[test]
    fn test_text_within_replaces_newlines() {
        let mut scene = Scene::new();
        scene.push(Node::label(rect(0, 0, 10, 10), "Embedded Control\nVer 1.0.0"));
        let text: String<64> = scene.text_within(0);
        assert_eq!(text.as_str(), "Embedded Control Ver 1.0.0");
    }

    #[test]
    fn test_symbol_within_searches_descendants() {
        let scene = sample_scene();
        assert_eq!(scene.symbol_within(2), Some(LvSymbol::Power));
        assert_eq!(scene.symbol_within(1), None);
    }

    #[test]
    fn test_inspectable_kinds() {
        let scene = sample_scene();
        assert!(scene.get(0).is_some_and(Node::is_inspectable));
        assert!(!scene.get(1).is_some_and(Node::is_inspectable));
        assert!(scene.get(2).is_some_and(Node::is_inspectable));
        assert!(!scene.get(3).is_some_and(Node::is_inspectable));
        assert!(!Node::container(rect(0, 0, 1, 1)).is_inspectable());
    }

    #[test]
    fn test_keyed_name() {
        let node = Node::button(rect(0, 0, 1, 1)).keyed("RoomCard", "living_room");
        assert_eq!(node.component.as_str(), "RoomCard:living_room");
    }

    #[test]
    fn test_full_scene_drops_nodes() {
        let mut scene = Scene::new();
        for _ in 0..MAX_NODES {
            assert!(scene.push(Node::decoration(rect(0, 0, 1, 1))).is_some());
        }
        assert_eq!(scene.push(Node::decoration(rect(0, 0, 1, 1))), None);
        assert_eq!(scene.len(), MAX_NODES);
        scene.clear();
        assert!(scene.is_empty());
    }
}
