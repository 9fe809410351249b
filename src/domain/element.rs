//! Per-frame element tree
//!
//! The presentation layer rebuilds this tree on every render. It serves two
//! purposes: hit-testing pointer positions against what is on screen, and
//! bubbling clicks from the deepest element up to the root the way a browser
//! dispatches them.

use ratatui::layout::{Position, Rect};

/// Marker class for elements that should get the pointer affordance
pub const CLICKABLE_CLASS: &str = "cursor-pointer";

/// Role value that makes any element interactive
pub const BUTTON_ROLE: &str = "button";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    Section,
    Anchor,
    Button,
    Image,
    Text,
}

/// Click listener attached to an element
#[derive(Debug, Clone, PartialEq)]
pub enum Listener<M> {
    /// Emit a message and let the click keep bubbling
    Emit(M),
    /// Swallow the click so no ancestor sees it
    StopPropagation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element<M> {
    pub tag: Tag,
    pub area: Rect,
    /// Stable name for elements other code needs to find again
    pub name: Option<&'static str>,
    pub role: Option<&'static str>,
    pub classes: Vec<&'static str>,
    listeners: Vec<Listener<M>>,
    parent: Option<ElementId>,
}

impl<M> Element<M> {
    pub fn new(tag: Tag, area: Rect) -> Self {
        Self {
            tag,
            area,
            name: None,
            role: None,
            classes: vec![],
            listeners: vec![],
            parent: None,
        }
    }

    pub fn div(area: Rect) -> Self {
        Self::new(Tag::Div, area)
    }

    pub fn button(area: Rect) -> Self {
        Self::new(Tag::Button, area)
    }

    pub fn anchor(area: Rect) -> Self {
        Self::new(Tag::Anchor, area)
    }

    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn role(mut self, role: &'static str) -> Self {
        self.role = Some(role);
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn on_click(mut self, msg: M) -> Self {
        self.listeners.push(Listener::Emit(msg));
        self
    }

    pub fn stop_propagation(mut self) -> Self {
        self.listeners.push(Listener::StopPropagation);
        self
    }

    pub fn listeners(&self) -> &[Listener<M>] {
        &self.listeners
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn has_click_handler(&self) -> bool {
        self.listeners
            .iter()
            .any(|listener| matches!(listener, Listener::Emit(_)))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    /// Whether this element on its own counts as actionable
    pub fn is_interactive(&self) -> bool {
        matches!(self.tag, Tag::Anchor | Tag::Button)
            || self.role == Some(BUTTON_ROLE)
            || self.has_click_handler()
            || self.has_class(CLICKABLE_CLASS)
    }
}

/// Arena of elements rooted at the full viewport
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTree<M> {
    nodes: Vec<Element<M>>,
}

impl<M: Clone> ElementTree<M> {
    pub fn new(viewport: Rect) -> Self {
        Self {
            nodes: vec![Element::new(Tag::Section, viewport)],
        }
    }

    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    pub fn insert(&mut self, parent: ElementId, mut element: Element<M>) -> ElementId {
        element.parent = Some(parent);
        self.nodes.push(element);
        ElementId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element<M>> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The element itself followed by each parent up to the root
    pub fn ancestors(&self, id: ElementId) -> Ancestors<'_, M> {
        Ancestors {
            tree: self,
            next: self.get(id).map(|_| id),
        }
    }

    /// Topmost element under the given cell
    ///
    /// Elements inserted later paint over earlier ones, and children are always
    /// inserted after their parents, so the last match is the deepest visible one.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ElementId> {
        let position = Position::new(x, y);
        self.nodes
            .iter()
            .enumerate()
            .rev()
            .find(|(_, element)| element.area.contains(position))
            .map(|(index, _)| ElementId(index))
    }

    /// Bubble a click from `target` to the root
    ///
    /// Listeners run in order on each element. A `StopPropagation` listener ends
    /// the walk after the current element.
    pub fn dispatch_click(&self, target: ElementId) -> Vec<M> {
        let mut messages = vec![];
        for (_, element) in self.ancestors(target) {
            let mut stopped = false;
            for listener in element.listeners() {
                match listener {
                    Listener::Emit(msg) => messages.push(msg.clone()),
                    Listener::StopPropagation => stopped = true,
                }
            }
            if stopped {
                break;
            }
        }
        messages
    }

    /// Hit-test and dispatch in one step
    pub fn click_at(&self, x: u16, y: u16) -> Vec<M> {
        self.hit_test(x, y)
            .map(|target| self.dispatch_click(target))
            .unwrap_or_default()
    }

    /// First element carrying `name`
    pub fn find(&self, name: &str) -> Option<ElementId> {
        self.nodes
            .iter()
            .position(|element| element.name == Some(name))
            .map(ElementId)
    }

    /// Whether `target` is the element called `name` or lies inside it
    pub fn is_within(&self, target: ElementId, name: &str) -> bool {
        self.ancestors(target)
            .any(|(_, element)| element.name == Some(name))
    }
}

pub struct Ancestors<'a, M> {
    tree: &'a ElementTree<M>,
    next: Option<ElementId>,
}

impl<'a, M> Iterator for Ancestors<'a, M> {
    type Item = (ElementId, &'a Element<M>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let element = self.tree.nodes.get(id.0)?;
        self.next = element.parent;
        Some((id, element))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMsg {
        Card,
        Inner,
    }

    fn rect(x: u16, y: u16, w: u16, h: u16) -> Rect {
        Rect::new(x, y, w, h)
    }

    #[test]
    fn test_hit_test_prefers_deepest_element() {
        let mut tree: ElementTree<TestMsg> = ElementTree::new(rect(0, 0, 80, 24));
        let card = tree.insert(tree.root(), Element::div(rect(0, 0, 40, 10)));
        let button = tree.insert(card, Element::button(rect(2, 2, 10, 1)));

        assert_eq!(tree.hit_test(3, 2), Some(button));
        assert_eq!(tree.hit_test(20, 5), Some(card));
        assert_eq!(tree.hit_test(60, 20), Some(tree.root()));
        assert_eq!(tree.hit_test(100, 100), None);
    }

    #[test]
    fn test_named_lookup() {
        let mut tree: ElementTree<TestMsg> = ElementTree::new(rect(0, 0, 80, 24));
        let card = tree.insert(tree.root(), Element::div(rect(0, 0, 40, 10)).named("card"));
        let inner = tree.insert(card, Element::div(rect(1, 1, 5, 1)));
        let other = tree.insert(tree.root(), Element::div(rect(40, 0, 40, 10)));

        assert_eq!(tree.find("card"), Some(card));
        assert_eq!(tree.find("missing"), None);
        assert!(tree.is_within(inner, "card"));
        assert!(!tree.is_within(other, "card"));
    }

    #[test]
    fn test_click_bubbles_to_ancestors() {
        let mut tree = ElementTree::new(rect(0, 0, 80, 24));
        let card = tree.insert(
            tree.root(),
            Element::div(rect(0, 0, 40, 10)).on_click(TestMsg::Card),
        );
        let inner = tree.insert(card, Element::button(rect(2, 2, 10, 1)).on_click(TestMsg::Inner));

        assert_eq!(
            tree.dispatch_click(inner),
            vec![TestMsg::Inner, TestMsg::Card]
        );
    }

    #[test]
    fn test_stop_propagation_ends_bubbling() {
        let mut tree = ElementTree::new(rect(0, 0, 80, 24));
        let card = tree.insert(
            tree.root(),
            Element::div(rect(0, 0, 40, 10)).on_click(TestMsg::Card),
        );
        let inner = tree.insert(
            card,
            Element::button(rect(2, 2, 10, 1))
                .on_click(TestMsg::Inner)
                .stop_propagation(),
        );

        assert_eq!(tree.dispatch_click(inner), vec![TestMsg::Inner]);
    }

    #[test]
    fn test_interactive_predicate() {
        let area = rect(0, 0, 1, 1);
        assert!(Element::<TestMsg>::anchor(area).is_interactive());
        assert!(Element::<TestMsg>::button(area).is_interactive());
        assert!(Element::<TestMsg>::div(area).role(BUTTON_ROLE).is_interactive());
        assert!(Element::<TestMsg>::div(area).class(CLICKABLE_CLASS).is_interactive());
        assert!(Element::div(area).on_click(TestMsg::Card).is_interactive());
        assert!(!Element::<TestMsg>::div(area).stop_propagation().is_interactive());
        assert!(!Element::<TestMsg>::new(Tag::Image, area).is_interactive());
    }

    #[test]
    fn test_ancestors_walk_to_root() {
        let mut tree: ElementTree<TestMsg> = ElementTree::new(rect(0, 0, 80, 24));
        let a = tree.insert(tree.root(), Element::div(rect(0, 0, 10, 10)));
        let b = tree.insert(a, Element::div(rect(0, 0, 5, 5)));

        let ids: Vec<ElementId> = tree.ancestors(b).map(|(id, _)| id).collect();
        assert_eq!(ids, vec![b, a, tree.root()]);
    }
}
