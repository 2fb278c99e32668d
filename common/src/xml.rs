//! # XML Query Seam
//!
//! The host model never walks markup itself. It asks a node for a named
//! descendant, for all nodes carrying a tag, or for its text, through
//! [`XmlQuery`]. The `roxmltree` implementation below is what the report
//! loader hands out; tests are free to plug in their own trees.

use roxmltree::Node;

/// Where a multi-node query looks for matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Every descendant of the document root, whichever node the query starts from.
    #[default]
    Document,
    /// Descendants of the queried node only.
    Subtree,
}

/// Read-only queries over one node of a parsed document.
pub trait XmlQuery: Copy {
    /// First descendant (excluding the node itself) whose tag name is `tag`.
    fn find_first(&self, tag: &str) -> Option<Self>;

    /// All element nodes named `tag` within `scope`, in document order.
    fn find_all(&self, tag: &str, scope: Scope) -> Vec<Self>;

    /// Concatenated text of every text node below this one.
    fn text(&self) -> String;

    /// Text of the first descendant named `tag`.
    fn child_text(&self, tag: &str) -> Option<String> {
        self.find_first(tag).map(|node| node.text())
    }
}

impl<'a, 'input> XmlQuery for Node<'a, 'input> {
    fn find_first(&self, tag: &str) -> Option<Self> {
        self.descendants()
            .skip(1)
            .find(|node| node.is_element() && node.tag_name().name() == tag)
    }

    fn find_all(&self, tag: &str, scope: Scope) -> Vec<Self> {
        let origin: Node<'a, 'input> = match scope {
            Scope::Document => self.document().root(),
            Scope::Subtree => *self,
        };
        origin
            .descendants()
            .filter(|node| node.is_element() && node.tag_name().name() == tag)
            .collect()
    }

    fn text(&self) -> String {
        self.descendants()
            .filter(|node| node.is_text())
            .filter_map(|node| node.text())
            .collect()
    }
}
