//! The optional allow-list of elements a space accepts.

use cubit_core::Element;
use indexmap::IndexSet;

/// An insertion-ordered set of permitted [`Element`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementCatalog {
    elements: IndexSet<Element>,
}

impl ElementCatalog {
    /// A catalog listing every character of `chars`.
    pub fn from_chars(chars: &str) -> Self {
        chars.chars().collect()
    }

    /// Whether `element` is listed.
    pub fn contains(&self, element: Element) -> bool {
        self.elements.contains(&element)
    }

    /// Number of listed elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the catalog lists nothing.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Listed elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Element> + '_ {
        self.elements.iter().copied()
    }
}

impl FromIterator<Element> for ElementCatalog {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<char> for ElementCatalog {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        iter.into_iter().map(Element).collect()
    }
}

/// Whether `element` may be placed under `catalog`.
///
/// Without a catalog every element is permitted.
pub fn exists(element: Element, catalog: Option<&ElementCatalog>) -> bool {
    catalog.is_none_or(|c| c.contains(element))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrestricted_without_catalog() {
        assert!(exists(Element('z'), None));
    }

    #[test]
    fn membership_with_catalog() {
        let catalog = ElementCatalog::from_chars("abc");
        assert!(exists(Element('a'), Some(&catalog)));
        assert!(!exists(Element('C'), Some(&catalog)));
    }

    #[test]
    fn duplicates_collapse_and_order_is_kept() {
        let catalog = ElementCatalog::from_chars("cabca");
        assert_eq!(catalog.len(), 3);
        let order: String = catalog.iter().map(Element::as_char).collect();
        assert_eq!(order, "cab");
    }

    #[test]
    fn empty_catalog_rejects_everything() {
        let catalog = ElementCatalog::default();
        assert!(catalog.is_empty());
        assert!(!exists(Element('a'), Some(&catalog)));
    }
}
