use serde::{Deserialize, Serialize};

/// Navbar entry consumed by the site framework.
///
/// Serializes as `{ text, link, children? }`; `children` is only emitted for
/// sections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display label (file stem or directory name).
    pub text: String,
    /// Site-relative link target.
    pub link: String,
    /// Child entries, present only for directory sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavItem>>,
}

impl NavItem {
    /// Create a leaf page entry.
    #[must_use]
    pub fn page(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
            children: None,
        }
    }

    /// Create a section entry with children.
    #[must_use]
    pub fn section(text: impl Into<String>, link: impl Into<String>, children: Vec<NavItem>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
            children: Some(children),
        }
    }

    /// Child entries, empty for pages.
    #[must_use]
    pub fn children(&self) -> &[NavItem] {
        self.children.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_serializes_without_children() {
        let item = NavItem::page("foo", "/bar/foo.html");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"text":"foo","link":"/bar/foo.html"}"#);
    }

    #[test]
    fn test_section_serializes_children() {
        let item = NavItem::section("a", "/a/", vec![NavItem::page("c", "/a/c.html")]);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"text":"a","link":"/a/","children":[{"text":"c","link":"/a/c.html"}]}"#
        );
    }

    #[test]
    fn test_deserialize_without_children() {
        let item: NavItem = serde_json::from_str(r#"{"text":"Home","link":"/"}"#).unwrap();
        assert_eq!(item, NavItem::page("Home", "/"));
        assert!(item.children.is_none());
        assert!(item.children().is_empty());
    }
}
