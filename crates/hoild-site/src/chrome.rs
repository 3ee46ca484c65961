//! Site chrome: navigation menu and footer data.
//!
//! Loaded once per layout render, independently of page assembly. All four
//! reads are best-effort; a CMS hiccup yields an empty part, never a failed
//! page.

use serde::Serialize;
use serde_json::{Map, Value};

use hoild_wp::{ContentSource, MenuItem};

/// A navigation menu node with its children attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuNode {
    /// Menu item id.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Link target.
    pub url: String,
    /// Child items, in authored order.
    pub children: Vec<MenuNode>,
}

/// Everything the layout shell needs around the page content.
#[derive(Debug, Clone, Serialize)]
pub struct SiteChrome {
    /// Navigation tree.
    pub menu: Vec<MenuNode>,
    /// Header options (site logo etc).
    pub header: Value,
    /// Footer widget HTML keyed by widget slug.
    pub widgets: Map<String, Value>,
    /// Footer options (logo, social links, copyright).
    pub footer: Value,
}

/// Load the whole chrome concurrently.
pub async fn load_chrome(source: &dyn ContentSource) -> SiteChrome {
    let (menu, header, widgets, footer) = futures::join!(
        source.menu(),
        source.header_options(),
        source.footer_widgets(),
        source.footer_options(),
    );

    SiteChrome {
        menu: build_menu_tree(&menu),
        header,
        widgets,
        footer,
    }
}

/// Rebuild the menu hierarchy from WP's flat item list.
///
/// Items sort by menu position (stable, so ties keep input order). Items
/// with parent 0 are roots; children attach under their parent. Items
/// pointing at a parent that is not in the list are dropped, matching how
/// the CMS treats detached menu entries.
#[must_use]
pub fn build_menu_tree(items: &[MenuItem]) -> Vec<MenuNode> {
    let mut sorted: Vec<&MenuItem> = items.iter().collect();
    sorted.sort_by_key(|item| item.order);

    sorted
        .iter()
        .filter(|item| item.parent == 0)
        .map(|item| node_for(item, &sorted))
        .collect()
}

fn node_for(item: &MenuItem, items: &[&MenuItem]) -> MenuNode {
    MenuNode {
        id: item.id,
        title: item.title.clone(),
        url: item.url.clone(),
        children: items
            .iter()
            .filter(|child| child.parent == item.id && child.id != item.id)
            .map(|child| node_for(child, items))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoild_wp::MockSource;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn item(id: u64, parent: u64, title: &str) -> MenuItem {
        MenuItem {
            id,
            parent,
            order: 0,
            title: title.to_owned(),
            url: format!("/{title}"),
        }
    }

    #[test]
    fn test_tree_nests_children_in_order() {
        let items = vec![
            item(1, 0, "home"),
            item(2, 0, "services"),
            item(3, 2, "seo"),
            item(4, 2, "ppc"),
            item(5, 0, "contact"),
        ];

        let tree = build_menu_tree(&items);

        let titles: Vec<_> = tree.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["home", "services", "contact"]);
        let children: Vec<_> = tree[1].children.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(children, vec!["seo", "ppc"]);
    }

    #[test]
    fn test_items_sort_by_menu_position() {
        let mut contact = item(3, 0, "contact");
        contact.order = 1;
        let mut home = item(1, 0, "home");
        home.order = 3;
        let mut services = item(2, 0, "services");
        services.order = 2;

        let tree = build_menu_tree(&[contact, home, services]);

        let titles: Vec<_> = tree.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["contact", "services", "home"]);
    }

    #[test]
    fn test_orphans_are_dropped() {
        let items = vec![item(1, 0, "home"), item(2, 99, "lost")];

        let tree = build_menu_tree(&items);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].title, "home");
    }

    #[test]
    fn test_empty_menu_builds_empty_tree() {
        assert!(build_menu_tree(&[]).is_empty());
    }

    #[tokio::test]
    async fn test_load_chrome_collects_all_parts() {
        let mut widgets = Map::new();
        widgets.insert("quick-links".to_owned(), json!("<ul>...</ul>"));

        let source = MockSource::new()
            .with_menu(vec![item(1, 0, "home")])
            .with_header_options(json!({"website_logo": {"url": "https://cms.example/logo.svg"}}))
            .with_footer_widgets(widgets)
            .with_footer_options(json!({"footer_copyright_text": "(c) Hoild"}));

        let chrome = load_chrome(&source).await;

        assert_eq!(chrome.menu.len(), 1);
        assert_eq!(
            chrome.header["website_logo"]["url"],
            json!("https://cms.example/logo.svg")
        );
        assert_eq!(chrome.widgets["quick-links"], json!("<ul>...</ul>"));
        assert_eq!(chrome.footer["footer_copyright_text"], json!("(c) Hoild"));
    }

    #[tokio::test]
    async fn test_unconfigured_source_yields_empty_chrome() {
        let source = MockSource::new();
        let chrome = load_chrome(&source).await;

        assert!(chrome.menu.is_empty());
        assert!(chrome.widgets.is_empty());
    }
}
