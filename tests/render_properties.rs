//! Property tests for the sidebar renderer
//!
//! Run: cargo test --test render_properties

use docnav::nav::{NavEntry, NavTree};
use docnav::render::{render_items, Element, PlainLink};
use proptest::prelude::*;

fn arb_tree() -> impl Strategy<Value = NavTree> {
    let leaf = ("[A-Za-z][A-Za-z ]{0,8}", "/[a-z/]{0,12}")
        .prop_map(|(title, url)| NavEntry::link(title, url));

    let entry = leaf.prop_recursive(4, 48, 5, |inner| {
        (
            "[A-Za-z][A-Za-z ]{0,8}",
            prop::collection::vec(inner, 0..5),
            prop::option::of("/img/[a-z]{1,6}\\.svg"),
        )
            .prop_map(|(title, children, icon)| {
                let group = NavEntry::group(title, children);
                match icon {
                    Some(icon) => group.with_icon(icon),
                    None => group,
                }
            })
    });

    prop::collection::vec(entry, 0..6).prop_map(NavTree::new)
}

/// Check one rendered `ul` against the tree it came from, recursively
fn assert_matches(list: &Element, tree: &NavTree) {
    assert_eq!(list.tag, "ul");
    let items: Vec<_> = list.child_elements().collect();
    assert_eq!(items.len(), tree.len(), "one item per entry");

    for (li, entry) in items.iter().zip(tree) {
        assert_eq!(li.tag, "li");
        assert_eq!(li.key.as_deref(), Some(entry.title()), "keyed by title, in order");

        match entry {
            NavEntry::Link { title, url } => {
                let a = li.child_elements().next().unwrap();
                assert_eq!(a.tag, "a");
                assert_eq!(a.get_attr("href"), Some(url.as_str()));
                assert_eq!(&a.text_content(), title);
            }
            NavEntry::Group {
                title,
                children,
                icon,
            } => {
                let parts: Vec<_> = li.child_elements().collect();
                assert_eq!(parts.len(), 2, "header then body, nothing between");

                let header = parts[0];
                assert!(header.find("a").is_none());
                assert_eq!(&header.text_content(), title);
                let img = header.child_elements().find(|el| el.tag == "img");
                assert_eq!(img.and_then(|el| el.get_attr("src")), icon.as_deref());

                let nested = parts[1].child_elements().next().unwrap();
                assert_matches(nested, children);
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_structure_mirrors_tree(tree in arb_tree()) {
        let list = render_items(&tree, &PlainLink);
        assert_matches(&list, &tree);
    }

    #[test]
    fn prop_rendering_is_idempotent(tree in arb_tree()) {
        prop_assert_eq!(render_items(&tree, &PlainLink), render_items(&tree, &PlainLink));
    }

    #[test]
    fn prop_link_count_matches(tree in arb_tree()) {
        fn links(tree: &NavTree) -> usize {
            tree.iter()
                .map(|e| match e {
                    NavEntry::Link { .. } => 1,
                    NavEntry::Group { children, .. } => links(children),
                })
                .sum()
        }
        let list = render_items(&tree, &PlainLink);
        prop_assert_eq!(list.find_all("a").len(), links(&tree));
    }

    #[test]
    fn prop_json_triples_round_trip(tree in arb_tree()) {
        let json = serde_json::to_string(&tree).unwrap();
        let back: NavTree = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, tree);
    }
}
