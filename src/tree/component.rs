// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::diagnostics::Diagnostics;

/// A UI component addressed by its identifier.
pub trait UiComponent: Sized {
    fn id(&self) -> &str;

    /// The identifier as rendered in the page, including naming containers.
    fn client_id(&self) -> String;

    fn children(&self) -> &[Self];
}

/// Depth first search for the component whose id is exactly `id`.
///
/// Components are checked before their children, and children in order, so
/// the first match in document order wins. Returns `None` when `root` is
/// `None` or nothing matches.
pub fn find_component<'a, C, D>(id: &str, root: Option<&'a C>, diagnostics: &D) -> Option<&'a C>
where
    C: UiComponent,
    D: Diagnostics + ?Sized,
{
    let component = root?;

    if component.id() == id {
        diagnostics.debug(&format!("found - id: {}", component.id()));
        diagnostics.debug(&format!("found - client id: {}", component.client_id()));
        return Some(component);
    }

    component
        .children()
        .iter()
        .find_map(|child| find_component(id, Some(child), diagnostics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{
        NoDiagnostics,
        testing::{Line, RecordingDiagnostics},
    };

    struct Component {
        id: &'static str,
        container: &'static str,
        children: Vec<Component>,
    }

    impl Component {
        fn new(id: &'static str, children: Vec<Component>) -> Self {
            Self {
                id,
                container: "form",
                children,
            }
        }
    }

    impl UiComponent for Component {
        fn id(&self) -> &str {
            self.id
        }

        fn client_id(&self) -> String {
            format!("{}:{}", self.container, self.id)
        }

        fn children(&self) -> &[Self] {
            &self.children
        }
    }

    fn page() -> Component {
        Component::new(
            "root",
            vec![
                Component::new("header", vec![Component::new("title", vec![])]),
                Component::new(
                    "body",
                    vec![
                        Component::new("table", vec![Component::new("row", vec![])]),
                        Component::new("row", vec![]),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn test_find_root() {
        let page = page();
        let found = find_component("root", Some(&page), &NoDiagnostics);
        assert!(found.is_some_and(|c| std::ptr::eq(c, &page)));
    }

    #[test]
    fn test_find_nested() {
        let page = page();
        let found = find_component("title", Some(&page), &NoDiagnostics);
        assert!(found.is_some_and(|c| std::ptr::eq(c, &page.children[0].children[0])));
    }

    #[test]
    fn test_find_returns_first_match_depth_first() {
        let page = page();
        let found = find_component("row", Some(&page), &NoDiagnostics);
        let nested_row = &page.children[1].children[0].children[0];
        assert!(found.is_some_and(|c| std::ptr::eq(c, nested_row)));
    }

    #[test]
    fn test_find_missing() {
        let page = page();
        assert!(find_component("footer", Some(&page), &NoDiagnostics).is_none());
        assert!(find_component::<Component, _>("root", None, &NoDiagnostics).is_none());
    }

    #[test]
    fn test_find_logs_match() {
        let page = page();
        let diagnostics = RecordingDiagnostics::default();
        find_component("title", Some(&page), &diagnostics);

        assert_eq!(
            diagnostics.lines(),
            vec![
                Line::Debug("found - id: title".to_string()),
                Line::Debug("found - client id: form:title".to_string()),
            ]
        );
    }

    #[test]
    fn test_find_logs_nothing_without_match() {
        let page = page();
        let diagnostics = RecordingDiagnostics::default();
        find_component("footer", Some(&page), &diagnostics);
        assert!(diagnostics.lines().is_empty());
    }
}
