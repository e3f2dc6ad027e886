//! Role-gated navigation items.

use danceverse_model::Role;

use super::view::Tab;

/// A header navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub tab: Tab,
    pub label: &'static str,
}

/// Every nav item, in display order. Visibility is decided by [`allows`].
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        tab: Tab::Home,
        label: "Home",
    },
    NavItem {
        tab: Tab::Courses,
        label: "Academy",
    },
    NavItem {
        tab: Tab::Dashboard,
        label: "Dashboard",
    },
    NavItem {
        tab: Tab::Live,
        label: "Live Studio",
    },
];

/// Whether `role` may open `tab`. `None` is an anonymous visitor.
pub fn allows(role: Option<Role>, tab: Tab) -> bool {
    match tab {
        Tab::Home | Tab::Courses | Tab::Login => true,
        Tab::Dashboard => role.is_some(),
        Tab::Live => match role {
            Some(Role::Student | Role::Trainer) => true,
            Some(Role::Admin) | None => false,
        },
    }
}

/// Nav items shown in the header for `role`
pub fn visible_items(role: Option<Role>) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .copied()
        .filter(|item| allows(role, item.tab))
        .collect()
}
