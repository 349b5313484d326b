//! Static role → route policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard asks this module two questions on every page load: is the
//! path public, and if not, does the session's role list it. The nav menu
//! renders from the same per-role descriptor, so a menu can never link to a
//! path its role is denied.
//!
//! DESIGN
//! ======
//! Each canonical path is a named constant defined exactly once in [`paths`];
//! the descriptors, the menus, and the router all reference those constants.
//! [`RoleAccess`] bundles the permitted paths, the post-login landing page,
//! and the menu for one role in a single place, instead of three parallel
//! tables that could drift apart.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use crate::auth::role::Role;

/// Canonical route paths. Single source for every path string in the crate.
pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const SOBRE: &str = "/sobre";

    pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
    pub const ADMIN_ANIMAIS: &str = "/admin/animais";
    pub const ADMIN_ONGS: &str = "/admin/ongs";
    pub const ADMIN_ADOTANTES: &str = "/admin/adotantes";
    pub const ADMIN_VOLUNTARIOS: &str = "/admin/voluntarios";
    pub const ADMIN_ADOCOES: &str = "/admin/adocoes";
    pub const ADMIN_SISTEMA: &str = "/admin/sistema";

    pub const ADOTANTE_DASHBOARD: &str = "/adotante/dashboard";
    pub const ADOTANTE_PERFIL: &str = "/adotante/perfil";
    pub const ADOTANTE_MATCH: &str = "/adotante/match";
    pub const ADOTANTE_INTERESSES: &str = "/adotante/interesses";
    pub const ADOTANTE_CHATS: &str = "/adotante/chats";

    pub const VOLUNTARIO_DASHBOARD: &str = "/voluntario/dashboard";
    pub const VOLUNTARIO_PERFIL: &str = "/voluntario/perfil";
    pub const VOLUNTARIO_ANIMAIS: &str = "/voluntario/animais";
    pub const VOLUNTARIO_INTERESSES: &str = "/voluntario/interesses";
    pub const VOLUNTARIO_CHATS: &str = "/voluntario/chats";
    pub const VOLUNTARIO_ADOCOES: &str = "/voluntario/adocoes";
}

/// One entry of a role's navigation menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

/// Access descriptor for one role: the permitted paths, the landing page
/// after login, and the nav menu. Every menu path is one of `allowed`.
#[derive(Debug)]
pub struct RoleAccess {
    pub role: Role,
    pub allowed: &'static [&'static str],
    pub default_path: &'static str,
    pub menu: &'static [MenuEntry],
}

/// Paths reachable without a session.
pub const PUBLIC_PATHS: &[&str] = &[paths::HOME, paths::LOGIN, paths::SOBRE];

/// Target of unauthenticated redirects.
pub const LOGIN_PATH: &str = paths::LOGIN;

/// Landing page when no role default applies.
pub const FALLBACK_PATH: &str = paths::HOME;

static ADMIN_ACCESS: RoleAccess = RoleAccess {
    role: Role::Admin,
    allowed: &[
        paths::ADMIN_DASHBOARD,
        paths::ADMIN_ANIMAIS,
        paths::ADMIN_ONGS,
        paths::ADMIN_ADOTANTES,
        paths::ADMIN_VOLUNTARIOS,
        paths::ADMIN_ADOCOES,
        paths::ADMIN_SISTEMA,
    ],
    default_path: paths::ADMIN_DASHBOARD,
    menu: &[
        MenuEntry { label: "Dashboard", path: paths::ADMIN_DASHBOARD, icon: "📊" },
        MenuEntry { label: "Animais", path: paths::ADMIN_ANIMAIS, icon: "🐾" },
        MenuEntry { label: "ONGs", path: paths::ADMIN_ONGS, icon: "🏠" },
        MenuEntry { label: "Adotantes", path: paths::ADMIN_ADOTANTES, icon: "👤" },
        MenuEntry { label: "Voluntários", path: paths::ADMIN_VOLUNTARIOS, icon: "🤝" },
        MenuEntry { label: "Adoções", path: paths::ADMIN_ADOCOES, icon: "❤️" },
        MenuEntry { label: "Sistema", path: paths::ADMIN_SISTEMA, icon: "⚙️" },
    ],
};

static ADOTANTE_ACCESS: RoleAccess = RoleAccess {
    role: Role::Adotante,
    // The dashboard is reachable but deliberately absent from the menu:
    // adopters land on the match deck and navigate from there.
    allowed: &[
        paths::ADOTANTE_DASHBOARD,
        paths::ADOTANTE_PERFIL,
        paths::ADOTANTE_MATCH,
        paths::ADOTANTE_INTERESSES,
        paths::ADOTANTE_CHATS,
    ],
    default_path: paths::ADOTANTE_MATCH,
    menu: &[
        MenuEntry { label: "Match", path: paths::ADOTANTE_MATCH, icon: "🔥" },
        MenuEntry { label: "Interesses", path: paths::ADOTANTE_INTERESSES, icon: "⭐" },
        MenuEntry { label: "Conversas", path: paths::ADOTANTE_CHATS, icon: "💬" },
        MenuEntry { label: "Perfil", path: paths::ADOTANTE_PERFIL, icon: "👤" },
    ],
};

static VOLUNTARIO_ACCESS: RoleAccess = RoleAccess {
    role: Role::Voluntario,
    allowed: &[
        paths::VOLUNTARIO_DASHBOARD,
        paths::VOLUNTARIO_PERFIL,
        paths::VOLUNTARIO_ANIMAIS,
        paths::VOLUNTARIO_INTERESSES,
        paths::VOLUNTARIO_CHATS,
        paths::VOLUNTARIO_ADOCOES,
    ],
    default_path: paths::VOLUNTARIO_DASHBOARD,
    menu: &[
        MenuEntry { label: "Dashboard", path: paths::VOLUNTARIO_DASHBOARD, icon: "📊" },
        MenuEntry { label: "Animais", path: paths::VOLUNTARIO_ANIMAIS, icon: "🐾" },
        MenuEntry { label: "Interesses", path: paths::VOLUNTARIO_INTERESSES, icon: "⭐" },
        MenuEntry { label: "Conversas", path: paths::VOLUNTARIO_CHATS, icon: "💬" },
        MenuEntry { label: "Adoções", path: paths::VOLUNTARIO_ADOCOES, icon: "❤️" },
        MenuEntry { label: "Perfil", path: paths::VOLUNTARIO_PERFIL, icon: "👤" },
    ],
};

/// The access descriptor for `role`.
pub fn access_for(role: Role) -> &'static RoleAccess {
    match role {
        Role::Admin => &ADMIN_ACCESS,
        Role::Adotante => &ADOTANTE_ACCESS,
        Role::Voluntario => &VOLUNTARIO_ACCESS,
    }
}

/// Paths `role` may reach, beyond the public ones.
pub fn allowed_paths(role: Role) -> &'static [&'static str] {
    access_for(role).allowed
}

/// Landing page after login for `role`.
pub fn default_path(role: Role) -> &'static str {
    access_for(role).default_path
}

/// Nav menu entries for `role`.
pub fn menu_for(role: Role) -> &'static [MenuEntry] {
    access_for(role).menu
}

/// Whether `path` is reachable without a session.
pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Whether `segment` opens any canonical path (`admin`, `login`, ...).
///
/// Drives suffix recovery when the app is served under a deployment prefix.
pub fn is_known_root_segment(segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }
    Role::ALL
        .iter()
        .flat_map(|role| allowed_paths(*role).iter())
        .chain(PUBLIC_PATHS.iter())
        .filter_map(|path| path.trim_start_matches('/').split('/').next())
        .any(|root| root == segment)
}
