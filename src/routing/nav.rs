//! Navigation link sets per role.
//!
//! A link is only listed for a role the guard would grant it to, so the
//! navbar never offers a route that bounces the user elsewhere.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use super::table::{LOGIN_PATH, LOGOUT_PATH, PROFILE_PATH};
use crate::state::session::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKind {
    Link,
    /// Rendered as a button on the right of the navbar.
    Button,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub kind: NavKind,
}

const fn link(path: &'static str, label: &'static str) -> NavLink {
    NavLink { path, label, kind: NavKind::Link }
}

const fn button(path: &'static str, label: &'static str) -> NavLink {
    NavLink { path, label, kind: NavKind::Button }
}

const ADMIN_LINKS: &[NavLink] = &[
    link("/sensors", "Ver Registro de Sensores"),
    link("/users", "Ver Usuários"),
    link("/signup", "Cadastrar Usuário"),
    link(PROFILE_PATH, "Perfil"),
    button(LOGOUT_PATH, "Sair"),
];

const USER_LINKS: &[NavLink] = &[
    link("/register", "Registrar Sensor"),
    link("/sensors", "Ver Registro de Sensores"),
    link(PROFILE_PATH, "Perfil"),
    button(LOGOUT_PATH, "Sair"),
];

const ANONYMOUS_LINKS: &[NavLink] = &[button(LOGIN_PATH, "Log in/Criar conta")];

/// Ordered navbar entries for `role`.
#[must_use]
pub fn links_for(role: Role) -> &'static [NavLink] {
    match role {
        Role::Admin => ADMIN_LINKS,
        Role::User => USER_LINKS,
        Role::Anonymous => ANONYMOUS_LINKS,
    }
}
