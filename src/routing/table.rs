//! Static route table for the console.
//!
//! DESIGN
//! ======
//! Descriptors carry the authorization fact (`restricted`) the
//! guard needs; the Leptos router only supplies the current path. Action
//! entries (`/logout`, `/profile`) never render a view.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Screens the console can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    Login,
    SensorList,
    SensorDetail,
    RegisterSensor,
    UserList,
    UserDetail,
    Signup,
}

impl View {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Início",
            Self::Login => "Login Usuário",
            Self::SensorList => "Registro de Sensores",
            Self::SensorDetail => "Sensor",
            Self::RegisterSensor => "Registrar Sensor",
            Self::UserList => "Usuários",
            Self::UserDetail => "Usuário",
            Self::Signup => "Criar Conta",
        }
    }
}

/// Navigation targets that perform work instead of rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAction {
    Logout,
    Profile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    View(View),
    Action(RouteAction),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// `/`-separated segments; `:name` captures one segment.
    pub pattern: &'static str,
    pub target: RouteTarget,
    /// Requires an authenticated session.
    pub restricted: bool,
}

impl RouteDescriptor {
    const fn public(pattern: &'static str, view: View) -> Self {
        Self { pattern, target: RouteTarget::View(view), restricted: false }
    }

    const fn restricted(pattern: &'static str, view: View) -> Self {
        Self { pattern, target: RouteTarget::View(view), restricted: true }
    }

    const fn action(pattern: &'static str, action: RouteAction) -> Self {
        Self { pattern, target: RouteTarget::Action(action), restricted: false }
    }

    /// Captured `:param` values if `path` matches this pattern.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        let mut wanted = segments(self.pattern);
        let mut actual = segments(path);
        let mut params = RouteParams::default();
        loop {
            match (wanted.next(), actual.next()) {
                (None, None) => return Some(params),
                (Some(w), Some(a)) => {
                    if let Some(name) = w.strip_prefix(':') {
                        params.0.push((name.to_owned(), a.to_owned()));
                    } else if w != a {
                        return None;
                    }
                }
                _ => return None,
            }
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty())
}

/// Named path captures, in pattern order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(String, String)>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const LOGOUT_PATH: &str = "/logout";
pub const PROFILE_PATH: &str = "/profile";

const CONSOLE_ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::public(HOME_PATH, View::Dashboard),
    RouteDescriptor::public(LOGIN_PATH, View::Login),
    RouteDescriptor::public("/sensors", View::SensorList),
    RouteDescriptor::public("/sensors/:sensorId", View::SensorDetail),
    RouteDescriptor::restricted("/register", View::RegisterSensor),
    RouteDescriptor::public("/users", View::UserList),
    RouteDescriptor::public("/users/:publicKey", View::UserDetail),
    RouteDescriptor::public("/signup", View::Signup),
    RouteDescriptor::action(LOGOUT_PATH, RouteAction::Logout),
    RouteDescriptor::action(PROFILE_PATH, RouteAction::Profile),
];

/// Ordered route table; the first matching pattern wins.
#[derive(Clone, Copy, Debug)]
pub struct RouteTable {
    routes: &'static [RouteDescriptor],
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::console()
    }
}

impl RouteTable {
    #[must_use]
    pub const fn console() -> Self {
        Self { routes: CONSOLE_ROUTES }
    }

    pub fn routes(&self) -> &'static [RouteDescriptor] {
        self.routes
    }

    /// Descriptor registered under exactly `pattern`.
    pub fn get(&self, pattern: &str) -> Option<&'static RouteDescriptor> {
        self.routes.iter().find(|r| r.pattern == pattern)
    }

    pub fn match_path(&self, path: &str) -> Option<(&'static RouteDescriptor, RouteParams)> {
        self.routes
            .iter()
            .find_map(|route| route.match_path(path).map(|params| (route, params)))
    }
}

/// `/users/<public key>`, the detail page the profile action lands on.
#[must_use]
pub fn user_detail_path(public_key: &str) -> String {
    format!("/users/{public_key}")
}
