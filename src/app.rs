//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::config::ConsoleConfig;
use crate::net::api::Dispatcher;
use crate::net::error::report_error;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::routing::guard::{GuardState, RouteGuard};
use crate::routing::table::{RouteDescriptor, RouteParams, RouteTable, RouteTarget, View};
use crate::state::auth::AuthContext;
use crate::state::session::{CredentialStore, SharedStore};
use crate::util::storage::SharedStorage;

/// Renders views owned by the embedding application (lists, details, forms).
pub type ViewRenderer = Arc<dyn Fn(View, &RouteParams) -> AnyView + Send + Sync>;

#[derive(Clone, Default)]
struct ExternalViews(Option<ViewRenderer>);

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn console_storage() -> SharedStorage {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(crate::util::storage::BrowserStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(crate::util::storage::MemoryStorage::new())
    }
}

/// Root application component.
///
/// Builds the session store once and provides it, the dispatcher and the
/// route guard to every route.
#[component]
pub fn App(#[prop(optional)] views: Option<ViewRenderer>) -> impl IntoView {
    provide_meta_context();

    let config = ConsoleConfig::from_build_env();
    let store: SharedStore = Arc::new(CredentialStore::new(console_storage(), config.storage_keys.clone()));

    provide_context(AuthContext::new(store.clone()));
    provide_context(Dispatcher::new(config.api_prefix.clone(), store));
    provide_context(RouteGuard::from_config(&config));
    provide_context(ExternalViews(views));
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/sprinkle-console.css"/>
        <Title text="Outorga ANA"/>

        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=StaticSegment("") view=|| view! { <GuardedRoute pattern="/"/> }/>
                <Route path=StaticSegment("login") view=|| view! { <GuardedRoute pattern="/login"/> }/>
                <Route path=StaticSegment("sensors") view=|| view! { <GuardedRoute pattern="/sensors"/> }/>
                <Route
                    path=(StaticSegment("sensors"), ParamSegment("sensorId"))
                    view=|| view! { <GuardedRoute pattern="/sensors/:sensorId"/> }
                />
                <Route path=StaticSegment("register") view=|| view! { <GuardedRoute pattern="/register"/> }/>
                <Route path=StaticSegment("users") view=|| view! { <GuardedRoute pattern="/users"/> }/>
                <Route
                    path=(StaticSegment("users"), ParamSegment("publicKey"))
                    view=|| view! { <GuardedRoute pattern="/users/:publicKey"/> }
                />
                <Route path=StaticSegment("signup") view=|| view! { <GuardedRoute pattern="/signup"/> }/>
                <Route path=StaticSegment("logout") view=|| view! { <ActionRoute pattern="/logout"/> }/>
                <Route path=StaticSegment("profile") view=|| view! { <ActionRoute pattern="/profile"/> }/>
            </Routes>
        </Router>
    }
}

fn route_params(route: &RouteDescriptor, lookup: impl Fn(&str) -> Option<String>) -> RouteParams {
    route
        .pattern
        .split('/')
        .filter_map(|segment| segment.strip_prefix(':'))
        .filter_map(|name| lookup(name).map(|value| (name.to_owned(), value)))
        .collect()
}

fn render_view(target: RouteTarget, params: &RouteParams, external: &ExternalViews) -> AnyView {
    match target {
        RouteTarget::View(View::Dashboard) => view! { <DashboardPage/> }.into_any(),
        RouteTarget::View(View::Login) => view! { <LoginPage/> }.into_any(),
        RouteTarget::View(view) => match &external.0 {
            Some(render) => render(view, params),
            None => view! { <h2 class="text-center">{view.title()}</h2> }.into_any(),
        },
        RouteTarget::Action(_) => ().into_any(),
    }
}

/// Content route: re-resolved on every render so role changes apply at once.
#[component]
fn GuardedRoute(pattern: &'static str) -> impl IntoView {
    let Some(route) = RouteTable::console().get(pattern) else {
        return view! { <NotFound/> }.into_any();
    };
    let auth = expect_context::<AuthContext>();
    let guard = expect_context::<RouteGuard>();
    let external = expect_context::<ExternalViews>();
    let params = use_params_map();

    (move || match guard.resolve(route, &auth) {
        Ok(GuardState::Granted(frame)) => {
            let values = params.with(|map| route_params(route, |name| map.get(name)));
            let content = render_view(route.target, &values, &external);
            view! { <Layout frame=frame>{content}</Layout> }.into_any()
        }
        Ok(GuardState::Redirected(path)) => view! { <Redirect path=path/> }.into_any(),
        Ok(GuardState::Pending | GuardState::Deferred) => ().into_any(),
        Err(err) => {
            report_error(&err);
            ().into_any()
        }
    })
    .into_any()
}

/// Action route (`/logout`, `/profile`): runs once in the browser, then navigates.
#[component]
fn ActionRoute(pattern: &'static str) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let guard = expect_context::<RouteGuard>();
    let navigate = use_navigate();
    let route = RouteTable::console().get(pattern);

    Effect::new(move || {
        let Some(route) = route else {
            return;
        };
        if let GuardState::Redirected(path) = untrack(|| guard.resolve_action(route, &auth)) {
            navigate(&path, NavigateOptions { replace: true, ..Default::default() });
        }
    });
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <p class="text-center">"Página não encontrada."</p> }
}
