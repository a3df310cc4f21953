//! Login page: exchanges username/password for a session token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ConsoleConfig;
use crate::net::api::Dispatcher;
use crate::state::auth::AuthContext;

const MISSING_CREDENTIALS: &str = "Informe username e senha.";

/// Trimmed username plus untouched password, or the message to show.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let dispatcher = expect_context::<Dispatcher>();
    let config = expect_context::<ConsoleConfig>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Entrando...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            let dispatcher = dispatcher.clone();
            let navigate = navigate.clone();
            let home = config.home_route.clone();
            leptos::task::spawn_local(async move {
                match dispatcher.authenticate(&user, &pass).await {
                    Ok(resp) => match auth.login(&resp.authorization, resp.is_admin(), resp.display_name()) {
                        Ok(_) => navigate(&home, NavigateOptions::default()),
                        Err(err) => crate::net::error::report_error(&err),
                    },
                    Err(err) => crate::net::error::report_error(&err),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass, &auth, &dispatcher, &navigate, &config);
        }
    };

    view! {
        <div class="login-form">
            <form on:submit=on_submit>
                <legend>"Login Usuário"</legend>
                <div class="form-group">
                    <input
                        class="form-control"
                        type="text"
                        placeholder="Username ou Chave Pública"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <input
                        class="form-control"
                        type="password"
                        placeholder="Senha"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <div class="row justify-content-end align-items-end">
                        <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                            "Login"
                        </button>
                    </div>
                </div>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="login-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
