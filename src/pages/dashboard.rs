//! Landing page: welcome back for a signed-in user, product blurb otherwise.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::state::auth::AuthContext;
use crate::state::identity::Identity;

pub(crate) fn welcome_message(identity: &Identity) -> Option<String> {
    if !identity.is_authenticated() {
        return None;
    }
    Some(format!("Bem-vindo(a) de volta, {}!", identity.display_name().unwrap_or_default()))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let greeting = move || welcome_message(&auth.identity());

    view! {
        <div class="header text-center mb-4">
            <h4>"Seja bem vindo ao"</h4>
            <h1 class="mb-3">"Outorga ANA"</h1>
            <h5>
                <em>"Oferecido por " <strong>"Zetta/UFLA"</strong></em>
            </h5>
        </div>
        <div class="blurb">
            {move || match greeting() {
                Some(message) => view! { <p>{message}</p> }.into_any(),
                None => {
                    view! {
                        <p>
                            <em>"Outorga ANA"</em>
                            " é uma aplicação que permite o controle e auditoria das captações de água"
                            " concedidas pela ANA. O consumo lido por sensores é registrado em um"
                            " livro-razão distribuído e atrelado aos consumidores."
                        </p>
                        <p>
                            "Para usar o " <em>"Outorga ANA"</em>
                            ", faça log in ou, caso não possua conta, entre em contato conosco e"
                            " peça o seu cadastro."
                        </p>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
