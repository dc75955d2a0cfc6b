// web_app/components/auth.rs - Registration and login forms
//
// Thin Leptos wrappers around the submit flows in web_app::auth. The forms
// own their field signals and a FormState for the banner underneath.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::common::{Alert, AlertKind, Button, TextInput};
use crate::web_app::api::ApiClient;
use crate::web_app::app::{use_api_config, use_session, PRODUCTS_ROUTE};
use crate::web_app::auth::{log_in, register, FormState};
use crate::web_app::model::Credentials;

const FORM_CLASS: &str = "flex flex-col max-w-md mx-auto p-6 bg-gray-50 rounded-xl shadow-md";

/// Banner pair rendered under both forms
#[component]
fn FormBanners(state: RwSignal<FormState>) -> impl IntoView {
    view! {
        {move || {
            let message = state.get().message;
            (!message.is_empty()).then(|| view! { <Alert kind=AlertKind::Success message=message /> })
        }}
        {move || {
            state.get().error.map(|error| view! { <Alert kind=AlertKind::Error message=error /> })
        }}
    }
}

/// Account registration form
#[component]
pub fn RegisterForm(
    /// Fired once after the server accepts the registration
    on_success: Callback<()>,
    /// Fired by the "Login here" link
    on_login_requested: Callback<()>,
) -> impl IntoView {
    let config = use_api_config();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let state = RwSignal::new(FormState::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        let api = ApiClient::new(config.clone());
        spawn_local(async move {
            let outcome = register(&api, &credentials).await;
            state.update(|s| s.apply(&outcome));
            if outcome.is_success() {
                on_success.run(());
            }
        });
    };

    view! {
        <form on:submit=on_submit class=FORM_CLASS>
            <h2 class="text-2xl font-bold text-gray-900 mb-2">"Register"</h2>

            <TextInput value=email label="Email" input_type="email" required=true />
            <TextInput value=password label="Password" input_type="password" required=true />

            <Button button_type="submit" class="mt-5 w-full">"Register"</Button>

            <FormBanners state=state />

            <p class="text-center mt-5 text-gray-600">
                "Already have an account?"
                <a
                    href="#"
                    class="ml-1 text-blue-600 hover:underline"
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_login_requested.run(());
                    }
                >
                    "Login here"
                </a>
            </p>
        </form>
    }
}

/// Login form; navigates to the catalog once a token is stored
#[component]
pub fn LoginForm() -> impl IntoView {
    let config = use_api_config();
    let session = use_session();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let state = RwSignal::new(FormState::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        state.update(FormState::begin);

        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        let api = ApiClient::new(config.clone());
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = log_in(&api, &session, &credentials).await;
            state.update(|s| s.apply(&outcome));
            if outcome.is_success() {
                navigate(PRODUCTS_ROUTE, NavigateOptions::default());
            }
        });
    };

    view! {
        <form on:submit=on_submit class=FORM_CLASS>
            <h2 class="text-2xl font-bold text-gray-900 mb-2">"Login"</h2>

            <TextInput value=email label="Email" input_type="email" required=true />
            <TextInput value=password label="Password" input_type="password" required=true />

            <Button button_type="submit" class="mt-5 w-full">"Login"</Button>

            <FormBanners state=state />
        </form>
    }
}
