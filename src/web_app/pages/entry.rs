// web_app/pages/entry.rs - Index page
//
// Shows the registration form until the user registers (or asks to log in),
// then swaps in the login form. No route change is involved.

use leptos::prelude::*;

use crate::web_app::components::{LoginForm, RegisterForm};
use crate::web_app::entry::{EntryEvent, EntryView};

#[component]
pub fn EntryPage() -> impl IntoView {
    let view_state = RwSignal::new(EntryView::default());

    let on_registered = Callback::new(move |()| {
        view_state.update(|v| *v = v.transition(EntryEvent::RegistrationSucceeded));
    });

    let on_login_requested = Callback::new(move |()| {
        view_state.update(|v| *v = v.transition(EntryEvent::LoginRequested));
    });

    view! {
        <div class="max-w-xl mx-auto mt-12 px-4">
            <h1 class="text-4xl font-bold text-center text-gray-900 mb-8">"Welcome"</h1>

            <Show
                when=move || view_state.get().is_login()
                fallback=move || view! {
                    <RegisterForm on_success=on_registered on_login_requested=on_login_requested />
                }
            >
                <LoginForm />
            </Show>
        </div>
    }
}
