// web_app/components/common.rs - Reusable UI components
//
// Small stateless building blocks shared by the forms and the catalog page.

use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Inline error line for page-level failures
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-4 mb-6 flex items-start gap-3" role="alert">
            <span class="text-red-600 text-xl font-bold">"⚠"</span>
            <p class="text-red-700 text-sm">{error}</p>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    pub fn class(self) -> &'static str {
        match self {
            AlertKind::Success => "mt-5 px-4 py-3 rounded-lg text-sm bg-green-50 text-green-800 border border-green-200",
            AlertKind::Error => "mt-5 px-4 py-3 rounded-lg text-sm bg-red-50 text-red-800 border border-red-200",
        }
    }
}

/// Success/error banner shown under a form
#[component]
pub fn Alert(
    kind: AlertKind,
    message: String,
) -> impl IntoView {
    view! {
        <div class=kind.class() role="alert">
            {message}
        </div>
    }
}

/// Primary button component
///
/// A styled button with hover effects.
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                      transition-colors font-medium shadow-sm active:transform active:scale-95";

    view! {
        <button type=button_type class=format!("{} {}", base_class, class)>
            {children()}
        </button>
    }
}

/// Labelled form input bound to a signal
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Label shown above the field
    label: &'static str,
    /// Input type (text, email, password, search)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Blocks form submission while empty
    #[prop(default = false)]
    required: bool,
) -> impl IntoView {
    let class = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                 focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                 outline-none transition-shadow shadow-sm";

    view! {
        <label class="block mt-4">
            <span class="block text-sm font-medium text-gray-700 mb-1">{label}</span>
            <input
                type=input_type
                required=required
                class=class
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                }
            />
        </label>
    }
}
