// web_app/entry.rs - Pre-authentication view selection
//
// The index route shows either the registration form or the login form.
// Once the login form is showing there is no way back short of a reload.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryView {
    #[default]
    Registering,
    LoggingIn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryEvent {
    /// Signup returned 2xx
    RegistrationSucceeded,
    /// "Already have an account?" link
    LoginRequested,
}

impl EntryView {
    pub fn transition(self, event: EntryEvent) -> Self {
        match (self, event) {
            (EntryView::Registering, EntryEvent::RegistrationSucceeded)
            | (EntryView::Registering, EntryEvent::LoginRequested) => EntryView::LoggingIn,
            (EntryView::LoggingIn, _) => EntryView::LoggingIn,
        }
    }

    pub fn is_login(self) -> bool {
        self == EntryView::LoggingIn
    }
}
