//! Login Page
//!
//! Sign in (or register) and store the bearer token.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::models::{Credentials, TokenResponse};
use crate::navigation::{go_to_page, Page};
use crate::session::{Session, TokenStore};
use crate::validation::validate_credentials;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

/// Persist the token from a login response.
/// Returns the page to continue to.
pub fn complete_login<S: TokenStore>(session: &Session<S>, response: &TokenResponse) -> Result<Page, String> {
    session
        .start(&response.access_token)
        .map_err(|e| format!("Could not save session: {}", e))?;
    Ok(Page::TicketList)
}

/// Message for a failed login. A 401 here means bad credentials, not an
/// expired session.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized(detail) => detail.clone(),
        ApiError::Transport(_) => "Unable to reach the server. Please try again.".to_string(),
        other => format!("Login failed: {}", other),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = Session::browser();
    if session.is_active() {
        log::info!("[LOGIN] already signed in, going to ticket list");
        go_to_page(Page::TicketList);
    }

    let (mode, set_mode) = signal(AuthMode::Login);
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let name = username.get_untracked();
        let pass = password.get_untracked();
        if let Err(err) = validate_credentials(&name, &pass) {
            set_error.set(Some(err.to_string()));
            return;
        }
        set_error.set(None);
        set_notice.set(None);
        set_submitting.set(true);

        let credentials = Credentials {
            username: name.trim().to_string(),
            password: pass,
        };
        let current_mode = mode.get_untracked();

        spawn_local(async move {
            match current_mode {
                AuthMode::Login => match api::login(&credentials).await {
                    Ok(response) => match complete_login(&Session::browser(), &response) {
                        Ok(next) => {
                            log::info!("[LOGIN] signed in as {}", credentials.username);
                            go_to_page(next);
                        }
                        Err(message) => set_error.set(Some(message)),
                    },
                    Err(err) => {
                        log::warn!("[LOGIN] login failed: {}", err);
                        set_error.set(Some(login_error_message(&err)));
                    }
                },
                AuthMode::Register => match api::register(&credentials).await {
                    Ok(_) => {
                        log::info!("[LOGIN] registered {}", credentials.username);
                        set_password.set(String::new());
                        set_mode.set(AuthMode::Login);
                        set_notice.set(Some("Account created. Please log in.".to_string()));
                    }
                    Err(err) => {
                        log::warn!("[LOGIN] registration failed: {}", err);
                        set_error.set(Some(format!("Registration failed: {}", err)));
                    }
                },
            }
            set_submitting.set(false);
        });
    };

    let toggle_mode = move |_| {
        set_error.set(None);
        set_notice.set(None);
        set_mode.update(|m| {
            *m = match m {
                AuthMode::Login => AuthMode::Register,
                AuthMode::Register => AuthMode::Login,
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>{move || match mode.get() {
                    AuthMode::Login => "Sign in",
                    AuthMode::Register => "Create account",
                }}</h1>

                {move || notice.get().map(|msg| view! { <div class="form-notice">{msg}</div> })}
                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

                <label for="username">"Username"</label>
                <input
                    id="username"
                    type="text"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />

                <label for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    autocomplete=move || match mode.get() {
                        AuthMode::Login => "current-password",
                        AuthMode::Register => "new-password",
                    }
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                <button type="submit" prop:disabled=move || submitting.get()>
                    {move || match (mode.get(), submitting.get()) {
                        (AuthMode::Login, false) => "Login",
                        (AuthMode::Login, true) => "Logging in...",
                        (AuthMode::Register, false) => "Register",
                        (AuthMode::Register, true) => "Registering...",
                    }}
                </button>

                <button type="button" class="link-btn" on:click=toggle_mode>
                    {move || match mode.get() {
                        AuthMode::Login => "No account? Register",
                        AuthMode::Register => "Already registered? Log in",
                    }}
                </button>
            </form>
        </div>
    }
}
