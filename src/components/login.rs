//! Auth Pages
//!
//! Sign-in form and teacher registration.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::alert::{flash, Alert};
use crate::commands::{self, AdminSignUpArgs, LoginArgs};
use crate::context::{use_app_context, Page};

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_app_context();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get().trim().to_string();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            set_error.set(Some("Please fill out all fields.".to_string()));
            return;
        }

        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let args = LoginArgs {
                email: &email_value,
                password: &password_value,
            };
            let result = commands::login(&args).await;
            set_loading.set(false);
            match result {
                Ok(user) => ctx.sign_in(user),
                Err(e) => {
                    log::warn!("[Login] sign-in failed: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Sign in"</h1>
            <form class="auth-form" on:submit=submit>
                <label for="email">"Email"</label>
                <input
                    type="email"
                    id="email"
                    placeholder="name@school.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <label for="password">"Password"</label>
                <input
                    type="password"
                    id="password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="auth-switch">
                "Teacher without an account? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Page::TeacherSignUp);
                }>"Register here"</a>
            </p>
            <Alert message=error />
        </div>
    }
}

#[component]
pub fn TeacherSignUp() -> impl IntoView {
    let ctx = use_app_context();
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (admin_key, set_admin_key) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username_value = username.get().trim().to_string();
        let email_value = email.get().trim().to_string();
        let password_value = password.get();
        let key_value = admin_key.get().trim().to_string();
        if [&username_value, &email_value, &password_value, &key_value]
            .iter()
            .any(|v| v.is_empty())
        {
            set_error.set(Some("Please fill out all fields.".to_string()));
            return;
        }

        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let args = AdminSignUpArgs {
                username: &username_value,
                email: &email_value,
                password: &password_value,
                admin_key: &key_value,
            };
            match commands::admin_sign_up(&args).await {
                Ok(()) => {
                    log::info!("[TeacherSignUp] registered {}", username_value);
                    set_password.set(String::new());
                    set_admin_key.set(String::new());
                    flash(set_notice, "Account created. You can sign in now.");
                }
                Err(e) => {
                    log::warn!("[TeacherSignUp] registration failed: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    };

    let field = move |id: &'static str,
                      label: &'static str,
                      kind: &'static str,
                      value: ReadSignal<String>,
                      set: WriteSignal<String>| {
        view! {
            <label for=id>{label}</label>
            <input
                type=kind
                id=id
                prop:value=move || value.get()
                on:input=move |ev| set.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Teacher registration"</h1>
            <p class="auth-hint">"Enter your admin key to create a teacher account."</p>
            <form class="auth-form" on:submit=submit>
                {field("username", "Username", "text", username, set_username)}
                {field("email", "Email", "email", email, set_email)}
                {field("password", "Password", "password", password, set_password)}
                {field("adminKey", "Admin key", "password", admin_key, set_admin_key)}
                <button type="submit" class="primary-btn" disabled=move || loading.get()>
                    {move || if loading.get() { "Creating account..." } else { "Create account" }}
                </button>
            </form>
            <p class="auth-switch">
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Page::Login);
                }>"Back to sign in"</a>
            </p>
            <Alert message=error />
            <Alert message=notice success=true />
        </div>
    }
}
