//! Auth Commands
//!
//! Sign-in, teacher registration and sign-out.

use serde::Serialize;

use super::{post_empty, post_json};
use crate::error::ApiResult;
use crate::models::User;

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct AdminSignUpArgs<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    #[serde(rename = "adminKey")]
    pub admin_key: &'a str,
}

pub async fn login(args: &LoginArgs<'_>) -> ApiResult<User> {
    post_json("/api/auth/login", args).await
}

/// Register a teacher (admin) account. The admin key is checked server-side.
pub async fn admin_sign_up(args: &AdminSignUpArgs<'_>) -> ApiResult<()> {
    let _: serde_json::Value = post_json("/api/auth/admin-signup", args).await?;
    Ok(())
}

pub async fn sign_out() -> ApiResult<()> {
    post_empty("/api/user/signout").await
}
