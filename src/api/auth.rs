//! Auth Endpoints

use super::{ApiError, ApiRequest};
use crate::models::{Credentials, RegisterResponse, TokenResponse};

pub async fn login(credentials: &Credentials) -> Result<TokenResponse, ApiError> {
    ApiRequest::post("/auth/login")
        .json(credentials)?
        .send()
        .await?
        .into_result()
}

pub async fn register(credentials: &Credentials) -> Result<RegisterResponse, ApiError> {
    ApiRequest::post("/auth/register")
        .json(credentials)?
        .send()
        .await?
        .into_result()
}
