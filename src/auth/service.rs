use crate::{app::models::api_error::ApiError, AppState};

use super::{dtos::login_dto::LoginDto, errors::AuthApiError, models::access_info::AccessInfo};

pub fn login(dto: &LoginDto, state: &AppState) -> Result<AccessInfo, ApiError> {
    match state.gate.unlock(&dto.password) {
        true => {
            tracing::info!("access gate unlocked");
            Ok(AccessInfo { unlocked: true })
        }
        false => {
            tracing::warn!("rejected access gate password");
            Err(AuthApiError::IncorrectPassword.value())
        }
    }
}
