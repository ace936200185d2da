mod api_ext;
mod login_params;
mod reset_password_params;
mod signup_params;
mod token_claims;
mod verify_otp_params;
mod verify_otp_response;

pub use self::{
    api_ext::AuthApi, login_params::LoginParams, reset_password_params::ResetPasswordParams,
    signup_params::SignupParams, token_claims::TokenClaims, verify_otp_params::VerifyOtpParams,
    verify_otp_response::VerifyOtpResponse,
};
