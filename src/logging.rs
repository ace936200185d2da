mod otp_log_context;

pub use self::otp_log_context::OtpLogContext;
