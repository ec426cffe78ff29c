pub mod otp;
pub mod password;
pub mod profile;
pub mod register;
pub mod session;
