pub mod user_id;
pub mod validation;

pub use user_id::UserId;
