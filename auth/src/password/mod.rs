pub mod bcrypt;
pub mod errors;

pub use bcrypt::PasswordHasher;
pub use bcrypt::MAX_COST;
pub use bcrypt::MIN_COST;
pub use errors::PasswordError;
