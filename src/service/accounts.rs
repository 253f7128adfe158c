use crate::db::UserStorage;
use crate::error::ApiError;
use bcrypt::{DEFAULT_COST, hash, verify};
use tracing::info;

/// Signup/login over the user store. Passwords are bcrypt-hashed before they
/// reach the database and never leave it.
#[derive(Clone)]
pub struct AccountService {
    storage: UserStorage,
}

impl AccountService {
    pub fn new(storage: UserStorage) -> Self {
        Self { storage }
    }

    /// Create a user. Fails with `DuplicateEmail` when the email is taken.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        let password_hash = hash(password, DEFAULT_COST)?;
        let id = self.storage.insert_user(name, email, &password_hash).await?;
        info!(user_id = id, "user created");
        Ok("User created successfully!".to_string())
    }

    /// Verify credentials and return the welcome message.
    ///
    /// The unknown-email and wrong-password cases return the identical
    /// `InvalidCredentials` error so a caller cannot probe which emails are
    /// registered.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let Some(user) = self.storage.get_by_email(email).await? else {
            return Err(ApiError::InvalidCredentials);
        };
        if !verify(password, &user.password_hash)? {
            return Err(ApiError::InvalidCredentials);
        }
        Ok(format!("Welcome {}!", user.name))
    }
}
