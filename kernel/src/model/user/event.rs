use derive_new::new;

#[derive(Debug, Clone, new)]
pub struct CreateUser {
    pub username: String,
    /// Plaintext only in transit; the storage layer hashes before persisting.
    pub password: String,
}
