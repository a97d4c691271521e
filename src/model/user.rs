use serde::{Deserialize, Serialize};

/// The signed-in customer's profile.
///
/// Static for the lifetime of a session; seeded from
/// [`ProfileConfig`](crate::lifecycle::ProfileConfig).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// Loyalty points balance.
    pub points: u32,
    pub is_verified: bool,
    pub profile_pic_url: String,
}

impl UserProfile {
    /// Creates an unverified profile with no points and no picture.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Contact address
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            points: 0,
            is_verified: false,
            profile_pic_url: String::new(),
        }
    }
}
