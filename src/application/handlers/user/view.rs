//! Presentation snapshot of a user.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::foundation::{LifecycleStatus, Timestamp, UserId};
use crate::domain::user::{Enumerated, User};

/// Read model returned by user queries.
///
/// Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub country: String,
    pub language: String,
    pub phone: Option<String>,
    pub information: Option<String>,
    pub profile_picture: Option<String>,
    pub profile_pic_url: Option<String>,
    pub website: Option<String>,
    pub visible: bool,
    pub status: LifecycleStatus,
    pub last_login_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl UserView {
    /// Builds the view; `static_base_url` must not end with a slash.
    pub fn from_user(user: &User, static_base_url: &str) -> Self {
        Self {
            id: *user.id(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            gender: user.gender().code().to_string(),
            birth_date: user.birth_date().date(),
            country: user.country().code().to_string(),
            language: user.language().code().to_string(),
            phone: user.phone().map(ToString::to_string),
            information: user.information().map(str::to_string),
            profile_picture: user.profile_picture().map(str::to_string),
            profile_pic_url: user
                .profile_picture()
                .map(|picture| format!("{}/{}", static_base_url, picture)),
            website: user.website().map(ToString::to_string),
            visible: user.is_visible(),
            status: user.status(),
            last_login_at: user.last_login_at(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
            deleted_at: user.deleted_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::aggregate::test_support::john_doe;

    const BASE: &str = "http://localhost:8080/static";

    #[test]
    fn maps_accessors_to_canonical_strings() {
        let user = john_doe();
        let view = UserView::from_user(&user, BASE);

        assert_eq!(view.username, "johndoe");
        assert_eq!(view.gender, "M");
        assert_eq!(view.country, "BO");
        assert_eq!(view.language, "ES");
        assert_eq!(view.phone.as_deref(), Some("+591-77141516"));
        assert_eq!(view.birth_date.to_string(), "1990-04-01");
        assert_eq!(view.status, LifecycleStatus::Active);
        assert_eq!(view.profile_pic_url, None);
    }

    #[test]
    fn picture_url_joins_base_and_file_name() {
        let mut user = john_doe();
        user.change_profile_picture(Some("avatar-1.png".to_string()))
            .unwrap();

        let view = UserView::from_user(&user, BASE);
        assert_eq!(
            view.profile_pic_url.as_deref(),
            Some("http://localhost:8080/static/avatar-1.png")
        );
    }

    #[test]
    fn serialized_view_has_no_password() {
        let json = serde_json::to_value(UserView::from_user(&john_doe(), BASE)).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["status"], "active");
    }
}
