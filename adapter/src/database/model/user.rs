use kernel::model::user::User;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            id,
            username,
            password_hash,
        } = value;
        User {
            id: id.into(),
            username,
            password_hash,
        }
    }
}
