pub trait UserLike {
    fn id(&self) -> i32;
    fn access_token(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub access_token: String,
}

impl User {
    pub fn new(id: i32, username: String, access_token: String) -> Self {
        Self {
            id,
            username,
            access_token,
        }
    }
}

impl UserLike for User {
    fn id(&self) -> i32 {
        self.id
    }

    fn access_token(&self) -> &str {
        &self.access_token
    }
}
