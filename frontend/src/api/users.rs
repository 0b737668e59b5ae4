use super::{
    client::{ApiClient, ApiGroup},
    types::{ApiError, User, UserInput},
};

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get(ApiGroup::Accounts, "/users/").await
    }

    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.get(ApiGroup::Accounts, &format!("/users/{}/", id)).await
    }

    pub async fn create_user(&self, input: &UserInput) -> Result<User, ApiError> {
        self.post(ApiGroup::Accounts, "/users/", input).await
    }

    pub async fn update_user(&self, id: i64, input: &UserInput) -> Result<User, ApiError> {
        self.put(ApiGroup::Accounts, &format!("/users/{}/", id), input)
            .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.delete(ApiGroup::Accounts, &format!("/users/{}/", id))
            .await
    }
}
