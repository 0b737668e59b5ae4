use super::{
    client::{ApiClient, ApiGroup},
    types::{ApiError, Room, RoomInput},
};

impl ApiClient {
    pub async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.get(ApiGroup::Reports, "/quartos/").await
    }

    pub async fn get_room(&self, id: i64) -> Result<Room, ApiError> {
        self.get(ApiGroup::Reports, &format!("/quartos/{}/", id)).await
    }

    pub async fn create_room(&self, input: &RoomInput) -> Result<Room, ApiError> {
        self.post(ApiGroup::Reports, "/quartos/", input).await
    }

    pub async fn update_room(&self, id: i64, input: &RoomInput) -> Result<Room, ApiError> {
        self.put(ApiGroup::Reports, &format!("/quartos/{}/", id), input)
            .await
    }

    pub async fn delete_room(&self, id: i64) -> Result<(), ApiError> {
        self.delete(ApiGroup::Reports, &format!("/quartos/{}/", id))
            .await
    }
}
