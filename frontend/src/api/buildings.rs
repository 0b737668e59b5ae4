use super::{
    client::{ApiClient, ApiGroup},
    types::{ApiError, Building, BuildingInput},
};

impl ApiClient {
    pub async fn list_buildings(&self) -> Result<Vec<Building>, ApiError> {
        self.get(ApiGroup::Reports, "/edificios/").await
    }

    pub async fn get_building(&self, id: i64) -> Result<Building, ApiError> {
        self.get(ApiGroup::Reports, &format!("/edificios/{}/", id))
            .await
    }

    pub async fn create_building(&self, input: &BuildingInput) -> Result<Building, ApiError> {
        self.post(ApiGroup::Reports, "/edificios/", input).await
    }

    pub async fn update_building(&self, id: i64, input: &BuildingInput) -> Result<Building, ApiError> {
        self.put(ApiGroup::Reports, &format!("/edificios/{}/", id), input)
            .await
    }

    pub async fn delete_building(&self, id: i64) -> Result<(), ApiError> {
        self.delete(ApiGroup::Reports, &format!("/edificios/{}/", id))
            .await
    }
}
