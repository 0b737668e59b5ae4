use super::{
    client::{ApiClient, ApiGroup},
    types::{ApiError, Bed, BedInput},
};

impl ApiClient {
    pub async fn list_beds(&self) -> Result<Vec<Bed>, ApiError> {
        self.get(ApiGroup::Reports, "/camas/").await
    }

    pub async fn get_bed(&self, id: i64) -> Result<Bed, ApiError> {
        self.get(ApiGroup::Reports, &format!("/camas/{}/", id)).await
    }

    pub async fn create_bed(&self, input: &BedInput) -> Result<Bed, ApiError> {
        self.post(ApiGroup::Reports, "/camas/", input).await
    }

    pub async fn update_bed(&self, id: i64, input: &BedInput) -> Result<Bed, ApiError> {
        self.put(ApiGroup::Reports, &format!("/camas/{}/", id), input)
            .await
    }

    pub async fn delete_bed(&self, id: i64) -> Result<(), ApiError> {
        self.delete(ApiGroup::Reports, &format!("/camas/{}/", id))
            .await
    }
}
