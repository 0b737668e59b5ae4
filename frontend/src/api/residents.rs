use super::{
    client::{ApiClient, ApiGroup},
    types::{ApiError, Residence, Resident, ResidentInput},
};

impl ApiClient {
    pub async fn list_residents(&self) -> Result<Vec<Resident>, ApiError> {
        self.get(ApiGroup::Reports, "/residentes/").await
    }

    pub async fn get_resident(&self, id: i64) -> Result<Resident, ApiError> {
        self.get(ApiGroup::Reports, &format!("/residentes/{}/", id))
            .await
    }

    pub async fn create_resident(&self, input: &ResidentInput) -> Result<Resident, ApiError> {
        self.post(ApiGroup::Reports, "/residentes/", input).await
    }

    pub async fn update_resident(&self, id: i64, input: &ResidentInput) -> Result<Resident, ApiError> {
        self.put(ApiGroup::Reports, &format!("/residentes/{}/", id), input)
            .await
    }

    pub async fn delete_resident(&self, id: i64) -> Result<(), ApiError> {
        self.delete(ApiGroup::Reports, &format!("/residentes/{}/", id))
            .await
    }

    pub async fn list_residences(&self) -> Result<Vec<Residence>, ApiError> {
        self.get(ApiGroup::Reports, "/residencias/").await
    }
}
