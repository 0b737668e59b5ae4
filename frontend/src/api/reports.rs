use super::{
    client::{ApiClient, ApiGroup},
    types::{
        ApiError, ApplicationStatus, BedOccupancyResponse, BuildingType, BuildingTypesResponse,
        CategoryCount, ResidentTotalResponse, ResidentsPerBuildingRow, RoomOccupancyResponse,
        StatusCountsResponse,
    },
};

pub fn status_counts(response: StatusCountsResponse) -> Vec<CategoryCount> {
    response
        .status_counts
        .into_iter()
        .map(|row| {
            let label = ApplicationStatus::parse(&row.status)
                .map(|s| s.label().to_string())
                .unwrap_or(row.status);
            CategoryCount::new(label, row.count)
        })
        .collect()
}

pub fn building_type_counts(response: BuildingTypesResponse) -> Vec<CategoryCount> {
    response
        .total_por_tipo
        .into_iter()
        .map(|row| {
            let label = BuildingType::parse(&row.name)
                .map(|t| t.label().to_string())
                .unwrap_or(row.name);
            CategoryCount::new(label, row.count)
        })
        .collect()
}

pub fn residents_per_building(rows: Vec<ResidentsPerBuildingRow>) -> Vec<CategoryCount> {
    rows.into_iter()
        .map(|row| CategoryCount::new(row.nome, row.num_residentes))
        .collect()
}

pub fn resident_total(response: ResidentTotalResponse) -> Vec<CategoryCount> {
    vec![CategoryCount::new("Residentes", response.total_residentes)]
}

pub fn room_occupancy(response: RoomOccupancyResponse) -> Vec<CategoryCount> {
    vec![
        CategoryCount::new("Total", response.total),
        CategoryCount::new("Livres", response.livres),
        CategoryCount::new("Ocupados", response.ocupados),
    ]
}

pub fn bed_occupancy(response: BedOccupancyResponse) -> Vec<CategoryCount> {
    vec![
        CategoryCount::new("Total", response.total),
        CategoryCount::new("Livres", response.livres),
        CategoryCount::new("Ocupadas", response.ocupadas),
    ]
}

impl ApiClient {
    pub async fn applications_by_status(&self) -> Result<Vec<CategoryCount>, ApiError> {
        self.get(ApiGroup::Core, "/estado/").await.map(status_counts)
    }

    pub async fn buildings_by_type(&self) -> Result<Vec<CategoryCount>, ApiError> {
        self.get(ApiGroup::Reports, "/edificios/tipo/")
            .await
            .map(building_type_counts)
    }

    pub async fn total_residents(&self) -> Result<Vec<CategoryCount>, ApiError> {
        self.get(ApiGroup::Reports, "/residentes/total/")
            .await
            .map(resident_total)
    }

    pub async fn residents_by_building(&self) -> Result<Vec<CategoryCount>, ApiError> {
        self.get(ApiGroup::Reports, "/residentes/edificio/")
            .await
            .map(residents_per_building)
    }

    pub async fn room_occupancy(&self) -> Result<Vec<CategoryCount>, ApiError> {
        self.get(ApiGroup::Reports, "/quartos/relatorio/")
            .await
            .map(room_occupancy)
    }

    pub async fn bed_occupancy(&self) -> Result<Vec<CategoryCount>, ApiError> {
        self.get(ApiGroup::Reports, "/camas/relatorio/")
            .await
            .map(bed_occupancy)
    }
}
