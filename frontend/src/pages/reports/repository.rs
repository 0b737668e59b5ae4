use crate::api::{ApiClient, ApiError, CategoryCount};

/// One aggregate endpoint rendered as a `{category, count}` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    ApplicationsByStatus,
    BuildingsByType,
    TotalResidents,
    ResidentsByBuilding,
    RoomOccupancy,
    BedOccupancy,
}

impl Aggregate {
    pub fn title(&self) -> &'static str {
        match self {
            Self::ApplicationsByStatus => "Candidaturas por Estado",
            Self::BuildingsByType => "Edifícios por Tipo",
            Self::TotalResidents => "Total de Residentes",
            Self::ResidentsByBuilding => "Residentes por Edifício",
            Self::RoomOccupancy => "Ocupação de Quartos",
            Self::BedOccupancy => "Ocupação de Camas",
        }
    }

    pub async fn fetch(self, api: &ApiClient) -> Result<Vec<CategoryCount>, ApiError> {
        match self {
            Self::ApplicationsByStatus => api.applications_by_status().await,
            Self::BuildingsByType => api.buildings_by_type().await,
            Self::TotalResidents => api.total_residents().await,
            Self::ResidentsByBuilding => api.residents_by_building().await,
            Self::RoomOccupancy => api.room_occupancy().await,
            Self::BedOccupancy => api.bed_occupancy().await,
        }
    }
}

pub const DASHBOARD_AGGREGATES: &[Aggregate] =
    &[Aggregate::ApplicationsByStatus, Aggregate::ResidentsByBuilding];

pub const REPORT_AGGREGATES: &[Aggregate] = &[
    Aggregate::ApplicationsByStatus,
    Aggregate::BuildingsByType,
    Aggregate::TotalResidents,
    Aggregate::RoomOccupancy,
    Aggregate::BedOccupancy,
];

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub aggregate: Aggregate,
    pub rows: Result<Vec<CategoryCount>, ApiError>,
}

/// Fetches each aggregate one after the other. A failure is recorded
/// against its own aggregate and never stops the rest.
pub async fn load_in_sequence(api: &ApiClient, aggregates: &[Aggregate]) -> Vec<AggregateResult> {
    let mut results = Vec::with_capacity(aggregates.len());
    for aggregate in aggregates {
        let rows = aggregate.fetch(api).await;
        if let Err(err) = &rows {
            log::error!("Failed to load {:?}: {}", aggregate, err);
        }
        results.push(AggregateResult {
            aggregate: *aggregate,
            rows,
        });
    }
    results
}
