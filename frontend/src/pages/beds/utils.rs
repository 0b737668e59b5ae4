use crate::{
    api::{Bed, BedInput, BedStatus, Resident, Room},
    state::forms::{parse_positive, FieldErrors, FormFields},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedForm {
    pub numero: String,
    pub quarto_id: String,
    pub status: String,
    /// Empty means unassigned.
    pub residente_id: String,
}

impl Default for BedForm {
    fn default() -> Self {
        Self {
            numero: String::new(),
            quarto_id: String::new(),
            status: BedStatus::default().as_str().to_string(),
            residente_id: String::new(),
        }
    }
}

impl FormFields for BedForm {
    type Record = Bed;
    type Input = BedInput;

    fn from_record(bed: &Bed) -> Self {
        Self {
            numero: bed.numero.clone(),
            quarto_id: bed.quarto.id.to_string(),
            status: bed.status.as_str().to_string(),
            residente_id: bed
                .residente
                .as_ref()
                .map(|r| r.id.to_string())
                .unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<BedInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("numero", &self.numero, "Número é obrigatório.");
        let quarto_id = parse_positive(&self.quarto_id);
        if quarto_id.is_none() {
            errors.add("quarto", "Quarto é obrigatório.");
        }
        let status = BedStatus::parse(&self.status);
        if status.is_none() {
            errors.add("status", "Status é obrigatório.");
        }
        errors.into_result()?;
        match (quarto_id, status) {
            (Some(quarto_id), Some(status)) => Ok(BedInput {
                numero: self.numero.trim().to_string(),
                quarto_id,
                status,
                residente_id: parse_positive(&self.residente_id),
            }),
            _ => Err(FieldErrors::new()),
        }
    }
}

pub fn status_options() -> Vec<(String, String)> {
    BedStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect()
}

pub fn room_option(room: &Room) -> (String, String) {
    (
        room.id.to_string(),
        format!("Quarto {} ({})", room.numero, room.edificio.display()),
    )
}

pub fn resident_option(resident: &Resident) -> (String, String) {
    (resident.id.to_string(), resident.nome.clone())
}
