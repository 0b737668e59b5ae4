use crate::{
    api::{Building, Room, RoomInput, RoomType},
    state::forms::{parse_positive, FieldErrors, FormFields},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomForm {
    pub numero: String,
    pub capacidade: String,
    pub edificio_id: String,
    pub tipo: String,
}

impl Default for RoomForm {
    fn default() -> Self {
        Self {
            numero: String::new(),
            capacidade: String::new(),
            edificio_id: String::new(),
            tipo: RoomType::default().as_str().to_string(),
        }
    }
}

impl FormFields for RoomForm {
    type Record = Room;
    type Input = RoomInput;

    fn from_record(room: &Room) -> Self {
        Self {
            numero: room.numero.clone(),
            capacidade: room.capacidade.to_string(),
            edificio_id: room.edificio.id.to_string(),
            tipo: room.tipo.as_str().to_string(),
        }
    }

    fn validate(&self) -> Result<RoomInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("numero", &self.numero, "Número é obrigatório.");
        let capacidade = parse_positive(&self.capacidade);
        if capacidade.is_none() {
            errors.add("capacidade", "Capacidade é obrigatória.");
        }
        let edificio_id = parse_positive(&self.edificio_id);
        if edificio_id.is_none() {
            errors.add("edificio", "Edifício é obrigatório.");
        }
        let tipo = RoomType::parse(&self.tipo);
        if tipo.is_none() {
            errors.add("tipo", "Tipo de Quarto é obrigatório.");
        }
        errors.into_result()?;
        match (capacidade, edificio_id, tipo) {
            (Some(capacidade), Some(edificio_id), Some(tipo)) => Ok(RoomInput {
                numero: self.numero.trim().to_string(),
                capacidade,
                edificio_id,
                tipo,
            }),
            _ => Err(FieldErrors::new()),
        }
    }
}

pub fn type_options() -> Vec<(String, String)> {
    RoomType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect()
}

pub fn building_option(building: &Building) -> (String, String) {
    (building.id.to_string(), building.nome.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ForeignRef;

    #[test]
    fn every_required_field_is_reported() {
        let form = RoomForm {
            tipo: String::new(),
            ..RoomForm::default()
        };
        let errors = form.validate().unwrap_err();
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["capacidade", "edificio", "numero", "tipo"]);
    }

    #[test]
    fn valid_form_sends_building_id() {
        let form = RoomForm {
            numero: "101".into(),
            capacidade: "2".into(),
            edificio_id: "3".into(),
            tipo: "duplo".into(),
        };
        let input = form.validate().unwrap();
        assert_eq!(input.edificio_id, 3);
        assert_eq!(input.tipo, RoomType::Duplo);
    }

    #[test]
    fn record_populates_building_select() {
        let room = Room {
            id: 1,
            numero: "12".into(),
            capacidade: 1,
            edificio: ForeignRef::new(5, "Bloco E"),
            tipo: RoomType::Individual,
        };
        assert_eq!(RoomForm::from_record(&room).edificio_id, "5");
    }
}
