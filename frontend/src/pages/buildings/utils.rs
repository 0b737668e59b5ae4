use crate::{
    api::{Building, BuildingInput, BuildingType},
    state::forms::{parse_positive, FieldErrors, FormFields},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingForm {
    pub nome: String,
    pub endereco: String,
    pub numero_apartamentos: String,
    pub tipo: String,
}

impl Default for BuildingForm {
    fn default() -> Self {
        Self {
            nome: String::new(),
            endereco: String::new(),
            numero_apartamentos: String::new(),
            tipo: BuildingType::default().as_str().to_string(),
        }
    }
}

impl FormFields for BuildingForm {
    type Record = Building;
    type Input = BuildingInput;

    fn from_record(building: &Building) -> Self {
        Self {
            nome: building.nome.clone(),
            endereco: building.endereco.clone(),
            numero_apartamentos: building.numero_apartamentos.to_string(),
            tipo: building.tipo.as_str().to_string(),
        }
    }

    fn validate(&self) -> Result<BuildingInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("nome", &self.nome, "Nome é obrigatório.");
        errors.require("endereco", &self.endereco, "Endereço é obrigatório.");
        let apartments = parse_positive(&self.numero_apartamentos);
        if apartments.is_none() {
            errors.add("numero_apartamentos", "Informe um número válido.");
        }
        let tipo = BuildingType::parse(&self.tipo);
        if tipo.is_none() {
            errors.add("tipo", "Tipo de edifício é obrigatório.");
        }
        match (errors.into_result(), apartments, tipo) {
            (Ok(()), Some(numero_apartamentos), Some(tipo)) => Ok(BuildingInput {
                nome: self.nome.trim().to_string(),
                endereco: self.endereco.trim().to_string(),
                numero_apartamentos,
                tipo,
            }),
            (Err(errors), _, _) => Err(errors),
            _ => Err(FieldErrors::new()),
        }
    }
}

pub fn type_options() -> Vec<(String, String)> {
    BuildingType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BuildingForm {
        BuildingForm {
            nome: "Bloco A".into(),
            endereco: "Praia".into(),
            numero_apartamentos: "12".into(),
            tipo: "comercial".into(),
        }
    }

    #[test]
    fn empty_nome_is_flagged() {
        let form = BuildingForm {
            nome: "  ".into(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("nome"), Some("Nome é obrigatório."));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn apartment_count_must_be_positive() {
        let form = BuildingForm {
            numero_apartamentos: "0".into(),
            ..filled()
        };
        assert!(form.validate().unwrap_err().has("numero_apartamentos"));
    }

    #[test]
    fn valid_form_builds_trimmed_input() {
        let form = BuildingForm {
            nome: " Bloco A ".into(),
            ..filled()
        };
        let input = form.validate().unwrap();
        assert_eq!(input.nome, "Bloco A");
        assert_eq!(input.numero_apartamentos, 12);
        assert_eq!(input.tipo, BuildingType::Comercial);
    }

    #[test]
    fn record_round_trips_into_form() {
        let building = Building {
            id: 3,
            nome: "Bloco C".into(),
            endereco: "Mindelo".into(),
            numero_apartamentos: 8,
            tipo: BuildingType::Outros,
        };
        let form = BuildingForm::from_record(&building);
        assert_eq!(form.numero_apartamentos, "8");
        assert_eq!(form.tipo, "outros");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::forms::{submit_form, SubmitError};
    use serde_json::json;

    #[tokio::test]
    async fn blank_nome_blocks_submission_without_request() {
        let server = MockServer::start();
        let client = server.client();
        let form = BuildingForm {
            numero_apartamentos: "4".into(),
            endereco: "Praia".into(),
            ..BuildingForm::default()
        };

        let result = submit_form(&form, |input: BuildingInput| async move {
            client.create_building(&input).await
        })
        .await;

        match result {
            Err(SubmitError::Invalid(errors)) => assert!(errors.has("nome")),
            other => panic!("expected invalid form, got {:?}", other),
        }
        assert!(server.received().is_empty());
    }

    #[tokio::test]
    async fn valid_form_is_posted() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/relatorios/edificios/");
            then.status(201).json_body(json!({
                "id": 9,
                "nome": "Bloco Z",
                "endereco": "Praia",
                "numeroApartamentos": 4,
                "tipo": "residencial"
            }));
        });
        let client = server.client();
        let form = BuildingForm {
            nome: "Bloco Z".into(),
            endereco: "Praia".into(),
            numero_apartamentos: "4".into(),
            ..BuildingForm::default()
        };

        let created = submit_form(&form, |input: BuildingInput| async move {
            client.create_building(&input).await
        })
        .await
        .unwrap();

        assert_eq!(created.id, 9);
        let body = server.last_request().unwrap().body.unwrap();
        assert_eq!(body["numeroApartamentos"], 4);
    }
}
