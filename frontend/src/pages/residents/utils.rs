use crate::{
    api::{Resident, ResidentInput},
    state::forms::{looks_like_email, FieldErrors, FormFields},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidentForm {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub endereco: String,
}

impl FormFields for ResidentForm {
    type Record = Resident;
    type Input = ResidentInput;

    fn from_record(resident: &Resident) -> Self {
        Self {
            nome: resident.nome.clone(),
            email: resident.email.clone(),
            telefone: resident.telefone.clone(),
            endereco: resident.endereco.clone(),
        }
    }

    fn validate(&self) -> Result<ResidentInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("nome", &self.nome, "Nome é obrigatório.");
        if self.email.trim().is_empty() {
            errors.add("email", "Email é obrigatório.");
        } else if !looks_like_email(&self.email) {
            errors.add("email", "Email inválido.");
        }
        errors.require("telefone", &self.telefone, "Telefone é obrigatório.");
        errors.require("endereco", &self.endereco, "Endereço é obrigatório.");
        errors.into_result()?;
        Ok(ResidentInput {
            nome: self.nome.trim().to_string(),
            email: self.email.trim().to_string(),
            telefone: self.telefone.trim().to_string(),
            endereco: self.endereco.trim().to_string(),
        })
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::forms::{submit_form, SubmitError};
    use serde_json::json;

    #[tokio::test]
    async fn update_puts_to_resident_endpoint() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PUT).path("/relatorios/residentes/3/");
            then.status(200).json_body(json!({
                "id": 3,
                "nome": "Ana Silva",
                "email": "ana@uni.cv",
                "telefone": "9912345",
                "endereco": "Praia"
            }));
        });
        let api = server.client();
        let form = ResidentForm {
            nome: "Ana Silva".into(),
            email: "ana@uni.cv".into(),
            telefone: "9912345".into(),
            endereco: "Praia".into(),
        };

        let saved = submit_form(&form, |input| async move { api.update_resident(3, &input).await })
            .await
            .unwrap();

        assert_eq!(saved.nome, "Ana Silva");
        let request = server.last_request().unwrap();
        assert_eq!(request.body.unwrap()["telefone"], "9912345");
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_network() {
        let server = MockServer::start();
        let api = server.client();
        let result = submit_form(&ResidentForm::default(), |input| async move {
            api.create_resident(&input).await
        })
        .await;

        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert!(server.received().is_empty());
    }
}
