use reqwest::{
    multipart::{Form, Part},
    Method,
};

use super::{
    client::{ApiClient, ApiGroup},
    types::{
        ApiError, Application, ApplicationInput, ApplicationStatus, DocumentUpload, StatusUpdate,
        Vacancy,
    },
};

/// Builds the multipart body: every text field plus one file part per upload.
pub fn application_form(
    input: &ApplicationInput,
    uploads: &[DocumentUpload],
) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for (name, value) in input.text_fields() {
        form = form.text(name, value);
    }
    for upload in uploads {
        let part = Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
        let part = match upload.mime_type.as_deref().filter(|m| !m.is_empty()) {
            Some(mime) => part.mime_str(mime).map_err(|_| {
                ApiError::validation(format!("Tipo de ficheiro inválido: {}", mime))
            })?,
            None => part,
        };
        form = form.part(upload.kind.field(), part);
    }
    Ok(form)
}

impl ApiClient {
    pub async fn list_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.get(ApiGroup::Core, "/").await
    }

    pub async fn get_application(&self, id: i64) -> Result<Application, ApiError> {
        self.get(ApiGroup::Core, &format!("/{}/", id)).await
    }

    pub async fn create_application(
        &self,
        input: &ApplicationInput,
        uploads: &[DocumentUpload],
    ) -> Result<Application, ApiError> {
        let form = application_form(input, uploads)?;
        self.send_multipart(Method::POST, ApiGroup::Core, "/", form)
            .await
    }

    pub async fn update_application(
        &self,
        id: i64,
        input: &ApplicationInput,
        uploads: &[DocumentUpload],
    ) -> Result<Application, ApiError> {
        let form = application_form(input, uploads)?;
        self.send_multipart(Method::PUT, ApiGroup::Core, &format!("/{}/", id), form)
            .await
    }

    pub async fn delete_application(&self, id: i64) -> Result<(), ApiError> {
        self.delete(ApiGroup::Core, &format!("/{}/", id)).await
    }

    pub async fn update_application_status(
        &self,
        id: i64,
        status: ApplicationStatus,
    ) -> Result<Application, ApiError> {
        self.patch(
            ApiGroup::Core,
            &format!("/atualizar/{}/", id),
            &StatusUpdate { status },
        )
        .await
    }

    /// The signed-in student's application; `None` when none was submitted yet.
    pub async fn my_application(&self) -> Result<Option<Application>, ApiError> {
        match self.get(ApiGroup::Core, "/minha/").await {
            Ok(application) => Ok(Some(application)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn list_vacancies(&self) -> Result<Vec<Vacancy>, ApiError> {
        self.get(ApiGroup::Core, "/vagas/").await
    }
}
