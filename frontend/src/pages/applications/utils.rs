use crate::{
    api::{Application, ApplicationInput, ApplicationStatus, DocumentKind, DocumentUpload, Residence, RoomType},
    state::forms::{looks_like_email, parse_positive, FieldErrors, FormFields},
};

/// Key under which a missing mandatory document is reported.
pub const DOCUMENTS_FIELD: &str = "documentos";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Details,
    Documents,
}

impl WizardStep {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Details => "Dados da Candidatura",
            Self::Documents => "Documentos",
        }
    }

    pub fn number(&self) -> usize {
        match self {
            Self::Details => 1,
            Self::Documents => 2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub residencia_id: String,
    pub tipo_quarto: String,
    pub nome: String,
    pub cni_ou_passaporte: String,
    pub nif: String,
    pub curso: String,
    pub telefone: String,
    pub email: String,
}

impl FormFields for ApplicationForm {
    type Record = Application;
    type Input = ApplicationInput;

    fn from_record(application: &Application) -> Self {
        let student = application.estudante.clone().unwrap_or_default();
        Self {
            residencia_id: application.residencia.id.to_string(),
            tipo_quarto: application
                .tipo_quarto
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            nome: student.nome,
            cni_ou_passaporte: student.cni_ou_passaporte,
            nif: student.nif,
            curso: student.curso,
            telefone: student.telefone,
            email: student.email,
        }
    }

    fn validate(&self) -> Result<ApplicationInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        let residencia_id = parse_positive(&self.residencia_id);
        if residencia_id.is_none() {
            errors.add("residencia", "Residência é obrigatória.");
        }
        let tipo_quarto = RoomType::parse(&self.tipo_quarto);
        if tipo_quarto.is_none() {
            errors.add("tipo_quarto", "Tipo de Quarto é obrigatório.");
        }
        errors.require("nome", &self.nome, "Nome do estudante é obrigatório.");
        errors.require("cni_ou_passaporte", &self.cni_ou_passaporte, "CNI ou Passaporte é obrigatório.");
        errors.require("nif", &self.nif, "Nif obrigatório.");
        errors.require("curso", &self.curso, "O curso é obrigatório.");
        if self.email.trim().is_empty() {
            errors.add("email", "Email é obrigatório.");
        } else if !looks_like_email(&self.email) {
            errors.add("email", "Email inválido.");
        }
        errors.into_result()?;
        match (residencia_id, tipo_quarto) {
            (Some(residencia_id), Some(tipo_quarto)) => Ok(ApplicationInput {
                residencia_id,
                tipo_quarto,
                nome: self.nome.trim().to_string(),
                cni_ou_passaporte: self.cni_ou_passaporte.trim().to_string(),
                nif: self.nif.trim().to_string(),
                curso: self.curso.trim().to_string(),
                telefone: self.telefone.trim().to_string(),
                email: self.email.trim().to_string(),
            }),
            _ => Err(FieldErrors::new()),
        }
    }
}

/// A new application must carry the identity document. Edits may leave
/// every document as already delivered.
pub fn check_documents(uploads: &[DocumentUpload], creating: bool) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if creating && !uploads.iter().any(|u| u.kind == DocumentKind::CniOuPassaporte) {
        errors.add(DOCUMENTS_FIELD, "O documento CNI ou Passaporte é obrigatório.");
    }
    errors.into_result()
}

pub fn residence_option(residence: &Residence) -> (String, String) {
    let label = match residence.edificio.as_ref() {
        Some(building) if building.label.is_some() => format!("{} ({})", residence.nome, building.display()),
        _ => residence.nome.clone(),
    };
    (residence.id.to_string(), label)
}

pub fn room_type_options() -> Vec<(String, String)> {
    RoomType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect()
}

pub fn status_options() -> Vec<(String, String)> {
    ApplicationStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Applicant, DocumentFlags, ForeignRef};

    fn complete() -> ApplicationForm {
        ApplicationForm {
            residencia_id: "1".into(),
            tipo_quarto: "individual".into(),
            nome: "Rui Gomes".into(),
            cni_ou_passaporte: "CV123".into(),
            nif: "123456789".into(),
            curso: "Informática".into(),
            telefone: String::new(),
            email: "rui@uni.cv".into(),
        }
    }

    #[test]
    fn missing_fields_carry_original_messages() {
        let errors = ApplicationForm::default().validate().unwrap_err();
        assert_eq!(errors.get("residencia"), Some("Residência é obrigatória."));
        assert_eq!(errors.get("tipo_quarto"), Some("Tipo de Quarto é obrigatório."));
        assert_eq!(errors.get("nome"), Some("Nome do estudante é obrigatório."));
        assert_eq!(errors.get("cni_ou_passaporte"), Some("CNI ou Passaporte é obrigatório."));
        assert_eq!(errors.get("nif"), Some("Nif obrigatório."));
        assert_eq!(errors.get("curso"), Some("O curso é obrigatório."));
        assert_eq!(errors.get("email"), Some("Email é obrigatório."));
        assert!(!errors.has("telefone"));
    }

    #[test]
    fn complete_form_becomes_input() {
        let input = complete().validate().unwrap();
        assert_eq!(input.residencia_id, 1);
        assert_eq!(input.tipo_quarto, RoomType::Individual);
        assert_eq!(input.telefone, "");
    }

    #[test]
    fn identity_document_required_only_on_create() {
        let errors = check_documents(&[], true).unwrap_err();
        assert!(errors.has(DOCUMENTS_FIELD));
        assert!(check_documents(&[], false).is_ok());

        let cni = DocumentUpload {
            kind: DocumentKind::CniOuPassaporte,
            file_name: "cni.pdf".into(),
            mime_type: Some("application/pdf".into()),
            bytes: vec![0],
        };
        assert!(check_documents(&[cni], true).is_ok());
    }

    #[test]
    fn edit_prefills_student_fields() {
        let application = Application {
            id: 3,
            estudante: Some(Applicant {
                id: 2,
                nome: "Rui Gomes".into(),
                nif: "123".into(),
                ..Applicant::default()
            }),
            residencia: ForeignRef::new(4, "Residência Norte"),
            data_submissao: String::new(),
            status: ApplicationStatus::Pendente,
            tipo_quarto: Some(RoomType::Duplo),
            documentos: DocumentFlags::default(),
        };
        let form = ApplicationForm::from_record(&application);
        assert_eq!(form.residencia_id, "4");
        assert_eq!(form.tipo_quarto, "duplo");
        assert_eq!(form.nif, "123");
    }

    #[test]
    fn residence_label_names_building_when_known() {
        let residence = Residence {
            id: 2,
            nome: "Residência Central".into(),
            edificio: Some(ForeignRef::new(1, "Bloco A")),
        };
        assert_eq!(residence_option(&residence).1, "Residência Central (Bloco A)");
        let bare = Residence {
            edificio: Some(ForeignRef { id: 1, label: None }),
            ..residence
        };
        assert_eq!(residence_option(&bare).1, "Residência Central");
    }
}
