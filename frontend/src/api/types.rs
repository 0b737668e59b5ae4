use leptos::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::utils::token::TokenError;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        Self::new("TOKEN_ERROR", format!("Sessão inválida: {}", error))
    }
}

fn code_for_status(status: u16) -> &'static str {
    match status {
        400 => "VALIDATION_ERROR",
        401 => "UNAUTHORIZED",
        403 => "FORBIDDEN",
        404 => "NOT_FOUND",
        _ => "HTTP_ERROR",
    }
}

fn fallback_message(status: u16) -> String {
    match status {
        401 => "Sessão expirada ou credenciais inválidas.".to_string(),
        403 => "Você não tem permissão para realizar esta ação.".to_string(),
        404 => "Recurso não encontrado.".to_string(),
        _ => format!("Erro HTTP {}", status),
    }
}

fn first_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_string),
        _ => None,
    }
}

/// Picks the human-readable message out of a backend error payload:
/// `detail`, `error`, `message`, `non_field_errors[0]`, then the first
/// field-level error rendered as `field: message`.
pub fn extract_message(payload: &Value) -> Option<String> {
    match payload {
        Value::String(s) if !s.trim().is_empty() => return Some(s.clone()),
        Value::Array(_) => return first_string(payload),
        Value::Object(_) => {}
        _ => return None,
    }
    for key in ["detail", "error", "message", "non_field_errors"] {
        if let Some(message) = payload.get(key).and_then(first_string) {
            return Some(message);
        }
    }
    payload.as_object().and_then(|fields| {
        fields
            .iter()
            .find_map(|(field, value)| first_string(value).map(|msg| format!("{}: {}", field, msg)))
    })
}

impl ApiError {
    pub fn new(code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: code.into(),
            status: None,
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", msg)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::new("REQUEST_FAILED", msg)
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::new("PARSE_ERROR", msg)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::new("UNKNOWN", msg)
    }

    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let payload: Option<Value> = serde_json::from_slice(body).ok();
        let message = payload
            .as_ref()
            .and_then(extract_message)
            .unwrap_or_else(|| fallback_message(status));
        Self {
            error: message,
            code: code_for_status(status).to_string(),
            status: Some(status),
            details: payload,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

// ---------------------------------------------------------------------------
// Tolerant field helpers
// ---------------------------------------------------------------------------

/// A foreign key as the backend returns it: either a bare id or a nested
/// object. Writes always send the bare id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForeignRef {
    pub id: i64,
    pub label: Option<String>,
}

impl ForeignRef {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: Some(label.into()),
        }
    }

    pub fn display(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

const LABEL_KEYS: [&str; 5] = ["nome", "Nome", "numero", "username", "name"];

fn id_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn label_of(map: &serde_json::Map<String, Value>) -> Option<String> {
    LABEL_KEYS.iter().find_map(|key| match map.get(*key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

impl<'de> Deserialize<'de> for ForeignRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match &value {
            Value::Object(map) => {
                let id = map
                    .get("id")
                    .and_then(id_of)
                    .ok_or_else(|| serde::de::Error::custom("nested reference without id"))?;
                Ok(Self {
                    id,
                    label: label_of(map),
                })
            }
            other => id_of(other)
                .map(|id| Self { id, label: None })
                .ok_or_else(|| serde::de::Error::custom("expected id or object reference")),
        }
    }
}

impl Serialize for ForeignRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.id)
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// Document flags arrive as booleans, stored file paths, or null.
fn delivered_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0) != 0,
        _ => false,
    })
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(id_of).unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub access: String,
    #[serde(default, alias = "refresh_token")]
    pub refresh: Option<String>,
    #[serde(default)]
    pub requires_2fa: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password2: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TwoFactorSetup {
    #[serde(default)]
    pub qr_code_base64: Option<String>,
    #[serde(default, alias = "provisioning_uri")]
    pub otpauth_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyTwoFactorRequest {
    pub otp_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub first_name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub last_name: String,
    #[serde(default)]
    pub groups: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInput {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

// ---------------------------------------------------------------------------
// Reports group records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BuildingType {
    #[default]
    Residencial,
    Comercial,
    Outros,
}

impl BuildingType {
    pub const ALL: [BuildingType; 3] = [Self::Residencial, Self::Comercial, Self::Outros];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residencial => "residencial",
            Self::Comercial => "comercial",
            Self::Outros => "outros",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Residencial => "Residencial",
            Self::Comercial => "Comercial",
            Self::Outros => "Outros",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Building {
    pub id: i64,
    #[serde(deserialize_with = "string_or_null")]
    pub nome: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub endereco: String,
    #[serde(
        rename = "numeroApartamentos",
        alias = "numero_apartamentos",
        default,
        deserialize_with = "lenient_i64"
    )]
    pub numero_apartamentos: i64,
    #[serde(default)]
    pub tipo: BuildingType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildingInput {
    pub nome: String,
    pub endereco: String,
    #[serde(rename = "numeroApartamentos")]
    pub numero_apartamentos: i64,
    pub tipo: BuildingType,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    #[default]
    Individual,
    Duplo,
    Triplo,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [Self::Individual, Self::Duplo, Self::Triplo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Duplo => "duplo",
            Self::Triplo => "triplo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Duplo => "Duplo",
            Self::Triplo => "Triplo",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Room {
    pub id: i64,
    #[serde(deserialize_with = "string_or_null")]
    pub numero: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub capacidade: i64,
    pub edificio: ForeignRef,
    #[serde(default)]
    pub tipo: RoomType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomInput {
    pub numero: String,
    pub capacidade: i64,
    pub edificio_id: i64,
    pub tipo: RoomType,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum BedStatus {
    #[default]
    #[serde(rename = "Disponível", alias = "Disponivel", alias = "disponivel")]
    Disponivel,
    #[serde(rename = "Ocupado", alias = "ocupado")]
    Ocupado,
}

impl BedStatus {
    pub const ALL: [BedStatus; 2] = [Self::Disponivel, Self::Ocupado];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disponivel => "Disponível",
            Self::Ocupado => "Ocupado",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bed {
    pub id: i64,
    #[serde(deserialize_with = "string_or_null")]
    pub numero: String,
    pub quarto: ForeignRef,
    #[serde(default)]
    pub status: BedStatus,
    #[serde(default)]
    pub residente: Option<ForeignRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BedInput {
    pub numero: String,
    pub quarto_id: i64,
    pub status: BedStatus,
    pub residente_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resident {
    pub id: i64,
    #[serde(deserialize_with = "string_or_null")]
    pub nome: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub telefone: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub endereco: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResidentInput {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub endereco: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Residence {
    pub id: i64,
    #[serde(rename = "Nome", alias = "nome", default, deserialize_with = "string_or_null")]
    pub nome: String,
    #[serde(default)]
    pub edificio: Option<ForeignRef>,
}

/// A residence with open places, as listed by `GET core/vagas/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vacancy {
    pub id: i64,
    #[serde(
        rename = "Nome",
        alias = "nome",
        alias = "numero",
        default,
        deserialize_with = "string_or_null"
    )]
    pub nome: String,
    #[serde(default)]
    pub edificio: Option<ForeignRef>,
    #[serde(default)]
    pub capacidade: Option<i64>,
}

// ---------------------------------------------------------------------------
// Applications (core group)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pendente,
    EmAnalise,
    Aprovado,
    Rejeitado,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        Self::Pendente,
        Self::EmAnalise,
        Self::Aprovado,
        Self::Rejeitado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendente => "pendente",
            Self::EmAnalise => "em_analise",
            Self::Aprovado => "aprovado",
            Self::Rejeitado => "rejeitado",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pendente => "Pendente",
            Self::EmAnalise => "Em Análise",
            Self::Aprovado => "Aprovado",
            Self::Rejeitado => "Rejeitado",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Pendente => "bg-yellow-100 text-yellow-800",
            Self::EmAnalise => "bg-blue-100 text-blue-800",
            Self::Aprovado => "bg-green-100 text-green-800",
            Self::Rejeitado => "bg-red-100 text-red-800",
        }
    }
}

/// Supporting documents attached to an application, in upload order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    CniOuPassaporte,
    DeclaracaoMatricula,
    DeclaracaoRendimento,
    DeclaracaoSubsistencia,
    DeclaracaoResidencia,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 5] = [
        Self::CniOuPassaporte,
        Self::DeclaracaoMatricula,
        Self::DeclaracaoRendimento,
        Self::DeclaracaoSubsistencia,
        Self::DeclaracaoResidencia,
    ];

    /// Multipart field name and flag key on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            Self::CniOuPassaporte => "CNIouPassaporteEntregue",
            Self::DeclaracaoMatricula => "DeclaracaoMatriculaEntregue",
            Self::DeclaracaoRendimento => "DeclaracaoRendimentoEntregue",
            Self::DeclaracaoSubsistencia => "DeclaracaoSubsistenciaEntregue",
            Self::DeclaracaoResidencia => "DeclaracaoResidenciaEntregue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CniOuPassaporte => "CNI ou Passaporte",
            Self::DeclaracaoMatricula => "Declaração de Matrícula",
            Self::DeclaracaoRendimento => "Declaração de Rendimento",
            Self::DeclaracaoSubsistencia => "Declaração de Subsistência",
            Self::DeclaracaoResidencia => "Declaração de Residência",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentFlags {
    #[serde(rename = "CNIouPassaporteEntregue", default, deserialize_with = "delivered_flag")]
    pub cni_ou_passaporte: bool,
    #[serde(rename = "DeclaracaoMatriculaEntregue", default, deserialize_with = "delivered_flag")]
    pub declaracao_matricula: bool,
    #[serde(rename = "DeclaracaoRendimentoEntregue", default, deserialize_with = "delivered_flag")]
    pub declaracao_rendimento: bool,
    #[serde(rename = "DeclaracaoSubsistenciaEntregue", default, deserialize_with = "delivered_flag")]
    pub declaracao_subsistencia: bool,
    #[serde(rename = "DeclaracaoResidenciaEntregue", default, deserialize_with = "delivered_flag")]
    pub declaracao_residencia: bool,
}

impl DocumentFlags {
    pub fn is_delivered(&self, kind: DocumentKind) -> bool {
        match kind {
            DocumentKind::CniOuPassaporte => self.cni_ou_passaporte,
            DocumentKind::DeclaracaoMatricula => self.declaracao_matricula,
            DocumentKind::DeclaracaoRendimento => self.declaracao_rendimento,
            DocumentKind::DeclaracaoSubsistencia => self.declaracao_subsistencia,
            DocumentKind::DeclaracaoResidencia => self.declaracao_residencia,
        }
    }

    pub fn delivered(&self) -> Vec<DocumentKind> {
        DocumentKind::ALL
            .into_iter()
            .filter(|kind| self.is_delivered(*kind))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Application {
    pub id: i64,
    #[serde(default)]
    pub estudante: Option<Applicant>,
    pub residencia: ForeignRef,
    #[serde(
        rename = "DataSubmissao",
        alias = "data_submissao",
        default,
        deserialize_with = "string_or_null"
    )]
    pub data_submissao: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default, alias = "TipoQuarto", deserialize_with = "optional_room_type")]
    pub tipo_quarto: Option<RoomType>,
    #[serde(flatten)]
    pub documentos: DocumentFlags,
}

fn optional_room_type<'de, D>(deserializer: D) -> Result<Option<RoomType>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .and_then(|raw| RoomType::parse(&raw.to_lowercase())))
}

impl Application {
    pub fn student_name(&self) -> String {
        self.estudante
            .as_ref()
            .map(Applicant::display)
            .unwrap_or_else(|| "-".to_string())
    }
}

/// The student behind an application. Reads accept the nested record or a
/// bare id; missing fields stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Applicant {
    pub id: i64,
    pub nome: String,
    pub cni_ou_passaporte: String,
    pub nif: String,
    pub curso: String,
    pub telefone: String,
    pub email: String,
}

impl Applicant {
    pub fn display(&self) -> String {
        if self.nome.is_empty() {
            format!("#{}", self.id)
        } else {
            self.nome.clone()
        }
    }
}

impl<'de> Deserialize<'de> for Applicant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let Value::Object(map) = &value else {
            return id_of(&value)
                .map(|id| Self {
                    id,
                    ..Self::default()
                })
                .ok_or_else(|| serde::de::Error::custom("expected id or student object"));
        };
        let text = |keys: &[&str]| {
            keys.iter()
                .find_map(|key| match map.get(*key) {
                    Some(Value::String(s)) => Some(s.clone()),
                    Some(Value::Number(n)) => Some(n.to_string()),
                    _ => None,
                })
                .unwrap_or_default()
        };
        Ok(Self {
            id: map
                .get("id")
                .or_else(|| map.get("idEstudante"))
                .and_then(id_of)
                .unwrap_or_default(),
            nome: text(&["Nome", "nome"]),
            cni_ou_passaporte: text(&["CNIouPassaporte", "cni_ou_passaporte"]),
            nif: text(&["Nif", "nif"]),
            curso: text(&["Curso", "curso"]),
            telefone: text(&["Telefone", "telefone"]),
            email: text(&["Email", "email"]),
        })
    }
}

impl Serialize for Applicant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.id)
    }
}

/// Text fields of the application wizard. Files travel separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationInput {
    pub residencia_id: i64,
    pub tipo_quarto: RoomType,
    pub nome: String,
    pub cni_ou_passaporte: String,
    pub nif: String,
    pub curso: String,
    pub telefone: String,
    pub email: String,
}

impl ApplicationInput {
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("residencia_id", self.residencia_id.to_string()),
            ("tipo_quarto", self.tipo_quarto.as_str().to_string()),
            ("nome", self.nome.clone()),
            ("cni_ou_passaporte", self.cni_ou_passaporte.clone()),
            ("nif", self.nif.clone()),
            ("curso", self.curso.clone()),
            ("telefone", self.telefone.clone()),
            ("email", self.email.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    pub kind: DocumentKind,
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// One reshaped aggregate row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

impl CategoryCount {
    pub fn new(category: impl Into<String>, count: i64) -> Self {
        Self {
            category: category.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusCountsResponse {
    #[serde(rename = "statusCounts", default)]
    pub status_counts: Vec<StatusCountRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusCountRow {
    pub status: String,
    #[serde(alias = "total", deserialize_with = "lenient_i64")]
    pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildingTypesResponse {
    #[serde(rename = "totalPorTipo", default)]
    pub total_por_tipo: Vec<NamedCountRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedCountRow {
    #[serde(alias = "tipo")]
    pub name: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResidentTotalResponse {
    #[serde(rename = "totalResidentes", deserialize_with = "lenient_i64")]
    pub total_residentes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResidentsPerBuildingRow {
    #[serde(deserialize_with = "string_or_null")]
    pub nome: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub num_residentes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomOccupancyResponse {
    #[serde(rename = "totalQuartos", deserialize_with = "lenient_i64")]
    pub total: i64,
    #[serde(rename = "quartosLivres", deserialize_with = "lenient_i64")]
    pub livres: i64,
    #[serde(rename = "quartosOcupados", deserialize_with = "lenient_i64")]
    pub ocupados: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BedOccupancyResponse {
    #[serde(rename = "totalCamas", deserialize_with = "lenient_i64")]
    pub total: i64,
    #[serde(rename = "camasLivres", deserialize_with = "lenient_i64")]
    pub livres: i64,
    #[serde(rename = "camasOcupadas", deserialize_with = "lenient_i64")]
    pub ocupadas: i64,
}
