use crate::{
    api::{User, UserInput},
    state::{
        forms::{looks_like_email, FieldErrors, FormFields},
        permissions::Role,
    },
};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    /// Set when loaded from an existing account. A blank password then
    /// keeps the current one.
    pub existing: bool,
}

impl FormFields for UserForm {
    type Record = User;
    type Input = UserInput;

    fn from_record(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            password: String::new(),
            existing: true,
        }
    }

    fn validate(&self) -> Result<UserInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("username", &self.username, "Nome de utilizador é obrigatório.");
        if self.email.trim().is_empty() {
            errors.add("email", "Email é obrigatório.");
        } else if !looks_like_email(&self.email) {
            errors.add("email", "Email inválido.");
        }
        let password = (!self.password.is_empty()).then(|| self.password.clone());
        match &password {
            None if !self.existing => errors.add("password", "Password é obrigatória."),
            Some(p) if p.chars().count() < MIN_PASSWORD_LEN => errors.add(
                "password",
                format!("A password deve ter pelo menos {} caracteres.", MIN_PASSWORD_LEN),
            ),
            _ => {}
        }
        errors.into_result()?;
        Ok(UserInput {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            password,
        })
    }
}

pub fn full_name(user: &User) -> String {
    let name = format!("{} {}", user.first_name.trim(), user.last_name.trim());
    let name = name.trim();
    if name.is_empty() {
        user.username.clone()
    } else {
        name.to_string()
    }
}

/// Group names rendered with their role label where known.
pub fn group_labels(user: &User) -> String {
    if user.groups.is_empty() {
        return "-".to_string();
    }
    user.groups
        .iter()
        .map(|group| match Role::from_group(group) {
            Some(Role::Estudante) => "Estudante".to_string(),
            Some(Role::Funcionario) => "Funcionário".to_string(),
            Some(Role::Administrador) => "Administrador".to_string(),
            None => group.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
