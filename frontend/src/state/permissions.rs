//! Client-side capability matrix. Every role-gated control and route asks
//! [`can`]; this is a presentation aid, the backend enforces the real rules.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Estudante,
    Funcionario,
    Administrador,
}

impl Role {
    pub fn group(&self) -> &'static str {
        match self {
            Self::Estudante => "estudante",
            Self::Funcionario => "funcionario",
            Self::Administrador => "administrador",
        }
    }

    pub fn from_group(group: &str) -> Option<Self> {
        match group.trim().to_lowercase().as_str() {
            "estudante" => Some(Self::Estudante),
            "funcionario" | "funcionário" => Some(Self::Funcionario),
            "administrador" | "admin" => Some(Self::Administrador),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Application,
    Building,
    Room,
    Bed,
    Resident,
    User,
    Dashboard,
    Reports,
    Vacancy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Review,
}

const STAFF: &[Role] = &[Role::Funcionario, Role::Administrador];
const ADMIN: &[Role] = &[Role::Administrador];
const APPLICANTS: &[Role] = &[Role::Estudante, Role::Administrador];
const EVERYONE: &[Role] = &[Role::Estudante, Role::Funcionario, Role::Administrador];
const NOBODY: &[Role] = &[];

pub fn allowed_roles(resource: Resource, action: Action) -> &'static [Role] {
    use Action::*;
    use Resource::*;
    match (resource, action) {
        (Building | Room | Bed | Resident, View | Create | Edit) => STAFF,
        (Building | Room | Bed | Resident, Delete) => ADMIN,
        (Building | Room | Bed | Resident, Review) => NOBODY,
        (User, _) => ADMIN,
        (Application, Create) => APPLICANTS,
        (Application, View | Edit | Review) => STAFF,
        (Application, Delete) => ADMIN,
        (Dashboard | Reports, View) => STAFF,
        (Dashboard | Reports, _) => NOBODY,
        (Vacancy, View) => EVERYONE,
        (Vacancy, _) => NOBODY,
    }
}

pub fn roles_of<S: AsRef<str>>(groups: &[S]) -> Vec<Role> {
    groups
        .iter()
        .filter_map(|g| Role::from_group(g.as_ref()))
        .collect()
}

pub fn has_any_role<S: AsRef<str>>(groups: &[S], allowed: &[Role]) -> bool {
    roles_of(groups).iter().any(|role| allowed.contains(role))
}

pub fn can<S: AsRef<str>>(groups: &[S], resource: Resource, action: Action) -> bool {
    has_any_role(groups, allowed_roles(resource, action))
}

pub fn is_staff<S: AsRef<str>>(groups: &[S]) -> bool {
    has_any_role(groups, STAFF)
}

/// Students land on their welcome page; every other recognised role (and
/// an account with no groups at all) lands on the dashboard.
pub fn landing_route<S: AsRef<str>>(groups: &[S]) -> &'static str {
    let roles = roles_of(groups);
    if roles.contains(&Role::Estudante) && !roles.iter().any(|r| STAFF.contains(r)) {
        "/inicio"
    } else {
        "/dashboard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn students_never_delete_buildings() {
        assert!(!can(&["estudante"], Resource::Building, Action::Delete));
        assert!(!can(&["estudante"], Resource::Building, Action::View));
    }

    #[test]
    fn staff_manage_but_only_admins_delete() {
        assert!(can(&["funcionario"], Resource::Room, Action::Edit));
        assert!(!can(&["funcionario"], Resource::Room, Action::Delete));
        assert!(can(&["administrador"], Resource::Room, Action::Delete));
    }

    #[test]
    fn users_are_admin_only() {
        for action in [Action::View, Action::Create, Action::Edit, Action::Delete] {
            assert!(!can(&["funcionario"], Resource::User, action));
            assert!(can(&["administrador"], Resource::User, action));
        }
    }

    #[test]
    fn applications_are_created_by_students_and_reviewed_by_staff() {
        assert!(can(&["estudante"], Resource::Application, Action::Create));
        assert!(!can(&["estudante"], Resource::Application, Action::Review));
        assert!(can(&["funcionario"], Resource::Application, Action::Review));
        assert!(!can(&["funcionario"], Resource::Application, Action::Create));
    }

    #[test]
    fn every_role_sees_vacancies_but_nobody_edits_them() {
        for group in ["estudante", "funcionario", "administrador"] {
            assert!(can(&[group], Resource::Vacancy, Action::View));
            assert!(!can(&[group], Resource::Vacancy, Action::Edit));
        }
        assert!(!can(&["visitante"], Resource::Vacancy, Action::View));
    }

    #[test]
    fn unknown_or_empty_groups_grant_nothing() {
        let none: [&str; 0] = [];
        assert!(!can(&none, Resource::Dashboard, Action::View));
        assert!(!can(&["visitante"], Resource::Reports, Action::View));
    }

    #[test]
    fn landing_route_depends_on_role() {
        assert_eq!(landing_route(&["estudante"]), "/inicio");
        assert_eq!(landing_route(&["funcionario"]), "/dashboard");
        assert_eq!(landing_route(&["estudante", "administrador"]), "/dashboard");
        let none: [&str; 0] = [];
        assert_eq!(landing_route(&none), "/dashboard");
    }

    #[test]
    fn group_names_are_case_insensitive() {
        assert_eq!(Role::from_group("Administrador"), Some(Role::Administrador));
        assert!(is_staff(&["FUNCIONARIO"]));
    }
}
