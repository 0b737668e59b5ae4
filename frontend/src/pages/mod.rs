pub mod applications;
pub mod beds;
pub mod buildings;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod reports;
pub mod residents;
pub mod rooms;
pub mod two_factor;
pub mod users;
pub mod vacancies;
