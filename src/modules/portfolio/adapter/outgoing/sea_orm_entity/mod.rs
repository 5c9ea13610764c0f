pub mod education;
pub mod experience;
pub mod messages;
pub mod projects;
pub mod skills;
