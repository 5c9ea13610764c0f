pub mod entities;
pub mod profile;
pub mod seed_catalog;

pub use entities::{Education, Experience, Message, NewMessage, Project, Skill};
pub use profile::Profile;
