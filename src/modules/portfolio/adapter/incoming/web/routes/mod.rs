mod get_portfolio;
mod submit_contact;

pub use get_portfolio::{__path_get_portfolio_handler, get_portfolio_handler};
pub use submit_contact::{__path_submit_contact_handler, submit_contact_handler, ContactRequest};
