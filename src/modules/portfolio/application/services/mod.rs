mod get_portfolio_service;
mod submit_contact_service;

pub use get_portfolio_service::GetPortfolioService;
pub use submit_contact_service::SubmitContactService;
