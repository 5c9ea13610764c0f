mod get_portfolio_use_case;
mod submit_contact_use_case;

pub use get_portfolio_use_case::{GetPortfolioError, GetPortfolioUseCase, PortfolioView};
pub use submit_contact_use_case::{
    ContactMessageCommand, ContactValidationError, SubmitContactError, SubmitContactUseCase,
};
