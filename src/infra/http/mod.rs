mod token;
mod zoho_client;

pub use token::StaticTokenProvider;
pub use zoho_client::ZohoClient;
