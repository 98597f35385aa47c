pub mod auth;
pub mod items;
pub mod prices;

pub use auth::AuthCommands;
pub use items::ItemsCommands;
pub use prices::PricesCommands;
