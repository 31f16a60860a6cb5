pub mod buy_listing;
pub mod create_fixture;
pub mod initialize_tournament;
pub mod list_ticket;
pub mod purchase_ticket;
pub mod record_result;
pub mod set_paused;

pub use buy_listing::*;
pub use create_fixture::*;
pub use initialize_tournament::*;
pub use list_ticket::*;
pub use purchase_ticket::*;
pub use record_result::*;
pub use set_paused::*;
