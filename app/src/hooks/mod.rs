mod entropy;
mod gateway;
mod purchase;
mod use_stats;
mod use_tickets;

pub use entropy::{gather_entropy, mock_wallet_address, now_iso};
pub use purchase::{complete_draw, purchase_tickets, save_settings};
pub use use_stats::{load_stats, use_stats};
pub use use_tickets::{load_tickets, reset_grid, use_tickets};
pub use gateway::*;
