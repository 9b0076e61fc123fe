mod admin_panel;
mod draw_modal;
mod layout;
mod purchase_dialog;
mod stats_cards;
mod ticket_grid;
mod toasts;
mod wallet_button;
mod winner_modal;

pub use admin_panel::AdminPanel;
pub use draw_modal::DrawModal;
pub use layout::Layout;
pub use purchase_dialog::PurchaseDialog;
pub use stats_cards::StatsCards;
pub use ticket_grid::TicketGrid;
pub use toasts::ToastViewport;
pub use wallet_button::WalletButton;
pub use winner_modal::WinnerModal;
pub use stats_cards::format_tokens;
