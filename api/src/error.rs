use thiserror::Error;

/// Validation failures raised by the grid model. These never reach the
/// network; the UI surfaces them before any request is issued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("ticket #{0} does not exist")]
    UnknownTicket(u32),

    #[error("ticket #{0} is already owned")]
    AlreadyOwned(u32),

    #[error("no tickets selected")]
    EmptySelection,
}
