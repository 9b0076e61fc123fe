/// The number of tickets in the grid.
pub const TICKET_COUNT: u32 = 100;

/// The price of one ticket, in base token units (100M $BAD).
pub const TICKET_PRICE: u64 = 100_000_000;

/// The round that ticket rows are scoped to. Bumped manually between
/// lotteries; the client only ever reads and clears the active round.
pub const LOTTERY_ROUND: u32 = 1;

/// The wallet allowed to open the admin panel and run draws.
pub const ADMIN_WALLET: &str = "0xa4e81327dd0Bc39f73787a127f069e7d854aA63E";

/// The operator wallet that fronts gas for gasless purchases.
pub const SITE_WALLET: &str = "0xa4e81327dd0Bc39f73787a127f069e7d854aA63E";

/// Whether an address is the admin wallet. Addresses arrive from the
/// simulated connect flow in mixed case, so the match ignores case.
pub fn is_admin(address: &str) -> bool {
    address.eq_ignore_ascii_case(ADMIN_WALLET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin_ignores_case() {
        assert!(is_admin(ADMIN_WALLET));
        assert!(is_admin(&ADMIN_WALLET.to_lowercase()));
        assert!(is_admin(&ADMIN_WALLET.to_uppercase()));
        assert!(!is_admin("0x0000000000000000000000000000000000000000"));
        assert!(!is_admin(""));
    }
}
