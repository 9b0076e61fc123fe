use serde::{Deserialize, Serialize};

use crate::consts::{TICKET_COUNT, TICKET_PRICE};
use crate::error::GridError;

/// One numbered, purchasable slot in the fixed grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Grid position, 1..=100. Assigned at initialization, never changes.
    pub id: u32,

    /// The wallet that bought this ticket. `None` means unsold.
    pub owner: Option<String>,

    /// Price in base token units. Uniform across the grid.
    pub price: u64,
}

/// A row of the remote `lottery_tickets` table, as consumed. Only the
/// number and owner matter to the grid; the rest rides along for
/// completeness of the wire shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TicketRow {
    pub ticket_number: u32,
    pub wallet_address: String,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub lottery_round: Option<u32>,
}

/// The full ticket collection. A UI cache of the remote table: loads
/// rebuild it wholesale, so a failed fetch degrades to all-unsold
/// rather than to stale partial state.
#[derive(Clone, Debug, PartialEq)]
pub struct TicketGrid {
    tickets: Vec<Ticket>,
}

impl Default for TicketGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketGrid {
    /// A fresh all-unsold grid with contiguous ids.
    pub fn new() -> Self {
        let tickets = (1..=TICKET_COUNT)
            .map(|id| Ticket {
                id,
                owner: None,
                price: TICKET_PRICE,
            })
            .collect();
        Self { tickets }
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Fold remote ownership rows into the grid. Rows pointing outside
    /// the grid are ignored; tickets without a row stay unsold.
    pub fn merge_rows(&mut self, rows: &[TicketRow]) {
        for row in rows {
            if let Some(ticket) = self.ticket_mut(row.ticket_number) {
                ticket.owner = Some(row.wallet_address.clone());
            }
        }
    }

    /// Discard all ownership by recreating the sequence.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Mark a purchased batch as owned. All-or-nothing: if any id is
    /// unknown or already owned, nothing changes.
    pub fn assign(&mut self, ids: &[u32], owner: &str) -> Result<(), GridError> {
        if ids.is_empty() {
            return Err(GridError::EmptySelection);
        }
        for &id in ids {
            let ticket = self.ticket(id).ok_or(GridError::UnknownTicket(id))?;
            if ticket.owner.is_some() {
                return Err(GridError::AlreadyOwned(id));
            }
        }
        for &id in ids {
            if let Some(ticket) = self.ticket_mut(id) {
                ticket.owner = Some(owner.to_string());
            }
        }
        Ok(())
    }

    pub fn owner_of(&self, id: u32) -> Option<&str> {
        self.ticket(id).and_then(|t| t.owner.as_deref())
    }

    pub fn is_sold(&self, id: u32) -> bool {
        self.owner_of(id).is_some()
    }

    pub fn sold_count(&self) -> usize {
        self.tickets.iter().filter(|t| t.owner.is_some()).count()
    }

    pub fn count_owned_by(&self, address: &str) -> usize {
        self.tickets
            .iter()
            .filter(|t| t.owner.as_deref() == Some(address))
            .count()
    }

    fn ticket(&self, id: u32) -> Option<&Ticket> {
        let index = id.checked_sub(1)? as usize;
        self.tickets.get(index)
    }

    fn ticket_mut(&mut self, id: u32) -> Option<&mut Ticket> {
        let index = id.checked_sub(1)? as usize;
        self.tickets.get_mut(index)
    }
}

/// Tickets the user has marked for purchase but not yet bought. Cleared
/// on purchase completion, cancellation, and grid reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    ids: Vec<u32>,
}

impl Selection {
    /// Select if absent, deselect if present. Its own inverse.
    pub fn toggle(&mut self, id: u32) {
        if let Some(pos) = self.ids.iter().position(|&s| s == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Ids in display order for dialogs and receipts.
    pub fn sorted_ids(&self) -> Vec<u32> {
        let mut ids = self.ids.clone();
        ids.sort_unstable();
        ids
    }

    /// Drop ids whose tickets have been sold out from under the user
    /// (another session bought them between reloads).
    pub fn retain_unowned(&mut self, grid: &TicketGrid) {
        self.ids.retain(|&id| !grid.is_sold(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(number: u32, address: &str) -> TicketRow {
        TicketRow {
            ticket_number: number,
            wallet_address: address.to_string(),
            transaction_hash: None,
            lottery_round: Some(1),
        }
    }

    fn assert_contiguous(grid: &TicketGrid) {
        assert_eq!(grid.tickets().len(), TICKET_COUNT as usize);
        for (i, ticket) in grid.tickets().iter().enumerate() {
            assert_eq!(ticket.id, i as u32 + 1);
            assert_eq!(ticket.price, TICKET_PRICE);
        }
    }

    #[test]
    fn test_new_grid_is_contiguous_and_unsold() {
        let grid = TicketGrid::new();
        assert_contiguous(&grid);
        assert_eq!(grid.sold_count(), 0);
    }

    #[test]
    fn test_merge_rows_sets_owners_and_ignores_strays() {
        let mut grid = TicketGrid::new();
        grid.merge_rows(&[row(3, "0xaaa"), row(47, "0xbbb"), row(0, "0xbad"), row(101, "0xbad")]);
        assert_contiguous(&grid);
        assert_eq!(grid.owner_of(3), Some("0xaaa"));
        assert_eq!(grid.owner_of(47), Some("0xbbb"));
        assert_eq!(grid.sold_count(), 2);
    }

    #[test]
    fn test_reset_clears_all_ownership() {
        let mut grid = TicketGrid::new();
        grid.merge_rows(&[row(1, "0xaaa"), row(100, "0xaaa")]);
        grid.reset();
        assert_contiguous(&grid);
        assert_eq!(grid.sold_count(), 0);
    }

    #[test]
    fn test_assign_marks_batch_owned() {
        let mut grid = TicketGrid::new();
        grid.assign(&[3, 47], "0xaaa").unwrap();
        assert_eq!(grid.owner_of(3), Some("0xaaa"));
        assert_eq!(grid.owner_of(47), Some("0xaaa"));
        assert_eq!(grid.count_owned_by("0xaaa"), 2);
    }

    #[test]
    fn test_assign_rejects_owned_ticket_without_side_effects() {
        let mut grid = TicketGrid::new();
        grid.assign(&[47], "0xaaa").unwrap();
        let before = grid.clone();
        assert_eq!(
            grid.assign(&[3, 47], "0xbbb"),
            Err(GridError::AlreadyOwned(47))
        );
        // All-or-nothing: ticket 3 must not have been touched.
        assert_eq!(grid, before);
    }

    #[test]
    fn test_assign_rejects_unknown_and_empty() {
        let mut grid = TicketGrid::new();
        assert_eq!(
            grid.assign(&[101], "0xaaa"),
            Err(GridError::UnknownTicket(101))
        );
        assert_eq!(grid.assign(&[], "0xaaa"), Err(GridError::EmptySelection));
        assert_eq!(grid.sold_count(), 0);
    }

    #[test]
    fn test_selection_toggle_is_involution() {
        let mut selection = Selection::default();
        selection.toggle(7);
        let snapshot = selection.clone();
        selection.toggle(12);
        selection.toggle(12);
        assert_eq!(selection, snapshot);
        assert!(selection.contains(7));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_selection_retain_unowned_drops_sold() {
        let mut grid = TicketGrid::new();
        let mut selection = Selection::default();
        selection.toggle(3);
        selection.toggle(47);
        grid.merge_rows(&[row(47, "0xother")]);
        selection.retain_unowned(&grid);
        assert_eq!(selection.ids(), &[3]);
    }

    #[test]
    fn test_selection_sorted_ids_for_display() {
        let mut selection = Selection::default();
        selection.toggle(47);
        selection.toggle(3);
        assert_eq!(selection.ids(), &[47, 3]);
        assert_eq!(selection.sorted_ids(), vec![3, 47]);
    }
}
