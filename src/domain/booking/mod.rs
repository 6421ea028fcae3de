pub mod booking_ledger;
