pub mod competition;
pub mod listing;
pub mod record;
pub mod status;
