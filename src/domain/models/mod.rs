// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod navigation;
pub mod booking;

pub use navigation::{AccountAction, ActiveSelection, IconId, NavigationEntry, NAVIGATION};
pub use booking::{BookingCreateDto, BookingCreated, CrmPerson, CrmPersonBill};
