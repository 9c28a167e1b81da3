//! Shared domain types.

pub mod id;
pub mod pagination;

pub use id::{
    ApartmentId, BookingId, EntryId, InvoiceId, LineId, ReceiptId, StaffId, UserId, VoucherId,
};
pub use pagination::{PageMeta, PageRequest, PageResponse};
