//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `ReceiptId` where a
//! `VoucherId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(EntryId, "Unique identifier for a journal entry.");
typed_id!(LineId, "Unique identifier for a journal entry line.");
typed_id!(ReceiptId, "Unique identifier for a cash receipt.");
typed_id!(VoucherId, "Unique identifier for an expense voucher.");
typed_id!(InvoiceId, "Unique identifier for an invoice.");
typed_id!(ApartmentId, "Unique identifier for an apartment.");
typed_id!(BookingId, "Unique identifier for an amenity booking.");
typed_id!(StaffId, "Staff code identifying an operator for audit attribution.");
typed_id!(UserId, "Unique identifier for a user account.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(EntryId::new(), EntryId::new());
    }

    #[test]
    fn test_roundtrip_through_uuid() {
        let id = ReceiptId::new();
        assert_eq!(ReceiptId::from_uuid(id.into_inner()), id);
    }

    #[test]
    fn test_parse_from_string() {
        let id = EntryId::new();
        let parsed = EntryId::from_str(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(EntryId::from_str("not-a-uuid").is_err());
    }
}
