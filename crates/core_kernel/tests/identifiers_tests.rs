//! Unit tests for the Identifiers module
//!
//! Tests cover identifier creation, parsing, conversion, display
//! formatting and serialization.

use core_kernel::{DeliveryId, EstimateId};
use uuid::Uuid;

mod estimate_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        assert_ne!(EstimateId::new(), EstimateId::new());
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = EstimateId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = EstimateId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_prefix_and_display() {
        assert_eq!(EstimateId::prefix(), "EST");
        assert!(EstimateId::new().to_string().starts_with("EST-"));
    }

    #[test]
    fn test_from_str_with_and_without_prefix() {
        let original = EstimateId::new();
        let with_prefix: EstimateId = original.to_string().parse().unwrap();
        let bare: EstimateId = original.as_uuid().to_string().parse().unwrap();
        assert_eq!(with_prefix, original);
        assert_eq!(bare, original);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("EST-not-a-uuid".parse::<EstimateId>().is_err());
    }

    #[test]
    fn test_serializes_as_bare_uuid() {
        let uuid = Uuid::new_v4();
        let id = EstimateId::from(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}

mod delivery_id_tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(DeliveryId::prefix(), "DLV");
        assert!(DeliveryId::default().to_string().starts_with("DLV-"));
    }
}
