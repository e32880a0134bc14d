//! Equipment Catalog Tests
//!
//! # Test Organization
//!
//! - `lookup` - Manufacturers, models and search
//! - `years` - Production-year validation
//! - `prefill` - Populating equipment details from a model
//! - `port` - The async lookup port over the in-memory catalog

use rust_decimal_macros::dec;

use domain_equipment::{CatalogError, EquipmentCatalog, EquipmentLookup};
use domain_estimate::Measurement;

const CSV: &str = "\
year_range,make,model,weight_lbs,length_ft,width_ft,height_ft
2016-2024,John Deere,333G,12100,12.3,6.9,6.9
2017-2024,Bobcat,T770,10700,12.1,6.8,6.9
,Bobcat,S650,8000,11.4,6.0,6.8
2015-2024,John Deere,310SL,15700,23.6,7.8,11.3
";

fn catalog() -> EquipmentCatalog {
    EquipmentCatalog::from_csv(CSV).unwrap()
}

mod lookup {
    use super::*;

    #[test]
    fn test_manufacturers_are_unique_and_sorted() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog.manufacturers().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["bobcat", "john-deere"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = catalog();
        let found = catalog.search_manufacturers("DEER");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "John Deere");
        assert!(catalog.search_manufacturers("volvo").is_empty());
    }

    #[test]
    fn test_models_by_manufacturer_in_catalog_order() {
        let catalog = catalog();
        let models = catalog.models_by_manufacturer("john-deere").unwrap();
        let ids: Vec<&str> = models.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["john-deere-333g", "john-deere-310sl"]);
    }

    #[test]
    fn test_unknown_ids() {
        let catalog = catalog();
        assert_eq!(
            catalog.model("volvo-ec220").unwrap_err(),
            CatalogError::UnknownModel("volvo-ec220".into())
        );
        assert!(matches!(
            catalog.models_by_manufacturer("volvo"),
            Err(CatalogError::UnknownManufacturer(_))
        ));
    }

    #[test]
    fn test_duplicate_rows_are_skipped() {
        let csv = format!("{}2016-2024,John Deere,333G,1,1,1,1\n", CSV);
        let catalog = EquipmentCatalog::from_csv(&csv).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.model("john-deere-333g").unwrap().typical_weight_lbs, dec!(12100));
    }

    #[test]
    fn test_bad_number_reports_line() {
        let csv = "header\n2016-2024,Deere,333G,heavy,1,1,1\n";
        let err = EquipmentCatalog::from_csv(csv).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { line: 2, .. }));
    }
}

mod years {
    use super::*;

    #[test]
    fn test_year_inside_and_outside_range() {
        let catalog = catalog();
        assert!(catalog.validate_year("bobcat-t770", "2017").unwrap());
        assert!(catalog.validate_year("bobcat-t770", "2024").unwrap());
        assert!(!catalog.validate_year("bobcat-t770", "2016").unwrap());
    }

    #[test]
    fn test_blank_year_or_range_is_valid() {
        let catalog = catalog();
        assert!(catalog.validate_year("bobcat-t770", "").unwrap());
        assert!(catalog.validate_year("bobcat-s650", "1990").unwrap());
    }

    #[test]
    fn test_non_numeric_year_is_invalid() {
        assert!(!catalog().validate_year("bobcat-t770", "new").unwrap());
    }
}

mod prefill {
    use super::*;

    #[test]
    fn test_prefill_uses_typical_specs() {
        let catalog = catalog();
        let details = catalog.model("john-deere-310sl").unwrap().prefill("2020");

        assert_eq!(details.make, "John Deere");
        assert_eq!(details.model, "310SL");
        assert_eq!(details.year, "2020");
        assert_eq!(details.weight_lbs, dec!(15700));
        let dims = details.dimensions.unwrap();
        // 23.6 ft = 23' 7.2" -> 23'7"
        assert_eq!(dims.length, Measurement::new(23, 7));
        assert_eq!(dims.height, Measurement::new(11, 4));
    }
}

mod port {
    use super::*;

    #[tokio::test]
    async fn test_lookup_port_over_catalog() {
        let catalog = catalog();
        let lookup: &dyn EquipmentLookup = &catalog;

        assert_eq!(lookup.manufacturers(None).await.unwrap().len(), 2);
        assert_eq!(lookup.manufacturers(Some("bob")).await.unwrap().len(), 1);
        assert_eq!(lookup.models("bobcat").await.unwrap().len(), 2);
        assert!(lookup.validate_year("john-deere-333g", "2016").await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_model_maps_to_not_found() {
        let catalog = catalog();
        let err = EquipmentLookup::model(&catalog, "nope").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
