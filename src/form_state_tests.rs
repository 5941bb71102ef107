#[cfg(test)]
mod drop_tests {
    use crate::field::{Field, Section};
    use crate::form_state::{FormAction, FormStateManager};

    fn catalog_field(manager: &FormStateManager, name: &str) -> Field {
        manager
            .catalog()
            .iter()
            .find(|f| f.name == name)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_every_field_drops_onto_its_own_zone() {
        let catalog = FormStateManager::new().catalog().to_vec();

        for field in catalog {
            let mut manager = FormStateManager::new();
            let zone = field.section;
            let before = manager.state().fields(zone).len();

            manager.dispatch(FormAction::DropField(zone, field.clone()));

            let fields = manager.state().fields(zone);
            assert_eq!(fields.len(), before + 1);
            assert_eq!(fields.last(), Some(&field));
            assert!(manager.available(zone).iter().all(|f| f.name != field.name));
        }
    }

    #[test]
    fn test_drop_on_wrong_zone_changes_nothing() {
        let catalog = FormStateManager::new().catalog().to_vec();

        for field in catalog {
            let mut manager = FormStateManager::new();
            let before = manager.state().clone();
            let wrong_zone = match field.section {
                Section::Transaction => Section::Seller,
                Section::Seller => Section::Transaction,
            };

            manager.dispatch(FormAction::DropField(wrong_zone, field.clone()));

            assert_eq!(manager.state(), &before);
            assert!(manager.available(field.section).iter().any(|f| f.name == field.name));
        }
    }

    #[test]
    fn test_duplicate_drop_is_idempotent() {
        let mut manager = FormStateManager::new();
        let field = catalog_field(&manager, "developer_country");

        manager.dispatch(FormAction::DropField(Section::Seller, field.clone()));
        manager.dispatch(FormAction::DropField(Section::Seller, field));

        let count = manager
            .state()
            .seller_fields
            .iter()
            .filter(|f| f.name == "developer_country")
            .count();
        assert_eq!(count, 1);
        assert_eq!(manager.state().seller_fields.len(), 2);
    }

    #[test]
    fn test_remove_non_default_field() {
        let mut manager = FormStateManager::new();
        let first = catalog_field(&manager, "calendar_year2");
        let second = catalog_field(&manager, "output_metrics");
        manager.dispatch(FormAction::DropField(Section::Transaction, first));
        manager.dispatch(FormAction::DropField(Section::Transaction, second));

        manager.dispatch(FormAction::RemoveFromSection(
            Section::Transaction,
            "calendar_year2".to_string(),
        ));

        let names: Vec<_> = manager
            .state()
            .transaction_fields
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["transaction_id", "output_metrics"]);

        // Removed fields go back to the palette.
        assert!(manager
            .available(Section::Transaction)
            .iter()
            .any(|f| f.name == "calendar_year2"));
    }

    #[test]
    fn test_remove_default_field_is_noop() {
        let mut manager = FormStateManager::new();
        let before = manager.state().clone();

        manager.dispatch(FormAction::RemoveFromSection(
            Section::Transaction,
            "transaction_id".to_string(),
        ));
        manager.dispatch(FormAction::RemoveFromSection(
            Section::Seller,
            "seller_name".to_string(),
        ));

        assert_eq!(manager.state(), &before);
    }

    #[test]
    fn test_fiscal_period_scenario() {
        let mut manager = FormStateManager::new();
        assert_eq!(manager.available_count(), 6);

        let field = catalog_field(&manager, "fiscal_period");
        manager.dispatch(FormAction::DropField(Section::Transaction, field));

        let transaction = &manager.state().transaction_fields;
        assert_eq!(transaction.len(), 2);
        assert_eq!(transaction[0].name, "transaction_id");
        assert_eq!(transaction[1].name, "fiscal_period");

        assert_eq!(manager.available_count(), 5);
        let remaining: Vec<_> = manager
            .available(Section::Transaction)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(remaining, ["calendar_year2", "output_metrics"]);
        assert_eq!(manager.available(Section::Seller).len(), 3);
    }

    #[test]
    fn test_palette_empties_when_section_full() {
        let mut manager = FormStateManager::new();
        let fields: Vec<_> = manager
            .available(Section::Seller)
            .into_iter()
            .cloned()
            .collect();
        for field in fields {
            manager.dispatch(FormAction::DropField(Section::Seller, field));
        }

        assert!(manager.available(Section::Seller).is_empty());
        assert_eq!(manager.available(Section::Transaction).len(), 3);
        assert_eq!(manager.state().seller_fields.len(), 4);
    }
}
