use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

// --- Categories ---

#[test]
fn add_category_stores_classification() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());

    contract
        .internal_add_category(
            &creator(),
            id,
            "photography".to_string(),
            tags(&["sunrise", "water"]),
        )
        .unwrap();

    let info = contract.get_category(id).unwrap();
    assert_eq!(info.category, "photography");
    assert_eq!(info.tags, tags(&["sunrise", "water"]));
    assert_eq!(info.updated_at, DEFAULT_TS);
}

#[test]
fn category_replaces_wholesale() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());

    contract
        .internal_add_category(
            &creator(),
            id,
            "photography".to_string(),
            tags(&["sunrise", "water"]),
        )
        .unwrap();
    contract
        .internal_add_category(&creator(), id, "print".to_string(), tags(&["limited"]))
        .unwrap();

    let info = contract.get_category(id).unwrap();
    assert_eq!(info.category, "print");
    assert_eq!(info.tags, tags(&["limited"]), "old tags are gone");
}

#[test]
fn tag_count_is_capped() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());

    let at_cap: Vec<String> = (0..MAX_TAGS).map(|i| format!("tag{}", i)).collect();
    contract
        .internal_add_category(&creator(), id, "art".to_string(), at_cap)
        .unwrap();

    let over_cap: Vec<String> = (0..MAX_TAGS + 1).map(|i| format!("tag{}", i)).collect();
    let err = contract
        .internal_add_category(&creator(), id, "art".to_string(), over_cap)
        .unwrap_err();
    assert!(matches!(err, RegistryError::TooManyTags(_)));
    assert_eq!(contract.get_category(id).unwrap().tags.len(), MAX_TAGS);
}

#[test]
fn category_length_is_capped() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());

    contract
        .internal_add_category(&creator(), id, "c".repeat(MAX_CATEGORY_LEN), vec![])
        .unwrap();

    let err = contract
        .internal_add_category(&creator(), id, "c".repeat(MAX_CATEGORY_LEN + 1), vec![])
        .unwrap_err();
    assert!(matches!(err, RegistryError::MetadataTooLong(_)));
}

#[test]
fn empty_tag_list_is_allowed() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());

    contract
        .internal_add_category(&creator(), id, "art".to_string(), vec![])
        .unwrap();
    assert!(contract.get_category(id).unwrap().tags.is_empty());
}

#[test]
fn add_category_requires_owner() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());

    let err = contract
        .internal_add_category(&collector(), id, "art".to_string(), vec![])
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotOwner(_)));
}

// --- Status ---

#[test]
fn update_status_overwrites_seeded_record() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());
    assert_eq!(contract.get_status(id).unwrap().status, INITIAL_STATUS);

    testing_env!(context_at(creator(), DEFAULT_TS + 30).build());
    contract
        .internal_update_status(&creator(), id, "archived".to_string(), false)
        .unwrap();

    let status = contract.get_status(id).unwrap();
    assert_eq!(status.status, "archived");
    assert!(!status.visible);
    assert_eq!(status.updated_at, DEFAULT_TS + 30);
}

#[test]
fn status_labels_are_free_form() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());

    contract
        .internal_update_status(&creator(), id, "on-loan (gallery)".to_string(), true)
        .unwrap();
    assert_eq!(contract.get_status(id).unwrap().status, "on-loan (gallery)");
}

#[test]
fn status_length_is_capped() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());

    contract
        .internal_update_status(&creator(), id, "s".repeat(MAX_STATUS_LEN), true)
        .unwrap();

    let err = contract
        .internal_update_status(&creator(), id, "s".repeat(MAX_STATUS_LEN + 1), true)
        .unwrap_err();
    assert!(matches!(err, RegistryError::MetadataTooLong(_)));
}

#[test]
fn update_status_requires_owner() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());

    let err = contract
        .internal_update_status(&collector(), id, "archived".to_string(), false)
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotOwner(_)));
}
