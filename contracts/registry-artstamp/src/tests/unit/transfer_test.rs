use crate::tests::test_utils::*;
use crate::*;

// --- Happy path ---

#[test]
fn transfer_reassigns_ownership() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());

    contract
        .transfer(&creator(), creator(), collector(), id)
        .unwrap();
    assert_eq!(contract.get_owner(id), Some(collector()));
}

#[test]
fn new_owner_can_transfer_onward() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());

    contract
        .transfer(&creator(), creator(), collector(), id)
        .unwrap();
    contract
        .transfer(&collector(), collector(), admin(), id)
        .unwrap();
    assert_eq!(contract.get_owner(id), Some(admin()));
}

#[test]
fn transfer_leaves_rights_records_in_place() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());
    contract
        .internal_set_royalty(&creator(), id, creator(), 250)
        .unwrap();

    contract
        .transfer(&creator(), creator(), collector(), id)
        .unwrap();

    let royalty = contract.get_royalty(id).unwrap();
    assert_eq!(royalty.recipient, creator());
    assert_eq!(royalty.percentage.as_u16(), 250);
    assert!(contract.get_token_metadata(id).is_some());
}

// --- NotOwner folding ---

#[test]
fn transfer_by_non_owner_fails() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());

    let err = contract
        .transfer(&collector(), collector(), admin(), id)
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotOwner(_)));
    assert_eq!(contract.get_owner(id), Some(creator()));
}

#[test]
fn transfer_of_unknown_token_reports_not_owner() {
    let mut contract = new_contract();
    let err = contract
        .transfer(&creator(), creator(), collector(), 99)
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotOwner(_)));
}

#[test]
fn transfer_with_mismatched_sender_fails() {
    // caller owns the token but claims a different sender
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());

    let err = contract
        .transfer(&creator(), collector(), admin(), id)
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotOwner(_)));
    assert_eq!(contract.get_owner(id), Some(creator()));
}

#[test]
fn old_owner_cannot_transfer_again() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());
    contract
        .transfer(&creator(), creator(), collector(), id)
        .unwrap();

    let err = contract
        .transfer(&creator(), creator(), admin(), id)
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotOwner(_)));
    assert_eq!(contract.get_owner(id), Some(collector()));
}

// --- Pause gate ---

#[test]
fn transfer_while_paused_fails() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());
    contract.internal_pause(&admin()).unwrap();

    let err = contract
        .transfer(&creator(), creator(), collector(), id)
        .unwrap_err();
    assert!(matches!(err, RegistryError::Paused(_)));
    assert_eq!(contract.get_owner(id), Some(creator()));
}
