use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;

// --- Set and reset ---

#[test]
fn set_revenue_share_stores_percent_with_zero_received() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());

    contract
        .internal_set_revenue_share(&creator(), id, collector(), 40)
        .unwrap();

    let share = contract.get_revenue_share(id, collector()).unwrap();
    assert_eq!(share.percent.as_u8(), 40);
    assert_eq!(share.total_received, U128(0));
}

#[test]
fn resetting_a_share_clears_accrued_total() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());
    contract
        .internal_set_revenue_share(&creator(), id, collector(), 40)
        .unwrap();

    // simulate accrual by the distribution process
    contract
        .revenue_shares
        .get_mut(&(id, collector()))
        .unwrap()
        .total_received = U128(500);

    contract
        .internal_set_revenue_share(&creator(), id, collector(), 55)
        .unwrap();

    let share = contract.get_revenue_share(id, collector()).unwrap();
    assert_eq!(share.percent.as_u8(), 55);
    assert_eq!(share.total_received, U128(0));
}

#[test]
fn shares_are_not_summed_across_participants() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());

    contract
        .internal_set_revenue_share(&creator(), id, collector(), 60)
        .unwrap();
    contract
        .internal_set_revenue_share(&creator(), id, admin(), 60)
        .unwrap();

    assert_eq!(contract.get_revenue_share(id, collector()).unwrap().percent.as_u8(), 60);
    assert_eq!(contract.get_revenue_share(id, admin()).unwrap().percent.as_u8(), 60);
}

// --- Cap ---

#[test]
fn share_cap_is_inclusive() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());

    contract
        .internal_set_revenue_share(&creator(), id, collector(), MAX_SHARE_PERCENT)
        .unwrap();

    let err = contract
        .internal_set_revenue_share(&creator(), id, collector(), MAX_SHARE_PERCENT + 1)
        .unwrap_err();
    assert!(matches!(err, RegistryError::ShareExceeds100(_)));
}

#[test]
fn rejected_share_leaves_prior_record() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());
    contract
        .internal_set_revenue_share(&creator(), id, collector(), 40)
        .unwrap();

    let err = contract
        .internal_set_revenue_share(&creator(), id, collector(), 101)
        .unwrap_err();
    assert!(matches!(err, RegistryError::ShareExceeds100(_)));
    assert_eq!(contract.get_revenue_share(id, collector()).unwrap().percent.as_u8(), 40);
}

// --- Guards ---

#[test]
fn set_revenue_share_requires_owner() {
    let mut contract = new_contract();
    let id = mint_one(&mut contract, &creator());

    let err = contract
        .internal_set_revenue_share(&collector(), id, collector(), 10)
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotOwner(_)));
}
