//! Property-Based Test Generators
//!
//! proptest strategies for amounts, statuses and search terms, and
//! `fake` generated forms for tests that need many distinct records.

use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, Name};
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{Lifecycle, Money};
use domain_claims::NewClaim;
use domain_party::NewUser;
use domain_policy::NewApplication;

use crate::fixtures::FormFixtures;

/// Positive USD amounts with cent precision, up to $100,000
pub fn usd_money_strategy() -> impl Strategy<Value = Money> {
    (1i64..10_000_000i64).prop_map(|cents| Money::usd(Decimal::new(cents, 2)))
}

/// Any status of `S`
pub fn status_strategy<S: Lifecycle>() -> impl Strategy<Value = S> {
    proptest::sample::select(S::all())
}

/// Search terms, mixed case, possibly padded
pub fn search_term_strategy() -> impl Strategy<Value = String> {
    "[ ]{0,2}[A-Za-z]{1,8}[ ]{0,2}"
}

/// Pet names as typed on a form
pub fn pet_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,9}"
}

/// A valid application form with a generated pet and owner
pub fn fake_application() -> NewApplication {
    let mut form = FormFixtures::new_application();
    form.pet_name = FirstName().fake();
    form.owner_name = Name().fake();
    form.owner_email = SafeEmail().fake();
    form
}

/// A valid claim form with a generated owner and amount
pub fn fake_claim() -> NewClaim {
    let mut form = FormFixtures::new_claim();
    form.pet_name = FirstName().fake();
    form.owner_name = Name().fake();
    form.owner_email = SafeEmail().fake();
    let cents: i64 = (100..500_000).fake();
    form.claim_amount = Money::usd(Decimal::new(cents, 2));
    form
}

/// A valid user form with a generated identity
pub fn fake_user() -> NewUser {
    let mut form = FormFixtures::new_user();
    form.name = Name().fake();
    form.email = SafeEmail().fake();
    form.organization = Some(CompanyName().fake());
    form
}
