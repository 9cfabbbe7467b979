//! Cart behaviour scenarios and invariants over sequences of operations.

use rusty_money::{Money, iso::GBP};
use testresult::TestResult;

use trolley::prelude::*;

fn item(id: &str, minor: i64) -> ItemDescriptor<'static> {
    ItemDescriptor::new(id, Money::from_minor(minor, GBP))
}

/// Grand total recomputed independently from the lines present.
fn expected_total(cart: &Cart<'_>) -> i64 {
    cart.iter()
        .map(|line| line.unit_price().to_minor_units() * i64::from(line.quantity().get()))
        .sum()
}

fn assert_invariants(cart: &Cart<'_>) -> TestResult {
    assert_eq!(
        cart.grand_total()?.to_minor_units(),
        expected_total(cart),
        "grand total must equal the sum of line totals"
    );

    assert!(
        cart.iter().all(|line| line.quantity().get() >= 1),
        "no line may have a zero quantity"
    );

    assert_eq!(
        cart.is_empty(),
        cart.len() == 0,
        "is_empty must match the number of lines"
    );

    assert_eq!(
        cart.state().empty_message_visible(),
        cart.is_empty(),
        "empty message visibility must follow is_empty"
    );

    assert_eq!(
        cart.state().remove_all_visible(),
        !cart.is_empty(),
        "remove-all visibility must follow is_empty"
    );

    Ok(())
}

#[test]
fn single_add_sets_total_and_non_empty() -> TestResult {
    let mut cart = Cart::new(GBP);

    cart.add(item("a", 10))?;

    assert_eq!(cart.grand_total()?, Money::from_minor(10, GBP));
    assert!(!cart.is_empty());

    Ok(())
}

#[test]
fn repeated_add_increments_quantity() -> TestResult {
    let mut cart = Cart::new(GBP);

    cart.add(item("a", 10))?;
    cart.add(item("a", 10))?;

    assert_eq!(cart.quantity_of("a").map(|qty| qty.get()), Some(2));
    assert_eq!(cart.grand_total()?, Money::from_minor(20, GBP));

    Ok(())
}

#[test]
fn remove_one_of_two_items() -> TestResult {
    let mut cart = Cart::new(GBP);

    cart.add(item("a", 10))?;
    cart.add(item("b", 5))?;
    cart.remove("a");

    assert_eq!(cart.grand_total()?, Money::from_minor(5, GBP));
    assert!(!cart.contains("a"));
    assert!(cart.contains("b"));

    Ok(())
}

#[test]
fn remove_on_empty_cart_is_noop() {
    let mut cart = Cart::new(GBP);

    let removed = cart.remove("x");

    assert!(removed.is_none());
    assert!(cart.is_empty());
}

#[test]
fn clear_after_add_empties_cart() -> TestResult {
    let mut cart = Cart::new(GBP);

    cart.add(item("a", 10))?;
    cart.clear();

    assert!(cart.is_empty());
    assert_eq!(cart.grand_total()?, Money::from_minor(0, GBP));

    Ok(())
}

#[test]
fn clear_twice_equals_clear_once() -> TestResult {
    let mut once = Cart::new(GBP);
    let mut twice = Cart::new(GBP);

    for cart in [&mut once, &mut twice] {
        cart.add(item("a", 10))?;
        cart.add(item("b", 20))?;
    }

    once.clear();
    twice.clear();
    twice.clear();

    assert_eq!(once.len(), twice.len());
    assert_eq!(once.grand_total()?, twice.grand_total()?);
    assert!(once.is_empty());
    assert!(twice.is_empty());

    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Add(&'static str, i64),
    Remove(&'static str),
    Clear,
}

const OPS: &[Op] = &[
    Op::Remove("a"),
    Op::Add("a", 10),
    Op::Add("b", 5),
    Op::Add("a", 10),
    Op::Add("c", 0),
    Op::Add("b", 999),
    Op::Remove("c"),
    Op::Remove("zzz"),
    Op::Add("d", 1_250),
    Op::Remove("a"),
    Op::Clear,
    Op::Clear,
    Op::Add("a", 7),
    Op::Add("e", 3),
    Op::Add("e", 3),
    Op::Add("e", 3),
    Op::Remove("e"),
    Op::Remove("a"),
    Op::Add("f", 42),
];

fn apply(cart: &mut Cart<'static>, op: Op) -> TestResult {
    match op {
        Op::Add(id, minor) => {
            cart.add(item(id, minor))?;
        }
        Op::Remove(id) => {
            cart.remove(id);
        }
        Op::Clear => {
            cart.clear();
        }
    }

    Ok(())
}

#[test]
fn invariants_hold_after_every_operation() -> TestResult {
    let mut cart = Cart::new(GBP);

    assert_invariants(&cart)?;

    for &op in OPS {
        apply(&mut cart, op)?;
        assert_invariants(&cart)?;
    }

    Ok(())
}

#[test]
fn invariants_hold_for_every_prefix_rotation() -> TestResult {
    for start in 0..OPS.len() {
        let mut cart = Cart::new(GBP);

        for &op in OPS.iter().cycle().skip(start).take(OPS.len()) {
            apply(&mut cart, op)?;
            assert_invariants(&cart)?;
        }
    }

    Ok(())
}

#[test]
fn later_adds_do_not_reprice_a_line() -> TestResult {
    let mut cart = Cart::new(GBP);

    cart.add(item("b", 5))?;
    cart.add(item("b", 999))?;

    assert_eq!(cart.grand_total()?, Money::from_minor(10, GBP));

    Ok(())
}

#[test]
fn state_transitions_follow_first_add_and_last_removal() -> TestResult {
    let mut cart = Cart::new(GBP);
    assert_eq!(cart.state(), CartState::Empty);

    cart.add(item("a", 10))?;
    assert_eq!(cart.state(), CartState::NonEmpty);

    cart.add(item("b", 10))?;
    cart.remove("a");
    assert_eq!(cart.state(), CartState::NonEmpty);

    cart.remove("b");
    assert_eq!(cart.state(), CartState::Empty);

    cart.add(item("c", 10))?;
    cart.clear();
    assert_eq!(cart.state(), CartState::Empty);

    Ok(())
}
