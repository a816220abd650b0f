//! Cart totals over arbitrary sequences of edits

use std::collections::BTreeMap;

use proptest::prelude::*;
use vitrine::prelude::*;

#[derive(Debug, Clone)]
enum Edit {
    Add(u64, u32),
    Remove(u64),
    Update(u64, u32),
    Increment(u64),
    Decrement(u64),
    Clear,
}

fn unit_price(id: u64) -> Price {
    Price::from_minor(id * 137 + 50)
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0..8_u64, 1..20_u32).prop_map(|(id, quantity)| Edit::Add(id, quantity)),
        (0..8_u64).prop_map(Edit::Remove),
        (0..8_u64, 0..20_u32).prop_map(|(id, quantity)| Edit::Update(id, quantity)),
        (0..8_u64).prop_map(Edit::Increment),
        (0..8_u64).prop_map(Edit::Decrement),
        Just(Edit::Clear),
    ]
}

fn apply(cart: &mut Cart, model: &mut BTreeMap<u64, u32>, edit: Edit) {
    match edit {
        Edit::Add(id, quantity) => {
            if let Some(quantity) = Quantity::new(quantity) {
                cart.add_to_cart(LineItem::new(
                    ProductId::from(id),
                    format!("Produto {id}"),
                    format!("P{id}"),
                    unit_price(id),
                    quantity,
                ));
                *model.entry(id).or_default() += quantity.get();
            }
        }
        Edit::Remove(id) => {
            cart.remove_from_cart(&ProductId::from(id));
            model.remove(&id);
        }
        Edit::Update(id, quantity) => {
            cart.update_quantity(&ProductId::from(id), quantity);

            if quantity >= 1
                && let Some(current) = model.get_mut(&id)
            {
                *current = quantity;
            }
        }
        Edit::Increment(id) => {
            cart.increment(&ProductId::from(id));

            if let Some(current) = model.get_mut(&id) {
                *current += 1;
            }
        }
        Edit::Decrement(id) => {
            cart.decrement(&ProductId::from(id));

            if let Some(current) = model.get_mut(&id) {
                *current = (*current - 1).max(1);
            }
        }
        Edit::Clear => {
            cart.clear_cart();
            model.clear();
        }
    }
}

proptest! {
    #[test]
    fn totals_match_lines_after_any_edits(edits in prop::collection::vec(edit(), 0..60)) {
        let mut cart = Cart::new();
        let mut model = BTreeMap::new();

        for edit in edits {
            apply(&mut cart, &mut model, edit);

            let expected: Price = model
                .iter()
                .map(|(id, quantity)| unit_price(*id).times(u64::from(*quantity)))
                .sum();

            prop_assert_eq!(cart.grand_total(), expected);
            prop_assert_eq!(cart.item_count(), model.values().map(|q| u64::from(*q)).sum::<u64>());
            prop_assert_eq!(cart.len(), model.len());
            prop_assert_eq!(
                cart.grand_total(),
                cart.items().iter().map(Cart::subtotal).sum::<Price>()
            );
        }
    }

    #[test]
    fn rejected_edits_leave_cart_unchanged(
        edits in prop::collection::vec(edit(), 0..30),
        id in 0..8_u64,
    ) {
        let mut cart = Cart::new();
        let mut model = BTreeMap::new();

        for edit in edits {
            apply(&mut cart, &mut model, edit);
        }

        let before = cart.clone();

        prop_assert!(!cart.update_quantity(&ProductId::from(id), 0));
        prop_assert_eq!(&cart, &before);

        cart.remove_from_cart(&ProductId::from(id + 100));
        prop_assert_eq!(&cart, &before);

        cart.clear_cart();
        prop_assert_eq!(cart.grand_total(), Price::ZERO);
        prop_assert_eq!(cart.item_count(), 0);
    }
}
