//! Integration tests for the cart to order link flow

use percent_encoding::percent_decode_str;
use testresult::TestResult;

use vitrine::prelude::*;

fn product(id: u64, name: &str, price: u64, stock: u32, parent: Option<u64>) -> Product {
    Product {
        id: ProductId::from(id),
        parent: parent.map(ProductId::from),
        name: name.to_string(),
        code: format!("SKU-{id}"),
        price: Price::from_minor(price),
        stock,
        active: true,
        image: None,
        short_description: None,
        has_variations: false,
    }
}

#[test]
fn shopper_builds_cart_and_sends_order() -> TestResult {
    let batom = product(1, "Batom Matte", 1990, 10, None);
    let tom_claro = product(21, "Base Líquida - Claro", 4500, 2, Some(20));

    let mut cart = Cart::new();

    cart.add_to_cart(batom.to_line_item(Quantity::ONE));
    cart.add_to_cart(tom_claro.to_line_item(Quantity::ONE));
    cart.add_to_cart(batom.to_line_item(Quantity::ONE));

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.grand_total(), Price::from_minor(1990 * 2 + 4500));

    let template = OrderTemplate::default();
    let link = template.link(&cart)?;
    let text = link
        .strip_prefix("https://wa.me/?text=")
        .unwrap_or_default();
    let decoded = percent_decode_str(text).decode_utf8()?;

    assert_eq!(decoded, template.render(&cart)?);
    assert!(decoded.contains("1. Batom Matte\n   • Código: SKU-1\n   • Quantidade: 2"));
    assert!(decoded.contains("2. Base Líquida - Claro"));
    assert!(decoded.contains("*Total do Pedido: R$ 84,80*"));

    Ok(())
}

#[test]
fn emptied_cart_cannot_be_ordered() {
    let mut cart = Cart::new();

    cart.add_to_cart(product(1, "Batom", 1000, 1, None).to_line_item(Quantity::ONE));
    cart.remove_from_cart(&ProductId::from(1_u64));

    assert_eq!(OrderTemplate::default().link(&cart), Err(OrderError::EmptyCart));
}

#[test]
fn quantity_edits_flow_into_the_order() -> TestResult {
    let mut cart = Cart::new();
    let id = ProductId::from(1_u64);

    cart.add_to_cart(product(1, "Batom", 1000, 1, None).to_line_item(Quantity::ONE));

    assert!(cart.update_quantity(&id, 4));
    assert!(!cart.update_quantity(&id, 0));
    assert!(cart.decrement(&id));

    let message = OrderTemplate::default().render(&cart)?;

    assert!(message.contains("Quantidade: 3"));
    assert!(message.contains("*Total do Pedido: R$ 30,00*"));

    Ok(())
}

#[test]
fn fixture_cart_renders_with_custom_store() -> TestResult {
    let cart = CartFixture::from_yaml(
        r#"
items:
  - { id: 9, name: Sérum Facial, code: SF-9, price: "1234.50", quantity: 1 }
"#,
    )?
    .into_cart()?;

    let template = OrderTemplate::new("Loja Teste", "https://wa.me/5511999999999");
    let message = template.render(&cart)?;

    assert!(message.starts_with("*🛍️ Pedido - Loja Teste*"));
    assert!(message.contains("Valor unitário: R$ 1.234,50"));
    assert!(template.link(&cart)?.starts_with("https://wa.me/5511999999999?text="));

    Ok(())
}
