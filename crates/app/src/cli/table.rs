use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use vitrine::{listing::Page, products::Product};

/// Render products as a table, optionally with the active flag.
pub(crate) fn products_table(
    products: &[Product],
    image_url: impl Fn(&Product) -> Option<String>,
    with_status: bool,
) -> String {
    let mut builder = Builder::default();

    let mut header = ["ID", "Nome", "Código", "Preço", "Estoque"]
        .map(String::from)
        .to_vec();

    if with_status {
        header.push("Status".to_string());
    }

    header.push("Imagem".to_string());
    builder.push_record(header);

    for product in products {
        let mut row = vec![
            product.id.to_string(),
            product.name.clone(),
            product.code.clone(),
            product.price.to_string(),
            product.stock_label(),
        ];

        if with_status {
            row.push(if product.active { "Ativo" } else { "Inativo" }.to_string());
        }

        row.push(image_url(product).unwrap_or_else(|| "Sem imagem".to_string()));
        builder.push_record(row);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..5), Alignment::right());

    table.to_string()
}

/// One-line paging summary, e.g. `Página 2 de 7: 1 [2] 3 4 5`.
pub(crate) fn page_footer<T>(page: &Page<T>) -> String {
    let buttons: Vec<String> = page
        .window
        .iter()
        .map(|&number| {
            if number == page.number {
                format!("[{number}]")
            } else {
                number.to_string()
            }
        })
        .collect();

    format!(
        "Página {} de {} ({} produtos): {}",
        page.number,
        page.page_count.max(1),
        page.total_items,
        buttons.join(" ")
    )
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use vitrine::{prices::Price, products::ProductId};

    use super::*;

    #[test]
    fn page_footer_marks_current_page() {
        let size = NonZeroUsize::MIN.saturating_add(9);
        let page = Page::paginate((0..100).collect::<Vec<u32>>(), 4, size);

        assert_eq!(page_footer(&page), "Página 4 de 10 (100 produtos): 2 3 [4] 5 6");
    }

    #[test]
    fn products_table_lists_products() {
        let product = Product {
            id: ProductId::from("1"),
            parent: None,
            name: "Batom".to_string(),
            code: "B1".to_string(),
            price: Price::from_minor(1990),
            stock: 0,
            active: false,
            image: None,
            short_description: None,
            has_variations: false,
        };

        let table = products_table(&[product], |_| None, true);

        assert!(table.contains("Batom"));
        assert!(table.contains("R$ 19,90"));
        assert!(table.contains("Sem estoque"));
        assert!(table.contains("Inativo"));
        assert!(table.contains("Sem imagem"));
    }
}
