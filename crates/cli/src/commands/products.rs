//! Product listing command.

use std::io::Write;

use vitrine_core::CurrencyCode;
use vitrine_core::ProductPage;
use vitrine_storefront::{ProductClient, ProductQuery, StorefrontConfig};

use super::CommandError;

/// Fetch one page of products and print it.
pub async fn list(
    config: &StorefrontConfig,
    page: u32,
    limit: Option<u32>,
) -> Result<(), CommandError> {
    let client = ProductClient::new(config)?;
    let query = ProductQuery { page, limit };

    tracing::info!(url = %client.request_url(query), "Fetching products");
    let products = client.get_products(query).await?;

    let mut out = std::io::stdout().lock();
    write_page(&mut out, &products, config.currency)?;
    Ok(())
}

fn write_page(
    out: &mut impl Write,
    page: &ProductPage,
    currency: CurrencyCode,
) -> std::io::Result<()> {
    if page.data.is_empty() {
        writeln!(out, "Nenhum produto encontrado.")?;
    }
    for product in &page.data {
        writeln!(
            out,
            "{:>6}  {:<40}  {:>14}  estoque: {}",
            product.id,
            product.name,
            product.price_in(currency).display(),
            product.stock,
        )?;
    }
    writeln!(
        out,
        "Página {} de {} ({} produtos)",
        page.page,
        page.page_count(),
        page.total
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_write_page_lists_products_and_footer() {
        let page: ProductPage = sample_page();
        let mut buf = Vec::new();
        write_page(&mut buf, &page, CurrencyCode::BRL).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Camiseta"));
        assert!(text.contains("R$ 89,90"));
        assert!(text.ends_with("Página 1 de 4 (10 produtos)\n"));
    }

    fn sample_page() -> ProductPage {
        ProductPage {
            data: vec![
                vitrine_core::Product {
                    id: vitrine_core::ProductId::new(1),
                    name: "Camiseta".to_string(),
                    price: "89.90".parse().unwrap(),
                    images: vec![],
                    colors: vec![],
                    category_id: vitrine_core::CategoryId::new(1),
                    slug: "camiseta".to_string(),
                    stock: 4,
                    active: true,
                    color: String::new(),
                    description: String::new(),
                },
            ],
            total: 10,
            page: 1,
            limit: 3,
        }
    }
}
