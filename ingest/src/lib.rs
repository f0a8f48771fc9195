use anyhow::Result;
use reqwest::{redirect, Client};
use scraper::{Html, Selector};
use serde::Serialize;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// A scraped catalog record. Ids are assigned later by the engine.
#[derive(Debug, Clone, Serialize)]
pub struct RawProduct {
    pub title: String,
    pub desc: String,
    pub img: String,
}

/// Static catalog used when the source site yields nothing.
pub fn fallback_products() -> Vec<RawProduct> {
    let records = [
        ("Wireless Headphones", "Bluetooth noise cancelling"),
        ("Running Shoes", "Lightweight breathable mesh"),
        ("Smart Watch", "Heart rate and fitness tracking"),
        ("Laptop Bag", "Stylish waterproof laptop bag"),
    ];
    records
        .into_iter()
        .map(|(title, desc)| RawProduct {
            title: title.to_string(),
            desc: desc.to_string(),
            img: String::new(),
        })
        .collect()
}

/// Fetch the source page and extract product records from it.
pub async fn scrape_products(
    source_url: &str,
    timeout_secs: u64,
    user_agent: &str,
) -> Result<Vec<RawProduct>> {
    let client = Client::builder()
        .user_agent(user_agent)
        .redirect(redirect::Policy::limited(5))
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;

    let resp = client.get(source_url).send().await?.error_for_status()?;
    let base = resp.url().clone();
    let body = resp.text().await?;

    let products = parse_products(&body, &base);
    tracing::info!(count = products.len(), url = source_url, "scraped products");
    Ok(products)
}

/// Extract product records from a catalog page.
///
/// Cards are `article`/`div` elements whose class list mentions "product";
/// each contributes its first heading as title, first paragraph as
/// description, and first image source (absolutized against the page URL).
/// Cards repeating an earlier (title, desc) pair are dropped. When no card
/// matches at all, plain `h3`/`h4` headings are taken as bare titles.
pub fn parse_products(html: &str, base: &Url) -> Vec<RawProduct> {
    let doc = Html::parse_document(html);
    let sel_card = Selector::parse("article, div").unwrap();
    let sel_title = Selector::parse("h2, h3, h4").unwrap();
    let sel_desc = Selector::parse("p").unwrap();
    let sel_img = Selector::parse("img").unwrap();

    let mut products = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    for card in doc.select(&sel_card) {
        let is_product = card
            .value()
            .classes()
            .any(|c| c.to_ascii_lowercase().contains("product"));
        if !is_product {
            continue;
        }

        let title = first_text(&card, &sel_title);
        if title.is_empty() {
            continue;
        }
        let desc = first_text(&card, &sel_desc);
        let img = card
            .select(&sel_img)
            .next()
            .and_then(|n| n.value().attr("src"))
            .map(|src| absolutize(base, src))
            .unwrap_or_default();

        if !seen.insert((title.clone(), desc.clone())) {
            continue;
        }
        products.push(RawProduct { title, desc, img });
    }

    if products.is_empty() {
        let sel_heading = Selector::parse("h3, h4").unwrap();
        for heading in doc.select(&sel_heading) {
            let title = heading.text().collect::<String>().trim().to_string();
            if title.len() > 3 {
                products.push(RawProduct {
                    title,
                    desc: String::new(),
                    img: String::new(),
                });
            }
        }
    }
    products
}

fn first_text(card: &scraper::ElementRef<'_>, sel: &Selector) -> String {
    card.select(sel)
        .next()
        .map(|n| n.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn absolutize(base: &Url, src: &str) -> String {
    Url::parse(src)
        .or_else(|_| base.join(src))
        .map(|u| u.to_string())
        .unwrap_or_else(|_| src.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://shop.example.com/catalog/").unwrap()
    }

    #[test]
    fn extracts_title_desc_and_absolute_img_from_cards() {
        let html = r#"
            <div class="product-card">
                <img src="/images/headphones.jpg" />
                <h3>Wireless Headphones</h3>
                <p>Bluetooth noise cancelling</p>
            </div>
            <article class="Product">
                <h2>Running Shoes</h2>
                <p>Lightweight breathable mesh</p>
            </article>
            <div class="sidebar"><h3>Not a product</h3></div>
        "#;
        let products = parse_products(html, &base());
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "Wireless Headphones");
        assert_eq!(products[0].desc, "Bluetooth noise cancelling");
        assert_eq!(products[0].img, "https://shop.example.com/images/headphones.jpg");
        assert_eq!(products[1].title, "Running Shoes");
        assert!(products[1].img.is_empty());
    }

    #[test]
    fn drops_untitled_and_duplicate_cards() {
        let html = r#"
            <div class="product"><p>No heading here</p></div>
            <div class="product"><h3>Smart Watch</h3><p>Fitness tracking</p></div>
            <div class="product"><h3>Smart Watch</h3><p>Fitness tracking</p></div>
        "#;
        let products = parse_products(html, &base());
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Smart Watch");
    }

    #[test]
    fn falls_back_to_headings_when_no_cards_match() {
        let html = r#"
            <h3>Laptop Bag</h3>
            <h4>Tea</h4>
            <h4>Desk Lamp</h4>
        "#;
        let products = parse_products(html, &base());
        let titles: Vec<_> = products.iter().map(|p| p.title.as_str()).collect();
        // short headings are noise, not products
        assert_eq!(titles, vec!["Laptop Bag", "Desk Lamp"]);
        assert!(products.iter().all(|p| p.desc.is_empty()));
    }

    #[test]
    fn fallback_list_has_four_records() {
        let products = fallback_products();
        assert_eq!(products.len(), 4);
        assert_eq!(products[0].title, "Wireless Headphones");
        assert!(products.iter().all(|p| p.img.is_empty()));
    }
}
