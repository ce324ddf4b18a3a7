//! HTML fragments injected into the page. All text is escaped.

use sf_api_types::Product;
use std::fmt::Write as _;

use crate::cart::CartView;
use crate::messages;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

pub fn cart_html(view: &CartView) -> String {
    let rows = match view {
        CartView::Empty => return format!("<p>{}</p>", messages::EMPTY_CART),
        CartView::Rows(rows) => rows,
    };
    let mut html = String::new();
    for row in rows {
        let _ = write!(
            html,
            r#"<div class="d-flex justify-content-between align-items-center mb-2"><span>{} — <strong>{}</strong></span><button class="btn btn-sm btn-danger remove-btn" data-index="{}">Remove</button></div>"#,
            escape_html(&row.name),
            escape_html(&row.price),
            row.position,
        );
    }
    html
}

pub fn product_cards_html(products: &[Product]) -> String {
    let mut html = String::new();
    for product in products {
        let name = escape_html(&product.name);
        let _ = write!(
            html,
            r#"<div class="col-md-4"><div class="card product-card h-100"><img src="{image}" class="card-img-top" alt="{name}"><div class="card-body d-flex flex-column"><h5 class="card-title">{name}</h5><p class="card-text text-muted flex-grow-1">{price}</p><button class="btn btn-primary mt-auto">Add to Cart</button></div></div></div>"#,
            image = escape_html(&product.image),
            price = escape_html(&product.price),
        );
    }
    html
}

pub fn welcome_html(username: &str) -> String {
    format!(
        "👋 Welcome back, <strong>{}</strong>! We’re happy to see you again!",
        escape_html(username)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use sf_api_types::CartItem;

    #[test]
    fn empty_cart_shows_message_not_rows() {
        let html = cart_html(&CartView::Empty);
        assert_eq!(html, "<p>Your cart is empty 🛍</p>");
        assert!(!html.contains("remove-btn"));
    }

    #[test]
    fn rows_carry_their_position() {
        let cart = Cart::new(vec![
            CartItem::new("Mug", "$9.00"),
            CartItem::new("Tee", "$20.00"),
        ]);
        let html = cart_html(&cart.view());

        assert_eq!(html.matches("remove-btn").count(), 2);
        let mug = html.find("Mug").expect("mug rendered");
        let tee = html.find("Tee").expect("tee rendered");
        assert!(mug < tee);
        assert!(html.contains(r#"data-index="0""#));
        assert!(html.contains(r#"data-index="1""#));
        assert!(html.contains("<strong>$20.00</strong>"));
    }

    #[test]
    fn welcome_substitutes_the_username() {
        let html = welcome_html("admin");
        assert!(html.contains("<strong>admin</strong>"));
        assert!(!html.contains("${"));
    }

    #[test]
    fn markup_in_data_is_escaped() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        let html = welcome_html("<script>");
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn product_cards_have_add_buttons() {
        let products = vec![
            Product {
                name: "Mug".into(),
                price: "$9.00".into(),
                image: "img/mug.png".into(),
            },
            Product {
                name: "Tee".into(),
                price: "$20.00".into(),
                image: String::new(),
            },
        ];
        let html = product_cards_html(&products);
        assert_eq!(html.matches("product-card").count(), 2);
        assert_eq!(html.matches("btn btn-primary").count(), 2);
        assert!(html.contains(r#"<h5 class="card-title">Mug</h5>"#));
        assert!(html.contains(r#"src="img/mug.png""#));
    }
}
