//! Render Models
//!
//! Display-ready data for templates. Templates escape text themselves; the
//! one thing checked here is which image URLs may reach an `src` attribute.

use reqwest::Url;

use crate::models::MenuItem;

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// `"1 meal"`, `"3 meals"`
pub fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    Placeholder,
}

/// Only http(s) and same-origin paths are rendered; anything else gets the placeholder
pub fn image_source(url: Option<&str>) -> ImageSource {
    let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
        return ImageSource::Placeholder;
    };
    if url.starts_with('/') {
        return ImageSource::Url(url.to_string());
    }
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => ImageSource::Url(url.to_string()),
        _ => ImageSource::Placeholder,
    }
}

/// One menu item as shown in the search grid or the admin table
#[derive(Debug, Clone, PartialEq)]
pub struct FoodCard {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub price_label: String,
    pub image: ImageSource,
}

impl From<&MenuItem> for FoodCard {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            price_label: format_price(item.price),
            image: image_source(item.image_url()),
        }
    }
}

/// Contents of the search results area
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultsView {
    /// Nothing searched yet
    #[default]
    Idle,
    Empty { budget: String },
    Found { budget: String, cards: Vec<FoodCard> },
    Failed,
}

impl ResultsView {
    pub fn card_count(&self) -> usize {
        match self {
            ResultsView::Found { cards, .. } => cards.len(),
            _ => 0,
        }
    }

    /// `(title, detail)` for the header or empty-state panel
    pub fn headline(&self) -> Option<(String, String)> {
        match self {
            ResultsView::Idle => None,
            ResultsView::Empty { budget } => Some((
                "No meals found within your budget".to_string(),
                format!(
                    "We couldn't find any meals under ${}. Try increasing your budget to see more options!",
                    budget
                ),
            )),
            ResultsView::Found { budget, cards } => Some((
                format!("🍽️ Meals within your budget of ${}", budget),
                format!("{} found", plural(cards.len(), "delicious option")),
            )),
            ResultsView::Failed => Some((
                "Oops! Something went wrong".to_string(),
                "We couldn't load the results. Please try again.".to_string(),
            )),
        }
    }
}

/// Pure rendering of a search response
pub fn display_results(items: &[MenuItem], budget: &str) -> ResultsView {
    if items.is_empty() {
        return ResultsView::Empty { budget: budget.to_string() };
    }
    ResultsView::Found {
        budget: budget.to_string(),
        cards: items.iter().map(FoodCard::from).collect(),
    }
}
