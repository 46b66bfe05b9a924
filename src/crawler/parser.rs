//! HTML parser for building a scannable page
//!
//! This module turns raw HTML into a [`Page`]:
//! - Text-bearing elements, in document order, each with its tag category
//! - Every `<a>` element with its visible text and `href` target

use scraper::{ElementRef, Html, Selector};

/// Tags whose text is collected from the document
const TEXT_TAGS: &str = "p, a, span, div, h1, h2, h3, h4, h5, h6, li, td, th, address";

/// Category of a text-bearing element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    /// `<p>`
    Paragraph,
    /// `<a>`
    Anchor,
    /// `<span>`
    Span,
    /// `<div>`
    Block,
    /// `<h1>` to `<h6>`
    Heading,
    /// `<li>`
    ListItem,
    /// `<td>` and `<th>`
    TableCell,
    /// `<address>`
    Address,
}

impl TagCategory {
    /// Maps a lowercase tag name to its category
    pub fn from_tag_name(name: &str) -> Option<Self> {
        match name {
            "p" => Some(Self::Paragraph),
            "a" => Some(Self::Anchor),
            "span" => Some(Self::Span),
            "div" => Some(Self::Block),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some(Self::Heading),
            "li" => Some(Self::ListItem),
            "td" | "th" => Some(Self::TableCell),
            "address" => Some(Self::Address),
            _ => None,
        }
    }

    /// Returns true if phone numbers are searched for in this category
    pub fn is_scannable(&self) -> bool {
        matches!(
            self,
            Self::Paragraph | Self::Anchor | Self::Span | Self::Block
        )
    }
}

/// An element and all of the text beneath it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextElement {
    pub tag: TagCategory,
    pub text: String,
}

/// A hyperlink as written in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    /// Visible link text
    pub text: String,
    /// Raw `href` attribute, possibly relative; None when absent
    pub href: Option<String>,
}

/// A fetched and parsed page
#[derive(Debug, Clone)]
pub struct Page {
    /// The URL the page was requested with
    pub url: String,
    /// Text-bearing elements in document order; nested elements appear again
    /// on their own after their ancestor
    pub elements: Vec<TextElement>,
    /// All `<a>` elements in document order
    pub links: Vec<Hyperlink>,
}

/// Parses HTML content into a [`Page`]
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `url` - The URL the content was fetched from
///
/// # Example
///
/// ```
/// use phone_scout::crawler::parse_page;
///
/// let html = r#"<html><body><p>Hi</p><a href="/kontakt">Kontakt</a></body></html>"#;
/// let page = parse_page(html, "https://example.pl");
/// assert_eq!(page.elements.len(), 2);
/// assert_eq!(page.links[0].href.as_deref(), Some("/kontakt"));
/// ```
pub fn parse_page(html: &str, url: &str) -> Page {
    let document = Html::parse_document(html);

    Page {
        url: url.to_string(),
        elements: extract_text_elements(&document),
        links: extract_hyperlinks(&document),
    }
}

/// Collects every text-bearing element with its concatenated text
fn extract_text_elements(document: &Html) -> Vec<TextElement> {
    let mut elements = Vec::new();

    if let Ok(selector) = Selector::parse(TEXT_TAGS) {
        for element in document.select(&selector) {
            if let Some(tag) = TagCategory::from_tag_name(element.value().name()) {
                elements.push(TextElement {
                    tag,
                    text: element_text(&element),
                });
            }
        }
    }

    elements
}

/// Collects every `<a>` element, with or without an `href`
fn extract_hyperlinks(document: &Html) -> Vec<Hyperlink> {
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a") {
        for element in document.select(&selector) {
            links.push(Hyperlink {
                text: element_text(&element),
                href: element.value().attr("href").map(str::to_string),
            });
        }
    }

    links
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>()
}
