use scraper::{ElementRef, Html, Selector};

pub mod general_seo;
pub mod local_seo;
pub mod performance;
pub mod schema_validation;
pub mod sitemap_robots;

pub(crate) fn meta_by_name<'a>(document: &'a Html, name: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(&format!(r#"meta[name="{name}"]"#)).expect("valid selector");
    document.select(&selector).next()
}

pub(crate) fn meta_content_by_name(document: &Html, name: &str) -> Option<String> {
    meta_by_name(document, name)
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.to_string())
}

pub(crate) fn meta_property_present(document: &Html, property: &str) -> bool {
    let selector =
        Selector::parse(&format!(r#"meta[property="{property}"]"#)).expect("valid selector");
    document.select(&selector).next().is_some()
}
