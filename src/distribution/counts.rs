use crate::offer::Offer;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount<'a> {
    pub name: &'a str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenSizeCount {
    pub screen_size: f64,
    pub count: usize,
}

/// Count occurrences, keeping first-appearance order
fn tally<'a>(values: impl Iterator<Item = &'a str>) -> Vec<CategoryCount<'a>> {
    let mut counts: Vec<CategoryCount<'a>> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|c| c.name == value) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                name: value,
                count: 1,
            }),
        }
    }
    counts
}

fn by_count_desc(mut counts: Vec<CategoryCount<'_>>) -> Vec<CategoryCount<'_>> {
    // stable: equal counts keep first-appearance order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Offers per brand, most common first
pub fn brand_distribution(offers: &[Offer]) -> Vec<CategoryCount<'_>> {
    by_count_desc(tally(offers.iter().map(|o| o.brand.as_str())))
}

/// Offers per screen size, smallest screen first
pub fn screen_size_distribution(offers: &[Offer]) -> Vec<ScreenSizeCount> {
    let mut counts: Vec<ScreenSizeCount> = Vec::new();
    for offer in offers {
        match counts.iter_mut().find(|c| c.screen_size == offer.screen_size) {
            Some(entry) => entry.count += 1,
            None => counts.push(ScreenSizeCount {
                screen_size: offer.screen_size,
                count: 1,
            }),
        }
    }

    counts.sort_by(|a, b| a.screen_size.total_cmp(&b.screen_size));
    counts
}

/// Most frequently listed titles, at most `limit` entries
pub fn top_models(offers: &[Offer], limit: usize) -> Vec<CategoryCount<'_>> {
    let mut counts = by_count_desc(tally(offers.iter().map(|o| o.title.as_str())));
    counts.truncate(limit);
    counts
}
