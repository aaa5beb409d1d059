use clueboard_core::{CategoryData, CategoryId, RawClue};
use serde::{Deserialize, Serialize};

use crate::*;

/// One entry of the `categories` listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub title: String,
    #[serde(default)]
    pub clues_count: u32,
}

/// Category reference embedded in each clue record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: CategoryId,
    pub title: String,
}

/// One entry of the `clues` listing of a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    pub id: u64,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

impl From<ClueRecord> for RawClue {
    fn from(record: ClueRecord) -> Self {
        RawClue::new(record.question, record.answer)
    }
}

pub fn parse_category_listing(body: &str) -> Result<Vec<CategorySummary>> {
    let listing: Vec<CategorySummary> = serde_json::from_str(body)?;
    if listing.is_empty() {
        return Err(ProtocolError::EmptyListing);
    }
    Ok(listing)
}

pub fn parse_category_ids(body: &str) -> Result<Vec<CategoryId>> {
    Ok(parse_category_listing(body)?
        .into_iter()
        .map(|summary| summary.id)
        .collect())
}

/// Decodes the clue listing of category `id`; the title comes from the first embedded category.
pub fn parse_category(id: CategoryId, body: &str) -> Result<CategoryData> {
    let records: Vec<ClueRecord> = serde_json::from_str(body)?;
    if records.is_empty() {
        return Err(ProtocolError::EmptyCategory(id));
    }

    let title = records
        .iter()
        .find_map(|record| record.category.as_ref())
        .map(|category| category.title.clone())
        .ok_or(ProtocolError::MissingTitle(id))?;

    Ok(CategoryData {
        title,
        clues: records.into_iter().map(RawClue::from).collect(),
    })
}
