use serde::Deserialize;
use crate::i18n::Dictionary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub media: Option<Media>,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct Product {
    image: String,
    name: String,
    desc: String,
}

#[derive(Debug, Deserialize)]
struct Entry {
    title: String,
    desc: String,
}

/// Card grids for the product, why-us and process sections of one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub products: Vec<Card>,
    pub why: Vec<Card>,
    pub process: Vec<Card>,
}

impl Sections {
    pub fn from_dictionary(dict: &Dictionary, lang: &str) -> Self {
        Self {
            products: product_cards(dict, lang),
            why: why_cards(dict, lang),
            process: process_cards(dict, lang),
        }
    }
}

pub fn product_cards(dict: &Dictionary, lang: &str) -> Vec<Card> {
    dict.list::<Product>(lang, "products.list")
        .into_iter()
        .map(|p| Card {
            media: Some(Media {
                src: p.image,
                alt: p.name.clone(),
            }),
            title: p.name,
            text: p.desc,
        })
        .collect()
}

pub fn why_cards(dict: &Dictionary, lang: &str) -> Vec<Card> {
    dict.list::<Entry>(lang, "why.list")
        .into_iter()
        .map(|e| Card {
            media: None,
            title: e.title,
            text: e.desc,
        })
        .collect()
}

pub fn process_cards(dict: &Dictionary, lang: &str) -> Vec<Card> {
    dict.list::<Entry>(lang, "process.steps")
        .into_iter()
        .enumerate()
        .map(|(i, step)| Card {
            media: None,
            title: format!("{}. {}", i + 1, step.title),
            text: step.desc,
        })
        .collect()
}
