use serde::{Deserialize, Serialize};

use super::{impl_ordered, normalize_items, require, strings, ContentKind, SubCollection};
use crate::error::FieldError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct OurWorkContent {
    pub header_section: WorkHeader,
    pub portfolio_items: Vec<PortfolioItem>,
    pub footer_section: WorkFooter,
    pub work_page_section: WorkPageSection,
}

impl Default for OurWorkContent {
    fn default() -> Self {
        Self {
            header_section: WorkHeader::default(),
            portfolio_items: vec![
                portfolio_item("Nutrafab", "Product Design", "/portfolio-1.jpg", 1),
                portfolio_item("Shri Namahh", "Branding", "/portfolio-2.jpg", 2),
                portfolio_item("Visionstone", "Brand Identity", "/portfolio-3.jpg", 3),
            ],
            footer_section: WorkFooter::default(),
            work_page_section: WorkPageSection::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct WorkHeader {
    pub title: String,
    pub description: String,
    pub underline_color: String,
}

impl Default for WorkHeader {
    fn default() -> Self {
        Self {
            title: "Our Work".into(),
            description: "Lorem Ipsum Dolor Sit Amet, Consectetuer Adipiscing Elit, Sed Diam Nonummy Nibh Euismod Tincidunt Ut Laoreet Dolore Magna Aliquam Erat Volutpat.".into(),
            underline_color: "#007BFF".into(),
        }
    }
}

/// A portfolio tile plus the fields of its detail page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PortfolioItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub year: String,
    pub image: String,
    pub order: i32,
    pub detail_title: String,
    pub detail_description: String,
    pub tags: Vec<String>,
    pub gallery_images: Vec<String>,
    pub client_logo: String,
}

fn portfolio_item(name: &str, category: &str, image: &str, order: i32) -> PortfolioItem {
    PortfolioItem {
        name: name.into(),
        category: category.into(),
        year: "2024".into(),
        image: image.into(),
        order,
        ..PortfolioItem::default()
    }
}

impl_ordered!(PortfolioItem);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct WorkFooter {
    pub button_text: String,
}

impl Default for WorkFooter {
    fn default() -> Self {
        Self {
            button_text: "See All Work".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct WorkPageSection {
    pub banner_image: String,
    pub main_title: String,
    pub description: String,
    pub filters: Vec<String>,
    pub gallery_images: Vec<String>,
}

impl Default for WorkPageSection {
    fn default() -> Self {
        Self {
            banner_image: "/serviceVector.png".into(),
            main_title: "From Brief \n To Brilliance".into(),
            description: "Lorem ipsum dolor sit amet, consectetuer adipiscing elit...".into(),
            filters: strings(&[
                "All",
                "Branding & Design",
                "Strategy",
                "Content & Production",
                "AI Videos",
                "UI Design",
            ]),
            gallery_images: Vec::new(),
        }
    }
}

impl ContentKind for OurWorkContent {
    const COLLECTION: &'static str = "ourworkcontents";
    const LABEL: &'static str = "Our work content";

    fn normalize(&mut self) {
        normalize_items(&mut self.portfolio_items);
    }

    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for (i, item) in self.portfolio_items.iter().enumerate() {
            let path = format!("portfolioItems[{}]", i);
            require(&mut errors, format!("{path}.name"), &item.name, "Portfolio item name");
            require(&mut errors, format!("{path}.category"), &item.category, "Category");
            require(&mut errors, format!("{path}.year"), &item.year, "Year");
            require(&mut errors, format!("{path}.image"), &item.image, "Image");
        }
        errors
    }
}

/// `/:id/portfolio-items`
pub struct PortfolioItems;

impl SubCollection<OurWorkContent> for PortfolioItems {
    type Item = PortfolioItem;
    const PATH: &'static str = "portfolio-items";
    const LABEL: &'static str = "Portfolio item";

    fn items(content: &OurWorkContent) -> &Vec<PortfolioItem> {
        &content.portfolio_items
    }

    fn items_mut(content: &mut OurWorkContent) -> &mut Vec<PortfolioItem> {
        &mut content.portfolio_items
    }
}
