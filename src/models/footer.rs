use serde::{Deserialize, Serialize};

use super::{
    assign_ids, impl_ordered, impl_sub_item, normalize_items, require, ContentKind, SubCollection,
};
use crate::error::FieldError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FooterContent {
    pub company_info: CompanyInfo,
    pub social_links: SocialLinks,
    pub navigation_menu: NavigationMenu,
    pub office_locations: Vec<OfficeLocation>,
    pub styling: FooterStyling,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            company_info: CompanyInfo::default(),
            social_links: SocialLinks {
                follow_text: "Follow Us:".into(),
                links: default_social_links(),
            },
            navigation_menu: NavigationMenu {
                title: "Quick Links".into(),
                links: default_navigation_links(),
            },
            office_locations: default_office_locations(),
            styling: FooterStyling::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CompanyInfo {
    pub name: String,
    pub logo: String,
    pub description: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "Voix & Vision Worx".into(),
            logo: "default-logo.svg".into(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SocialLinks {
    pub follow_text: String,
    pub links: Vec<SocialLink>,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            follow_text: "Follow Us:".into(),
            links: Vec::new(),
        }
    }
}

/// `platform` is one of linkedin, facebook, instagram, behance, youtube.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SocialLink {
    pub id: String,
    pub platform: String,
    pub url: String,
    pub is_active: bool,
}

impl Default for SocialLink {
    fn default() -> Self {
        Self {
            id: String::new(),
            platform: String::new(),
            url: String::new(),
            is_active: true,
        }
    }
}

fn social_link(platform: &str, url: &str) -> SocialLink {
    SocialLink {
        platform: platform.into(),
        url: url.into(),
        ..SocialLink::default()
    }
}

pub fn default_social_links() -> Vec<SocialLink> {
    vec![
        social_link("linkedin", "https://www.linkedin.com/company/voix-vision-worx/"),
        social_link(
            "facebook",
            "https://www.facebook.com/people/Voix-Vision-Worx/61575858395596/",
        ),
        social_link("instagram", "http://instagram.com/vvworx/"),
        social_link("behance", "https://www.behance.net/vvworx"),
        social_link("youtube", "http://www.youtube.com/@VVWorx"),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct NavigationMenu {
    pub title: String,
    pub links: Vec<NavigationLink>,
}

impl Default for NavigationMenu {
    fn default() -> Self {
        Self {
            title: "Quick Links".into(),
            links: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct NavigationLink {
    pub id: String,
    pub text: String,
    pub url: String,
    pub is_active: bool,
    pub order: i32,
}

impl Default for NavigationLink {
    fn default() -> Self {
        Self {
            id: String::new(),
            text: String::new(),
            url: String::new(),
            is_active: true,
            order: 0,
        }
    }
}

pub fn default_navigation_links() -> Vec<NavigationLink> {
    [
        ("Home", "/"),
        ("Services", "/services"),
        ("About Us", "/About"),
        ("Contact Us", "/contact"),
        ("Privacy Policy", "/privacy-policy"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (text, url))| NavigationLink {
        text: text.into(),
        url: url.into(),
        order: i as i32 + 1,
        ..NavigationLink::default()
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct OfficeLocation {
    pub id: String,
    pub city: String,
    pub is_active: bool,
    pub address: OfficeAddress,
    pub phone: String,
    pub order: i32,
}

impl Default for OfficeLocation {
    fn default() -> Self {
        Self {
            id: String::new(),
            city: String::new(),
            is_active: true,
            address: OfficeAddress::default(),
            phone: String::new(),
            order: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct OfficeAddress {
    pub line1: String,
    pub line2: String,
    pub line3: String,
}

fn office(city: &str, line1: &str, line2: &str, phone: &str, order: i32) -> OfficeLocation {
    OfficeLocation {
        city: city.into(),
        address: OfficeAddress {
            line1: line1.into(),
            line2: line2.into(),
            line3: String::new(),
        },
        phone: phone.into(),
        order,
        ..OfficeLocation::default()
    }
}

pub fn default_office_locations() -> Vec<OfficeLocation> {
    vec![
        office(
            "Dubai",
            "14th Floor, Office No 1402, Burjuman",
            "Business Tower, Burjuman, Dubai.",
            "+971 56 189 9800",
            1,
        ),
        office(
            "Mumbai",
            "Unit No 711, A Wing, Centrum Business Square, Road No 16,",
            "Wagle Estate, Thane(W) - 400604",
            "+91 877 96 32312",
            2,
        ),
        office(
            "Pune",
            "Office 3B, 2nd Floor, Building 3, Cerebrum IT Park,",
            "Kalyaninagar, 411032.",
            "+91 797 67 48422",
            3,
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FooterStyling {
    pub background_color: String,
    pub text_color: String,
    pub font_family: String,
}

impl Default for FooterStyling {
    fn default() -> Self {
        Self {
            background_color: "bg-gradient-to-r from-[#5F00F6] to-[#B933FF]".into(),
            text_color: "text-white".into(),
            font_family: "Outfit".into(),
        }
    }
}

impl_sub_item!(SocialLink);
impl_ordered!(NavigationLink, OfficeLocation);

impl ContentKind for FooterContent {
    const COLLECTION: &'static str = "footercontents";
    const LABEL: &'static str = "Footer content";

    fn apply_create_defaults(&mut self) {
        if self.social_links.links.is_empty() {
            self.social_links.links = default_social_links();
        }
        if self.navigation_menu.links.is_empty() {
            self.navigation_menu.links = default_navigation_links();
        }
        if self.office_locations.is_empty() {
            self.office_locations = default_office_locations();
        }
    }

    fn normalize(&mut self) {
        assign_ids(&mut self.social_links.links);
        normalize_items(&mut self.navigation_menu.links);
        normalize_items(&mut self.office_locations);
    }

    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for (i, link) in self.social_links.links.iter().enumerate() {
            let path = format!("socialLinks.links[{}]", i);
            require(&mut errors, format!("{path}.platform"), &link.platform, "Platform");
            require(&mut errors, format!("{path}.url"), &link.url, "URL");
        }

        for (i, link) in self.navigation_menu.links.iter().enumerate() {
            let path = format!("navigationMenu.links[{}]", i);
            require(&mut errors, format!("{path}.text"), &link.text, "Link text");
            require(&mut errors, format!("{path}.url"), &link.url, "URL");
        }

        for (i, office) in self.office_locations.iter().enumerate() {
            let path = format!("officeLocations[{}]", i);
            require(&mut errors, format!("{path}.city"), &office.city, "City");
            require(&mut errors, format!("{path}.address.line1"), &office.address.line1, "Address line 1");
            require(&mut errors, format!("{path}.phone"), &office.phone, "Phone");
        }

        errors
    }
}

/// `/:id/social-links`
pub struct SocialLinkItems;

impl SubCollection<FooterContent> for SocialLinkItems {
    type Item = SocialLink;
    const PATH: &'static str = "social-links";
    const LABEL: &'static str = "Social link";

    fn items(content: &FooterContent) -> &Vec<SocialLink> {
        &content.social_links.links
    }

    fn items_mut(content: &mut FooterContent) -> &mut Vec<SocialLink> {
        &mut content.social_links.links
    }
}

/// `/:id/navigation-links`
pub struct NavigationLinkItems;

impl SubCollection<FooterContent> for NavigationLinkItems {
    type Item = NavigationLink;
    const PATH: &'static str = "navigation-links";
    const LABEL: &'static str = "Navigation link";

    fn items(content: &FooterContent) -> &Vec<NavigationLink> {
        &content.navigation_menu.links
    }

    fn items_mut(content: &mut FooterContent) -> &mut Vec<NavigationLink> {
        &mut content.navigation_menu.links
    }
}

/// `/:id/office-locations`
pub struct OfficeLocationItems;

impl SubCollection<FooterContent> for OfficeLocationItems {
    type Item = OfficeLocation;
    const PATH: &'static str = "office-locations";
    const LABEL: &'static str = "Office location";

    fn items(content: &FooterContent) -> &Vec<OfficeLocation> {
        &content.office_locations
    }

    fn items_mut(content: &mut FooterContent) -> &mut Vec<OfficeLocation> {
        &mut content.office_locations
    }
}
