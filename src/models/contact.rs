use serde::{Deserialize, Serialize};

use super::{impl_ordered, normalize_items, require, strings, ContentKind, SubCollection};
use crate::error::FieldError;

/// Minimum number of job openings the contact page lays out.
pub const MIN_JOB_OPENINGS: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ContactContent {
    pub hero_section: HeroSection,
    pub services_list: Vec<String>,
    pub services_label: String,
    pub services_subtext: String,
    pub map_section: MapSection,
    pub job_section: JobSection,
    pub styling: Styling,
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            hero_section: HeroSection::default(),
            services_list: strings(&[
                "Strategy",
                "Branding & Design",
                "Content & Production",
                "Digital Marketing",
                "Agent Vua",
                "Agent Vision",
                "Agent XR",
            ]),
            services_label: "Services".into(),
            services_subtext: "(Select at least one)".into(),
            map_section: MapSection::default(),
            job_section: JobSection::default(),
            styling: Styling::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct HeroSection {
    pub title: String,
    pub description: String,
    pub form_section_title: String,
}

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            title: "Reach Us".into(),
            description: "At Voix & Vision Worx, we are dedicated to transforming your aspirations into tangible achievements. We partner with businesses to navigate complex challenges and unlock new possibilities, leveraging our expertise to deliver innovative and impactful solutions. Our commitment is to your success, helping you connect, engage, and grow in an ever-evolving landscape. Contact us today to explore how our collaborative approach can help achieve your strategic goals.".into(),
            form_section_title: "I am interested in".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MapSection {
    pub title: String,
    pub locations: Vec<MapLocation>,
}

impl Default for MapSection {
    fn default() -> Self {
        Self {
            title: "Our Presence".into(),
            locations: vec![
                MapLocation {
                    id: "mumbai".into(),
                    cx: 1087.93,
                    cy: 361.869,
                    city: "Mumbai".into(),
                    address: strings(&[
                        "Unit No 711, A Wing",
                        "Centrum Business Square",
                        "Road No 16, Wagle Estate",
                        "Thane(W) - 400604",
                    ]),
                    phone: "+91 877 96 32312".into(),
                    order: 1,
                    is_active: true,
                },
                MapLocation {
                    id: "dubai".into(),
                    cx: 985.556,
                    cy: 330.369,
                    city: "Dubai".into(),
                    address: strings(&[
                        "14th Floor, Office No 1402",
                        "Burjuman Business Tower",
                        "Burjuman, Dubai",
                    ]),
                    phone: "+971 56 189 9800".into(),
                    order: 2,
                    is_active: true,
                },
                MapLocation {
                    id: "pune".into(),
                    cx: 1103.68,
                    cy: 367.381,
                    city: "Pune".into(),
                    address: strings(&[
                        "Office 3B, 2nd Floor",
                        "Building 3, Cerebrum IT Park",
                        "Kalyaninagar, 411032",
                    ]),
                    phone: "+91 797 67 48422".into(),
                    order: 3,
                    is_active: true,
                },
            ],
        }
    }
}

/// A pin on the presence map. `cx`/`cy` are SVG coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MapLocation {
    pub id: String,
    pub cx: f64,
    pub cy: f64,
    pub city: String,
    pub address: Vec<String>,
    pub phone: String,
    pub order: i32,
    pub is_active: bool,
}

impl Default for MapLocation {
    fn default() -> Self {
        Self {
            id: String::new(),
            cx: 0.0,
            cy: 0.0,
            city: String::new(),
            address: Vec::new(),
            phone: String::new(),
            order: 0,
            is_active: true,
        }
    }
}

impl_ordered!(MapLocation);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct JobSection {
    pub title: String,
    pub subtitle: String,
    pub openings: Vec<String>,
    pub contact_text: String,
    pub contact_email: String,
}

pub fn default_openings() -> Vec<String> {
    strings(&[
        "Brand Manager",
        "UI Designer",
        "Marketing Intern",
        "Senior Designer",
        "Animator",
        "Business Development",
    ])
}

impl Default for JobSection {
    fn default() -> Self {
        Self {
            title: "Looking For VUA Filling".into(),
            subtitle: "Current Opening".into(),
            openings: default_openings(),
            contact_text: "Work With Us:".into(),
            contact_email: "hr@vvworx.com".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Styling {
    pub background_color: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub text_color: String,
}

impl Default for Styling {
    fn default() -> Self {
        Self {
            background_color: "#EEF0FF".into(),
            primary_color: "#6210FF".into(),
            secondary_color: "#BE2FF4".into(),
            text_color: "#000000".into(),
        }
    }
}

impl ContentKind for ContactContent {
    const COLLECTION: &'static str = "contactcontents";
    const LABEL: &'static str = "Contact content";

    fn normalize(&mut self) {
        normalize_items(&mut self.map_section.locations);

        let openings = &mut self.job_section.openings;
        if openings.len() < MIN_JOB_OPENINGS {
            let missing = MIN_JOB_OPENINGS - openings.len();
            openings.extend(default_openings().into_iter().skip(MIN_JOB_OPENINGS - missing));
        }
    }

    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for (i, location) in self.map_section.locations.iter().enumerate() {
            require(
                &mut errors,
                format!("mapSection.locations[{}].city", i),
                &location.city,
                "Location city",
            );
        }
        errors
    }
}

/// `/:id/map-locations`
pub struct MapLocations;

impl SubCollection<ContactContent> for MapLocations {
    type Item = MapLocation;
    const PATH: &'static str = "map-locations";
    const LABEL: &'static str = "Map location";

    fn items(content: &ContactContent) -> &Vec<MapLocation> {
        &content.map_section.locations
    }

    fn items_mut(content: &mut ContactContent) -> &mut Vec<MapLocation> {
        &mut content.map_section.locations
    }
}
