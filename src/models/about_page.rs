use serde::{Deserialize, Serialize};

use super::{impl_ordered, normalize_items, require, ContentKind, SubCollection};
use crate::error::FieldError;

/// Number of foundation cards the about page always shows.
pub const FOUNDATION_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AboutPageContent {
    pub header_section: HeaderSection,
    pub about_us_section: AboutUsSection,
    pub who_are_we_section: WhoAreWeSection,
    pub foundation_section: FoundationSection,
    pub director_section: DirectorSection,
    pub team_section: TeamSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct HeaderSection {
    pub title_line1: String,
    pub title_line2: String,
    pub title_line3: String,
    pub background_gradient: String,
    pub hero_image: String,
    pub decorative_image: String,
}

impl Default for HeaderSection {
    fn default() -> Self {
        Self {
            title_line1: "Your Voice In".into(),
            title_line2: "The Future Of".into(),
            title_line3: "Marketing.".into(),
            background_gradient: "from-[#6210FF] to-[#BE2FF4]".into(),
            hero_image: "/Marketingwoman.png".into(),
            decorative_image: "/Markofinnovation.png".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AboutUsSection {
    pub main_text_line1: String,
    pub main_text_line2: String,
    pub text_color: String,
    pub background_color: String,
}

impl Default for AboutUsSection {
    fn default() -> Self {
        Self {
            main_text_line1: "'Vua' is the Voice that will lead the dialogue".into(),
            main_text_line2: "for a future-forward world of Marketing.".into(),
            text_color: "#6210FF".into(),
            background_color: "#EEF0FF".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct WhoAreWeSection {
    pub title: String,
    pub background_image: String,
    pub left_images: LeftImages,
    pub content: WhoAreWeText,
}

impl Default for WhoAreWeSection {
    fn default() -> Self {
        Self {
            title: "Who Are We?".into(),
            background_image: "/Whoarewe.png".into(),
            left_images: LeftImages::default(),
            content: WhoAreWeText::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct LeftImages {
    pub decorative_arc: String,
    pub astronaut: String,
}

impl Default for LeftImages {
    fn default() -> Self {
        Self {
            decorative_arc: "/Layer_1.png".into(),
            astronaut: "/astro.png".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct WhoAreWeText {
    pub paragraph1: String,
    pub highlight_text: String,
    pub paragraph1_continuation: String,
    pub paragraph2: String,
}

impl Default for WhoAreWeText {
    fn default() -> Self {
        Self {
            paragraph1: "We are a future-focused Marketing agency that aims to help brands leverage the latest in marketing creativity and technology to achieve their Growth KPIs.".into(),
            highlight_text: "Our 360-degree service portfolio of creative, digital and Mar-Tech solutions".into(),
            paragraph1_continuation: "empowers brands to lead, not follow, in a world shaped by innovation.".into(),
            paragraph2: "VUA is more than a brand-it's a movement for those who seek to lead the next era of change.".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FoundationSection {
    pub title: String,
    pub background_color: String,
    pub foundations: Vec<Foundation>,
}

impl Default for FoundationSection {
    fn default() -> Self {
        Self {
            title: "Our Foundation".into(),
            background_color: "#6310FF".into(),
            foundations: default_foundations(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Foundation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub order: i32,
}

fn foundation(title: &str, description: &str, order: i32) -> Foundation {
    Foundation {
        id: String::new(),
        title: title.into(),
        description: description.into(),
        order,
    }
}

pub fn default_foundations() -> Vec<Foundation> {
    vec![
        foundation("Creativity", "Creativity that inspires", 1),
        foundation("Innovation", "Technology that keeps You ahead", 2),
        foundation("Strategic Thinking", "Strategy that always makes you win", 3),
        foundation("Customer Centricity", "Everything is about \"You\"", 4),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DirectorSection {
    pub section_title: String,
    pub background_color: String,
    pub directors: Vec<Director>,
}

impl Default for DirectorSection {
    fn default() -> Self {
        Self {
            section_title: "Director".into(),
            background_color: "#EEF0FF".into(),
            directors: vec![
                Director {
                    name: "Vishal Sharma".into(),
                    image: "/Vishal-Sharma.png".into(),
                    description: "A seasoned leader with over 25 Years of diverse industry experience spanning Media, Telecom, Real Estate, Infrastructure, and Utilities, Vishal is recognized for his ability to develop and implement winning, comprehensive Marketing Communication and Branding Strategies in complex environments. His expertise as a brand marketing leader encompasses cross-functional knowledge of both Domestic and Global Markets.\n\nPrior to his entrepreneurial ventures, Vishal held Senior Managerial Positions leading Branding & Communications at prestigious organizations including Bharti Airtel, Vodafone, Reliance, Etisalat, Essel Group, Anarock, GreenCell Mobility, and PropertyPistol.".into(),
                    order: 1,
                    ..Director::default()
                },
                Director {
                    name: "Shivendra Singh".into(),
                    image: "/Shivendra-Singh.png".into(),
                    description: "A seasoned business leader with over 17 Years of experience in the Real Estate Industry across India and international markets, including the GCC, Europe, and North America. He has held key positions in prestigious organizations such as AllCheckDeals (InfoEdge), Proptiger.com, JLL, ANAROCK, and PropertyPistol. He has been instrumental in successfully managing both Indian and international portfolios, showcasing a proven ability to navigate diverse market dynamics.".into(),
                    order: 2,
                    ..Director::default()
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Director {
    pub id: String,
    pub name: String,
    pub role: String,
    pub image: String,
    pub description: String,
    pub order: i32,
    pub is_active: bool,
}

impl Default for Director {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            role: String::new(),
            image: String::new(),
            description: String::new(),
            order: 0,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TeamSection {
    pub section_title: String,
    pub background_color: String,
    pub title_gradient: String,
    pub team_members: Vec<TeamMember>,
}

impl Default for TeamSection {
    fn default() -> Self {
        Self {
            section_title: "Our Team".into(),
            background_color: "black".into(),
            title_gradient: "from-[#6210FF] to-[#BE2FF4]".into(),
            team_members: vec![
                team_member("Gourav Bhatt", "Digital Marketing", "/Group 30.png", 1),
                team_member("Dishank Shah", "Chief Business Officer", "/Group 32.png", 2),
                team_member("Heramb Gharat", "Creative Head", "/Group 33.png", 3),
                team_member("Dishank Shah", "Chief Business Officer", "/Group 32.png", 4),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub image: String,
    pub order: i32,
    pub is_active: bool,
}

impl Default for TeamMember {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            role: String::new(),
            image: String::new(),
            order: 0,
            is_active: true,
        }
    }
}

fn team_member(name: &str, role: &str, image: &str, order: i32) -> TeamMember {
    TeamMember {
        name: name.into(),
        role: role.into(),
        image: image.into(),
        order,
        ..TeamMember::default()
    }
}

impl_ordered!(Foundation, Director, TeamMember);

impl ContentKind for AboutPageContent {
    const COLLECTION: &'static str = "aboutpagecontents";
    const LABEL: &'static str = "About page content";

    fn normalize(&mut self) {
        let foundations = &mut self.foundation_section.foundations;
        normalize_items(foundations);
        if foundations.len() > FOUNDATION_COUNT {
            foundations.truncate(FOUNDATION_COUNT);
        } else if foundations.len() < FOUNDATION_COUNT {
            let missing = FOUNDATION_COUNT - foundations.len();
            let defaults = default_foundations();
            foundations.extend(defaults.into_iter().skip(FOUNDATION_COUNT - missing));
        }
        normalize_items(foundations);

        normalize_items(&mut self.director_section.directors);
        normalize_items(&mut self.team_section.team_members);
    }

    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for (i, f) in self.foundation_section.foundations.iter().enumerate() {
            let path = format!("foundationSection.foundations[{}]", i);
            require(&mut errors, format!("{path}.title"), &f.title, "Foundation title");
            require(&mut errors, format!("{path}.description"), &f.description, "Foundation description");
        }

        for (i, d) in self.director_section.directors.iter().enumerate() {
            let path = format!("directorSection.directors[{}]", i);
            require(&mut errors, format!("{path}.name"), &d.name, "Director name");
            require(&mut errors, format!("{path}.image"), &d.image, "Director image");
            require(&mut errors, format!("{path}.description"), &d.description, "Director description");
        }

        for (i, m) in self.team_section.team_members.iter().enumerate() {
            let path = format!("teamSection.teamMembers[{}]", i);
            require(&mut errors, format!("{path}.name"), &m.name, "Team member name");
            require(&mut errors, format!("{path}.role"), &m.role, "Team member role");
            require(&mut errors, format!("{path}.image"), &m.image, "Team member image");
        }

        errors
    }
}

/// `/:id/team-members`
pub struct TeamMembers;

impl SubCollection<AboutPageContent> for TeamMembers {
    type Item = TeamMember;
    const PATH: &'static str = "team-members";
    const LABEL: &'static str = "Team member";

    fn items(content: &AboutPageContent) -> &Vec<TeamMember> {
        &content.team_section.team_members
    }

    fn items_mut(content: &mut AboutPageContent) -> &mut Vec<TeamMember> {
        &mut content.team_section.team_members
    }
}

/// `/:id/directors`
pub struct Directors;

impl SubCollection<AboutPageContent> for Directors {
    type Item = Director;
    const PATH: &'static str = "directors";
    const LABEL: &'static str = "Director";

    fn items(content: &AboutPageContent) -> &Vec<Director> {
        &content.director_section.directors
    }

    fn items_mut(content: &mut AboutPageContent) -> &mut Vec<Director> {
        &mut content.director_section.directors
    }
}
