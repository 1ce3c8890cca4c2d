use serde::{Deserialize, Serialize};

use super::{require, strings, ContentKind};
use crate::error::FieldError;

/// The services page: one block per service line plus the product agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ServicesContent {
    pub header_title: String,
    pub header_description: String,

    pub strategy_title: String,
    pub strategy_description: String,
    pub strategy_services: Vec<String>,

    pub branding_title: String,
    pub branding_description: String,
    pub branding_services: Vec<String>,

    pub content_title: String,
    pub content_description: String,
    pub content_services: Vec<String>,

    pub digital_title: String,
    pub digital_description: String,
    pub digital_services: Vec<String>,

    pub tech_solutions_title: String,
    pub tech_solutions_description: String,
    pub tech_solutions_tagline: String,

    #[serde(rename = "agentVUATitle")]
    pub agent_vua_title: String,
    #[serde(rename = "agentVUADescription")]
    pub agent_vua_description: String,
    #[serde(rename = "agentVUAImpactTitle")]
    pub agent_vua_impact_title: String,
    #[serde(rename = "agentVUAFeatures")]
    pub agent_vua_features: Vec<String>,
    #[serde(rename = "agentVUATagline")]
    pub agent_vua_tagline: String,

    pub agent_vision_title: String,
    pub agent_vision_description: String,
    pub agent_vision_video_labels: VideoLabels,
    pub agent_vision_stats: Vec<VisionStat>,

    #[serde(rename = "agentXRTitle")]
    pub agent_xr_title: String,
    #[serde(rename = "agentXRDescription")]
    pub agent_xr_description: String,
    #[serde(rename = "agentXRServices")]
    pub agent_xr_services: Vec<String>,
    #[serde(rename = "agentXRStats")]
    pub agent_xr_stats: Vec<XrStat>,

    pub videos: ServiceVideos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct VideoLabels {
    pub launch_videos: String,
    pub production_films: String,
    pub reel_content: String,
    pub project_walkthroughs: String,
}

impl Default for VideoLabels {
    fn default() -> Self {
        Self {
            launch_videos: "Launch Videos".into(),
            production_films: "Production & films".into(),
            reel_content: "Reel/content generation".into(),
            project_walkthroughs: "Project walkthroughs".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisionStat {
    pub value: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct XrStat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ServiceVideos {
    pub agent_vision_video_one: Vec<String>,
    pub agent_vision_video_two: Vec<String>,
    pub agent_vision_video_three: Vec<String>,
    pub vr_video: String,
}

impl Default for ServiceVideos {
    fn default() -> Self {
        Self {
            agent_vision_video_one: strings(&["/agentVision/1.mp4", "/agentVision/5.mp4"]),
            agent_vision_video_two: strings(&["/agentVision/2.mp4", "/agentVision/3.mp4"]),
            agent_vision_video_three: strings(&["/agentVision/4.mp4", "/agentVision/6.mp4"]),
            vr_video: "/agentVision/2.mp4".into(),
        }
    }
}

fn vision_stat(value: &str, description: &str) -> VisionStat {
    VisionStat {
        value: value.into(),
        description: description.into(),
    }
}

fn xr_stat(value: &str, label: &str) -> XrStat {
    XrStat {
        value: value.into(),
        label: label.into(),
    }
}

impl Default for ServicesContent {
    fn default() -> Self {
        Self {
            header_title: "Your 360° Growth Engine".into(),
            header_description: "We are India-UAE focused Tech-infused brand marketing agency offering an exhaustive services portfolio in Go-To-Market Strategy Development, Branding & Creative Solutions, AI-backed Performance & Social Media Marketing, and MarTech Automation. Founded by industry veterans, we are a passionate team offering scalable marketing solutions with a data-driven approach with presence in Mumbai, Pune and Dubai.".into(),

            strategy_title: "Strategy".into(),
            strategy_description: "We translate your aspirations into a precise and actionable blueprint for achieving your goals.".into(),
            strategy_services: strings(&[
                "GTM Strategy",
                "Brand Strategy",
                "Brand Voice",
                "Campaign Strategy",
                "PR Strategy",
                "Social Media Strategy",
            ]),

            branding_title: "Branding & Design".into(),
            branding_description: "We transform your vision into a tangible and impactful brand experience.".into(),
            branding_services: strings(&[
                "Brand Identity Design",
                "Website Design",
                "UI/UX Design",
                "Event Branding",
                "Office Branding",
                "Print & Digital Creatives",
            ]),

            content_title: "Content & Production".into(),
            content_description: "We bring your story to life, crafting impactful content experiences that resonate.".into(),
            content_services: strings(&[
                "Influencer Marketing",
                "Blogs / Articles",
                "Conceptualization of Content",
                "Motion Graphics",
                "Creative Copywriting",
                "Reel Production",
                "High Quality Video Production",
            ]),

            digital_title: "Digital Marketing".into(),
            digital_description: "We convert digital footprints into tangible results, connecting you with your audience and driving results.".into(),
            digital_services: strings(&["Growth Marketing", "Social Media Management", "SEO Optimization"]),

            tech_solutions_title: "Technological Solution".into(),
            tech_solutions_description: "Your story deserves more than a slow, costly production cycle. With our AI video engine, you can turn sparks of inspiration into cinematic content-on demand. Whether you're crafting personalized ads or big brand moments, we help you scale creativity without compromise.".into(),
            tech_solutions_tagline: "Less waiting. More wow.".into(),

            agent_vua_title: "Agent VUA".into(),
            agent_vua_description: "AI Powered Calling Agent for all your Pre-Sales / Post-Sales & Customer Support Requirements".into(),
            agent_vua_impact_title: "The Impact of Agent Vua".into(),
            agent_vua_features: strings(&[
                "AI Powered, Human like conversations",
                "Real time objection handling",
                "CRM Integrated",
                "Available 24*7",
            ]),
            agent_vua_tagline: "Agent Vua can breakeven at the cost of just 5 Agents".into(),

            agent_vision_title: "Agent Vision".into(),
            agent_vision_description: "Fast, affordable production quality films".into(),
            agent_vision_video_labels: VideoLabels::default(),
            agent_vision_stats: vec![
                vision_stat("10%", "Production\nBudget"),
                vision_stat("50X", "Faster time\nto market"),
                vision_stat("100%", "Realistic\nfootage"),
            ],

            agent_xr_title: "Agent XR".into(),
            agent_xr_description: "Don't leave it to their imagination, immerse them in the experience".into(),
            agent_xr_services: strings(&[
                "Virtual Reality",
                "Digital twins",
                "Mixed reality",
                "Realistic renderings",
            ]),
            agent_xr_stats: vec![
                xr_stat("90%", "Cost Saving"),
                xr_stat("50X", "Faster time to market"),
                xr_stat("400%", "Increased Engagement"),
            ],

            videos: ServiceVideos::default(),
        }
    }
}

impl ContentKind for ServicesContent {
    const COLLECTION: &'static str = "servicescontents";
    const LABEL: &'static str = "Services content";

    fn normalize(&mut self) {}

    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for (i, stat) in self.agent_vision_stats.iter().enumerate() {
            let path = format!("agentVisionStats[{}]", i);
            require(&mut errors, format!("{path}.value"), &stat.value, "Stat value");
            require(&mut errors, format!("{path}.description"), &stat.description, "Stat description");
        }
        for (i, stat) in self.agent_xr_stats.iter().enumerate() {
            let path = format!("agentXRStats[{}]", i);
            require(&mut errors, format!("{path}.value"), &stat.value, "Stat value");
            require(&mut errors, format!("{path}.label"), &stat.label, "Stat label");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_field_names() {
        let json = serde_json::to_value(ServicesContent::default()).unwrap();
        assert_eq!(json["headerTitle"], "Your 360° Growth Engine");
        assert_eq!(json["agentVUATitle"], "Agent VUA");
        assert_eq!(json["agentXRStats"][2]["label"], "Increased Engagement");
        assert_eq!(json["videos"]["vrVideo"], "/agentVision/2.mp4");
    }

    #[test]
    fn test_partial_payload_fills_defaults() {
        let content: ServicesContent =
            serde_json::from_value(serde_json::json!({ "headerTitle": "Growth" })).unwrap();
        assert_eq!(content.header_title, "Growth");
        assert_eq!(content.strategy_title, "Strategy");
        assert_eq!(content.agent_vision_stats.len(), 3);
    }

    #[test]
    fn test_blank_stat_rejected() {
        let mut content = ServicesContent::default();
        content.agent_xr_stats[0].label = String::new();
        let errors = content.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "agentXRStats[0].label");
    }
}
