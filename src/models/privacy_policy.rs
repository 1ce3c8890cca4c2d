use serde::{Deserialize, Serialize};

use super::{require, strings, ContentKind};
use crate::error::FieldError;

/// The privacy policy page. Each section is a title plus either a single
/// paragraph or a list of paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PrivacyPolicy {
    pub page_title: String,

    pub preamble_title: String,
    pub preamble_content: String,

    pub info_collection_title: String,
    pub info_collection_content: Vec<String>,

    pub through_services_title: String,
    pub through_services_content: String,

    pub use_of_info_title: String,
    pub use_of_info_intro: String,
    pub use_of_info_list: Vec<String>,
    pub use_of_info_conclusion: String,

    pub disclosure_title: String,
    pub disclosure_content: String,

    pub third_party_links_title: String,
    pub third_party_links_content: String,

    pub limiting_use_title: String,
    pub limiting_use_content: String,

    pub reviewing_title: String,
    pub reviewing_content: String,

    pub contact_info: PolicyContact,

    pub correction_title: String,
    pub correction_content: String,

    pub deletion_title: String,
    pub deletion_content: String,

    pub security_title: String,
    pub security_content: Vec<String>,

    pub children_privacy_title: String,
    pub children_privacy_content: Vec<String>,

    pub cookies_title: String,
    pub cookies_content: Vec<String>,
    pub cookie_blocking_links: Vec<String>,

    pub updates_title: String,
    pub updates_content: String,
    pub updates_contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PolicyContact {
    pub title: String,
    pub address: String,
    pub email: String,
}

impl Default for PolicyContact {
    fn default() -> Self {
        Self {
            title: "General Counsel".into(),
            address: "1203, B-3, Rosa Oasis, G. B. Road, Kasarvadavali, Thane, Maharashtra, 400615".into(),
            email: "reachus@vvworx.com".into(),
        }
    }
}

impl Default for PrivacyPolicy {
    fn default() -> Self {
        Self {
            page_title: "Privacy Policy".into(),

            preamble_title: "Preamble".into(),
            preamble_content: r#"Voix & Vision Worx Pvt. Ltd. and its affiliated entities around the world (collectively "VVWorx", "we", or "us"), is committed to protecting the privacy of your personal information. This Privacy Policy details certain policies implemented throughout our company governing VVWorx's use of personal information about: visitors to our Internet website (the "Site") located at the URL: "https://www.vvworx.com/" and employees of our clients who use our services and/or products (collectively, services and products are: "Service" or "Services"). Where the Privacy Policy differs depending on whether you are using the Site or the Services, those distinctions will be noted in this Privacy Policy."#.into(),

            info_collection_title: "Information Collection Through the Site:".into(),
            info_collection_content: strings(&[
                r#"You can generally visit the Site without revealing any personal information about yourself. "Personal information" is any information that can be used to identify an individual, and may include name, address, email address, phone number, login information (account number, password), marketing preferences, or social media account information. However, in certain sections of the site we may invite you to contact us for information or questions, inquire about a job or apply for a job, or to obtain content we provide for informational and marketing purposes. In such situations, you may disclose to us your name, phone number, email address, title, company name, and certain employment-related information."#,
                "We may track and store information such as the total number of visitors to our Site, the number of visitors to each page of our Site, your IP address, your browser type, the number of external web site (defined below) pages you have visited, and other browsing or computer data.",
            ]),

            through_services_title: "Through the Services:".into(),
            through_services_content: "When our clients use our Services, our clients may provide us with information about you, including personal information such as your name, address, email, phone number and IP address".into(),

            use_of_info_title: "Use of Information".into(),
            use_of_info_intro: "We may use your personal information you submit to the Site to:".into(),
            use_of_info_list: strings(&[
                "Contact you to deliver certain information you have requested",
                "Verify your authority to enter our Site",
                "Consider your eligibility for employment",
                "Improve the content and general administration of the Site",
                "Address any queries or provide necessary information/resources",
                "Contact you in relation to your registration for an event/webinar",
                "Contact the users who have provided their information with respect to any service line",
            ]),
            use_of_info_conclusion: "Voix & Vision Worx uses the information it receives through our clients' use of the Services to provide our Services to our clients under their direction and instruction.".into(),

            disclosure_title: "Disclosure and Onward Transfer of Information".into(),
            disclosure_content: "We will not rent or sell your personal information to any company or organization. We may provide your personal information to our subsidiaries and affiliates. We may provide your personal information to vendors and service agencies that we may engage to assist us in providing our Services to our clients, or to assist us in verifying your eligibility for employment with VVWorx. Such third parties will be restricted from further distributing your personal information and must enter into a written confidentiality agreement with us. We will also disclose your personal information if we are required to do so by law, regulation or other government authority, or otherwise in cooperation with a bona-fide investigation of a governmental or other public authority, including to meet national security or law enforcement requirements, or to protect the safety of visitors to our Site. We may transfer your personal information to a successor entity upon a merger, consolidation or other corporate reorganization in which VVWorx participates or to a purchaser of all or substantially all of VVWorx's assets to which the Site and/or Services relate.".into(),

            third_party_links_title: "Links to Third Party Sites".into(),
            third_party_links_content: r#"The Site may provide links to other web sites or resources over which VVWorx does not have control ("External Web Sites"). Such links do not constitute an endorsement by VVWorx of those External Web Sites. You acknowledge that VVWorx is providing these links to you only as a convenience, and further agree that VVWorx is not responsible for the content of such External Web Sites. Your use of External Web Sites is subject to the terms of use and privacy policies located on the External Web Sites."#.into(),

            limiting_use_title: "Limiting the Use of Personal Information Collected Through the Site and Services".into(),
            limiting_use_content: "You can limit our use of personal information that we obtain via our Services by managing your account at the respective client with whom you interact.".into(),

            reviewing_title: "Reviewing, Correcting and Deleting Personal Information Collected Through the Site".into(),
            reviewing_content: "Voix & Vision Worx provides you with the ability to review, correct, and delete your personal information that we have received if it is inaccurate or you wish us to delete it; provided, however, that VVWorx will retain a copy in its files of all personal information, even if corrected, necessary to resolve disputes. VVWorx retains personal information you submit through our Site for up to 4 years in connection with regulatory, tax, insurance or other requirements in the places in which it operates. VVWorx thereafter deletes or anonymizes such information in accordance with applicable laws. You have the right to review or delete the foregoing information, by contacting VVWorx at:".into(),

            contact_info: PolicyContact::default(),

            correction_title: "Correction".into(),
            correction_content: r#"If VVWorx has information about you that you believe is inaccurate, you have the right to request correction of your information. Please see the section titled "Reviewing, Correcting and Deleting Personal Information Collected Through the Site" above for more information on correcting, or requesting correction of, your information."#.into(),

            deletion_title: "Deletion".into(),
            deletion_content: r#"You may request deletion of your personal information at any time. We may retain certain information about you as required by law and for legitimate business purposes permitted by law. Please see the "Reviewing, Correcting and Deleting Personal Information Collected Through the Site" section above for more information regarding VVWorx's retention and deletion practices."#.into(),

            security_title: "Security".into(),
            security_content: strings(&[
                "We employ procedural and technological measures that are reasonably designed to help protect your personally identifiable information from loss, unauthorized access, disclosure, alteration or destruction. VVWorx uses Transport Layer Security, firewalls, password protection and takes other physical and logical security measures and places internal restrictions on who within VVWorx may access your data to help prevent unauthorized access to your personally identifiable information. Our security is annually audited by a third party, under the ISO27001:2013 standard and additionally to comply with the PCI-DSS version 3.2 for specific client Services.",
                "The safety and security of your information also depends on you. Where we have given you (or where you have chosen) a password for access to certain parts of our Site, you are responsible for keeping that password confidential. We ask you not to share your password with anyone. You also acknowledge that your account is personal to you and agree not to provide any other person with access to this Site or portions of it using your user name, password or other security information. You agree to notify us immediately of any unauthorized access to or use of your user name or password or any other breach of security.",
                "Unfortunately, the transmission of information via the Internet is not completely secure. Although we do our best to protect your personal information, as described above, we cannot guarantee the security of your personal information transmitted to our Site. Any transmission of personal information is at your own risk. We are not responsible for circumvention of any privacy settings or security measures contained on the Site.",
            ]),

            children_privacy_title: "Children's Privacy".into(),
            children_privacy_content: strings(&[
                "Voix & Vision Worx recognizes the privacy interests of children and we encourage parents and guardians to take an active role in their children's online activities and interests. The Site is not intended for children under the age of 13. VVWorx does not target the Site to children under 13. VVWorx does not knowingly collect personal information from children under the age of 13.",
                "If we learn that we have collected or received personal information from a child under 13 without verification or parental consent, we will delete that information. If you believe we might have any such information from or about a child under the age of 13, please contact us at: reachus@vvworx.com",
            ]),

            cookies_title: "Cookies".into(),
            cookies_content: strings(&[
                r#"In order to enhance your experience on our sites, our web pages use "cookies". Cookies are small text files that we place in your computer's browser to store your preferences. Cookies, by themselves, do not tell us your email address or other personal information unless you choose to provide this information to us by, for example, registering at our Site. Once you choose to provide a web page with personal information, this information may be linked to the data stored in the cookie. A cookie is like a unique identity card. It is unique to your computer and can only be read by the server that gave it to you."#,
                "We use cookies to understand site usage and to improve the content and offerings on our Site. For example, we may use cookies to personalize your experience on our web pages (e.g. to recognize you by name when you return to our Site). We also may use cookies to offer you services.",
                "Cookies save you time as they help us to remember who you are. Cookies help us to be more efficient. We can learn about what content is important to you and what is not. If you are concerned about cookies, you can turn them off in your browser.",
                "The full details of all the cookies set by www.vvworx.com are below:",
                "Google Analytics – The cookies collect information in an anonymous form, but include data such as how you arrived at the Site, how often you've visited, and which pages you looked at. We use the information to compile reports using Google Analytics. To opt out of being tracked by Google Analytics across all VVWorx websites, visit http://tools.google.com/dlpage/gaoptout.",
                "The following links explain how to block cookies in your browser:",
            ]),
            cookie_blocking_links: strings(&[
                "How to block cookies in Internet Explorer – http://windows.microsoft.com/en-US/windows-vista/Block-or-allow-cookies",
                "How to block cookies in Chrome – https://support.google.com/chrome/bin/answer.py?hl=en&answer=95647&p=cpn_cookies",
                "How to block cookies in Firefox – http://support.mozilla.org/en-US/kb/enable-and-disable-cookies-website-preferences",
                "How to block cookies in Safari – https://support.apple.com/en-in/guide/safari/sfri11471/mac",
            ]),

            updates_title: "Privacy Policy Updates".into(),
            updates_content: "Due to the Internet's rapidly evolving nature, VVWorx may need to update this Privacy Policy from time to time. If so, VVWorx will post a notice of the change and the updated Privacy Policy on our site located at https://www.vvworx.com. We may also send registered visitors of the Site e-mail notifications notifying such visitors of any changes to the Privacy Policy. If any change is unacceptable to you, you have the right to cease using this Site. If you do not cease using this Site, you will be deemed to have accepted VVWorx's then current Privacy Policy.".into(),
            updates_contact: "If you have any questions regarding this Privacy Policy please contact us via e-mail at: reachus@vvworx.com".into(),
        }
    }
}

impl ContentKind for PrivacyPolicy {
    const COLLECTION: &'static str = "privacypolicies";
    const LABEL: &'static str = "Privacy policy";

    fn normalize(&mut self) {
        self.page_title = self.page_title.trim().to_string();
    }

    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, "pageTitle", &self.page_title, "Page title");
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sections() {
        let policy = PrivacyPolicy::default();
        assert_eq!(policy.cookie_blocking_links.len(), 4);
        assert_eq!(policy.contact_info.email, "reachus@vvworx.com");

        let json = serde_json::to_value(&policy).unwrap();
        assert_eq!(json["thirdPartyLinksTitle"], "Links to Third Party Sites");
        assert_eq!(json["useOfInfoList"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut policy = PrivacyPolicy {
            page_title: "   ".into(),
            ..PrivacyPolicy::default()
        };
        policy.normalize();
        let errors = policy.validate();
        assert_eq!(errors, vec![FieldError::new("pageTitle", "Page title is required")]);
    }
}
