//! Declaration of the mobile add-on: which handlers it registers with the
//! app, the methods the app calls, and the language strings it needs.

use serde::Serialize;
use std::collections::BTreeMap;

pub const ADDON_NAME: &str = "tool_certificate";
pub const HANDLER_NAME: &str = "mycertificates";
pub const VIEW_METHOD: &str = "mobile_my_certificates_view";
pub const INIT_METHOD: &str = "mobile_my_certificates_init";

const STYLES_PATH: &str = "admin/tool/certificate/mobileapp/styles/mycertificates.css";
const STYLES_VERSION: &str = "1";

const LANG_STRINGS: &[(&str, &str)] = &[
    ("mycertificates", "tool_certificate"),
    ("mycertificatesdescription", "tool_certificate"),
    ("nothingtodisplay", "moodle"),
    ("name", "moodle"),
    ("issueddate", "tool_certificate"),
    ("expirydate", "tool_certificate"),
    ("never", "moodle"),
    ("expired", "tool_certificate"),
    ("code", "tool_certificate"),
    ("verify", "tool_certificate"),
    ("file", "moodle"),
    ("shareonlinkedin", "tool_certificate"),
    ("view", "moodle"),
    ("viewmore", "tool_certificate"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobileAddon {
    pub handlers: BTreeMap<String, AddonHandler>,
    /// `(string identifier, component)` pairs.
    pub lang: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddonHandler {
    #[serde(rename = "displaydata")]
    pub display_data: DisplayData,
    pub delegate: String,
    pub method: String,
    pub init: String,
    #[serde(rename = "restricttocurrentuser")]
    pub restrict_to_current_user: bool,
    #[serde(rename = "restricttoenrolledcourses")]
    pub restrict_to_enrolled_courses: bool,
    pub styles: Styles,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayData {
    pub title: String,
    pub icon: String,
    pub class: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Styles {
    pub url: String,
    pub version: String,
}

/// Builds the add-on declaration for a site served from `www_root`.
pub fn mobile_addon(www_root: &str) -> MobileAddon {
    let handler = AddonHandler {
        display_data: DisplayData {
            title: HANDLER_NAME.to_owned(),
            icon: "fas-medal".to_owned(),
            class: String::new(),
        },
        delegate: "CoreUserDelegate".to_owned(),
        method: VIEW_METHOD.to_owned(),
        init: INIT_METHOD.to_owned(),
        restrict_to_current_user: true,
        restrict_to_enrolled_courses: false,
        styles: Styles {
            url: format!("{}/{STYLES_PATH}", www_root.trim_end_matches('/')),
            version: STYLES_VERSION.to_owned(),
        },
    };

    MobileAddon {
        handlers: BTreeMap::from([(HANDLER_NAME.to_owned(), handler)]),
        lang: LANG_STRINGS
            .iter()
            .map(|(identifier, component)| (identifier.to_string(), component.to_string()))
            .collect(),
    }
}
