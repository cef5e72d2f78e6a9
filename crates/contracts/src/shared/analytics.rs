//! CTA click analytics payloads.
//!
//! A click on an element carrying `data-cta` is turned into one
//! [`AnalyticsEvent`]; the browser crate forwards it to `gtag('event', ...)`.

use serde::{Deserialize, Serialize};

use crate::enums::Product;

pub const GENERIC_CTA_EVENT: &str = "cta_click";
pub const UNKNOWN_LOCATION: &str = "unknown";
pub const SERVICES_SECTION: &str = "services_page";
pub const SERVICES_CTA_POSITION: &str = "services_card";

/// A CTA click as read from the DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaClick {
    pub label: String,
    pub location: Option<String>,
    pub page_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalyticsParams {
    ProductInterest {
        product_key: String,
        section: String,
        cta_position: String,
        page_path: String,
    },
    Cta {
        cta_label: String,
        cta_location: String,
        page_path: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub params: AnalyticsParams,
}

impl CtaClick {
    /// Product interest labels become an event named after the label,
    /// everything else is reported as a generic `cta_click`.
    pub fn to_event(&self) -> AnalyticsEvent {
        match Product::from_interest_label(&self.label) {
            Some(product) => AnalyticsEvent {
                name: self.label.clone(),
                params: AnalyticsParams::ProductInterest {
                    product_key: product.key().to_string(),
                    section: SERVICES_SECTION.to_string(),
                    cta_position: SERVICES_CTA_POSITION.to_string(),
                    page_path: self.page_path.clone(),
                },
            },
            None => AnalyticsEvent {
                name: GENERIC_CTA_EVENT.to_string(),
                params: AnalyticsParams::Cta {
                    cta_label: self.label.clone(),
                    cta_location: self
                        .location
                        .clone()
                        .filter(|l| !l.is_empty())
                        .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
                    page_path: self.page_path.clone(),
                },
            },
        }
    }
}
