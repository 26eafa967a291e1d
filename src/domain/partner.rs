use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BUSINESS_TYPES: [(&str, &str); 5] = [
    ("E-commerce", "E-commerce Platform"),
    ("Retail", "Retailer"),
    ("Wholesaler", "Wholesaler / Distributor"),
    ("Manufacturer", "Manufacturer"),
    ("Other", "Other"),
];

/// Partnership inquiry submitted from the e-commerce partner page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerInquiry {
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub business_type: String,
    pub monthly_orders: String,
    pub average_parcel_weight: String,
    pub special_requirements: String,
    pub integration_needs: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InquiryError {
    #[error("{0} is required.")]
    Missing(&'static str),
    #[error("Enter a valid email address.")]
    InvalidEmail,
}

impl PartnerInquiry {
    pub fn validate(&self) -> Result<(), InquiryError> {
        let required = [
            ("Company name", &self.company_name),
            ("Contact person", &self.contact_person),
            ("Email", &self.email),
            ("Phone number", &self.phone),
            ("Business type", &self.business_type),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(InquiryError::Missing(*field));
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(InquiryError::InvalidEmail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PartnerInquiry {
        PartnerInquiry {
            company_name: "Duka Online".into(),
            contact_person: "Wanjiru".into(),
            email: "ops@duka.co.ke".into(),
            phone: "0711000000".into(),
            business_type: "E-commerce".into(),
            ..PartnerInquiry::default()
        }
    }

    #[test]
    fn complete_inquiry_passes() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn first_missing_field_is_reported() {
        let inquiry = PartnerInquiry {
            contact_person: " ".into(),
            phone: String::new(),
            ..filled()
        };
        assert_eq!(inquiry.validate(), Err(InquiryError::Missing("Contact person")));
    }

    #[test]
    fn email_needs_both_halves() {
        for email in ["duka.co.ke", "@duka.co.ke", "ops@"] {
            let inquiry = PartnerInquiry {
                email: email.into(),
                ..filled()
            };
            assert_eq!(inquiry.validate(), Err(InquiryError::InvalidEmail));
        }
    }
}
