//! Public contact details shown on the site and in the error banner.

pub struct ContactInfo {
    pub phone: &'static str,
    pub whatsapp: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub hours: &'static str,
    pub whatsapp_url: &'static str,
}

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    phone: "+254 741 047 776",
    whatsapp: "+254741047776",
    email: "festusmuruga@gmail.com",
    location: "Nairobi, Kenya",
    hours: "Mon-Sat, 8AM-8PM EAT",
    whatsapp_url: "https://wa.me/254741047776",
};

impl ContactInfo {
    /// `tel:` link with the display spacing stripped.
    pub fn tel_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dial_link_drops_spaces() {
        assert_eq!(CONTACT_INFO.tel_href(), "tel:+254741047776");
        assert_eq!(CONTACT_INFO.tel_href().trim_start_matches("tel:"), CONTACT_INFO.whatsapp);
    }
}
