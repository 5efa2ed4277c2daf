use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose controller transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

pub fn get_relay_endpoint() -> &'static str {
    option_env!("EMAILJS_ENDPOINT").unwrap_or("https://api.emailjs.com/api/v1.0/email/send")
}

pub fn get_service_id() -> &'static str {
    option_env!("EMAILJS_SERVICE_ID").unwrap_or("serviceID")
}

pub fn get_template_id() -> &'static str {
    option_env!("EMAILJS_TEMPLATE_ID").unwrap_or("templateID")
}

pub fn get_public_key() -> &'static str {
    option_env!("EMAILJS_PUBLIC_KEY").unwrap_or("-publicKey")
}

/// Fraction of a section that must be on screen before it rises in.
pub const REVEAL_THRESHOLD: f64 = 0.25;

pub const AUTOPLAY_INTERVAL_MS: u32 = 4_000;

/// Delay between the thank-you message and the page reload.
pub const RELOAD_DELAY_MS: u32 = 2_500;

// matches the .mobile-menu.closing transition
pub const MENU_EXIT_ANIMATION_MS: u32 = 300;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_endpoint_is_the_same_for_every_build_profile() {
        let expected = option_env!("EMAILJS_ENDPOINT")
            .unwrap_or("https://api.emailjs.com/api/v1.0/email/send");
        assert_eq!(get_relay_endpoint(), expected);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn debug_builds_log_verbosely() {
        assert_eq!(get_log_level(), Level::Debug);
    }
}
