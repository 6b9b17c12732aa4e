/// Server-side verification endpoint for reCAPTCHA response tokens.
pub const SITEVERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";
