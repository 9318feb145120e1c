use unicode_normalization::UnicodeNormalization;

/// Webmail domains whose local parts ignore `+tag` suffixes and dots
pub const ALIASING_DOMAINS: &[&str] = &["gmail.com", "googlemail.com"];

/// Provider alias collapsing switches. Only applied to [`ALIASING_DOMAINS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalOptions {
    pub collapse_plus: bool,
    pub collapse_dots: bool,
}

impl Default for CanonicalOptions {
    fn default() -> Self {
        Self {
            collapse_plus: true,
            collapse_dots: false,
        }
    }
}

impl From<&shared_types::ScrubOptions> for CanonicalOptions {
    fn from(options: &shared_types::ScrubOptions) -> Self {
        Self {
            collapse_plus: options.collapse_plus,
            collapse_dots: options.collapse_dots,
        }
    }
}

/// Map a raw address to the form used for equality comparison.
///
/// NFKC-normalizes, trims and lowercases, then punycode-encodes the domain.
/// A domain that fails IDNA encoding is kept as is. Input without `@` is
/// returned normalized but otherwise untouched.
pub fn canonicalize(raw: &str, options: CanonicalOptions) -> String {
    let normalized: String = raw.nfkc().collect();
    let email = normalized.trim().to_lowercase();

    let Some((local, domain)) = email.split_once('@') else {
        return email;
    };

    let domain = idna::domain_to_ascii(domain).unwrap_or_else(|_| domain.to_string());

    let local = if ALIASING_DOMAINS.contains(&domain.as_str()) {
        collapse_aliases(local, options)
    } else {
        local.to_string()
    };

    format!("{}@{}", local, domain)
}

fn collapse_aliases(local: &str, options: CanonicalOptions) -> String {
    let local = match local.split_once('+') {
        Some((base, _)) if options.collapse_plus => base,
        _ => local,
    };

    if options.collapse_dots {
        local.replace('.', "")
    } else {
        local.to_string()
    }
}
