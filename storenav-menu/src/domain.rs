use url::Url;

/// Hosting domain the storefront API reports menu URLs under.
pub const DEFAULT_OWNED_DOMAIN: &str = "myshopify.com";

/// Decides whether a menu URL belongs to this storefront.
pub trait DomainPolicy: Send + Sync {
    fn is_owned(&self, url: &Url) -> bool;
}

impl<F> DomainPolicy for F
where
    F: Fn(&Url) -> bool + Send + Sync,
{
    fn is_owned(&self, url: &Url) -> bool {
        self(url)
    }
}

/// Hostnames owned by the storefront. A host matches when it equals an
/// entry or is a subdomain of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedDomains {
    domains: Vec<String>,
}

impl Default for OwnedDomains {
    fn default() -> Self {
        Self::new([DEFAULT_OWNED_DOMAIN])
    }
}

impl OwnedDomains {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| normalize(d.as_ref()))
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn owns_host(&self, host: &str) -> bool {
        let host = normalize(host);
        self.domains.iter().any(|domain| {
            host == *domain
                || (host.len() > domain.len()
                    && host.ends_with(domain.as_str())
                    && host.as_bytes()[host.len() - domain.len() - 1] == b'.')
        })
    }
}

impl DomainPolicy for OwnedDomains {
    fn is_owned(&self, url: &Url) -> bool {
        url.host_str().is_some_and(|host| self.owns_host(host))
    }
}

fn normalize(domain: &str) -> String {
    domain.trim().trim_start_matches('.').trim_end_matches('.').to_lowercase()
}
