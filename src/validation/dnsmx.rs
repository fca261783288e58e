use crate::errors::EmailValidatorError;
use crate::validation::EmailValidator;
use crate::validation::syntax::check_syntax;
use std::time::Duration;
use tracing::{debug, warn};
use trust_dns_resolver::{
    Resolver,
    config::{ResolverConfig, ResolverOpts},
    error::{ResolveError, ResolveErrorKind},
    proto::rr::RecordType,
};

/// Lookup attempts per query before the resolver gives up.
const RESOLVER_ATTEMPTS: usize = 2;

/// Email validator requiring the domain to accept mail.
///
/// The blocking resolver owns its own tokio runtime, so it is built per call
/// inside [`EmailValidator::is_valid`]. Call it from a blocking context
/// (`actix_web::web::block`), never from an async worker.
#[derive(Debug, Clone)]
pub struct DnsEmailValidator {
    config: ResolverConfig,
    opts: ResolverOpts,
}

impl DnsEmailValidator {
    /// # Arguments
    /// * `timeout` - Per-query timeout
    pub fn new(timeout: Duration) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        opts.attempts = RESOLVER_ATTEMPTS;

        Self {
            config: ResolverConfig::default(),
            opts,
        }
    }

    fn create_resolver(&self) -> Result<Resolver, EmailValidatorError> {
        Resolver::new(self.config.clone(), self.opts.clone())
            .map_err(EmailValidatorError::ResolverInit)
    }
}

/// MX records first, then A/AAAA as the RFC 5321 implicit MX.
///
/// # Returns
/// - `Ok(true)` if any record was found
/// - `Ok(false)` if the domain has none of them
/// - `Err` for resolver failures (timeouts, unreachable servers)
fn accepts_mail(resolver: &Resolver, domain: &str) -> Result<bool, ResolveError> {
    let has_mx = records_found(
        resolver
            .mx_lookup(domain)
            .map(|records| records.iter().next().is_some()),
    )?;
    if has_mx {
        return Ok(true);
    }

    for record_type in [RecordType::A, RecordType::AAAA] {
        let has_address = records_found(
            resolver
                .lookup(domain, record_type)
                .map(|lookup| lookup.iter().next().is_some()),
        )?;
        if has_address {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Folds "no records" answers into `Ok(false)`; other failures stay errors.
fn records_found(lookup: Result<bool, ResolveError>) -> Result<bool, ResolveError> {
    match lookup {
        Err(e) if matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. }) => Ok(false),
        other => other,
    }
}

impl EmailValidator for DnsEmailValidator {
    fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError> {
        if let Err(violation) = check_syntax(email) {
            debug!(%violation, "email rejected by syntax check");
            return Ok(false);
        }

        let Some((_, domain)) = email.rsplit_once('@') else {
            return Ok(false);
        };

        // Address literals name the host directly.
        if domain.starts_with('[') {
            return Ok(true);
        }

        let resolver = self.create_resolver()?;
        match accepts_mail(&resolver, domain) {
            Ok(true) => Ok(true),
            Ok(false) => {
                debug!(domain, "email domain has no MX, A or AAAA records");
                Ok(false)
            }
            Err(source) => {
                warn!(domain, error = %source, "DNS lookup failed");
                Err(EmailValidatorError::Lookup {
                    domain: domain.to_string(),
                    source,
                })
            }
        }
    }
}
