//! Template fill engine
//!
//! Replaces `{placeholder}` tokens with values drawn from a [`SeededStream`].
//! Tokens are resolved left to right, and each one draws from the stream at
//! the moment it is resolved. Unknown tokens are copied through untouched and
//! draw nothing.

use crate::catalog::SERVICES;
use crate::rng::SeededStream;
use std::str::FromStr;

/// Known placeholder names
///
/// Variants are the camelCase token names, e.g. `{orderId}` is [`Placeholder::OrderId`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    RequestId,
    CacheKey,
    Table,
    Id,
    Size,
    Active,
    Idle,
    Bucket,
    Remaining,
    Duration,
    UserId,
    OrderId,
    Total,
    Amount,
    Rate,
    Version,
    JobName,
    ProductId,
    Qty,
    Usage,
    Query,
    Threshold,
    Attempt,
    Operation,
    Available,
    Days,
    Path,
    Depth,
    Error,
    Host,
    Reason,
    Endpoint,
    Service,
    Pod,
    Node,
    Container,
    Image,
    Volume,
    Pid,
}

impl FromStr for Placeholder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "requestId" => Self::RequestId,
            "cacheKey" => Self::CacheKey,
            "table" => Self::Table,
            "id" => Self::Id,
            "size" => Self::Size,
            "active" => Self::Active,
            "idle" => Self::Idle,
            "bucket" => Self::Bucket,
            "remaining" => Self::Remaining,
            "duration" => Self::Duration,
            "userId" => Self::UserId,
            "orderId" => Self::OrderId,
            "total" => Self::Total,
            "amount" => Self::Amount,
            "rate" => Self::Rate,
            "version" => Self::Version,
            "jobName" => Self::JobName,
            "productId" => Self::ProductId,
            "qty" => Self::Qty,
            "usage" => Self::Usage,
            "query" => Self::Query,
            "threshold" => Self::Threshold,
            "attempt" => Self::Attempt,
            "operation" => Self::Operation,
            "available" => Self::Available,
            "days" => Self::Days,
            "path" => Self::Path,
            "depth" => Self::Depth,
            "error" => Self::Error,
            "host" => Self::Host,
            "reason" => Self::Reason,
            "endpoint" => Self::Endpoint,
            "service" => Self::Service,
            "pod" => Self::Pod,
            "node" => Self::Node,
            "container" => Self::Container,
            "image" => Self::Image,
            "volume" => Self::Volume,
            "pid" => Self::Pid,
            _ => return Err(()),
        })
    }
}

impl Placeholder {
    /// Draw a concrete value for this placeholder
    pub fn resolve(self, stream: &mut SeededStream) -> String {
        match self {
            Self::RequestId => stream.next_identifier(),
            Self::CacheKey => format!("cache:{}", stream.next_identifier()),
            Self::Table => pick(stream, &["users", "orders", "products", "sessions"]),
            Self::Id | Self::Pid => stream.next_int(1000, 9999).to_string(),
            Self::Size => stream.next_int(100, 50_000).to_string(),
            Self::Active => stream.next_int(5, 20).to_string(),
            Self::Idle => stream.next_int(0, 10).to_string(),
            Self::Bucket => pick(stream, &["api", "auth", "checkout"]),
            Self::Remaining => stream.next_int(0, 100).to_string(),
            Self::Duration => stream.next_int(10, 3000).to_string(),
            Self::UserId => format!("user-{}", stream.next_int(100, 999)),
            Self::OrderId => format!("ORD-{}", stream.next_int(10_000, 99_999)),
            Self::Total | Self::Amount => stream.next_decimal(10.0, 500.0),
            Self::Rate => stream.next_int(70, 99).to_string(),
            Self::Version => {
                let major = stream.next_int(1, 3);
                let minor = stream.next_int(0, 9);
                let patch = stream.next_int(0, 99);
                format!("v{major}.{minor}.{patch}")
            }
            Self::JobName => pick(stream, &["cleanup", "sync", "report", "backup"]),
            Self::ProductId => format!("PROD-{}", stream.next_int(1000, 9999)),
            Self::Qty => stream.next_int(-10, 100).to_string(),
            Self::Usage => stream.next_int(70, 95).to_string(),
            Self::Query => "SELECT * FROM orders WHERE...".to_string(),
            Self::Threshold => stream.next_int(80, 95).to_string(),
            Self::Attempt => stream.next_int(1, 3).to_string(),
            Self::Operation => pick(stream, &["database", "cache", "external-api"]),
            Self::Available => stream.next_int(1, 5).to_string(),
            Self::Days => stream.next_int(7, 30).to_string(),
            Self::Path => pick(stream, &["/api/v1/users", "/api/v1/orders", "/api/v1/products"]),
            Self::Depth => stream.next_int(1000, 5000).to_string(),
            Self::Error => pick(
                stream,
                &["connection refused", "timeout", "invalid response", "permission denied"],
            ),
            Self::Host => pick(stream, &["db-primary", "db-replica", "redis-master"]),
            Self::Reason => pick(stream, &["insufficient funds", "card declined", "fraud detected"]),
            Self::Endpoint | Self::Service => {
                pick(stream, &["payment-gateway", "auth-service", "inventory-service"])
            }
            Self::Pod => {
                let service = *stream.pick(&SERVICES);
                let suffix = stream.next_identifier();
                format!("{service}-{}", &suffix[..5])
            }
            Self::Node => format!("node-{}", stream.next_int(1, 5)),
            Self::Container => pick(stream, &["app", "sidecar", "init"]),
            Self::Image => format!("gcr.io/project/{}:latest", stream.pick(&SERVICES)),
            Self::Volume => pick(stream, &["config", "secrets", "data"]),
        }
    }
}

fn pick(stream: &mut SeededStream, choices: &[&str]) -> String {
    (*stream.pick(choices)).to_string()
}

/// Fill every known placeholder in `template`
///
/// # Example
/// ```
/// use fatigue_corpus::{fill_template, SeededStream};
///
/// let mut stream = SeededStream::new(42);
/// let message = fill_template("Retry attempt {attempt}/3 for {unknown}", &mut stream);
/// assert!(message.starts_with("Retry attempt "));
/// assert!(message.ends_with("/3 for {unknown}"));
/// ```
pub fn fill_template(template: &str, stream: &mut SeededStream) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match name.parse::<Placeholder>() {
            Ok(placeholder) => out.push_str(&placeholder.resolve(stream)),
            Err(()) => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DEBUG_TEMPLATES, ERROR_TEMPLATES, INFO_TEMPLATES, K8S_TEMPLATES, WARN_TEMPLATES};

    #[test]
    fn template_without_tokens_is_unchanged_and_draws_nothing() {
        let mut stream = SeededStream::new(9);
        let before = stream.clone();
        assert_eq!(fill_template("Health check passed", &mut stream), "Health check passed");
        assert_eq!(stream, before);
    }

    #[test]
    fn unknown_token_is_literal_and_draws_nothing() {
        let mut stream = SeededStream::new(9);
        let before = stream.clone();
        assert_eq!(fill_template("value={mystery}", &mut stream), "value={mystery}");
        assert_eq!(stream, before);
    }

    #[test]
    fn unterminated_brace_is_literal() {
        let mut stream = SeededStream::new(9);
        assert_eq!(fill_template("broken {userId", &mut stream), "broken {userId");
    }

    #[test]
    fn user_id_shape() {
        let mut stream = SeededStream::new(3);
        let msg = fill_template("User {userId} logged in successfully", &mut stream);
        let id = msg
            .strip_prefix("User user-")
            .and_then(|s| s.strip_suffix(" logged in successfully"))
            .unwrap();
        let n: u32 = id.parse().unwrap();
        assert!((100..=999).contains(&n));
    }

    #[test]
    fn pod_has_service_prefix_and_short_suffix() {
        let mut stream = SeededStream::new(11);
        let pod = Placeholder::Pod.resolve(&mut stream);
        let (service, suffix) = pod.rsplit_once('-').unwrap();
        assert!(SERVICES.contains(&service));
        assert_eq!(suffix.len(), 5);
    }

    #[test]
    fn tokens_resolve_in_appearance_order() {
        let mut a = SeededStream::new(5);
        let filled = fill_template("{attempt}:{available}", &mut a);

        let mut b = SeededStream::new(5);
        let attempt = Placeholder::Attempt.resolve(&mut b);
        let available = Placeholder::Available.resolve(&mut b);
        assert_eq!(filled, format!("{attempt}:{available}"));
    }

    #[test]
    fn every_catalog_template_fills_completely() {
        let mut stream = SeededStream::default();
        let pools: [&[&str]; 5] = [
            &DEBUG_TEMPLATES,
            &INFO_TEMPLATES,
            &WARN_TEMPLATES,
            &ERROR_TEMPLATES,
            &K8S_TEMPLATES,
        ];
        for template in pools.iter().flat_map(|p| p.iter()) {
            let filled = fill_template(template, &mut stream);
            assert!(!filled.contains('{'), "unresolved token in {filled:?}");
        }
    }
}
