//! Fixed content tables the corpus is drawn from

use crate::record::Level;

/// Application services that emit regular records
pub const SERVICES: [&str; 10] = [
    "checkout-service",
    "payment-gateway",
    "auth-service",
    "user-service",
    "inventory-service",
    "cart-service",
    "notification-service",
    "api-gateway",
    "order-service",
    "shipping-service",
];

/// Kubernetes control-plane components
pub const K8S_SERVICES: [&str; 5] = [
    "kube-scheduler",
    "kube-controller-manager",
    "etcd",
    "coredns",
    "ingress-nginx",
];

/// DEBUG message templates
pub const DEBUG_TEMPLATES: [&str; 8] = [
    "Processing request id={requestId}",
    "Cache lookup for key={cacheKey}",
    "Executing query: SELECT * FROM {table} WHERE id={id}",
    "Serializing response payload size={size}",
    "Validating request parameters",
    "Loading configuration from environment",
    "Connection pool stats: active={active} idle={idle}",
    "Rate limiter check: bucket={bucket} remaining={remaining}",
];

/// INFO message templates
pub const INFO_TEMPLATES: [&str; 10] = [
    "Request completed status=200 duration={duration}ms",
    "User {userId} logged in successfully",
    "Order {orderId} created total={total}",
    "Payment processed amount={amount} currency=USD",
    "Cache hit rate={rate}%",
    "Health check passed",
    "Deployment {version} rolled out successfully",
    "Scheduled job {jobName} completed",
    "Session created for user={userId}",
    "Inventory updated product={productId} quantity={qty}",
];

/// WARN message templates
pub const WARN_TEMPLATES: [&str; 8] = [
    "High memory usage: {usage}% of limit",
    "Slow query detected duration={duration}ms query={query}",
    "Rate limit approaching threshold={threshold}",
    "Retry attempt {attempt}/3 for {operation}",
    "Connection pool running low available={available}",
    "Certificate expiring in {days} days",
    "Deprecated API endpoint accessed path={path}",
    "Queue depth exceeding threshold current={depth}",
];

/// ERROR message templates
pub const ERROR_TEMPLATES: [&str; 9] = [
    "Failed to process request error=\"{error}\"",
    "Database connection failed host={host} error=\"{error}\"",
    "Authentication failed for user={userId}",
    "Payment declined order={orderId} reason=\"{reason}\"",
    "Service unavailable endpoint={endpoint}",
    "Timeout waiting for response from {service}",
    "Invalid request payload: {error}",
    "Circuit breaker opened for {service}",
    "Out of memory: killed process {pid}",
];

/// Kubernetes event templates
pub const K8S_TEMPLATES: [&str; 10] = [
    "Pod {pod} scheduled on node {node}",
    "Container {container} started in pod {pod}",
    "Liveness probe failed for {pod}",
    "Readiness probe failed for {pod}",
    "OOMKilled: container {container} exceeded memory limit",
    "CrashLoopBackOff: {pod} restarting",
    "Pulling image {image}",
    "Successfully pulled image {image}",
    "Created container {container}",
    "Volume {volume} mounted to {pod}",
];

/// Severity weights (percent) for regular records
pub const LEVEL_WEIGHTS: [(Level, i64); 4] = [
    (Level::Debug, 40),
    (Level::Info, 35),
    (Level::Warn, 15),
    (Level::Error, 10),
];

/// Templates for a severity bucket
#[must_use]
pub const fn templates_for(level: Level) -> &'static [&'static str] {
    match level {
        Level::Debug => &DEBUG_TEMPLATES,
        Level::Info => &INFO_TEMPLATES,
        Level::Warn => &WARN_TEMPLATES,
        Level::Error => &ERROR_TEMPLATES,
    }
}

/// A near-miss entry placed around the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoy {
    /// Severity
    pub level: Level,
    /// Emitting service
    pub service: &'static str,
    /// Message template
    pub template: &'static str,
}

/// Entries drawn for positions around the answer
pub const DECOYS: [Decoy; 8] = [
    Decoy { level: Level::Debug, service: "checkout-service", template: "Processing checkout for order {orderId}" },
    Decoy { level: Level::Info, service: "payment-gateway", template: "Payment request received amount={amount}" },
    Decoy { level: Level::Warn, service: "cart-service", template: "Cart validation slow duration=1200ms" },
    Decoy { level: Level::Debug, service: "inventory-service", template: "Stock check completed items=5" },
    Decoy { level: Level::Info, service: "notification-service", template: "Email queued template=order_confirmation" },
    Decoy { level: Level::Debug, service: "api-gateway", template: "Routing request to checkout-service" },
    Decoy { level: Level::Info, service: "auth-service", template: "Token validated for {userId}" },
    Decoy { level: Level::Warn, service: "payment-gateway", template: "Connection pool at 80% capacity" },
];

/// Position of the answer record
pub const ANSWER_ID: usize = 847;

/// Positions (inclusive) filled from [`DECOYS`], except [`ANSWER_ID`]
pub const DECOY_WINDOW: std::ops::RangeInclusive<usize> = 840..=855;

/// Service of the answer record
pub const ANSWER_SERVICE: &str = "checkout-service";

/// Message of the answer record
pub const ANSWER_MESSAGE: &str = "upstream request failed upstream_timeout_ms=30000 \
     target=payment-gateway retry_count=3 correlation_id=req-7f8a2b";

/// Records with these ids are always reported as significant
pub const SIGNIFICANT_IDS: [usize; 3] = [847, 234, 567];
