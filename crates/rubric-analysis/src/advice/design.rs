//! Phase 6: design pattern recommendations.

use std::sync::LazyLock;

use super::types::{DesignPattern, PatternCategory};

struct PatternEntry {
    name: &'static str,
    category: PatternCategory,
    applicability: &'static str,
    benefits: &'static [&'static str],
    considerations: &'static [&'static str],
    implementation_hints: &'static str,
}

const CATALOG: &[PatternEntry] = &[
    // Architectural
    PatternEntry {
        name: "Microservices",
        category: PatternCategory::Architectural,
        applicability: "For large, complex systems with independent scaling needs",
        benefits: &["Independent scaling", "Technology diversity", "Fault isolation"],
        considerations: &["Distributed system complexity", "Data consistency challenges"],
        implementation_hints: "Use service mesh, implement circuit breakers, establish API contracts",
    },
    PatternEntry {
        name: "Layered Architecture",
        category: PatternCategory::Architectural,
        applicability: "For traditional applications with clear separation of concerns",
        benefits: &[
            "Ease of organization",
            "Clear separation of concerns",
            "Team structure alignment",
        ],
        considerations: &["May become monolithic", "Vertical scaling limits"],
        implementation_hints: "Enforce layer boundaries, avoid layer skipping, document interfaces",
    },
    PatternEntry {
        name: "Event-Driven Architecture",
        category: PatternCategory::Architectural,
        applicability: "For systems requiring real-time responsiveness and loose coupling",
        benefits: &["Loose coupling", "Real-time processing", "Scalability"],
        considerations: &["Event ordering complexity", "Testing challenges"],
        implementation_hints: "Use event brokers, implement idempotency, define event schemas",
    },
    // Integration
    PatternEntry {
        name: "API Gateway",
        category: PatternCategory::Integration,
        applicability: "For managing external access to microservices",
        benefits: &[
            "Simplified client architecture",
            "Cross-cutting concerns centralization",
        ],
        considerations: &["Single point of failure", "Performance bottleneck potential"],
        implementation_hints: "Implement caching, rate limiting, and request routing",
    },
    PatternEntry {
        name: "Service Mesh",
        category: PatternCategory::Integration,
        applicability: "For managing service-to-service communication",
        benefits: &[
            "Observability",
            "Traffic management",
            "Security policies without code changes",
        ],
        considerations: &["Added complexity", "Performance overhead"],
        implementation_hints: "Use sidecar proxies, implement fine-grained policies",
    },
    // Resilience
    PatternEntry {
        name: "Circuit Breaker",
        category: PatternCategory::Resilience,
        applicability: "For preventing cascading failures",
        benefits: &["Fail fast", "Prevent resource exhaustion", "Self-healing"],
        considerations: &["State management", "Testing complexity"],
        implementation_hints: "Define thresholds, implement exponential backoff, monitor state changes",
    },
    PatternEntry {
        name: "Bulkhead",
        category: PatternCategory::Resilience,
        applicability: "For isolating critical resources",
        benefits: &["Fault isolation", "Resource protection"],
        considerations: &["Resource overhead", "Complexity"],
        implementation_hints: "Use thread pools or containers, monitor resource usage",
    },
    // Data
    PatternEntry {
        name: "Event Sourcing",
        category: PatternCategory::Data,
        applicability: "For systems requiring audit trails and temporal queries",
        benefits: &[
            "Complete audit trail",
            "Event replay capability",
            "Temporal queries",
        ],
        considerations: &["Eventual consistency", "Storage overhead"],
        implementation_hints: "Use append-only logs, implement snapshots, define projections",
    },
    PatternEntry {
        name: "CQRS",
        category: PatternCategory::Data,
        applicability: "For systems with different read/write patterns",
        benefits: &[
            "Scalability optimization",
            "Query flexibility",
            "Event sourcing alignment",
        ],
        considerations: &["Eventual consistency", "Complexity"],
        implementation_hints: "Separate read/write models, use event projections",
    },
];

static PATTERNS: LazyLock<Vec<DesignPattern>> = LazyLock::new(|| {
    CATALOG
        .iter()
        .map(|p| DesignPattern {
            name: p.name.to_string(),
            category: p.category,
            applicability: p.applicability.to_string(),
            benefits: p.benefits.iter().map(|s| s.to_string()).collect(),
            considerations: p.considerations.iter().map(|s| s.to_string()).collect(),
            implementation_hints: p.implementation_hints.to_string(),
        })
        .collect()
});

/// The pattern catalog, grouped architectural, integration, resilience,
/// data.
pub fn design_patterns() -> Vec<DesignPattern> {
    PATTERNS.clone()
}
