//! Category word tables for the combination generator

/// Business/domain theme categories, keyed by name.
///
/// Tables are deliberately flat `const` slices; the generator never mutates
/// them, it only unions the selected categories with any custom words.
pub const DATA_WORDS: &[&str] = &[
    "data", "analytics", "insight", "metrics", "stats", "info", "intelligence",
    "knowledge", "facts", "records", "database", "warehouse", "mart", "lake",
    "stream", "flow", "pipeline", "etl", "transform", "process", "analyze",
    "compute", "calculate", "measure", "track", "monitor", "observe", "report",
    "dashboard", "visual", "chart", "graph", "trend", "pattern", "model",
    "algorithm", "machine", "learning", "ai", "neural", "deep", "smart",
    "intelligent", "automated", "digital", "tech", "cloud", "big", "fast",
    "real", "time", "instant", "quick", "rapid", "speed", "agile", "lean",
    "efficient", "optimal", "max", "super", "ultra", "mega", "pro", "plus",
    "hub", "lab", "works", "studio", "forge", "craft", "build", "make",
    "create", "generate", "produce", "deliver", "serve", "provide", "offer",
    "solution", "platform", "system", "framework", "engine", "core", "base",
    "foundation", "structure", "architecture", "design", "plan", "strategy",
];

pub const TECH_WORDS: &[&str] = &[
    "tech", "technology", "digital", "software", "code", "dev", "developer",
    "programming", "app", "application", "web", "mobile", "cloud", "saas",
    "api", "system", "platform", "framework", "tool", "service", "solution",
    "innovation", "startup", "venture", "product", "build", "create", "develop",
];

pub const BUSINESS_WORDS: &[&str] = &[
    "business", "company", "corp", "enterprise", "venture", "startup",
    "solutions", "services", "consulting", "strategy", "growth", "success",
    "profit", "revenue", "sales", "market", "brand", "professional", "expert",
    "leader", "management", "executive", "global", "international", "premium",
];

pub const HEALTH_WORDS: &[&str] = &[
    "health", "medical", "healthcare", "wellness", "fitness", "care", "clinic",
    "hospital", "doctor", "patient", "treatment", "therapy", "medicine", "pharma",
    "biotech", "life", "living", "healthy", "vital", "strong", "active", "energy",
];

pub const FINANCE_WORDS: &[&str] = &[
    "finance", "financial", "money", "invest", "investment", "capital", "fund",
    "wealth", "rich", "profit", "revenue", "banking", "credit", "loan", "payment",
    "crypto", "blockchain", "trading", "market", "stock", "portfolio", "asset",
];

pub const EDUCATION_WORDS: &[&str] = &[
    "education", "learning", "school", "university", "college", "course",
    "training", "teach", "student", "knowledge", "skill", "academy", "institute",
    "study", "research", "science", "academic", "scholar", "expert", "master",
];

pub const CREATIVE_WORDS: &[&str] = &[
    "creative", "design", "art", "artist", "studio", "agency", "media",
    "content", "brand", "marketing", "advertising", "visual", "graphic",
    "digital", "web", "ui", "ux", "experience", "innovative", "original",
];

/// Connector words for three-word combinations.
///
/// Only the first three (including the empty connector) are actually used
/// by the generator to keep the three-word space bounded.
pub const CONNECTORS: &[&str] = &["", "and", "for", "the", "of", "in", "on", "at", "by", "with"];

/// Short suffixes attached to sampled base words.
pub const SUFFIXES: &[&str] = &["ly", "hub", "lab", "pro", "max", "ai", "io", "app", "sys", "net"];

/// Numbers attached to sampled base words when enabled.
pub const NUMBERS: &[u32] = &[1, 2, 3, 24, 7, 360, 100, 200, 500, 1000];

/// All category names, in display order.
pub const CATEGORY_NAMES: &[&str] = &[
    "data", "tech", "business", "health", "finance", "education", "creative",
];

/// Look up a category table by name.
pub fn category_words(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "data" => Some(DATA_WORDS),
        "tech" => Some(TECH_WORDS),
        "business" => Some(BUSINESS_WORDS),
        "health" => Some(HEALTH_WORDS),
        "finance" => Some(FINANCE_WORDS),
        "education" => Some(EDUCATION_WORDS),
        "creative" => Some(CREATIVE_WORDS),
        _ => None,
    }
}
