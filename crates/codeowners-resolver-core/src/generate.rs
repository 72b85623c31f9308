//! Random ownership file generation for benchmarking and testing.
//!
//! Builds the AST directly, so the rendered text always parses back to the
//! same rules. Generated files use every construct the parser understands:
//! comments, `[section]` headers, patterns containing escaped spaces and
//! rules with several owners.
//!
//! Note: generated lines carry placeholder spans.

use crate::parse::{CodeownersFile, Line, Owner, Pattern, Span};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Configuration for generating ownership files.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of rule lines to generate.
    pub num_rules: usize,
    /// Number of comment lines to generate.
    pub num_comments: usize,
    /// Number of `[section]` headers to generate.
    pub num_sections: usize,
    /// Maximum owners per rule.
    pub max_owners_per_rule: usize,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_rules: 100,
            num_comments: 20,
            num_sections: 4,
            max_owners_per_rule: 3,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Creates a config with the given number of rules.
    ///
    /// Comments are set to ~20% of rules and sections to ~5%.
    pub fn new(num_rules: usize) -> Self {
        Self {
            num_rules,
            num_comments: num_rules / 5,
            num_sections: num_rules / 20,
            ..Default::default()
        }
    }

    /// Small fixture (~10 rules).
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Medium fixture (~100 rules).
    pub fn medium() -> Self {
        Self::new(100)
    }

    /// Large fixture (~1000 rules).
    pub fn large() -> Self {
        Self::new(1_000)
    }

    /// Extra large fixture (~10k rules).
    pub fn xlarge() -> Self {
        Self::new(10_000)
    }

    /// Generate a file targeting approximately the given byte size.
    pub fn target_bytes(bytes: usize) -> Self {
        // Average line is ~40 bytes
        Self::new(bytes.saturating_div(40).max(1))
    }

    /// Set the random seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of comments explicitly.
    pub fn with_comments(mut self, num_comments: usize) -> Self {
        self.num_comments = num_comments;
        self
    }

    /// Set the number of section headers explicitly.
    pub fn with_sections(mut self, num_sections: usize) -> Self {
        self.num_sections = num_sections;
        self
    }

    /// Set the maximum owners per rule.
    pub fn with_max_owners(mut self, max: usize) -> Self {
        self.max_owners_per_rule = max.max(1);
        self
    }
}

mod vocabulary {
    pub const PATTERN_TEMPLATES: &[&str] = &[
        "*",
        "*.{ext}",
        "**/*.{ext}",
        "{dir}/",
        "/{dir}/",
        "/{dir}/**",
        "{dir}/*",
        "{dir}/*.{ext}",
        "/{dir}/**/{sub}/",
        "**/{sub}/*.{ext}",
        "/{dir}/{sub}/",
        "{dir}/my {sub}/",
        "\\#{dir}/",
    ];

    pub const EXTENSIONS: &[&str] = &["rs", "py", "js", "ts", "go", "md", "tf", "yaml", "json"];
    pub const DIRECTORIES: &[&str] = &[
        "src", "lib", "tests", "docs", "config", "scripts", "api", "build", "apps",
    ];
    pub const SUBDIRECTORIES: &[&str] = &["logs", "internal", "fixtures", "assets", "modules"];
    pub const USERNAMES: &[&str] = &["alice", "bob", "charlie", "dev", "maintainer", "reviewer"];
    pub const ORGS: &[&str] = &["acme", "myorg"];
    pub const TEAMS: &[&str] = &["core", "platform", "frontend", "backend", "infra", "docs"];
    pub const SECTION_NAMES: &[&str] = &[
        "Frontend",
        "Backend",
        "Infrastructure",
        "Documentation",
        "Release Engineering",
    ];
}

/// Owner kind weights, out of 100; the remainder are emails.
const WEIGHT_USER: u32 = 50;
const WEIGHT_TEAM: u32 = 30;

/// Chance of a comment before each rule (percentage).
const COMMENT_PROBABILITY: u32 = 20;

fn placeholder_span() -> Span {
    Span::new(0, 0, 0, 0)
}

/// Picks a random element of a non-empty slice.
fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Generates a random ownership file AST based on configuration.
pub fn generate_ast(config: &GeneratorConfig) -> CodeownersFile {
    use vocabulary::*;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let capacity = config.num_rules + 2 * config.num_comments + 2 * config.num_sections + 2;
    let mut lines = Vec::with_capacity(capacity);

    lines.push(Line::comment(
        " Auto-generated CODEOWNERS for benchmarking",
        placeholder_span(),
    ));
    lines.push(Line::blank(placeholder_span()));

    // Headers are spread evenly between the rules.
    let section_every = if config.num_sections == 0 {
        usize::MAX
    } else {
        (config.num_rules / (config.num_sections + 1)).max(1)
    };

    let mut section = String::new();
    let mut sections_added = 0;
    let mut comments_added = 0;

    for rules_added in 0..config.num_rules {
        if sections_added < config.num_sections
            && rules_added > 0
            && rules_added % section_every == 0
        {
            section = format!("{} {}", pick(&mut rng, SECTION_NAMES), sections_added + 1);
            lines.push(Line::blank(placeholder_span()));
            lines.push(Line::section(section.clone(), placeholder_span()));
            sections_added += 1;
        }

        if comments_added < config.num_comments
            && rng.random_ratio(COMMENT_PROBABILITY, 100)
        {
            lines.push(Line::comment(
                format!(" owned by the {} team", pick(&mut rng, TEAMS)),
                placeholder_span(),
            ));
            comments_added += 1;
        }

        let pattern_text = pick(&mut rng, PATTERN_TEMPLATES)
            .replace("{ext}", pick(&mut rng, EXTENSIONS))
            .replace("{dir}", pick(&mut rng, DIRECTORIES))
            .replace("{sub}", pick(&mut rng, SUBDIRECTORIES));
        let pattern = Pattern::new(pattern_text, placeholder_span());

        let num_owners = rng.random_range(1..=config.max_owners_per_rule);
        let owners: Vec<Owner> = (0..num_owners).map(|_| generate_owner(&mut rng)).collect();

        lines.push(Line::rule(pattern, owners, section.clone(), placeholder_span()));
    }

    CodeownersFile::new(lines)
}

fn generate_owner(rng: &mut StdRng) -> Owner {
    use vocabulary::*;

    let roll = rng.random_range(0..100);
    let name = if roll < WEIGHT_USER {
        format!("@{}", pick(rng, USERNAMES))
    } else if roll < WEIGHT_USER + WEIGHT_TEAM {
        format!("@{}/{}", pick(rng, ORGS), pick(rng, TEAMS))
    } else {
        format!("{}@example.com", pick(rng, USERNAMES))
    };
    Owner::new(name, placeholder_span())
}

/// Generates an ownership file as a string.
pub fn generate(config: &GeneratorConfig) -> String {
    generate_ast(config).to_string()
}

/// Generates `count` repository paths for resolution benchmarks.
///
/// Paths are drawn from the same vocabulary as the patterns, so a realistic
/// share of them is owned by some rule.
pub fn generate_paths(count: usize, seed: u64) -> Vec<String> {
    use vocabulary::*;

    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let depth = rng.random_range(0..4);
            let mut path = String::new();
            for level in 0..depth {
                let segment = if level == 0 {
                    pick(&mut rng, DIRECTORIES)
                } else {
                    pick(&mut rng, SUBDIRECTORIES)
                };
                path.push_str(segment);
                path.push('/');
            }
            path.push_str(&format!("file{}.{}", i, pick(&mut rng, EXTENSIONS)));
            path
        })
        .collect()
}
