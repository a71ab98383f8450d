//! ABAC token expressions.
//!
//! Expressions are drawn from a small fixed grammar of templates. Each `T`
//! slot in a template is filled with a token chosen uniformly (repeats are
//! allowed). The expressions are only stored and displayed, never evaluated.

use rand::Rng;

use crate::vocab::TOKENS;

/// Slot marker inside templates.
const SLOT: char = 'T';

const SIMPLE_TEMPLATES: [&str; 3] = ["T", "T&T", "T|T"];

const MEDIUM_TEMPLATES: [&str; 5] = ["T&T&T", "T|T|T", "(T|T)&T", "T&(T|T)", "(T&T)|T"];

const COMPLEX_TEMPLATES: [&str; 5] = [
    "(T&T)&(T|T|T)",
    "T&(T|T)&(T|T)",
    "(T&T&T)|(T&T)",
    "(T|T)&(T|T)&T",
    "T&T&(T|T|T|T)",
];

/// Probability that a medium expression is the favored `AAA&BBB&CCC`.
pub const FAVORED_PROBABILITY: f64 = 0.3;

/// `AAA&BBB&CCC`.
pub fn favored_expression() -> String {
    TOKENS[..3].join("&")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenComplexity {
    Simple,
    Medium,
    Complex,
}

impl TokenComplexity {
    pub const ALL: [TokenComplexity; 3] = [
        TokenComplexity::Simple,
        TokenComplexity::Medium,
        TokenComplexity::Complex,
    ];

    /// Percent weight of each tier.
    pub fn weight(self) -> u32 {
        match self {
            TokenComplexity::Simple => 40,
            TokenComplexity::Medium => 35,
            TokenComplexity::Complex => 25,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TokenComplexity::Simple => "Simple",
            TokenComplexity::Medium => "Medium",
            TokenComplexity::Complex => "Complex",
        }
    }

    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let total: u32 = Self::ALL.iter().map(|t| t.weight()).sum();
        let mut roll = rng.gen_range(0..total);
        for tier in Self::ALL {
            if roll < tier.weight() {
                return tier;
            }
            roll -= tier.weight();
        }
        TokenComplexity::Complex
    }
}

/// Draw a tier, then an expression from that tier.
pub fn generate_expression<R: Rng + ?Sized>(rng: &mut R) -> String {
    let tier = TokenComplexity::sample(rng);
    generate_for_tier(rng, tier)
}

pub fn generate_for_tier<R: Rng + ?Sized>(rng: &mut R, tier: TokenComplexity) -> String {
    let templates: &[&str] = match tier {
        TokenComplexity::Simple => &SIMPLE_TEMPLATES,
        TokenComplexity::Medium => {
            if rng.gen_bool(FAVORED_PROBABILITY) {
                return favored_expression();
            }
            &MEDIUM_TEMPLATES
        }
        TokenComplexity::Complex => &COMPLEX_TEMPLATES,
    };
    let template = templates[rng.gen_range(0..templates.len())];
    fill_template(rng, template)
}

fn fill_template<R: Rng + ?Sized>(rng: &mut R, template: &str) -> String {
    let mut out = String::with_capacity(template.len() * 3);
    for c in template.chars() {
        if c == SLOT {
            out.push_str(TOKENS[rng.gen_range(0..TOKENS.len())]);
        } else {
            out.push(c);
        }
    }
    out
}

/// Operator/paren heuristic used for summary reporting.
///
/// This is deliberately coarse: a few medium templates classify as complex
/// and vice versa.
pub fn classify(expr: &str) -> TokenComplexity {
    let operators = expr.chars().filter(|c| matches!(c, '&' | '|')).count();
    let parens = expr.chars().filter(|c| *c == '(').count();
    if operators <= 1 && parens == 0 {
        TokenComplexity::Simple
    } else if operators <= 3 && parens <= 2 {
        TokenComplexity::Medium
    } else {
        TokenComplexity::Complex
    }
}

/// True when `expr` is a sequence of known tokens, `&`, `|`, and balanced parens.
pub fn is_well_formed(expr: &str) -> bool {
    let mut depth = 0i32;
    let mut rest = expr;
    while let Some(c) = rest.chars().next() {
        match c {
            '&' | '|' => rest = &rest[1..],
            '(' => {
                depth += 1;
                rest = &rest[1..];
            }
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
                rest = &rest[1..];
            }
            _ => match TOKENS.iter().find(|t| rest.starts_with(**t)) {
                Some(token) => rest = &rest[token.len()..],
                None => return false,
            },
        }
    }
    depth == 0 && !expr.is_empty()
}
