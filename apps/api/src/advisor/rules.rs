//! Response Matcher: ordered keyword rules, first match wins.
//!
//! Input is lower-cased once, then each rule's keywords are tested as plain
//! substrings in `RULES` order. When nothing matches, the default reply is
//! used, so every input gets exactly one reply.

use tracing::debug;

use crate::advisor::replies::{
    careers_reply, default_reply, resume_reply, skills_reply, CAREERS_PER_REPLY, SALARY_REPLY,
    SUGGESTED_CAREERS, TRENDS_REPLY,
};
use crate::models::profile::Profile;
use crate::random::RandomSource;

/// Everything a reply builder may read.
pub struct ReplyContext<'a> {
    pub profile: &'a Profile,
    pub rng: &'a dyn RandomSource,
}

pub type ReplyFn = fn(&ReplyContext<'_>) -> String;

/// One (predicate, handler) pair. The predicate is "any keyword occurs in
/// the lower-cased input".
pub struct Rule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub reply: ReplyFn,
}

impl Rule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Priority order is the slice order.
pub const RULES: &[Rule] = &[
    Rule {
        name: "skills",
        keywords: &["skill", "develop"],
        reply: reply_skills,
    },
    Rule {
        name: "careers",
        keywords: &["career", "job", "recommendation"],
        reply: reply_careers,
    },
    Rule {
        name: "salary",
        keywords: &["salary", "pay", "earn"],
        reply: reply_salary,
    },
    Rule {
        name: "trends",
        keywords: &["trend", "future", "market"],
        reply: reply_trends,
    },
    Rule {
        name: "resume",
        keywords: &["resume", "cv"],
        reply: reply_resume,
    },
];

pub static DEFAULT_RULE: Rule = Rule {
    name: "default",
    keywords: &[],
    reply: reply_default,
};

/// Returns the first rule whose predicate holds, or the default rule.
pub fn select_rule(text: &str) -> &'static Rule {
    let lowered = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .unwrap_or(&DEFAULT_RULE)
}

/// Selects a canned reply for `text`, interpolating profile labels.
/// Only the careers rule draws from `rng`.
pub fn respond(text: &str, ctx: &ReplyContext<'_>) -> String {
    let rule = select_rule(text);
    debug!("Advisor rule '{}' selected", rule.name);
    (rule.reply)(ctx)
}

fn reply_skills(ctx: &ReplyContext<'_>) -> String {
    skills_reply(&ctx.profile.interests)
}

fn reply_careers(ctx: &ReplyContext<'_>) -> String {
    let picked: Vec<&str> = ctx
        .rng
        .sample_indices(SUGGESTED_CAREERS.len(), CAREERS_PER_REPLY)
        .into_iter()
        .map(|i| SUGGESTED_CAREERS[i])
        .collect();
    careers_reply(&picked, &ctx.profile.skills)
}

fn reply_salary(_ctx: &ReplyContext<'_>) -> String {
    SALARY_REPLY.to_string()
}

fn reply_trends(_ctx: &ReplyContext<'_>) -> String {
    TRENDS_REPLY.to_string()
}

fn reply_resume(ctx: &ReplyContext<'_>) -> String {
    resume_reply(&ctx.profile.skills)
}

fn reply_default(ctx: &ReplyContext<'_>) -> String {
    default_reply(ctx.profile.assessment_completed)
}
