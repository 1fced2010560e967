//! Affinity scoring
//!
//! Deterministic, rule-based compatibility scoring between two profiles and
//! between a profile and an event. Every rule is a pure function of the two
//! profiles; the pair score is the fold of the rule registry with addition,
//! so each weight in the table below can be exercised in isolation.

use std::collections::HashSet;

use crate::models::event::EventWithHost;
use crate::models::user::UserProfile;

const SHARED_INTEREST_WEIGHT: f64 = 5.0;
const HOMETOWN_WEIGHT: f64 = 7.0;
const STATE_WEIGHT: f64 = 4.0;
const COLLEGE_WEIGHT: f64 = 8.0;
const HIGH_SCHOOL_WEIGHT: f64 = 6.0;
const LEGACY_SCHOOL_WEIGHT: f64 = 6.0;
const CLOSE_AGE_WEIGHT: f64 = 3.0;
const NEAR_AGE_WEIGHT: f64 = 2.0;
const ASPIRATION_WORD_WEIGHT: f64 = 2.0;
const BACKGROUND_WORD_WEIGHT: f64 = 1.5;
const COMPLEMENTARY_KEYWORD_WEIGHT: f64 = 1.0;

const EVENT_NAME_MATCH_WEIGHT: f64 = 3.0;
const EVENT_DESCRIPTION_MATCH_WEIGHT: f64 = 2.0;
const ATTENDEE_SHARED_INTEREST_WEIGHT: f64 = 0.5;
const ATTENDEE_HOMETOWN_WEIGHT: f64 = 1.0;
const ATTENDEE_STATE_WEIGHT: f64 = 0.5;
const ATTENDEE_COLLEGE_WEIGHT: f64 = 1.5;
const ATTENDEE_HIGH_SCHOOL_WEIGHT: f64 = 1.0;

/// Words shorter than this never count toward free-text overlap
const MIN_OVERLAP_WORD_LEN: usize = 5;

/// Career keywords checked across one profile's aspirations and the other's
/// background
const COMPLEMENTARY_KEYWORDS: [&str; 10] = [
    "design",
    "tech",
    "startup",
    "business",
    "engineering",
    "product",
    "marketing",
    "data",
    "finance",
    "consulting",
];

pub type PairRule = fn(&UserProfile, &UserProfile) -> f64;

/// Scoring rule registry. [`score_pair`] sums every entry.
pub const PAIR_RULES: [(&str, PairRule); 9] = [
    ("shared_interests", shared_interests),
    ("location", location),
    ("college", college),
    ("high_school", high_school),
    ("legacy_school", legacy_school),
    ("age_proximity", age_proximity),
    ("aspiration_overlap", aspiration_overlap),
    ("background_overlap", background_overlap),
    ("complementary_fields", complementary_fields),
];

/// Affinity between two profiles; non-negative, higher means more compatible.
///
/// Not fully symmetric: the complementary-fields rule reads `a`'s aspirations
/// against `b`'s background only, so callers pass the viewing user as `a`.
pub fn score_pair(a: &UserProfile, b: &UserProfile) -> f64 {
    PAIR_RULES.iter().map(|(_, rule)| rule(a, b)).sum()
}

/// Event affinity for a user: interest mentions in the event name and
/// description, plus per-attendee interest, location and education bonuses
/// summed over everyone currently attending.
pub fn score_event_for_user(user: &UserProfile, event: &EventWithHost, attendees: &[UserProfile]) -> f64 {
    let mut score = 0.0;

    if let Some(interests) = &user.interests {
        let name = event.event.name.to_lowercase();
        let description = event.event.description.as_deref().map(str::to_lowercase);

        for interest in interests {
            let interest = interest.to_lowercase();
            if name.contains(&interest) {
                score += EVENT_NAME_MATCH_WEIGHT;
            }
            if let Some(description) = &description {
                if description.contains(&interest) {
                    score += EVENT_DESCRIPTION_MATCH_WEIGHT;
                }
            }
        }
    }

    for attendee in attendees {
        score += shared_interest_count(user, attendee) as f64 * ATTENDEE_SHARED_INTEREST_WEIGHT;

        if text_eq_ignore_case(&user.hometown, &attendee.hometown) {
            score += ATTENDEE_HOMETOWN_WEIGHT;
        } else if text_eq_ignore_case(&user.state, &attendee.state) {
            score += ATTENDEE_STATE_WEIGHT;
        }

        if text_eq_ignore_case(&user.college, &attendee.college) {
            score += ATTENDEE_COLLEGE_WEIGHT;
        }
        if text_eq_ignore_case(&user.high_school, &attendee.high_school) {
            score += ATTENDEE_HIGH_SCHOOL_WEIGHT;
        }
    }

    score
}

fn shared_interests(a: &UserProfile, b: &UserProfile) -> f64 {
    shared_interest_count(a, b) as f64 * SHARED_INTEREST_WEIGHT
}

// Hometown and state are alternatives: a hometown match suppresses the
// weaker state bonus.
fn location(a: &UserProfile, b: &UserProfile) -> f64 {
    if text_eq_ignore_case(&a.hometown, &b.hometown) {
        HOMETOWN_WEIGHT
    } else if text_eq_ignore_case(&a.state, &b.state) {
        STATE_WEIGHT
    } else {
        0.0
    }
}

fn college(a: &UserProfile, b: &UserProfile) -> f64 {
    if text_eq_ignore_case(&a.college, &b.college) {
        COLLEGE_WEIGHT
    } else {
        0.0
    }
}

fn high_school(a: &UserProfile, b: &UserProfile) -> f64 {
    if text_eq_ignore_case(&a.high_school, &b.high_school) {
        HIGH_SCHOOL_WEIGHT
    } else {
        0.0
    }
}

// The legacy school field predates the college/high-school split and matches
// exactly, case preserved.
fn legacy_school(a: &UserProfile, b: &UserProfile) -> f64 {
    match (nonempty(&a.school), nonempty(&b.school)) {
        (Some(ours), Some(theirs)) if ours == theirs => LEGACY_SCHOOL_WEIGHT,
        _ => 0.0,
    }
}

fn age_proximity(a: &UserProfile, b: &UserProfile) -> f64 {
    let diff = (a.age - b.age).abs();
    if diff <= 2 {
        CLOSE_AGE_WEIGHT
    } else if diff <= 5 {
        NEAR_AGE_WEIGHT
    } else {
        0.0
    }
}

fn aspiration_overlap(a: &UserProfile, b: &UserProfile) -> f64 {
    word_overlap(a.aspirations.as_deref(), b.aspirations.as_deref()) as f64 * ASPIRATION_WORD_WEIGHT
}

fn background_overlap(a: &UserProfile, b: &UserProfile) -> f64 {
    word_overlap(a.background.as_deref(), b.background.as_deref()) as f64 * BACKGROUND_WORD_WEIGHT
}

// One-directional: a's aspirations against b's background.
fn complementary_fields(a: &UserProfile, b: &UserProfile) -> f64 {
    let (Some(aspirations), Some(background)) = (nonempty(&a.aspirations), nonempty(&b.background)) else {
        return 0.0;
    };
    let aspirations = aspirations.to_lowercase();
    let background = background.to_lowercase();

    let matches = COMPLEMENTARY_KEYWORDS
        .iter()
        .filter(|keyword| aspirations.contains(*keyword) && background.contains(*keyword))
        .count();

    matches as f64 * COMPLEMENTARY_KEYWORD_WEIGHT
}

/// Interest strings present in both profiles, exact case-sensitive match.
/// Counts occurrences on `a`'s side, so duplicate tags count more than once.
fn shared_interest_count(a: &UserProfile, b: &UserProfile) -> usize {
    match (&a.interests, &b.interests) {
        (Some(ours), Some(theirs)) => {
            let theirs: HashSet<&str> = theirs.iter().map(String::as_str).collect();
            ours.iter().filter(|i| theirs.contains(i.as_str())).count()
        }
        _ => 0,
    }
}

fn nonempty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn text_eq_ignore_case(a: &Option<String>, b: &Option<String>) -> bool {
    match (nonempty(a), nonempty(b)) {
        (Some(a), Some(b)) => a.to_lowercase() == b.to_lowercase(),
        _ => false,
    }
}

/// Shared words of at least [`MIN_OVERLAP_WORD_LEN`] characters, whitespace
/// tokenized and lowercased. Counts occurrences on the left side.
fn word_overlap(a: Option<&str>, b: Option<&str>) -> usize {
    let (Some(a), Some(b)) = (a, b) else {
        return 0;
    };
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let theirs: HashSet<String> = b.to_lowercase().split_whitespace().map(str::to_owned).collect();
    a.to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_OVERLAP_WORD_LEN && theirs.contains(*word))
        .count()
}
