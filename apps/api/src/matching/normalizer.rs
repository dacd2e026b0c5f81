//! Skill Normalizer: decides whether two skill strings name the same skill.
//!
//! Three rules, tried in order:
//! 1. case-insensitive equality after trimming
//! 2. the synonym table (canonical name ↔ known variants)
//! 3. substring containment in either direction, only when both strings are
//!    longer than two characters

/// Canonical skill name → known variant spellings and abbreviations.
const SKILL_VARIANTS: &[(&str, &[&str])] = &[
    ("javascript", &["js", "node.js", "nodejs"]),
    ("typescript", &["ts"]),
    ("c++", &["cpp", "c plus plus"]),
    ("c#", &["csharp", "c sharp"]),
    ("python", &["py"]),
    ("unreal engine", &["ue4", "ue5", "unreal"]),
    ("unity", &["unity3d", "unity engine"]),
    ("photoshop", &["ps", "adobe photoshop"]),
    ("maya", &["autodesk maya"]),
    ("git", &["github", "version control"]),
];

const MIN_SUBSTRING_LEN: usize = 2;

/// Returns true when `a` and `b` denote the same skill.
pub fn skills_similar(a: &str, b: &str) -> bool {
    if same_named_skill(a, b) {
        return true;
    }

    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    a.chars().count() > MIN_SUBSTRING_LEN
        && b.chars().count() > MIN_SUBSTRING_LEN
        && (a.contains(b.as_str()) || b.contains(a.as_str()))
}

/// Case-insensitive equality or a synonym-table hit. No substring matching,
/// so table keys like `unity` never fire on "Community Management".
pub fn same_named_skill(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a == b {
        return true;
    }

    SKILL_VARIANTS.iter().any(|(canonical, variants)| {
        let a_variant = variants.contains(&a.as_str());
        let b_variant = variants.contains(&b.as_str());
        (a == *canonical && b_variant) || (b == *canonical && a_variant) || (a_variant && b_variant)
    })
}

/// True when any entry of `pool` is similar to `skill`.
pub fn contains_similar<S: AsRef<str>>(pool: &[S], skill: &str) -> bool {
    pool.iter().any(|p| skills_similar(p.as_ref(), skill))
}
