//! Farewell messages for lost languages

use rand::Rng;

const TEMPLATES: &[&str] = &[
    "Farewell, {}",
    "Adios, {}",
    "R.I.P., {}",
    "We'll miss you, {}",
    "Oh no, not {}!",
    "{} bites the dust",
    "Gone but not forgotten, {}",
    "The end of {} as we know it",
    "Off into the sunset, {}",
    "{}, it's been real",
    "{}, your watch has ended",
    "{} has left the building",
];

/// Number of distinct farewell templates
#[must_use]
pub const fn template_count() -> usize {
    TEMPLATES.len()
}

/// Render the farewell template at `index` (wrapping) for `language`
#[must_use]
pub fn farewell_at(index: usize, language: &str) -> String {
    TEMPLATES[index % TEMPLATES.len()].replace("{}", language)
}

/// Pick a random farewell message for `language`
pub fn farewell_text<R: Rng + ?Sized>(language: &str, rng: &mut R) -> String {
    farewell_at(rng.random_range(0..TEMPLATES.len()), language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn farewell_at_substitutes_name() {
        assert_eq!(farewell_at(0, "HTML"), "Farewell, HTML");
        assert_eq!(farewell_at(11, "CSS"), "CSS has left the building");
    }

    #[test]
    fn farewell_at_wraps() {
        assert_eq!(farewell_at(template_count(), "Ruby"), farewell_at(0, "Ruby"));
    }

    #[test]
    fn farewell_text_always_mentions_language() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let text = farewell_text("TypeScript", &mut rng);
            assert!(text.contains("TypeScript"), "missing name in '{text}'");
            assert!(!text.contains("{}"));
        }
    }
}
