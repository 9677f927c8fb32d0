//! Shared string utilities for component naming.

/// Convert a string to PascalCase (e.g., "hero-section" -> "HeroSection")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', ' ', '.'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hero"), "Hero");
        assert_eq!(to_pascal_case("hero_section"), "HeroSection");
        assert_eq!(to_pascal_case("landing-page"), "LandingPage");
        assert_eq!(to_pascal_case("pricing card"), "PricingCard");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case(""), "");
    }
}
