//! Search text parsing
//!
//! Terms separated by whitespace must all match; `|` separates alternative
//! groups. A leading `-` negates a term, `@` searches mod ids and `^`
//! searches color names.

use super::element::IngredientListElement;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Term {
    Name(String),
    Mod(String),
    Color(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    term: Term,
    negated: bool,
}

impl Token {
    fn parse(word: &str) -> Option<Self> {
        let word = word.to_lowercase();
        let (negated, rest) = match word.strip_prefix('-') {
            Some(rest) if !rest.is_empty() => (true, rest),
            _ => (false, word.as_str()),
        };

        let term = if let Some(mod_id) = rest.strip_prefix('@') {
            Term::Mod(mod_id.to_string())
        } else if let Some(color) = rest.strip_prefix('^') {
            Term::Color(color.to_string())
        } else {
            Term::Name(rest.to_string())
        };

        let empty = match &term {
            Term::Mod(s) | Term::Color(s) | Term::Name(s) => s.is_empty(),
        };
        (!empty).then_some(Self { term, negated })
    }

    fn matches(&self, element: &IngredientListElement, color_search: bool) -> bool {
        let found = match &self.term {
            Term::Name(name) => element.search_name().contains(name.as_str()),
            Term::Mod(mod_id) => element.mod_id().to_lowercase().contains(mod_id.as_str()),
            // Ignored unless color search is on
            Term::Color(_) if !color_search => return true,
            Term::Color(color) => element
                .color_names()
                .iter()
                .any(|c| c.contains(color.as_str())),
        };
        found != self.negated
    }
}

/// Parsed search text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    groups: Vec<Vec<Token>>,
}

impl Query {
    pub fn parse(text: &str) -> Self {
        let groups = text
            .split('|')
            .map(|group| group.split_whitespace().filter_map(Token::parse).collect::<Vec<_>>())
            .filter(|group| !group.is_empty())
            .collect();
        Self { groups }
    }

    /// True when the text had no usable terms
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn matches(&self, element: &IngredientListElement, color_search: bool) -> bool {
        self.is_empty()
            || self
                .groups
                .iter()
                .any(|group| group.iter().all(|t| t.matches(element, color_search)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredients::IngredientHelper;

    #[derive(Debug, Clone)]
    struct Block {
        name: &'static str,
        mod_id: &'static str,
        colors: Vec<&'static str>,
    }

    struct BlockHelper;

    impl IngredientHelper<Block> for BlockHelper {
        fn display_name(&self, ingredient: &Block) -> String {
            ingredient.name.to_string()
        }

        fn unique_id(&self, ingredient: &Block) -> String {
            format!("{}:{}", ingredient.mod_id, ingredient.name)
        }

        fn mod_id(&self, ingredient: &Block) -> String {
            ingredient.mod_id.to_string()
        }

        fn color_names(&self, ingredient: &Block) -> Vec<String> {
            ingredient.colors.iter().map(|c| c.to_string()).collect()
        }
    }

    fn element(name: &'static str, mod_id: &'static str, colors: &[&'static str]) -> IngredientListElement {
        let block = Block {
            name,
            mod_id,
            colors: colors.to_vec(),
        };
        IngredientListElement::new(0, &block, &BlockHelper)
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = Query::parse("   |  ");
        assert!(query.is_empty());
        assert!(query.matches(&element("Stone", "base", &[]), false));
    }

    #[test]
    fn test_terms_are_anded_and_case_insensitive() {
        let query = Query::parse("RED wool");
        assert!(query.matches(&element("Red Wool", "base", &[]), false));
        assert!(!query.matches(&element("Red Sand", "base", &[]), false));
    }

    #[test]
    fn test_groups_are_ored() {
        let query = Query::parse("sand | gravel");
        assert!(query.matches(&element("Sand", "base", &[]), false));
        assert!(query.matches(&element("Gravel", "base", &[]), false));
        assert!(!query.matches(&element("Dirt", "base", &[]), false));
    }

    #[test]
    fn test_mod_and_negated_terms() {
        let query = Query::parse("@Tech -ingot");
        assert!(query.matches(&element("Copper Wire", "TechMod", &[]), false));
        assert!(!query.matches(&element("Copper Ingot", "TechMod", &[]), false));
        assert!(!query.matches(&element("Copper Wire", "base", &[]), false));
    }

    #[test]
    fn test_color_terms_need_color_search() {
        let query = Query::parse("^blue");
        let lapis = element("Lapis Block", "base", &["Blue", "Dark Blue"]);
        let stone = element("Stone", "base", &["Gray"]);

        assert!(query.matches(&lapis, true));
        assert!(!query.matches(&stone, true));
        assert!(query.matches(&stone, false));
    }

    #[test]
    fn test_bare_prefixes_are_ignored() {
        let query = Query::parse("@ ^ wool");
        assert!(query.matches(&element("White Wool", "base", &[]), false));
        assert!(!query.matches(&element("Stone", "base", &[]), false));

        // A lone dash is a literal search term
        let query = Query::parse("-");
        assert!(query.matches(&element("Half-Slab", "base", &[]), false));
    }
}
