//! Simple selector parsing and matching using cssparser
//!
//! Supports selector lists of compound selectors built from a type selector
//! (or `*`), `#id` and `.class`. Combinators are not supported; such a
//! selector parses to `None` and therefore matches nothing.

use super::node::ElementData;
use cssparser::{Parser, ParserInput, Token};

/// A compound selector
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selector {
    pub tag_name: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Selector {
    /// Check whether an element matches
    pub fn matches(&self, element: &ElementData) -> bool {
        if let Some(ref tag) = self.tag_name {
            if !tag.eq_ignore_ascii_case(&element.tag_name) {
                return false;
            }
        }

        if let Some(ref id) = self.id {
            if element.id() != Some(id.as_str()) {
                return false;
            }
        }

        let element_classes = element.classes();
        self.classes
            .iter()
            .all(|class| element_classes.contains(&class.as_str()))
    }

    fn is_empty(&self) -> bool {
        self.tag_name.is_none() && self.id.is_none() && self.classes.is_empty()
    }
}

/// A comma-separated list of selectors
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorList(pub Vec<Selector>);

impl SelectorList {
    /// Parse selector text; `None` when it is empty or uses unsupported syntax
    pub fn parse(text: &str) -> Option<Self> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);

        let mut selectors = Vec::new();
        let mut current = Selector::default();
        let mut universal = false;
        let mut after_whitespace = false;

        loop {
            let token = match parser.next_including_whitespace() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };
            match token {
                Token::WhiteSpace(_) => {
                    after_whitespace = true;
                    continue;
                }
                Token::Comma => {
                    if current.is_empty() && !universal {
                        return None;
                    }
                    selectors.push(std::mem::take(&mut current));
                    universal = false;
                    after_whitespace = false;
                    continue;
                }
                _ => {}
            }

            // whitespace between two parts of a selector is a descendant combinator
            if after_whitespace && (universal || !current.is_empty()) {
                return None;
            }
            after_whitespace = false;

            match token {
                Token::Ident(name) if current.is_empty() && !universal => {
                    current.tag_name = Some(name.to_ascii_lowercase());
                }
                Token::Delim('*') if current.is_empty() && !universal => {
                    universal = true;
                }
                Token::IDHash(id) if current.id.is_none() => {
                    current.id = Some(id.to_string());
                }
                Token::Delim('.') => match parser.next_including_whitespace() {
                    Ok(Token::Ident(class)) => current.classes.push(class.to_string()),
                    _ => return None,
                },
                _ => return None,
            }
        }

        if current.is_empty() && !universal {
            return None;
        }
        selectors.push(current);
        Some(Self(selectors))
    }

    /// Check whether any selector in the list matches
    pub fn matches(&self, element: &ElementData) -> bool {
        self.0.iter().any(|selector| selector.matches(element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(tag: &str, id: &str, class: &str) -> ElementData {
        let mut data = ElementData::new(tag);
        data.set_attribute("id", id);
        data.set_attribute("class", class);
        data
    }

    #[test]
    fn test_parse_compound() {
        let list = SelectorList::parse("div#box.card.wide").unwrap();
        assert_eq!(
            list.0,
            vec![Selector {
                tag_name: Some("div".to_string()),
                id: Some("box".to_string()),
                classes: vec!["card".to_string(), "wide".to_string()],
            }]
        );
    }

    #[test]
    fn test_match_id_and_class() {
        let el = element("div", "box", "card wide");
        assert!(SelectorList::parse("#box").unwrap().matches(&el));
        assert!(SelectorList::parse(".card").unwrap().matches(&el));
        assert!(SelectorList::parse("DIV.wide").unwrap().matches(&el));
        assert!(!SelectorList::parse("span").unwrap().matches(&el));
        assert!(!SelectorList::parse(".narrow").unwrap().matches(&el));
    }

    #[test]
    fn test_selector_list_and_universal() {
        let el = element("p", "", "");
        assert!(SelectorList::parse("span, p").unwrap().matches(&el));
        assert!(SelectorList::parse("*").unwrap().matches(&el));
        assert!(SelectorList::parse(" p ").unwrap().matches(&el));
    }

    #[test]
    fn test_unsupported_syntax() {
        assert!(SelectorList::parse("").is_none());
        assert!(SelectorList::parse("div p").is_none());
        assert!(SelectorList::parse("div > p").is_none());
        assert!(SelectorList::parse("a,,b").is_none());
        assert!(SelectorList::parse("[href]").is_none());
    }
}
