//! Built-in sample programs, one per supported language.
//!
//! All three model the same thing (a `Person` with a greeting) so previews
//! are comparable across languages.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::PreviewError;

/// Languages the preview can highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Rust,
    Python,
    Go,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::Rust, Self::Python, Self::Go];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Python => "python",
            Self::Go => "go",
        }
    }

    /// Detect the language from a file extension.
    #[must_use]
    pub fn detect(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "rs" => Some(Self::Rust),
            "py" | "pyi" => Some(Self::Python),
            "go" => Some(Self::Go),
            _ => None,
        }
    }

    /// The sample program for this language.
    #[must_use]
    pub const fn snippet(self) -> &'static str {
        match self {
            Self::Rust => RUST,
            Self::Python => PYTHON,
            Self::Go => GO,
        }
    }

    pub(crate) fn grammar(self) -> tree_sitter::Language {
        match self {
            Self::Rust => tree_sitter_rust::LANGUAGE.into(),
            Self::Python => tree_sitter_python::LANGUAGE.into(),
            Self::Go => tree_sitter_go::LANGUAGE.into(),
        }
    }

    pub(crate) const fn highlights_query(self) -> &'static str {
        match self {
            Self::Rust => tree_sitter_rust::HIGHLIGHTS_QUERY,
            Self::Python => tree_sitter_python::HIGHLIGHTS_QUERY,
            Self::Go => tree_sitter_go::HIGHLIGHTS_QUERY,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = PreviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rust" | "rs" => Ok(Self::Rust),
            "python" | "py" => Ok(Self::Python),
            "go" | "golang" => Ok(Self::Go),
            _ => Err(PreviewError::UnsupportedLanguage(s.to_string())),
        }
    }
}

const RUST: &str = r#"// Rust code example
#[derive(Debug)]
struct Person {
    name: String,
    age: u32,
}

impl Person {
    fn new(name: &str, age: u32) -> Self {
        Self { name: name.to_string(), age }
    }

    fn greet(&self) {
        println!("Hello, my name is {} and I am {} years old.", self.name, self.age);
    }
}

fn main() {
    let person = Person::new("John Doe", 30);
    person.greet();
}
"#;

const PYTHON: &str = r#"# Python code example
class Person:
    def __init__(self, name, age):
        self.name = name
        self.age = age

    def greet(self):
        print(f"Hello, my name is {self.name} and I am {self.age} years old.")

person = Person("John Doe", 30)
person.greet()
"#;

const GO: &str = r#"// Go code example
package main

import "fmt"

type Person struct {
    Name string
    Age  int
}

func (p Person) Greet() {
    fmt.Printf("Hello, my name is %s and I am %d years old.\n", p.Name, p.Age)
}

func main() {
    person := Person{Name: "John Doe", Age: 30}
    person.Greet()
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for lang in Language::ALL {
            assert_eq!(lang.name().parse::<Language>().unwrap(), lang);
        }
        assert!("cobol".parse::<Language>().is_err());
    }

    #[test]
    fn detect_by_extension() {
        assert_eq!(Language::detect(Path::new("a/b.rs")), Some(Language::Rust));
        assert_eq!(Language::detect(Path::new("x.py")), Some(Language::Python));
        assert_eq!(Language::detect(Path::new("main.go")), Some(Language::Go));
        assert_eq!(Language::detect(Path::new("Makefile")), None);
    }

    #[test]
    fn snippets_open_with_a_comment() {
        for lang in Language::ALL {
            let first = lang.snippet().lines().next().unwrap();
            assert!(first.starts_with("//") || first.starts_with('#'), "{lang}: {first}");
        }
    }
}
