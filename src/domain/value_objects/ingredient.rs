//! Ingredient value objects - the closed vocabulary of things a sandwich is made of
//!
//! - `Bread`: slice kinds usable as a bottom or an optional top
//! - `Component`: fillings stacked between the slices
//! - `Ingredient`: tagged union over both, used by storage and errors

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of bread slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bread {
    /// Toast slice
    Toast,
    /// Baguette half
    Baguette,
    /// Rye slice
    Rye,
}

/// Kind of filling component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Tomato,
    Cheese,
    Salt,
    Cucumber,
    Ham,
}

/// Any ingredient: a bread or a component
///
/// This is the unit of currency for ingredient storage lookups and for
/// not-found errors, which carry the offending ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ingredient {
    Bread(Bread),
    Component(Component),
}

impl Ingredient {
    /// Returns true if this ingredient is a bread
    pub fn is_bread(&self) -> bool {
        matches!(self, Ingredient::Bread(_))
    }

    /// Returns true if this ingredient is a component
    pub fn is_component(&self) -> bool {
        matches!(self, Ingredient::Component(_))
    }
}

impl From<Bread> for Ingredient {
    fn from(bread: Bread) -> Self {
        Ingredient::Bread(bread)
    }
}

impl From<Component> for Ingredient {
    fn from(component: Component) -> Self {
        Ingredient::Component(component)
    }
}

impl std::fmt::Display for Bread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bread::Toast => write!(f, "toast"),
            Bread::Baguette => write!(f, "baguette"),
            Bread::Rye => write!(f, "rye"),
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Component::Tomato => write!(f, "tomato"),
            Component::Cheese => write!(f, "cheese"),
            Component::Salt => write!(f, "salt"),
            Component::Cucumber => write!(f, "cucumber"),
            Component::Ham => write!(f, "ham"),
        }
    }
}

impl std::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ingredient::Bread(bread) => write!(f, "{}", bread),
            Ingredient::Component(component) => write!(f, "{}", component),
        }
    }
}

impl FromStr for Bread {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toast" => Ok(Bread::Toast),
            "baguette" => Ok(Bread::Baguette),
            "rye" => Ok(Bread::Rye),
            other => Err(format!("unknown bread '{}'", other)),
        }
    }
}

impl FromStr for Component {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tomato" => Ok(Component::Tomato),
            "cheese" => Ok(Component::Cheese),
            "salt" => Ok(Component::Salt),
            "cucumber" => Ok(Component::Cucumber),
            "ham" => Ok(Component::Ham),
            other => Err(format!("unknown component '{}'", other)),
        }
    }
}

impl FromStr for Ingredient {
    type Err = String;

    /// Breads win ties; there are no overlapping names today.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(bread) = s.parse::<Bread>() {
            return Ok(Ingredient::Bread(bread));
        }
        if let Ok(component) = s.parse::<Component>() {
            return Ok(Ingredient::Component(component));
        }
        Err(format!("unknown ingredient '{}'", s))
    }
}
