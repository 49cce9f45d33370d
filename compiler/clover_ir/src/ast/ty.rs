//! Type specifications and declaration modifiers.

use crate::Span;
use std::fmt;

/// A named type with optional type arguments.
///
/// `List<Map<K, V>>` is a `TypeSpec` named `List` owning one `Map`
/// argument, which owns `K` and `V`. A trailing `;` in source marks the
/// type nullable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeSpec {
    pub name: String,
    pub tparams: Vec<TypeSpec>,
    pub nullable: bool,
    pub span: Span,
}

impl TypeSpec {
    /// A non-nullable type with no arguments.
    pub fn named(name: impl Into<String>, span: Span) -> Self {
        TypeSpec {
            name: name.into(),
            tparams: Vec::new(),
            nullable: false,
            span,
        }
    }

    /// Nesting depth: 1 for a plain name, +1 per level of type arguments.
    pub fn depth(&self) -> usize {
        1 + self.tparams.iter().map(TypeSpec::depth).max().unwrap_or(0)
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.tparams.is_empty() {
            f.write_str("<")?;
            for (i, param) in self.tparams.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{param}")?;
            }
            f.write_str(">")?;
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}

/// One declaration modifier keyword.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    Static,
    Const,
    Pub,
}

impl Modifier {
    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Static => "static",
            Modifier::Const => "const",
            Modifier::Pub => "pub",
        }
    }

    fn letter(self) -> char {
        match self {
            Modifier::Static => 'S',
            Modifier::Const => 'C',
            Modifier::Pub => 'P',
        }
    }
}

/// The `static`/`const`/`pub` flags in front of a type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModifierSet {
    pub is_static: bool,
    pub is_const: bool,
    pub is_pub: bool,
    pub span: Span,
}

impl ModifierSet {
    pub fn contains(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Static => self.is_static,
            Modifier::Const => self.is_const,
            Modifier::Pub => self.is_pub,
        }
    }

    /// Set `modifier`. Returns `false` if it was already set.
    pub fn insert(&mut self, modifier: Modifier) -> bool {
        let slot = match modifier {
            Modifier::Static => &mut self.is_static,
            Modifier::Const => &mut self.is_const,
            Modifier::Pub => &mut self.is_pub,
        };
        let fresh = !*slot;
        *slot = true;
        fresh
    }

    pub fn is_empty(&self) -> bool {
        !(self.is_static || self.is_const || self.is_pub)
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("mod_spec [")?;
        for modifier in [Modifier::Static, Modifier::Const, Modifier::Pub] {
            if self.contains(modifier) {
                write!(f, "{}", modifier.letter())?;
            }
        }
        f.write_str("]")
    }
}
