use serde::{Deserialize, Serialize};

/// Type text as rendered by the semantic facility.
///
/// `fully_qualified` carries nullability markers when annotations were
/// enabled at the declaration site; `fully_qualified_sans_annotations` never
/// does. Two descriptors are compatible when their sans-annotation texts match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub fully_qualified: String,
    pub fully_qualified_sans_annotations: String,
    #[serde(default = "default_annotations_enabled")]
    pub annotations_enabled: bool,
}

fn default_annotations_enabled() -> bool {
    true
}

impl TypeDescriptor {
    pub fn new(
        fully_qualified: impl Into<String>,
        fully_qualified_sans_annotations: impl Into<String>,
        annotations_enabled: bool,
    ) -> Self {
        Self {
            fully_qualified: fully_qualified.into(),
            fully_qualified_sans_annotations: fully_qualified_sans_annotations.into(),
            annotations_enabled,
        }
    }

    /// A type whose text is the same with or without annotations (`int`, `global::System.DateTime`).
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(text.clone(), text, true)
    }

    /// Same type observed where nullability tracking is disabled.
    #[must_use]
    pub fn without_annotations(&self) -> Self {
        Self::new(
            self.fully_qualified_sans_annotations.clone(),
            self.fully_qualified_sans_annotations.clone(),
            false,
        )
    }

    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self.fully_qualified_sans_annotations == other.fully_qualified_sans_annotations
    }
}

/// A type reference on a member or parameter.
///
/// `display` is the facility's short identity (`int`,
/// `System.Threading.CancellationToken`) used to match well-known types.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub display: String,
    #[serde(flatten)]
    pub descriptor: TypeDescriptor,
}

impl TypeRef {
    /// Special types that render without qualification (`int`, `string`, `bool`).
    pub fn keyword(name: &str) -> Self {
        Self {
            display: name.to_string(),
            descriptor: TypeDescriptor::plain(name),
        }
    }

    /// A named type; rendered as `global::Namespace.Type`.
    pub fn named(qualified_name: &str) -> Self {
        Self {
            display: qualified_name.to_string(),
            descriptor: TypeDescriptor::plain(format!("global::{qualified_name}")),
        }
    }

    /// A nullable reference type (`string?`) observed with annotations enabled.
    #[must_use]
    pub fn nullable(self) -> Self {
        let sans = self.descriptor.fully_qualified_sans_annotations.clone();
        Self {
            display: format!("{}?", self.display),
            descriptor: TypeDescriptor::new(format!("{sans}?"), sans, true),
        }
    }

    /// The same reference observed where nullability tracking is disabled.
    #[must_use]
    pub fn in_disabled_context(self) -> Self {
        Self {
            display: self.display.trim_end_matches('?').to_string(),
            descriptor: self.descriptor.without_annotations(),
        }
    }

    /// Display identity without a trailing nullability marker.
    pub fn identity(&self) -> &str {
        self.display.trim_end_matches('?')
    }
}
