use crate::config::ResolveConfig;

/// One import specifier as written in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier {
    pub request: String,
    pub kind: SpecKind,
}

/// Syntactic form the specifier was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    /// `import x from '...'`
    Static,
    /// `import '...'`
    SideEffect,
    /// `import('...')`
    Dynamic,
}

/// How a specifier picks its base directory during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecClass {
    Relative,
    Aliased,
    Bare,
}

impl Specifier {
    pub fn new(request: impl Into<String>, kind: SpecKind) -> Self {
        Self { request: request.into(), kind }
    }

    /// Classify this specifier against the configured alias table.
    pub fn class(&self, cfg: &ResolveConfig) -> SpecClass {
        SpecClass::of(&self.request, cfg)
    }
}

impl SpecClass {
    pub fn of(request: &str, cfg: &ResolveConfig) -> Self {
        if request.starts_with('.') {
            SpecClass::Relative
        } else if cfg.alias_for(request).is_some() {
            SpecClass::Aliased
        } else {
            SpecClass::Bare
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AliasRule;

    #[test]
    fn test_class_relative() {
        let cfg = ResolveConfig::default();
        assert_eq!(Specifier::new("./a", SpecKind::Static).class(&cfg), SpecClass::Relative);
        assert_eq!(Specifier::new("../a", SpecKind::Static).class(&cfg), SpecClass::Relative);
    }

    #[test]
    fn test_class_aliased() {
        let cfg = ResolveConfig::default();
        let spec = Specifier::new("@/utils/x", SpecKind::Dynamic);
        assert_eq!(spec.class(&cfg), SpecClass::Aliased);
    }

    #[test]
    fn test_class_bare() {
        let cfg = ResolveConfig::default();
        assert_eq!(Specifier::new("react", SpecKind::Static).class(&cfg), SpecClass::Bare);
        // Scoped packages are not the `@/` alias
        assert_eq!(Specifier::new("@scope/pkg", SpecKind::Static).class(&cfg), SpecClass::Bare);
    }

    #[test]
    fn test_class_alias_without_trailing_slash() {
        let cfg = ResolveConfig::default().with_aliases(vec![AliasRule::new("@", "src")]);
        assert_eq!(SpecClass::of("@/utils/x", &cfg), SpecClass::Aliased);
        assert_eq!(SpecClass::of("./x", &cfg), SpecClass::Relative);
    }
}
